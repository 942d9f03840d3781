use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value::{Map, Value};
use crate::ErrorCode;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Nil => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int8(v) => serializer.serialize_i8(*v),
            Self::Int16(v) => serializer.serialize_i16(*v),
            Self::Int32(v) => serializer.serialize_i32(*v),
            Self::Int64(v) => serializer.serialize_i64(*v),
            Self::UInt8(v) => serializer.serialize_u8(*v),
            Self::UInt16(v) => serializer.serialize_u16(*v),
            Self::UInt32(v) => serializer.serialize_u32(*v),
            Self::UInt64(v) => serializer.serialize_u64(*v),
            Self::Float32(v) => serializer.serialize_f32(*v),
            Self::Float64(v) => serializer.serialize_f64(*v),
            Self::Text(s) => serializer.serialize_str(s),
            Self::Bytes(b) => serializer.serialize_bytes(b),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(map) => {
                let mut m = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    m.serialize_entry(k, v)?;
                }
                m.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

fn unsupported<E: serde::de::Error>() -> E {
    E::custom(ErrorCode::UnsupportedType)
}

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a hexpack value")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i8<E>(self, v: i8) -> Result<Self::Value, E> {
        Ok(Value::Int8(v))
    }

    fn visit_i16<E>(self, v: i16) -> Result<Self::Value, E> {
        Ok(Value::Int16(v))
    }

    fn visit_i32<E>(self, v: i32) -> Result<Self::Value, E> {
        Ok(Value::Int32(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Value::Int64(v))
    }

    fn visit_i128<E>(self, v: i128) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        if let Ok(v) = i64::try_from(v) {
            return Ok(Value::Int64(v));
        }
        u64::try_from(v)
            .map(Value::UInt64)
            .map_err(|_| unsupported())
    }

    fn visit_u8<E>(self, v: u8) -> Result<Self::Value, E> {
        Ok(Value::UInt8(v))
    }

    fn visit_u16<E>(self, v: u16) -> Result<Self::Value, E> {
        Ok(Value::UInt16(v))
    }

    fn visit_u32<E>(self, v: u32) -> Result<Self::Value, E> {
        Ok(Value::UInt32(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Value::UInt64(v))
    }

    fn visit_u128<E>(self, v: u128) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        u64::try_from(v)
            .map(Value::UInt64)
            .map_err(|_| unsupported())
    }

    fn visit_f32<E>(self, v: f32) -> Result<Self::Value, E> {
        Ok(Value::Float32(v))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Value::Float64(v))
    }

    fn visit_char<E>(self, v: char) -> Result<Self::Value, E> {
        let mut buf = [0u8; 4];
        Ok(Value::Text(String::from(v.encode_utf8(&mut buf))))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Value::Text(String::from(v)))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E> {
        Ok(Value::Text(v))
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E> {
        Ok(Value::Bytes(v.to_vec()))
    }

    fn visit_byte_buf<E>(self, v: Vec<u8>) -> Result<Self::Value, E> {
        Ok(Value::Bytes(v))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E> {
        Ok(Value::Nil)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E> {
        Ok(Value::Nil)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
        while let Some(v) = seq.next_element::<Value>()? {
            items.push(v);
        }
        Ok(Value::Array(items))
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut map = Map::new();
        while let Some((k, v)) = access.next_entry::<String, Value>()? {
            map.insert(k, v);
        }
        Ok(Value::Map(map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_bridge_keeps_structure() {
        let v: Value = serde_json::from_str(r#"{"a":[1,-2,"x",null,true,1.5]}"#).unwrap();
        let items = v.as_map().unwrap()["a"].as_array().unwrap();
        assert_eq!(items[0], Value::UInt64(1));
        assert_eq!(items[1], Value::Int64(-2));
        assert_eq!(items[2], Value::Text("x".into()));
        assert_eq!(items[3], Value::Nil);
        assert_eq!(items[4], Value::Bool(true));
        assert_eq!(items[5], Value::Float64(1.5));

        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"a":[1,-2,"x",null,true,1.5]}"#);
    }

    #[test]
    fn oversized_128_bit_integers_are_unsupported() {
        let err = ValueVisitor
            .visit_u128::<serde::de::value::Error>(u128::from(u64::MAX) + 1)
            .unwrap_err();
        assert_eq!(err.to_string(), "unsupported data type");

        let v = ValueVisitor
            .visit_i128::<serde::de::value::Error>(-5)
            .unwrap();
        assert_eq!(v, Value::Int64(-5));
    }
}

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// A string-keyed map of values.
pub type Map = BTreeMap<String, Value>;

/// A dynamic value that can be encoded and decoded.
///
/// Integer and float variants keep their exact width, so a decoded value compares equal to the
/// value that was encoded. Map keys are always text.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Nil.
    Nil,
    /// Boolean.
    Bool(bool),
    /// Signed 8-bit integer.
    Int8(i8),
    /// Signed 16-bit integer.
    Int16(i16),
    /// Signed 32-bit integer.
    Int32(i32),
    /// Signed 64-bit integer.
    Int64(i64),
    /// Unsigned 8-bit integer.
    UInt8(u8),
    /// Unsigned 16-bit integer.
    UInt16(u16),
    /// Unsigned 32-bit integer.
    UInt32(u32),
    /// Unsigned 64-bit integer.
    UInt64(u64),
    /// IEEE-754 binary32.
    Float32(f32),
    /// IEEE-754 binary64.
    Float64(f64),
    /// UTF-8 text; its wire length is the byte length.
    Text(String),
    /// Opaque bytes.
    Bytes(Vec<u8>),
    /// Ordered, heterogeneous sequence.
    Array(Vec<Value>),
    /// Text-keyed map.
    Map(Map),
}

/// The variant of a [`Value`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Kind {
    Nil,
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    Text,
    Bytes,
    Array,
    Map,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nil => "nil",
            Self::Bool => "bool",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::UInt8 => "uint8",
            Self::UInt16 => "uint16",
            Self::UInt32 => "uint32",
            Self::UInt64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Text => "text",
            Self::Bytes => "bytes",
            Self::Array => "array",
            Self::Map => "map",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Return the variant of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Nil => Kind::Nil,
            Self::Bool(_) => Kind::Bool,
            Self::Int8(_) => Kind::Int8,
            Self::Int16(_) => Kind::Int16,
            Self::Int32(_) => Kind::Int32,
            Self::Int64(_) => Kind::Int64,
            Self::UInt8(_) => Kind::UInt8,
            Self::UInt16(_) => Kind::UInt16,
            Self::UInt32(_) => Kind::UInt32,
            Self::UInt64(_) => Kind::UInt64,
            Self::Float32(_) => Kind::Float32,
            Self::Float64(_) => Kind::Float64,
            Self::Text(_) => Kind::Text,
            Self::Bytes(_) => Kind::Bytes,
            Self::Array(_) => Kind::Array,
            Self::Map(_) => Kind::Map,
        }
    }

    /// Returns `true` for [`Value::Nil`].
    #[inline]
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Return the boolean if this is a `Bool`.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Return any integer variant as `i64` if it fits.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Int8(v) => Some(i64::from(v)),
            Self::Int16(v) => Some(i64::from(v)),
            Self::Int32(v) => Some(i64::from(v)),
            Self::Int64(v) => Some(v),
            Self::UInt8(v) => Some(i64::from(v)),
            Self::UInt16(v) => Some(i64::from(v)),
            Self::UInt32(v) => Some(i64::from(v)),
            Self::UInt64(v) => i64::try_from(v).ok(),
            _ => None,
        }
    }

    /// Return any integer variant as `u64` if it is non-negative.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Self::UInt8(v) => Some(u64::from(v)),
            Self::UInt16(v) => Some(u64::from(v)),
            Self::UInt32(v) => Some(u64::from(v)),
            Self::UInt64(v) => Some(v),
            Self::Int8(_) | Self::Int16(_) | Self::Int32(_) | Self::Int64(_) => {
                self.as_i64().and_then(|v| u64::try_from(v).ok())
            }
            _ => None,
        }
    }

    /// Return either float variant widened to `f64`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Float32(v) => Some(f64::from(v)),
            Self::Float64(v) => Some(v),
            _ => None,
        }
    }

    /// Borrow the text if this is `Text`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the bytes if this is `Bytes`.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Borrow the elements if this is an `Array`.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the entries if this is a `Map`.
    #[must_use]
    pub const fn as_map(&self) -> Option<&Map> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }
}

macro_rules! impl_from {
    ($($t:ty => $variant:ident),* $(,)?) => {$(
        impl From<$t> for Value {
            #[inline]
            fn from(v: $t) -> Self {
                Self::$variant(v)
            }
        }
    )*};
}

impl_from!(
    bool => Bool,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
    f32 => Float32,
    f64 => Float64,
    String => Text,
    Vec<u8> => Bytes,
    Vec<Value> => Array,
    Map => Map,
);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(String::from(v))
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Self::Bytes(v.to_vec())
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Nil
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Nil, Into::into)
    }
}

impl<K: Into<String>, V: Into<Self>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Map(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn integer_accessors_widen() {
        assert_eq!(Value::Int8(-3).as_i64(), Some(-3));
        assert_eq!(Value::Int8(-3).as_u64(), None);
        assert_eq!(Value::UInt64(u64::MAX).as_i64(), None);
        assert_eq!(Value::UInt64(u64::MAX).as_u64(), Some(u64::MAX));
        assert_eq!(Value::Int32(7).as_u64(), Some(7));
        assert_eq!(Value::Text("x".into()).as_i64(), None);
    }

    #[test]
    fn kind_display() {
        assert_eq!(Value::UInt16(1).kind().to_string(), "uint16");
        assert_eq!(Value::Array(vec![]).kind(), Kind::Array);
    }

    #[test]
    fn map_from_iterator() {
        let v: Value = [("a", 1u8), ("b", 2u8)].into_iter().collect();
        let m = v.as_map().unwrap();
        assert_eq!(m.len(), 2);
        assert_eq!(m["b"], Value::UInt8(2));
    }
}

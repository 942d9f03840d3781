use alloc::string::String;
use alloc::vec::Vec;

use crate::cursor::Cursor;
use crate::hex::FixedHex;
use crate::tag;
use crate::utf8;
use crate::value::{Map, Value};
use crate::{DecodeLimits, Error, ErrorCode};

/// Recursive-descent parser over a caller-owned cursor.
struct Parser<'c, 'de> {
    cursor: &'c mut Cursor<'de>,
    limits: DecodeLimits,
}

impl Parser<'_, '_> {
    fn read_tag(&mut self) -> Result<(u8, usize), Error> {
        let off = self.cursor.position();
        let text = self.cursor.read_exact(2)?;
        let t = u8::parse_hex(text).map_err(|_| Error::new(ErrorCode::Truncated, off))?;
        Ok((t, off))
    }

    fn read_len32(&mut self, off: usize) -> Result<usize, Error> {
        let len = self.cursor.read_hex::<u32>()?;
        usize::try_from(len).map_err(|_| Error::new(ErrorCode::LengthOverflow, off))
    }

    fn enter(&self, depth: usize, off: usize) -> Result<usize, Error> {
        let next = depth + 1;
        if next > self.limits.max_depth {
            return Err(Error::new(ErrorCode::NestingTooDeep, off));
        }
        Ok(next)
    }

    fn value(&mut self, depth: usize) -> Result<Value, Error> {
        let (t, off) = self.read_tag()?;
        let v = match t {
            tag::NIL => Value::Nil,
            tag::FALSE => Value::Bool(false),
            tag::TRUE => Value::Bool(true),

            tag::INT_8 => Value::Int8(self.cursor.read_hex()?),
            tag::INT_16 => Value::Int16(self.cursor.read_hex()?),
            tag::INT_32 => Value::Int32(self.cursor.read_hex()?),
            tag::INT_64 => Value::Int64(self.cursor.read_hex()?),
            tag::UINT_8 => Value::UInt8(self.cursor.read_hex()?),
            tag::UINT_16 => Value::UInt16(self.cursor.read_hex()?),
            tag::UINT_32 => Value::UInt32(self.cursor.read_hex()?),
            tag::UINT_64 => Value::UInt64(self.cursor.read_hex()?),
            tag::FLOAT_32 => Value::Float32(self.cursor.read_hex()?),
            tag::FLOAT_64 => Value::Float64(self.cursor.read_hex()?),

            tag::STR_8 => {
                let len = usize::from(self.cursor.read_hex::<u8>()?);
                self.text(len, off)?
            }
            tag::STR_16 => {
                let len = usize::from(self.cursor.read_hex::<u16>()?);
                self.text(len, off)?
            }
            tag::STR_32 => {
                let len = self.read_len32(off)?;
                self.text(len, off)?
            }

            tag::BIN_8 => {
                let len = usize::from(self.cursor.read_hex::<u8>()?);
                self.bytes(len, off)?
            }
            tag::BIN_16 => {
                let len = usize::from(self.cursor.read_hex::<u16>()?);
                self.bytes(len, off)?
            }
            tag::BIN_32 => {
                let len = self.read_len32(off)?;
                self.bytes(len, off)?
            }

            tag::ARRAY_16 => {
                let len = usize::from(self.cursor.read_hex::<u16>()?);
                self.array(len, depth, off)?
            }
            tag::ARRAY_32 => {
                let len = self.read_len32(off)?;
                self.array(len, depth, off)?
            }
            tag::MAP_16 => {
                let len = usize::from(self.cursor.read_hex::<u16>()?);
                self.map(len, depth, off)?
            }
            tag::MAP_32 => {
                let len = self.read_len32(off)?;
                self.map(len, depth, off)?
            }

            0x00..=tag::POSITIVE_FIXINT_MAX => Value::UInt8(t),
            tag::FIXMAP_PREFIX..=0x8f => self.map(usize::from(t - tag::FIXMAP_PREFIX), depth, off)?,
            tag::FIXARRAY_PREFIX..=0x9f => {
                self.array(usize::from(t - tag::FIXARRAY_PREFIX), depth, off)?
            }
            tag::FIXSTR_PREFIX..=0xbf => self.text(usize::from(t - tag::FIXSTR_PREFIX), off)?,
            tag::NEGATIVE_FIXINT_MIN..=0xff => Value::Int8(i8::from_be_bytes([t])),

            _ => return Err(Error::new(ErrorCode::UnsupportedType, off)),
        };
        Ok(v)
    }

    fn text(&mut self, len: usize, off: usize) -> Result<Value, Error> {
        if len > self.limits.max_text_len {
            return Err(Error::new(ErrorCode::TextLenLimitExceeded, off));
        }
        let payload_off = self.cursor.position();
        let raw = self.cursor.read_exact(len)?;
        let s = utf8::validate(raw)
            .map_err(|()| Error::new(ErrorCode::InvalidUtf8, payload_off))?;
        Ok(Value::Text(String::from(s)))
    }

    fn bytes(&mut self, len: usize, off: usize) -> Result<Value, Error> {
        if len > self.limits.max_bytes_len {
            return Err(Error::new(ErrorCode::BytesLenLimitExceeded, off));
        }
        let raw = self.cursor.read_exact(len)?;
        Ok(Value::Bytes(raw.to_vec()))
    }

    fn check_elements_present(&self, len: usize) -> Result<(), Error> {
        if len > 0 && self.cursor.is_empty() {
            return Err(Error::new(ErrorCode::Truncated, self.cursor.position()));
        }
        Ok(())
    }

    fn array(&mut self, len: usize, depth: usize, off: usize) -> Result<Value, Error> {
        if len > self.limits.max_array_len {
            return Err(Error::new(ErrorCode::ArrayLenLimitExceeded, off));
        }
        let depth = self.enter(depth, off)?;
        self.check_elements_present(len)?;

        // Every element takes at least two bytes, so a forged count cannot over-reserve.
        let mut items = Vec::with_capacity(len.min(self.cursor.len_remaining() / 2));
        for _ in 0..len {
            items.push(self.value(depth)?);
        }
        Ok(Value::Array(items))
    }

    fn map(&mut self, len: usize, depth: usize, off: usize) -> Result<Value, Error> {
        if len > self.limits.max_map_len {
            return Err(Error::new(ErrorCode::MapLenLimitExceeded, off));
        }
        let depth = self.enter(depth, off)?;
        self.check_elements_present(len)?;

        let mut map = Map::new();
        for _ in 0..len {
            let key_off = self.cursor.position();
            let Value::Text(key) = self.value(depth)? else {
                return Err(Error::new(ErrorCode::NonStringKey, key_off));
            };
            let value = self.value(depth)?;
            // Duplicate keys: the last occurrence wins.
            map.insert(key, value);
        }
        Ok(Value::Map(map))
    }
}

/// Decode one value from `cursor` with default limits.
///
/// On success the cursor is left immediately after the value, so repeated calls decode
/// back-to-back values. On error the cursor position is unspecified and the cursor should be
/// discarded.
///
/// # Errors
///
/// Returns `Truncated` if the input ends before the value is complete, `MalformedNumber` for
/// non-hex numeric or length fields, `UnsupportedType` for unknown tags, `NonStringKey` for
/// non-text map keys, `InvalidUtf8` for text payloads that are not UTF-8, and `NestingTooDeep`
/// past the default depth limit.
pub fn decode(cursor: &mut Cursor<'_>) -> Result<Value, Error> {
    decode_with_limits(cursor, DecodeLimits::default())
}

/// Decode one value from `cursor`, enforcing `limits`.
///
/// # Errors
///
/// Same as [`decode`], plus the `*LimitExceeded` codes when a declared length exceeds `limits`.
pub fn decode_with_limits(cursor: &mut Cursor<'_>, limits: DecodeLimits) -> Result<Value, Error> {
    Parser { cursor, limits }.value(0)
}

/// Decode exactly one value occupying all of `bytes`.
///
/// # Errors
///
/// Same as [`decode`], plus `TrailingBytes` if input remains after the value.
pub fn from_slice(bytes: &[u8]) -> Result<Value, Error> {
    let mut cursor = Cursor::new(bytes);
    let v = decode(&mut cursor)?;
    if !cursor.is_empty() {
        return Err(Error::new(ErrorCode::TrailingBytes, cursor.position()));
    }
    Ok(v)
}

/// Decoder over a buffer holding zero or more back-to-back values.
///
/// As an [`Iterator`] it yields each value in turn and stops after the input is exhausted or
/// after the first error.
#[derive(Debug, Clone)]
pub struct Decoder<'de> {
    cursor: Cursor<'de>,
    limits: DecodeLimits,
    failed: bool,
}

impl<'de> Decoder<'de> {
    /// Construct a decoder over `bytes` with default limits.
    #[must_use]
    pub fn new(bytes: &'de [u8]) -> Self {
        Self::with_limits(bytes, DecodeLimits::default())
    }

    /// Construct a decoder over `bytes` with the provided limits.
    #[must_use]
    pub const fn with_limits(bytes: &'de [u8], limits: DecodeLimits) -> Self {
        Self {
            cursor: Cursor::new(bytes),
            limits,
            failed: false,
        }
    }

    /// Return the current byte offset in the input.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns `true` once all input has been consumed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cursor.is_empty()
    }

    /// Decode the next value.
    ///
    /// # Errors
    ///
    /// Same as [`decode_with_limits`].
    pub fn decode_value(&mut self) -> Result<Value, Error> {
        let res = decode_with_limits(&mut self.cursor, self.limits);
        if res.is_err() {
            self.failed = true;
        }
        res
    }
}

impl Iterator for Decoder<'_> {
    type Item = Result<Value, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.cursor.is_empty() {
            return None;
        }
        Some(self.decode_value())
    }
}

use alloc::vec::Vec;

use crate::hex::FixedHex;
use crate::limits::DEFAULT_MAX_DEPTH;
use crate::tag;
use crate::value::{Map, Value};
use crate::{Error, ErrorCode};

/// A tag plus its optional length/count field, chosen from the size ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Header {
    Fixed(u8),
    Len8(u8, u8),
    Len16(u8, u16),
    Len32(u8, u32),
}

impl Header {
    fn write(self, out: &mut Vec<u8>) {
        match self {
            Self::Fixed(t) => t.write_hex(out),
            Self::Len8(t, n) => {
                t.write_hex(out);
                n.write_hex(out);
            }
            Self::Len16(t, n) => {
                t.write_hex(out);
                n.write_hex(out);
            }
            Self::Len32(t, n) => {
                t.write_hex(out);
                n.write_hex(out);
            }
        }
    }
}

// Callers guarantee `len` is below the fixed-form limit, which is at most 32.
#[allow(clippy::cast_possible_truncation)]
const fn fixed(prefix: u8, len: usize) -> Header {
    Header::Fixed(prefix | len as u8)
}

fn ladder(len: usize, tag8: Option<u8>, tag16: u8, tag32: u8) -> Result<Header, ErrorCode> {
    if let Some(t) = tag8 {
        if let Ok(n) = u8::try_from(len) {
            return Ok(Header::Len8(t, n));
        }
    }
    if let Ok(n) = u16::try_from(len) {
        return Ok(Header::Len16(tag16, n));
    }
    if let Ok(n) = u32::try_from(len) {
        return Ok(Header::Len32(tag32, n));
    }
    Err(ErrorCode::UnsupportedSize)
}

fn text_header(len: usize) -> Result<Header, ErrorCode> {
    if len < tag::FIXSTR_LIMIT {
        return Ok(fixed(tag::FIXSTR_PREFIX, len));
    }
    ladder(len, Some(tag::STR_8), tag::STR_16, tag::STR_32)
}

fn bytes_header(len: usize) -> Result<Header, ErrorCode> {
    ladder(len, Some(tag::BIN_8), tag::BIN_16, tag::BIN_32)
}

fn array_header(len: usize) -> Result<Header, ErrorCode> {
    if len < tag::FIX_CONTAINER_LIMIT {
        return Ok(fixed(tag::FIXARRAY_PREFIX, len));
    }
    ladder(len, None, tag::ARRAY_16, tag::ARRAY_32)
}

fn map_header(len: usize) -> Result<Header, ErrorCode> {
    if len < tag::FIX_CONTAINER_LIMIT {
        return Ok(fixed(tag::FIXMAP_PREFIX, len));
    }
    ladder(len, None, tag::MAP_16, tag::MAP_32)
}

/// Streaming encoder that appends hexpack bytes to a `Vec<u8>`.
///
/// The per-variant methods write exactly one item each. Container headers written with
/// [`Encoder::array_header`] or [`Encoder::map_header`] must be followed by the declared number
/// of elements (or key/value pairs); [`Encoder::value`] does that bookkeeping itself.
#[derive(Debug, Clone)]
pub struct Encoder {
    buf: Vec<u8>,
    max_depth: usize,
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder {
    /// Create a new encoder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Create an encoder with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the nesting depth limit used by [`Encoder::value`].
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Return the number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if no bytes have been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Borrow the bytes emitted so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consume and return the encoded bytes.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }

    fn err(&self, code: ErrorCode) -> Error {
        Error::new(code, self.buf.len())
    }

    fn fixed_field<T: FixedHex>(&mut self, t: u8, v: T) {
        t.write_hex(&mut self.buf);
        v.write_hex(&mut self.buf);
    }

    /// Encode nil.
    pub fn nil(&mut self) {
        tag::NIL.write_hex(&mut self.buf);
    }

    /// Encode a boolean.
    pub fn bool(&mut self, v: bool) {
        let t = if v { tag::TRUE } else { tag::FALSE };
        t.write_hex(&mut self.buf);
    }

    /// Encode a signed 8-bit integer.
    pub fn i8(&mut self, v: i8) {
        self.fixed_field(tag::INT_8, v);
    }

    /// Encode a signed 16-bit integer.
    pub fn i16(&mut self, v: i16) {
        self.fixed_field(tag::INT_16, v);
    }

    /// Encode a signed 32-bit integer.
    pub fn i32(&mut self, v: i32) {
        self.fixed_field(tag::INT_32, v);
    }

    /// Encode a signed 64-bit integer.
    pub fn i64(&mut self, v: i64) {
        self.fixed_field(tag::INT_64, v);
    }

    /// Encode an unsigned 8-bit integer.
    pub fn u8(&mut self, v: u8) {
        self.fixed_field(tag::UINT_8, v);
    }

    /// Encode an unsigned 16-bit integer.
    pub fn u16(&mut self, v: u16) {
        self.fixed_field(tag::UINT_16, v);
    }

    /// Encode an unsigned 32-bit integer.
    pub fn u32(&mut self, v: u32) {
        self.fixed_field(tag::UINT_32, v);
    }

    /// Encode an unsigned 64-bit integer.
    pub fn u64(&mut self, v: u64) {
        self.fixed_field(tag::UINT_64, v);
    }

    /// Encode a binary32 float by its bit pattern.
    pub fn f32(&mut self, v: f32) {
        self.fixed_field(tag::FLOAT_32, v);
    }

    /// Encode a binary64 float by its bit pattern.
    pub fn f64(&mut self, v: f64) {
        self.fixed_field(tag::FLOAT_64, v);
    }

    /// Encode text. The payload is written as raw UTF-8 bytes.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedSize` if the byte length does not fit in 32 bits.
    pub fn text(&mut self, s: &str) -> Result<(), Error> {
        let header = text_header(s.len()).map_err(|code| self.err(code))?;
        header.write(&mut self.buf);
        self.buf.extend_from_slice(s.as_bytes());
        Ok(())
    }

    /// Encode opaque bytes. The payload is written unconverted.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedSize` if the length does not fit in 32 bits.
    pub fn bytes(&mut self, b: &[u8]) -> Result<(), Error> {
        let header = bytes_header(b.len()).map_err(|code| self.err(code))?;
        header.write(&mut self.buf);
        self.buf.extend_from_slice(b);
        Ok(())
    }

    /// Encode an array header declaring `len` elements.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedSize` if `len` does not fit in 32 bits.
    pub fn array_header(&mut self, len: usize) -> Result<(), Error> {
        let header = array_header(len).map_err(|code| self.err(code))?;
        header.write(&mut self.buf);
        Ok(())
    }

    /// Encode a map header declaring `len` key/value pairs.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedSize` if `len` does not fit in 32 bits.
    pub fn map_header(&mut self, len: usize) -> Result<(), Error> {
        let header = map_header(len).map_err(|code| self.err(code))?;
        header.write(&mut self.buf);
        Ok(())
    }

    /// Encode a full value tree.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedSize` for oversized text, bytes, or containers, and `NestingTooDeep`
    /// if containers nest deeper than the configured depth limit.
    pub fn value(&mut self, v: &Value) -> Result<(), Error> {
        self.value_at(v, 0)
    }

    fn enter(&self, depth: usize) -> Result<usize, Error> {
        let next = depth + 1;
        if next > self.max_depth {
            return Err(self.err(ErrorCode::NestingTooDeep));
        }
        Ok(next)
    }

    fn value_at(&mut self, v: &Value, depth: usize) -> Result<(), Error> {
        match v {
            Value::Nil => self.nil(),
            Value::Bool(b) => self.bool(*b),
            Value::Int8(n) => self.i8(*n),
            Value::Int16(n) => self.i16(*n),
            Value::Int32(n) => self.i32(*n),
            Value::Int64(n) => self.i64(*n),
            Value::UInt8(n) => self.u8(*n),
            Value::UInt16(n) => self.u16(*n),
            Value::UInt32(n) => self.u32(*n),
            Value::UInt64(n) => self.u64(*n),
            Value::Float32(f) => self.f32(*f),
            Value::Float64(f) => self.f64(*f),
            Value::Text(s) => self.text(s)?,
            Value::Bytes(b) => self.bytes(b)?,
            Value::Array(items) => {
                let depth = self.enter(depth)?;
                self.array_header(items.len())?;
                for item in items {
                    self.value_at(item, depth)?;
                }
            }
            Value::Map(map) => self.map_at(map, depth)?,
        }
        Ok(())
    }

    fn map_at(&mut self, map: &Map, depth: usize) -> Result<(), Error> {
        let depth = self.enter(depth)?;
        self.map_header(map.len())?;
        for (k, v) in map {
            self.text(k)?;
            self.value_at(v, depth)?;
        }
        Ok(())
    }
}

/// Encode `value` into a new buffer.
///
/// # Errors
///
/// Returns `UnsupportedSize` if any text, bytes, or container length exceeds the 32-bit size
/// ladder, or `NestingTooDeep` if nesting exceeds [`DEFAULT_MAX_DEPTH`].
pub fn encode(value: &Value) -> Result<Vec<u8>, Error> {
    let mut enc = Encoder::new();
    enc.value(value)?;
    Ok(enc.into_vec())
}

/// Append the encoding of `value` to `out`.
///
/// On error `out` is truncated back to its original length.
///
/// # Errors
///
/// Same as [`encode`]. Offsets count the bytes already present in `out`.
pub fn encode_into(value: &Value, out: &mut Vec<u8>) -> Result<(), Error> {
    let start = out.len();
    let mut enc = Encoder {
        buf: core::mem::take(out),
        max_depth: DEFAULT_MAX_DEPTH,
    };
    let res = enc.value(value);
    *out = enc.into_vec();
    if res.is_err() {
        out.truncate(start);
    }
    res
}

use crate::hex::FixedHex;
use crate::{Error, ErrorCode};

/// A read position over an in-memory encoded buffer.
///
/// Every decode step advances the cursor past the bytes it consumed, so repeated
/// [`decode`](crate::decode) calls over one cursor yield back-to-back values. Error offsets are
/// absolute positions in the underlying buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Start a cursor at the beginning of `data`.
    #[inline]
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Start a cursor at `pos`. Positions past the end are clamped to the end.
    #[inline]
    #[must_use]
    pub const fn with_pos(data: &'a [u8], pos: usize) -> Self {
        let pos = if pos > data.len() { data.len() } else { pos };
        Self { data, pos }
    }

    /// Current absolute offset into the buffer.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// The whole underlying buffer.
    #[inline]
    #[must_use]
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    /// The bytes not yet consumed.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Number of bytes not yet consumed.
    #[inline]
    #[must_use]
    pub const fn len_remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns `true` once every byte has been consumed.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Consume exactly `n` raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `Truncated` if fewer than `n` bytes remain; the cursor is left unchanged.
    pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8], Error> {
        let off = self.pos;
        let end = off
            .checked_add(n)
            .ok_or_else(|| Error::new(ErrorCode::LengthOverflow, off))?;
        if end > self.data.len() {
            return Err(Error::new(ErrorCode::Truncated, off));
        }
        let s = &self.data[off..end];
        self.pos = end;
        Ok(s)
    }

    /// Consume and parse one fixed-width hex field.
    ///
    /// # Errors
    ///
    /// Returns `Truncated` if fewer than `T::HEX_LEN` bytes remain, or `MalformedNumber` if the
    /// field is not valid hex.
    pub fn read_hex<T: FixedHex>(&mut self) -> Result<T, Error> {
        let off = self.pos;
        let text = self.read_exact(T::HEX_LEN)?;
        T::parse_hex(text).map_err(|err| err.shifted(off))
    }
}

//! Fixed-width hex text rendering for numeric header fields.
//!
//! Every tag, length prefix, and numeric payload on the wire is written as lowercase ASCII hex,
//! two characters per byte, most-significant nibble first and zero-padded to the full width of
//! the type. Signed integers are rendered from their two's-complement bit pattern, so `-1i8` is
//! `"ff"` and never `"-1"`. Floats are rendered from their IEEE-754 bit pattern, which matches the
//! hex of their big-endian byte representation.

use alloc::string::String;
use alloc::vec::Vec;

use crate::{Error, ErrorCode};

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// A numeric type with a fixed-width hex text representation.
///
/// The bit width is carried by the type: `HEX_LEN` is `bits / 4`.
pub trait FixedHex: Sized + Copy {
    /// Number of hex characters in the rendered form.
    const HEX_LEN: usize;

    /// Append exactly `HEX_LEN` lowercase hex characters to `out`.
    fn write_hex(self, out: &mut Vec<u8>);

    /// Parse exactly `HEX_LEN` hex characters.
    ///
    /// Upper-case digits are accepted. Signs, prefixes, and separators are not.
    ///
    /// # Errors
    ///
    /// Returns `MalformedNumber` if `text` has the wrong length or contains a non-hex character.
    /// The error offset is the index of the offending character within `text`.
    fn parse_hex(text: &[u8]) -> Result<Self, Error>;
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn push_hex_bits(out: &mut Vec<u8>, bits: u64, nibbles: usize) {
    out.reserve(nibbles);
    for i in (0..nibbles).rev() {
        let nibble = (bits >> (i * 4)) & 0x0f;
        out.push(DIGITS[nibble as usize]);
    }
}

#[inline]
const fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_bits(text: &[u8], nibbles: usize) -> Result<u64, Error> {
    if text.len() != nibbles {
        return Err(Error::new(ErrorCode::MalformedNumber, 0));
    }
    let mut acc = 0u64;
    for (i, &c) in text.iter().enumerate() {
        let n = nibble(c).ok_or(Error::new(ErrorCode::MalformedNumber, i))?;
        acc = (acc << 4) | u64::from(n);
    }
    Ok(acc)
}

macro_rules! impl_unsigned {
    ($($t:ty),* $(,)?) => {$(
        impl FixedHex for $t {
            const HEX_LEN: usize = core::mem::size_of::<$t>() * 2;

            #[inline]
            fn write_hex(self, out: &mut Vec<u8>) {
                push_hex_bits(out, u64::from(self), Self::HEX_LEN);
            }

            #[inline]
            fn parse_hex(text: &[u8]) -> Result<Self, Error> {
                let bits = parse_hex_bits(text, Self::HEX_LEN)?;
                Self::try_from(bits).map_err(|_| Error::new(ErrorCode::MalformedNumber, 0))
            }
        }
    )*};
}

// Signed values travel as the same-width unsigned bit pattern.
macro_rules! impl_signed {
    ($($t:ty => $u:ty),* $(,)?) => {$(
        impl FixedHex for $t {
            const HEX_LEN: usize = <$u as FixedHex>::HEX_LEN;

            #[inline]
            #[allow(clippy::cast_sign_loss)]
            fn write_hex(self, out: &mut Vec<u8>) {
                (self as $u).write_hex(out);
            }

            #[inline]
            #[allow(clippy::cast_possible_wrap)]
            fn parse_hex(text: &[u8]) -> Result<Self, Error> {
                <$u as FixedHex>::parse_hex(text).map(|bits| bits as $t)
            }
        }
    )*};
}

macro_rules! impl_float {
    ($($t:ty => $u:ty),* $(,)?) => {$(
        impl FixedHex for $t {
            const HEX_LEN: usize = <$u as FixedHex>::HEX_LEN;

            #[inline]
            fn write_hex(self, out: &mut Vec<u8>) {
                self.to_bits().write_hex(out);
            }

            #[inline]
            fn parse_hex(text: &[u8]) -> Result<Self, Error> {
                <$u as FixedHex>::parse_hex(text).map(<$t>::from_bits)
            }
        }
    )*};
}

impl_unsigned!(u8, u16, u32, u64);
impl_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64);
impl_float!(f32 => u32, f64 => u64);

/// Render `value` as its fixed-width hex text.
///
/// ```
/// assert_eq!(hexpack::encode_fixed_hex(127i8), "7f");
/// assert_eq!(hexpack::encode_fixed_hex(-2i16), "fffe");
/// assert_eq!(hexpack::encode_fixed_hex(3.14f64), "40091eb851eb851f");
/// ```
#[must_use]
pub fn encode_fixed_hex<T: FixedHex>(value: T) -> String {
    let mut out = Vec::with_capacity(T::HEX_LEN);
    value.write_hex(&mut out);
    out.into_iter().map(char::from).collect()
}

/// Parse fixed-width hex text into `T`.
///
/// Signedness and width are selected by `T`; signed targets narrow the parsed bit pattern by
/// two's complement.
///
/// # Errors
///
/// Returns `MalformedNumber` if `text` is not exactly `T::HEX_LEN` hex characters.
pub fn decode_fixed_hex<T: FixedHex>(text: &[u8]) -> Result<T, Error> {
    T::parse_hex(text)
}

//! Tag byte constants.
//!
//! A tag is always written as two hex characters. For the fixed forms the tag's numeric range
//! carries a small value or count, so no separate length field follows.

// Nil
pub const NIL: u8 = 0xc0;

// Boolean
pub const FALSE: u8 = 0xc2;
pub const TRUE: u8 = 0xc3;

// Binary
pub const BIN_8: u8 = 0xc4;
pub const BIN_16: u8 = 0xc5;
pub const BIN_32: u8 = 0xc6;

// Float (IEEE 754)
pub const FLOAT_32: u8 = 0xca;
pub const FLOAT_64: u8 = 0xcb;

// Unsigned integer
pub const UINT_8: u8 = 0xcc;
pub const UINT_16: u8 = 0xcd;
pub const UINT_32: u8 = 0xce;
pub const UINT_64: u8 = 0xcf;

// Signed integer
pub const INT_8: u8 = 0xd0;
pub const INT_16: u8 = 0xd1;
pub const INT_32: u8 = 0xd2;
pub const INT_64: u8 = 0xd3;

// String
pub const STR_8: u8 = 0xd9;
pub const STR_16: u8 = 0xda;
pub const STR_32: u8 = 0xdb;

// Array
pub const ARRAY_16: u8 = 0xdc;
pub const ARRAY_32: u8 = 0xdd;

// Map
pub const MAP_16: u8 = 0xde;
pub const MAP_32: u8 = 0xdf;

// Fixed forms.
// POSITIVE_FIXINT: 0x00..=0x7f, the tag is the value
// FIXMAP:   0x80..=0x8f, low nibble = pair count
// FIXARRAY: 0x90..=0x9f, low nibble = element count
// FIXSTR:   0xa0..=0xbf, low five bits = byte length
// NEGATIVE_FIXINT: 0xe0..=0xff, the tag read as i8 (-32..=-1)
pub const POSITIVE_FIXINT_MAX: u8 = 0x7f;
pub const FIXMAP_PREFIX: u8 = 0x80;
pub const FIXARRAY_PREFIX: u8 = 0x90;
pub const FIXSTR_PREFIX: u8 = 0xa0;
pub const NEGATIVE_FIXINT_MIN: u8 = 0xe0;

/// Exclusive upper bound on the count a fixmap or fixarray can carry.
pub const FIX_CONTAINER_LIMIT: usize = 1 << 4;
/// Exclusive upper bound on the byte length a fixstr can carry.
pub const FIXSTR_LIMIT: usize = 1 << 5;

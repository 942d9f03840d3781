//! # hexpack
//!
//! A MessagePack-family codec for dynamic values with a hybrid wire layout: tags, length
//! prefixes, and fixed-width numeric payloads are written as **lowercase ASCII hex text** (two
//! characters per byte), while text and binary payloads are written as **raw octets**.
//!
//! ```
//! use hexpack::{decode, encode, Cursor, Value};
//!
//! let bytes = encode(&Value::from("hello")).unwrap();
//! assert_eq!(bytes, b"a5hello");
//!
//! let mut cursor = Cursor::new(&bytes);
//! assert_eq!(decode(&mut cursor).unwrap(), Value::from("hello"));
//! assert!(cursor.is_empty());
//! ```
//!
//! ## Wire format
//!
//! | Value | Encoding |
//! |---|---|
//! | nil / false / true | `c0` / `c2` / `c3` |
//! | int8..int64 | `d0`..`d3` + two's-complement hex, 2/4/8/16 chars |
//! | uint8..uint64 | `cc`..`cf` + hex, 2/4/8/16 chars |
//! | float32 / float64 | `ca` / `cb` + IEEE-754 bit pattern as hex |
//! | text | `a0 + len` (len < 32), else `d9`/`da`/`db` + 1/2/4-byte hex length, then raw bytes |
//! | bytes | `c4`/`c5`/`c6` + 1/2/4-byte hex length, then raw bytes |
//! | array | `90 + n` (n < 16), else `dc`/`dd` + 2/4-byte hex count, then elements |
//! | map | `80 + n` (n < 16), else `de`/`df` + 2/4-byte hex count, then key/value pairs |
//!
//! Decoding also accepts positive fixints (`00`..`7f`, decoded as `UInt8`) and negative fixints
//! (`e0`..`ff`, decoded as `Int8`), which the encoder never emits.
//!
//! Lengths wider than 32 bits are rejected with [`ErrorCode::UnsupportedSize`]. Nesting deeper
//! than [`DEFAULT_MAX_DEPTH`] is rejected with [`ErrorCode::NestingTooDeep`] in both directions.
//!
//! ## Feature flags
//!
//! - `std` *(default)*: implements `std::error::Error` for [`Error`].
//! - `serde`: implements `Serialize`/`Deserialize` for [`Value`].
//! - `simdutf8`: enables SIMD-accelerated UTF-8 validation of decoded text.
//!
//! ## `no_std`
//!
//! Without `std` the crate is `no_std` and requires `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

extern crate alloc;

mod cursor;
mod decode;
mod encode;
mod error;
mod hex;
mod limits;
#[cfg(feature = "serde")]
mod serde_impl;
mod tag;
mod utf8;
mod value;

pub use crate::cursor::Cursor;
pub use crate::decode::{decode, decode_with_limits, from_slice, Decoder};
pub use crate::encode::{encode, encode_into, Encoder};
pub use crate::error::{Error, ErrorCode};
pub use crate::hex::{decode_fixed_hex, encode_fixed_hex, FixedHex};
pub use crate::limits::{DecodeLimits, DEFAULT_MAX_DEPTH, MAX_LADDER_LEN};
pub use crate::value::{Kind, Map, Value};

use core::fmt;

/// A structured error code identifying why a value could not be encoded or decoded.
///
/// The enum is string-free so it stays usable without `std`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The tag byte (or a foreign input value) has no representation in the format.
    UnsupportedType,
    /// A length or count does not fit the 32-bit size ladder.
    UnsupportedSize,
    /// The input ended before a declared field was complete.
    Truncated,
    /// A numeric or length field is not hex text of the expected width.
    MalformedNumber,
    /// A decoded map key was not a text value.
    NonStringKey,
    /// Nesting depth limit exceeded.
    NestingTooDeep,

    /// Decoded text payload is not valid UTF-8.
    InvalidUtf8,
    /// Bytes remain after the single expected value.
    TrailingBytes,
    /// Arithmetic overflow while computing a length or offset.
    LengthOverflow,

    /// Array length exceeds the configured decode limits.
    ArrayLenLimitExceeded,
    /// Map length exceeds the configured decode limits.
    MapLenLimitExceeded,
    /// Text length exceeds the configured decode limits.
    TextLenLimitExceeded,
    /// Byte string length exceeds the configured decode limits.
    BytesLenLimitExceeded,
}

impl ErrorCode {
    const fn message(self) -> &'static str {
        match self {
            Self::UnsupportedType => "unsupported data type",
            Self::UnsupportedSize => "length exceeds 32-bit size ladder",
            Self::Truncated => "unexpected end of input",
            Self::MalformedNumber => "malformed hex number",
            Self::NonStringKey => "map key is not a string",
            Self::NestingTooDeep => "nesting depth limit exceeded",

            Self::InvalidUtf8 => "text must be valid UTF-8",
            Self::TrailingBytes => "trailing bytes after single value",
            Self::LengthOverflow => "length overflow",

            Self::ArrayLenLimitExceeded => "array length exceeds decode limits",
            Self::MapLenLimitExceeded => "map length exceeds decode limits",
            Self::TextLenLimitExceeded => "text length exceeds decode limits",
            Self::BytesLenLimitExceeded => "byte string length exceeds decode limits",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A hexpack error with a stable code and a byte offset.
///
/// For decoding, `offset` is the absolute position in the input buffer where the failing field
/// starts. For encoding, it is the number of output bytes written when the failure was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Error {
    /// The error code.
    pub code: ErrorCode,
    /// Byte offset associated with the failure.
    pub offset: usize,
}

impl Error {
    /// Construct an error at `offset`.
    #[inline]
    #[must_use]
    pub const fn new(code: ErrorCode, offset: usize) -> Self {
        Self { code, offset }
    }

    /// Rebase a relative offset onto `base`.
    ///
    /// Used when a sub-slice parser reports positions relative to the slice it was given.
    #[inline]
    #[must_use]
    pub const fn shifted(self, base: usize) -> Self {
        Self {
            code: self.code,
            offset: self.offset.saturating_add(base),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hexpack error at {}: {}", self.offset, self.code)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

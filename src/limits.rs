/// Default maximum nesting depth limit for both encoding and decoding.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Largest length or count the 32-bit size ladder can express.
#[allow(clippy::cast_possible_truncation)]
pub const MAX_LADDER_LEN: usize = u32::MAX as usize;

/// Decode-time resource limits.
///
/// The default only bounds nesting depth; every length limit sits at the ceiling of the wire
/// format's size ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeLimits {
    /// Maximum nesting depth. Every array or map counts one level, empty ones included.
    pub max_depth: usize,
    /// Maximum array length.
    pub max_array_len: usize,
    /// Maximum map length (pairs).
    pub max_map_len: usize,
    /// Maximum text length in UTF-8 bytes.
    pub max_text_len: usize,
    /// Maximum byte-string length.
    pub max_bytes_len: usize,
}

impl DecodeLimits {
    /// Construct conservative limits derived from a maximum message size.
    ///
    /// Lengths are capped by `max_message_bytes`, and array/map counts by half of it since every
    /// element occupies at least two bytes on the wire.
    #[must_use]
    pub const fn for_bytes(max_message_bytes: usize) -> Self {
        let max_container_len = max_message_bytes / 2;
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_array_len: max_container_len,
            max_map_len: max_container_len,
            max_text_len: max_message_bytes,
            max_bytes_len: max_message_bytes,
        }
    }

    /// Return a copy with a different depth limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_array_len: MAX_LADDER_LEN,
            max_map_len: MAX_LADDER_LEN,
            max_text_len: MAX_LADDER_LEN,
            max_bytes_len: MAX_LADDER_LEN,
        }
    }
}

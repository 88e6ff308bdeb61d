/// Errors raised while decoding BER/DER input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    // Header errors
    #[error("decode: input truncated")]
    Truncated,
    #[error("decode: invalid tag encoding")]
    InvalidTag,
    #[error("decode: invalid length encoding")]
    InvalidLength,
    #[error("decode: indefinite length not allowed here")]
    IndefiniteLength,
    #[error("decode: nesting deeper than {limit} levels")]
    DepthExceeded { limit: usize },
    #[error("decode: {0} trailing bytes after value")]
    TrailingData(usize),

    // Content errors
    #[error("decode: invalid {kind} content: {reason}")]
    InvalidContent {
        kind: &'static str,
        reason: &'static str,
    },
    #[error("decode: universal tag {0} has no supported form")]
    UnsupportedUniversal(u32),
}

impl DecodeError {
    /// Shorthand for [`DecodeError::InvalidContent`].
    pub fn content(kind: &'static str, reason: &'static str) -> Self {
        DecodeError::InvalidContent { kind, reason }
    }
}

/// Errors raised while encoding a value tree to DER.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("encode: invalid tag class {0:?}")]
    InvalidTagClass(String),
    #[error("encode: invalid tagging {0:?}")]
    InvalidTagging(String),
    #[error("encode: tag number {0} for universal too large")]
    UniversalTagTooLarge(u32),
    #[error("encode: {expected} expects a {expected_value} value, got {found}")]
    ValueMismatch {
        expected: &'static str,
        expected_value: &'static str,
        found: &'static str,
    },
    #[error("encode: invalid object identifier {0:?}")]
    InvalidOid(String),
    #[error("encode: time outside the encodable range")]
    TimeOutOfRange,
    #[error("encode: UTCTime cannot carry fractional seconds")]
    TimePrecision,
    #[error("encode: invalid unused bit count {0}")]
    InvalidUnusedBits(u8),
}

/// Any ASN.1 codec failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Asn1Error {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

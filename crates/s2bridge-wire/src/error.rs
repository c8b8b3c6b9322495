//! Error types for the wire layer.
//!
//! These only cover turning bytes into wire messages and back. A wire
//! message that parses but violates a domain rule is not a wire error; that
//! is reported by the mapping layer.

/// Errors that can occur while encoding or decoding wire bytes.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization of a wire message failed.
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// The bytes are not a well-formed wire message of the expected shape.
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),
}

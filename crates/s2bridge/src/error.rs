//! Unified error type for s2bridge.

use s2bridge_mapping::MappingError;
use s2bridge_wire::ProtocolError;

/// Top-level error for operations that span bytes and domain objects.
///
/// Entity codecs return [`MappingError`] directly. This type only appears
/// where a byte codec is involved as well, e.g. [`decode_bytes`](crate::decode_bytes).
#[derive(Debug, thiserror::Error)]
pub enum S2BridgeError {
    /// The bytes were not a wire message of the expected shape.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The wire message violated a domain invariant.
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mapping_error() {
        let err: S2BridgeError = MappingError::MissingRequiredField { name: "creep" }.into();
        assert!(matches!(err, S2BridgeError::Mapping(_)));
        assert_eq!(err.to_string(), "creep is required");
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_from_protocol_error() {
        let json_err = serde_json::from_str::<u32>("x").unwrap_err();
        let err: S2BridgeError = ProtocolError::Decode(json_err).into();
        assert!(matches!(err, S2BridgeError::Protocol(_)));
        assert!(err.to_string().starts_with("decode failed"));
    }
}

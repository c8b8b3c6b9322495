//! Byte codecs for wire messages.
//!
//! A [`Codec`] turns a wire message into bytes and back. The mapping layer
//! above never sees bytes; it works on already-decoded wire messages. The
//! codec exists so callers (and tests) can move wire messages in and out of
//! a serialized form without picking a format themselves.
//!
//! [`JsonCodec`] is the only implementation today. It is human-readable,
//! which makes fixtures easy to write and failures easy to read.

use serde::{Serialize, de::DeserializeOwned};

use crate::ProtocolError;

/// A codec that can encode wire messages to bytes and decode bytes back.
///
/// ## Trait bounds explained
///
/// - `Send + Sync`: one codec value can be shared between threads. A
///   client that reads responses on one thread and writes requests on
///   another keeps a single codec for both.
/// - `'static`: the codec borrows nothing. It can live in a long-lived
///   connection object or a `static` without lifetime plumbing.
///
/// ## Generic methods
///
/// `encode` and `decode` are generic over the message type, so one codec
/// serves every wire message:
/// - `encode<T: Serialize>`: any message can be turned into bytes.
/// - `decode<T: DeserializeOwned>`: any message can be built from bytes.
///
/// `DeserializeOwned` (rather than `Deserialize<'de>`) means the decoded
/// message owns its strings and pixel buffers. The input bytes can be
/// dropped or reused as soon as `decode` returns.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a wire message into bytes.
    ///
    /// # Errors
    /// Returns `ProtocolError::Encode` if serialization fails.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError>;

    /// Deserializes bytes back into a wire message.
    ///
    /// # Errors
    /// Returns `ProtocolError::Decode` if the bytes are malformed,
    /// truncated, or don't match the expected shape.
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] that uses JSON (via `serde_json`).
///
/// Absent optional fields may be written either as a missing key or as
/// `null`; both decode to an unset field. Encoding writes `null`.
///
/// This is behind the `json` feature flag (enabled by default).
///
/// ## Example
///
/// ```rust
/// use s2bridge_wire::{Codec, JsonCodec, MapState};
///
/// let codec = JsonCodec;
/// let map: MapState = codec.decode(br#"{"visibility": null}"#).unwrap();
/// assert!(!map.has_visibility());
/// assert!(!map.has_creep());
///
/// let bytes = codec.encode(&map).unwrap();
/// let again: MapState = codec.decode(&bytes).unwrap();
/// assert_eq!(map, again);
/// ```
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError> {
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }
}

//! The per-entity codec contract and byte-level helpers.
//!
//! Every domain entity implements [`WireCodec`]: a pure `decode` from its
//! wire message and a total `encode` back to it. `decode` is the only place
//! where an absent wire field becomes either a domain error or `None`;
//! `encode` is the only place where `None` becomes an absent wire field.

use s2bridge_mapping::MappingError;
use s2bridge_wire::Codec;
use serde::{Serialize, de::DeserializeOwned};

use crate::{Catalog, S2BridgeError};

/// Paired decode/encode between a domain entity and its wire message.
///
/// ## The two directions
///
/// - `decode` is partial. It probes each field for presence, runs the
///   shared checks from [`s2bridge_mapping::validate`], resolves ids
///   through the [`Catalog`], and stops at the first violation.
/// - `encode` is total. Every value it can see was built by `decode` or by
///   a builder that ran the same checks, so there is nothing left to fail.
///
/// Together they satisfy `decode(encode(x)) == x` for every constructible
/// `x`. Constructors reject anything the wire cannot carry (a dimension
/// above `i32::MAX`, say), and `encode` never clamps.
///
/// ## The catalog parameter
///
/// Ability and buff tables belong to the running game, not to this crate.
/// Each call receives `&C`, so decoding stays pure and tests can swap in
/// a [`StaticCatalog`](crate::StaticCatalog) with a handful of entries.
/// The `?Sized` bound also admits `&dyn Catalog`.
///
/// ## Example
///
/// ```rust
/// use s2bridge::prelude::*;
/// use s2bridge_wire as wire;
///
/// let msg = wire::Point2D { x: Some(1.5), y: None };
/// let err = Point2d::decode(&msg, &StaticCatalog::default()).unwrap_err();
/// assert_eq!(err, MappingError::MissingRequiredField { name: "y" });
///
/// let point = Point2d::new(1.5, 0.0);
/// assert_eq!(Point2d::decode(&point.encode(), &StaticCatalog::default()), Ok(point));
/// ```
pub trait WireCodec: Sized {
    /// The wire message this entity maps to.
    type Wire;

    /// Human-readable entity name used in logs and [`MappingError::NullInput`].
    const ENTITY: &'static str;

    /// Builds the entity from a wire message, enforcing every invariant.
    ///
    /// # Errors
    /// The first violated invariant, naming the offending field.
    fn decode<C: Catalog + ?Sized>(wire: &Self::Wire, catalog: &C) -> Result<Self, MappingError>;

    /// Produces the wire message. Never fails: construction already
    /// guaranteed the entity is valid.
    fn encode(&self) -> Self::Wire;

    /// [`decode`](Self::decode), logging the outcome.
    fn decode_wire<C: Catalog + ?Sized>(
        wire: &Self::Wire,
        catalog: &C,
    ) -> Result<Self, MappingError> {
        let result = Self::decode(wire, catalog);
        match &result {
            Ok(_) => tracing::trace!(entity = Self::ENTITY, "decoded wire message"),
            Err(e) => tracing::debug!(entity = Self::ENTITY, error = %e, "rejected wire message"),
        }
        result
    }

    /// Decodes a message that may be missing altogether.
    ///
    /// # Errors
    /// [`MappingError::NullInput`] if `wire` is `None`, otherwise as
    /// [`decode`](Self::decode).
    fn decode_optional<C: Catalog + ?Sized>(
        wire: Option<&Self::Wire>,
        catalog: &C,
    ) -> Result<Self, MappingError> {
        let Some(wire) = wire else {
            tracing::debug!(entity = Self::ENTITY, "wire message absent");
            return Err(MappingError::NullInput { name: Self::ENTITY });
        };
        Self::decode_wire(wire, catalog)
    }
}

/// Parses bytes with `codec` and decodes the resulting wire message.
///
/// # Errors
/// [`S2BridgeError::Protocol`] for unparseable bytes,
/// [`S2BridgeError::Mapping`] for a parseable but invalid message.
pub fn decode_bytes<T, K, C>(codec: &K, bytes: &[u8], catalog: &C) -> Result<T, S2BridgeError>
where
    T: WireCodec,
    T::Wire: DeserializeOwned,
    K: Codec,
    C: Catalog + ?Sized,
{
    let wire: T::Wire = codec.decode(bytes)?;
    Ok(T::decode_wire(&wire, catalog)?)
}

/// Encodes `value` to its wire message and serializes it with `codec`.
///
/// # Errors
/// [`S2BridgeError::Protocol`] if the byte codec fails.
pub fn encode_bytes<T, K>(codec: &K, value: &T) -> Result<Vec<u8>, S2BridgeError>
where
    T: WireCodec,
    T::Wire: Serialize,
    K: Codec,
{
    Ok(codec.encode(&value.encode())?)
}

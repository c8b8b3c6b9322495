//! Presence probing for optional wire fields.
//!
//! Wire getters return a default value for unset fields, so `queued = false`
//! and "queued never set" read the same. [`probe`] asks the message's
//! presence predicate first and only then reads the value, turning the pair
//! into an `Option` the rest of the mapping layer can trust.

use crate::{MappingError, validate};

/// Reads an optional field, returning `None` if it was never set.
///
/// `has` is the message's presence predicate and `get` its getter; `get` is
/// only called when `has` returns `true`.
///
/// ```rust
/// use s2bridge_mapping::probe;
///
/// struct Msg { queued: Option<bool> }
/// let msg = Msg { queued: None };
///
/// let queued = probe(&msg, |m| m.queued.is_some(), |m| m.queued.unwrap_or_default());
/// assert_eq!(queued, None);
/// ```
pub fn probe<'a, M, T>(
    message: &'a M,
    has: impl FnOnce(&'a M) -> bool,
    get: impl FnOnce(&'a M) -> T,
) -> Option<T> {
    if has(message) { Some(get(message)) } else { None }
}

/// Like [`probe`], but an unset field is a [`MappingError::MissingRequiredField`].
pub fn probe_required<'a, M, T>(
    message: &'a M,
    name: &'static str,
    has: impl FnOnce(&'a M) -> bool,
    get: impl FnOnce(&'a M) -> T,
) -> Result<T, MappingError> {
    validate::require_present(name, probe(message, has, get))
}

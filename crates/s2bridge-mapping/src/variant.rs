//! Resolution of mutually exclusive wire fields.
//!
//! Several wire messages carry two optional fields of which at most one may
//! be set (a command targets a unit *or* a position). The resolver looks at
//! both, rejects the message if both are set, and otherwise yields a single
//! [`OneOf`] value. Encoding goes the other way with [`OneOf::into_parts`],
//! leaving the unused alternative absent.

use crate::MappingError;
use crate::validate::{self, Optionality};

/// One of two alternatives. Never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OneOf<A, B> {
    First(A),
    Second(B),
}

impl<A, B> OneOf<A, B> {
    /// Converts each alternative, keeping the variant. Stops at the first error.
    pub fn try_map<C, D, E>(
        self,
        first: impl FnOnce(A) -> Result<C, E>,
        second: impl FnOnce(B) -> Result<D, E>,
    ) -> Result<OneOf<C, D>, E> {
        Ok(match self {
            Self::First(a) => OneOf::First(first(a)?),
            Self::Second(b) => OneOf::Second(second(b)?),
        })
    }

    /// Splits back into the two wire-side options; exactly one is `Some`.
    pub fn into_parts(self) -> (Option<A>, Option<B>) {
        match self {
            Self::First(a) => (Some(a), None),
            Self::Second(b) => (None, Some(b)),
        }
    }
}

/// Resolves a union that may have no alternative set.
///
/// # Errors
/// [`MappingError::ConflictingVariant`] if both are present.
pub fn resolve_optional<A, B>(
    name: &'static str,
    first: Option<A>,
    second: Option<B>,
) -> Result<Option<OneOf<A, B>>, MappingError> {
    validate::require_exactly_one_of(
        name,
        &[first.is_some(), second.is_some()],
        Optionality::Optional,
    )?;
    Ok(match (first, second) {
        (Some(a), _) => Some(OneOf::First(a)),
        (None, Some(b)) => Some(OneOf::Second(b)),
        (None, None) => None,
    })
}

/// Resolves a union that must have exactly one alternative set.
///
/// # Errors
/// [`MappingError::ConflictingVariant`] if both are present,
/// [`MappingError::MissingRequiredField`] if neither is.
pub fn resolve_required<A, B>(
    name: &'static str,
    first: Option<A>,
    second: Option<B>,
) -> Result<OneOf<A, B>, MappingError> {
    validate::require_exactly_one_of(
        name,
        &[first.is_some(), second.is_some()],
        Optionality::Required,
    )?;
    match (first, second) {
        (Some(a), _) => Ok(OneOf::First(a)),
        (None, Some(b)) => Ok(OneOf::Second(b)),
        (None, None) => Err(MappingError::MissingRequiredField { name }),
    }
}

/// Splits an optional union into its two wire-side options.
pub fn split<A, B>(value: Option<OneOf<A, B>>) -> (Option<A>, Option<B>) {
    value.map_or((None, None), OneOf::into_parts)
}

//! Precondition checks shared by every decoder and builder.
//!
//! All checks are pure: they look at a value and either hand it back or
//! return a [`MappingError`] naming the field. Decoders and builder
//! `build()` methods call the same functions, which is what keeps the two
//! construction routes in agreement about what a valid object is.

use std::collections::{BTreeSet, HashSet};
use std::ops::RangeInclusive;

use crate::MappingError;

/// Whether an exclusive union may be left with no alternative set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Optionality {
    /// Exactly one alternative must be set.
    Required,
    /// Zero or one alternative may be set.
    Optional,
}

/// Anything that can report how many elements it holds.
pub trait Countable {
    fn count(&self) -> usize;
}

impl<T> Countable for [T] {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> Countable for Vec<T> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> Countable for BTreeSet<T> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T, S> Countable for HashSet<T, S> {
    fn count(&self) -> usize {
        self.len()
    }
}

/// Unwraps a value that must be present.
pub fn require_present<T>(name: &'static str, value: Option<T>) -> Result<T, MappingError> {
    value.ok_or(MappingError::MissingRequiredField { name })
}

/// Fails with [`MappingError::EmptyRequiredCollection`] if `collection` is empty.
pub fn require_non_empty<C: Countable + ?Sized>(
    name: &'static str,
    collection: &C,
) -> Result<(), MappingError> {
    if collection.count() == 0 {
        return Err(MappingError::EmptyRequiredCollection { name });
    }
    Ok(())
}

/// Fails unless at least one of several collections has an element.
pub fn require_any_non_empty(name: &'static str, counts: &[usize]) -> Result<(), MappingError> {
    if counts.iter().all(|&count| count == 0) {
        return Err(MappingError::EmptyRequiredCollection { name });
    }
    Ok(())
}

/// Fails with [`MappingError::InvalidRange`] unless `n > 0`.
pub fn require_positive<N>(name: &'static str, n: N) -> Result<N, MappingError>
where
    N: Into<i64> + Copy,
{
    let value = n.into();
    if value <= 0 {
        return Err(MappingError::InvalidRange { name, value });
    }
    Ok(n)
}

/// Fails with [`MappingError::InvalidRange`] unless `n` lies inside `range`.
pub fn require_in_range<N>(
    name: &'static str,
    n: N,
    range: RangeInclusive<i64>,
) -> Result<N, MappingError>
where
    N: Into<i64> + Copy,
{
    let value = n.into();
    if !range.contains(&value) {
        return Err(MappingError::InvalidRange { name, value });
    }
    Ok(n)
}

/// Checks that at most one (or, if `Required`, exactly one) flag is set.
///
/// Returns the index of the set alternative, or `None` when an optional
/// union has none set.
pub fn require_exactly_one_of(
    name: &'static str,
    alternatives: &[bool],
    optionality: Optionality,
) -> Result<Option<usize>, MappingError> {
    let mut set = alternatives
        .iter()
        .enumerate()
        .filter_map(|(index, &is_set)| is_set.then_some(index));
    match (set.next(), set.next()) {
        (Some(_), Some(_)) => Err(MappingError::ConflictingVariant { name }),
        (Some(index), None) => Ok(Some(index)),
        (None, _) => match optionality {
            Optionality::Required => Err(MappingError::MissingRequiredField { name }),
            Optionality::Optional => Ok(None),
        },
    }
}

/// Fails with [`MappingError::MissingRequiredField`] unless some flag is set.
pub fn require_at_least_one_of(
    name: &'static str,
    alternatives: &[bool],
) -> Result<(), MappingError> {
    if !alternatives.iter().any(|&is_set| is_set) {
        return Err(MappingError::MissingRequiredField { name });
    }
    Ok(())
}

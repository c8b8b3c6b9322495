//! Container rules for repeated wire fields.
//!
//! Every repeated field is declared as either a **set** (unordered,
//! deduplicated; unit tags, client ports) or a **sequence** (ordered,
//! duplicates kept; actions, drawables, chat). The declaration is the
//! domain field's container type: [`Set`] or [`Sequence`]. Decoding
//! collects the wire items into that container, and encoding flattens it
//! back into a repeated field.
//!
//! Sets are `BTreeSet`s, so a set always encodes in the same (sorted) order.
//! Callers must still treat that order as meaningless.

use std::collections::BTreeSet;

use crate::{MappingError, validate};

/// Unordered, deduplicated repeated field.
pub type Set<T> = BTreeSet<T>;

/// Ordered repeated field; duplicates allowed.
pub type Sequence<T> = Vec<T>;

/// How a repeated field's elements relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Set,
    Sequence,
}

/// A domain container that can stand in for a repeated wire field.
pub trait Repeated: Sized {
    type Item;

    /// The collection rule this container implements.
    const KIND: CollectionKind;

    /// Number of elements after normalization.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends one element, applying the container's rule.
    fn insert(&mut self, item: Self::Item);

    fn empty() -> Self;

    /// Iterates in the container's encode order.
    fn items(&self) -> impl Iterator<Item = &Self::Item>;
}

impl<T: Ord> Repeated for BTreeSet<T> {
    type Item = T;
    const KIND: CollectionKind = CollectionKind::Set;

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn insert(&mut self, item: T) {
        BTreeSet::insert(self, item);
    }

    fn empty() -> Self {
        BTreeSet::new()
    }

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Repeated for Vec<T> {
    type Item = T;
    const KIND: CollectionKind = CollectionKind::Sequence;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn insert(&mut self, item: T) {
        self.push(item);
    }

    fn empty() -> Self {
        Vec::new()
    }

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

/// Decodes every wire item and collects the results into `R`.
///
/// # Errors
/// The first item error, unchanged.
pub fn decode_repeated<R, W>(
    wire: &[W],
    mut decode: impl FnMut(&W) -> Result<R::Item, MappingError>,
) -> Result<R, MappingError>
where
    R: Repeated,
{
    let mut out = R::empty();
    for item in wire {
        out.insert(decode(item)?);
    }
    Ok(out)
}

/// [`decode_repeated`] for a field that must end up non-empty.
///
/// # Errors
/// [`MappingError::EmptyRequiredCollection`] if the wire field had no items.
pub fn decode_required_repeated<R, W>(
    name: &'static str,
    wire: &[W],
    decode: impl FnMut(&W) -> Result<R::Item, MappingError>,
) -> Result<R, MappingError>
where
    R: Repeated,
{
    validate::require_non_empty(name, wire)?;
    decode_repeated(wire, decode)
}

/// Flattens a domain container back into a repeated wire field.
pub fn encode_repeated<R, W>(container: &R, encode: impl FnMut(&R::Item) -> W) -> Vec<W>
where
    R: Repeated,
{
    container.items().map(encode).collect()
}

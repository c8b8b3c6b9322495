//! Identifier lookup capability.
//!
//! Abilities, buffs, and similar game constants arrive on the wire as
//! small integers. The tables that name them are owned elsewhere; the
//! mapping layer only needs to ask "what constant is id N?". [`Lookup`] is
//! that question, injected into each decode call so tests can pass a fake.

use std::collections::HashMap;

use crate::MappingError;

/// A read-only table from wire identifiers to named constants.
pub trait Lookup<T> {
    /// Returns the constant for `id`, or `None` if the table has no entry.
    fn resolve(&self, id: u32) -> Option<T>;
}

/// A constant that knows its own wire identifier.
pub trait Identified {
    fn id(&self) -> u32;
}

/// Resolves `id` through `lookup`, reporting a miss as
/// [`MappingError::UnknownIdentifier`].
///
/// `id` is taken as `i64` because wire fields carry identifiers in several
/// integer widths; anything that does not fit a `u32` is unknown by definition.
pub fn resolve<T, L>(lookup: &L, kind: &'static str, id: i64) -> Result<T, MappingError>
where
    L: Lookup<T> + ?Sized,
{
    u32::try_from(id)
        .ok()
        .and_then(|id| lookup.resolve(id))
        .ok_or_else(|| {
            tracing::debug!(kind, id, "identifier not found in lookup table");
            MappingError::UnknownIdentifier { kind, id }
        })
}

/// An in-memory [`Lookup`] backed by a `HashMap`.
///
/// ```rust
/// use s2bridge_mapping::{Identified, Lookup, StaticTable};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Unit(u32);
/// impl Identified for Unit {
///     fn id(&self) -> u32 { self.0 }
/// }
///
/// let table: StaticTable<Unit> = [Unit(48), Unit(45)].into_iter().collect();
/// assert_eq!(table.resolve(48), Some(Unit(48)));
/// assert_eq!(table.resolve(1), None);
/// ```
#[derive(Debug, Clone)]
pub struct StaticTable<T> {
    entries: HashMap<u32, T>,
}

impl<T> StaticTable<T> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for StaticTable<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T: Identified> FromIterator<T> for StaticTable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|entry| (entry.id(), entry)).collect(),
        }
    }
}

impl<T: Identified> Extend<T> for StaticTable<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|entry| (entry.id(), entry)));
    }
}

impl<T: Clone> Lookup<T> for StaticTable<T> {
    fn resolve(&self, id: u32) -> Option<T> {
        self.entries.get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Upgrade {
        id: u32,
        name: &'static str,
    }

    impl Identified for Upgrade {
        fn id(&self) -> u32 {
            self.id
        }
    }

    fn table() -> StaticTable<Upgrade> {
        [
            Upgrade {
                id: 1,
                name: "carrier launch speed",
            },
            Upgrade {
                id: 2,
                name: "glial reconstitution",
            },
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_resolve_hit() {
        let upgrade: Upgrade = resolve(&table(), "upgrade", 2).unwrap();
        assert_eq!(upgrade.name, "glial reconstitution");
    }

    #[test]
    fn test_resolve_miss_is_unknown_identifier() {
        let err = resolve::<Upgrade, _>(&table(), "upgrade", 9).unwrap_err();
        assert_eq!(
            err,
            MappingError::UnknownIdentifier {
                kind: "upgrade",
                id: 9
            }
        );
    }

    #[test]
    fn test_resolve_out_of_width_id_is_unknown() {
        let err = resolve::<Upgrade, _>(&table(), "upgrade", -1).unwrap_err();
        assert!(matches!(err, MappingError::UnknownIdentifier { id: -1, .. }));
    }

    #[test]
    fn test_extend_overwrites_same_id() {
        let mut table = table();
        table.extend([Upgrade {
            id: 1,
            name: "renamed",
        }]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve(1).map(|u| u.name), Some("renamed"));
    }
}

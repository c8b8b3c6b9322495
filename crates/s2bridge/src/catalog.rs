//! Named game constants and the lookup capability that produces them.
//!
//! The engine refers to abilities and buffs by integer id. The tables that
//! give those ids names are external; decoders receive them as a
//! [`Catalog`] and never construct an [`Ability`] or [`Buff`] from a bare id.

use std::fmt;

use s2bridge_mapping::{Identified, Lookup, StaticTable};

/// An ability a unit can use (move, attack, build, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ability {
    id: u32,
    name: String,
}

impl Ability {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Identified for Ability {
    fn id(&self) -> u32 {
        self.id
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// A temporary unit effect (stimpack, guardian shield, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Buff {
    id: u32,
    name: String,
}

impl Buff {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Identified for Buff {
    fn id(&self) -> u32 {
        self.id
    }
}

impl fmt::Display for Buff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Every table a decoder may need to consult.
///
/// Blanket-implemented for anything that can resolve both abilities and
/// buffs, so callers can pass their own table type or a [`StaticCatalog`].
pub trait Catalog: Lookup<Ability> + Lookup<Buff> {}

impl<T> Catalog for T where T: Lookup<Ability> + Lookup<Buff> + ?Sized {}

/// An in-memory [`Catalog`].
///
/// ```rust
/// use s2bridge::{Ability, Buff, StaticCatalog};
/// use s2bridge_mapping::Lookup;
///
/// let catalog = StaticCatalog::new(
///     [Ability::new(3674, "ATTACK")],
///     [Buff::new(27, "STIMPACK")],
/// );
/// let attack: Option<Ability> = catalog.resolve(3674);
/// assert_eq!(attack.map(|a| a.name().to_owned()), Some("ATTACK".to_owned()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    abilities: StaticTable<Ability>,
    buffs: StaticTable<Buff>,
}

impl StaticCatalog {
    pub fn new(
        abilities: impl IntoIterator<Item = Ability>,
        buffs: impl IntoIterator<Item = Buff>,
    ) -> Self {
        Self {
            abilities: abilities.into_iter().collect(),
            buffs: buffs.into_iter().collect(),
        }
    }
}

impl Lookup<Ability> for StaticCatalog {
    fn resolve(&self, id: u32) -> Option<Ability> {
        self.abilities.resolve(id)
    }
}

impl Lookup<Buff> for StaticCatalog {
    fn resolve(&self, id: u32) -> Option<Buff> {
        self.buffs.resolve(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_catalog_resolves_each_table_separately() {
        let catalog = StaticCatalog::new([Ability::new(1, "SMART")], [Buff::new(1, "CARRY")]);
        let ability: Option<Ability> = catalog.resolve(1);
        let buff: Option<Buff> = catalog.resolve(1);
        assert_eq!(ability.map(|a| a.name().to_owned()).as_deref(), Some("SMART"));
        assert_eq!(buff.map(|b| b.name().to_owned()).as_deref(), Some("CARRY"));
    }

    #[test]
    fn test_empty_catalog_resolves_nothing() {
        let catalog = StaticCatalog::default();
        let ability: Option<Ability> = catalog.resolve(1);
        assert!(ability.is_none());
    }

    #[test]
    fn test_ability_display() {
        assert_eq!(Ability::new(3674, "ATTACK").to_string(), "ATTACK (3674)");
    }
}

//! Raw unit commands: "these units, use this ability, on that target".
//!
//! A [`UnitCommand`] is constructed either by decoding a wire
//! `ActionRawUnitCommand` or through a staged builder:
//!
//! ```text
//! SelectUnits ──for_units──→ ChooseAbility ──use_ability──→ ConfigureCommand ──build──→ UnitCommand
//!                                                            │  target_*, queued
//!                                                            └──(repeatable, last call wins)
//! ```
//!
//! Each stage is its own type, so `build` does not exist until an ability
//! has been chosen:
//!
//! ```compile_fail
//! use s2bridge::{Tag, UnitCommand};
//!
//! let command = UnitCommand::builder().for_units([Tag(1)]).build();
//! ```

use s2bridge_mapping::{
    MappingError, OneOf, Set, collection, probe, probe_required, resolve, validate, variant,
};
use s2bridge_wire as wire;

use crate::{Ability, Catalog, Point2d, Tag, WireCodec};

/// What a command is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Target {
    /// No target (e.g. stop, hold position, self-cast).
    #[default]
    None,
    /// Another unit.
    Unit(Tag),
    /// A point on the map.
    Position(Point2d),
}

impl Target {
    fn from_alternatives(resolved: Option<OneOf<Tag, Point2d>>) -> Self {
        match resolved {
            None => Self::None,
            Some(OneOf::First(tag)) => Self::Unit(tag),
            Some(OneOf::Second(position)) => Self::Position(position),
        }
    }

    fn alternatives(self) -> Option<OneOf<Tag, Point2d>> {
        match self {
            Self::None => None,
            Self::Unit(tag) => Some(OneOf::First(tag)),
            Self::Position(position) => Some(OneOf::Second(position)),
        }
    }

    pub fn unit(&self) -> Option<Tag> {
        match self {
            Self::Unit(tag) => Some(*tag),
            _ => None,
        }
    }

    pub fn position(&self) -> Option<Point2d> {
        match self {
            Self::Position(position) => Some(*position),
            _ => None,
        }
    }
}

/// A validated unit command.
///
/// Always has an ability and at least one acting unit. The unit set is
/// deduplicated and carries no order. The ability id fits the wire's `int32`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitCommand {
    ability: Ability,
    ability_id: i32,
    target: Target,
    unit_tags: Set<Tag>,
    queued: Option<bool>,
}

impl UnitCommand {
    /// Starts a staged builder.
    pub fn builder() -> SelectUnits {
        SelectUnits {
            draft: Draft::default(),
        }
    }

    pub fn ability(&self) -> &Ability {
        &self.ability
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn unit_tags(&self) -> &Set<Tag> {
        &self.unit_tags
    }

    /// Whether the command is appended to the units' order queue.
    /// An unset flag means "not queued".
    pub fn is_queued(&self) -> bool {
        self.queued.unwrap_or(false)
    }
}

impl WireCodec for UnitCommand {
    type Wire = wire::ActionRawUnitCommand;
    const ENTITY: &'static str = "unit command";

    fn decode<C: Catalog + ?Sized>(msg: &Self::Wire, catalog: &C) -> Result<Self, MappingError> {
        type W = wire::ActionRawUnitCommand;

        let ability_id = probe_required(msg, "ability id", W::has_ability_id, W::ability_id)?;
        let ability = resolve::<Ability, _>(catalog, "ability", ability_id.into())?;

        let target = variant::resolve_optional(
            "target",
            probe(msg, W::has_target_unit_tag, W::target_unit_tag),
            probe(msg, W::has_target_world_space_pos, W::target_world_space_pos),
        )?
        .map(|resolved| {
            resolved.try_map(|tag| Ok(Tag(tag)), |pos| Point2d::decode(pos, catalog))
        })
        .transpose()?;

        let unit_tags: Set<Tag> =
            collection::decode_repeated(&msg.unit_tags, |&tag| Ok(Tag(tag)))?;

        Draft {
            ability: Some(ability),
            target: Target::from_alternatives(target),
            unit_tags,
            queued: probe(msg, W::has_queue_command, W::queue_command),
        }
        .finish()
    }

    fn encode(&self) -> Self::Wire {
        let (unit, position) = variant::split(self.target.alternatives());
        wire::ActionRawUnitCommand {
            ability_id: Some(self.ability_id),
            target_world_space_pos: position.map(|p| p.encode()),
            target_unit_tag: unit.map(|tag| tag.0),
            unit_tags: collection::encode_repeated(&self.unit_tags, |tag| tag.0),
            queue_command: self.queued,
        }
    }
}

// ---------------------------------------------------------------------------
// Staged builder
// ---------------------------------------------------------------------------

/// Accumulated builder state. Every stage wraps one of these, and decode
/// goes through [`Draft::finish`] too.
#[derive(Debug, Default)]
struct Draft {
    ability: Option<Ability>,
    target: Target,
    unit_tags: Set<Tag>,
    queued: Option<bool>,
}

impl Draft {
    fn finish(self) -> Result<UnitCommand, MappingError> {
        let ability = validate::require_present("ability id", self.ability)?;
        let ability_id =
            i32::try_from(ability.id()).map_err(|_| MappingError::InvalidRange {
                name: "ability id",
                value: ability.id().into(),
            })?;
        validate::require_non_empty("unit tag list", &self.unit_tags)?;
        Ok(UnitCommand {
            ability,
            ability_id,
            target: self.target,
            unit_tags: self.unit_tags,
            queued: self.queued,
        })
    }
}

/// First stage: pick the acting units.
#[derive(Debug)]
#[must_use]
pub struct SelectUnits {
    draft: Draft,
}

impl SelectUnits {
    /// Adds the acting units. Duplicates collapse.
    pub fn for_units(mut self, tags: impl IntoIterator<Item = Tag>) -> ChooseAbility {
        self.draft.unit_tags.extend(tags);
        ChooseAbility { draft: self.draft }
    }
}

/// Second stage: pick the ability.
#[derive(Debug)]
#[must_use]
pub struct ChooseAbility {
    draft: Draft,
}

impl ChooseAbility {
    pub fn use_ability(mut self, ability: Ability) -> ConfigureCommand {
        self.draft.ability = Some(ability);
        ConfigureCommand { draft: self.draft }
    }
}

/// Final stage: optional target and queue flag, then [`build`](Self::build).
///
/// Setters here may be called repeatedly; the last call wins.
#[derive(Debug)]
#[must_use]
pub struct ConfigureCommand {
    draft: Draft,
}

impl ConfigureCommand {
    pub fn target(mut self, target: Target) -> Self {
        self.draft.target = target;
        self
    }

    pub fn target_unit(self, tag: Tag) -> Self {
        self.target(Target::Unit(tag))
    }

    pub fn target_position(self, position: Point2d) -> Self {
        self.target(Target::Position(position))
    }

    /// Appends the command to the units' order queue.
    pub fn queued(mut self) -> Self {
        self.draft.queued = Some(true);
        self
    }

    /// Validates and produces the command.
    ///
    /// # Errors
    /// [`MappingError::InvalidRange`] if the ability id does not fit the
    /// wire's `int32`, [`MappingError::EmptyRequiredCollection`] if no units
    /// were given.
    pub fn build(self) -> Result<UnitCommand, MappingError> {
        self.draft.finish().inspect_err(|e| {
            tracing::debug!(entity = UnitCommand::ENTITY, error = %e, "builder rejected");
        })
    }
}

//! # s2bridge
//!
//! Validated domain model over the game engine's wire protocol.
//!
//! Wire messages ([`s2bridge_wire`]) make every field optional and validate
//! nothing. This crate turns them into value objects that cannot be
//! malformed, and back again:
//!
//! - every entity implements [`WireCodec`] (`decode` checks, `encode` never fails);
//! - entities with several required parts have staged builders, so an
//!   incomplete value cannot be produced;
//! - ability and buff ids are resolved through an injected [`Catalog`].
//!
//! ## Quick Start
//!
//! ```rust
//! use s2bridge::prelude::*;
//!
//! let catalog = StaticCatalog::new([Ability::new(3674, "ATTACK")], []);
//! let attack = Ability::new(3674, "ATTACK");
//!
//! let command = UnitCommand::builder()
//!     .for_units([Tag(1), Tag(2)])
//!     .use_ability(attack)
//!     .target_unit(Tag(9))
//!     .build()?;
//!
//! let wire = command.encode();
//! assert_eq!(UnitCommand::decode(&wire, &catalog)?, command);
//! # Ok::<(), MappingError>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! s2bridge-wire (messages, byte codec) ─┐
//!                                        ├─→ s2bridge (entities, builders, codecs)
//! s2bridge-mapping (probe, validate,    ─┘
//!   variant, collection, lookup)
//! ```

mod action;
mod buff_data;
mod catalog;
mod codec;
mod command;
mod debug;
mod error;
mod geometry;
mod map_state;
mod observation;
mod ports;
mod response;

pub use action::{Action, ActionChat, ActionError, ActionRaw, ActionResult, ChatChannel};
pub use buff_data::BuffData;
pub use catalog::{Ability, Buff, Catalog, StaticCatalog};
pub use codec::{WireCodec, decode_bytes, encode_bytes};
pub use command::{ChooseAbility, ConfigureCommand, SelectUnits, Target, UnitCommand};
pub use debug::{
    DebugBox, DebugDraw, DebugDrawBuilder, DebugLine, DebugSphere, DebugText, TextPosition,
};
pub use error::S2BridgeError;
pub use geometry::{Color, Point, Point2d, Size2dI, Tag};
pub use map_state::{ImageData, MapState};
pub use observation::{
    ChatReceived, GameResult, Observation, ObservationRaw, PlayerCommon, PlayerResult,
};
pub use ports::{
    AddClientPorts, MultiplayerConfig, MultiplayerOptions, PortSet, SetServerPort, SetSharedPort,
};
pub use response::{
    AddObservationEvents, GameStatus, Response, ResponseKind, ResponseObservation, ResponsePing,
    SetObservation,
};

pub use s2bridge_mapping::MappingError;

/// Everything needed to build, decode, and encode entities.
pub mod prelude {
    pub use crate::{
        Ability, Action, ActionChat, ActionError, ActionRaw, ActionResult, Buff, BuffData,
        Catalog, ChatChannel, ChatReceived, Color, DebugBox, DebugDraw, DebugLine, DebugSphere,
        DebugText, GameResult, GameStatus, ImageData, MapState, MappingError, MultiplayerConfig,
        MultiplayerOptions, Observation, ObservationRaw, PlayerCommon, PlayerResult, Point,
        Point2d, PortSet, Response, ResponseKind, ResponseObservation, ResponsePing,
        S2BridgeError, Size2dI, StaticCatalog, Tag, Target, TextPosition, UnitCommand, WireCodec,
    };
}

//! Wire message shapes for s2bridge.
//!
//! This crate describes the messages exchanged with the game engine exactly
//! as the engine defines them: every scalar or nested message is optional,
//! every list is a repeated field, and nothing is validated.
//!
//! - **Messages** ([`ActionRawUnitCommand`], [`DebugDraw`], [`PortConfig`],
//!   [`MapState`], [`Response`], ...) with `has_*`/getter accessors for each
//!   optional field.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) for moving messages to and
//!   from bytes.
//! - **Errors** ([`ProtocolError`]).
//!
//! # Architecture
//!
//! ```text
//! Transport (bytes) → Wire (this crate) → Mapping → Domain (s2bridge)
//! ```

mod accessors;
mod action;
mod codec;
mod common;
mod data;
mod debug;
mod error;
mod game;
mod observation;
mod response;

pub use action::{
    Action, ActionChat, ActionError, ActionRaw, ActionRawCameraMove, ActionRawUnitCommand,
};
pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use common::{Color, Point, Point2D, Size2DI};
pub use data::BuffData;
pub use debug::{DebugBox, DebugDraw, DebugLine, DebugSphere, DebugText, Line};
pub use error::ProtocolError;
pub use game::{PortConfig, PortSet};
pub use observation::{
    ChatReceived, ImageData, MapState, Observation, ObservationRaw, PlayerCommon, PlayerResult,
};
pub use response::{Response, ResponseObservation, ResponsePing};

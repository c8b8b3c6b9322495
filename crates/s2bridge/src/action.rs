//! Actions a player issued during a step, and the errors they produced.

use std::fmt;

use s2bridge_mapping::{MappingError, OneOf, probe, probe_required, resolve, validate, variant};
use s2bridge_wire as wire;

use crate::{Ability, Catalog, Point, Tag, UnitCommand, WireCodec};

/// A raw-interface action: either a unit command or a camera move.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionRaw {
    UnitCommand(UnitCommand),
    /// Centers the camera on a world position.
    CameraMove(Point),
}

impl WireCodec for ActionRaw {
    type Wire = wire::ActionRaw;
    const ENTITY: &'static str = "raw action";

    fn decode<C: Catalog + ?Sized>(msg: &Self::Wire, catalog: &C) -> Result<Self, MappingError> {
        type W = wire::ActionRaw;
        type Camera = wire::ActionRawCameraMove;

        let resolved = variant::resolve_required(
            "raw action",
            probe(msg, W::has_unit_command, W::unit_command),
            probe(msg, W::has_camera_move, W::camera_move),
        )?;
        Ok(
            match resolved.try_map(
                |command| UnitCommand::decode(command, catalog),
                |camera| {
                    let center = probe_required(
                        camera,
                        "center world space",
                        Camera::has_center_world_space,
                        Camera::center_world_space,
                    )?;
                    Point::decode(center, catalog)
                },
            )? {
                OneOf::First(command) => Self::UnitCommand(command),
                OneOf::Second(center) => Self::CameraMove(center),
            },
        )
    }

    fn encode(&self) -> Self::Wire {
        match self {
            Self::UnitCommand(command) => wire::ActionRaw {
                unit_command: Some(command.encode()),
                camera_move: None,
            },
            Self::CameraMove(center) => wire::ActionRaw {
                unit_command: None,
                camera_move: Some(wire::ActionRawCameraMove {
                    center_world_space: Some(center.encode()),
                }),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ChatChannel {
    Broadcast = 1,
    Team = 2,
}

impl TryFrom<i32> for ChatChannel {
    type Error = MappingError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Broadcast),
            2 => Ok(Self::Team),
            _ => Err(MappingError::UnknownIdentifier {
                kind: "chat channel",
                id: code.into(),
            }),
        }
    }
}

/// A chat message sent by the player.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionChat {
    channel: ChatChannel,
    message: String,
}

impl ActionChat {
    pub fn new(channel: ChatChannel, message: impl Into<String>) -> Self {
        Self {
            channel,
            message: message.into(),
        }
    }

    pub fn channel(&self) -> ChatChannel {
        self.channel
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl WireCodec for ActionChat {
    type Wire = wire::ActionChat;
    const ENTITY: &'static str = "chat action";

    fn decode<C: Catalog + ?Sized>(msg: &Self::Wire, _: &C) -> Result<Self, MappingError> {
        type W = wire::ActionChat;

        let channel = probe_required(msg, "channel", W::has_channel, W::channel)?;
        Ok(Self {
            channel: ChatChannel::try_from(channel)?,
            message: probe_required(msg, "message", W::has_message, W::message)?.to_owned(),
        })
    }

    fn encode(&self) -> Self::Wire {
        wire::ActionChat {
            channel: Some(self.channel as i32),
            message: Some(self.message.clone()),
        }
    }
}

/// One action. Carries a raw action, a chat message, or both.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    raw: Option<ActionRaw>,
    chat: Option<ActionChat>,
}

impl Action {
    /// # Errors
    /// [`MappingError::MissingRequiredField`] if both parts are `None`.
    pub fn new(raw: Option<ActionRaw>, chat: Option<ActionChat>) -> Result<Self, MappingError> {
        validate::require_at_least_one_of("action", &[raw.is_some(), chat.is_some()])?;
        Ok(Self { raw, chat })
    }

    pub fn raw(&self) -> Option<&ActionRaw> {
        self.raw.as_ref()
    }

    pub fn chat(&self) -> Option<&ActionChat> {
        self.chat.as_ref()
    }
}

impl From<UnitCommand> for Action {
    fn from(command: UnitCommand) -> Self {
        Self {
            raw: Some(ActionRaw::UnitCommand(command)),
            chat: None,
        }
    }
}

impl From<ActionRaw> for Action {
    fn from(raw: ActionRaw) -> Self {
        Self {
            raw: Some(raw),
            chat: None,
        }
    }
}

impl From<ActionChat> for Action {
    fn from(chat: ActionChat) -> Self {
        Self {
            raw: None,
            chat: Some(chat),
        }
    }
}

impl WireCodec for Action {
    type Wire = wire::Action;
    const ENTITY: &'static str = "action";

    fn decode<C: Catalog + ?Sized>(msg: &Self::Wire, catalog: &C) -> Result<Self, MappingError> {
        type W = wire::Action;

        let raw = probe(msg, W::has_action_raw, W::action_raw)
            .map(|raw| ActionRaw::decode(raw, catalog))
            .transpose()?;
        let chat = probe(msg, W::has_action_chat, W::action_chat)
            .map(|chat| ActionChat::decode(chat, catalog))
            .transpose()?;
        Self::new(raw, chat)
    }

    fn encode(&self) -> Self::Wire {
        wire::Action {
            action_raw: self.raw.as_ref().map(|raw| raw.encode()),
            action_chat: self.chat.as_ref().map(|chat| chat.encode()),
        }
    }
}

/// Engine result code for a rejected action. Always positive.
///
/// Codes without a named constant are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionResult(i32);

impl ActionResult {
    pub const SUCCESS: Self = Self(1);
    pub const NOT_SUPPORTED: Self = Self(2);
    pub const ERROR: Self = Self(3);
    pub const CANT_QUEUE_THAT_ORDER: Self = Self(4);
    pub const RETRY: Self = Self(5);
    pub const COOLDOWN: Self = Self(6);
    pub const QUEUE_IS_FULL: Self = Self(7);
    pub const NOT_ENOUGH_MINERALS: Self = Self(9);
    pub const NOT_ENOUGH_VESPENE: Self = Self(10);
    pub const NOT_ENOUGH_FOOD: Self = Self(13);

    /// # Errors
    /// [`MappingError::InvalidRange`] for zero or negative codes.
    pub fn new(code: i32) -> Result<Self, MappingError> {
        validate::require_positive("action result", code).map(Self)
    }

    pub fn code(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for ActionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "action result {}", self.0)
    }
}

/// An action the engine refused, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionError {
    unit_tag: Option<Tag>,
    ability: Option<Ability>,
    result: ActionResult,
}

impl ActionError {
    pub fn new(result: ActionResult) -> Self {
        Self {
            unit_tag: None,
            ability: None,
            result,
        }
    }

    pub fn with_unit(self, tag: Tag) -> Self {
        Self {
            unit_tag: Some(tag),
            ..self
        }
    }

    pub fn with_ability(self, ability: Ability) -> Self {
        Self {
            ability: Some(ability),
            ..self
        }
    }

    pub fn unit_tag(&self) -> Option<Tag> {
        self.unit_tag
    }

    pub fn ability(&self) -> Option<&Ability> {
        self.ability.as_ref()
    }

    pub fn result(&self) -> ActionResult {
        self.result
    }
}

impl WireCodec for ActionError {
    type Wire = wire::ActionError;
    const ENTITY: &'static str = "action error";

    fn decode<C: Catalog + ?Sized>(msg: &Self::Wire, catalog: &C) -> Result<Self, MappingError> {
        type W = wire::ActionError;

        let result = probe_required(msg, "result", W::has_result, W::result)?;
        let ability = probe(msg, W::has_ability_id, W::ability_id)
            .map(|id| resolve::<Ability, _>(catalog, "ability", id.into()))
            .transpose()?;
        Ok(Self {
            unit_tag: probe(msg, W::has_unit_tag, W::unit_tag).map(Tag),
            ability,
            result: ActionResult::new(result)?,
        })
    }

    fn encode(&self) -> Self::Wire {
        wire::ActionError {
            unit_tag: self.unit_tag.map(|tag| tag.0),
            ability_id: self.ability.as_ref().map(Ability::id),
            result: Some(self.result.0),
        }
    }
}

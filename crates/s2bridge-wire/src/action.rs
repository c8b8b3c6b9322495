//! Action messages: raw unit commands, camera moves, chat, and action errors.

use serde::{Deserialize, Serialize};

use crate::accessors::optional_fields;
use crate::common::{Point, Point2D};

/// A command issued to one or more units.
///
/// `target_unit_tag` and `target_world_space_pos` are alternatives; a
/// well-formed message sets at most one of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionRawUnitCommand {
    pub ability_id: Option<i32>,
    pub target_world_space_pos: Option<Point2D>,
    pub target_unit_tag: Option<u64>,
    pub unit_tags: Vec<u64>,
    pub queue_command: Option<bool>,
}

optional_fields!(ActionRawUnitCommand {
    scalar ability_id: i32 => has_ability_id;
    message target_world_space_pos: Point2D => has_target_world_space_pos;
    scalar target_unit_tag: u64 => has_target_unit_tag;
    scalar queue_command: bool => has_queue_command;
});

/// Moves the camera to center on a world position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionRawCameraMove {
    pub center_world_space: Option<Point>,
}

optional_fields!(ActionRawCameraMove {
    message center_world_space: Point => has_center_world_space;
});

/// A raw-interface action. Exactly one of the fields is expected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionRaw {
    pub unit_command: Option<ActionRawUnitCommand>,
    pub camera_move: Option<ActionRawCameraMove>,
}

optional_fields!(ActionRaw {
    message unit_command: ActionRawUnitCommand => has_unit_command;
    message camera_move: ActionRawCameraMove => has_camera_move;
});

/// A chat message sent by the controlling player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionChat {
    pub channel: Option<i32>,
    pub message: Option<String>,
}

optional_fields!(ActionChat {
    scalar channel: i32 => has_channel;
    text message: String => has_message;
});

/// One issued action, carried by observation responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Action {
    pub action_raw: Option<ActionRaw>,
    pub action_chat: Option<ActionChat>,
}

optional_fields!(Action {
    message action_raw: ActionRaw => has_action_raw;
    message action_chat: ActionChat => has_action_chat;
});

/// A rejected action, reported back by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionError {
    pub unit_tag: Option<u64>,
    pub ability_id: Option<u32>,
    pub result: Option<i32>,
}

optional_fields!(ActionError {
    scalar unit_tag: u64 => has_unit_tag;
    scalar ability_id: u32 => has_ability_id;
    scalar result: i32 => has_result;
});

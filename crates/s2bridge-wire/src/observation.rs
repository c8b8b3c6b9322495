//! Observation messages: rasters, map state, per-player data, and chat.

use serde::{Deserialize, Serialize};

use crate::accessors::optional_fields;
use crate::common::Size2DI;

/// A packed 2D raster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageData {
    pub bits_per_pixel: Option<i32>,
    pub size: Option<Size2DI>,
    pub data: Option<Vec<u8>>,
}

optional_fields!(ImageData {
    scalar bits_per_pixel: i32 => has_bits_per_pixel;
    message size: Size2DI => has_size;
    bytes data: Vec<u8> => has_data;
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapState {
    pub visibility: Option<ImageData>,
    pub creep: Option<ImageData>,
}

optional_fields!(MapState {
    message visibility: ImageData => has_visibility;
    message creep: ImageData => has_creep;
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservationRaw {
    pub map_state: Option<MapState>,
}

optional_fields!(ObservationRaw {
    message map_state: MapState => has_map_state;
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerCommon {
    pub player_id: Option<u32>,
    pub minerals: Option<u32>,
    pub vespene: Option<u32>,
    pub food_cap: Option<u32>,
    pub food_used: Option<u32>,
}

optional_fields!(PlayerCommon {
    scalar player_id: u32 => has_player_id;
    scalar minerals: u32 => has_minerals;
    scalar vespene: u32 => has_vespene;
    scalar food_cap: u32 => has_food_cap;
    scalar food_used: u32 => has_food_used;
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Observation {
    pub game_loop: Option<u32>,
    pub player_common: Option<PlayerCommon>,
    pub raw_data: Option<ObservationRaw>,
}

optional_fields!(Observation {
    scalar game_loop: u32 => has_game_loop;
    message player_common: PlayerCommon => has_player_common;
    message raw_data: ObservationRaw => has_raw_data;
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerResult {
    pub player_id: Option<u32>,
    pub result: Option<i32>,
}

optional_fields!(PlayerResult {
    scalar player_id: u32 => has_player_id;
    scalar result: i32 => has_result;
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatReceived {
    pub player_id: Option<u32>,
    pub message: Option<String>,
}

optional_fields!(ChatReceived {
    scalar player_id: u32 => has_player_id;
    text message: String => has_message;
});

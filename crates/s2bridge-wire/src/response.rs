//! Response envelopes returned by the game engine.

use serde::{Deserialize, Serialize};

use crate::accessors::optional_fields;
use crate::action::{Action, ActionError};
use crate::observation::{ChatReceived, Observation, PlayerResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseObservation {
    pub actions: Vec<Action>,
    pub action_errors: Vec<ActionError>,
    pub observation: Option<Observation>,
    pub player_result: Vec<PlayerResult>,
    pub chat: Vec<ChatReceived>,
}

optional_fields!(ResponseObservation {
    message observation: Observation => has_observation;
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponsePing {
    pub game_version: Option<String>,
    pub data_version: Option<String>,
    pub data_build: Option<u32>,
    pub base_build: Option<u32>,
}

optional_fields!(ResponsePing {
    text game_version: String => has_game_version;
    text data_version: String => has_data_version;
    scalar data_build: u32 => has_data_build;
    scalar base_build: u32 => has_base_build;
});

/// The top-level response. `observation` and `ping` are the alternatives of
/// the response union; `status` reports the engine state at reply time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Response {
    pub status: Option<i32>,
    pub observation: Option<ResponseObservation>,
    pub ping: Option<ResponsePing>,
}

optional_fields!(Response {
    scalar status: i32 => has_status;
    message observation: ResponseObservation => has_observation;
    message ping: ResponsePing => has_ping;
});

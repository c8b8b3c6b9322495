//! Per-step observation snapshot and the per-player records around it.

use std::fmt;

use s2bridge_mapping::{MappingError, probe, probe_required};
use s2bridge_wire as wire;

use crate::{Catalog, MapState, WireCodec};

/// Resources and supply for the observing player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerCommon {
    player_id: u32,
    minerals: u32,
    vespene: u32,
    food_used: u32,
    food_cap: u32,
}

impl PlayerCommon {
    pub fn new(player_id: u32, minerals: u32, vespene: u32, food_used: u32, food_cap: u32) -> Self {
        Self {
            player_id,
            minerals,
            vespene,
            food_used,
            food_cap,
        }
    }

    pub fn player_id(&self) -> u32 {
        self.player_id
    }

    pub fn minerals(&self) -> u32 {
        self.minerals
    }

    pub fn vespene(&self) -> u32 {
        self.vespene
    }

    pub fn food_used(&self) -> u32 {
        self.food_used
    }

    pub fn food_cap(&self) -> u32 {
        self.food_cap
    }
}

impl WireCodec for PlayerCommon {
    type Wire = wire::PlayerCommon;
    const ENTITY: &'static str = "player common";

    fn decode<C: Catalog + ?Sized>(msg: &Self::Wire, _: &C) -> Result<Self, MappingError> {
        type W = wire::PlayerCommon;

        Ok(Self {
            player_id: probe_required(msg, "player id", W::has_player_id, W::player_id)?,
            minerals: probe_required(msg, "minerals", W::has_minerals, W::minerals)?,
            vespene: probe_required(msg, "vespene", W::has_vespene, W::vespene)?,
            food_used: probe_required(msg, "food used", W::has_food_used, W::food_used)?,
            food_cap: probe_required(msg, "food cap", W::has_food_cap, W::food_cap)?,
        })
    }

    fn encode(&self) -> Self::Wire {
        wire::PlayerCommon {
            player_id: Some(self.player_id),
            minerals: Some(self.minerals),
            vespene: Some(self.vespene),
            food_cap: Some(self.food_cap),
            food_used: Some(self.food_used),
        }
    }
}

/// One game step as seen by the observing player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    game_loop: u32,
    player_common: PlayerCommon,
    raw: Option<ObservationRaw>,
}

/// The raw-interface part of an observation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObservationRaw {
    map_state: Option<MapState>,
}

impl ObservationRaw {
    pub fn new(map_state: Option<MapState>) -> Self {
        Self { map_state }
    }

    pub fn map_state(&self) -> Option<&MapState> {
        self.map_state.as_ref()
    }
}

impl WireCodec for ObservationRaw {
    type Wire = wire::ObservationRaw;
    const ENTITY: &'static str = "raw observation";

    fn decode<C: Catalog + ?Sized>(msg: &Self::Wire, catalog: &C) -> Result<Self, MappingError> {
        type W = wire::ObservationRaw;

        let map_state = probe(msg, W::has_map_state, W::map_state)
            .map(|state| MapState::decode(state, catalog))
            .transpose()?;
        Ok(Self { map_state })
    }

    fn encode(&self) -> Self::Wire {
        wire::ObservationRaw {
            map_state: self.map_state.as_ref().map(|s| s.encode()),
        }
    }
}

impl Observation {
    pub fn new(game_loop: u32, player_common: PlayerCommon) -> Self {
        Self {
            game_loop,
            player_common,
            raw: None,
        }
    }

    /// Attaches raw-interface data. Replaces any earlier value.
    pub fn with_raw(self, raw: ObservationRaw) -> Self {
        Self {
            raw: Some(raw),
            ..self
        }
    }

    pub fn game_loop(&self) -> u32 {
        self.game_loop
    }

    pub fn player_common(&self) -> &PlayerCommon {
        &self.player_common
    }

    pub fn raw(&self) -> Option<&ObservationRaw> {
        self.raw.as_ref()
    }

    /// Shortcut for `raw().and_then(ObservationRaw::map_state)`.
    pub fn map_state(&self) -> Option<&MapState> {
        self.raw.as_ref().and_then(ObservationRaw::map_state)
    }
}

impl WireCodec for Observation {
    type Wire = wire::Observation;
    const ENTITY: &'static str = "observation";

    fn decode<C: Catalog + ?Sized>(msg: &Self::Wire, catalog: &C) -> Result<Self, MappingError> {
        type W = wire::Observation;

        let common = probe_required(msg, "player common", W::has_player_common, W::player_common)?;
        Ok(Self {
            game_loop: probe_required(msg, "game loop", W::has_game_loop, W::game_loop)?,
            player_common: PlayerCommon::decode(common, catalog)?,
            raw: probe(msg, W::has_raw_data, W::raw_data)
                .map(|raw| ObservationRaw::decode(raw, catalog))
                .transpose()?,
        })
    }

    fn encode(&self) -> Self::Wire {
        wire::Observation {
            game_loop: Some(self.game_loop),
            player_common: Some(self.player_common.encode()),
            raw_data: self.raw.as_ref().map(|raw| raw.encode()),
        }
    }
}

/// How a game ended for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum GameResult {
    Victory = 1,
    Defeat = 2,
    Tie = 3,
    Undecided = 4,
}

impl TryFrom<i32> for GameResult {
    type Error = MappingError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Victory),
            2 => Ok(Self::Defeat),
            3 => Ok(Self::Tie),
            4 => Ok(Self::Undecided),
            _ => Err(MappingError::UnknownIdentifier {
                kind: "game result",
                id: code.into(),
            }),
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Victory => "victory",
            Self::Defeat => "defeat",
            Self::Tie => "tie",
            Self::Undecided => "undecided",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerResult {
    player_id: u32,
    result: GameResult,
}

impl PlayerResult {
    pub fn new(player_id: u32, result: GameResult) -> Self {
        Self { player_id, result }
    }

    pub fn player_id(&self) -> u32 {
        self.player_id
    }

    pub fn result(&self) -> GameResult {
        self.result
    }
}

impl WireCodec for PlayerResult {
    type Wire = wire::PlayerResult;
    const ENTITY: &'static str = "player result";

    fn decode<C: Catalog + ?Sized>(msg: &Self::Wire, _: &C) -> Result<Self, MappingError> {
        type W = wire::PlayerResult;

        let result = probe_required(msg, "result", W::has_result, W::result)?;
        Ok(Self {
            player_id: probe_required(msg, "player id", W::has_player_id, W::player_id)?,
            result: GameResult::try_from(result)?,
        })
    }

    fn encode(&self) -> Self::Wire {
        wire::PlayerResult {
            player_id: Some(self.player_id),
            result: Some(self.result as i32),
        }
    }
}

/// A chat line received from another player.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChatReceived {
    player_id: u32,
    message: String,
}

impl ChatReceived {
    pub fn new(player_id: u32, message: impl Into<String>) -> Self {
        Self {
            player_id,
            message: message.into(),
        }
    }

    pub fn player_id(&self) -> u32 {
        self.player_id
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl WireCodec for ChatReceived {
    type Wire = wire::ChatReceived;
    const ENTITY: &'static str = "chat received";

    fn decode<C: Catalog + ?Sized>(msg: &Self::Wire, _: &C) -> Result<Self, MappingError> {
        type W = wire::ChatReceived;

        Ok(Self {
            player_id: probe_required(msg, "player id", W::has_player_id, W::player_id)?,
            message: probe_required(msg, "message", W::has_message, W::message)?.to_owned(),
        })
    }

    fn encode(&self) -> Self::Wire {
        wire::ChatReceived {
            player_id: Some(self.player_id),
            message: Some(self.message.clone()),
        }
    }
}

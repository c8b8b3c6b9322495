//! Engine responses.
//!
//! A [`Response`] always carries the engine's [`GameStatus`] and exactly one
//! payload. Only observation and ping payloads are modelled.
//!
//! [`ResponseObservation`] is assembled with a two-stage builder: the
//! observation itself comes first, then any number of actions, errors,
//! results and chat lines in the order they should be reported.
//!
//! ```text
//! ResponseObservation::builder() ──observation──→ AddObservationEvents ──build──→ ResponseObservation
//!                                                 └─ actions, action_errors, player_results, chat
//! ```

use std::fmt;

use s2bridge_mapping::{MappingError, OneOf, Sequence, collection, probe, probe_required, variant};
use s2bridge_wire as wire;

use crate::{Action, ActionError, Catalog, ChatReceived, Observation, PlayerResult, WireCodec};

/// Engine lifecycle state reported with every response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum GameStatus {
    Launched = 1,
    InitGame = 2,
    InGame = 3,
    InReplay = 4,
    Ended = 5,
    Quit = 6,
    Unknown = 99,
}

impl TryFrom<i32> for GameStatus {
    type Error = MappingError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Launched),
            2 => Ok(Self::InitGame),
            3 => Ok(Self::InGame),
            4 => Ok(Self::InReplay),
            5 => Ok(Self::Ended),
            6 => Ok(Self::Quit),
            99 => Ok(Self::Unknown),
            _ => Err(MappingError::UnknownIdentifier {
                kind: "game status",
                id: code.into(),
            }),
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Launched => "launched",
            Self::InitGame => "init_game",
            Self::InGame => "in_game",
            Self::InReplay => "in_replay",
            Self::Ended => "ended",
            Self::Quit => "quit",
            Self::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

// ---------------------------------------------------------------------------
// ResponseObservation
// ---------------------------------------------------------------------------

/// The result of an observation request.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseObservation {
    actions: Sequence<Action>,
    action_errors: Sequence<ActionError>,
    observation: Observation,
    player_results: Sequence<PlayerResult>,
    chat: Sequence<ChatReceived>,
}

impl ResponseObservation {
    pub fn builder() -> SetObservation {
        SetObservation
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn action_errors(&self) -> &[ActionError] {
        &self.action_errors
    }

    pub fn observation(&self) -> &Observation {
        &self.observation
    }

    pub fn player_results(&self) -> &[PlayerResult] {
        &self.player_results
    }

    pub fn chat(&self) -> &[ChatReceived] {
        &self.chat
    }
}

impl WireCodec for ResponseObservation {
    type Wire = wire::ResponseObservation;
    const ENTITY: &'static str = "observation response";

    fn decode<C: Catalog + ?Sized>(msg: &Self::Wire, catalog: &C) -> Result<Self, MappingError> {
        type W = wire::ResponseObservation;

        let observation = probe_required(msg, "observation", W::has_observation, W::observation)?;
        Ok(Self {
            actions: collection::decode_repeated(&msg.actions, |a| Action::decode(a, catalog))?,
            action_errors: collection::decode_repeated(&msg.action_errors, |e| {
                ActionError::decode(e, catalog)
            })?,
            observation: Observation::decode(observation, catalog)?,
            player_results: collection::decode_repeated(&msg.player_result, |r| {
                PlayerResult::decode(r, catalog)
            })?,
            chat: collection::decode_repeated(&msg.chat, |c| ChatReceived::decode(c, catalog))?,
        })
    }

    fn encode(&self) -> Self::Wire {
        wire::ResponseObservation {
            actions: collection::encode_repeated(&self.actions, |a| a.encode()),
            action_errors: collection::encode_repeated(&self.action_errors, |e| e.encode()),
            observation: Some(self.observation.encode()),
            player_result: collection::encode_repeated(&self.player_results, |r| r.encode()),
            chat: collection::encode_repeated(&self.chat, |c| c.encode()),
        }
    }
}

/// First stage: the observation is mandatory.
#[derive(Debug)]
#[must_use]
pub struct SetObservation;

impl SetObservation {
    pub fn observation(self, observation: Observation) -> AddObservationEvents {
        AddObservationEvents {
            response: ResponseObservation {
                actions: Sequence::new(),
                action_errors: Sequence::new(),
                observation,
                player_results: Sequence::new(),
                chat: Sequence::new(),
            },
        }
    }
}

/// Final stage. Every method appends, keeping call order.
#[derive(Debug)]
#[must_use]
pub struct AddObservationEvents {
    response: ResponseObservation,
}

impl AddObservationEvents {
    pub fn actions(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.response.actions.extend(actions);
        self
    }

    pub fn action_errors(mut self, errors: impl IntoIterator<Item = ActionError>) -> Self {
        self.response.action_errors.extend(errors);
        self
    }

    pub fn player_results(mut self, results: impl IntoIterator<Item = PlayerResult>) -> Self {
        self.response.player_results.extend(results);
        self
    }

    pub fn chat(mut self, chat: impl IntoIterator<Item = ChatReceived>) -> Self {
        self.response.chat.extend(chat);
        self
    }

    /// Every invariant already holds at this stage, so this cannot fail.
    pub fn build(self) -> ResponseObservation {
        self.response
    }
}

// ---------------------------------------------------------------------------
// ResponsePing
// ---------------------------------------------------------------------------

/// Engine version information.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResponsePing {
    game_version: String,
    data_version: String,
    data_build: u32,
    base_build: u32,
}

impl ResponsePing {
    pub fn new(
        game_version: impl Into<String>,
        data_version: impl Into<String>,
        data_build: u32,
        base_build: u32,
    ) -> Self {
        Self {
            game_version: game_version.into(),
            data_version: data_version.into(),
            data_build,
            base_build,
        }
    }

    pub fn game_version(&self) -> &str {
        &self.game_version
    }

    pub fn data_version(&self) -> &str {
        &self.data_version
    }

    pub fn data_build(&self) -> u32 {
        self.data_build
    }

    pub fn base_build(&self) -> u32 {
        self.base_build
    }
}

impl WireCodec for ResponsePing {
    type Wire = wire::ResponsePing;
    const ENTITY: &'static str = "ping response";

    fn decode<C: Catalog + ?Sized>(msg: &Self::Wire, _: &C) -> Result<Self, MappingError> {
        type W = wire::ResponsePing;

        Ok(Self {
            game_version: probe_required(msg, "game version", W::has_game_version, W::game_version)?
                .to_owned(),
            data_version: probe_required(msg, "data version", W::has_data_version, W::data_version)?
                .to_owned(),
            data_build: probe_required(msg, "data build", W::has_data_build, W::data_build)?,
            base_build: probe_required(msg, "base build", W::has_base_build, W::base_build)?,
        })
    }

    fn encode(&self) -> Self::Wire {
        wire::ResponsePing {
            game_version: Some(self.game_version.clone()),
            data_version: Some(self.data_version.clone()),
            data_build: Some(self.data_build),
            base_build: Some(self.base_build),
        }
    }
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseKind {
    Observation(ResponseObservation),
    Ping(ResponsePing),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    status: GameStatus,
    kind: ResponseKind,
}

impl Response {
    pub fn new(status: GameStatus, kind: ResponseKind) -> Self {
        Self { status, kind }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn kind(&self) -> &ResponseKind {
        &self.kind
    }

    pub fn into_kind(self) -> ResponseKind {
        self.kind
    }

    /// The observation payload, if this is an observation response.
    pub fn observation(&self) -> Option<&ResponseObservation> {
        match &self.kind {
            ResponseKind::Observation(observation) => Some(observation),
            ResponseKind::Ping(_) => None,
        }
    }
}

impl WireCodec for Response {
    type Wire = wire::Response;
    const ENTITY: &'static str = "response";

    fn decode<C: Catalog + ?Sized>(msg: &Self::Wire, catalog: &C) -> Result<Self, MappingError> {
        type W = wire::Response;

        let status = probe_required(msg, "status", W::has_status, W::status)?;
        let kind = variant::resolve_required(
            "response",
            probe(msg, W::has_observation, W::observation),
            probe(msg, W::has_ping, W::ping),
        )?
        .try_map(
            |observation| ResponseObservation::decode(observation, catalog),
            |ping| ResponsePing::decode(ping, catalog),
        )?;
        Ok(Self {
            status: GameStatus::try_from(status)?,
            kind: match kind {
                OneOf::First(observation) => ResponseKind::Observation(observation),
                OneOf::Second(ping) => ResponseKind::Ping(ping),
            },
        })
    }

    fn encode(&self) -> Self::Wire {
        let (observation, ping) = match &self.kind {
            ResponseKind::Observation(observation) => (Some(observation.encode()), None),
            ResponseKind::Ping(ping) => (None, Some(ping.encode())),
        };
        wire::Response {
            status: Some(self.status as i32),
            observation,
            ping,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ActionChat, ChatChannel, GameResult, PlayerCommon, StaticCatalog};

    fn observation() -> Observation {
        Observation::new(32, PlayerCommon::new(1, 50, 0, 12, 15))
    }

    fn ping() -> ResponsePing {
        ResponsePing::new("4.10.0", "ABCDEF", 75689, 75689)
    }

    #[test]
    fn test_builder_keeps_call_order() {
        let response = ResponseObservation::builder()
            .observation(observation())
            .chat([ChatReceived::new(2, "first")])
            .chat([ChatReceived::new(2, "second"), ChatReceived::new(1, "third")])
            .player_results([PlayerResult::new(1, GameResult::Victory)])
            .build();
        let lines: Vec<&str> = response.chat().iter().map(ChatReceived::message).collect();
        assert_eq!(lines, vec!["first", "second", "third"]);
        assert!(response.actions().is_empty());
    }

    #[test]
    fn test_observation_response_requires_observation() {
        let err = ResponseObservation::decode(
            &wire::ResponseObservation::default(),
            &StaticCatalog::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            MappingError::MissingRequiredField {
                name: "observation"
            }
        );
    }

    #[test]
    fn test_response_requires_a_payload() {
        let msg = wire::Response {
            status: Some(3),
            ..wire::Response::default()
        };
        let err = Response::decode(&msg, &StaticCatalog::default()).unwrap_err();
        assert_eq!(err, MappingError::MissingRequiredField { name: "response" });
    }

    #[test]
    fn test_response_with_two_payloads_conflicts() {
        let msg = wire::Response {
            status: Some(3),
            observation: Some(wire::ResponseObservation::default()),
            ping: Some(ping().encode()),
        };
        let err = Response::decode(&msg, &StaticCatalog::default()).unwrap_err();
        assert_eq!(err, MappingError::ConflictingVariant { name: "response" });
    }

    #[test]
    fn test_response_requires_status() {
        let msg = wire::Response {
            ping: Some(ping().encode()),
            ..wire::Response::default()
        };
        let err = Response::decode(&msg, &StaticCatalog::default()).unwrap_err();
        assert_eq!(err, MappingError::MissingRequiredField { name: "status" });
    }

    #[test]
    fn test_unknown_status_code() {
        let msg = wire::Response {
            status: Some(7),
            ping: Some(ping().encode()),
            ..wire::Response::default()
        };
        let err = Response::decode(&msg, &StaticCatalog::default()).unwrap_err();
        assert_eq!(
            err,
            MappingError::UnknownIdentifier {
                kind: "game status",
                id: 7
            }
        );
    }

    #[test]
    fn test_ping_response_round_trip() {
        let response = Response::new(GameStatus::Launched, ResponseKind::Ping(ping()));
        let msg = response.encode();
        assert!(!msg.has_observation());
        assert_eq!(msg.status, Some(1));
        assert_eq!(Response::decode(&msg, &StaticCatalog::default()).unwrap(), response);
    }

    #[test]
    fn test_ping_requires_every_field() {
        let msg = wire::ResponsePing {
            base_build: None,
            ..ping().encode()
        };
        let err = ResponsePing::decode(&msg, &StaticCatalog::default()).unwrap_err();
        assert_eq!(err, MappingError::MissingRequiredField { name: "base build" });
    }

    #[test]
    fn test_observation_response_round_trip() {
        let response = ResponseObservation::builder()
            .observation(observation())
            .actions([Action::from(ActionChat::new(ChatChannel::Broadcast, "glhf"))])
            .build();
        let decoded =
            ResponseObservation::decode(&response.encode(), &StaticCatalog::default()).unwrap();
        assert_eq!(decoded, response);
        assert_eq!(GameStatus::InGame.to_string(), "in_game");
    }
}

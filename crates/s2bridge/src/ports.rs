//! Multiplayer port configuration.
//!
//! A multiplayer game needs one shared port, a game/base port pair for the
//! server, and one pair per client. [`MultiplayerOptions`] is built with a
//! staged builder or derived from a starting port:
//!
//! ```text
//! SetSharedPort ──shared_port──→ SetServerPort ──server_port──→ AddClientPorts ──build──→ MultiplayerOptions
//!                                                               └─ client_ports (repeatable, accumulates)
//! ```

use serde::{Deserialize, Serialize};

use s2bridge_mapping::{MappingError, Set, collection, probe_required, validate};
use s2bridge_wire as wire;

use crate::{Catalog, WireCodec};

fn wire_port(name: &'static str, port: i32) -> Result<u16, MappingError> {
    u16::try_from(port)
        .ok()
        .filter(|p| *p > 0)
        .ok_or(MappingError::InvalidRange {
            name,
            value: port.into(),
        })
}

/// A game port and a base port used by one participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PortSet {
    game_port: u16,
    base_port: u16,
}

impl PortSet {
    /// # Errors
    /// [`MappingError::InvalidRange`] if either port is zero.
    pub fn new(game_port: u16, base_port: u16) -> Result<Self, MappingError> {
        Ok(Self {
            game_port: validate::require_positive("game port", game_port)?,
            base_port: validate::require_positive("base port", base_port)?,
        })
    }

    pub fn game_port(&self) -> u16 {
        self.game_port
    }

    pub fn base_port(&self) -> u16 {
        self.base_port
    }
}

impl WireCodec for PortSet {
    type Wire = wire::PortSet;
    const ENTITY: &'static str = "port set";

    fn decode<C: Catalog + ?Sized>(msg: &Self::Wire, _: &C) -> Result<Self, MappingError> {
        type W = wire::PortSet;

        let game = probe_required(msg, "game port", W::has_game_port, W::game_port)?;
        let base = probe_required(msg, "base port", W::has_base_port, W::base_port)?;
        Ok(Self {
            game_port: wire_port("game port", game)?,
            base_port: wire_port("base port", base)?,
        })
    }

    fn encode(&self) -> Self::Wire {
        wire::PortSet {
            game_port: Some(self.game_port.into()),
            base_port: Some(self.base_port.into()),
        }
    }
}

/// Where to derive a port assignment from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiplayerConfig {
    /// Ports are assigned upward starting just after this one.
    pub port_start: u16,

    /// Number of client participants.
    pub participants: usize,
}

impl Default for MultiplayerConfig {
    fn default() -> Self {
        Self {
            port_start: 5000,
            participants: 2,
        }
    }
}

/// The full port layout for a multiplayer game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiplayerOptions {
    shared_port: u16,
    server_port: PortSet,
    client_ports: Set<PortSet>,
}

impl MultiplayerOptions {
    /// Starts a staged builder.
    pub fn builder() -> SetSharedPort {
        SetSharedPort {
            draft: Draft::default(),
        }
    }

    /// Assigns a contiguous block of ports after `start`: the shared port
    /// first, then the server pair, then one pair per participant.
    ///
    /// # Errors
    /// [`MappingError::InvalidRange`] if the block runs past the highest port,
    /// [`MappingError::EmptyRequiredCollection`] if `participants` is zero.
    pub fn for_participants(start: u16, participants: usize) -> Result<Self, MappingError> {
        let overflow = MappingError::InvalidRange {
            name: "port start",
            value: start.into(),
        };
        let port = |offset: usize| -> Result<u16, MappingError> {
            usize::from(start)
                .checked_add(offset)
                .and_then(|p| u16::try_from(p).ok())
                .ok_or_else(|| overflow.clone())
        };
        let pair = |offset: usize| -> Result<PortSet, MappingError> {
            Ok(PortSet {
                game_port: port(offset)?,
                base_port: port(offset + 1)?,
            })
        };

        // Check the last port up front so a partial block is never logged.
        let last = participants
            .checked_mul(2)
            .and_then(|n| n.checked_add(3))
            .ok_or_else(|| overflow.clone())?;
        let last_port = port(last)?;

        let client_ports = (0..participants)
            .map(|i| pair(4 + 2 * i))
            .collect::<Result<Set<_>, _>>()?;

        let options = Draft {
            shared_port: Some(port(1)?),
            server_port: Some(pair(2)?),
            client_ports,
        }
        .finish()?;

        tracing::debug!(
            shared_port = options.shared_port,
            last_port,
            participants,
            "derived port assignment"
        );
        Ok(options)
    }

    /// [`for_participants`](Self::for_participants) from a config section.
    ///
    /// # Errors
    /// As [`for_participants`](Self::for_participants).
    pub fn from_config(config: &MultiplayerConfig) -> Result<Self, MappingError> {
        Self::for_participants(config.port_start, config.participants)
    }

    pub fn shared_port(&self) -> u16 {
        self.shared_port
    }

    pub fn server_port(&self) -> PortSet {
        self.server_port
    }

    pub fn client_ports(&self) -> &Set<PortSet> {
        &self.client_ports
    }
}

impl WireCodec for MultiplayerOptions {
    type Wire = wire::PortConfig;
    const ENTITY: &'static str = "port config";

    fn decode<C: Catalog + ?Sized>(msg: &Self::Wire, catalog: &C) -> Result<Self, MappingError> {
        type W = wire::PortConfig;

        let shared = probe_required(msg, "shared port", W::has_shared_port, W::shared_port)?;
        let server = probe_required(msg, "server port", W::has_server_ports, W::server_ports)?;
        Draft {
            shared_port: Some(wire_port("shared port", shared)?),
            server_port: Some(PortSet::decode(server, catalog)?),
            client_ports: collection::decode_repeated(&msg.client_ports, |p| {
                PortSet::decode(p, catalog)
            })?,
        }
        .finish()
    }

    fn encode(&self) -> Self::Wire {
        wire::PortConfig {
            shared_port: Some(self.shared_port.into()),
            server_ports: Some(self.server_port.encode()),
            client_ports: collection::encode_repeated(&self.client_ports, |p| p.encode()),
        }
    }
}

// ---------------------------------------------------------------------------
// Staged builder
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct Draft {
    shared_port: Option<u16>,
    server_port: Option<PortSet>,
    client_ports: Set<PortSet>,
}

impl Draft {
    fn finish(self) -> Result<MultiplayerOptions, MappingError> {
        let shared_port = validate::require_present("shared port", self.shared_port)?;
        let server_port = validate::require_present("server port", self.server_port)?;
        validate::require_non_empty("client port list", &self.client_ports)?;
        Ok(MultiplayerOptions {
            shared_port,
            server_port,
            client_ports: self.client_ports,
        })
    }
}

#[derive(Debug)]
#[must_use]
pub struct SetSharedPort {
    draft: Draft,
}

impl SetSharedPort {
    /// # Errors
    /// [`MappingError::InvalidRange`] for port zero.
    pub fn shared_port(mut self, port: u16) -> Result<SetServerPort, MappingError> {
        self.draft.shared_port = Some(validate::require_positive("shared port", port)?);
        Ok(SetServerPort { draft: self.draft })
    }
}

#[derive(Debug)]
#[must_use]
pub struct SetServerPort {
    draft: Draft,
}

impl SetServerPort {
    pub fn server_port(mut self, ports: PortSet) -> AddClientPorts {
        self.draft.server_port = Some(ports);
        AddClientPorts { draft: self.draft }
    }
}

/// Final stage. Client pairs accumulate across calls; duplicates collapse.
#[derive(Debug)]
#[must_use]
pub struct AddClientPorts {
    draft: Draft,
}

impl AddClientPorts {
    pub fn client_ports(mut self, ports: impl IntoIterator<Item = PortSet>) -> Self {
        self.draft.client_ports.extend(ports);
        self
    }

    /// # Errors
    /// [`MappingError::EmptyRequiredCollection`] if no client pair was added.
    pub fn build(self) -> Result<MultiplayerOptions, MappingError> {
        self.draft.finish().inspect_err(|e| {
            tracing::debug!(entity = MultiplayerOptions::ENTITY, error = %e, "builder rejected");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticCatalog;

    fn ports(game: u16, base: u16) -> PortSet {
        PortSet::new(game, base).unwrap()
    }

    fn wire_ports(game: i32, base: i32) -> wire::PortSet {
        wire::PortSet {
            game_port: Some(game),
            base_port: Some(base),
        }
    }

    #[test]
    fn test_shared_port_zero_fails_immediately() {
        let err = MultiplayerOptions::builder().shared_port(0).unwrap_err();
        assert_eq!(
            err,
            MappingError::InvalidRange {
                name: "shared port",
                value: 0
            }
        );
    }

    #[test]
    fn test_build_without_clients_is_empty_collection() {
        let err = MultiplayerOptions::builder()
            .shared_port(5001)
            .unwrap()
            .server_port(ports(5002, 5003))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            MappingError::EmptyRequiredCollection {
                name: "client port list"
            }
        );
    }

    #[test]
    fn test_client_ports_accumulate_and_dedupe() {
        let options = MultiplayerOptions::builder()
            .shared_port(5001)
            .unwrap()
            .server_port(ports(5002, 5003))
            .client_ports([ports(5004, 5005)])
            .client_ports([ports(5006, 5007), ports(5004, 5005)])
            .build()
            .unwrap();
        assert_eq!(options.client_ports().len(), 2);
    }

    #[test]
    fn test_derived_assignment_from_default_config() {
        let options = MultiplayerOptions::from_config(&MultiplayerConfig::default()).unwrap();
        assert_eq!(options.shared_port(), 5001);
        assert_eq!(options.server_port(), ports(5002, 5003));
        let clients: Vec<PortSet> = options.client_ports().iter().copied().collect();
        assert_eq!(clients, vec![ports(5004, 5005), ports(5006, 5007)]);
    }

    #[test]
    fn test_derived_assignment_overflow() {
        let err = MultiplayerOptions::for_participants(u16::MAX - 4, 1).unwrap_err();
        assert_eq!(
            err,
            MappingError::InvalidRange {
                name: "port start",
                value: i64::from(u16::MAX - 4)
            }
        );
        assert!(MultiplayerOptions::for_participants(u16::MAX - 5, 1).is_ok());
    }

    #[test]
    fn test_derived_assignment_needs_participants() {
        let err = MultiplayerOptions::for_participants(5000, 0).unwrap_err();
        assert_eq!(
            err,
            MappingError::EmptyRequiredCollection {
                name: "client port list"
            }
        );
    }

    #[test]
    fn test_config_fields_default_when_omitted() {
        let config: MultiplayerConfig = serde_json::from_str(r#"{"participants": 4}"#).unwrap();
        assert_eq!(config.port_start, 5000);
        assert_eq!(config.participants, 4);
    }

    #[test]
    fn test_decode_rejects_out_of_range_port() {
        let msg = wire::PortConfig {
            shared_port: Some(5001),
            server_ports: Some(wire_ports(5002, 70_000)),
            client_ports: vec![wire_ports(5004, 5005)],
        };
        let err = MultiplayerOptions::decode(&msg, &StaticCatalog::default()).unwrap_err();
        assert_eq!(
            err,
            MappingError::InvalidRange {
                name: "base port",
                value: 70_000
            }
        );
    }

    #[test]
    fn test_decode_requires_server_ports() {
        let msg = wire::PortConfig {
            shared_port: Some(5001),
            server_ports: None,
            client_ports: vec![wire_ports(5004, 5005)],
        };
        let err = MultiplayerOptions::decode(&msg, &StaticCatalog::default()).unwrap_err();
        assert_eq!(
            err,
            MappingError::MissingRequiredField {
                name: "server port"
            }
        );
    }

    #[test]
    fn test_decode_negative_shared_port() {
        let msg = wire::PortConfig {
            shared_port: Some(-1),
            server_ports: Some(wire_ports(5002, 5003)),
            client_ports: vec![wire_ports(5004, 5005)],
        };
        let err = MultiplayerOptions::decode(&msg, &StaticCatalog::default()).unwrap_err();
        assert_eq!(
            err,
            MappingError::InvalidRange {
                name: "shared port",
                value: -1
            }
        );
    }
}

//! Port configuration sent when joining a multiplayer game.

use serde::{Deserialize, Serialize};

use crate::accessors::optional_fields;

/// A pair of ports reserved for one process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PortSet {
    pub game_port: Option<i32>,
    pub base_port: Option<i32>,
}

optional_fields!(PortSet {
    scalar game_port: i32 => has_game_port;
    scalar base_port: i32 => has_base_port;
});

/// The port layout of a multiplayer session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortConfig {
    pub shared_port: Option<i32>,
    pub server_ports: Option<PortSet>,
    pub client_ports: Vec<PortSet>,
}

optional_fields!(PortConfig {
    scalar shared_port: i32 => has_shared_port;
    message server_ports: PortSet => has_server_ports;
});

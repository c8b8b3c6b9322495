//! Static game data messages.

use serde::{Deserialize, Serialize};

use crate::accessors::optional_fields;

/// A buff entry from the engine's data tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuffData {
    pub buff_id: Option<u32>,
    pub name: Option<String>,
}

optional_fields!(BuffData {
    scalar buff_id: u32 => has_buff_id;
    text name: String => has_name;
});

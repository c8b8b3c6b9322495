//! Static data about a buff, as listed in the engine's data tables.

use s2bridge_mapping::{MappingError, probe_required, resolve};
use s2bridge_wire as wire;

use crate::{Buff, Catalog, WireCodec};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuffData {
    buff: Buff,
    name: String,
}

impl BuffData {
    pub fn new(buff: Buff, name: impl Into<String>) -> Self {
        Self {
            buff,
            name: name.into(),
        }
    }

    pub fn buff(&self) -> &Buff {
        &self.buff
    }

    /// The display name reported by the engine. May differ from the
    /// catalog's name for the same buff.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl WireCodec for BuffData {
    type Wire = wire::BuffData;
    const ENTITY: &'static str = "buff data";

    fn decode<C: Catalog + ?Sized>(msg: &Self::Wire, catalog: &C) -> Result<Self, MappingError> {
        type W = wire::BuffData;

        let buff_id = probe_required(msg, "buff", W::has_buff_id, W::buff_id)?;
        let name = probe_required(msg, "name", W::has_name, W::name)?;
        Ok(Self {
            buff: resolve::<Buff, _>(catalog, "buff", buff_id.into())?,
            name: name.to_owned(),
        })
    }

    fn encode(&self) -> Self::Wire {
        wire::BuffData {
            buff_id: Some(self.buff.id()),
            name: Some(self.name.clone()),
        }
    }
}

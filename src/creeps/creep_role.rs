use std::fmt::{Display, Formatter};
use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Sequence, Deserialize, Serialize)]
pub enum CreepRole {
    /// Harvests and carries the energy itself. Used before containers are available.
    #[serde(rename = "harvester_simple")]
    SimpleHarvester,
    /// Static harvester working next to a source, filling its container.
    #[serde(rename = "harvester")]
    Harvester,
    /// Carries energy from source containers.
    #[serde(rename = "collector")]
    Collector,
    /// Picks up dropped resources.
    #[serde(rename = "scavenger")]
    Scavenger,
}

impl Display for CreepRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.memory_name())
    }
}

impl CreepRole {
    /// Key of the role in the base memory.
    pub fn memory_name(self) -> &'static str {
        match self {
            CreepRole::SimpleHarvester => "harvester_simple",
            CreepRole::Harvester => "harvester",
            CreepRole::Collector => "collector",
            CreepRole::Scavenger => "scavenger",
        }
    }
}

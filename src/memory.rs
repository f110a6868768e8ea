use std::hash::Hash;
use rustc_hash::FxHashMap;
use screeps::{RoomName, StructureType};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::creeps::creep_role::CreepRole;
use crate::serialization::position_codec::{deserialize_pos_leniently, SerializedPos};
use crate::utils::result_utils::ResultUtils;

pub mod js_memory;

/// Persistent information about a source and the infrastructure around it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMemory {
    pub room: RoomName,
    /// Position of the source itself, used to choose where its container goes.
    #[serde(default, deserialize_with = "deserialize_pos_leniently")]
    pub pos: Option<SerializedPos>,
    /// Path distance from the base.
    #[serde(default)]
    pub distance: u32,
    #[serde(default)]
    pub max_harvesters: usize,
    /// Names of harvesters assigned to the source.
    #[serde(default)]
    pub harvesters: Vec<String>,
    #[serde(default)]
    pub container: ContainerMemory,
}

/// State of the container next to a source. After a refresh at most one of `id` and `site` is
/// set. When neither is, a construction site is placed at `pos`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContainerMemory {
    /// ID of the built container.
    pub id: Option<String>,
    /// ID of the container's construction site.
    pub site: Option<String>,
    #[serde(deserialize_with = "deserialize_pos_leniently")]
    pub pos: Option<SerializedPos>,
    /// Amount of resources in the container during the last refresh.
    pub amount: u32,
    /// The container is built and close enough to full health to be relied on.
    pub ready: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BaseMemory {
    /// Names of the base's creeps by role name.
    pub creeps: FxHashMap<String, Vec<String>>,
    /// IDs of sources harvested by the base.
    pub sources: Vec<String>,
    /// IDs of the base's structures by type.
    pub structures: FxHashMap<StructureType, Vec<String>>,
    /// IDs of structures where collected resources are delivered.
    pub dropoffs: Vec<String>,
    /// IDs of structures where energy may be taken from.
    pub pickups: Vec<String>,
}

impl BaseMemory {
    pub fn creep_count(&self, role: CreepRole) -> usize {
        self.creeps.get(role.memory_name()).map_or(0, |names| names.len())
    }

    pub fn structure_count(&self, structure_type: StructureType) -> usize {
        self.structures.get(&structure_type).map_or(0, |ids| ids.len())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomMemory {
    /// Danger from hostiles in the room. Unknown until the room is scanned.
    pub threat_level: Option<u32>,
}

impl RoomMemory {
    pub fn is_safe(&self) -> bool {
        self.threat_level == Some(0)
    }
}

/// All state persisted between ticks that the planners read or write.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GlobalMemory {
    pub sources: FxHashMap<String, SourceMemory>,
    pub bases: FxHashMap<RoomName, BaseMemory>,
    pub rooms: FxHashMap<RoomName, RoomMemory>,
}

/// A section of `Memory` with its entries not parsed yet.
pub type RawSection = FxHashMap<String, Value>;

fn parse_entry<K, V>(key: String, value: Value) -> Result<(K, V), serde_json::Error>
where
    K: DeserializeOwned,
    V: DeserializeOwned,
{
    Ok((serde_json::from_value(Value::String(key))?, serde_json::from_value(value)?))
}

/// Parses the entries of a section one by one. Malformed entries are logged and skipped.
pub fn parse_section<K, V>(section_name: &str, raw: RawSection) -> FxHashMap<K, V>
where
    K: DeserializeOwned + Eq + Hash,
    V: DeserializeOwned,
{
    raw.into_iter()
        .filter_map(|(key, value)| {
            let description = format!("Skipping malformed entry {} of Memory.{}", key, section_name);
            parse_entry(key, value).warn_if_err(&description)
        })
        .collect()
}

impl GlobalMemory {
    pub fn from_raw_sections(sources: RawSection, bases: RawSection, rooms: RawSection) -> Self {
        GlobalMemory {
            sources: parse_section("sources", sources),
            bases: parse_section("bases", bases),
            rooms: parse_section("rooms", rooms),
        }
    }

    pub fn source(&self, id: &str) -> Option<&SourceMemory> {
        self.sources.get(id)
    }

    pub fn source_mut(&mut self, id: &str) -> Option<&mut SourceMemory> {
        self.sources.get_mut(id)
    }

    pub fn set_source(&mut self, id: String, source: SourceMemory) {
        self.sources.insert(id, source);
    }

    pub fn base(&self, base_name: RoomName) -> Option<&BaseMemory> {
        self.bases.get(&base_name)
    }

    pub fn set_base(&mut self, base_name: RoomName, base: BaseMemory) {
        self.bases.insert(base_name, base);
    }

    /// Names of all bases in a stable order.
    pub fn base_names(&self) -> Vec<RoomName> {
        let mut base_names = self.bases.keys().copied().collect::<Vec<_>>();
        base_names.sort_by_key(|room_name| room_name.to_string());
        base_names
    }

    pub fn room(&self, room_name: RoomName) -> Option<&RoomMemory> {
        self.rooms.get(&room_name)
    }

    pub fn set_room(&mut self, room_name: RoomName, room: RoomMemory) {
        self.rooms.insert(room_name, room);
    }

    /// Whether the room is known to have no hostiles.
    pub fn is_room_safe(&self, room_name: RoomName) -> bool {
        self.room(room_name).is_some_and(RoomMemory::is_safe)
    }
}

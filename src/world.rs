use derive_more::Constructor;
use screeps::{Position, RoomName, RoomXY, StructureType, Terrain};
use crate::errors::XiError;

pub mod game_world;
#[cfg(test)]
pub mod test_world;

/// Read access to the current tick's game state, plus the few actions the planners perform.
/// Implemented on top of the game API and by a fake world in tests.
pub trait WorldView {
    /// A creep of the player with given name.
    fn creep(&self, name: &str) -> Option<CreepSnapshot>;
    /// A structure owned by the player with given ID.
    fn owned_structure(&self, id: &str) -> Option<StructureSnapshot>;
    /// Any visible structure with given ID, including unowned ones such as containers.
    fn structure_by_id(&self, id: &str) -> Option<StructureSnapshot>;
    fn construction_site(&self, id: &str) -> Option<ConstructionSiteSnapshot>;

    fn is_room_visible(&self, room_name: RoomName) -> bool;
    fn controller_level(&self, room_name: RoomName) -> Option<u8>;
    fn terrain(&self, room_name: RoomName, xy: RoomXY) -> Terrain;
    /// Everything at the tile, including its terrain.
    fn look_at(&self, room_name: RoomName, xy: RoomXY) -> Vec<LookResult>;
    fn structures_at(&self, pos: Position) -> Vec<StructureSnapshot>;
    fn construction_sites_at(&self, pos: Position) -> Vec<ConstructionSiteSnapshot>;

    /// Cost of the shortest path from `from` to within `range` of `to` with all walkable terrain
    /// costing 1.
    fn search_path(&self, from: Position, to: Position, range: u32) -> PathSearchResult;

    fn create_construction_site(&self, pos: Position, structure_type: StructureType) -> Result<(), XiError>;
}

/// Something with a position in the world.
pub trait Located {
    fn pos(&self) -> Position;
}

#[derive(Debug, Clone, PartialEq, Eq, Constructor)]
pub struct CreepSnapshot {
    pub name: String,
    pub pos: Position,
}

impl Located for CreepSnapshot {
    fn pos(&self) -> Position {
        self.pos
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Constructor)]
pub struct StructureSnapshot {
    pub id: String,
    pub structure_type: StructureType,
    pub pos: Position,
    pub hits: u32,
    pub hits_max: u32,
    pub store: StoreSnapshot,
}

impl Located for StructureSnapshot {
    fn pos(&self) -> Position {
        self.pos
    }
}

/// Contents of a structure's store.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StoreSnapshot {
    /// A store that may hold any resource, e.g., in a container or storage.
    General { used: u32, energy: u32, capacity: u32 },
    /// A store that only holds energy, e.g., in a spawn or extension.
    EnergyOnly { energy: u32, capacity: u32 },
    /// The structure cannot store anything.
    NoStore,
}

impl StoreSnapshot {
    /// Total amount of resources in the store.
    pub fn current_amount(&self) -> u32 {
        match *self {
            StoreSnapshot::General { used, .. } => used,
            StoreSnapshot::EnergyOnly { energy, .. } => energy,
            StoreSnapshot::NoStore => 0,
        }
    }

    pub fn energy(&self) -> u32 {
        match *self {
            StoreSnapshot::General { energy, .. } => energy,
            StoreSnapshot::EnergyOnly { energy, .. } => energy,
            StoreSnapshot::NoStore => 0,
        }
    }

    pub fn capacity(&self) -> u32 {
        match *self {
            StoreSnapshot::General { capacity, .. } => capacity,
            StoreSnapshot::EnergyOnly { capacity, .. } => capacity,
            StoreSnapshot::NoStore => 0,
        }
    }

    /// Whether more resources can be put into the store.
    pub fn has_free_capacity(&self) -> bool {
        match self {
            StoreSnapshot::NoStore => false,
            _ => self.current_amount() != self.capacity(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Constructor)]
pub struct ConstructionSiteSnapshot {
    pub id: String,
    pub structure_type: StructureType,
    pub pos: Position,
}

/// A single entry of what is present on a tile.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LookResult {
    Terrain(Terrain),
    Structure(StructureType),
    ConstructionSite(StructureType),
    Creep,
    Other,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Constructor)]
pub struct PathSearchResult {
    pub cost: u32,
    /// The search stopped before reaching the target, so the cost is not a valid distance.
    pub incomplete: bool,
}

#[cfg(test)]
mod tests {
    use crate::world::StoreSnapshot;

    #[test]
    fn test_general_store() {
        let store = StoreSnapshot::General { used: 2000, energy: 1500, capacity: 2000 };
        assert_eq!(store.current_amount(), 2000);
        assert_eq!(store.energy(), 1500);
        assert!(!store.has_free_capacity());
    }

    #[test]
    fn test_energy_only_store() {
        let store = StoreSnapshot::EnergyOnly { energy: 20, capacity: 50 };
        assert_eq!(store.current_amount(), 20);
        assert_eq!(store.capacity(), 50);
        assert!(store.has_free_capacity());
    }

    #[test]
    fn test_no_store() {
        assert!(!StoreSnapshot::NoStore.has_free_capacity());
        assert_eq!(StoreSnapshot::NoStore.energy(), 0);
    }
}

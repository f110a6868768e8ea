use std::cell::RefCell;
use rustc_hash::{FxHashMap, FxHashSet};
use screeps::{Position, RoomName, RoomXY, StructureType, Terrain};
use crate::errors::XiError;
use crate::geometry::room_xy::RoomXYUtils;
use crate::world::{ConstructionSiteSnapshot, CreepSnapshot, LookResult, PathSearchResult, StoreSnapshot, StructureSnapshot, WorldView};

/// An in-memory world for tests. Terrain is plain unless set otherwise. Paths cost the range to
/// the target minus the allowed range unless the target was marked as unreachable or given an
/// explicit cost.
#[derive(Default)]
pub struct TestWorld {
    pub creeps: FxHashMap<String, CreepSnapshot>,
    pub owned_structures: FxHashMap<String, StructureSnapshot>,
    pub unowned_structures: FxHashMap<String, StructureSnapshot>,
    pub construction_sites: FxHashMap<String, ConstructionSiteSnapshot>,
    pub visible_rooms: FxHashSet<RoomName>,
    pub controller_levels: FxHashMap<RoomName, u8>,
    pub terrain: FxHashMap<(RoomName, RoomXY), Terrain>,
    pub path_costs: FxHashMap<Position, u32>,
    pub unreachable: FxHashSet<Position>,
    /// Positions where creating a construction site fails.
    pub blocked_sites: FxHashSet<Position>,
    pub created_sites: RefCell<Vec<(Position, StructureType)>>,
    pub path_searches: RefCell<u32>,
}

impl TestWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_creep(&mut self, name: &str, pos: Position) {
        self.creeps.insert(name.to_string(), CreepSnapshot::new(name.to_string(), pos));
    }

    pub fn add_owned_structure(&mut self, structure: StructureSnapshot) {
        self.owned_structures.insert(structure.id.clone(), structure);
    }

    pub fn add_unowned_structure(&mut self, structure: StructureSnapshot) {
        self.unowned_structures.insert(structure.id.clone(), structure);
    }

    pub fn add_construction_site(&mut self, id: &str, structure_type: StructureType, pos: Position) {
        self.construction_sites.insert(id.to_string(), ConstructionSiteSnapshot::new(id.to_string(), structure_type, pos));
    }

    pub fn set_wall(&mut self, room_name: RoomName, xy: RoomXY) {
        self.terrain.insert((room_name, xy), Terrain::Wall);
    }

    pub fn created_sites(&self) -> Vec<(Position, StructureType)> {
        self.created_sites.borrow().clone()
    }

    fn all_structures(&self) -> impl Iterator<Item = &StructureSnapshot> {
        self.owned_structures.values().chain(self.unowned_structures.values())
    }
}

pub fn test_structure(id: &str, structure_type: StructureType, pos: Position, store: StoreSnapshot) -> StructureSnapshot {
    StructureSnapshot::new(id.to_string(), structure_type, pos, 250_000, 250_000, store)
}

impl WorldView for TestWorld {
    fn creep(&self, name: &str) -> Option<CreepSnapshot> {
        self.creeps.get(name).cloned()
    }

    fn owned_structure(&self, id: &str) -> Option<StructureSnapshot> {
        self.owned_structures.get(id).cloned()
    }

    fn structure_by_id(&self, id: &str) -> Option<StructureSnapshot> {
        self.owned_structures.get(id).or_else(|| self.unowned_structures.get(id)).cloned()
    }

    fn construction_site(&self, id: &str) -> Option<ConstructionSiteSnapshot> {
        self.construction_sites.get(id).cloned()
    }

    fn is_room_visible(&self, room_name: RoomName) -> bool {
        self.visible_rooms.contains(&room_name)
    }

    fn controller_level(&self, room_name: RoomName) -> Option<u8> {
        self.controller_levels.get(&room_name).copied()
    }

    fn terrain(&self, room_name: RoomName, xy: RoomXY) -> Terrain {
        self.terrain.get(&(room_name, xy)).copied().unwrap_or(Terrain::Plain)
    }

    fn look_at(&self, room_name: RoomName, xy: RoomXY) -> Vec<LookResult> {
        let pos = xy.to_pos(room_name);
        let mut result = vec![LookResult::Terrain(self.terrain(room_name, xy))];
        result.extend(self.structures_at(pos).into_iter().map(|s| LookResult::Structure(s.structure_type)));
        result.extend(self.construction_sites_at(pos).into_iter().map(|s| LookResult::ConstructionSite(s.structure_type)));
        result.extend(self.creeps.values().filter(|c| c.pos == pos).map(|_| LookResult::Creep));
        result
    }

    fn structures_at(&self, pos: Position) -> Vec<StructureSnapshot> {
        self.all_structures().filter(|s| s.pos == pos).cloned().collect()
    }

    fn construction_sites_at(&self, pos: Position) -> Vec<ConstructionSiteSnapshot> {
        self.construction_sites.values().filter(|s| s.pos == pos).cloned().collect()
    }

    fn search_path(&self, from: Position, to: Position, range: u32) -> PathSearchResult {
        *self.path_searches.borrow_mut() += 1;
        if self.unreachable.contains(&to) {
            PathSearchResult::new(0, true)
        } else if let Some(&cost) = self.path_costs.get(&to) {
            PathSearchResult::new(cost, false)
        } else if from.room_name() == to.room_name() {
            PathSearchResult::new(from.get_range_to(to).saturating_sub(range), false)
        } else {
            PathSearchResult::new(0, true)
        }
    }

    fn create_construction_site(&self, pos: Position, structure_type: StructureType) -> Result<(), XiError> {
        if self.blocked_sites.contains(&pos) {
            Err(XiError::ConstructionSiteNotCreated(format!("{:?} blocked", pos)))
        } else {
            self.created_sites.borrow_mut().push((pos, structure_type));
            Ok(())
        }
    }
}

use std::str::FromStr;
use log::trace;
use screeps::game::get_object_by_id_typed;
use screeps::look::LookResult as GameLookResult;
use screeps::pathfinder::SearchOptions;
use screeps::{
    game, look, pathfinder, ConstructionSite, HasId, HasPosition, MaybeHasId, ObjectId, OwnedStructureProperties, Position,
    RawObjectId, ResourceType, RoomName, RoomXY, Structure, StructureObject, StructureType, Terrain,
};
use crate::errors::XiError;
use crate::world::{
    ConstructionSiteSnapshot, CreepSnapshot, LookResult, PathSearchResult, StoreSnapshot, StructureSnapshot, WorldView,
};

/// `WorldView` backed by the live game state of the current tick.
#[derive(Debug, Default, Copy, Clone)]
pub struct GameWorld;

fn parse_id(id: &str) -> Result<RawObjectId, XiError> {
    RawObjectId::from_str(id).map_err(|_| XiError::ObjectDoesNotExist)
}

fn structure_object_by_id(id: &str) -> Result<StructureObject, XiError> {
    let id: ObjectId<Structure> = parse_id(id)?.into();
    match get_object_by_id_typed(&id) {
        Some(structure) => Ok(structure.into()),
        None => Err(XiError::ObjectDoesNotExist),
    }
}

fn construction_site_by_id(id: &str) -> Result<ConstructionSite, XiError> {
    let id: ObjectId<ConstructionSite> = parse_id(id)?.into();
    get_object_by_id_typed(&id).ok_or(XiError::ObjectDoesNotExist)
}

/// Structures whose store only ever holds energy.
fn has_energy_only_store(structure_type: StructureType) -> bool {
    matches!(
        structure_type,
        StructureType::Spawn | StructureType::Extension | StructureType::Tower | StructureType::Link
    )
}

fn store_snapshot(structure: &StructureObject) -> StoreSnapshot {
    let Some(has_store) = structure.as_has_store() else {
        return StoreSnapshot::NoStore;
    };
    let store = has_store.store();
    if has_energy_only_store(structure.as_structure().structure_type()) {
        StoreSnapshot::EnergyOnly {
            energy: store.get_used_capacity(Some(ResourceType::Energy)),
            capacity: store.get_capacity(Some(ResourceType::Energy)),
        }
    } else {
        StoreSnapshot::General {
            used: store.get_used_capacity(None),
            energy: store.get_used_capacity(Some(ResourceType::Energy)),
            capacity: store.get_capacity(None),
        }
    }
}

fn structure_snapshot(structure: &StructureObject) -> StructureSnapshot {
    let base = structure.as_structure();
    StructureSnapshot::new(
        base.id().to_string(),
        base.structure_type(),
        base.pos(),
        base.hits(),
        base.hits_max(),
        store_snapshot(structure),
    )
}

fn construction_site_snapshot(construction_site: &ConstructionSite) -> Option<ConstructionSiteSnapshot> {
    Some(ConstructionSiteSnapshot::new(
        construction_site.try_id()?.to_string(),
        construction_site.structure_type(),
        construction_site.pos(),
    ))
}

fn look_result(result: GameLookResult) -> LookResult {
    match result {
        GameLookResult::Terrain(terrain) => LookResult::Terrain(terrain),
        GameLookResult::Structure(structure) => LookResult::Structure(structure.structure_type()),
        GameLookResult::ConstructionSite(construction_site) => {
            LookResult::ConstructionSite(construction_site.structure_type())
        }
        GameLookResult::Creep(_) => LookResult::Creep,
        _ => LookResult::Other,
    }
}

impl WorldView for GameWorld {
    fn creep(&self, name: &str) -> Option<CreepSnapshot> {
        let creep = game::creeps().get(name.to_string())?;
        Some(CreepSnapshot::new(name.to_string(), creep.pos()))
    }

    fn owned_structure(&self, id: &str) -> Option<StructureSnapshot> {
        let structure = structure_object_by_id(id).ok()?;
        let owned = structure.as_owned().is_some_and(OwnedStructureProperties::my);
        owned.then(|| structure_snapshot(&structure))
    }

    fn structure_by_id(&self, id: &str) -> Option<StructureSnapshot> {
        structure_object_by_id(id).ok().map(|structure| structure_snapshot(&structure))
    }

    fn construction_site(&self, id: &str) -> Option<ConstructionSiteSnapshot> {
        construction_site_by_id(id)
            .ok()
            .and_then(|construction_site| construction_site_snapshot(&construction_site))
    }

    fn is_room_visible(&self, room_name: RoomName) -> bool {
        game::rooms().get(room_name).is_some()
    }

    fn controller_level(&self, room_name: RoomName) -> Option<u8> {
        game::rooms().get(room_name)?.controller().map(|controller| controller.level())
    }

    fn terrain(&self, room_name: RoomName, xy: RoomXY) -> Terrain {
        game::map::get_room_terrain(room_name).map_or(Terrain::Wall, |terrain| terrain.get(xy.x.u8(), xy.y.u8()))
    }

    fn look_at(&self, room_name: RoomName, xy: RoomXY) -> Vec<LookResult> {
        let Some(room) = game::rooms().get(room_name) else {
            return vec![LookResult::Terrain(self.terrain(room_name, xy))];
        };
        room.look_at_xy(xy.x.u8(), xy.y.u8()).into_iter().map(look_result).collect()
    }

    fn structures_at(&self, pos: Position) -> Vec<StructureSnapshot> {
        pos.look_for(look::STRUCTURES)
            .unwrap_or_default()
            .iter()
            .map(structure_snapshot)
            .collect()
    }

    fn construction_sites_at(&self, pos: Position) -> Vec<ConstructionSiteSnapshot> {
        pos.look_for(look::CONSTRUCTION_SITES)
            .unwrap_or_default()
            .iter()
            .filter_map(construction_site_snapshot)
            .collect()
    }

    fn search_path(&self, from: Position, to: Position, range: u32) -> PathSearchResult {
        let options = SearchOptions::default().plain_cost(1).swamp_cost(1);
        let result = pathfinder::search(from, to, range, Some(options));
        trace!("Path search from {} to {} cost {} (incomplete: {}).", from, to, result.cost(), result.incomplete());
        PathSearchResult::new(result.cost(), result.incomplete())
    }

    fn create_construction_site(&self, pos: Position, structure_type: StructureType) -> Result<(), XiError> {
        let room = game::rooms().get(pos.room_name()).ok_or(XiError::RoomNotVisible)?;
        room.create_construction_site(pos.x().u8(), pos.y().u8(), structure_type, None)
            .map_err(|e| XiError::ConstructionSiteNotCreated(format!("{:?} at {}: {:?}", structure_type, pos, e)))
    }
}

#[cfg(test)]
mod tests {
    use screeps::StructureType;
    use crate::world::game_world::{has_energy_only_store, GameWorld};
    use crate::world::WorldView;

    #[test]
    fn test_game_world_is_a_world_view() {
        let world: &dyn WorldView = &GameWorld;
        let _ = world;
    }

    #[test]
    fn test_energy_only_stores() {
        assert!(has_energy_only_store(StructureType::Spawn));
        assert!(has_energy_only_store(StructureType::Extension));
        assert!(has_energy_only_store(StructureType::Link));
        assert!(!has_energy_only_store(StructureType::Container));
        assert!(!has_energy_only_store(StructureType::Storage));
    }
}

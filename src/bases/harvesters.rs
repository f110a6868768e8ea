use enum_iterator::all;
use log::{debug, trace, warn};
use screeps::RoomName;
use screeps::StructureType::Extension;
use crate::bases::containers::refresh_container;
use crate::consts::{max_extensions_at_rcl, BOOTSTRAP_CREEPS_LIMIT, MAX_HARVESTERS_PER_SOURCE};
use crate::creeps::creep_role::CreepRole;
use crate::memory::GlobalMemory;
use crate::priorities::{
    EXTENSION_PRIORITY, FIRST_EXTENSION_PRIORITY, FIRST_HARVESTER_SPAWN_PRIORITY, HARVESTER_SPAWN_PRIORITY,
    SCAVENGER_SPAWN_PRIORITY, SIMPLE_HARVESTER_SPAWN_PRIORITY,
};
use crate::spawning::requests::{BaseRequests, CreepRequest};
use crate::world::WorldView;

/// Refreshes the containers of the base's sources and requests the harvesters, scavengers and
/// extensions the base is missing.
pub fn update_base<W>(world: &W, memory: &mut GlobalMemory, base_name: RoomName, requests: &mut BaseRequests)
where
    W: WorldView + ?Sized,
{
    let Some(base) = memory.base(base_name).cloned() else {
        warn!("Missing memory of base {}.", base_name);
        return;
    };

    trace!(
        "Creeps of base {}: {}.",
        base_name,
        all::<CreepRole>()
            .map(|role| format!("{} x{}", role, base.creep_count(role)))
            .collect::<Vec<_>>()
            .join(", ")
    );

    let simple_harvester_count = base.creep_count(CreepRole::SimpleHarvester);
    let collector_count = base.creep_count(CreepRole::Collector);

    for source_id in base.sources.iter() {
        let Some(source) = memory.source_mut(source_id) else {
            warn!("Missing memory of source {} of base {}.", source_id, base_name);
            continue;
        };

        let has_ready_container = refresh_container(world, source_id, source);
        let max_harvesters = source.max_harvesters.min(MAX_HARVESTERS_PER_SOURCE);
        let harvester_count = source.harvesters.len();
        let source_room_name = source.room;

        if harvester_count >= max_harvesters {
            continue;
        }

        if !memory.is_room_safe(source_room_name) {
            trace!("Not requesting harvesters for source {} in unsafe room {}.", source_id, source_room_name);
            continue;
        }

        let (role, priority) = if !has_ready_container
            && simple_harvester_count < BOOTSTRAP_CREEPS_LIMIT
            && collector_count < BOOTSTRAP_CREEPS_LIMIT
        {
            (CreepRole::SimpleHarvester, SIMPLE_HARVESTER_SPAWN_PRIORITY)
        } else if harvester_count == 0 {
            (CreepRole::Harvester, FIRST_HARVESTER_SPAWN_PRIORITY)
        } else {
            (CreepRole::Harvester, HARVESTER_SPAWN_PRIORITY)
        };

        debug!("Requesting {} {} for source {} of base {}.", role, priority, source_id, base_name);
        requests
            .creep_requests
            .add(priority, CreepRequest::new(role, Some(source_id.clone())));
    }

    if base.creep_count(CreepRole::Scavenger) == 0 {
        debug!("Requesting {} {} for base {}.", CreepRole::Scavenger, SCAVENGER_SPAWN_PRIORITY, base_name);
        requests
            .creep_requests
            .add(SCAVENGER_SPAWN_PRIORITY, CreepRequest::new(CreepRole::Scavenger, None));
    }

    match world.controller_level(base_name) {
        Some(rcl) => {
            let extension_count = base.structure_count(Extension);
            let max_extensions = max_extensions_at_rcl(rcl) as usize;
            if extension_count < max_extensions {
                let priority = if extension_count == 0 {
                    FIRST_EXTENSION_PRIORITY
                } else {
                    EXTENSION_PRIORITY
                };
                debug!(
                    "Requesting an extension {} in base {} with {}/{} extensions.",
                    priority, base_name, extension_count, max_extensions
                );
                requests.structure_requests.add(priority, Extension);
            }
        }
        None => {
            warn!("Controller of base {} is not visible.", base_name);
        }
    }
}

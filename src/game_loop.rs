use log::{debug, info};
use rustc_hash::FxHashMap;
use screeps::{game, RoomName};
use crate::bases::harvesters::update_base;
use crate::config::LOG_LEVEL;
use crate::game_tick::ticks_since_restart;
use crate::logging;
use crate::memory::js_memory::{load_memory, save_containers};
use crate::memory::GlobalMemory;
use crate::spawning::requests::{publish_requests, take_published_requests, BaseRequests};
use crate::utils::result_utils::ResultUtils;
use crate::world::game_world::GameWorld;
use crate::world::WorldView;

pub fn setup() {
    logging::init_logging(LOG_LEVEL);
}

pub fn game_loop() {
    let ticks_since_restart = ticks_since_restart();

    info!(
        "Tick: {} / {} -- CPU: {}/{}",
        ticks_since_restart,
        game::time(),
        game::cpu::tick_limit(),
        game::cpu::bucket()
    );

    let mut memory = match load_memory() {
        Ok(memory) => memory,
        Err(e) => {
            e.warn("Failed to load memory");
            GlobalMemory::default()
        }
    };

    let requests = plan_bases(&GameWorld, &mut memory);

    save_containers(&memory).warn_if_err("Failed to save the state of containers");
    publish_requests(requests);

    if ticks_since_restart == 0 {
        info!("Initialization used {}CPU.", game::cpu::get_used());
    }
}

/// Runs the planners of all bases, returning what each base requests this tick.
pub fn plan_bases<W>(world: &W, memory: &mut GlobalMemory) -> FxHashMap<RoomName, BaseRequests>
where
    W: WorldView + ?Sized,
{
    let mut all_requests = FxHashMap::default();
    for base_name in memory.base_names() {
        let mut requests = BaseRequests::default();
        update_base(world, memory, base_name, &mut requests);
        debug!(
            "Base {} requests {} creeps and {} structures.",
            base_name,
            requests.creep_requests.len(),
            requests.structure_requests.len()
        );
        all_requests.insert(base_name, requests);
    }
    all_requests
}

/// The requests of the last tick as a JSON object keyed by base name.
pub fn take_requests_json() -> String {
    serde_json::to_string(&take_published_requests())
        .warn_if_err("Failed to serialize requests")
        .unwrap_or_default()
}

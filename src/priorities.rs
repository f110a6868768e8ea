use crate::utils::priority::Priority;

/// Bootstrapping energy income before any container is usable.
pub const SIMPLE_HARVESTER_SPAWN_PRIORITY: Priority = Priority(0.99);
/// The first harvester of a source that has none.
pub const FIRST_HARVESTER_SPAWN_PRIORITY: Priority = Priority(0.96);
pub const HARVESTER_SPAWN_PRIORITY: Priority = Priority(0.80);
pub const SCAVENGER_SPAWN_PRIORITY: Priority = Priority(0.62);

pub const FIRST_EXTENSION_PRIORITY: Priority = Priority(0.98);
pub const EXTENSION_PRIORITY: Priority = Priority(0.90);

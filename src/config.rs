use log::LevelFilter;

pub const LOG_LEVEL: LevelFilter = LevelFilter::Debug;

/// Number of random tiles tried for each radius tier when looking for a place to build.
pub const BUILD_POSITION_TRIALS_PER_RADIUS: u32 = 5;

/// Tunable parameters of the randomized build position search.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PlacementConfig {
    pub trials_per_radius: u32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        PlacementConfig {
            trials_per_radius: BUILD_POSITION_TRIALS_PER_RADIUS,
        }
    }
}

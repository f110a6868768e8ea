use screeps::ROOM_SIZE;

pub const ROOM_AREA: usize = (ROOM_SIZE as usize) * (ROOM_SIZE as usize);

/// Initial best distance in nearest-match searches. Any real candidate is closer.
pub const UNREACHABLE_DISTANCE: u32 = 9999;

/// Approximate distance of crossing one room, used when comparing positions in different rooms.
pub const ROOM_CROSSING_DISTANCE: u32 = ROOM_SIZE as u32;

/// A container is ready to be used for static harvesting when it is missing at most this many hits.
pub const CONTAINER_READY_HITS_MARGIN: u32 = 5000;

/// More harvesters than this on a single source just get in each other's way.
pub const MAX_HARVESTERS_PER_SOURCE: usize = 3;

/// Below this many simple harvesters and collectors, a base without a ready container bootstraps its
/// energy income with simple harvesters.
pub const BOOTSTRAP_CREEPS_LIMIT: usize = 3;

/// Minimal distance of a container from any room edge.
pub const CONTAINER_EDGE_MARGIN: u8 = 2;

/// Number of extensions the controller allows at given RCL.
pub fn max_extensions_at_rcl(rcl: u8) -> u32 {
    match rcl {
        0 | 1 => 0,
        2 => 5,
        3 => 10,
        4 => 20,
        5 => 30,
        6 => 40,
        7 => 50,
        _ => 60,
    }
}

#[cfg(test)]
mod tests {
    use crate::consts::max_extensions_at_rcl;

    #[test]
    fn test_extension_caps() {
        assert_eq!(max_extensions_at_rcl(0), 0);
        assert_eq!(max_extensions_at_rcl(1), 0);
        assert_eq!(max_extensions_at_rcl(2), 5);
        assert_eq!(max_extensions_at_rcl(7), 50);
        assert_eq!(max_extensions_at_rcl(8), 60);
    }
}

use rustc_hash::FxHashSet;
use screeps::{Position, RoomXY, Terrain};
use crate::consts::CONTAINER_EDGE_MARGIN;
use crate::geometry::room_xy::RoomXYUtils;
use crate::world::WorldView;

const CONTAINER_DISTANCE: u8 = 2;

/// Non-wall tiles around the position in row-major order.
pub fn find_spaces_around<W>(world: &W, pos: Position) -> Vec<RoomXY>
where
    W: WorldView + ?Sized,
{
    pos.xy()
        .around()
        .into_iter()
        .filter(|&xy| world.terrain(pos.room_name(), xy) != Terrain::Wall)
        .collect()
}

/// Chooses a tile for a container on the boundary of the square with radius 2 around the center,
/// e.g., a source. The square is clamped to keep a margin from room edges and the sides moved by
/// clamping are not considered. The tile with the most neighbors in `open_spots` wins, with the
/// first one in order of top, bottom, left and right sides winning ties. Tiles without any open
/// neighbors are never chosen.
pub fn find_container_pos<W>(world: &W, center: Position, open_spots: &[RoomXY]) -> Option<Position>
where
    W: WorldView + ?Sized,
{
    let room_name = center.room_name();
    let open_spots = open_spots.iter().copied().collect::<FxHashSet<_>>();
    let (x, y) = (center.x().u8(), center.y().u8());

    let min_edge = CONTAINER_EDGE_MARGIN;
    let max_edge = screeps::ROOM_SIZE - 1 - CONTAINER_EDGE_MARGIN;
    let min_x = x.saturating_sub(CONTAINER_DISTANCE).max(min_edge);
    let min_y = y.saturating_sub(CONTAINER_DISTANCE).max(min_edge);
    let max_x = (x + CONTAINER_DISTANCE).min(max_edge);
    let max_y = (y + CONTAINER_DISTANCE).min(max_edge);

    let mut candidates = Vec::new();
    if min_y + CONTAINER_DISTANCE == y {
        candidates.extend((min_x..=max_x).map(|x| (x, min_y)));
    }
    if max_y == y + CONTAINER_DISTANCE {
        candidates.extend((min_x..=max_x).map(|x| (x, max_y)));
    }
    if min_x + CONTAINER_DISTANCE == x {
        candidates.extend((min_y..=max_y).map(|y| (min_x, y)));
    }
    if max_x == x + CONTAINER_DISTANCE {
        candidates.extend((min_y..=max_y).map(|y| (max_x, y)));
    }

    let mut best_xy = None;
    let mut best_count = 0;
    for (x, y) in candidates {
        // Clamped coordinates are within the room.
        let xy = unsafe { RoomXY::unchecked_new(x, y) };
        if world.terrain(room_name, xy) == Terrain::Wall {
            continue;
        }
        let count = xy.around().into_iter().filter(|near| open_spots.contains(near)).count();
        if count > best_count {
            best_count = count;
            best_xy = Some(xy);
        }
    }

    best_xy.map(|xy| xy.to_pos(room_name))
}

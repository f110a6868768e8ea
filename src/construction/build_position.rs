use log::trace;
use screeps::{Position, RoomName, RoomXY, Terrain};
use crate::algorithms::room_matrix::CostMatrix;
use crate::config::PlacementConfig;
use crate::geometry::room_xy::{xy_in_room, RoomXYUtils};
use crate::world::{LookResult, WorldView};

/// Random offset within `[-radius, radius)` pushed away from the center by `min_radius`.
/// Offsets that are not positive are pushed in the negative direction.
fn random_offset<R>(radius: u8, min_radius: u8, random: &mut R) -> f64
where
    R: FnMut() -> f64,
{
    let radius = radius as f64;
    let offset = random() * radius * 2.0 - radius;
    if offset > 0.0 {
        offset + min_radius as f64
    } else {
        offset - min_radius as f64
    }
}

/// Rounds half up, so that `-2.5` becomes `-2`.
fn round_to_tile(coordinate: f64) -> i16 {
    (coordinate + 0.5).floor() as i16
}

/// A tile is buildable when there is nothing on it but terrain other than a wall.
fn is_buildable<W>(world: &W, room_name: RoomName, xy: RoomXY) -> bool
where
    W: WorldView + ?Sized,
{
    world
        .look_at(room_name, xy)
        .into_iter()
        .all(|result| matches!(result, LookResult::Terrain(terrain) if terrain != Terrain::Wall))
}

/// Randomly looks for an empty buildable tile at least `min_radius` away from the center along
/// both axes. The search goes through tiers of growing maximum distance, from `min_radius` up to
/// `max_radius` in steps of 2, with `config.trials_per_radius` random tiles tried in each.
/// Tiles with a non-zero cost are skipped. Returns `None` when all trials fail, in which case the
/// search may be repeated in a later tick.
pub fn find_build_position<W, R>(
    world: &W,
    room_name: RoomName,
    center: RoomXY,
    min_radius: u8,
    max_radius: u8,
    costs: &CostMatrix,
    config: &PlacementConfig,
    random: &mut R,
) -> Option<Position>
where
    W: WorldView + ?Sized,
    R: FnMut() -> f64,
{
    let (center_x, center_y) = (center.x.u8() as f64, center.y.u8() as f64);

    for tier in (min_radius..=max_radius).step_by(2) {
        let radius = tier - min_radius;
        for _ in 0..config.trials_per_radius {
            let x = round_to_tile(center_x + random_offset(radius, min_radius, random));
            let y = round_to_tile(center_y + random_offset(radius, min_radius, random));

            let Some(xy) = xy_in_room(x, y) else {
                continue;
            };

            if costs.get(xy) == 0 && is_buildable(world, room_name, xy) {
                trace!("Found a build position {} in {} around {}.", xy, room_name, center);
                return Some(xy.to_pos(room_name));
            }
        }
    }

    trace!(
        "Failed to find a build position in {} around {} within radius {}..{}.",
        room_name, center, min_radius, max_radius
    );
    None
}

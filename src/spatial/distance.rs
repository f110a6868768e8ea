use screeps::Position;
use crate::consts::ROOM_CROSSING_DISTANCE;
use crate::errors::XiError;
use crate::geometry::position_utils::room_linear_distance;
use crate::world::WorldView;

/// Cost of walking from `from` next to `to`, with swamps costing the same as plains.
/// `None` if no path was found within the search limits.
pub fn distance_by_path<W>(world: &W, from: Position, to: Position) -> Option<u32>
where
    W: WorldView + ?Sized,
{
    path_cost(world, from, to).ok()
}

fn path_cost<W>(world: &W, from: Position, to: Position) -> Result<u32, XiError>
where
    W: WorldView + ?Sized,
{
    let result = world.search_path(from, to, 1);
    if result.incomplete {
        Err(XiError::PathNotFound)
    } else {
        Ok(result.cost)
    }
}

/// Range between the positions. Each room between positions in different rooms counts as a full
/// room width, ignoring where in the rooms they are.
pub fn distance_by_range(from: Position, to: Position) -> u32 {
    if from.room_name() == to.room_name() {
        from.get_range_to(to)
    } else {
        room_linear_distance(from.room_name(), to.room_name()) * ROOM_CROSSING_DISTANCE
    }
}

use screeps::Position;
use crate::consts::UNREACHABLE_DISTANCE;
use crate::memory::BaseMemory;
use crate::spatial::distance::{distance_by_path, distance_by_range};
use crate::world::{CreepSnapshot, Located, StoreSnapshot, StructureSnapshot, WorldView};

/// Creep with given name, if it is still alive.
fn resolve_creep<W>(world: &W, name: &str) -> Option<CreepSnapshot>
where
    W: WorldView + ?Sized,
{
    world.creep(name)
}

/// Structure with given ID. Structures that are not owned, e.g., containers, are not in the index
/// of owned structures and need a lookup by ID.
fn resolve_structure<W>(world: &W, id: &str) -> Option<StructureSnapshot>
where
    W: WorldView + ?Sized,
{
    world.owned_structure(id).or_else(|| world.structure_by_id(id))
}

/// Finds the candidate with the smallest distance. Candidates that no longer exist, do not
/// satisfy the filter or have an unknown distance are skipped. The first of equally close
/// candidates wins.
fn find_closest<'a, T, R, D, F>(
    keys: impl IntoIterator<Item = &'a String>,
    mut resolve: R,
    mut distance: D,
    filter: F,
) -> Option<T>
where
    T: Located,
    R: FnMut(&str) -> Option<T>,
    D: FnMut(Position) -> Option<u32>,
    F: Fn(&T) -> bool,
{
    let mut best = None;
    let mut best_distance = UNREACHABLE_DISTANCE;
    for key in keys {
        let Some(candidate) = resolve(key.as_str()) else {
            continue;
        };
        if !filter(&candidate) {
            continue;
        }
        if let Some(candidate_distance) = distance(candidate.pos()) {
            if candidate_distance < best_distance {
                best_distance = candidate_distance;
                best = Some(candidate);
            }
        }
    }
    best
}

pub fn find_closest_creep_by_path<'a, W, F>(
    world: &W,
    from: Position,
    creep_names: impl IntoIterator<Item = &'a String>,
    filter: F,
) -> Option<CreepSnapshot>
where
    W: WorldView + ?Sized,
    F: Fn(&CreepSnapshot) -> bool,
{
    find_closest(
        creep_names,
        |name| resolve_creep(world, name),
        |pos| distance_by_path(world, from, pos),
        filter,
    )
}

pub fn find_closest_structure_by_path<'a, W, F>(
    world: &W,
    from: Position,
    structure_ids: impl IntoIterator<Item = &'a String>,
    filter: F,
) -> Option<StructureSnapshot>
where
    W: WorldView + ?Sized,
    F: Fn(&StructureSnapshot) -> bool,
{
    find_closest(
        structure_ids,
        |id| resolve_structure(world, id),
        |pos| distance_by_path(world, from, pos),
        filter,
    )
}

pub fn find_closest_creep_by_range<'a, W, F>(
    world: &W,
    from: Position,
    creep_names: impl IntoIterator<Item = &'a String>,
    filter: F,
) -> Option<CreepSnapshot>
where
    W: WorldView + ?Sized,
    F: Fn(&CreepSnapshot) -> bool,
{
    find_closest(
        creep_names,
        |name| resolve_creep(world, name),
        |pos| Some(distance_by_range(from, pos)),
        filter,
    )
}

pub fn find_closest_structure_by_range<'a, W, F>(
    world: &W,
    from: Position,
    structure_ids: impl IntoIterator<Item = &'a String>,
    filter: F,
) -> Option<StructureSnapshot>
where
    W: WorldView + ?Sized,
    F: Fn(&StructureSnapshot) -> bool,
{
    find_closest(
        structure_ids,
        |id| resolve_structure(world, id),
        |pos| Some(distance_by_range(from, pos)),
        filter,
    )
}

/// The first creep that is alive and satisfies the filter.
pub fn find_any_creep<'a, W, F>(
    world: &W,
    creep_names: impl IntoIterator<Item = &'a String>,
    filter: F,
) -> Option<CreepSnapshot>
where
    W: WorldView + ?Sized,
    F: Fn(&CreepSnapshot) -> bool,
{
    creep_names
        .into_iter()
        .filter_map(|name| resolve_creep(world, name))
        .find(|creep| filter(creep))
}

/// The first structure that exists and satisfies the filter.
pub fn find_any_structure<'a, W, F>(
    world: &W,
    structure_ids: impl IntoIterator<Item = &'a String>,
    filter: F,
) -> Option<StructureSnapshot>
where
    W: WorldView + ?Sized,
    F: Fn(&StructureSnapshot) -> bool,
{
    structure_ids
        .into_iter()
        .filter_map(|id| resolve_structure(world, id))
        .find(|structure| filter(structure))
}

/// The closest of the base's dropoff structures that can still accept resources.
pub fn find_dropoff<W>(world: &W, from: Position, base: &BaseMemory) -> Option<StructureSnapshot>
where
    W: WorldView + ?Sized,
{
    find_closest_structure_by_range(world, from, &base.dropoffs, |structure| {
        structure.store.has_free_capacity()
    })
}

/// The closest of the base's pickup structures holding at least `amount` energy.
pub fn find_storage<W>(world: &W, from: Position, base: &BaseMemory, amount: u32) -> Option<StructureSnapshot>
where
    W: WorldView + ?Sized,
{
    find_closest_structure_by_range(world, from, &base.pickups, |structure| {
        structure.store != StoreSnapshot::NoStore && structure.store.energy() >= amount
    })
}

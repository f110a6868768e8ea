use log::{debug, trace};
use screeps::StructureType::Container;
use crate::consts::CONTAINER_READY_HITS_MARGIN;
use crate::construction::container_position::{find_container_pos, find_spaces_around};
use crate::geometry::position_utils::PositionUtils;
use crate::memory::SourceMemory;
use crate::serialization::position_codec::{deserialize_pos, SerializedPos};
use crate::utils::result_utils::ResultUtils;
use crate::world::WorldView;

/// Updates the state of the container next to the source and places its construction site when
/// there is neither a container nor a site. Returns whether the container is ready to be used.
/// Nothing is updated while the source's room is not visible.
pub fn refresh_container<W>(world: &W, source_id: &str, source: &mut SourceMemory) -> bool
where
    W: WorldView + ?Sized,
{
    if !world.is_room_visible(source.room) {
        trace!("Room {} of source {} is not visible.", source.room, source_id);
        return false;
    }

    if source.container.pos.is_none() {
        choose_container_pos(world, source_id, source);
    }

    let container = &mut source.container;
    container.amount = 0;
    let mut ready = false;

    if let Some(id) = container.id.clone() {
        container.site = None;
        match world.structure_by_id(&id) {
            Some(structure) => {
                container.amount = structure.store.current_amount();
                ready = structure.hits.saturating_add(CONTAINER_READY_HITS_MARGIN) >= structure.hits_max;
            }
            None => {
                debug!("Container {} of source {} was destroyed.", id, source_id);
                container.id = None;
            }
        }
    } else if let Some(site) = container.site.as_ref() {
        if world.construction_site(site).is_none() {
            debug!("Container construction site {} of source {} is gone.", site, source_id);
            container.site = None;
        }
    }

    if container.id.is_none() && container.site.is_none() {
        let pos = container
            .pos
            .as_ref()
            .and_then(|pos| deserialize_pos(pos).warn_if_err(&format!("Invalid container position of source {}", source_id)));

        if let Some(pos) = pos {
            match world.create_construction_site(pos, Container) {
                Ok(()) => {
                    debug!("Placed a container construction site of source {} at {}.", source_id, pos.f());
                }
                Err(e) => {
                    trace!("{}. Looking for an existing container of source {}.", e, source_id);
                    container.id = world
                        .structures_at(pos)
                        .into_iter()
                        .find(|structure| structure.structure_type == Container)
                        .map(|structure| structure.id);
                    container.site = world
                        .construction_sites_at(pos)
                        .into_iter()
                        .find(|site| site.structure_type == Container)
                        .map(|site| site.id);
                }
            }
        }
    }

    container.ready = ready;
    ready
}

/// Picks the tile next to the source with the most free space around it for the container.
fn choose_container_pos<W>(world: &W, source_id: &str, source: &mut SourceMemory)
where
    W: WorldView + ?Sized,
{
    let Some(source_pos) = source
        .pos
        .as_ref()
        .and_then(|pos| deserialize_pos(pos).warn_if_err(&format!("Invalid position of source {}", source_id)))
    else {
        return;
    };

    let open_spots = find_spaces_around(world, source_pos);
    match find_container_pos(world, source_pos, &open_spots) {
        Some(pos) => {
            debug!("Chose container position {} for source {}.", pos.f(), source_id);
            source.container.pos = Some(SerializedPos::from(pos));
        }
        None => {
            debug!("No place for a container next to source {}.", source_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use screeps::{Position, RoomName, StructureType};
    use crate::bases::containers::refresh_container;
    use crate::geometry::position_utils::PositionUtils;
    use crate::memory::{ContainerMemory, SourceMemory};
    use crate::serialization::position_codec::SerializedPos;
    use crate::world::test_world::{test_structure, TestWorld};
    use crate::world::StoreSnapshot;

    fn w1n1() -> RoomName {
        RoomName::from_str("W1N1").unwrap()
    }

    fn container_pos() -> Position {
        Position::new_from_raw(10, 11, w1n1())
    }

    fn source(container: ContainerMemory) -> SourceMemory {
        SourceMemory {
            room: w1n1(),
            pos: None,
            distance: 10,
            max_harvesters: 3,
            harvesters: Vec::new(),
            container,
        }
    }

    fn visible_world() -> TestWorld {
        let mut world = TestWorld::new();
        world.visible_rooms.insert(w1n1());
        world
    }

    fn container_structure(hits: u32) -> crate::world::StructureSnapshot {
        let mut structure = test_structure(
            "c1",
            StructureType::Container,
            container_pos(),
            StoreSnapshot::General { used: 700, energy: 500, capacity: 2000 },
        );
        structure.hits = hits;
        structure
    }

    #[test]
    fn test_healthy_container_is_ready() {
        let mut world = visible_world();
        let mut container = container_structure(245_000);
        container.hits_max = 250_000;
        world.add_unowned_structure(container);
        let mut source = source(ContainerMemory {
            id: Some("c1".to_string()),
            site: Some("stale".to_string()),
            amount: 3,
            ..ContainerMemory::default()
        });

        assert!(refresh_container(&world, "src1", &mut source));
        assert_eq!(source.container.amount, 700);
        assert_eq!(source.container.site, None);
        assert!(source.container.ready);
        assert!(world.created_sites().is_empty());
    }

    #[test]
    fn test_damaged_container_is_not_ready() {
        let mut world = visible_world();
        world.add_unowned_structure(container_structure(244_999));
        let mut source = source(ContainerMemory {
            id: Some("c1".to_string()),
            ready: true,
            ..ContainerMemory::default()
        });

        assert!(!refresh_container(&world, "src1", &mut source));
        assert_eq!(source.container.id, Some("c1".to_string()));
        assert!(!source.container.ready);
    }

    #[test]
    fn test_destroyed_container_is_replaced_by_site() {
        let world = visible_world();
        let mut source = source(ContainerMemory {
            id: Some("c1".to_string()),
            pos: Some(SerializedPos::from(container_pos())),
            amount: 100,
            ready: true,
            ..ContainerMemory::default()
        });

        assert!(!refresh_container(&world, "src1", &mut source));
        assert_eq!(source.container.id, None);
        assert_eq!(source.container.amount, 0);
        assert_eq!(world.created_sites(), vec![(container_pos(), StructureType::Container)]);
    }

    #[test]
    fn test_existing_site_is_kept() {
        let mut world = visible_world();
        world.add_construction_site("cs1", StructureType::Container, container_pos());
        let mut source = source(ContainerMemory {
            site: Some("cs1".to_string()),
            pos: Some(SerializedPos::from(container_pos())),
            ..ContainerMemory::default()
        });

        assert!(!refresh_container(&world, "src1", &mut source));
        assert_eq!(source.container.site, Some("cs1".to_string()));
        assert!(world.created_sites().is_empty());
    }

    #[test]
    fn test_vanished_site_is_placed_again() {
        let world = visible_world();
        let mut source = source(ContainerMemory {
            site: Some("cs1".to_string()),
            pos: Some(SerializedPos::Packed("1011W1N1".to_string())),
            ..ContainerMemory::default()
        });

        refresh_container(&world, "src1", &mut source);
        assert_eq!(source.container.site, None);
        assert_eq!(world.created_sites(), vec![(container_pos(), StructureType::Container)]);
    }

    #[test]
    fn test_failed_site_creation_adopts_existing_container() {
        let mut world = visible_world();
        world.blocked_sites.insert(container_pos());
        world.add_unowned_structure(container_structure(250_000));
        let mut source = source(ContainerMemory {
            pos: Some(SerializedPos::Fields { x: 10, y: 11, room_name: "W1N1".to_string() }),
            ..ContainerMemory::default()
        });

        assert!(!refresh_container(&world, "src1", &mut source));
        assert_eq!(source.container.id, Some("c1".to_string()));
        assert_eq!(source.container.site, None);
    }

    #[test]
    fn test_failed_site_creation_adopts_existing_site() {
        let mut world = visible_world();
        world.blocked_sites.insert(container_pos());
        world.add_construction_site("cs1", StructureType::Container, container_pos());
        world.add_construction_site("cs2", StructureType::Road, container_pos());
        let mut source = source(ContainerMemory {
            pos: Some(SerializedPos::from(container_pos())),
            ..ContainerMemory::default()
        });

        refresh_container(&world, "src1", &mut source);
        assert_eq!(source.container.id, None);
        assert_eq!(source.container.site, Some("cs1".to_string()));
    }

    #[test]
    fn test_malformed_position_is_skipped() {
        let world = visible_world();
        let mut source = source(ContainerMemory {
            pos: Some(SerializedPos::Packed("xx".to_string())),
            ..ContainerMemory::default()
        });

        assert!(!refresh_container(&world, "src1", &mut source));
        assert!(world.created_sites().is_empty());
        assert_eq!(source.container.id, None);
        assert_eq!(source.container.site, None);
    }

    #[test]
    fn test_container_position_is_chosen_next_to_source() {
        let world = visible_world();
        let mut source = source(ContainerMemory::default());
        source.pos = Some(SerializedPos::from(Position::new_from_raw(25, 25, w1n1())));

        refresh_container(&world, "src1", &mut source);
        let chosen = Position::new_from_raw(25, 23, w1n1());
        assert_eq!(source.container.pos, Some(SerializedPos::from(chosen)));
        assert_eq!(world.created_sites(), vec![(chosen, StructureType::Container)]);
    }

    #[test]
    fn test_invisible_room_is_left_alone() {
        let world = TestWorld::new();
        let mut source = source(ContainerMemory {
            id: Some("c1".to_string()),
            amount: 100,
            ready: true,
            ..ContainerMemory::default()
        });

        assert!(!refresh_container(&world, "src1", &mut source));
        assert_eq!(source.container.id, Some("c1".to_string()));
        assert_eq!(source.container.amount, 100);
        assert!(source.container.ready);
    }
}

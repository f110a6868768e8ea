use screeps::{Position, RoomName, RoomXY, ROOM_SIZE};

pub trait RoomXYUtils {
    fn to_index(&self) -> usize;
    fn around(&self) -> Vec<RoomXY>;
    fn to_pos(self, room_name: RoomName) -> Position;
}

impl RoomXYUtils for RoomXY {
    fn to_index(&self) -> usize {
        (self.x.u8() as usize) + (ROOM_SIZE as usize) * (self.y.u8() as usize)
    }

    /// Neighbors of the tile within the room in row-major order.
    fn around(&self) -> Vec<RoomXY> {
        let (x, y) = (self.x.u8() as i16, self.y.u8() as i16);
        (y - 1..=y + 1)
            .flat_map(|near_y| (x - 1..=x + 1).map(move |near_x| (near_x, near_y)))
            .filter(|&(near_x, near_y)| near_x != x || near_y != y)
            .filter_map(|(near_x, near_y)| xy_in_room(near_x, near_y))
            .collect()
    }

    #[inline]
    fn to_pos(self, room_name: RoomName) -> Position {
        Position::new(self.x, self.y, room_name)
    }
}

/// Returns the tile at given coordinates if they are within room bounds.
pub fn xy_in_room(x: i16, y: i16) -> Option<RoomXY> {
    if 0 <= x && x < ROOM_SIZE as i16 && 0 <= y && y < ROOM_SIZE as i16 {
        // Checked to be within bounds above.
        Some(unsafe { RoomXY::unchecked_new(x as u8, y as u8) })
    } else {
        None
    }
}

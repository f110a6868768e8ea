use screeps::{Position, RoomName};
#[cfg(test)]
use screeps::RoomCoordinate;

pub trait PositionUtils {
    fn f(&self) -> String;

    #[cfg(test)]
    fn new_from_raw(x: u8, y: u8, room_name: RoomName) -> Self;
}

impl PositionUtils for Position {
    #[inline]
    fn f(&self) -> String {
        format!("({},{},{})", self.room_name(), self.x(), self.y())
    }

    #[cfg(test)]
    fn new_from_raw(x: u8, y: u8, room_name: RoomName) -> Self {
        unsafe {
            Self::new(
                RoomCoordinate::unchecked_new(x),
                RoomCoordinate::unchecked_new(y),
                room_name
            )
        }
    }
}

/// Number of rooms between two rooms, counting diagonal steps as one and not wrapping around the
/// world edges.
pub fn room_linear_distance(from: RoomName, to: RoomName) -> u32 {
    let (dx, dy) = to - from;
    dx.unsigned_abs().max(dy.unsigned_abs())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use screeps::RoomName;
    use crate::geometry::position_utils::room_linear_distance;

    #[test]
    fn test_room_linear_distance() {
        let w1n1 = RoomName::from_str("W1N1").unwrap();
        let w3n1 = RoomName::from_str("W3N1").unwrap();
        let e1s1 = RoomName::from_str("E1S1").unwrap();
        let w2n4 = RoomName::from_str("W2N4").unwrap();
        assert_eq!(room_linear_distance(w1n1, w1n1), 0);
        assert_eq!(room_linear_distance(w1n1, w3n1), 2);
        assert_eq!(room_linear_distance(w3n1, w1n1), 2);
        // W0 and E0 are adjacent, so W1 to E1 is three rooms.
        assert_eq!(room_linear_distance(w1n1, e1s1), 3);
        assert_eq!(room_linear_distance(w1n1, w2n4), 3);
    }
}

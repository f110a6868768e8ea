use crate::consts::ROOM_AREA;
use crate::geometry::room_xy::RoomXYUtils;
use screeps::RoomXY;

/// A `ROOM_SIZE` x `ROOM_SIZE` matrix backed by an array with size known at compile time.
#[derive(Clone)]
pub struct RoomMatrix<T> {
    pub data: [T; ROOM_AREA],
}

/// Extra costs of tiles. Zero means the tile is free, anything else marks it as taken.
pub type CostMatrix = RoomMatrix<u8>;

impl<T> RoomMatrix<T>
where
    T: Clone + Copy + PartialEq,
{
    pub fn new(fill: T) -> Self {
        RoomMatrix {
            data: [fill; ROOM_AREA],
        }
    }

    #[inline]
    pub fn get(&self, xy: RoomXY) -> T {
        self.data[xy.to_index()]
    }

    #[inline]
    pub fn set(&mut self, xy: RoomXY, value: T) {
        self.data[xy.to_index()] = value;
    }
}

impl<T> Default for RoomMatrix<T>
where
    T: Clone + Copy + PartialEq + Default,
{
    fn default() -> Self {
        RoomMatrix::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use screeps::RoomXY;
    use crate::algorithms::room_matrix::CostMatrix;

    #[test]
    fn test_set_and_get() {
        let mut matrix = CostMatrix::default();
        let xy = unsafe { RoomXY::unchecked_new(3, 47) };
        matrix.set(xy, 255);
        assert_eq!(matrix.get(xy), 255);
        assert_eq!(matrix.get(unsafe { RoomXY::unchecked_new(47, 3) }), 0);
        assert_eq!(matrix.data.iter().filter(|&&cost| cost != 0).count(), 1);
    }
}

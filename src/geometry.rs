pub mod position_utils;
pub mod room_xy;

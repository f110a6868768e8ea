pub mod room_matrix;

pub mod build_position;
pub mod container_position;

pub mod containers;
pub mod harvesters;

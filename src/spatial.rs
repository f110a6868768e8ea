pub mod distance;
pub mod find;

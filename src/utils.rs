pub mod priority;
pub mod result_utils;

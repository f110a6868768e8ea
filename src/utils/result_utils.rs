use log::warn;
use std::fmt::Display;

pub trait ResultUtils<T, E> {
    /// Logs a warning with the error if there is one and returns the value if there is one.
    fn warn_if_err(self, description: &str) -> Option<T>;
}

impl<T, E> ResultUtils<T, E> for Result<T, E>
where
    E: Display,
{
    fn warn_if_err(self, description: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("{}: {}.", description, e);
                None
            }
        }
    }
}

use log::warn;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum XiError {
    #[error("object does not exist in the game")]
    ObjectDoesNotExist,
    #[error("path not found")]
    PathNotFound,
    #[error("invalid serialized position {0:?}")]
    InvalidPosition(String),
    #[error("failed to create a construction site: {0}")]
    ConstructionSiteNotCreated(String),
    #[error("room is not visible")]
    RoomNotVisible,
    #[error("failed to access memory: {0}")]
    MemoryAccess(String),
}

impl XiError {
    pub fn warn(&self, description: &str) {
        warn!("{}: {}.", description, self);
    }
}

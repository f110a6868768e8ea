use std::cmp::Ordering;
use serde::{Deserialize, Serialize};

/// Priority of a request in `[0, 1]`. Higher is more important.
#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Priority(pub f64);

impl Priority {
    pub const MIN: Priority = Priority(0.0);
    pub const MAX: Priority = Priority(1.0);

    /// Returns the priority clamped to `[0, 1]`. NaN becomes the lowest priority.
    pub fn clamped(self) -> Self {
        if self.0.is_nan() {
            Self::MIN
        } else {
            Self(self.0.clamp(Self::MIN.0, Self::MAX.0))
        }
    }
}

impl Eq for Priority {}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "!{:.2}", self.0)
    }
}

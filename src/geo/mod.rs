pub mod location;

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A resolved position plus the moment it was produced, so a cached fix can
/// be checked for freshness before it is trusted.
#[derive(Debug, Clone, Copy)]
pub struct PositionFix {
    pub coordinates: Coordinates,
    pub acquired_at: Instant,
}

impl PositionFix {
    pub fn fresh(coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            acquired_at: Instant::now(),
        }
    }

    pub fn age(&self) -> Duration {
        self.acquired_at.elapsed()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

#[derive(Debug, Clone, Copy)]
pub struct GeoOptions {
    pub high_accuracy: bool,
    pub timeout: Duration,
    pub max_fix_age: Duration,
}

impl Default for GeoOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_millis(15_000),
            max_fix_age: Duration::from_millis(10_000),
        }
    }
}

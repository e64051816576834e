use std::sync::Arc;

use async_trait::async_trait;
use tokio::time::timeout;
use tracing::{info, warn};

use crate::error::LocationError;
use crate::geo::{Coordinates, GeoOptions, PermissionStatus, PositionFix};

/// Seam over the platform geolocation service.
#[async_trait]
pub trait PositionSource: Send + Sync {
    /// Asks the platform for location permission. Sources without an
    /// explicit permission gate answer `Granted` immediately.
    async fn request_permission(&self) -> PermissionStatus;

    /// Resolves the device position. `high_accuracy` is advisory; the source
    /// may answer with a cached fix, which the provider checks for freshness.
    async fn current_position(&self, high_accuracy: bool) -> Result<PositionFix, LocationError>;
}

/// Permission request followed by one bounded position resolution. No
/// internal retries; recovery is user-initiated through the settings flow.
#[derive(Clone)]
pub struct LocationProvider {
    source: Arc<dyn PositionSource>,
    options: GeoOptions,
}

impl LocationProvider {
    pub fn new(source: Arc<dyn PositionSource>) -> Self {
        Self {
            source,
            options: GeoOptions::default(),
        }
    }

    pub fn with_options(source: Arc<dyn PositionSource>, options: GeoOptions) -> Self {
        Self { source, options }
    }

    pub async fn acquire(&self) -> Result<Coordinates, LocationError> {
        if self.source.request_permission().await == PermissionStatus::Denied {
            warn!("location permission denied");
            return Err(LocationError::PermissionDenied);
        }

        let fix = timeout(
            self.options.timeout,
            self.source.current_position(self.options.high_accuracy),
        )
        .await
        .map_err(|_| {
            LocationError::PositionUnavailable("position request timed out".to_string())
        })??;

        if fix.age() > self.options.max_fix_age {
            return Err(LocationError::PositionUnavailable(
                "cached position fix is stale".to_string(),
            ));
        }

        info!(
            latitude = fix.coordinates.latitude,
            longitude = fix.coordinates.longitude,
            "position resolved"
        );
        Ok(fix.coordinates)
    }
}

/// Source backed by fixed coordinates, for environments without a
/// positioning device. Permission is always granted.
pub struct StaticPositionSource {
    coordinates: Coordinates,
}

impl StaticPositionSource {
    pub fn new(coordinates: Coordinates) -> Self {
        Self { coordinates }
    }
}

#[async_trait]
impl PositionSource for StaticPositionSource {
    async fn request_permission(&self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    async fn current_position(&self, _high_accuracy: bool) -> Result<PositionFix, LocationError> {
        Ok(PositionFix::fresh(self.coordinates))
    }
}

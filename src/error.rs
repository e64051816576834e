use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("location permission denied by the user")]
    PermissionDenied,

    #[error("position unavailable: {0}")]
    PositionUnavailable(String),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid base url: {0}")]
    BadUrl(String),

    #[error("coordinates are not finite")]
    NonFiniteCoordinates,

    #[error("server error: {0}")]
    Server(u16),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Top-level error of the binary. Pipeline failures never reach this level;
/// they are converted into screen state where they happen.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("internal error: {0}")]
    Internal(String),
}

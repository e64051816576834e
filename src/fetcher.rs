use std::time::Duration;

use reqwest::{Client, Url};
use tracing::{debug, info};

use crate::error::FetchError;
use crate::geo::Coordinates;
use crate::models::shift::{Shift, ShiftsEnvelope};

/// Client for the shift feed: one GET per call, no retry, no pagination.
pub struct ShiftFetcher {
    client: Client,
    base_url: Url,
}

impl ShiftFetcher {
    /// Builds a client against the given feed URL. Point `base_url` at a
    /// mock server in tests.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url =
            Url::parse(base_url).map_err(|err| FetchError::BadUrl(format!("{base_url}: {err}")))?;

        Ok(Self { client, base_url })
    }

    /// Fetches the shifts near `coords`. The decoded batch is handed back
    /// exactly as the server sent it; range checking of the coordinates is
    /// left to the service.
    pub async fn fetch_shifts(&self, coords: &Coordinates) -> Result<Vec<Shift>, FetchError> {
        if !coords.latitude.is_finite() || !coords.longitude.is_finite() {
            return Err(FetchError::NonFiniteCoordinates);
        }

        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("latitude", &coords.latitude.to_string())
            .append_pair("longitude", &coords.longitude.to_string());

        debug!(%url, "requesting shift batch");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Server(status.as_u16()));
        }

        let envelope: ShiftsEnvelope = response.json().await?;
        info!(
            count = envelope.data.len(),
            status = envelope.status,
            "shift batch received"
        );
        Ok(envelope.data)
    }
}

mod config;
mod error;
mod fetcher;
mod geo;
mod models;
mod screens;
mod store;

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use crate::fetcher::ShiftFetcher;
use crate::geo::Coordinates;
use crate::geo::location::{LocationProvider, StaticPositionSource};
use crate::screens::Route;
use crate::screens::detail::ShiftDetailScreen;
use crate::screens::list::{ListState, ShiftListScreen};
use crate::store::ShiftStore;

#[tokio::main]
async fn main() -> Result<(), error::AppError> {
    let config = config::Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level.clone()))
        .with_target(false)
        .compact()
        .init();

    let store = Arc::new(ShiftStore::new());
    let source = Arc::new(StaticPositionSource::new(Coordinates {
        latitude: config.position_latitude,
        longitude: config.position_longitude,
    }));
    let provider = LocationProvider::new(source);
    let fetcher = ShiftFetcher::new(
        &config.api_url,
        Duration::from_secs(config.http_timeout_secs),
    )?;

    let mut list = ShiftListScreen::new(provider, fetcher, store.clone());
    list.mount().await;

    println!("{}", list.render());

    if *list.state() == ListState::Populated {
        if let Some(fetched_at) = store.fetched_at() {
            tracing::info!(%fetched_at, "batch stored");
        }

        // Walk into the first card's detail page, the way a tap would.
        if let Some(first) = store.shifts().and_then(|shifts| shifts.into_iter().next()) {
            let Route::ShiftPage { id } = list.select(&first.id) else {
                return Ok(());
            };
            let detail = ShiftDetailScreen::open(&store, &id);
            println!("\n{}", detail.render());
        }
    }

    Ok(())
}

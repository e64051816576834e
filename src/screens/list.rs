use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::error::LocationError;
use crate::fetcher::ShiftFetcher;
use crate::geo::location::LocationProvider;
use crate::models::shift::Shift;
use crate::screens::{MSG_HIRING_CLOSED, MSG_HIRING_OPEN, Route};
use crate::store::ShiftStore;

pub const MSG_PERMISSION_DENIED: &str = "Получение геоданных отклонено пользователем";
pub const MSG_FETCH_FAILED: &str = "Не удалось получить данные с сервера";
pub const MSG_EMPTY: &str = "Работы поблизости не найдено";

const MSG_LOADING: &str = "Получение геопозиции...";
const MSG_SETTINGS_BUTTON: &str = "Включить передачу геоданных";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    Loading,
    PermissionError(String),
    Empty,
    Populated,
}

/// The list screen and its acquisition pipeline: permission, position,
/// fetch, store write. Failures are converted into screen state here and
/// never propagate further; retrying is a user action.
pub struct ShiftListScreen {
    provider: LocationProvider,
    fetcher: ShiftFetcher,
    store: Arc<ShiftStore>,
    state: ListState,
    cancel: CancellationToken,
}

impl ShiftListScreen {
    pub fn new(provider: LocationProvider, fetcher: ShiftFetcher, store: Arc<ShiftStore>) -> Self {
        Self {
            provider,
            fetcher,
            store,
            state: ListState::Loading,
            cancel: CancellationToken::new(),
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Tears the screen down. In-flight work is not interrupted, but its
    /// completion no longer applies any state transition.
    pub fn unmount(&self) {
        self.cancel.cancel();
    }

    /// Runs the pipeline once, as the screen does when it first appears.
    pub async fn mount(&mut self) {
        self.run_pipeline().await;
    }

    /// User-initiated recovery from an error state. Re-enters the permission
    /// flow, passing through `Loading` so no stale message stays visible.
    pub async fn retry(&mut self) {
        info!("retrying shift acquisition");
        self.run_pipeline().await;
    }

    async fn run_pipeline(&mut self) {
        self.apply(ListState::Loading);

        let coords = match self.provider.acquire().await {
            Ok(coords) => coords,
            Err(LocationError::PermissionDenied) => {
                self.apply(ListState::PermissionError(MSG_PERMISSION_DENIED.to_string()));
                return;
            }
            Err(LocationError::PositionUnavailable(message)) => {
                warn!(%message, "position could not be resolved");
                self.apply(ListState::PermissionError(message));
                return;
            }
        };

        let shifts = match self.fetcher.fetch_shifts(&coords).await {
            Ok(shifts) => shifts,
            Err(err) => {
                error!(error = %err, "shift fetch failed");
                self.apply(ListState::PermissionError(MSG_FETCH_FAILED.to_string()));
                return;
            }
        };

        if shifts.is_empty() {
            self.apply(ListState::Empty);
            return;
        }

        if self.cancel.is_cancelled() {
            return;
        }

        // The store write precedes the transition that triggers the render,
        // so a populated screen always reads the batch it was populated from.
        self.store.set_shifts(shifts);
        self.apply(ListState::Populated);
    }

    // A late completion must not touch a dead screen.
    fn apply(&mut self, next: ListState) {
        if self.cancel.is_cancelled() {
            return;
        }
        self.state = next;
    }

    /// Selecting a card hands over only the shift id; the detail screen
    /// re-reads the record from the store.
    pub fn select(&self, id: &str) -> Route {
        Route::ShiftPage { id: id.to_string() }
    }

    pub fn render(&self) -> String {
        match &self.state {
            ListState::Loading => MSG_LOADING.to_string(),
            ListState::PermissionError(message) => {
                format!("{message}\n[{MSG_SETTINGS_BUTTON}]")
            }
            ListState::Empty => MSG_EMPTY.to_string(),
            ListState::Populated => {
                let shifts = self.store.shifts().unwrap_or_default();
                shifts
                    .iter()
                    .map(render_card)
                    .collect::<Vec<_>>()
                    .join("\n\n")
            }
        }
    }
}

fn render_card(shift: &Shift) -> String {
    let hiring = if shift.is_hiring() {
        MSG_HIRING_OPEN
    } else {
        MSG_HIRING_CLOSED
    };

    format!(
        "{}\n{}\n{hiring} | {}",
        shift.company_name,
        shift.address,
        price_line(shift)
    )
}

fn price_line(shift: &Shift) -> String {
    let mut line = format!("{} ₽ за смену", shift.price_worker);
    if shift.bonus_price_worker > 0 {
        line.push_str(&format!(" + {} ₽ бонус", shift.bonus_price_worker));
    }
    line
}

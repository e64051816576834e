use tracing::warn;

use crate::models::shift::Shift;
use crate::screens::{MSG_HIRING_CLOSED, MSG_HIRING_OPEN, Route};
use crate::store::ShiftStore;

pub const MSG_NOT_FOUND: &str = "Смена не найдена";

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loaded(Shift),
    NotFound,
}

/// Detail page for one shift, read from the store by the id carried in the
/// route. An id the store does not know is a terminal error state rather
/// than a spinner: no fetch is pending that could still deliver the record.
pub struct ShiftDetailScreen {
    state: DetailState,
}

impl ShiftDetailScreen {
    pub fn open(store: &ShiftStore, id: &str) -> Self {
        let state = match store.get_shift(id) {
            Some(shift) => DetailState::Loaded(shift),
            None => {
                warn!(shift_id = id, "shift missing from store");
                DetailState::NotFound
            }
        };

        Self { state }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// Back navigation target. A `NotFound` page is terminal; leaving it is
    /// the only way out.
    pub fn back(&self) -> Route {
        Route::ShiftsList
    }

    /// Window title, the company name once the record resolved.
    pub fn title(&self) -> Option<&str> {
        match &self.state {
            DetailState::Loaded(shift) => Some(&shift.company_name),
            DetailState::NotFound => None,
        }
    }

    pub fn render(&self) -> String {
        let shift = match &self.state {
            DetailState::Loaded(shift) => shift,
            DetailState::NotFound => return MSG_NOT_FOUND.to_string(),
        };

        let hiring = if shift.is_hiring() {
            MSG_HIRING_OPEN
        } else {
            MSG_HIRING_CLOSED
        };

        let mut out = format!(
            "{}\n\nАдрес:\n{}\n\n{hiring}\n",
            shift.company_name, shift.address
        );

        out.push_str(&format!(
            "\nДата и время смены:\n{}г.\nс {} до {}\n",
            shift.date_start_by_city, shift.time_start_by_city, shift.time_end_by_city
        ));

        out.push_str("\nТипы работ:\n");
        for work_type in &shift.work_types {
            out.push_str(&format!("• {}\n", work_type.name));
        }

        out.push_str(&format!("\nОплата:\n{} ₽\n", shift.price_worker));
        if shift.bonus_price_worker > 0 {
            out.push_str(&format!("+ {} ₽ бонус\n", shift.bonus_price_worker));
        }

        out.push_str(&format!(
            "\nОтзывы:\nКоличество: {}\n",
            shift.customer_feedbacks_count
        ));
        if shift.customer_rating > 0.0 {
            out.push_str(&format!("Рейтинг: {}\n", shift.customer_rating));
        }

        if shift.is_promotion_enabled {
            out.push_str("\nАкция активна!\n");
        }

        out
    }
}

use serde::{Deserialize, Serialize};

use crate::geo::Coordinates;

/// Pluralization variants of a work-type label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkType {
    pub id: String,
    pub name: String,
    pub name_gt5: String,
    pub name_lt5: String,
    pub name_one: String,
}

/// One advertised work opportunity, exactly as the feed sends it. Records
/// are not validated field by field; the feed is the single trusted source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: String,
    pub logo: String,
    pub coordinates: Coordinates,
    pub address: String,
    pub company_name: String,
    pub date_start_by_city: String,
    pub time_start_by_city: String,
    pub time_end_by_city: String,
    pub current_workers: u32,
    pub plan_workers: u32,
    pub work_types: Vec<WorkType>,
    pub price_worker: u32,
    pub bonus_price_worker: u32,
    pub customer_feedbacks_count: String,
    pub customer_rating: f64,
    pub is_promotion_enabled: bool,
}

impl Shift {
    /// Derived on every call so it can never go stale against the counts.
    pub fn is_hiring(&self) -> bool {
        self.current_workers < self.plan_workers
    }
}

/// Wrapping object the feed answers with.
#[derive(Debug, Deserialize)]
pub struct ShiftsEnvelope {
    pub data: Vec<Shift>,
    pub status: i64,
}

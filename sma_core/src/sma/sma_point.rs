use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One smoothed value, dated at the last observation of its window and
/// carrying that observation's source price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmaPoint {
    pub date: NaiveDate,
    pub value: f64,
    pub source_price: f64,
}

impl SmaPoint {
    pub fn new(date: NaiveDate, value: f64, source_price: f64) -> Self {
        Self {
            date,
            value,
            source_price,
        }
    }
}

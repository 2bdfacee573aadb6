use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::enums::SignalKind;

/// Directional signal at one aligned index of a short/long SMA pair.
/// Date and price are taken from the short sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub date: NaiveDate,
    pub kind: SignalKind,
    pub short_value: f64,
    pub long_value: f64,
    pub price: f64,
}

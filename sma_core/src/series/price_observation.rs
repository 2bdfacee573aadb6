use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::analysis_error::{AnalysisError, Result};
use crate::common::enums::PriceField;

/// One daily price record. Open, high and low are optional because the
/// synthetic source emits close-only observations while feed data
/// carries the full OHLCV set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    pub date: NaiveDate,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: f64,
    pub volume: u64,
}

impl PriceObservation {
    /// Close-only observation
    pub fn new(date: NaiveDate, close: f64, volume: u64) -> Self {
        Self {
            date,
            open: None,
            high: None,
            low: None,
            close,
            volume,
        }
    }

    /// Full OHLCV observation
    pub fn with_ohlc(
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Self {
        Self {
            date,
            open: Some(open),
            high: Some(high),
            low: Some(low),
            close,
            volume,
        }
    }

    /// Value of the selected price attribute, if present
    pub fn field(&self, field: PriceField) -> Option<f64> {
        match field {
            PriceField::Open => self.open,
            PriceField::High => self.high,
            PriceField::Low => self.low,
            PriceField::Close => Some(self.close),
        }
    }

    /// Reject non-finite or non-positive prices and OHLC ranges that do
    /// not contain their own open and close
    pub fn check(&self) -> Result<()> {
        if !self.close.is_finite() || self.close <= 0.0 {
            return Err(AnalysisError::invalid_input(format!(
                "{} close price {} is not a positive finite number",
                self.date, self.close
            )));
        }

        for (name, value) in [("open", self.open), ("high", self.high), ("low", self.low)] {
            if let Some(v) = value {
                if !v.is_finite() || v <= 0.0 {
                    return Err(AnalysisError::invalid_input(format!(
                        "{} {} price {} is not a positive finite number",
                        self.date, name, v
                    )));
                }
            }
        }

        if let (Some(high), Some(low)) = (self.high, self.low) {
            if high < low {
                return Err(AnalysisError::invalid_input(format!(
                    "{} high price {} is below low price {}",
                    self.date, high, low
                )));
            }
        }
        if let Some(high) = self.high {
            if self.close > high || self.open.map_or(false, |open| open > high) {
                return Err(AnalysisError::invalid_input(format!(
                    "{} high price {} is not the max of [open, close]",
                    self.date, high
                )));
            }
        }
        if let Some(low) = self.low {
            if self.close < low || self.open.map_or(false, |open| open < low) {
                return Err(AnalysisError::invalid_input(format!(
                    "{} low price {} is not the min of [open, close]",
                    self.date, low
                )));
            }
        }

        Ok(())
    }
}

impl fmt::Display for PriceObservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ${:.2}", self.date, self.close)
    }
}

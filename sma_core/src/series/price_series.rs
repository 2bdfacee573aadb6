use std::ops::{Index, IndexMut};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::analysis_error::{AnalysisError, Result};
use crate::common::func_util::round4;

use super::price_observation::PriceObservation;

/// Ordered daily price history for one symbol, index 0 = oldest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub lst: Vec<PriceObservation>,
}

impl PriceSeries {
    pub fn new() -> Self {
        Self { lst: Vec::new() }
    }

    pub fn from_observations(lst: Vec<PriceObservation>) -> Self {
        Self { lst }
    }

    pub fn push(&mut self, obs: PriceObservation) {
        self.lst.push(obs);
    }

    pub fn len(&self) -> usize {
        self.lst.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lst.is_empty()
    }

    pub fn last(&self) -> Option<&PriceObservation> {
        self.lst.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PriceObservation> {
        self.lst.iter()
    }

    /// Check every observation and the date ordering before the series
    /// reaches an engine
    pub fn validate(&self) -> Result<()> {
        if self.lst.is_empty() {
            return Err(AnalysisError::invalid_input("price series is empty"));
        }

        for obs in &self.lst {
            obs.check()?;
        }

        for pair in self.lst.windows(2) {
            if pair[1].date < pair[0].date {
                return Err(AnalysisError::invalid_input(format!(
                    "dates out of order: {} follows {}",
                    pair[1].date, pair[0].date
                )));
            }
        }

        Ok(())
    }

    /// Closing prices in series order
    pub fn closes(&self) -> Vec<f64> {
        self.lst.iter().map(|obs| obs.close).collect()
    }

    /// Traded volumes in series order
    pub fn volumes(&self) -> Vec<u64> {
        self.lst.iter().map(|obs| obs.volume).collect()
    }

    /// Day-over-day close change in percent, rounded to 4 decimal
    /// places, one entry per consecutive pair
    pub fn daily_returns(&self) -> Vec<f64> {
        self.lst
            .windows(2)
            .map(|pair| round4((pair[1].close - pair[0].close) / pair[0].close * 100.0))
            .collect()
    }

    /// Observations dated inside [start, end], bounds inclusive
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            lst: self
                .lst
                .iter()
                .filter(|obs| obs.date >= start && obs.date <= end)
                .cloned()
                .collect(),
        }
    }

    /// Up to the last n observations
    pub fn recent(&self, n: usize) -> &[PriceObservation] {
        &self.lst[self.lst.len().saturating_sub(n)..]
    }

    pub fn sort_by_date(&mut self) {
        self.lst.sort_by_key(|obs| obs.date);
    }
}

impl Index<usize> for PriceSeries {
    type Output = PriceObservation;

    fn index(&self, index: usize) -> &Self::Output {
        &self.lst[index]
    }
}

impl IndexMut<usize> for PriceSeries {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.lst[index]
    }
}

impl FromIterator<PriceObservation> for PriceSeries {
    fn from_iter<T: IntoIterator<Item = PriceObservation>>(iter: T) -> Self {
        Self {
            lst: iter.into_iter().collect(),
        }
    }
}

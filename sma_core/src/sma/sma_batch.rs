use std::collections::BTreeMap;

use crate::common::analysis_error::AnalysisError;

use super::sma_point::SmaPoint;

/// Per-period failure recorded under the skip-and-warn policy
#[derive(Debug, Clone, PartialEq)]
pub struct SmaWarning {
    pub period: usize,
    pub error: AnalysisError,
}

/// SMA sequences for one series, keyed by period. Periods skipped under
/// the skip-and-warn policy map to empty sequences, with the failure kept
/// in `warnings` for the caller to report.
#[derive(Debug, Clone, Default)]
pub struct SmaBatch {
    pub by_period: BTreeMap<usize, Vec<SmaPoint>>,
    pub warnings: Vec<SmaWarning>,
}

impl SmaBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, period: usize, points: Vec<SmaPoint>) {
        self.by_period.insert(period, points);
    }

    pub fn get(&self, period: usize) -> Option<&[SmaPoint]> {
        self.by_period.get(&period).map(|points| points.as_slice())
    }

    /// Latest smoothed point for a period, if the period produced any
    pub fn latest(&self, period: usize) -> Option<&SmaPoint> {
        self.by_period.get(&period).and_then(|points| points.last())
    }

    pub fn periods(&self) -> impl Iterator<Item = usize> + '_ {
        self.by_period.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.by_period.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_period.is_empty()
    }

    pub fn warn(&mut self, period: usize, error: AnalysisError) {
        self.warnings.push(SmaWarning { period, error });
    }
}

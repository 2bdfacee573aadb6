use crate::common::analysis_error::{AnalysisError, Result};
use crate::common::enums::{BatchPolicy, PriceField};
use crate::common::func_util::round2;
use crate::series::price_series::PriceSeries;

use super::sma_batch::SmaBatch;
use super::sma_point::SmaPoint;

/// Simple moving average over a sliding window of `period` observations.
///
/// A series of length n yields exactly n - period + 1 points; point k
/// averages the selected field over series positions [k, k + period - 1]
/// and is dated at the window's last observation. Values are rounded to
/// 2 decimal places before they leave the engine.
pub fn compute_sma(
    series: &PriceSeries,
    period: usize,
    field: PriceField,
) -> Result<Vec<SmaPoint>> {
    if period == 0 {
        return Err(AnalysisError::invalid_input(
            "period must be a positive integer",
        ));
    }
    if series.is_empty() {
        return Err(AnalysisError::invalid_input("price series is empty"));
    }
    if series.len() < period {
        return Err(AnalysisError::insufficient_data(period, series.len()));
    }

    let mut values = Vec::with_capacity(series.len());
    for (idx, obs) in series.iter().enumerate() {
        match obs.field(field) {
            Some(v) => values.push(v),
            None => {
                return Err(AnalysisError::invalid_input(format!(
                    "price field '{}' missing in entry {}",
                    field, idx
                )))
            }
        }
    }

    // Sliding sum: drop the value leaving the window, add the one entering
    let mut points = Vec::with_capacity(series.len() - period + 1);
    let mut sum: f64 = values[..period].iter().sum();

    for i in (period - 1)..series.len() {
        if i >= period {
            sum += values[i] - values[i - period];
        }
        points.push(SmaPoint::new(
            series[i].date,
            round2(sum / period as f64),
            values[i],
        ));
    }

    Ok(points)
}

/// One SMA pass per period, collected into a batch keyed by period.
///
/// Under AbortOnFirstError the first failing period aborts the whole
/// batch. Under SkipAndWarn a failing period maps to an empty sequence
/// and the failure is recorded on the batch; the two modes are never
/// mixed within one call.
pub fn compute_multiple_sma(
    series: &PriceSeries,
    periods: &[usize],
    field: PriceField,
    policy: BatchPolicy,
) -> Result<SmaBatch> {
    let mut batch = SmaBatch::new();

    for &period in periods {
        match compute_sma(series, period, field) {
            Ok(points) => batch.insert(period, points),
            Err(err) => match policy {
                BatchPolicy::AbortOnFirstError => return Err(err),
                BatchPolicy::SkipAndWarn => {
                    batch.insert(period, Vec::new());
                    batch.warn(period, err);
                }
            },
        }
    }

    Ok(batch)
}

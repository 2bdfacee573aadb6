use serde::Serialize;

use crate::common::analysis_error::{AnalysisError, Result};

/// Summary statistics over a run of closing prices.
///
/// Returns are fractional day-over-day changes. Volatility is the
/// sample standard deviation of those returns and is 0.0 when fewer
/// than two returns exist, which also forces the Sharpe ratio to 0.0.
/// Total return and max drawdown are expressed in percent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesStats {
    pub mean_return: f64,
    pub volatility: f64,
    pub sharpe_ratio: f64,
    pub total_return: f64,
    pub max_drawdown: f64,
}

pub fn basic_statistics(closes: &[f64]) -> Result<SeriesStats> {
    if closes.is_empty() {
        return Err(AnalysisError::invalid_input("no closing prices"));
    }
    if closes.len() < 2 {
        return Err(AnalysisError::insufficient_data(2, closes.len()));
    }

    let returns: Vec<f64> = closes
        .windows(2)
        .map(|pair| pair[1] / pair[0] - 1.0)
        .collect();

    let mean_return = returns.iter().sum::<f64>() / returns.len() as f64;

    let volatility = if returns.len() < 2 {
        0.0
    } else {
        let variance = returns
            .iter()
            .map(|&r| (r - mean_return).powi(2))
            .sum::<f64>()
            / (returns.len() - 1) as f64;
        variance.sqrt()
    };

    let sharpe_ratio = if volatility == 0.0 {
        0.0
    } else {
        mean_return / volatility
    };

    let total_return = (closes[closes.len() - 1] / closes[0] - 1.0) * 100.0;

    let mut peak = closes[0];
    let mut max_drawdown = 0.0_f64;
    for &close in closes {
        if close > peak {
            peak = close;
        }
        max_drawdown = max_drawdown.min(close / peak - 1.0);
    }

    Ok(SeriesStats {
        mean_return,
        volatility,
        sharpe_ratio,
        total_return,
        max_drawdown: max_drawdown * 100.0,
    })
}

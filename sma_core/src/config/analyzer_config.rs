use crate::common::analysis_error::{AnalysisError, Result};
use crate::common::enums::{BatchPolicy, PriceField};

/// Analyzer configuration
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Moving average window lengths, in days
    pub periods: Vec<usize>,
    /// Price field the averages are computed over
    pub price_field: PriceField,
    /// How a failing period is handled when computing several at once
    pub batch_policy: BatchPolicy,
    /// Number of trailing observations echoed into the report
    pub recent_window: usize,
    /// Whether to compute the exponential moving average
    pub cal_ema: bool,
    /// EMA span
    pub ema_period: usize,
    /// Whether to compute the relative strength index
    pub cal_rsi: bool,
    /// RSI lookback
    pub rsi_period: usize,
    /// Whether to compute Bollinger bands
    pub cal_boll: bool,
    /// Bollinger window
    pub boll_period: usize,
    /// Bollinger band width, in standard deviations
    pub boll_k: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            periods: vec![5, 10, 20],
            price_field: PriceField::Close,
            batch_policy: BatchPolicy::AbortOnFirstError,
            recent_window: 10,
            cal_ema: false,
            ema_period: 20,
            cal_rsi: false,
            rsi_period: 14,
            cal_boll: false,
            boll_period: 20,
            boll_k: 2.0,
        }
    }
}

impl AnalyzerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.periods.is_empty() {
            return Err(AnalysisError::invalid_input("no periods configured"));
        }
        if self.periods.contains(&0) {
            return Err(AnalysisError::invalid_input("period must be positive"));
        }
        if self.recent_window == 0 {
            return Err(AnalysisError::invalid_input(
                "recent window must be positive",
            ));
        }
        if self.cal_ema && self.ema_period == 0 {
            return Err(AnalysisError::invalid_input("ema period must be positive"));
        }
        if self.cal_rsi && self.rsi_period == 0 {
            return Err(AnalysisError::invalid_input("rsi period must be positive"));
        }
        if self.cal_boll {
            if self.boll_period == 0 {
                return Err(AnalysisError::invalid_input(
                    "boll period must be positive",
                ));
            }
            if self.boll_k <= 0.0 {
                return Err(AnalysisError::invalid_input("boll k must be positive"));
            }
        }
        Ok(())
    }

    /// The (short, long) period pair crossovers are detected on, taken
    /// as the smallest and largest configured periods. None when fewer
    /// than two periods are configured.
    pub fn crossover_pair(&self) -> Option<(usize, usize)> {
        if self.periods.len() < 2 {
            return None;
        }
        let short = self.periods.iter().copied().min()?;
        let long = self.periods.iter().copied().max()?;
        Some((short, long))
    }
}

use crate::common::analysis_error::{AnalysisError, Result};
use crate::config::analyzer_config::AnalyzerConfig;
use crate::crossover::detector::detect_crossovers;
use crate::crossover::signal::Signal;
use crate::math::boll::BollModel;
use crate::math::ema::Ema;
use crate::math::rsi::Rsi;
use crate::math::stats::basic_statistics;
use crate::series::price_series::PriceSeries;
use crate::sma::sma_engine::compute_multiple_sma;

use super::report::{AnalysisReport, AnalysisSummary, ExtendedMetrics, PeriodSnapshot};

/// Runs the full pipeline over a price series: moving averages for every
/// configured period, crossover signals on the shortest/longest pair,
/// summary statistics and any enabled indicators, all folded into one
/// report.
#[derive(Debug, Clone)]
pub struct StockAnalyzer {
    config: AnalyzerConfig,
}

impl StockAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn analyze(&self, symbol: &str, series: &PriceSeries) -> Result<AnalysisReport> {
        series.validate()?;

        let smas = compute_multiple_sma(
            series,
            &self.config.periods,
            self.config.price_field,
            self.config.batch_policy,
        )?;

        let signals: Vec<Signal> = match self.config.crossover_pair() {
            Some((short, long)) => detect_crossovers(
                smas.get(short).unwrap_or(&[]),
                smas.get(long).unwrap_or(&[]),
            ),
            None => Vec::new(),
        };

        let last = series
            .last()
            .ok_or_else(|| AnalysisError::invalid_input("price series is empty"))?;

        let snapshots: Vec<PeriodSnapshot> = self
            .config
            .periods
            .iter()
            .map(|&period| {
                let value = smas.latest(period).map(|point| point.value);
                PeriodSnapshot {
                    period,
                    value,
                    above_sma: value.map(|v| last.close > v),
                }
            })
            .collect();

        let statistics = if series.len() >= 2 {
            Some(basic_statistics(&series.closes())?)
        } else {
            None
        };

        Ok(AnalysisReport {
            symbol: symbol.to_string(),
            analysis_days: series.len(),
            summary: AnalysisSummary {
                latest_price: last.close,
                smas: snapshots,
                data_points: series.len(),
            },
            smas,
            signals,
            statistics,
            metrics: self.extended_metrics(series),
            recent: series.recent(self.config.recent_window).to_vec(),
        })
    }

    /// Analyzes each (symbol, series) pair, failing on the first series
    /// the pipeline rejects.
    pub fn analyze_many(
        &self,
        portfolio: &[(String, PriceSeries)],
    ) -> Result<Vec<(String, AnalysisReport)>> {
        portfolio
            .iter()
            .map(|(symbol, series)| {
                self.analyze(symbol, series)
                    .map(|report| (symbol.clone(), report))
            })
            .collect()
    }

    fn extended_metrics(&self, series: &PriceSeries) -> ExtendedMetrics {
        let mut metrics = ExtendedMetrics::default();
        if !(self.config.cal_ema || self.config.cal_rsi || self.config.cal_boll) {
            return metrics;
        }

        let mut ema = Ema::new(self.config.ema_period);
        let mut rsi = Rsi::new(self.config.rsi_period);
        let mut boll = BollModel::new(self.config.boll_period, self.config.boll_k);

        // Each model keeps the value as of the last observation fed in
        for close in series.closes() {
            if self.config.cal_ema {
                metrics.ema = Some(ema.add(close));
            }
            if self.config.cal_rsi {
                metrics.rsi = rsi.add(close);
            }
            if self.config.cal_boll {
                metrics.boll = boll.add(close);
            }
        }
        metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::enums::BatchPolicy;
    use crate::math::boll::BollMetric;
    use crate::series::price_observation::PriceObservation;
    use crate::source::random_walk::RandomWalkSource;
    use chrono::NaiveDate;

    fn start_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn series_from_closes(closes: &[f64]) -> PriceSeries {
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| {
                PriceObservation::new(start_date() + chrono::Duration::days(i as i64), close, 1_000)
            })
            .collect()
    }

    #[test]
    fn test_pipeline_shapes() {
        let mut source = RandomWalkSource::new(7);
        let series = source.generate(50, 100.0, start_date());
        let analyzer = StockAnalyzer::new(AnalyzerConfig::default()).unwrap();

        let report = analyzer.analyze("AAPL", &series).unwrap();

        assert_eq!(report.symbol, "AAPL");
        assert_eq!(report.analysis_days, 50);
        assert_eq!(report.smas.get(5).unwrap().len(), 46);
        assert_eq!(report.smas.get(10).unwrap().len(), 41);
        assert_eq!(report.smas.get(20).unwrap().len(), 31);
        // Pair (5, 20) aligns to 31 points, one signal per step after the first
        assert_eq!(report.signals.len(), 30);
        assert_eq!(report.summary.data_points, 50);
        assert_eq!(report.recent.len(), 10);
        assert!(report.statistics.is_some());
        assert!(report.metrics.ema.is_none());
    }

    #[test]
    fn test_rising_series_sits_above_averages() {
        let closes: Vec<f64> = (1..=30).map(|i| i as f64).collect();
        let series = series_from_closes(&closes);
        let analyzer = StockAnalyzer::new(AnalyzerConfig::default()).unwrap();

        let report = analyzer.analyze("UP", &series).unwrap();

        assert_eq!(report.summary.latest_price, 30.0);
        for snapshot in &report.summary.smas {
            assert_eq!(snapshot.above_sma, Some(true));
        }
    }

    #[test]
    fn test_single_period_yields_no_signals() {
        let series = series_from_closes(&[10.0, 11.0, 12.0, 13.0, 14.0, 15.0]);
        let config = AnalyzerConfig {
            periods: vec![5],
            ..Default::default()
        };
        let analyzer = StockAnalyzer::new(config).unwrap();

        let report = analyzer.analyze("ONE", &series).unwrap();
        assert!(report.signals.is_empty());
        assert_eq!(report.smas.get(5).unwrap().len(), 2);
    }

    #[test]
    fn test_short_series_aborts_by_default() {
        let series = series_from_closes(&[10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0]);
        let analyzer = StockAnalyzer::new(AnalyzerConfig::default()).unwrap();

        let err = analyzer.analyze("SHORT", &series).unwrap_err();
        assert_eq!(err, AnalysisError::insufficient_data(10, 8));
    }

    #[test]
    fn test_short_series_skips_and_warns() {
        let series = series_from_closes(&[10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0]);
        let config = AnalyzerConfig {
            batch_policy: BatchPolicy::SkipAndWarn,
            ..Default::default()
        };
        let analyzer = StockAnalyzer::new(config).unwrap();

        let report = analyzer.analyze("SHORT", &series).unwrap();

        assert_eq!(report.smas.get(5).unwrap().len(), 4);
        assert_eq!(report.smas.get(10), Some(&[][..]));
        assert_eq!(report.smas.warnings.len(), 2);
        // Long leg is empty, so no aligned steps and no signals
        assert!(report.signals.is_empty());

        let snapshot_10 = report
            .summary
            .smas
            .iter()
            .find(|s| s.period == 10)
            .unwrap();
        assert_eq!(snapshot_10.value, None);
        assert_eq!(snapshot_10.above_sma, None);
    }

    #[test]
    fn test_enabled_indicators_report_values() {
        let series = series_from_closes(&[10.0, 13.0, 16.0]);
        let config = AnalyzerConfig {
            periods: vec![2],
            cal_ema: true,
            ema_period: 3,
            cal_rsi: true,
            rsi_period: 2,
            cal_boll: true,
            boll_period: 2,
            boll_k: 2.0,
            ..Default::default()
        };
        let analyzer = StockAnalyzer::new(config).unwrap();

        let report = analyzer.analyze("IND", &series).unwrap();

        assert_eq!(report.metrics.ema, Some(13.75));
        assert_eq!(report.metrics.rsi, Some(100.0));
        assert_eq!(
            report.metrics.boll,
            Some(BollMetric {
                up: 17.5,
                mid: 14.5,
                down: 11.5
            })
        );
    }

    #[test]
    fn test_unsorted_series_rejected() {
        let mut series = series_from_closes(&[10.0, 11.0]);
        series.lst.swap(0, 1);
        let analyzer = StockAnalyzer::new(AnalyzerConfig::default()).unwrap();

        let err = analyzer.analyze("BAD", &series).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_analyze_many_preserves_order() {
        let mut source = RandomWalkSource::new(11);
        let portfolio = source.generate_portfolio(&["AAPL", "GOOGL", "MSFT"], 40, start_date());
        let analyzer = StockAnalyzer::new(AnalyzerConfig::default()).unwrap();

        let reports = analyzer.analyze_many(&portfolio).unwrap();

        let symbols: Vec<&str> = reports.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(symbols, vec!["AAPL", "GOOGL", "MSFT"]);
        for (symbol, report) in &reports {
            assert_eq!(&report.symbol, symbol);
            assert_eq!(report.analysis_days, 40);
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AnalyzerConfig {
            periods: vec![],
            ..Default::default()
        };
        assert!(StockAnalyzer::new(config).is_err());
    }
}

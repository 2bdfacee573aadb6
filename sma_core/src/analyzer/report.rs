use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::crossover::signal::Signal;
use crate::math::boll::BollMetric;
use crate::math::stats::SeriesStats;
use crate::series::price_observation::PriceObservation;
use crate::series::price_series::PriceSeries;
use crate::sma::sma_batch::SmaBatch;

/// Latest moving average value for one period, with the close compared
/// against it. Both are None when the period never produced a point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodSnapshot {
    pub period: usize,
    pub value: Option<f64>,
    pub above_sma: Option<bool>,
}

/// Condensed state of the series as of its last observation
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    pub latest_price: f64,
    pub smas: Vec<PeriodSnapshot>,
    pub data_points: usize,
}

/// Optional indicators computed alongside the averages
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtendedMetrics {
    pub ema: Option<f64>,
    pub rsi: Option<f64>,
    pub boll: Option<BollMetric>,
}

/// Full result of analyzing one symbol
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub symbol: String,
    pub analysis_days: usize,
    pub summary: AnalysisSummary,
    pub smas: SmaBatch,
    pub signals: Vec<Signal>,
    pub statistics: Option<SeriesStats>,
    pub metrics: ExtendedMetrics,
    pub recent: Vec<PriceObservation>,
}

#[derive(Debug, Serialize)]
pub struct ExportMetadata {
    pub export_date: String,
    pub data_points: usize,
}

/// One exported observation with every configured average attached.
/// Averages appear as `sma_N` keys and are null until period N has
/// enough history.
#[derive(Debug, Serialize)]
pub struct ExportRow {
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    pub close: f64,
    pub volume: u64,
    #[serde(flatten)]
    pub smas: BTreeMap<String, Option<f64>>,
}

#[derive(Debug, Serialize)]
pub struct ReportExport {
    pub metadata: ExportMetadata,
    pub analysis: AnalysisSummary,
    pub signals: Vec<Signal>,
    pub stock_data: Vec<ExportRow>,
}

impl AnalysisReport {
    /// Joins the report back onto the series it was computed from,
    /// producing one row per observation.
    pub fn to_export(&self, series: &PriceSeries) -> ReportExport {
        let stock_data = series
            .iter()
            .enumerate()
            .map(|(idx, obs)| {
                let mut smas = BTreeMap::new();
                for (period, points) in &self.smas.by_period {
                    // Window ending at idx starts the sequence at idx + 1 - period
                    let value = if idx + 1 < *period {
                        None
                    } else {
                        points.get(idx + 1 - period).map(|point| point.value)
                    };
                    smas.insert(format!("sma_{}", period), value);
                }
                ExportRow {
                    date: obs.date,
                    open: obs.open,
                    high: obs.high,
                    low: obs.low,
                    close: obs.close,
                    volume: obs.volume,
                    smas,
                }
            })
            .collect();

        ReportExport {
            metadata: ExportMetadata {
                export_date: Utc::now().to_rfc3339(),
                data_points: series.len(),
            },
            analysis: self.summary.clone(),
            signals: self.signals.clone(),
            stock_data,
        }
    }

    pub fn to_json_string(&self, series: &PriceSeries) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.to_export(series))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sma::sma_point::SmaPoint;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn sample_report() -> (AnalysisReport, PriceSeries) {
        let series: PriceSeries = [(1, 10.0), (2, 12.0), (3, 14.0)]
            .into_iter()
            .map(|(day, close)| PriceObservation::new(date(day), close, 1_000))
            .collect();

        let mut smas = SmaBatch::new();
        smas.insert(
            2,
            vec![
                SmaPoint::new(date(2), 11.0, 12.0),
                SmaPoint::new(date(3), 13.0, 14.0),
            ],
        );

        let report = AnalysisReport {
            symbol: "TEST".to_string(),
            analysis_days: series.len(),
            summary: AnalysisSummary {
                latest_price: 14.0,
                smas: vec![PeriodSnapshot {
                    period: 2,
                    value: Some(13.0),
                    above_sma: Some(true),
                }],
                data_points: series.len(),
            },
            smas,
            signals: vec![],
            statistics: None,
            metrics: ExtendedMetrics::default(),
            recent: series.lst.clone(),
        };
        (report, series)
    }

    #[test]
    fn test_export_aligns_averages_to_rows() {
        let (report, series) = sample_report();
        let export = report.to_export(&series);

        assert_eq!(export.stock_data.len(), 3);
        assert_eq!(export.stock_data[0].smas["sma_2"], None);
        assert_eq!(export.stock_data[1].smas["sma_2"], Some(11.0));
        assert_eq!(export.stock_data[2].smas["sma_2"], Some(13.0));
        assert_eq!(export.metadata.data_points, 3);
    }

    #[test]
    fn test_json_shape() {
        let (report, series) = sample_report();
        let json = report.to_json_string(&series).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["analysis"]["latest_price"], 14.0);
        assert_eq!(value["stock_data"][0]["sma_2"], serde_json::Value::Null);
        assert_eq!(value["stock_data"][2]["sma_2"], 13.0);
        // Close-only observations carry no open/high/low keys
        assert!(value["stock_data"][0].get("open").is_none());
        assert_eq!(value["stock_data"][0]["close"], 10.0);
    }

    #[test]
    fn test_skipped_period_exports_as_null() {
        let (mut report, series) = sample_report();
        report.smas.insert(50, vec![]);
        let export = report.to_export(&series);
        assert_eq!(export.stock_data[2].smas["sma_50"], None);
    }
}

pub mod analyzer;
pub mod common;
pub mod config;
pub mod crossover;
pub mod math;
pub mod series;
pub mod sma;
pub mod source;

pub use analyzer::analyzer::StockAnalyzer;
pub use config::analyzer_config::AnalyzerConfig;
pub use series::price_series::PriceSeries;

use std::env;
use std::error::Error;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use chrono::{Duration, NaiveDate, Utc};
use csv::Reader;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use sma_core::analyzer::report::AnalysisReport;
use sma_core::common::enums::PriceField;
use sma_core::series::price_observation::PriceObservation;
use sma_core::source::random_walk::RandomWalkSource;
use sma_core::{AnalyzerConfig, PriceSeries, StockAnalyzer};

#[derive(Debug)]
struct CsvRecord {
    date: NaiveDate,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: u64,
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let args: Vec<String> = env::args().collect();
    match args.len() {
        1 => run_demo(),
        2 => run_csv_analysis(Path::new(&args[1]), PriceField::Close),
        3 => run_csv_analysis(Path::new(&args[1]), PriceField::from_str(&args[2])?),
        _ => {
            eprintln!("Usage: sma_cli [file.csv] [open|high|low|close]");
            std::process::exit(2);
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run_demo() -> Result<(), Box<dyn Error>> {
    println!("=== Stock Analysis System ===");
    println!("Generating mock data and calculating moving averages...\n");

    let config = AnalyzerConfig {
        cal_ema: true,
        cal_rsi: true,
        cal_boll: true,
        ..Default::default()
    };
    let analyzer = StockAnalyzer::new(config)?;
    let mut source = RandomWalkSource::new(42);

    let days: i64 = 50;
    let start = Utc::now().date_naive() - Duration::days(days);
    let series = source.generate(days as usize, 100.0, start);

    let report = analyzer.analyze("AAPL", &series)?;
    print_report(&report);
    report_warnings(&report);

    let out_path = "AAPL_analysis.json";
    std::fs::write(out_path, report.to_json_string(&series)?)?;
    println!("\nData exported to {}", out_path);

    println!("\n{}", "=".repeat(50));
    println!("ANALYZING MULTIPLE STOCKS");
    println!("{}", "=".repeat(50));

    let portfolio_days: i64 = 40;
    let portfolio_start = Utc::now().date_naive() - Duration::days(portfolio_days);
    let portfolio = source.generate_portfolio(
        &["AAPL", "GOOGL", "MSFT"],
        portfolio_days as usize,
        portfolio_start,
    );

    for (_, report) in analyzer.analyze_many(&portfolio)? {
        println!();
        print_report(&report);
        report_warnings(&report);
    }

    Ok(())
}

fn run_csv_analysis(path: &Path, field: PriceField) -> Result<(), Box<dyn Error>> {
    info!("loading {:?}", path);
    let series = load_csv_series(path)?;

    let config = AnalyzerConfig {
        price_field: field,
        ..Default::default()
    };
    let analyzer = StockAnalyzer::new(config)?;

    let symbol = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("UNKNOWN");

    match analyzer.analyze(symbol, &series) {
        Ok(report) => {
            print_report(&report);
            report_warnings(&report);

            let out_path = format!("{}_analysis.json", symbol);
            std::fs::write(&out_path, report.to_json_string(&series)?)?;
            println!("\nData exported to {}", out_path);
        }
        Err(err) => error!("analysis failed for {}: {}", symbol, err),
    }

    Ok(())
}

fn load_csv_series(path: &Path) -> Result<PriceSeries, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut rdr = Reader::from_reader(file);
    let mut series = PriceSeries::new();

    for result in rdr.records() {
        let record = result?;

        let csv_record = parse_csv_record(&record)?;

        series.push(PriceObservation::with_ohlc(
            csv_record.date,
            csv_record.open,
            csv_record.high,
            csv_record.low,
            csv_record.close,
            csv_record.volume,
        ));
    }

    // Sort by date
    series.sort_by_date();

    Ok(series)
}

fn parse_csv_record(record: &csv::StringRecord) -> Result<CsvRecord, Box<dyn Error>> {
    let date = NaiveDate::parse_from_str(&record[0], "%Y-%m-%d")?;

    Ok(CsvRecord {
        date,
        open: record[1].parse()?,
        high: record[2].parse()?,
        low: record[3].parse()?,
        close: record[4].parse()?,
        volume: record[5].parse()?,
    })
}

fn print_report(report: &AnalysisReport) {
    println!("Stock: {}", report.symbol);
    println!("Current Price: ${:.2}", report.summary.latest_price);
    println!("Analysis Period: {} days", report.analysis_days);

    println!("\nMoving Averages:");
    for snapshot in &report.summary.smas {
        match snapshot.value {
            Some(value) => {
                let side = if snapshot.above_sma == Some(true) {
                    "above"
                } else {
                    "below"
                };
                println!("  SMA_{}: ${:.2} (price {})", snapshot.period, value, side);
            }
            None => println!("  SMA_{}: insufficient data", snapshot.period),
        }
    }

    println!("\nCrossover Signals:");
    let events: Vec<_> = report
        .signals
        .iter()
        .filter(|signal| signal.kind.is_event())
        .collect();
    if events.is_empty() {
        println!("  No significant crossover signals detected.");
    } else {
        for signal in events {
            println!(
                "  {} on {} at ${:.2} (short {:.2} / long {:.2})",
                signal.kind, signal.date, signal.price, signal.short_value, signal.long_value
            );
        }
    }

    if let Some(stats) = &report.statistics {
        println!("\nStatistics:");
        println!("  Mean Daily Return: {:.4}%", stats.mean_return * 100.0);
        println!("  Volatility: {:.4}", stats.volatility);
        println!("  Sharpe Ratio: {:.2}", stats.sharpe_ratio);
        println!("  Total Return: {:.2}%", stats.total_return);
        println!("  Max Drawdown: {:.2}%", stats.max_drawdown);
    }

    let metrics = &report.metrics;
    if metrics.ema.is_some() || metrics.rsi.is_some() || metrics.boll.is_some() {
        println!("\nIndicators:");
        if let Some(ema) = metrics.ema {
            println!("  EMA: ${:.2}", ema);
        }
        if let Some(rsi) = metrics.rsi {
            println!("  RSI: {:.2}", rsi);
        }
        if let Some(boll) = &metrics.boll {
            println!(
                "  Bollinger: ${:.2} / ${:.2} / ${:.2}",
                boll.up, boll.mid, boll.down
            );
        }
    }

    println!("\nRecent Prices:");
    for obs in &report.recent {
        println!("  {}", obs);
    }
}

fn report_warnings(report: &AnalysisReport) {
    for warning in &report.smas.warnings {
        warn!(period = warning.period, "{}", warning.error);
    }
}

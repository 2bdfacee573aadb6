pub mod boll;
pub mod ema;
pub mod rsi;
pub mod stats;

pub mod sma_batch;
pub mod sma_engine;
pub mod sma_point;

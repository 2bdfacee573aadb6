pub mod detector;
pub mod signal;

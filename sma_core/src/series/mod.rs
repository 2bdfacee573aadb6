pub mod price_observation;
pub mod price_series;

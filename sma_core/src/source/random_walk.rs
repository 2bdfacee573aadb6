use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::func_util::round2;
use crate::series::price_observation::PriceObservation;
use crate::series::price_series::PriceSeries;

const DEFAULT_VOLATILITY: f64 = 5.0;
const DEFAULT_FLOOR: f64 = 10.0;

/// Seeded random-walk generator for synthetic daily series. The same
/// seed always reproduces the same series.
#[derive(Debug)]
pub struct RandomWalkSource {
    rng: StdRng,
    volatility: f64,
    floor: f64,
}

impl RandomWalkSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            volatility: DEFAULT_VOLATILITY,
            floor: DEFAULT_FLOOR,
        }
    }

    pub fn with_volatility(mut self, volatility: f64) -> Self {
        self.volatility = volatility;
        self
    }

    pub fn with_floor(mut self, floor: f64) -> Self {
        self.floor = floor;
        self
    }

    /// Walk `days` steps from `base_price`, one close-only observation
    /// per calendar day. Emitted closes are rounded to 2 decimal places
    /// while the walk itself continues on the unrounded price.
    pub fn generate(&mut self, days: usize, base_price: f64, start_date: NaiveDate) -> PriceSeries {
        let mut series = PriceSeries::new();
        let mut price = base_price;

        for i in 0..days {
            let change = (self.rng.gen::<f64>() - 0.5) * self.volatility;
            price = (price + change).max(self.floor);

            let date = start_date + Duration::days(i as i64);
            let volume = self.rng.gen_range(100_000..1_100_000);
            series.push(PriceObservation::new(date, round2(price), volume));
        }

        series
    }

    /// One series per symbol, each walked from its own random base price
    /// in [100, 150)
    pub fn generate_portfolio(
        &mut self,
        symbols: &[&str],
        days: usize,
        start_date: NaiveDate,
    ) -> Vec<(String, PriceSeries)> {
        symbols
            .iter()
            .map(|symbol| {
                let base = 100.0 + self.rng.gen::<f64>() * 50.0;
                ((*symbol).to_string(), self.generate(days, base, start_date))
            })
            .collect()
    }
}

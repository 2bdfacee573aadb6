/// Streaming exponential moving average, seeded with the first price
#[derive(Debug)]
pub struct Ema {
    period: usize,
    value: f64,
    count: usize,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        Self {
            period,
            value: 0.0,
            count: 0,
        }
    }

    pub fn add(&mut self, price: f64) -> f64 {
        self.count += 1;

        if self.count == 1 {
            self.value = price;
        } else {
            self.value = (2.0 * price + (self.period as f64 - 1.0) * self.value)
                / (self.period as f64 + 1.0);
        }

        self.value
    }
}

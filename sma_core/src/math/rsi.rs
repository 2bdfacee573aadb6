/// Streaming relative strength index over a rolling window of gains and
/// losses. Returns None until the window fills.
#[derive(Debug)]
pub struct Rsi {
    period: usize,
    last_price: Option<f64>,
    gains: Vec<f64>,
    losses: Vec<f64>,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self {
            period,
            last_price: None,
            gains: Vec::with_capacity(period),
            losses: Vec::with_capacity(period),
        }
    }

    pub fn add(&mut self, price: f64) -> Option<f64> {
        let result = if let Some(last_price) = self.last_price {
            let change = price - last_price;

            if change >= 0.0 {
                self.gains.push(change);
                self.losses.push(0.0);
            } else {
                self.gains.push(0.0);
                self.losses.push(-change);
            }

            if self.gains.len() > self.period {
                self.gains.remove(0);
                self.losses.remove(0);
            }

            if self.gains.len() == self.period {
                let avg_gain = self.gains.iter().sum::<f64>() / self.period as f64;
                let avg_loss = self.losses.iter().sum::<f64>() / self.period as f64;

                if avg_loss == 0.0 {
                    Some(100.0)
                } else {
                    let rs = avg_gain / avg_loss;
                    Some(100.0 - (100.0 / (1.0 + rs)))
                }
            } else {
                None
            }
        } else {
            None
        };

        self.last_price = Some(price);
        result.map(|rsi| rsi.clamp(0.0, 100.0))
    }
}

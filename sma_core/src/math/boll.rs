use serde::Serialize;

/// Bollinger band values for one step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BollMetric {
    pub up: f64,
    pub mid: f64,
    pub down: f64,
}

/// Rolling mean with bands k standard deviations wide. Returns None
/// until the window fills; the deviation is the population form over
/// the window.
#[derive(Debug)]
pub struct BollModel {
    period: usize,
    k: f64,
    prices: Vec<f64>,
}

impl BollModel {
    pub fn new(period: usize, k: f64) -> Self {
        Self {
            period,
            k,
            prices: Vec::with_capacity(period),
        }
    }

    pub fn add(&mut self, price: f64) -> Option<BollMetric> {
        self.prices.push(price);
        if self.prices.len() > self.period {
            self.prices.remove(0);
        }
        if self.prices.len() < self.period {
            return None;
        }

        let mid = self.prices.iter().sum::<f64>() / self.period as f64;

        let variance = self
            .prices
            .iter()
            .map(|&x| (x - mid).powi(2))
            .sum::<f64>()
            / self.period as f64;

        let std_dev = variance.sqrt();

        Some(BollMetric {
            up: mid + self.k * std_dev,
            mid,
            down: mid - self.k * std_dev,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warmup_returns_none() {
        let mut boll = BollModel::new(3, 2.0);
        assert!(boll.add(10.0).is_none());
        assert!(boll.add(11.0).is_none());
        assert!(boll.add(12.0).is_some());
    }

    #[test]
    fn test_band_values() {
        let mut boll = BollModel::new(2, 2.0);
        boll.add(10.0);
        // mid 11, deviations -1/+1, std 1
        let metric = boll.add(12.0).unwrap();
        assert_eq!(
            metric,
            BollMetric {
                up: 13.0,
                mid: 11.0,
                down: 9.0
            }
        );
    }

    #[test]
    fn test_window_slides() {
        let mut boll = BollModel::new(2, 2.0);
        boll.add(10.0);
        boll.add(12.0);
        // Window is now [12, 14]
        let metric = boll.add(14.0).unwrap();
        assert_eq!(metric.mid, 13.0);
        assert_eq!(metric.up, 15.0);
        assert_eq!(metric.down, 11.0);
    }

    #[test]
    fn test_flat_window_collapses_bands() {
        let mut boll = BollModel::new(3, 2.0);
        boll.add(50.0);
        boll.add(50.0);
        let metric = boll.add(50.0).unwrap();
        assert_eq!(metric.up, 50.0);
        assert_eq!(metric.down, 50.0);
    }
}

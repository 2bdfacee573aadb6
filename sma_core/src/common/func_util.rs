/// Round to 2 decimal places, half away from zero
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Round to 4 decimal places, half away from zero
pub fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(1.236), 1.24);
        assert_eq!(round2(38.0 / 3.0), 12.67);
        assert_eq!(round2(-1.236), -1.24);
        assert_eq!(round2(9.0), 9.0);
    }

    #[test]
    fn test_round4() {
        assert_eq!(round4(0.123456), 0.1235);
        assert_eq!(round4(-0.123456), -0.1235);
        assert_eq!(round4(10.0), 10.0);
    }
}

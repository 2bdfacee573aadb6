use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Price attribute the SMA engine averages over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum PriceField {
    #[strum(serialize = "open")]
    Open,
    #[strum(serialize = "high")]
    High,
    #[strum(serialize = "low")]
    Low,
    #[strum(serialize = "close")]
    Close,
}

/// Classification of one aligned index pair of two SMA sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalKind {
    #[strum(serialize = "BUY")]
    Buy,
    #[strum(serialize = "SELL")]
    Sell,
    #[strum(serialize = "HOLD")]
    Hold,
}

impl SignalKind {
    /// Buy and sell entries mark actual crossings; hold entries do not
    pub fn is_event(&self) -> bool {
        matches!(self, SignalKind::Buy | SignalKind::Sell)
    }
}

/// Handling of per-period failures in a multi-period SMA batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum BatchPolicy {
    /// First failing period aborts the whole batch
    #[strum(serialize = "abort-on-first-error")]
    AbortOnFirstError,
    /// Failed periods map to empty sequences and record a warning
    #[strum(serialize = "skip-and-warn")]
    SkipAndWarn,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_price_field_round_trip() {
        assert_eq!(PriceField::from_str("close").unwrap(), PriceField::Close);
        assert_eq!(PriceField::Open.to_string(), "open");
    }

    #[test]
    fn test_signal_kind_display() {
        assert_eq!(SignalKind::Buy.to_string(), "BUY");
        assert_eq!(SignalKind::Sell.to_string(), "SELL");
        assert_eq!(SignalKind::Hold.to_string(), "HOLD");
    }

    #[test]
    fn test_signal_kind_is_event() {
        assert!(SignalKind::Buy.is_event());
        assert!(SignalKind::Sell.is_event());
        assert!(!SignalKind::Hold.is_event());
    }

    #[test]
    fn test_batch_policy_names() {
        assert_eq!(
            BatchPolicy::from_str("abort-on-first-error").unwrap(),
            BatchPolicy::AbortOnFirstError
        );
        assert_eq!(BatchPolicy::SkipAndWarn.to_string(), "skip-and-warn");
    }
}

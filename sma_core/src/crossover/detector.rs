use crate::common::enums::SignalKind;
use crate::sma::sma_point::SmaPoint;

use super::signal::Signal;

/// Classify every aligned index pair of a short and long SMA sequence.
///
/// Only the first min of the two lengths is compared, pairwise by index,
/// not by date; both inputs must come from the same underlying series
/// for index alignment to mean date alignment. Index 0 has no
/// predecessor, so classification starts at index 1 and an aligned range
/// of length <= 1 yields no signals. Every classified index is emitted,
/// hold entries included; callers filter for display.
///
/// The equality rule on the previous pair is load-bearing: a pair that
/// sits exactly equal and then crosses still registers, while a pair
/// that stays equal registers neither event.
pub fn detect_crossovers(short_sma: &[SmaPoint], long_sma: &[SmaPoint]) -> Vec<Signal> {
    let aligned = short_sma.len().min(long_sma.len());
    let mut signals = Vec::with_capacity(aligned.saturating_sub(1));

    for i in 1..aligned {
        let prev_short = short_sma[i - 1].value;
        let prev_long = long_sma[i - 1].value;
        let curr_short = short_sma[i].value;
        let curr_long = long_sma[i].value;

        // Golden cross: short moves from at-or-below to strictly above
        let kind = if prev_short <= prev_long && curr_short > curr_long {
            SignalKind::Buy
        // Death cross: short moves from at-or-above to strictly below
        } else if prev_short >= prev_long && curr_short < curr_long {
            SignalKind::Sell
        } else {
            SignalKind::Hold
        };

        signals.push(Signal {
            date: short_sma[i].date,
            kind,
            short_value: curr_short,
            long_value: curr_long,
            price: short_sma[i].source_price,
        });
    }

    signals
}

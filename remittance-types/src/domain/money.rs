//! Human-readable rendering of monetary amounts.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Maximum number of fraction digits shown in messages.
const DISPLAY_SCALE: u32 = 3;

/// Display adapter that renders an amount with thousands grouping.
///
/// The amount is rounded half-even to three fraction digits and trailing
/// zeros are dropped, so `3001.0` renders as `3,001` and `99.01` as `99.01`.
#[derive(Debug, Clone, Copy)]
pub struct Grouped<'a>(pub &'a Decimal);

impl fmt::Display for Grouped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointNearestEven)
            .normalize();
        let digits = rounded.abs().to_string();
        let (integer, fraction) = match digits.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (digits.as_str(), None),
        };

        if rounded.is_sign_negative() && !rounded.is_zero() {
            f.write_str("-")?;
        }
        for (i, ch) in integer.chars().enumerate() {
            if i > 0 && (integer.len() - i) % 3 == 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", ch)?;
        }
        if let Some(fraction) = fraction {
            write!(f, ".{}", fraction)?;
        }
        Ok(())
    }
}

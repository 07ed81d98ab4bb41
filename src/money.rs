//! Money types and the cent rounding rule shared by every calculation

use rust_decimal::{Decimal, RoundingStrategy};

/// Monetary amounts in the single unit of account, kept at cent precision.
pub type Money = Decimal;

/// Annual percentage rates expressed as percents (18.99 = 18.99%).
pub type Percent = Decimal;

/// Round to cents, half-up.
///
/// Amounts are never negative in the engine, so rounding midpoints away from
/// zero is the same as rounding half-up.
pub fn round_cents(amount: Decimal) -> Money {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Sum amounts, clamping at `Decimal::MAX` instead of overflowing.
///
/// A balance that compounds for long enough outgrows the 96-bit mantissa;
/// the run still has to finish and report non-convergence.
pub fn saturating_sum<I>(amounts: I) -> Money
where
    I: IntoIterator<Item = Money>,
{
    amounts.into_iter().fold(Money::ZERO, Money::saturating_add)
}

//! One month of amortization for a single debt

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::money::{round_cents, Money, Percent};

/// Percent APR to monthly fraction: apr / 100 / 12
const MONTHLY_RATE_DIVISOR: Decimal = dec!(1200);

/// Result of advancing one debt by one month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amortization {
    /// Interest added this month
    pub interest_accrued: Money,

    /// Payment actually applied (never more than balance plus interest)
    pub applied_payment: Money,

    /// Balance after interest and payment
    pub new_balance: Money,
}

impl Amortization {
    fn skipped(balance: Money) -> Self {
        Self {
            interest_accrued: Money::ZERO,
            applied_payment: Money::ZERO,
            new_balance: balance,
        }
    }
}

/// Monthly interest on a balance, rounded to cents.
///
/// Saturates at `Decimal::MAX` when the balance has compounded past what a
/// `Decimal` can hold.
pub fn monthly_interest(balance: Money, apr: Percent) -> Money {
    round_cents(balance.saturating_mul(apr) / MONTHLY_RATE_DIVISOR)
}

/// Accrue one month of interest on `balance` and apply up to `payment`.
///
/// Every amount is rounded to cents as it is computed, so
/// `new_balance == balance + interest_accrued - applied_payment` holds
/// exactly. A balance at or below zero is skipped: no interest, no payment.
pub fn amortize_one_debt(balance: Money, apr: Percent, payment: Money) -> Amortization {
    if balance <= Money::ZERO {
        return Amortization::skipped(balance);
    }

    let interest_accrued = monthly_interest(balance, apr);
    let balance_after_interest = balance.saturating_add(interest_accrued);
    let applied_payment = round_cents(payment.max(Money::ZERO).min(balance_after_interest));

    Amortization {
        interest_accrued,
        applied_payment,
        new_balance: balance_after_interest - applied_payment,
    }
}

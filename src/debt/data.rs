//! Debt data structures

use crate::money::{Money, Percent};
use serde::{Deserialize, Serialize};

/// A debt as supplied by the caller, before validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtInput {
    /// Caller-supplied stable identifier
    pub id: String,

    /// Display label
    pub name: String,

    /// Outstanding principal
    pub balance: Money,

    /// Annual percentage rate as a percent (18.99 = 18.99%)
    pub apr: Percent,

    /// Fixed monthly floor payment
    #[serde(alias = "minimumPayment")]
    pub minimum_payment: Money,
}

impl DebtInput {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        balance: Money,
        apr: Percent,
        minimum_payment: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            balance,
            apr,
            minimum_payment,
        }
    }
}

/// A validated debt record.
///
/// Balance and minimum payment are at cent precision. The engine only reads
/// these; every run keeps its own working balances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub id: String,
    pub name: String,
    pub balance: Money,
    pub apr: Percent,
    pub minimum_payment: Money,
}

impl Debt {
    /// Whether the debt still carries principal
    pub fn is_outstanding(&self) -> bool {
        self.balance > Money::ZERO
    }
}

//! Ledger and plan output structures

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::{saturating_sum, Money};
use crate::strategy::Strategy;

/// What happened to one debt in one simulated month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAllocation {
    pub debt_id: String,
    pub interest_accrued: Money,
    /// Portion of the payment from the minimum pass
    pub minimum_applied: Money,
    /// Portion of the payment from the waterfall pass
    pub extra_applied: Money,
    /// minimum_applied + extra_applied
    pub payment_applied: Money,
    pub remaining_balance: Money,
}

impl MonthlyAllocation {
    /// Entry for a debt that was already paid off
    pub fn idle(debt_id: &str, balance: Money) -> Self {
        Self {
            debt_id: debt_id.to_string(),
            interest_accrued: Money::ZERO,
            minimum_applied: Money::ZERO,
            extra_applied: Money::ZERO,
            payment_applied: Money::ZERO,
            remaining_balance: balance,
        }
    }
}

/// One month of the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Simulated month (1-indexed)
    pub month: u32,

    /// One allocation per debt, in input order
    pub allocations: Vec<MonthlyAllocation>,

    /// Payment capacity left unspent (only non-zero once every debt is paid)
    pub unallocated: Money,
}

impl LedgerEntry {
    pub fn total_payment(&self) -> Money {
        saturating_sum(self.allocations.iter().map(|a| a.payment_applied))
    }

    pub fn total_interest(&self) -> Money {
        saturating_sum(self.allocations.iter().map(|a| a.interest_accrued))
    }

    pub fn total_balance(&self) -> Money {
        saturating_sum(self.allocations.iter().map(|a| a.remaining_balance))
    }

    pub fn allocation(&self, debt_id: &str) -> Option<&MonthlyAllocation> {
        self.allocations.iter().find(|a| a.debt_id == debt_id)
    }
}

/// Per-debt outcome of a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtSummary {
    /// First month the debt ended at zero; 0 if it started paid off
    pub payoff_month: Option<u32>,
    pub total_interest_paid: Money,
    pub total_paid: Money,
    /// Calendar month of payoff when the plan has a start month
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payoff_date: Option<NaiveDate>,
}

/// Complete result of one simulation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffPlan {
    pub strategy: Strategy,

    /// False when the month cap was hit with debt remaining
    pub converged: bool,

    /// Number of months simulated
    pub months: u32,

    pub total_payment: Money,
    pub total_interest: Money,

    /// Summary keyed by debt id
    pub per_debt: BTreeMap<String, DebtSummary>,

    /// Debt ids in the priority order used for the run
    pub payoff_order: Vec<String>,

    /// Full month-by-month ledger
    pub ledger: Vec<LedgerEntry>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub debt_free_date: Option<NaiveDate>,
}

impl PayoffPlan {
    /// Plan for an empty debt set
    pub fn empty(strategy: Strategy) -> Self {
        Self {
            strategy,
            converged: true,
            months: 0,
            total_payment: Money::ZERO,
            total_interest: Money::ZERO,
            per_debt: BTreeMap::new(),
            payoff_order: Vec::new(),
            ledger: Vec::new(),
            debt_free_date: None,
        }
    }

    /// Balance still owed at the end of the run
    pub fn final_balance(&self) -> Money {
        self.ledger.last().map(|e| e.total_balance()).unwrap_or(Money::ZERO)
    }

    /// Remaining balance of one debt after every month (for charting)
    pub fn balance_history(&self, debt_id: &str) -> Vec<Money> {
        self.ledger
            .iter()
            .filter_map(|e| e.allocation(debt_id).map(|a| a.remaining_balance))
            .collect()
    }
}

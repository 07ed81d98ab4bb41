//! Plan summarizer: aggregates a finished ledger into a `PayoffPlan`
//!
//! Totals come from the ledger alone. Balances are never recomputed here.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::debt::Debt;
use crate::money::{saturating_sum, Money};
use crate::strategy::Strategy;
use super::calendar::month_date;
use super::ledger::{DebtSummary, LedgerEntry, PayoffPlan};

/// Everything the driver hands over at the end of a run
#[derive(Debug)]
pub struct RunOutcome<'a> {
    pub debts: &'a [Debt],
    pub strategy: Strategy,
    pub order: &'a [usize],
    pub ledger: Vec<LedgerEntry>,
    pub payoff_months: &'a [Option<u32>],
    pub converged: bool,
    pub start_month: Option<NaiveDate>,
}

/// Build the final plan
pub fn summarize(outcome: RunOutcome<'_>) -> PayoffPlan {
    let RunOutcome {
        debts,
        strategy,
        order,
        ledger,
        payoff_months,
        converged,
        start_month,
    } = outcome;

    let mut interest_by_debt = vec![Money::ZERO; debts.len()];
    let mut paid_by_debt = vec![Money::ZERO; debts.len()];
    for entry in &ledger {
        for (i, allocation) in entry.allocations.iter().enumerate() {
            interest_by_debt[i] = interest_by_debt[i].saturating_add(allocation.interest_accrued);
            paid_by_debt[i] = paid_by_debt[i].saturating_add(allocation.payment_applied);
        }
    }

    let total_interest = saturating_sum(interest_by_debt.iter().copied());
    let total_payment = saturating_sum(paid_by_debt.iter().copied());

    let per_debt: BTreeMap<String, DebtSummary> = debts
        .iter()
        .enumerate()
        .map(|(i, debt)| {
            let payoff_month = payoff_months.get(i).copied().flatten();
            let summary = DebtSummary {
                payoff_month,
                total_interest_paid: interest_by_debt[i],
                total_paid: paid_by_debt[i],
                payoff_date: start_month.zip(payoff_month).and_then(|(s, m)| month_date(s, m)),
            };
            (debt.id.clone(), summary)
        })
        .collect();

    let months = ledger.len() as u32;
    let debt_free_date = if converged {
        start_month.and_then(|s| month_date(s, months))
    } else {
        None
    };

    PayoffPlan {
        strategy,
        converged,
        months,
        total_payment,
        total_interest,
        per_debt,
        payoff_order: order.iter().map(|&i| debts[i].id.clone()).collect(),
        ledger,
        debt_free_date,
    }
}

//! Monthly payment allocation: minimum pass, then waterfall pass

use crate::debt::Debt;
use crate::money::{saturating_sum, Money};
use super::amortize::amortize_one_debt;
use super::ledger::MonthlyAllocation;

/// One month of allocations plus the capacity nothing could absorb
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthAllocation {
    /// One entry per debt, in input order
    pub allocations: Vec<MonthlyAllocation>,

    /// Pool left after the waterfall; non-zero only when every debt is paid
    pub unallocated: Money,
}

/// Total monthly payment capacity: every minimum payment plus the extra.
///
/// Minimums of debts that are already paid off stay in the budget and flow
/// into the waterfall pool.
pub fn monthly_capacity(debts: &[Debt], extra_monthly_payment: Money) -> Money {
    saturating_sum(debts.iter().map(|d| d.minimum_payment)).saturating_add(extra_monthly_payment)
}

/// Allocate one month of payments and update `balances` in place.
///
/// Both passes walk `order`. The minimum pass amortizes every outstanding
/// debt with its minimum payment (capped at balance plus interest). The
/// waterfall pass then spends the remaining pool on outstanding debts in
/// priority order until the pool is empty. Every outstanding debt receives
/// its minimum before any surplus is spent.
pub fn allocate_month(
    debts: &[Debt],
    order: &[usize],
    balances: &mut [Money],
    extra_monthly_payment: Money,
) -> MonthAllocation {
    debug_assert_eq!(debts.len(), balances.len());

    let mut allocations: Vec<MonthlyAllocation> = debts
        .iter()
        .zip(balances.iter())
        .map(|(d, &b)| MonthlyAllocation::idle(&d.id, b))
        .collect();

    // Minimum pass
    let mut applied = Money::ZERO;
    for &i in order {
        if balances[i] <= Money::ZERO {
            continue;
        }
        let debt = &debts[i];
        let step = amortize_one_debt(balances[i], debt.apr, debt.minimum_payment);
        balances[i] = step.new_balance;
        allocations[i].interest_accrued = step.interest_accrued;
        allocations[i].minimum_applied = step.applied_payment;
        applied += step.applied_payment;
    }

    // Waterfall pass
    let mut pool = monthly_capacity(debts, extra_monthly_payment) - applied;
    for &i in order {
        if pool <= Money::ZERO {
            break;
        }
        if balances[i] <= Money::ZERO {
            continue;
        }
        let extra = pool.min(balances[i]);
        balances[i] -= extra;
        pool -= extra;
        allocations[i].extra_applied = extra;
    }

    for (allocation, &balance) in allocations.iter_mut().zip(balances.iter()) {
        allocation.payment_applied = allocation.minimum_applied + allocation.extra_applied;
        allocation.remaining_balance = balance;
    }

    MonthAllocation {
        allocations,
        unallocated: pool.max(Money::ZERO),
    }
}

//! Debt payoff simulation: amortization, allocation, the monthly driver and
//! plan summaries

mod amortize;
mod allocator;
mod state;
mod engine;
mod ledger;
mod summary;
pub mod calendar;
pub mod export;

pub use amortize::{amortize_one_debt, monthly_interest, Amortization};
pub use allocator::{allocate_month, monthly_capacity, MonthAllocation};
pub use state::{Phase, SimulationState};
pub use engine::{
    plan_payoff, PayoffEngine, SimulationConfig, DEFAULT_MAX_MONTHS, MAX_MONTHS_LIMIT,
};
pub use ledger::{DebtSummary, LedgerEntry, MonthlyAllocation, PayoffPlan};
pub use summary::{summarize, RunOutcome};

//! Debt Payoff - deterministic month-by-month debt repayment simulation
//!
//! This library provides:
//! - Validation and loading of debt records (CSV / JSON)
//! - Avalanche and snowball priority ordering
//! - Monthly amortization with cent-exact rounding
//! - Minimum-then-waterfall payment allocation
//! - A bounded simulation driver with explicit non-convergence reporting
//! - Parallel strategy comparison and what-if batches

pub mod money;
pub mod error;
pub mod debt;
pub mod strategy;
pub mod payoff;
pub mod scenario;

// Re-export commonly used types
pub use debt::{Debt, DebtInput};
pub use error::PayoffError;
pub use money::Money;
pub use payoff::{plan_payoff, PayoffEngine, PayoffPlan, SimulationConfig};
pub use scenario::{StrategyComparison, StrategyRunner};
pub use strategy::Strategy;

//! Simulation driver: runs allocation month by month until the debts are
//! paid or the month cap is reached

use chrono::NaiveDate;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::debt::{validate_debts, Debt, DebtInput};
use crate::error::PayoffError;
use crate::money::{round_cents, saturating_sum, Money};
use crate::strategy::{order_indices, Strategy};
use super::allocator::allocate_month;
use super::ledger::{LedgerEntry, PayoffPlan};
use super::state::{Phase, SimulationState};
use super::summary::{summarize, RunOutcome};

/// Default non-convergence cap (50 years)
pub const DEFAULT_MAX_MONTHS: u32 = 600;

/// Largest accepted month cap (100 years)
pub const MAX_MONTHS_LIMIT: u32 = 1200;

fn default_max_months() -> u32 {
    DEFAULT_MAX_MONTHS
}

/// Configuration for a simulation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Fixed capacity added on top of the minimum payments every month
    #[serde(default, alias = "extraMonthlyPayment")]
    pub extra_monthly_payment: Money,

    /// Months to simulate before giving up, at most `MAX_MONTHS_LIMIT`
    #[serde(default = "default_max_months", alias = "maxMonths")]
    pub max_months: u32,

    /// Calendar month of the first payment, for payoff dates
    #[serde(default, alias = "startMonth")]
    pub start_month: Option<NaiveDate>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            extra_monthly_payment: Money::ZERO,
            max_months: DEFAULT_MAX_MONTHS,
            start_month: None,
        }
    }
}

impl SimulationConfig {
    pub fn with_extra(extra_monthly_payment: Money) -> Self {
        Self {
            extra_monthly_payment,
            ..Default::default()
        }
    }

    /// Reject configurations no run can use
    pub fn validate(&self) -> Result<(), PayoffError> {
        if self.extra_monthly_payment < Money::ZERO {
            return Err(PayoffError::validation(
                "config",
                "extra_monthly_payment",
                format!("must be >= 0, got {}", self.extra_monthly_payment),
            ));
        }
        if self.max_months == 0 {
            return Err(PayoffError::validation("config", "max_months", "must be at least 1"));
        }
        if self.max_months > MAX_MONTHS_LIMIT {
            return Err(PayoffError::validation(
                "config",
                "max_months",
                format!("must be at most {}, got {}", MAX_MONTHS_LIMIT, self.max_months),
            ));
        }
        Ok(())
    }
}

/// Main payoff engine
#[derive(Debug, Clone)]
pub struct PayoffEngine {
    config: SimulationConfig,
}

impl PayoffEngine {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run a full simulation over validated debts.
    ///
    /// The debts are only read. The run owns its working balances and ledger,
    /// so separate runs can execute in parallel.
    pub fn simulate(&self, debts: &[Debt], strategy: Strategy) -> PayoffPlan {
        if debts.is_empty() {
            info!("no debts supplied; returning empty {} plan", strategy);
            return PayoffPlan::empty(strategy);
        }

        let extra = round_cents(self.config.extra_monthly_payment.max(Money::ZERO));
        let max_months = self.config.max_months;
        let order = order_indices(debts, strategy);
        let mut state = SimulationState::from_debts(debts);
        let mut ledger = Vec::with_capacity(max_months.min(MAX_MONTHS_LIMIT) as usize);

        state.settle(max_months);
        while state.is_running() {
            state.advance_month();

            let month = allocate_month(debts, &order, &mut state.balances, extra);
            state.record_payoffs();

            let entry = LedgerEntry {
                month: state.month,
                allocations: month.allocations,
                unallocated: month.unallocated,
            };
            debug!(
                "month {}: paid {} interest {} remaining {}",
                entry.month,
                entry.total_payment(),
                entry.total_interest(),
                entry.total_balance()
            );
            ledger.push(entry);

            state.settle(max_months);
        }

        let converged = state.phase == Phase::Converged;
        if converged {
            info!("{} plan converged after {} months", strategy, state.month);
        } else {
            warn!(
                "{} plan did not converge within {} months; {} still owed",
                strategy,
                max_months,
                saturating_sum(state.balances.iter().copied())
            );
        }

        summarize(RunOutcome {
            debts,
            strategy,
            order: &order,
            ledger,
            payoff_months: &state.payoff_months,
            converged,
            start_month: self.config.start_month,
        })
    }
}

/// Validate raw input and run one plan.
///
/// Validation errors are returned before any month is simulated.
/// Non-convergence is reported through `PayoffPlan::converged`.
pub fn plan_payoff(
    inputs: &[DebtInput],
    strategy: Strategy,
    config: &SimulationConfig,
) -> Result<PayoffPlan, PayoffError> {
    config.validate()?;
    let debts = validate_debts(inputs)?;
    Ok(PayoffEngine::new(config.clone()).simulate(&debts, strategy))
}

//! Strategy runner for side-by-side plan comparisons
//!
//! Validates debts once, then runs many plans over them in parallel. Each
//! plan owns its own working state, so the runs share nothing mutable.

use rayon::prelude::*;
use serde::Serialize;

use crate::debt::{validate_debts, Debt, DebtInput};
use crate::error::PayoffError;
use crate::money::Money;
use crate::payoff::{PayoffEngine, PayoffPlan, SimulationConfig};
use crate::strategy::Strategy;

/// Pre-validated runner for batch simulations
///
/// # Example
/// ```ignore
/// let runner = StrategyRunner::new(&inputs, SimulationConfig::with_extra(dec!(200)))?;
/// let comparison = runner.compare();
/// println!("Avalanche saves {}", comparison.interest_saved);
/// ```
#[derive(Debug, Clone)]
pub struct StrategyRunner {
    debts: Vec<Debt>,
    config: SimulationConfig,
}

/// Avalanche vs snowball vs paying only the minimums
#[derive(Debug, Clone, Serialize)]
pub struct StrategyComparison {
    pub avalanche: PayoffPlan,
    pub snowball: PayoffPlan,

    /// Avalanche order with no extra payment
    pub minimum_only: PayoffPlan,

    /// Snowball interest minus avalanche interest
    pub interest_saved: Money,

    /// Snowball months minus avalanche months
    pub months_saved: i64,

    /// Converged strategy with the lowest interest; avalanche on ties
    pub recommended: Option<Strategy>,
}

impl StrategyRunner {
    /// Validate the debts and config once for every later run
    pub fn new(inputs: &[DebtInput], config: SimulationConfig) -> Result<Self, PayoffError> {
        config.validate()?;
        Ok(Self {
            debts: validate_debts(inputs)?,
            config,
        })
    }

    pub fn debts(&self) -> &[Debt] {
        &self.debts
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run one strategy with the runner's config
    pub fn run(&self, strategy: Strategy) -> PayoffPlan {
        PayoffEngine::new(self.config.clone()).simulate(&self.debts, strategy)
    }

    /// Run every strategy in parallel, in `Strategy::ALL` order
    pub fn run_all(&self) -> Vec<PayoffPlan> {
        Strategy::ALL
            .par_iter()
            .map(|&strategy| self.run(strategy))
            .collect()
    }

    /// Run one strategy under several configs (e.g. different extra
    /// payments). Results follow the order of `configs`.
    pub fn run_scenarios(
        &self,
        strategy: Strategy,
        configs: &[SimulationConfig],
    ) -> Result<Vec<PayoffPlan>, PayoffError> {
        for config in configs {
            config.validate()?;
        }
        Ok(configs
            .par_iter()
            .map(|config| PayoffEngine::new(config.clone()).simulate(&self.debts, strategy))
            .collect())
    }

    /// Run a strategy for each extra payment amount, keeping the other
    /// config fields
    pub fn what_if_extra(
        &self,
        strategy: Strategy,
        extras: &[Money],
    ) -> Result<Vec<PayoffPlan>, PayoffError> {
        let configs: Vec<SimulationConfig> = extras
            .iter()
            .map(|&extra| SimulationConfig {
                extra_monthly_payment: extra,
                ..self.config.clone()
            })
            .collect();
        self.run_scenarios(strategy, &configs)
    }

    /// Compare both strategies and the minimum-only baseline
    pub fn compare(&self) -> StrategyComparison {
        let baseline = SimulationConfig {
            extra_monthly_payment: Money::ZERO,
            ..self.config.clone()
        };
        let ((avalanche, snowball), minimum_only) = rayon::join(
            || rayon::join(|| self.run(Strategy::Avalanche), || self.run(Strategy::Snowball)),
            || PayoffEngine::new(baseline).simulate(&self.debts, Strategy::Avalanche),
        );

        let interest_saved = snowball.total_interest - avalanche.total_interest;
        let months_saved = i64::from(snowball.months) - i64::from(avalanche.months);
        let recommended = recommend(&avalanche, &snowball);

        StrategyComparison {
            avalanche,
            snowball,
            minimum_only,
            interest_saved,
            months_saved,
            recommended,
        }
    }
}

fn recommend(avalanche: &PayoffPlan, snowball: &PayoffPlan) -> Option<Strategy> {
    match (avalanche.converged, snowball.converged) {
        (true, true) if snowball.total_interest < avalanche.total_interest => {
            Some(Strategy::Snowball)
        }
        (true, _) => Some(Strategy::Avalanche),
        (false, true) => Some(Strategy::Snowball),
        (false, false) => None,
    }
}

//! Working state of a single simulation run

use crate::debt::Debt;
use crate::money::Money;

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    /// Every working balance reached zero
    Converged,
    /// Month cap hit with at least one balance outstanding
    NonConverged,
}

/// Mutable state owned by one run and discarded afterwards
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Months simulated so far
    pub month: u32,

    /// Working balance per debt, in input order
    pub balances: Vec<Money>,

    /// Month each debt first ended at or below zero
    pub payoff_months: Vec<Option<u32>>,

    pub phase: Phase,
}

impl SimulationState {
    /// Start a run from the debts' own balances
    pub fn from_debts(debts: &[Debt]) -> Self {
        let balances: Vec<Money> = debts.iter().map(|d| d.balance).collect();
        let payoff_months = debts
            .iter()
            .map(|d| if d.is_outstanding() { None } else { Some(0) })
            .collect();

        Self {
            month: 0,
            balances,
            payoff_months,
            phase: Phase::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn all_paid(&self) -> bool {
        self.balances.iter().all(|b| *b <= Money::ZERO)
    }

    /// Move to the next month
    pub fn advance_month(&mut self) {
        self.month += 1;
    }

    /// Record the current month for debts that just reached zero.
    /// A recorded month is never overwritten.
    pub fn record_payoffs(&mut self) {
        for (payoff, balance) in self.payoff_months.iter_mut().zip(&self.balances) {
            if payoff.is_none() && *balance <= Money::ZERO {
                *payoff = Some(self.month);
            }
        }
    }

    /// Apply the terminal transitions. Convergence wins over the cap when a
    /// run clears its last balance in the final allowed month.
    pub fn settle(&mut self, max_months: u32) {
        if !self.is_running() {
            return;
        }
        if self.all_paid() {
            self.phase = Phase::Converged;
        } else if self.month >= max_months {
            self.phase = Phase::NonConverged;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn debts() -> Vec<Debt> {
        vec![
            Debt {
                id: "a".into(),
                name: "A".into(),
                balance: dec!(100),
                apr: dec!(10),
                minimum_payment: dec!(10),
            },
            Debt {
                id: "b".into(),
                name: "B".into(),
                balance: dec!(0),
                apr: dec!(10),
                minimum_payment: dec!(10),
            },
        ]
    }

    #[test]
    fn test_initial_state() {
        let state = SimulationState::from_debts(&debts());
        assert_eq!(state.month, 0);
        assert_eq!(state.balances, vec![dec!(100), dec!(0)]);
        assert_eq!(state.payoff_months, vec![None, Some(0)]);
        assert!(state.is_running());
    }

    #[test]
    fn test_payoff_recorded_once() {
        let mut state = SimulationState::from_debts(&debts());
        state.advance_month();
        state.balances[0] = dec!(0);
        state.record_payoffs();
        state.advance_month();
        state.record_payoffs();
        assert_eq!(state.payoff_months, vec![Some(1), Some(0)]);
    }

    #[test]
    fn test_settle_transitions() {
        let mut state = SimulationState::from_debts(&debts());
        state.settle(3);
        assert!(state.is_running());

        state.month = 3;
        state.settle(3);
        assert_eq!(state.phase, Phase::NonConverged);

        // Terminal phases are sticky
        state.balances[0] = dec!(0);
        state.settle(3);
        assert_eq!(state.phase, Phase::NonConverged);
    }

    #[test]
    fn test_convergence_beats_cap() {
        let mut state = SimulationState::from_debts(&debts());
        state.month = 3;
        state.balances[0] = dec!(0);
        state.settle(3);
        assert_eq!(state.phase, Phase::Converged);
    }
}

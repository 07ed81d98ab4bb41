//! Repayment strategies and the priority order they impose on debts

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::debt::Debt;

/// Policy deciding which debt receives surplus payment first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Highest APR first
    Avalanche,
    /// Smallest original balance first
    Snowball,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Avalanche, Strategy::Snowball];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Avalanche => "avalanche",
            Strategy::Snowball => "snowball",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "avalanche" => Ok(Strategy::Avalanche),
            "snowball" => Ok(Strategy::Snowball),
            other => Err(format!("Unknown strategy: {}", other)),
        }
    }
}

/// Priority order as indices into `debts`.
///
/// The sort is stable, so debts that tie on the strategy key keep their
/// input order. Snowball compares the balances the debts were created with;
/// the order is fixed for a whole run and never follows working balances.
pub fn order_indices(debts: &[Debt], strategy: Strategy) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..debts.len()).collect();
    match strategy {
        Strategy::Avalanche => indices.sort_by(|&a, &b| debts[b].apr.cmp(&debts[a].apr)),
        Strategy::Snowball => indices.sort_by(|&a, &b| debts[a].balance.cmp(&debts[b].balance)),
    }
    indices
}

/// Priority order as debt ids
pub fn order(debts: &[Debt], strategy: Strategy) -> Vec<String> {
    order_indices(debts, strategy)
        .into_iter()
        .map(|i| debts[i].id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Money, Percent};
    use rust_decimal_macros::dec;

    fn debt(id: &str, balance: Money, apr: Percent) -> Debt {
        Debt {
            id: id.to_string(),
            name: id.to_uppercase(),
            balance,
            apr,
            minimum_payment: dec!(25),
        }
    }

    #[test]
    fn test_avalanche_orders_by_apr_descending() {
        let debts = vec![
            debt("low", dec!(100), dec!(3.5)),
            debt("high", dec!(5000), dec!(24.99)),
            debt("mid", dec!(900), dec!(9)),
        ];
        assert_eq!(order(&debts, Strategy::Avalanche), vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_snowball_orders_by_balance_ascending() {
        let debts = vec![
            debt("big", dec!(12000), dec!(6.5)),
            debt("small", dec!(400), dec!(1)),
            debt("medium", dec!(5000), dec!(18.99)),
        ];
        assert_eq!(order(&debts, Strategy::Snowball), vec!["small", "medium", "big"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let debts = vec![
            debt("first", dec!(1000), dec!(10)),
            debt("second", dec!(1000), dec!(10)),
            debt("third", dec!(1000), dec!(10)),
        ];
        for strategy in Strategy::ALL {
            assert_eq!(order(&debts, strategy), vec!["first", "second", "third"]);
        }
    }

    #[test]
    fn test_zero_balance_debt_still_ordered() {
        let debts = vec![debt("a", dec!(50), dec!(1)), debt("paid", dec!(0), dec!(30))];
        assert_eq!(order_indices(&debts, Strategy::Snowball), vec![1, 0]);
        assert_eq!(order_indices(&debts, Strategy::Avalanche), vec![1, 0]);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("Avalanche".parse::<Strategy>().unwrap(), Strategy::Avalanche);
        assert_eq!(" snowball ".parse::<Strategy>().unwrap(), Strategy::Snowball);
        assert!("random".parse::<Strategy>().is_err());
        assert_eq!(Strategy::Snowball.to_string(), "snowball");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Strategy::Avalanche).unwrap();
        assert_eq!(json, "\"avalanche\"");
        let parsed: Strategy = serde_json::from_str("\"snowball\"").unwrap();
        assert_eq!(parsed, Strategy::Snowball);
    }
}

//! Ledger CSV export for spreadsheets and chart tooling

use std::io::Write;

use serde::Serialize;

use crate::error::PayoffError;
use crate::money::Money;
use super::ledger::PayoffPlan;

/// One CSV line: a single debt in a single month
#[derive(Debug, Serialize)]
struct LedgerCsvRow<'a> {
    month: u32,
    debt_id: &'a str,
    interest_accrued: Money,
    minimum_applied: Money,
    extra_applied: Money,
    payment_applied: Money,
    remaining_balance: Money,
}

/// Write the plan's ledger as CSV, one row per debt per month
pub fn write_ledger_csv<W: Write>(plan: &PayoffPlan, writer: W) -> Result<(), PayoffError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for entry in &plan.ledger {
        for allocation in &entry.allocations {
            csv_writer.serialize(LedgerCsvRow {
                month: entry.month,
                debt_id: &allocation.debt_id,
                interest_accrued: allocation.interest_accrued,
                minimum_applied: allocation.minimum_applied,
                extra_applied: allocation.extra_applied,
                payment_applied: allocation.payment_applied,
                remaining_balance: allocation.remaining_balance,
            })?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debt::DebtInput;
    use crate::payoff::{plan_payoff, SimulationConfig};
    use crate::strategy::Strategy;
    use rust_decimal_macros::dec;

    #[test]
    fn test_one_row_per_debt_month() {
        let debts = vec![
            DebtInput::new("a", "A", dec!(300), dec!(0), dec!(100)),
            DebtInput::new("b", "B", dec!(150), dec!(0), dec!(50)),
        ];
        let plan = plan_payoff(&debts, Strategy::Snowball, &SimulationConfig::default()).unwrap();

        let mut buf = Vec::new();
        write_ledger_csv(&plan, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "month,debt_id,interest_accrued,minimum_applied,extra_applied,payment_applied,remaining_balance"
        );
        assert_eq!(lines.len(), 1 + plan.ledger.len() * 2);
        assert!(lines[1].starts_with("1,a,"));
        assert!(lines[2].starts_with("1,b,"));
    }

    #[test]
    fn test_empty_plan_writes_nothing() {
        let plan = PayoffPlan::empty(Strategy::Avalanche);
        let mut buf = Vec::new();
        write_ledger_csv(&plan, &mut buf).unwrap();
        assert!(buf.is_empty());
    }
}

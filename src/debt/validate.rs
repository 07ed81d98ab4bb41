//! Validation and normalization of raw debt input

use std::collections::HashSet;

use log::debug;

use super::{Debt, DebtInput};
use crate::error::PayoffError;
use crate::money::{round_cents, Money, Percent};

/// Validate raw debts in input order.
///
/// Rules: non-empty id and name, `balance >= 0`, `apr >= 0`,
/// `minimum_payment > 0`, unique ids. Balance and minimum payment are
/// rounded to cents; id and name are trimmed. Fails on the first offending
/// debt.
pub fn validate_debts(inputs: &[DebtInput]) -> Result<Vec<Debt>, PayoffError> {
    let mut seen = HashSet::with_capacity(inputs.len());
    let mut debts = Vec::with_capacity(inputs.len());

    for input in inputs {
        let debt = validate_one(input)?;
        if !seen.insert(debt.id.clone()) {
            return Err(PayoffError::DuplicateDebtId(debt.id));
        }
        debts.push(debt);
    }

    debug!("validated {} debts", debts.len());
    Ok(debts)
}

fn validate_one(input: &DebtInput) -> Result<Debt, PayoffError> {
    let id = input.id.trim();
    if id.is_empty() {
        return Err(PayoffError::validation(&input.id, "id", "must not be empty"));
    }

    let name = input.name.trim();
    if name.is_empty() {
        return Err(PayoffError::validation(id, "name", "must not be empty"));
    }

    if input.balance < Money::ZERO {
        return Err(PayoffError::validation(
            id,
            "balance",
            format!("must be >= 0, got {}", input.balance),
        ));
    }

    if input.apr < Percent::ZERO {
        return Err(PayoffError::validation(
            id,
            "apr",
            format!("must be >= 0, got {}", input.apr),
        ));
    }

    // Rounded first so a sub-cent minimum cannot slip through as zero
    let minimum_payment = round_cents(input.minimum_payment);
    if minimum_payment <= Money::ZERO {
        return Err(PayoffError::validation(
            id,
            "minimum_payment",
            format!("must be > 0, got {}", input.minimum_payment),
        ));
    }

    Ok(Debt {
        id: id.to_string(),
        name: name.to_string(),
        balance: round_cents(input.balance),
        apr: input.apr,
        minimum_payment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn input(id: &str, balance: Money, apr: Money, min: Money) -> DebtInput {
        DebtInput::new(id, format!("Debt {}", id), balance, apr, min)
    }

    #[test]
    fn test_valid_debts_keep_input_order() {
        let debts = validate_debts(&[
            input("b", dec!(100), dec!(5), dec!(10)),
            input("a", dec!(200), dec!(7), dec!(20)),
        ])
        .unwrap();

        let ids: Vec<_> = debts.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_normalizes_to_cents_and_trims() {
        let raw = DebtInput::new(" cc ", "  Visa ", dec!(100.005), dec!(18.99), dec!(25.004));
        let debts = validate_debts(&[raw]).unwrap();

        assert_eq!(debts[0].id, "cc");
        assert_eq!(debts[0].name, "Visa");
        assert_eq!(debts[0].balance, dec!(100.01));
        assert_eq!(debts[0].minimum_payment, dec!(25.00));
        assert_eq!(debts[0].apr, dec!(18.99));
    }

    #[test]
    fn test_zero_balance_and_zero_apr_allowed() {
        let debts = validate_debts(&[input("z", dec!(0), dec!(0), dec!(1))]).unwrap();
        assert!(!debts[0].is_outstanding());
    }

    #[test]
    fn test_negative_balance_rejected() {
        let err = validate_debts(&[input("x", dec!(-1), dec!(5), dec!(10))]).unwrap_err();
        match err {
            PayoffError::Validation { debt_id, field, .. } => {
                assert_eq!(debt_id, "x");
                assert_eq!(field, "balance");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_apr_rejected() {
        let err = validate_debts(&[input("x", dec!(10), dec!(-0.5), dec!(10))]).unwrap_err();
        assert!(matches!(err, PayoffError::Validation { ref field, .. } if field == "apr"));
    }

    #[test]
    fn test_non_positive_minimum_rejected() {
        for min in [dec!(0), dec!(-5), dec!(0.004)] {
            let err = validate_debts(&[input("x", dec!(10), dec!(5), min)]).unwrap_err();
            assert!(
                matches!(err, PayoffError::Validation { ref field, .. } if field == "minimum_payment"),
                "minimum {} should be rejected",
                min
            );
        }
    }

    #[test]
    fn test_blank_name_rejected() {
        let raw = DebtInput::new("x", "   ", dec!(10), dec!(5), dec!(1));
        let err = validate_debts(&[raw]).unwrap_err();
        assert!(matches!(err, PayoffError::Validation { ref field, .. } if field == "name"));
    }

    #[test]
    fn test_blank_id_rejected() {
        let raw = DebtInput::new(" ", "Loan", dec!(10), dec!(5), dec!(1));
        let err = validate_debts(&[raw]).unwrap_err();
        assert!(matches!(err, PayoffError::Validation { ref field, .. } if field == "id"));
    }

    #[test]
    fn test_duplicate_ids_rejected_after_trim() {
        let err = validate_debts(&[
            input("cc", dec!(10), dec!(5), dec!(1)),
            input(" cc", dec!(20), dec!(5), dec!(1)),
        ])
        .unwrap_err();
        assert!(matches!(err, PayoffError::DuplicateDebtId(ref id) if id == "cc"));
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(validate_debts(&[]).unwrap().is_empty());
    }
}

//! Load raw debts from CSV or JSON files
//!
//! CSV columns: `id,name,balance,apr,minimum_payment`. JSON is an array of
//! objects with the same fields (`minimumPayment` is also accepted).
//! Loaded debts are raw input and still go through validation.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{Reader, Trim};
use rust_decimal::Decimal;

use super::DebtInput;
use crate::error::PayoffError;

/// Raw CSV row
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    id: String,
    name: String,
    balance: String,
    apr: String,
    #[serde(alias = "minimumPayment")]
    minimum_payment: String,
}

impl CsvRow {
    fn to_input(self) -> Result<DebtInput, PayoffError> {
        let balance = parse_amount(&self.id, "balance", &self.balance)?;
        let apr = parse_amount(&self.id, "apr", &self.apr)?;
        let minimum_payment = parse_amount(&self.id, "minimum_payment", &self.minimum_payment)?;

        Ok(DebtInput {
            id: self.id,
            name: self.name,
            balance,
            apr,
            minimum_payment,
        })
    }
}

fn parse_amount(debt_id: &str, field: &str, raw: &str) -> Result<Decimal, PayoffError> {
    // Tolerate the "$1,250.00" / "18.99%" shapes spreadsheets export
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '%'))
        .collect();
    cleaned
        .parse::<Decimal>()
        .map_err(|_| PayoffError::validation(debt_id, field, format!("is not a number: '{}'", raw)))
}

/// Load debts from a `.csv` or `.json` file
pub fn load_debts<P: AsRef<Path>>(path: P) -> Result<Vec<DebtInput>, PayoffError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("csv") => load_debts_from_reader(File::open(path)?),
        Some("json") => load_debts_from_json(File::open(path)?),
        _ => Err(PayoffError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Load debts from any CSV reader (e.g., string buffer, stdin)
pub fn load_debts_from_reader<R: Read>(reader: R) -> Result<Vec<DebtInput>, PayoffError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    read_rows(&mut csv_reader)
}

fn read_rows<R: Read>(reader: &mut Reader<R>) -> Result<Vec<DebtInput>, PayoffError> {
    let mut debts = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        debts.push(row.to_input()?);
    }

    Ok(debts)
}

/// Load debts from a JSON array
pub fn load_debts_from_json<R: Read>(reader: R) -> Result<Vec<DebtInput>, PayoffError> {
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_load_csv() {
        let data = "id,name,balance,apr,minimum_payment\n\
                    cc,Visa,5000,18.99,150\n\
                    car, Car loan ,12000.00,6.5,300\n";
        let debts = load_debts_from_reader(data.as_bytes()).unwrap();

        assert_eq!(debts.len(), 2);
        assert_eq!(debts[0].id, "cc");
        assert_eq!(debts[0].apr, dec!(18.99));
        assert_eq!(debts[1].name, "Car loan");
        assert_eq!(debts[1].balance, dec!(12000));
        assert_eq!(debts[1].minimum_payment, dec!(300));
    }

    #[test]
    fn test_load_csv_with_currency_formatting() {
        let data = "id,name,balance,apr,minimum_payment\n\
                    cc,Visa,\"$1,250.50\",19.5%,$35\n";
        let debts = load_debts_from_reader(data.as_bytes()).unwrap();

        assert_eq!(debts[0].balance, dec!(1250.50));
        assert_eq!(debts[0].apr, dec!(19.5));
        assert_eq!(debts[0].minimum_payment, dec!(35));
    }

    #[test]
    fn test_load_csv_bad_number() {
        let data = "id,name,balance,apr,minimum_payment\ncc,Visa,lots,19.5,35\n";
        let err = load_debts_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, PayoffError::Validation { ref field, .. } if field == "balance"));
    }

    #[test]
    fn test_load_csv_missing_column() {
        let data = "id,name,balance,apr\ncc,Visa,100,19.5\n";
        let err = load_debts_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, PayoffError::Csv(_)));
    }

    #[test]
    fn test_load_json_accepts_camel_case_minimum() {
        let data = r#"[
            {"id": "cc", "name": "Visa", "balance": 5000, "apr": 18.99, "minimumPayment": 150},
            {"id": "car", "name": "Car", "balance": "12000.00", "apr": "6.5", "minimum_payment": "300"}
        ]"#;
        let debts = load_debts_from_json(data.as_bytes()).unwrap();

        assert_eq!(debts.len(), 2);
        assert_eq!(debts[0].minimum_payment, dec!(150));
        assert_eq!(debts[0].apr, dec!(18.99));
        assert_eq!(debts[1].balance, dec!(12000));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = load_debts("debts.xlsx").unwrap_err();
        assert!(matches!(err, PayoffError::UnsupportedFormat(_)));
    }
}

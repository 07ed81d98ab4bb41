//! Debt records: raw input, validation and file loading

mod data;
mod validate;
pub mod loader;

pub use data::{Debt, DebtInput};
pub use validate::validate_debts;
pub use loader::{load_debts, load_debts_from_reader, load_debts_from_json};

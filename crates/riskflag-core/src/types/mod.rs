//! Domain types for credit rule evaluation.
//!
//! - [`FinancialRecord`]: a company's filing history plus metadata
//! - [`FinancialStatement`]: one filing, with its [`StatementNature`]
//! - [`ProfitAndLoss`], [`LineItems`], [`DepreciationBreakup`]: P&L section
//! - [`BalanceSheet`], [`Liabilities`]: balance-sheet section
//! - [`FlagValue`]: traffic-light outcome of a rule

mod flag;
mod record;
mod statement;

pub use flag::FlagValue;
pub use record::FinancialRecord;
pub use statement::{
    BalanceSheet, DepreciationBreakup, FinancialStatement, Liabilities, LineItems, ProfitAndLoss,
    StatementNature,
};

//! # riskflag Core
//!
//! Core types for the riskflag credit rule engine.
//!
//! This crate provides the data the rule engine reads and the values it
//! produces:
//!
//! - **Financial records**: a company's filing history as an ordered list of
//!   [`FinancialStatement`]s plus free-form metadata
//! - **Statement sections**: profit-and-loss line items, depreciation
//!   breakdown and balance-sheet liabilities, every amount optional
//! - **Flags**: the five-valued [`FlagValue`] traffic light
//!
//! ## Example
//!
//! ```rust
//! use riskflag_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let record = FinancialRecord::from_json_str(
//!     r#"{"financials": [{"nature": "STANDALONE", "pnl": {"lineItems": {"net_revenue": 60000000}}}]}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(record.len(), 1);
//! assert_eq!(record.statement(0).unwrap().pnl.line_items.net_revenue, Some(dec!(60000000)));
//! assert_eq!(FlagValue::White.code(), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use types::{
    BalanceSheet, DepreciationBreakup, FinancialRecord, FinancialStatement, FlagValue,
    Liabilities, LineItems, ProfitAndLoss, StatementNature,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{
        BalanceSheet, DepreciationBreakup, FinancialRecord, FinancialStatement, FlagValue,
        Liabilities, LineItems, ProfitAndLoss, StatementNature,
    };
}

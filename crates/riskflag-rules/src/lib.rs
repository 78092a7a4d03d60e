//! # riskflag Rules
//!
//! Credit risk rules over a company's financial statements.
//!
//! - **Selection**: pick the first STANDALONE statement of a record
//! - **Ratios**: net revenue, borrowing-to-revenue, interest service
//!   coverage (ISCR)
//! - **Flags**: map each ratio onto GREEN/AMBER/RED, or WHITE when the data
//!   cannot support a judgement
//! - **Thresholds**: the cutoffs behind each flag, loadable from JSON or TOML
//!
//! Everything here is a pure function of its arguments; records are only
//! borrowed and nothing is cached.
//!
//! ## Example
//!
//! ```rust
//! use riskflag_core::{FinancialRecord, FinancialStatement, FlagValue, StatementNature};
//! use riskflag_rules::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let record = FinancialRecord::new(vec![
//!     FinancialStatement::new(StatementNature::Consolidated),
//!     FinancialStatement::new(StatementNature::Standalone).with_net_revenue(dec!(60000000)),
//! ]);
//!
//! let index = latest_financial_index(&record);
//! assert_eq!(index, 1);
//! assert_eq!(total_revenue_5cr_flag(&record, index), FlagValue::Green);
//! assert_eq!(borrowing_to_revenue_flag(&record, index), FlagValue::White);
//! assert_eq!(iscr_flag(&record, index), FlagValue::Red);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod flags;
pub mod ratios;
pub mod report;
pub mod selector;
pub mod thresholds;

pub use error::{RatioError, RatioResult};
pub use flags::{
    borrowing_to_revenue_flag, borrowing_to_revenue_flag_with, iscr_flag, iscr_flag_with,
    total_revenue_5cr_flag, total_revenue_5cr_flag_with,
};
pub use ratios::{
    iscr, statement_at, total_borrowing, total_revenue, try_iscr, try_total_borrowing,
    try_total_revenue, RatioInputs,
};
pub use report::{evaluate_record, evaluate_record_with, FlagReport, RiskRule, RuleOutcome};
pub use selector::{find_standalone_index, latest_financial_index, select_statement};
pub use thresholds::{ConfigError, ConfigResult, RuleThresholds, Validate, ValidationError};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{RatioError, RatioResult};
    pub use crate::flags::*;
    pub use crate::ratios::*;
    pub use crate::report::{evaluate_record, evaluate_record_with, FlagReport, RiskRule};
    pub use crate::selector::*;
    pub use crate::thresholds::{RuleThresholds, Validate};
}

//! # riskflag
//!
//! Traffic-light credit risk flags over a company's financial statements.
//!
//! This crate is the surface the risk-assessment workflow calls. It
//! re-exports [`riskflag_core`] and [`riskflag_rules`] and names the
//! evaluation entry points by what they compute:
//!
//! | Function | Returns |
//! |---|---|
//! | [`select_statement_index`] | index of the first STANDALONE statement, else 0 |
//! | [`compute_total_revenue`] | net revenue |
//! | [`compute_borrowing_ratio`] | borrowings over revenue |
//! | [`compute_interest_coverage`] | ISCR |
//! | [`evaluate_interest_coverage_flag`] | ISCR flag |
//! | [`evaluate_revenue_scale_flag`] | revenue scale flag |
//! | [`evaluate_leverage_flag`] | leverage flag |
//!
//! Ratios that cannot be computed come back as zero and their flags as
//! [`FlagValue::White`]; nothing here fails.
//!
//! ```rust
//! use riskflag::{
//!     evaluate_interest_coverage_flag, evaluate_leverage_flag, evaluate_revenue_scale_flag,
//!     select_statement_index, FinancialRecord, FlagValue,
//! };
//!
//! let record = FinancialRecord::from_json_str(r#"{
//!     "financials": [
//!         {"nature": "CONSOLIDATED"},
//!         {"nature": "STANDALONE", "pnl": {"lineItems": {"net_revenue": 60000000}}}
//!     ]
//! }"#).unwrap();
//!
//! let index = select_statement_index(&record);
//! assert_eq!(index, 1);
//! assert_eq!(evaluate_revenue_scale_flag(&record, index), FlagValue::Green);
//! assert_eq!(evaluate_leverage_flag(&record, index), FlagValue::White);
//! assert_eq!(evaluate_interest_coverage_flag(&record, index), FlagValue::Red);
//! ```

#![warn(missing_docs)]

use rust_decimal::Decimal;

pub use riskflag_core;
pub use riskflag_rules;

pub use riskflag_core::{
    CoreError, CoreResult, FinancialRecord, FinancialStatement, FlagValue, StatementNature,
};
pub use riskflag_rules::{
    evaluate_record, evaluate_record_with, ConfigError, FlagReport, RatioError, RiskRule,
    RuleOutcome, RuleThresholds,
};

/// Index of the statement to evaluate: the first STANDALONE one, else 0.
pub fn select_statement_index(record: &FinancialRecord) -> usize {
    riskflag_rules::latest_financial_index(record)
}

/// Net revenue of the statement at `index`, zero if absent.
pub fn compute_total_revenue(record: &FinancialRecord, index: usize) -> Decimal {
    riskflag_rules::total_revenue(record, index)
}

/// Total borrowings over net revenue, zero when revenue is zero.
pub fn compute_borrowing_ratio(record: &FinancialRecord, index: usize) -> Decimal {
    riskflag_rules::total_borrowing(record, index)
}

/// `(pbit + depreciation + 1) / (interest + 1)`.
pub fn compute_interest_coverage(record: &FinancialRecord, index: usize) -> Decimal {
    riskflag_rules::iscr(record, index)
}

/// GREEN at ISCR >= 2, RED below, WHITE at zero.
pub fn evaluate_interest_coverage_flag(record: &FinancialRecord, index: usize) -> FlagValue {
    riskflag_rules::iscr_flag(record, index)
}

/// GREEN at revenue >= 50,000,000, RED below, WHITE at zero.
pub fn evaluate_revenue_scale_flag(record: &FinancialRecord, index: usize) -> FlagValue {
    riskflag_rules::total_revenue_5cr_flag(record, index)
}

/// GREEN at borrowing ratio <= 0.25, AMBER above, WHITE at zero.
pub fn evaluate_leverage_flag(record: &FinancialRecord, index: usize) -> FlagValue {
    riskflag_rules::borrowing_to_revenue_flag(record, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_external_surface_matches_rules() {
        let record = FinancialRecord::from_json_value(json!({
            "financials": [{
                "nature": "STANDALONE",
                "pnl": {
                    "lineItems": {
                        "net_revenue": 10000000,
                        "interest": 1000000,
                        "profit_before_interest_and_tax": 3000000
                    },
                    "depreciation_breakup": {"depreciation_and_amortization": 500000}
                },
                "bs": {"liabilities": {"long_term_borrowings": 2000000, "short_term_borrowings": 500000}}
            }]
        }))
        .unwrap();

        let index = select_statement_index(&record);
        assert_eq!(index, 0);
        assert_eq!(compute_total_revenue(&record, index), dec!(10000000));
        assert_eq!(compute_borrowing_ratio(&record, index), dec!(0.25));
        assert_eq!(
            compute_interest_coverage(&record, index),
            dec!(3500001) / dec!(1000001)
        );
        assert_eq!(evaluate_revenue_scale_flag(&record, index), FlagValue::Red);
        assert_eq!(evaluate_leverage_flag(&record, index), FlagValue::Green);
        assert_eq!(evaluate_interest_coverage_flag(&record, index), FlagValue::Green);
    }

    #[test]
    fn test_empty_record_is_white() {
        let record = FinancialRecord::default();
        let index = select_statement_index(&record);
        assert_eq!(compute_interest_coverage(&record, index), Decimal::ZERO);
        assert_eq!(evaluate_interest_coverage_flag(&record, index), FlagValue::White);
        assert_eq!(evaluate_revenue_scale_flag(&record, index), FlagValue::White);
        assert_eq!(evaluate_leverage_flag(&record, index), FlagValue::White);
    }
}

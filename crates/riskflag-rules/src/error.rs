//! Error types for rule evaluation.
//!
//! [`RatioError`] names why a ratio could not be computed. The public
//! calculators swallow it into a zero sentinel and the evaluators turn it
//! into [`FlagValue::White`](riskflag_core::FlagValue::White); the checked
//! `try_*` calculators hand it to the caller.

use thiserror::Error;

/// A specialized Result type for ratio calculations.
pub type RatioResult<T> = Result<T, RatioError>;

/// Reasons a ratio is not computable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatioError {
    /// The record has no statements.
    #[error("record has no financial statements")]
    NoStatements,

    /// The index does not address a statement.
    #[error("statement index {index} out of range for {len} statements")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of statements in the record.
        len: usize,
    },

    /// Borrowing ratio requested on zero revenue.
    #[error("total revenue is zero")]
    ZeroRevenue,

    /// Interest coverage denominator is zero.
    #[error("interest coverage denominator is zero")]
    ZeroDenominator,

    /// Decimal arithmetic overflowed.
    #[error("arithmetic overflow computing {ratio}")]
    Overflow {
        /// Ratio being computed.
        ratio: &'static str,
    },
}

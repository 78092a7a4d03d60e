//! Ratio calculators.
//!
//! Every ratio is a pure function of one statement. Two flavours are
//! provided for each ratio:
//!
//! - `try_*` returns a [`RatioResult`] naming why the ratio is not
//!   computable (no statements, index out of range, zero revenue, ...)
//! - the plain function returns [`Decimal::ZERO`] in all of those cases
//!
//! The zero sentinel is what the flag evaluators consume; a returned zero
//! may be a genuine zero or a failure and callers must not assume either.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use riskflag_core::{FinancialRecord, FinancialStatement};

use crate::error::{RatioError, RatioResult};

/// Raw amounts read from one statement, absent amounts as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioInputs {
    /// Net revenue.
    pub net_revenue: Decimal,
    /// Interest expense.
    pub interest: Decimal,
    /// Profit before interest and tax.
    pub pbit: Decimal,
    /// Depreciation and amortization.
    pub depreciation: Decimal,
    /// Long-term borrowings.
    pub long_term_borrowings: Decimal,
    /// Short-term borrowings.
    pub short_term_borrowings: Decimal,
}

impl RatioInputs {
    /// Reads the ratio inputs of a statement.
    pub fn from_statement(statement: &FinancialStatement) -> Self {
        Self {
            net_revenue: statement.net_revenue(),
            interest: statement.interest(),
            pbit: statement.pbit(),
            depreciation: statement.depreciation(),
            long_term_borrowings: statement.long_term_borrowings(),
            short_term_borrowings: statement.short_term_borrowings(),
        }
    }

    /// Long-term plus short-term borrowings.
    pub fn total_borrowings(&self) -> RatioResult<Decimal> {
        self.long_term_borrowings
            .checked_add(self.short_term_borrowings)
            .ok_or(RatioError::Overflow {
                ratio: "total_borrowings",
            })
    }

    /// Total borrowings over net revenue.
    pub fn borrowing_ratio(&self) -> RatioResult<Decimal> {
        if self.net_revenue.is_zero() {
            return Err(RatioError::ZeroRevenue);
        }
        self.total_borrowings()?
            .checked_div(self.net_revenue)
            .ok_or(RatioError::Overflow {
                ratio: "total_borrowing",
            })
    }

    /// Interest service coverage ratio:
    /// `(pbit + depreciation + 1) / (interest + 1)`.
    pub fn iscr(&self) -> RatioResult<Decimal> {
        let overflow = RatioError::Overflow { ratio: "iscr" };

        let numerator = self
            .pbit
            .checked_add(self.depreciation)
            .and_then(|sum| sum.checked_add(Decimal::ONE))
            .ok_or_else(|| overflow.clone())?;
        let denominator = self
            .interest
            .checked_add(Decimal::ONE)
            .ok_or_else(|| overflow.clone())?;

        if denominator.is_zero() {
            return Err(RatioError::ZeroDenominator);
        }
        numerator.checked_div(denominator).ok_or(overflow)
    }
}

/// Bounds-checked statement lookup.
pub fn statement_at(record: &FinancialRecord, index: usize) -> RatioResult<&FinancialStatement> {
    if record.is_empty() {
        return Err(RatioError::NoStatements);
    }
    record.statement(index).ok_or(RatioError::IndexOutOfRange {
        index,
        len: record.len(),
    })
}

fn inputs_at(record: &FinancialRecord, index: usize) -> RatioResult<RatioInputs> {
    statement_at(record, index).map(RatioInputs::from_statement)
}

/// Net revenue of the statement at `index`.
pub fn try_total_revenue(record: &FinancialRecord, index: usize) -> RatioResult<Decimal> {
    Ok(inputs_at(record, index)?.net_revenue)
}

/// Total borrowings to net revenue of the statement at `index`.
pub fn try_total_borrowing(record: &FinancialRecord, index: usize) -> RatioResult<Decimal> {
    inputs_at(record, index)?.borrowing_ratio()
}

/// Interest service coverage ratio of the statement at `index`.
pub fn try_iscr(record: &FinancialRecord, index: usize) -> RatioResult<Decimal> {
    inputs_at(record, index)?.iscr()
}

/// Net revenue of the statement at `index`, zero if not computable.
pub fn total_revenue(record: &FinancialRecord, index: usize) -> Decimal {
    try_total_revenue(record, index).unwrap_or(Decimal::ZERO)
}

/// Borrowing-to-revenue ratio of the statement at `index`.
///
/// Zero when revenue is zero, whatever the borrowings.
pub fn total_borrowing(record: &FinancialRecord, index: usize) -> Decimal {
    try_total_borrowing(record, index).unwrap_or(Decimal::ZERO)
}

/// Interest service coverage ratio of the statement at `index`.
///
/// A statement with no amounts at all yields exactly 1, not 0.
pub fn iscr(record: &FinancialRecord, index: usize) -> Decimal {
    try_iscr(record, index).unwrap_or(Decimal::ZERO)
}

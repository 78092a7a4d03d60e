//! Statement selection.
//!
//! Rules are evaluated against one statement of a record. The selector
//! picks the first STANDALONE filing in stored order.

use riskflag_core::{FinancialRecord, FinancialStatement};

/// Returns the position of the first STANDALONE statement, if any.
pub fn find_standalone_index(record: &FinancialRecord) -> Option<usize> {
    record
        .financials
        .iter()
        .position(FinancialStatement::is_standalone)
}

/// Returns the index of the statement rules should be evaluated against.
///
/// Falls back to 0 when no statement is STANDALONE, including when the
/// record has no statements at all. A returned 0 therefore does not
/// guarantee a statement exists; use [`select_statement`] or the checked
/// calculators when that matters.
pub fn latest_financial_index(record: &FinancialRecord) -> usize {
    find_standalone_index(record).unwrap_or_else(|| {
        tracing::trace!(
            statements = record.len(),
            "no standalone statement, falling back to index 0"
        );
        0
    })
}

/// Returns the statement at [`latest_financial_index`], or `None` for an
/// empty record.
pub fn select_statement(record: &FinancialRecord) -> Option<&FinancialStatement> {
    record.statement(latest_financial_index(record))
}

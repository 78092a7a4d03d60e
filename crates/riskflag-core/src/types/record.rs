//! Financial records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::statement::{null_as_default, FinancialStatement};
use crate::error::CoreResult;

/// A company's filing history as supplied by the ingestion layer.
///
/// Statements keep their stored order. Top-level keys other than
/// `financials` are kept verbatim in [`FinancialRecord::metadata`].
/// The rule engine only ever borrows a record immutably.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialRecord {
    /// Filed statements in stored order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub financials: Vec<FinancialStatement>,

    /// Everything else carried on the record.
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl FinancialRecord {
    /// Creates a record from a list of statements.
    #[must_use]
    pub fn new(financials: Vec<FinancialStatement>) -> Self {
        Self {
            financials,
            metadata: Map::new(),
        }
    }

    /// Adds a metadata entry.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Parses a record from a JSON string.
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Converts an already-parsed JSON value into a record.
    pub fn from_json_value(value: Value) -> CoreResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Returns the statement at `index`, if any.
    #[must_use]
    pub fn statement(&self, index: usize) -> Option<&FinancialStatement> {
        self.financials.get(index)
    }

    /// Number of statements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.financials.len()
    }

    /// Returns true if the record has no statements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.financials.is_empty()
    }
}

impl From<Vec<FinancialStatement>> for FinancialRecord {
    fn from(financials: Vec<FinancialStatement>) -> Self {
        Self::new(financials)
    }
}

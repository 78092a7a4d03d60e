//! Financial statement sections.
//!
//! Every amount is optional. An absent amount and a JSON `null` both
//! deserialize to `None`; sections that are absent or `null` deserialize to
//! a section with every amount absent.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Deserializes `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reporting scope of a filed statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatementNature {
    /// Single legal entity.
    Standalone,
    /// Entity together with its subsidiaries.
    Consolidated,
    /// Any other tag the filing carries.
    #[serde(other)]
    Other,
}

impl fmt::Display for StatementNature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatementNature::Standalone => "STANDALONE",
            StatementNature::Consolidated => "CONSOLIDATED",
            StatementNature::Other => "OTHER",
        };
        write!(f, "{name}")
    }
}

/// Profit-and-loss line items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItems {
    /// Net revenue from operations.
    #[serde(default)]
    pub net_revenue: Option<Decimal>,
    /// Interest expense.
    #[serde(default)]
    pub interest: Option<Decimal>,
    /// Profit before interest and tax.
    #[serde(default)]
    pub profit_before_interest_and_tax: Option<Decimal>,
}

/// Depreciation breakdown of the P&L.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepreciationBreakup {
    /// Depreciation and amortization charge.
    #[serde(default)]
    pub depreciation_and_amortization: Option<Decimal>,
}

/// Profit-and-loss section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfitAndLoss {
    /// Line items.
    #[serde(default, rename = "lineItems", deserialize_with = "null_as_default")]
    pub line_items: LineItems,
    /// Depreciation breakdown.
    #[serde(default, deserialize_with = "null_as_default")]
    pub depreciation_breakup: DepreciationBreakup,
}

/// Balance-sheet liabilities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Liabilities {
    /// Long-term borrowings.
    #[serde(default)]
    pub long_term_borrowings: Option<Decimal>,
    /// Short-term borrowings.
    #[serde(default)]
    pub short_term_borrowings: Option<Decimal>,
}

/// Balance-sheet section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheet {
    /// Liabilities side.
    #[serde(default, deserialize_with = "null_as_default")]
    pub liabilities: Liabilities,
}

/// One filed financial statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialStatement {
    /// Reporting scope, if tagged.
    #[serde(default)]
    pub nature: Option<StatementNature>,
    /// Profit-and-loss section.
    #[serde(default, deserialize_with = "null_as_default")]
    pub pnl: ProfitAndLoss,
    /// Balance-sheet section.
    #[serde(default, rename = "bs", deserialize_with = "null_as_default")]
    pub balance_sheet: BalanceSheet,
}

impl FinancialStatement {
    /// Creates an empty statement with the given nature.
    #[must_use]
    pub fn new(nature: StatementNature) -> Self {
        Self {
            nature: Some(nature),
            ..Self::default()
        }
    }

    /// Sets net revenue.
    #[must_use]
    pub fn with_net_revenue(mut self, amount: Decimal) -> Self {
        self.pnl.line_items.net_revenue = Some(amount);
        self
    }

    /// Sets interest expense.
    #[must_use]
    pub fn with_interest(mut self, amount: Decimal) -> Self {
        self.pnl.line_items.interest = Some(amount);
        self
    }

    /// Sets profit before interest and tax.
    #[must_use]
    pub fn with_pbit(mut self, amount: Decimal) -> Self {
        self.pnl.line_items.profit_before_interest_and_tax = Some(amount);
        self
    }

    /// Sets depreciation and amortization.
    #[must_use]
    pub fn with_depreciation(mut self, amount: Decimal) -> Self {
        self.pnl.depreciation_breakup.depreciation_and_amortization = Some(amount);
        self
    }

    /// Sets long-term and short-term borrowings.
    #[must_use]
    pub fn with_borrowings(mut self, long_term: Decimal, short_term: Decimal) -> Self {
        self.balance_sheet.liabilities.long_term_borrowings = Some(long_term);
        self.balance_sheet.liabilities.short_term_borrowings = Some(short_term);
        self
    }

    /// Returns true if this statement is tagged STANDALONE.
    #[must_use]
    pub fn is_standalone(&self) -> bool {
        self.nature == Some(StatementNature::Standalone)
    }

    /// Net revenue, zero when absent.
    #[must_use]
    pub fn net_revenue(&self) -> Decimal {
        self.pnl.line_items.net_revenue.unwrap_or_default()
    }

    /// Interest expense, zero when absent.
    #[must_use]
    pub fn interest(&self) -> Decimal {
        self.pnl.line_items.interest.unwrap_or_default()
    }

    /// Profit before interest and tax, zero when absent.
    #[must_use]
    pub fn pbit(&self) -> Decimal {
        self.pnl
            .line_items
            .profit_before_interest_and_tax
            .unwrap_or_default()
    }

    /// Depreciation and amortization, zero when absent.
    #[must_use]
    pub fn depreciation(&self) -> Decimal {
        self.pnl
            .depreciation_breakup
            .depreciation_and_amortization
            .unwrap_or_default()
    }

    /// Long-term borrowings, zero when absent.
    #[must_use]
    pub fn long_term_borrowings(&self) -> Decimal {
        self.balance_sheet
            .liabilities
            .long_term_borrowings
            .unwrap_or_default()
    }

    /// Short-term borrowings, zero when absent.
    #[must_use]
    pub fn short_term_borrowings(&self) -> Decimal {
        self.balance_sheet
            .liabilities
            .short_term_borrowings
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_full_statement() {
        let json = r#"{
            "nature": "STANDALONE",
            "pnl": {
                "lineItems": {
                    "net_revenue": 10000000,
                    "interest": 1000000,
                    "profit_before_interest_and_tax": 3000000
                },
                "depreciation_breakup": {"depreciation_and_amortization": 500000}
            },
            "bs": {
                "liabilities": {
                    "long_term_borrowings": 2000000,
                    "short_term_borrowings": 500000
                }
            }
        }"#;

        let stmt: FinancialStatement = serde_json::from_str(json).unwrap();
        assert!(stmt.is_standalone());
        assert_eq!(stmt.net_revenue(), dec!(10000000));
        assert_eq!(stmt.interest(), dec!(1000000));
        assert_eq!(stmt.pbit(), dec!(3000000));
        assert_eq!(stmt.depreciation(), dec!(500000));
        assert_eq!(stmt.long_term_borrowings(), dec!(2000000));
        assert_eq!(stmt.short_term_borrowings(), dec!(500000));
    }

    #[test]
    fn test_missing_sections_read_as_zero() {
        let stmt: FinancialStatement = serde_json::from_str("{}").unwrap();
        assert_eq!(stmt.nature, None);
        assert_eq!(stmt.net_revenue(), Decimal::ZERO);
        assert_eq!(stmt.pbit(), Decimal::ZERO);
        assert_eq!(stmt.short_term_borrowings(), Decimal::ZERO);
    }

    #[test]
    fn test_null_sections_and_fields() {
        let json = r#"{"nature": null, "pnl": {"lineItems": null, "depreciation_breakup": {"depreciation_and_amortization": null}}, "bs": null}"#;
        let stmt: FinancialStatement = serde_json::from_str(json).unwrap();
        assert_eq!(stmt.nature, None);
        assert_eq!(stmt.pnl.line_items.net_revenue, None);
        assert_eq!(stmt.depreciation(), Decimal::ZERO);
        assert_eq!(stmt.long_term_borrowings(), Decimal::ZERO);
    }

    #[test]
    fn test_absent_distinguished_from_zero() {
        let absent = FinancialStatement::new(StatementNature::Standalone);
        let zero = absent.clone().with_net_revenue(Decimal::ZERO);

        assert_eq!(absent.pnl.line_items.net_revenue, None);
        assert_eq!(zero.pnl.line_items.net_revenue, Some(Decimal::ZERO));
        assert_eq!(absent.net_revenue(), zero.net_revenue());
    }

    #[test]
    fn test_unknown_nature() {
        let stmt: FinancialStatement = serde_json::from_str(r#"{"nature": "PROVISIONAL"}"#).unwrap();
        assert_eq!(stmt.nature, Some(StatementNature::Other));
        assert!(!stmt.is_standalone());
    }

    #[test]
    fn test_builder() {
        let stmt = FinancialStatement::new(StatementNature::Consolidated)
            .with_interest(dec!(12))
            .with_pbit(dec!(30))
            .with_depreciation(dec!(5))
            .with_borrowings(dec!(7), dec!(3));

        assert!(!stmt.is_standalone());
        assert_eq!(stmt.interest(), dec!(12));
        assert_eq!(stmt.pbit(), dec!(30));
        assert_eq!(stmt.depreciation(), dec!(5));
        assert_eq!(stmt.long_term_borrowings(), dec!(7));
        assert_eq!(stmt.short_term_borrowings(), dec!(3));
    }

    #[test]
    fn test_nature_display() {
        assert_eq!(StatementNature::Standalone.to_string(), "STANDALONE");
        assert_eq!(StatementNature::Consolidated.to_string(), "CONSOLIDATED");
    }
}

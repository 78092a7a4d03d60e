//! Per-record flag reports.
//!
//! [`evaluate_record`] selects the statement once and runs every
//! [`RiskRule`] against it. The report lists each rule's ratio and flag
//! side by side; it does not combine them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use riskflag_core::{FinancialRecord, FlagValue};

use crate::error::RatioResult;
use crate::flags::{borrowing_to_revenue_flag_with, iscr_flag_with, total_revenue_5cr_flag_with};
use crate::ratios::{try_iscr, try_total_borrowing, try_total_revenue};
use crate::selector::{find_standalone_index, latest_financial_index};
use crate::thresholds::RuleThresholds;

/// The risk rules evaluated on every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskRule {
    /// Interest service coverage ratio.
    InterestCoverage,
    /// Minimum revenue scale.
    RevenueScale,
    /// Borrowing-to-revenue ceiling.
    Leverage,
}

impl RiskRule {
    /// All rules in evaluation order.
    pub const ALL: [RiskRule; 3] = [
        RiskRule::InterestCoverage,
        RiskRule::RevenueScale,
        RiskRule::Leverage,
    ];

    /// Stable identifier consumed downstream.
    pub const fn id(self) -> &'static str {
        match self {
            RiskRule::InterestCoverage => "iscr_flag",
            RiskRule::RevenueScale => "total_revenue_5cr_flag",
            RiskRule::Leverage => "borrowing_to_revenue_flag",
        }
    }

    /// Computes the ratio this rule judges.
    pub fn ratio(self, record: &FinancialRecord, index: usize) -> RatioResult<Decimal> {
        match self {
            RiskRule::InterestCoverage => try_iscr(record, index),
            RiskRule::RevenueScale => try_total_revenue(record, index),
            RiskRule::Leverage => try_total_borrowing(record, index),
        }
    }

    /// Evaluates this rule against the statement at `index`.
    pub fn evaluate(
        self,
        record: &FinancialRecord,
        index: usize,
        thresholds: &RuleThresholds,
    ) -> FlagValue {
        match self {
            RiskRule::InterestCoverage => iscr_flag_with(record, index, thresholds),
            RiskRule::RevenueScale => total_revenue_5cr_flag_with(record, index, thresholds),
            RiskRule::Leverage => borrowing_to_revenue_flag_with(record, index, thresholds),
        }
    }
}

impl fmt::Display for RiskRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Outcome of one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    /// The rule.
    pub rule: RiskRule,
    /// Ratio value, `None` if not computable.
    pub value: Option<Decimal>,
    /// Resulting flag.
    pub flag: FlagValue,
}

/// Flags for every rule on one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagReport {
    /// Statement index the rules ran against.
    pub statement_index: usize,
    /// False when the index is the fallback 0 rather than a STANDALONE match.
    pub standalone_found: bool,
    /// One outcome per rule, in [`RiskRule::ALL`] order.
    pub outcomes: Vec<RuleOutcome>,
}

impl FlagReport {
    /// Flag of `rule`, WHITE if the rule is absent from the report.
    pub fn flag(&self, rule: RiskRule) -> FlagValue {
        self.outcome(rule).map_or(FlagValue::White, |o| o.flag)
    }

    /// Outcome of `rule`, if present.
    pub fn outcome(&self, rule: RiskRule) -> Option<&RuleOutcome> {
        self.outcomes.iter().find(|o| o.rule == rule)
    }

    /// Serializes the report to JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Evaluates every rule on `record` with the default thresholds.
pub fn evaluate_record(record: &FinancialRecord) -> FlagReport {
    evaluate_record_with(record, &RuleThresholds::default())
}

/// Evaluates every rule on `record`.
pub fn evaluate_record_with(record: &FinancialRecord, thresholds: &RuleThresholds) -> FlagReport {
    let statement_index = latest_financial_index(record);
    let standalone_found = find_standalone_index(record).is_some();

    let outcomes: Vec<RuleOutcome> = RiskRule::ALL
        .into_iter()
        .map(|rule| RuleOutcome {
            rule,
            value: rule.ratio(record, statement_index).ok(),
            flag: rule.evaluate(record, statement_index, thresholds),
        })
        .collect();

    tracing::debug!(
        statement_index,
        standalone_found,
        white = outcomes.iter().filter(|o| o.flag.is_indeterminate()).count(),
        "evaluated risk rules"
    );

    FlagReport {
        statement_index,
        standalone_found,
        outcomes,
    }
}

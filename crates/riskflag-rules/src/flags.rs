//! Flag evaluators.
//!
//! Each evaluator recomputes its ratio and maps it onto a flag:
//!
//! | Evaluator | WHITE when | GREEN when | else |
//! |---|---|---|---|
//! | [`iscr_flag`] | ratio is 0 or not computable | ratio >= 2 | RED |
//! | [`total_revenue_5cr_flag`] | revenue is 0 or not computable | revenue >= 50,000,000 | RED |
//! | [`borrowing_to_revenue_flag`] | ratio is 0 or not computable | ratio <= 0.25 | AMBER |
//!
//! A computed zero is treated like missing data. Evaluators never fail.

use rust_decimal::Decimal;

use riskflag_core::{FinancialRecord, FlagValue};

use crate::error::RatioResult;
use crate::ratios::{try_iscr, try_total_borrowing, try_total_revenue};
use crate::report::RiskRule;
use crate::thresholds::RuleThresholds;

/// Returns the ratio if it can be judged, logging why not otherwise.
fn judgeable(rule: RiskRule, result: RatioResult<Decimal>) -> Option<Decimal> {
    match result {
        Ok(value) if !value.is_zero() => Some(value),
        Ok(_) => {
            tracing::debug!(rule = rule.id(), "ratio is zero, flagging WHITE");
            None
        }
        Err(reason) => {
            tracing::debug!(rule = rule.id(), %reason, "ratio not computable, flagging WHITE");
            None
        }
    }
}

/// Interest coverage flag with explicit thresholds.
pub fn iscr_flag_with(
    record: &FinancialRecord,
    index: usize,
    thresholds: &RuleThresholds,
) -> FlagValue {
    match judgeable(RiskRule::InterestCoverage, try_iscr(record, index)) {
        None => FlagValue::White,
        Some(value) if value >= thresholds.iscr_green_min => FlagValue::Green,
        Some(_) => FlagValue::Red,
    }
}

/// Revenue scale flag with explicit thresholds.
pub fn total_revenue_5cr_flag_with(
    record: &FinancialRecord,
    index: usize,
    thresholds: &RuleThresholds,
) -> FlagValue {
    match judgeable(RiskRule::RevenueScale, try_total_revenue(record, index)) {
        None => FlagValue::White,
        Some(value) if value >= thresholds.revenue_green_min => FlagValue::Green,
        Some(_) => FlagValue::Red,
    }
}

/// Leverage flag with explicit thresholds.
pub fn borrowing_to_revenue_flag_with(
    record: &FinancialRecord,
    index: usize,
    thresholds: &RuleThresholds,
) -> FlagValue {
    match judgeable(RiskRule::Leverage, try_total_borrowing(record, index)) {
        None => FlagValue::White,
        Some(value) if value <= thresholds.leverage_green_max => FlagValue::Green,
        Some(_) => FlagValue::Amber,
    }
}

/// Interest coverage flag: GREEN at an ISCR of 2 or more, RED below.
///
/// A statement with no amounts has an ISCR of exactly 1 and flags RED.
pub fn iscr_flag(record: &FinancialRecord, index: usize) -> FlagValue {
    iscr_flag_with(record, index, &RuleThresholds::default())
}

/// Revenue scale flag: GREEN at 5 crore (50,000,000) or more, RED below.
pub fn total_revenue_5cr_flag(record: &FinancialRecord, index: usize) -> FlagValue {
    total_revenue_5cr_flag_with(record, index, &RuleThresholds::default())
}

/// Leverage flag: GREEN at a borrowing ratio of 0.25 or less, AMBER above.
pub fn borrowing_to_revenue_flag(record: &FinancialRecord, index: usize) -> FlagValue {
    borrowing_to_revenue_flag_with(record, index, &RuleThresholds::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use riskflag_core::{FinancialStatement, StatementNature};
    use rust_decimal_macros::dec;

    fn single(statement: FinancialStatement) -> FinancialRecord {
        FinancialRecord::new(vec![statement])
    }

    fn standalone() -> FinancialStatement {
        FinancialStatement::new(StatementNature::Standalone)
    }

    #[test]
    fn test_iscr_boundary_is_green() {
        // (1 + 0 + 1) / (0 + 1) = 2
        let record = single(standalone().with_pbit(dec!(1)));
        assert_eq!(iscr_flag(&record, 0), FlagValue::Green);

        let record = single(standalone().with_pbit(dec!(0.99)));
        assert_eq!(iscr_flag(&record, 0), FlagValue::Red);
    }

    #[test]
    fn test_iscr_empty_statement_is_red() {
        let record = single(FinancialStatement::default());
        assert_eq!(iscr_flag(&record, 0), FlagValue::Red);
    }

    #[test]
    fn test_iscr_zero_ratio_is_white() {
        // (-1 + 0 + 1) / (0 + 1) = 0
        let record = single(standalone().with_pbit(dec!(-1)));
        assert_eq!(iscr_flag(&record, 0), FlagValue::White);
    }

    #[test]
    fn test_iscr_not_computable_is_white() {
        assert_eq!(iscr_flag(&FinancialRecord::default(), 0), FlagValue::White);

        let record = single(standalone().with_interest(dec!(-1)));
        assert_eq!(iscr_flag(&record, 0), FlagValue::White);
        assert_eq!(iscr_flag(&record, 3), FlagValue::White);
    }

    #[test]
    fn test_revenue_flag() {
        let at = single(standalone().with_net_revenue(dec!(50000000)));
        assert_eq!(total_revenue_5cr_flag(&at, 0), FlagValue::Green);

        let below = single(standalone().with_net_revenue(dec!(49999999.99)));
        assert_eq!(total_revenue_5cr_flag(&below, 0), FlagValue::Red);

        let zero = single(standalone().with_net_revenue(Decimal::ZERO));
        assert_eq!(total_revenue_5cr_flag(&zero, 0), FlagValue::White);

        let missing = single(standalone());
        assert_eq!(total_revenue_5cr_flag(&missing, 0), FlagValue::White);
    }

    #[test]
    fn test_leverage_flag() {
        let at = single(
            standalone()
                .with_net_revenue(dec!(100))
                .with_borrowings(dec!(20), dec!(5)),
        );
        assert_eq!(borrowing_to_revenue_flag(&at, 0), FlagValue::Green);

        let above = single(
            standalone()
                .with_net_revenue(dec!(100))
                .with_borrowings(dec!(20), dec!(5.01)),
        );
        assert_eq!(borrowing_to_revenue_flag(&above, 0), FlagValue::Amber);

        let no_debt = single(standalone().with_net_revenue(dec!(100)));
        assert_eq!(borrowing_to_revenue_flag(&no_debt, 0), FlagValue::White);

        let no_revenue = single(standalone().with_borrowings(dec!(20), dec!(5)));
        assert_eq!(borrowing_to_revenue_flag(&no_revenue, 0), FlagValue::White);
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = RuleThresholds::default()
            .with_iscr_green_min(dec!(4))
            .with_revenue_green_min(dec!(1000))
            .with_leverage_green_max(dec!(0.5));
        let record = single(
            standalone()
                .with_net_revenue(dec!(1000))
                .with_borrowings(dec!(400), Decimal::ZERO)
                .with_pbit(dec!(2)),
        );

        assert_eq!(iscr_flag(&record, 0), FlagValue::Green);
        assert_eq!(iscr_flag_with(&record, 0, &thresholds), FlagValue::Red);
        assert_eq!(total_revenue_5cr_flag(&record, 0), FlagValue::Red);
        assert_eq!(
            total_revenue_5cr_flag_with(&record, 0, &thresholds),
            FlagValue::Green
        );
        assert_eq!(borrowing_to_revenue_flag(&record, 0), FlagValue::Amber);
        assert_eq!(
            borrowing_to_revenue_flag_with(&record, 0, &thresholds),
            FlagValue::Green
        );
    }
}

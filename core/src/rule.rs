//! Flag rules — threshold predicates over the latest reporting period.
//!
//! RULE: Every flag implements FlagRule. The probe evaluates each
//! registered rule against the same latest index; rules are pure,
//! side-effect-free, and independent of one another. Thresholds are
//! business parameters injected from config, never baked into the rule.

use crate::{
    accessor, config::RuleThresholds, record::FinancialRecord, types::FinancialIndex,
};

/// The contract every flag rule must fulfill.
pub trait FlagRule: Send {
    /// Stable name the flag is reported under.
    fn name(&self) -> &'static str;

    /// Evaluate the flag against the entry at `index`.
    fn evaluate(&self, record: &FinancialRecord, index: FinancialIndex) -> bool;
}

/// Fires when latest-period revenue meets the "5 crore" floor.
pub struct TotalRevenue5crRule {
    pub revenue_floor: f64,
}

impl FlagRule for TotalRevenue5crRule {
    fn name(&self) -> &'static str {
        "TOTAL_REVENUE_5CR_FLAG"
    }

    fn evaluate(&self, record: &FinancialRecord, index: FinancialIndex) -> bool {
        accessor::total_revenue(record, index) >= self.revenue_floor
    }
}

/// Fires when borrowing is heavy relative to revenue.
pub struct BorrowingToRevenueRule {
    pub limit: f64,
}

impl FlagRule for BorrowingToRevenueRule {
    fn name(&self) -> &'static str {
        "BORROWING_TO_REVENUE_FLAG"
    }

    fn evaluate(&self, record: &FinancialRecord, index: FinancialIndex) -> bool {
        let revenue = accessor::total_revenue(record, index);
        let borrowing = accessor::total_borrowing(record, index);

        // No revenue to service any debt: the ratio is degenerate, so the
        // flag reduces to "does debt exist at all".
        if revenue <= 0.0 {
            return borrowing > 0.0;
        }

        borrowing / revenue >= self.limit
    }
}

/// Fires when interest coverage sits below the comfort floor.
pub struct IscrRule {
    pub iscr_floor: f64,
}

impl FlagRule for IscrRule {
    fn name(&self) -> &'static str {
        "ISCR_FLAG"
    }

    fn evaluate(&self, record: &FinancialRecord, index: FinancialIndex) -> bool {
        accessor::iscr(record, index) < self.iscr_floor
    }
}

/// The standard rule set, thresholds taken from config.
pub fn standard_rules(thresholds: &RuleThresholds) -> Vec<Box<dyn FlagRule>> {
    vec![
        Box::new(TotalRevenue5crRule {
            revenue_floor: thresholds.revenue_floor,
        }),
        Box::new(BorrowingToRevenueRule {
            limit: thresholds.borrowing_to_revenue_limit,
        }),
        Box::new(IscrRule {
            iscr_floor: thresholds.iscr_floor,
        }),
    ]
}

//! Financial accessor — default-tolerant reads over a financial record.
//!
//! This module:
//!   1. Selects the latest reporting period
//!   2. Extracts named numeric line items, defaulting absent values to zero
//!   3. Computes the smoothed interest service coverage ratio (ISCR)
//!
//! Every read here is total: a missing entry, a missing nested structure,
//! or a line item that failed numeric conversion all surface as 0.0.
//! Record-level structure problems are the probe's concern, not ours.

use crate::{
    error::{ProbeError, ProbeResult},
    record::{FinancialEntry, FinancialRecord},
    types::FinancialIndex,
};

fn entry(record: &FinancialRecord, index: FinancialIndex) -> Option<&FinancialEntry> {
    record.financials.get(index)
}

/// Net revenue of the entry at `index`, or 0.0 when the entry or the
/// line item is absent.
pub fn total_revenue(record: &FinancialRecord, index: FinancialIndex) -> f64 {
    entry(record, index)
        .and_then(|e| e.pnl.line_items.net_revenue)
        .unwrap_or(0.0)
}

/// Total borrowing of the entry at `index`, or 0.0 when absent.
pub fn total_borrowing(record: &FinancialRecord, index: FinancialIndex) -> f64 {
    entry(record, index)
        .and_then(|e| e.balance_sheet.line_items.total_borrowing)
        .unwrap_or(0.0)
}

/// Interest service coverage ratio of the entry at `index`.
///
/// ISCR = (profitBeforeInterestAndTax + depreciation + 1) / (interestExpenses + 1)
///
/// The +1 on both sides is the smoothing policy, not a generic guard: a
/// zero interest expense must not divide by zero, and a zero numerator
/// must not collapse the ratio. Missing operands default to 0 before the
/// formula applies; a missing entry yields 0.0 for the whole function.
pub fn iscr(record: &FinancialRecord, index: FinancialIndex) -> f64 {
    let Some(items) = entry(record, index).map(|e| &e.pnl.line_items) else {
        return 0.0;
    };
    let pbit = items.profit_before_interest_and_tax.unwrap_or(0.0);
    let depreciation = items.depreciation.unwrap_or(0.0);
    let interest = items.interest_expenses.unwrap_or(0.0);
    (pbit + depreciation + 1.0) / (interest + 1.0)
}

/// Index of the most recent reporting period.
///
/// Periods order by `endDate`; entries without one order before dated
/// entries. Ties, and the fully undated case, resolve to the later array
/// position, since entries are appended in chronological order.
pub fn latest_financial_index(record: &FinancialRecord) -> ProbeResult<FinancialIndex> {
    if record.financials.is_empty() {
        return Err(ProbeError::NoFinancials);
    }

    // max_by_key keeps the last of equal maxima, which is exactly the
    // positional tie-break we want.
    let latest = record
        .financials
        .iter()
        .enumerate()
        .max_by_key(|(_, e)| e.end_date)
        .map(|(i, _)| i)
        .unwrap_or(0);

    Ok(latest)
}

//! Accessor tests — default-tolerant line-item reads and latest-period selection.

use finprobe_core::accessor::{iscr, latest_financial_index, total_borrowing, total_revenue};
use finprobe_core::error::ProbeError;
use finprobe_core::record::FinancialRecord;

fn record(value: serde_json::Value) -> FinancialRecord {
    serde_json::from_value(value).expect("record should always parse")
}

/// Every line-item accessor returns 0.0 when the field is absent.
#[test]
fn missing_line_items_default_to_zero() {
    let r = record(serde_json::json!({
        "financials": [{ "pnl": { "lineItems": {} } }]
    }));

    assert_eq!(total_revenue(&r, 0), 0.0);
    assert_eq!(total_borrowing(&r, 0), 0.0);
}

/// A missing nested structure is no different from a missing field.
#[test]
fn missing_nested_structures_default_to_zero() {
    let r = record(serde_json::json!({
        "financials": [{}]
    }));

    assert_eq!(total_revenue(&r, 0), 0.0);
    assert_eq!(total_borrowing(&r, 0), 0.0);
}

/// An index past the end of the sequence reads as an absent entry.
#[test]
fn out_of_range_index_defaults_to_zero() {
    let r = record(serde_json::json!({
        "financials": [{ "pnl": { "lineItems": { "netRevenue": 123.0 } } }]
    }));

    assert_eq!(total_revenue(&r, 5), 0.0);
    assert_eq!(iscr(&r, 5), 0.0);
}

/// A non-numeric line item decays to absent, never a fault.
#[test]
fn non_numeric_revenue_defaults_to_zero() {
    let r = record(serde_json::json!({
        "financials": [{ "pnl": { "lineItems": { "netRevenue": "not-a-number" } } }]
    }));

    assert_eq!(total_revenue(&r, 0), 0.0);
}

/// Numeric strings still count: statement exports often quote numbers.
#[test]
fn numeric_string_revenue_is_parsed() {
    let r = record(serde_json::json!({
        "financials": [{ "pnl": { "lineItems": { "netRevenue": "1200.5" } } }]
    }));

    assert_eq!(total_revenue(&r, 0), 1200.5);
}

/// ISCR with all operands zero is exactly (0+0+1)/(0+1) = 1.0.
#[test]
fn iscr_all_zero_operands_is_one() {
    let r = record(serde_json::json!({
        "financials": [{ "pnl": { "lineItems": {
            "profitBeforeInterestAndTax": 0,
            "depreciation": 0,
            "interestExpenses": 0
        } } }]
    }));

    assert_eq!(iscr(&r, 0), 1.0);
}

/// ISCR smoothing: (9+0+1)/(9+1) is exactly 1.0.
#[test]
fn iscr_smoothing_cancels_exactly() {
    let r = record(serde_json::json!({
        "financials": [{ "pnl": { "lineItems": {
            "profitBeforeInterestAndTax": 9,
            "depreciation": 0,
            "interestExpenses": 9
        } } }]
    }));

    assert_eq!(iscr(&r, 0), 1.0);
}

/// Missing ISCR operands default to zero before the formula applies.
#[test]
fn iscr_with_missing_operands_uses_defaults() {
    let r = record(serde_json::json!({
        "financials": [{ "pnl": { "lineItems": { "depreciation": 4 } } }]
    }));

    // (0 + 4 + 1) / (0 + 1)
    assert_eq!(iscr(&r, 0), 5.0);
}

/// The entry with the greatest endDate is latest, wherever it sits.
#[test]
fn latest_is_greatest_end_date() {
    let r = record(serde_json::json!({
        "financials": [
            { "endDate": "2023-03-31" },
            { "endDate": "2024-03-31" },
            { "endDate": "2022-03-31" }
        ]
    }));

    assert_eq!(latest_financial_index(&r).unwrap(), 1);
}

/// Undated entries order before dated ones.
#[test]
fn undated_entries_lose_to_dated() {
    let r = record(serde_json::json!({
        "financials": [
            { "endDate": "2021-03-31" },
            {}
        ]
    }));

    assert_eq!(latest_financial_index(&r).unwrap(), 0);
}

/// Equal endDates resolve to the later array position.
#[test]
fn date_ties_resolve_to_later_position() {
    let r = record(serde_json::json!({
        "financials": [
            { "endDate": "2024-03-31" },
            { "endDate": "2024-03-31" }
        ]
    }));

    assert_eq!(latest_financial_index(&r).unwrap(), 1);
}

/// With no dates at all, array order is the chronology: last entry wins.
#[test]
fn fully_undated_record_falls_back_to_last() {
    let r = record(serde_json::json!({
        "financials": [{}, {}, {}]
    }));

    assert_eq!(latest_financial_index(&r).unwrap(), 2);
}

/// A malformed date decays to absent rather than failing the parse.
#[test]
fn malformed_date_decays_to_absent() {
    let r = record(serde_json::json!({
        "financials": [
            { "endDate": "31/03/2024" },
            { "endDate": "2023-03-31" }
        ]
    }));

    assert_eq!(latest_financial_index(&r).unwrap(), 1);
}

/// An empty sequence is the one structural error.
#[test]
fn empty_financials_is_an_error() {
    let r = record(serde_json::json!({ "financials": [] }));

    let err = latest_financial_index(&r).unwrap_err();
    assert!(
        matches!(err, ProbeError::NoFinancials),
        "Expected NoFinancials, got {err}"
    );
}

//! Typed financial statement model.
//!
//! RULE: Parsing never fails on a malformed line item. A value that is
//! absent, null, or not numeric-convertible decays to `None` here, and
//! the accessor layer folds `None` to 0.0. Keeping the option in the
//! model means "missing" and "zero" stay distinguishable internally.

use crate::error::ProbeResult;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRecord {
    /// Reporting periods, appended in chronological order by convention.
    #[serde(default)]
    pub financials: Vec<FinancialEntry>,
}

impl FinancialRecord {
    /// Parse a record from raw JSON text.
    pub fn from_json_str(raw: &str) -> ProbeResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// One reporting period of the statement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialEntry {
    #[serde(default, deserialize_with = "lenient_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub pnl: ProfitAndLoss,
    #[serde(default)]
    pub balance_sheet: BalanceSheet,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitAndLoss {
    #[serde(default)]
    pub line_items: PnlLineItems,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PnlLineItems {
    #[serde(default, deserialize_with = "lenient_amount")]
    pub net_revenue: Option<f64>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub profit_before_interest_and_tax: Option<f64>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub depreciation: Option<f64>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub interest_expenses: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheet {
    #[serde(default)]
    pub line_items: BalanceSheetLineItems,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheetLineItems {
    #[serde(default, deserialize_with = "lenient_amount")]
    pub total_borrowing: Option<f64>,
}

/// Accept a JSON number or a numeric string; anything else is absent.
fn lenient_amount<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(de)?;
    Ok(match raw {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

/// Accept an ISO `YYYY-MM-DD` date string; anything else is absent.
fn lenient_date<'de, D>(de: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(de)?;
    Ok(match raw {
        serde_json::Value::String(s) => s.trim().parse::<NaiveDate>().ok(),
        _ => None,
    })
}

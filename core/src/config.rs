//! Threshold configuration for the standard flag rules.

use serde::{Deserialize, Serialize};

/// Business thresholds behind the standard rules.
///
/// These are parameters, not structure: a deployment may override any of
/// them from a JSON file, and missing keys keep their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleThresholds {
    /// Revenue floor for TOTAL_REVENUE_5CR_FLAG. 5 crore in the record's
    /// currency unit.
    pub revenue_floor: f64,
    /// Borrowing-to-revenue ratio at or above which the borrowing flag fires.
    pub borrowing_to_revenue_limit: f64,
    /// ISCR below this marks interest coverage as at-risk.
    pub iscr_floor: f64,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            revenue_floor: 50_000_000.0,
            borrowing_to_revenue_limit: 0.25,
            iscr_floor: 2.0,
        }
    }
}

impl RuleThresholds {
    /// Load thresholds from a JSON file.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        Ok(serde_json::from_str(&content)?)
    }
}

//! Evaluation orchestrator — one probe call per record.
//!
//! This module:
//!   1. Selects the latest reporting period exactly once
//!   2. Evaluates every registered rule against that period
//!   3. Assembles the named flags into a report
//!
//! The probe holds no mutable state and performs no I/O, so one probe
//! may serve any number of concurrent evaluations.

use crate::{
    accessor::latest_financial_index,
    config::RuleThresholds,
    error::ProbeResult,
    record::FinancialRecord,
    rule::{standard_rules, FlagRule},
    types::FlagName,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The result of one probe: named boolean flags under `flags`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagReport {
    pub flags: BTreeMap<FlagName, bool>,
}

pub struct FlagProbe {
    rules: Vec<Box<dyn FlagRule>>,
}

impl FlagProbe {
    /// Probe with the standard rule set and the given thresholds.
    pub fn new(thresholds: &RuleThresholds) -> Self {
        Self {
            rules: standard_rules(thresholds),
        }
    }

    /// Probe with a caller-composed rule set.
    pub fn with_rules(rules: Vec<Box<dyn FlagRule>>) -> Self {
        Self { rules }
    }

    /// Evaluate every rule against the record's latest reporting period.
    ///
    /// The latest index is selected once and reused for all rules, so the
    /// flags can never disagree on which period they describe. The only
    /// error is a record with nothing to evaluate.
    pub fn probe(&self, record: &FinancialRecord) -> ProbeResult<FlagReport> {
        let latest = latest_financial_index(record)?;
        log::debug!(
            "probing latest entry {latest} of {}",
            record.financials.len()
        );

        let mut flags = BTreeMap::new();
        for rule in &self.rules {
            let value = rule.evaluate(record, latest);
            log::debug!("rule {} -> {value}", rule.name());
            flags.insert(rule.name().to_string(), value);
        }

        Ok(FlagReport { flags })
    }
}

/// Evaluate a record with the standard rules and default thresholds.
pub fn probe(record: &FinancialRecord) -> ProbeResult<FlagReport> {
    FlagProbe::new(&RuleThresholds::default()).probe(record)
}

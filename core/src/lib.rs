//! finprobe-core — financial statement flag evaluation.
//!
//! Given one company's historical financial entries, pick the most recent
//! reporting period and derive named boolean risk/eligibility flags from
//! arithmetic over its line items.

pub mod accessor;
pub mod config;
pub mod error;
pub mod probe;
pub mod record;
pub mod rule;
pub mod types;

//! Rule-based advisor agents and the response integrator.
//!
//! Each advisor is a pure function over the reference snapshot and profile
//! fields. Rule evaluation order is load-bearing: the integrator truncates
//! insights and recommendations by position, not by relevance.

mod engine;
mod land;
mod market;
mod sustainability;
mod weather;

pub use engine::AdvisoryEngine;
pub use land::land_advisor;
pub use market::market_researcher;
pub use sustainability::sustainability_monitor;
pub use weather::weather_analyst;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::observation::MarketObservation;
use crate::metrics::TrendSummary;

/// Crop handed to the sustainability monitor when a profile reaches the
/// integrator with an empty history.
pub const FALLBACK_CROP: &str = "Corn";

/// How many market recommendations the integrator keeps.
pub(crate) const MARKET_RECOMMENDATION_KEEP: usize = 2;
/// How many entries the integrator keeps from each placeholder agent.
pub(crate) const PLACEHOLDER_KEEP: usize = 1;

/// Output of a single advisor, or of the integrator.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AgentResponse {
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<AgentData>,
}

/// Visualization-ready metric bundles keyed by crop name.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sustainability_scores: Option<BTreeMap<String, f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_trends: Option<BTreeMap<String, TrendSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather_impacts: Option<BTreeMap<String, f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop_market_data: Option<BTreeMap<String, Vec<MarketObservation>>>,
}

/// Case-insensitive substring check for the free-text goal heuristics.
///
/// Keyword matching on free text is fragile; it is kept as-is for behavioral
/// parity and isolated here so a better classifier can replace it without
/// touching advisor rule logic.
pub(crate) fn goal_mentions(text: &str, needles: &[&str]) -> bool {
    let lowered = text.to_lowercase();
    needles.iter().any(|needle| lowered.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::goal_mentions;

    #[test]
    fn goal_matching_is_case_insensitive_substring() {
        assert!(goal_mentions("Reduce WATER usage by 20%", &["water"]));
        assert!(goal_mentions("improve profitability", &["profit", "income"]));
        assert!(goal_mentions("stabilize income", &["profit", "income"]));
        assert!(!goal_mentions("maximize yield", &["profit", "income"]));
    }
}

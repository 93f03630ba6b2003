//! Sustainability monitor advisor.

use super::AgentResponse;

/// Static sustainability monitoring.
///
/// `crop_type` and `farming_practices` are accepted for a future
/// practice-aware assessment but are not yet consulted. Known limitation.
pub fn sustainability_monitor(_crop_type: &str, _farming_practices: &[String]) -> AgentResponse {
    AgentResponse {
        insights: vec![
            "Your current practices show good potential for carbon sequestration".to_owned(),
            "Water efficiency could be improved with targeted irrigation".to_owned(),
            "Biodiversity metrics indicate opportunity for beneficial insect habitat".to_owned(),
        ],
        recommendations: vec![
            "Implement cover crops to improve soil health and reduce erosion".to_owned(),
            "Consider reduced tillage practices to preserve soil structure".to_owned(),
            "Optimize fertilizer application timing to reduce runoff".to_owned(),
        ],
        data: None,
    }
}

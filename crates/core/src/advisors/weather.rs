//! Weather analyst advisor.

use super::AgentResponse;

/// Static weather analysis.
///
/// `location` is accepted for the eventual region-aware model but is not yet
/// consulted; the content below is fixed placeholder advice. Known limitation,
/// not a bug to patch around.
pub fn weather_analyst(_location: &str) -> AgentResponse {
    AgentResponse {
        insights: vec![
            "Your region has shown increasing rainfall variability over the past 5 years"
                .to_owned(),
            "Temperature patterns suggest an earlier planting season may be beneficial".to_owned(),
        ],
        recommendations: vec![
            "Install soil moisture sensors to optimize irrigation timing".to_owned(),
            "Consider weather forecasts when planning fertilizer application".to_owned(),
        ],
        data: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_is_fixed_regardless_of_location() {
        let first = weather_analyst("California");
        let second = weather_analyst("Atlantis");

        assert_eq!(first, second);
        assert_eq!(first.insights.len(), 2);
        assert_eq!(first.recommendations.len(), 2);
        assert!(first.data.is_none());
    }
}

//! Integrator: runs all four advisors for a profile and merges their output
//! into one bounded response.

use super::{
    goal_mentions, land_advisor, market_researcher, sustainability_monitor, weather_analyst,
    AgentData, AgentResponse, FALLBACK_CROP, MARKET_RECOMMENDATION_KEEP, PLACEHOLDER_KEEP,
};
use crate::dataset::ReferenceData;
use crate::domain::profile::FarmerProfile;

/// Sole public entry point of the advisory engine.
///
/// Every advisor is total, so integration never fails: ill-formed profile
/// fields degrade to default-branch or "no data" text.
#[derive(Clone, Debug)]
pub struct AdvisoryEngine {
    data: ReferenceData,
}

impl AdvisoryEngine {
    /// Engine over the fixed seeded snapshot.
    pub fn new() -> Self {
        Self { data: ReferenceData::seeded() }
    }

    /// Engine over a caller-supplied snapshot. Tests use this for isolation.
    pub fn with_data(data: ReferenceData) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &ReferenceData {
        &self.data
    }

    /// Run all four advisors and merge their output.
    ///
    /// Insights keep everything from the land and market advisors plus the
    /// first entry from each placeholder agent; recommendations additionally
    /// cap the market contribution at two. Order is preserved and nothing is
    /// de-duplicated.
    pub fn recommendations(&self, profile: &FarmerProfile) -> AgentResponse {
        let land = land_advisor(
            &self.data,
            &profile.location,
            profile.land_size,
            &profile.crop_history,
            &profile.financial_goal,
            &profile.sustainability_goal,
        );
        let market = market_researcher(
            &self.data,
            &profile.crop_history,
            &profile.location,
            goal_mentions(&profile.sustainability_goal, &["sustain"]),
        );
        let weather = weather_analyst(&profile.location);
        let primary_crop =
            profile.crop_history.first().map(String::as_str).unwrap_or(FALLBACK_CROP);
        let sustainability = sustainability_monitor(primary_crop, &[]);

        let AgentResponse {
            insights: mut combined_insights,
            recommendations: mut combined_recommendations,
            data: land_data,
        } = land;
        let AgentResponse {
            insights: market_insights,
            recommendations: market_recommendations,
            data: market_data,
        } = market;

        combined_insights.extend(market_insights);
        combined_insights.extend(weather.insights.into_iter().take(PLACEHOLDER_KEEP));
        combined_insights.extend(sustainability.insights.into_iter().take(PLACEHOLDER_KEEP));

        combined_recommendations
            .extend(market_recommendations.into_iter().take(MARKET_RECOMMENDATION_KEEP));
        combined_recommendations
            .extend(weather.recommendations.into_iter().take(PLACEHOLDER_KEEP));
        combined_recommendations
            .extend(sustainability.recommendations.into_iter().take(PLACEHOLDER_KEEP));

        let land_data = land_data.unwrap_or_default();
        let market_data = market_data.unwrap_or_default();

        AgentResponse {
            insights: combined_insights,
            recommendations: combined_recommendations,
            data: Some(AgentData {
                sustainability_scores: land_data.sustainability_scores,
                market_trends: market_data.market_trends,
                weather_impacts: land_data.weather_impacts,
                crop_market_data: None,
            }),
        }
    }
}

impl Default for AdvisoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

//! Land and crop suitability advisor.

use std::collections::BTreeMap;

use super::{goal_mentions, AgentData, AgentResponse};
use crate::dataset::ReferenceData;
use crate::metrics::{self, TrendDirection};

/// Farms below this size get the specialty-crop recommendations.
const SMALL_FARM_ACRES: f64 = 10.0;

/// Evaluate land, goal, and location rules for one profile.
///
/// Bundles the per-crop sustainability scores and weather impacts for the
/// visualization layer.
pub fn land_advisor(
    data: &ReferenceData,
    location: &str,
    land_size: f64,
    crop_history: &[String],
    financial_goal: &str,
    sustainability_goal: &str,
) -> AgentResponse {
    let mut insights = Vec::new();
    let mut recommendations = Vec::new();

    if goal_mentions(sustainability_goal, &["water"]) {
        insights.push(
            "Your goal to reduce water usage aligns with sustainable farming practices."
                .to_owned(),
        );
        insights.push(
            "Based on your location and land size, drought-resistant crops would be beneficial."
                .to_owned(),
        );

        // Rice stands out as the high-water-usage crop in the snapshot.
        if crop_history.iter().any(|crop| crop == "Rice") {
            insights.push(
                "You've grown rice before, which typically requires high water usage.".to_owned(),
            );
            recommendations.push(
                "Consider replacing rice with more water-efficient crops like wheat or specialized corn varieties."
                    .to_owned(),
            );
        }

        recommendations.push("Implement drip irrigation to optimize water usage.".to_owned());
        recommendations.push(
            "Consider drought-resistant crop varieties to maintain yield while using less water."
                .to_owned(),
        );
    }

    if goal_mentions(financial_goal, &["profit", "income"]) {
        insights.push(
            "Your goal to increase profitability can be achieved through strategic crop selection and resource management."
                .to_owned(),
        );

        let trends = metrics::market_trends(data);
        let rising: Vec<&str> = trends
            .iter()
            .filter(|entry| entry.trend == TrendDirection::Rising)
            .map(|entry| entry.crop.as_str())
            .collect();

        if let Some(first) = rising.first() {
            insights.push(format!("Market trends show rising demand for: {}", rising.join(", ")));
            recommendations.push(format!(
                "Consider allocating some of your {land_size} acres to {first} to capitalize on market trends."
            ));
        }
    }

    if location.eq_ignore_ascii_case("california") {
        insights.push(
            "California's climate is suitable for a variety of high-value crops but faces water scarcity challenges."
                .to_owned(),
        );
        recommendations.push(
            "Consider drought-tolerant crops like almonds, pistachios, or specialized wheat varieties."
                .to_owned(),
        );
    } else if location.eq_ignore_ascii_case("iowa") || location.eq_ignore_ascii_case("nebraska") {
        insights.push(
            "Your location is ideal for corn and soybean production with good rainfall patterns."
                .to_owned(),
        );
        recommendations.push(
            "Rotating between corn and soybeans can help maintain soil health and reduce pest pressure."
                .to_owned(),
        );
    }

    if land_size < SMALL_FARM_ACRES {
        recommendations.push(
            "Your small farm size could benefit from high-value specialty crops rather than commodity crops."
                .to_owned(),
        );
        recommendations.push(
            "Consider implementing crop diversity to minimize risk and enhance soil health."
                .to_owned(),
        );
    } else {
        recommendations.push(
            "Your larger farm allows for effective crop rotation strategies across fields."
                .to_owned(),
        );
        recommendations.push(
            "Consider dividing your land to try new profitable crops while maintaining your staple production."
                .to_owned(),
        );
    }

    let sustainability_scores: BTreeMap<String, f64> =
        metrics::sustainability_scores_by_crop(data)
            .into_iter()
            .map(|entry| (entry.crop, entry.score))
            .collect();
    let weather_impacts: BTreeMap<String, f64> = metrics::weather_impacts(data)
        .into_iter()
        .map(|entry| (entry.crop, entry.impact))
        .collect();

    AgentResponse {
        insights,
        recommendations,
        data: Some(AgentData {
            sustainability_scores: Some(sustainability_scores),
            weather_impacts: Some(weather_impacts),
            ..AgentData::default()
        }),
    }
}

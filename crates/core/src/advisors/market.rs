//! Market researcher advisor.

use std::collections::BTreeMap;

use super::{AgentData, AgentResponse};
use crate::dataset::ReferenceData;
use crate::domain::observation::MarketObservation;
use crate::metrics::{self, TrendSummary};

/// Demand (or supply) must exceed the other side by this factor before the
/// gap is worth calling out.
const SUPPLY_DEMAND_GAP_FACTOR: f64 = 1.2;
/// Consumer trend index above which preference reads as strong.
const STRONG_PREFERENCE_INDEX: f64 = 120.0;
/// Consumer trend index below which preference reads as declining.
const DECLINING_PREFERENCE_INDEX: f64 = 80.0;

/// Analyze market conditions for each crop in the profile's history.
///
/// Crops absent from the market dataset degrade to a single "no market data"
/// insight rather than an error.
pub fn market_researcher(
    data: &ReferenceData,
    crop_types: &[String],
    location: &str,
    sustainability_focus: bool,
) -> AgentResponse {
    let trends = metrics::market_trends(data);

    let mut insights = Vec::new();
    let mut recommendations = Vec::new();
    let mut crop_market_data: BTreeMap<String, Vec<MarketObservation>> = BTreeMap::new();

    for crop in crop_types {
        let rows = data.markets_for_crop(crop);
        crop_market_data
            .insert(crop.clone(), rows.iter().map(|observation| (*observation).clone()).collect());

        if rows.is_empty() {
            insights.push(format!("No market data available for {crop}"));
            continue;
        }

        let count = rows.len() as f64;
        let avg_price = rows.iter().map(|m| m.market_price).sum::<f64>() / count;
        let avg_demand = rows.iter().map(|m| m.demand_index).sum::<f64>() / count;
        let avg_supply = rows.iter().map(|m| m.supply_index).sum::<f64>() / count;

        insights.push(format!(
            "{crop} market analysis: Average price ${avg_price:.2}, demand index {avg_demand:.1}, supply index {avg_supply:.1}"
        ));

        if avg_demand > avg_supply * SUPPLY_DEMAND_GAP_FACTOR {
            insights.push(format!(
                "{crop} shows strong market potential with demand exceeding supply by {:.1}%",
                (avg_demand / avg_supply - 1.0) * 100.0
            ));
            recommendations.push(format!(
                "Consider increasing {crop} production to capitalize on the favorable supply-demand gap"
            ));
        } else if avg_supply > avg_demand * SUPPLY_DEMAND_GAP_FACTOR {
            insights.push(format!(
                "{crop} market may be saturated with supply exceeding demand by {:.1}%",
                (avg_supply / avg_demand - 1.0) * 100.0
            ));
            recommendations.push(format!(
                "Consider reducing {crop} production or finding specialty markets with better pricing"
            ));
        }

        insights.push(format!(
            "{crop} price trend is currently: {}",
            metrics::trend_for(&trends, crop)
        ));

        let consumer_trend = rows.iter().map(|m| m.consumer_trend_index).sum::<f64>() / count;
        if consumer_trend > STRONG_PREFERENCE_INDEX {
            insights.push(format!(
                "{crop} has strong and growing consumer preference (index: {consumer_trend:.1})"
            ));
        } else if consumer_trend < DECLINING_PREFERENCE_INDEX {
            insights.push(format!(
                "{crop} has declining consumer preference (index: {consumer_trend:.1})"
            ));
        }
    }

    if location.eq_ignore_ascii_case("california") {
        recommendations
            .push("California markets favor high-value crops with strong export potential".to_owned());
        recommendations.push(
            "Local markets in California increasingly value sustainably grown produce".to_owned(),
        );
    } else if location.eq_ignore_ascii_case("iowa") || location.eq_ignore_ascii_case("nebraska") {
        recommendations.push(
            "Midwest markets have strong established channels for corn, soy, and wheat".to_owned(),
        );
        recommendations.push(
            "Consider contracts with ethanol producers or specialty food manufacturers for premium pricing"
                .to_owned(),
        );
    }

    if sustainability_focus {
        recommendations
            .push("Look into organic certification to access premium market segments".to_owned());
        recommendations.push(
            "Consider participating in sustainability certification programs that offer price premiums"
                .to_owned(),
        );
        insights.push(
            "Markets increasingly reward sustainable farming practices with price premiums of 5-25%"
                .to_owned(),
        );
    }

    let market_trends: BTreeMap<String, TrendSummary> = trends
        .into_iter()
        .map(|entry| {
            (
                entry.crop,
                TrendSummary { trend: entry.trend, price: entry.price, demand: entry.demand },
            )
        })
        .collect();

    AgentResponse {
        insights,
        recommendations,
        data: Some(AgentData {
            market_trends: Some(market_trends),
            crop_market_data: Some(crop_market_data),
            ..AgentData::default()
        }),
    }
}

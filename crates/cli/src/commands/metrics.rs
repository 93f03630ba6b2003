use fieldwise_core::{
    market_trends, sustainability_scores_by_crop, weather_impacts, CropImpact, CropScore,
    CropTrend, ReferenceData,
};
use serde::Serialize;

use super::{serialize_payload, CommandResult};

#[derive(Debug, Serialize)]
struct MetricsPayload {
    command: &'static str,
    status: &'static str,
    market_trends: Vec<CropTrend>,
    sustainability_scores: Vec<CropScore>,
    weather_impacts: Vec<CropImpact>,
}

pub fn run(json_output: bool) -> CommandResult {
    let data = ReferenceData::seeded();
    let trends = market_trends(&data);
    let scores = sustainability_scores_by_crop(&data);
    let impacts = weather_impacts(&data);

    if json_output {
        let payload = MetricsPayload {
            command: "metrics",
            status: "ok",
            market_trends: trends,
            sustainability_scores: scores,
            weather_impacts: impacts,
        };
        return CommandResult::ok(serialize_payload(&payload));
    }

    let mut lines = vec!["market trends:".to_string()];
    for entry in &trends {
        lines.push(format!(
            "- {}: {} (avg price {}, avg demand {})",
            entry.crop, entry.trend, entry.price, entry.demand
        ));
    }

    lines.push("sustainability scores:".to_string());
    for entry in &scores {
        lines.push(format!("- {}: {}", entry.crop, entry.score));
    }

    lines.push("weather impacts:".to_string());
    for entry in &impacts {
        lines.push(format!("- {}: {}", entry.crop, entry.impact));
    }

    CommandResult::ok(lines.join("\n"))
}

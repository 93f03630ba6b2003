use clap::Args;
use fieldwise_core::{
    AdvisoryEngine, AgentResponse, FarmerProfile, ProfileDraft, ProfileRepository,
};
use serde::Serialize;

use super::{serialize_payload, CommandResult};

#[derive(Debug, Args)]
pub struct RecommendArgs {
    #[arg(long, help = "Farmer name")]
    pub name: String,
    #[arg(long, help = "Farm location, e.g. California")]
    pub location: String,
    #[arg(long, help = "Farm size in acres")]
    pub land_size: f64,
    #[arg(long, value_delimiter = ',', help = "Comma-separated crop history, most recent first")]
    pub crops: Vec<String>,
    #[arg(long, default_value = "", help = "Free-text financial goal")]
    pub financial_goal: String,
    #[arg(long, default_value = "", help = "Free-text sustainability goal")]
    pub sustainability_goal: String,
    #[arg(long, help = "Emit machine-readable JSON output")]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct RecommendPayload {
    command: &'static str,
    status: &'static str,
    profile_id: u64,
    response: AgentResponse,
}

pub fn run(args: RecommendArgs) -> CommandResult {
    let repository = ProfileRepository::seeded();
    let draft = ProfileDraft {
        name: args.name,
        location: args.location,
        land_size: args.land_size,
        crop_history: args.crops,
        financial_goal: args.financial_goal,
        sustainability_goal: args.sustainability_goal,
    };

    let profile = match repository.submit(draft) {
        Ok(profile) => profile,
        Err(error) => {
            return CommandResult::failure("recommend", "profile_validation", error.to_string(), 2)
        }
    };

    let engine = AdvisoryEngine::new();
    let response = engine.recommendations(&profile);
    tracing::debug!(
        profile_id = profile.id.0,
        insights = response.insights.len(),
        recommendations = response.recommendations.len(),
        "advisory response assembled"
    );

    if args.json {
        let payload = RecommendPayload {
            command: "recommend",
            status: "ok",
            profile_id: profile.id.0,
            response,
        };
        return CommandResult::ok(serialize_payload(&payload));
    }

    CommandResult::ok(render_human(&profile, &response))
}

fn render_human(profile: &FarmerProfile, response: &AgentResponse) -> String {
    let mut lines = vec![format!(
        "advisory report for {} ({}, {} acres)",
        profile.name, profile.location, profile.land_size
    )];

    lines.push("insights:".to_string());
    for insight in &response.insights {
        lines.push(format!("- {insight}"));
    }

    lines.push("recommendations:".to_string());
    for recommendation in &response.recommendations {
        lines.push(format!("- {recommendation}"));
    }

    lines.join("\n")
}

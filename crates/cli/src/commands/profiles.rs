use fieldwise_core::{FarmerProfile, ProfileRepository};
use serde::Serialize;

use super::{serialize_payload, CommandResult};

#[derive(Debug, Serialize)]
struct ProfilesPayload {
    command: &'static str,
    status: &'static str,
    profiles: Vec<FarmerProfile>,
}

pub fn run(json_output: bool) -> CommandResult {
    let profiles = ProfileRepository::seeded().all();

    if json_output {
        let payload = ProfilesPayload { command: "profiles", status: "ok", profiles };
        return CommandResult::ok(serialize_payload(&payload));
    }

    let mut lines = vec![format!("{} demo farmer profiles:", profiles.len())];
    for profile in &profiles {
        lines.push(format!(
            "- #{} {} ({}, {} acres): {}",
            profile.id.0,
            profile.name,
            profile.location,
            profile.land_size,
            profile.crop_history.join(", ")
        ));
    }
    CommandResult::ok(lines.join("\n"))
}

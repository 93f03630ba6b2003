use fieldwise_core::config::{AppConfig, LoadOptions};
use fieldwise_core::{
    market_trends, sustainability_scores_by_crop, weather_impacts, ReferenceData,
};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool) -> String {
    let report = build_report();

    if json_output {
        return serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        });
    }

    render_human(&report)
}

fn build_report() -> DoctorReport {
    let mut checks = Vec::new();

    checks.push(match AppConfig::load(LoadOptions::default()) {
        Ok(_) => DoctorCheck {
            name: "config_validation",
            status: CheckStatus::Pass,
            details: "configuration loaded and validated".to_string(),
        },
        Err(error) => DoctorCheck {
            name: "config_validation",
            status: CheckStatus::Fail,
            details: error.to_string(),
        },
    });

    // Dataset checks are independent of configuration.
    let data = ReferenceData::seeded();
    checks.push(check_farm_dataset(&data));
    checks.push(check_market_dataset(&data));
    checks.push(check_aggregate_coverage(&data));

    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

fn check_farm_dataset(data: &ReferenceData) -> DoctorCheck {
    if data.farms.is_empty() {
        return DoctorCheck {
            name: "farm_dataset",
            status: CheckStatus::Fail,
            details: "farm dataset is empty".to_string(),
        };
    }

    for farm in &data.farms {
        let values = [
            farm.soil_ph,
            farm.soil_moisture,
            farm.temperature,
            farm.rainfall_mm,
            farm.fertilizer_usage,
            farm.pesticide_usage,
            farm.crop_yield,
            farm.sustainability_score,
        ];
        if values.iter().any(|value| !value.is_finite()) {
            return DoctorCheck {
                name: "farm_dataset",
                status: CheckStatus::Fail,
                details: format!("farm observation {} has a non-finite value", farm.id),
            };
        }
        if !(0.0..=100.0).contains(&farm.sustainability_score) {
            return DoctorCheck {
                name: "farm_dataset",
                status: CheckStatus::Fail,
                details: format!(
                    "farm observation {} has sustainability score outside 0..=100",
                    farm.id
                ),
            };
        }
    }

    DoctorCheck {
        name: "farm_dataset",
        status: CheckStatus::Pass,
        details: format!("{} farm observations validated", data.farms.len()),
    }
}

fn check_market_dataset(data: &ReferenceData) -> DoctorCheck {
    if data.markets.is_empty() {
        return DoctorCheck {
            name: "market_dataset",
            status: CheckStatus::Fail,
            details: "market dataset is empty".to_string(),
        };
    }

    for market in &data.markets {
        let values = [
            market.market_price,
            market.demand_index,
            market.supply_index,
            market.weather_impact,
            market.consumer_trend_index,
        ];
        if values.iter().any(|value| !value.is_finite() || *value < 0.0) {
            return DoctorCheck {
                name: "market_dataset",
                status: CheckStatus::Fail,
                details: format!(
                    "market observation {} has a non-finite or negative value",
                    market.id
                ),
            };
        }
    }

    DoctorCheck {
        name: "market_dataset",
        status: CheckStatus::Pass,
        details: format!("{} market observations validated", data.markets.len()),
    }
}

fn check_aggregate_coverage(data: &ReferenceData) -> DoctorCheck {
    let trends = market_trends(data);
    let scores = sustainability_scores_by_crop(data);
    let impacts = weather_impacts(data);

    for crop in data.market_crops() {
        if !trends.iter().any(|entry| entry.crop == crop) {
            return DoctorCheck {
                name: "aggregate_coverage",
                status: CheckStatus::Fail,
                details: format!("no market trend computed for {crop}"),
            };
        }
        if !impacts.iter().any(|entry| entry.crop == crop) {
            return DoctorCheck {
                name: "aggregate_coverage",
                status: CheckStatus::Fail,
                details: format!("no weather impact computed for {crop}"),
            };
        }
    }

    for crop in data.farm_crops() {
        if !scores.iter().any(|entry| entry.crop == crop) {
            return DoctorCheck {
                name: "aggregate_coverage",
                status: CheckStatus::Fail,
                details: format!("no sustainability score computed for {crop}"),
            };
        }
    }

    DoctorCheck {
        name: "aggregate_coverage",
        status: CheckStatus::Pass,
        details: format!(
            "{} market crops and {} farm crops covered by aggregates",
            data.market_crops().len(),
            data.farm_crops().len()
        ),
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

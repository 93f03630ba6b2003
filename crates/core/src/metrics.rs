//! Aggregate per-crop metrics derived from the reference snapshot.
//!
//! All functions here are pure: repeated calls against an unchanged snapshot
//! return identical results. Entries come back in the crop's first-appearance
//! order within the underlying dataset, which is also the order downstream
//! rule text lists crops in.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dataset::ReferenceData;

/// Demand threshold (exclusive) above which a crop can classify as Rising.
const RISING_DEMAND_THRESHOLD: f64 = 150.0;
/// Price threshold (exclusive) above which a crop can classify as Rising.
const RISING_PRICE_THRESHOLD: f64 = 300.0;
/// Demand threshold (exclusive) below which a crop classifies as Declining.
const DECLINING_DEMAND_THRESHOLD: f64 = 100.0;
/// Price threshold (exclusive) below which a crop classifies as Declining.
const DECLINING_PRICE_THRESHOLD: f64 = 200.0;

/// Market trajectory classification for a crop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Rising,
    Declining,
    Stable,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TrendDirection::Rising => "Rising",
            TrendDirection::Declining => "Declining",
            TrendDirection::Stable => "Stable",
        };
        f.write_str(label)
    }
}

/// Average sustainability score for one crop.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CropScore {
    pub crop: String,
    pub score: f64,
}

/// Average price/demand and classified trend for one crop.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CropTrend {
    pub crop: String,
    pub trend: TrendDirection,
    pub price: f64,
    pub demand: f64,
}

/// Average weather impact for one crop.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CropImpact {
    pub crop: String,
    pub impact: f64,
}

/// Trend entry as bundled per crop in `AgentData.market_trends`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub trend: TrendDirection,
    pub price: f64,
    pub demand: f64,
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Per-crop mean sustainability score across all farm observations, rounded
/// to 2 decimal places.
pub fn sustainability_scores_by_crop(data: &ReferenceData) -> Vec<CropScore> {
    data.farm_crops()
        .into_iter()
        .map(|crop| {
            let rows: Vec<f64> = data
                .farms
                .iter()
                .filter(|farm| farm.crop_type == crop)
                .map(|farm| farm.sustainability_score)
                .collect();
            CropScore { crop: crop.to_owned(), score: round2(mean(&rows)) }
        })
        .collect()
}

/// Per-crop mean market price and demand index, with the trend classified
/// from the unrounded averages. Rising is checked before Declining; all
/// threshold comparisons are strict.
pub fn market_trends(data: &ReferenceData) -> Vec<CropTrend> {
    data.market_crops()
        .into_iter()
        .map(|crop| {
            let rows: Vec<&_> =
                data.markets.iter().filter(|market| market.product == crop).collect();
            let price = mean(&rows.iter().map(|m| m.market_price).collect::<Vec<_>>());
            let demand = mean(&rows.iter().map(|m| m.demand_index).collect::<Vec<_>>());
            CropTrend {
                crop: crop.to_owned(),
                trend: classify_trend(demand, price),
                price: round2(price),
                demand: round2(demand),
            }
        })
        .collect()
}

/// Per-crop mean weather impact across market observations, rounded to
/// 2 decimal places.
pub fn weather_impacts(data: &ReferenceData) -> Vec<CropImpact> {
    data.market_crops()
        .into_iter()
        .map(|crop| {
            let rows: Vec<f64> = data
                .markets
                .iter()
                .filter(|market| market.product == crop)
                .map(|market| market.weather_impact)
                .collect();
            CropImpact { crop: crop.to_owned(), impact: round2(mean(&rows)) }
        })
        .collect()
}

/// Trend for one crop by exact name, falling back to Stable for crops absent
/// from the market dataset.
pub(crate) fn trend_for(trends: &[CropTrend], crop: &str) -> TrendDirection {
    trends
        .iter()
        .find(|entry| entry.crop == crop)
        .map(|entry| entry.trend)
        .unwrap_or(TrendDirection::Stable)
}

fn classify_trend(avg_demand: f64, avg_price: f64) -> TrendDirection {
    if avg_demand > RISING_DEMAND_THRESHOLD && avg_price > RISING_PRICE_THRESHOLD {
        TrendDirection::Rising
    } else if avg_demand < DECLINING_DEMAND_THRESHOLD || avg_price < DECLINING_PRICE_THRESHOLD {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ReferenceData;

    fn raw_mean(values: &[f64]) -> f64 {
        values.iter().sum::<f64>() / values.len() as f64
    }

    #[test]
    fn sustainability_scores_match_recomputed_means() {
        let data = ReferenceData::seeded();
        let scores = sustainability_scores_by_crop(&data);

        for entry in &scores {
            let raw: Vec<f64> = data
                .farms
                .iter()
                .filter(|farm| farm.crop_type == entry.crop)
                .map(|farm| farm.sustainability_score)
                .collect();
            assert!(!raw.is_empty(), "every aggregated crop must be backed by observations");
            assert_eq!(entry.score, round2(raw_mean(&raw)), "crop {}", entry.crop);
            // Rounded to 2 decimal places.
            assert!((entry.score * 100.0 - (entry.score * 100.0).round()).abs() < 1e-9);
        }

        let rice = scores.iter().find(|entry| entry.crop == "Rice").unwrap();
        assert_eq!(rice.score, 23.03);
    }

    #[test]
    fn trend_classification_matches_thresholds() {
        let data = ReferenceData::seeded();
        let trends = market_trends(&data);

        assert_eq!(trends.len(), 4);
        for entry in &trends {
            let rows: Vec<&_> =
                data.markets.iter().filter(|market| market.product == entry.crop).collect();
            let price = raw_mean(&rows.iter().map(|m| m.market_price).collect::<Vec<_>>());
            let demand = raw_mean(&rows.iter().map(|m| m.demand_index).collect::<Vec<_>>());

            let expected = if demand > 150.0 && price > 300.0 {
                TrendDirection::Rising
            } else if demand < 100.0 || price < 200.0 {
                TrendDirection::Declining
            } else {
                TrendDirection::Stable
            };
            assert_eq!(entry.trend, expected, "crop {}", entry.crop);
            assert_eq!(entry.price, round2(price));
            assert_eq!(entry.demand, round2(demand));
        }
    }

    #[test]
    fn seeded_dataset_yields_known_trends() {
        let trends = market_trends(&ReferenceData::seeded());
        let by_crop =
            |crop: &str| trends.iter().find(|entry| entry.crop == crop).unwrap().trend;

        assert_eq!(by_crop("Soybean"), TrendDirection::Rising);
        assert_eq!(by_crop("Corn"), TrendDirection::Declining);
        assert_eq!(by_crop("Rice"), TrendDirection::Stable);
        assert_eq!(by_crop("Wheat"), TrendDirection::Stable);
    }

    #[test]
    fn trend_entries_follow_dataset_order() {
        let trends = market_trends(&ReferenceData::seeded());
        let crops: Vec<&str> = trends.iter().map(|entry| entry.crop.as_str()).collect();
        assert_eq!(crops, vec!["Rice", "Wheat", "Soybean", "Corn"]);
    }

    #[test]
    fn trend_lookup_falls_back_to_stable() {
        let trends = market_trends(&ReferenceData::seeded());
        assert_eq!(trend_for(&trends, "Unobtainium"), TrendDirection::Stable);
        assert_eq!(trend_for(&trends, "Soybean"), TrendDirection::Rising);
    }

    #[test]
    fn weather_impacts_match_recomputed_means() {
        let data = ReferenceData::seeded();
        let impacts = weather_impacts(&data);

        assert_eq!(impacts.len(), 4);
        for entry in &impacts {
            let raw: Vec<f64> = data
                .markets
                .iter()
                .filter(|market| market.product == entry.crop)
                .map(|market| market.weather_impact)
                .collect();
            assert_eq!(entry.impact, round2(raw_mean(&raw)), "crop {}", entry.crop);
        }
    }

    #[test]
    fn aggregates_are_pure() {
        let data = ReferenceData::seeded();
        assert_eq!(market_trends(&data), market_trends(&data));
        assert_eq!(
            sustainability_scores_by_crop(&data),
            sustainability_scores_by_crop(&data)
        );
        assert_eq!(weather_impacts(&data), weather_impacts(&data));
    }
}

//! Fixed reference snapshot of farm and market observations.
//!
//! The advisory engine is a deterministic computation over this snapshot; there
//! is no ingestion path. Seed rows live in `const` tables and are materialized
//! into owned observations once per `ReferenceData::seeded()` call.

use crate::domain::observation::{FarmObservation, MarketObservation, Seasonality};

#[derive(Debug, Clone, Copy)]
struct FarmSeed {
    id: u32,
    soil_ph: f64,
    soil_moisture: f64,
    temperature: f64,
    rainfall_mm: f64,
    crop_type: &'static str,
    fertilizer_usage: f64,
    pesticide_usage: f64,
    crop_yield: f64,
    sustainability_score: f64,
}

const FARM_SEEDS: &[FarmSeed] = &[
    FarmSeed {
        id: 1,
        soil_ph: 7.07,
        soil_moisture: 49.15,
        temperature: 26.67,
        rainfall_mm: 227.89,
        crop_type: "Wheat",
        fertilizer_usage: 131.69,
        pesticide_usage: 2.96,
        crop_yield: 1.58,
        sustainability_score: 51.91,
    },
    FarmSeed {
        id: 2,
        soil_ph: 6.24,
        soil_moisture: 21.5,
        temperature: 29.33,
        rainfall_mm: 244.02,
        crop_type: "Soybean",
        fertilizer_usage: 136.37,
        pesticide_usage: 19.2,
        crop_yield: 3.82,
        sustainability_score: 47.16,
    },
    FarmSeed {
        id: 3,
        soil_ph: 5.92,
        soil_moisture: 19.47,
        temperature: 17.67,
        rainfall_mm: 141.11,
        crop_type: "Corn",
        fertilizer_usage: 99.73,
        pesticide_usage: 11.04,
        crop_yield: 1.13,
        sustainability_score: 50.15,
    },
    FarmSeed {
        id: 4,
        soil_ph: 6.85,
        soil_moisture: 27.97,
        temperature: 17.19,
        rainfall_mm: 156.79,
        crop_type: "Wheat",
        fertilizer_usage: 194.83,
        pesticide_usage: 8.81,
        crop_yield: 8.87,
        sustainability_score: 89.76,
    },
    FarmSeed {
        id: 5,
        soil_ph: 6.93,
        soil_moisture: 33.64,
        temperature: 23.6,
        rainfall_mm: 77.85,
        crop_type: "Corn",
        fertilizer_usage: 57.27,
        pesticide_usage: 3.75,
        crop_yield: 8.78,
        sustainability_score: 51.03,
    },
    FarmSeed {
        id: 6,
        soil_ph: 6.13,
        soil_moisture: 15.94,
        temperature: 30.45,
        rainfall_mm: 296.62,
        crop_type: "Rice",
        fertilizer_usage: 96.48,
        pesticide_usage: 3.27,
        crop_yield: 2.04,
        sustainability_score: 23.03,
    },
    FarmSeed {
        id: 7,
        soil_ph: 7.41,
        soil_moisture: 41.56,
        temperature: 25.77,
        rainfall_mm: 54.35,
        crop_type: "Soybean",
        fertilizer_usage: 159.21,
        pesticide_usage: 13.67,
        crop_yield: 6.18,
        sustainability_score: 88.87,
    },
    FarmSeed {
        id: 8,
        soil_ph: 7.02,
        soil_moisture: 35.17,
        temperature: 22.72,
        rainfall_mm: 292.36,
        crop_type: "Soybean",
        fertilizer_usage: 180.44,
        pesticide_usage: 18.57,
        crop_yield: 5.22,
        sustainability_score: 44.02,
    },
    FarmSeed {
        id: 9,
        soil_ph: 5.53,
        soil_moisture: 12.67,
        temperature: 15.35,
        rainfall_mm: 183.93,
        crop_type: "Wheat",
        fertilizer_usage: 191.53,
        pesticide_usage: 3.24,
        crop_yield: 7.8,
        sustainability_score: 80.16,
    },
    FarmSeed {
        id: 10,
        soil_ph: 6.27,
        soil_moisture: 13.36,
        temperature: 23.03,
        rainfall_mm: 199.65,
        crop_type: "Soybean",
        fertilizer_usage: 58.52,
        pesticide_usage: 13.67,
        crop_yield: 6.22,
        sustainability_score: 82.93,
    },
];

#[derive(Debug, Clone, Copy)]
struct MarketSeed {
    id: u32,
    product: &'static str,
    market_price: f64,
    demand_index: f64,
    supply_index: f64,
    competition_level: f64,
    economic_factor: f64,
    weather_impact: f64,
    seasonality: Seasonality,
    consumer_trend_index: f64,
}

const MARKET_SEEDS: &[MarketSeed] = &[
    MarketSeed {
        id: 1,
        product: "Rice",
        market_price: 180.25,
        demand_index: 196.09,
        supply_index: 199.51,
        competition_level: 300.55,
        economic_factor: 1.09,
        weather_impact: 28.47,
        seasonality: Seasonality::Medium,
        consumer_trend_index: 148.47,
    },
    MarketSeed {
        id: 2,
        product: "Rice",
        market_price: 420.53,
        demand_index: 188.45,
        supply_index: 150.79,
        competition_level: 492.1,
        economic_factor: 0.53,
        weather_impact: 70.98,
        seasonality: Seasonality::High,
        consumer_trend_index: 97.3,
    },
    MarketSeed {
        id: 3,
        product: "Wheat",
        market_price: 457.26,
        demand_index: 171.18,
        supply_index: 78.99,
        competition_level: 323.0,
        economic_factor: 1.29,
        weather_impact: 80.85,
        seasonality: Seasonality::Low,
        consumer_trend_index: 131.11,
    },
    MarketSeed {
        id: 4,
        product: "Soybean",
        market_price: 237.18,
        demand_index: 196.97,
        supply_index: 50.46,
        competition_level: 233.0,
        economic_factor: 0.63,
        weather_impact: 60.68,
        seasonality: Seasonality::Low,
        consumer_trend_index: 95.17,
    },
    MarketSeed {
        id: 5,
        product: "Wheat",
        market_price: 324.03,
        demand_index: 113.17,
        supply_index: 145.88,
        competition_level: 312.43,
        economic_factor: 1.49,
        weather_impact: 45.38,
        seasonality: Seasonality::Low,
        consumer_trend_index: 130.3,
    },
    MarketSeed {
        id: 6,
        product: "Corn",
        market_price: 389.65,
        demand_index: 123.09,
        supply_index: 190.91,
        competition_level: 181.94,
        economic_factor: 0.88,
        weather_impact: 81.37,
        seasonality: Seasonality::Low,
        consumer_trend_index: 77.25,
    },
    MarketSeed {
        id: 7,
        product: "Rice",
        market_price: 155.9,
        demand_index: 70.2,
        supply_index: 96.27,
        competition_level: 265.92,
        economic_factor: 1.23,
        weather_impact: 88.33,
        seasonality: Seasonality::High,
        consumer_trend_index: 107.45,
    },
    MarketSeed {
        id: 8,
        product: "Rice",
        market_price: 321.73,
        demand_index: 138.08,
        supply_index: 52.26,
        competition_level: 187.68,
        economic_factor: 1.48,
        weather_impact: 14.62,
        seasonality: Seasonality::Low,
        consumer_trend_index: 103.24,
    },
    MarketSeed {
        id: 9,
        product: "Soybean",
        market_price: 447.41,
        demand_index: 188.32,
        supply_index: 171.83,
        competition_level: 210.5,
        economic_factor: 0.71,
        weather_impact: 29.15,
        seasonality: Seasonality::Low,
        consumer_trend_index: 141.32,
    },
    MarketSeed {
        id: 10,
        product: "Corn",
        market_price: 218.13,
        demand_index: 58.5,
        supply_index: 92.44,
        competition_level: 428.67,
        economic_factor: 0.79,
        weather_impact: 78.89,
        seasonality: Seasonality::High,
        consumer_trend_index: 80.22,
    },
];

/// Immutable snapshot the aggregate metrics and advisors read from.
#[derive(Clone, Debug)]
pub struct ReferenceData {
    pub farms: Vec<FarmObservation>,
    pub markets: Vec<MarketObservation>,
}

impl ReferenceData {
    /// Build the fixed seeded snapshot.
    pub fn seeded() -> Self {
        let farms = FARM_SEEDS
            .iter()
            .map(|seed| FarmObservation {
                id: seed.id,
                soil_ph: seed.soil_ph,
                soil_moisture: seed.soil_moisture,
                temperature: seed.temperature,
                rainfall_mm: seed.rainfall_mm,
                crop_type: seed.crop_type.to_owned(),
                fertilizer_usage: seed.fertilizer_usage,
                pesticide_usage: seed.pesticide_usage,
                crop_yield: seed.crop_yield,
                sustainability_score: seed.sustainability_score,
            })
            .collect();

        let markets = MARKET_SEEDS
            .iter()
            .map(|seed| MarketObservation {
                id: seed.id,
                product: seed.product.to_owned(),
                market_price: seed.market_price,
                demand_index: seed.demand_index,
                supply_index: seed.supply_index,
                competition_level: seed.competition_level,
                economic_factor: seed.economic_factor,
                weather_impact: seed.weather_impact,
                seasonality: seed.seasonality,
                consumer_trend_index: seed.consumer_trend_index,
            })
            .collect();

        Self { farms, markets }
    }

    /// Market observations for one crop, matched case-insensitively.
    pub fn markets_for_crop(&self, crop: &str) -> Vec<&MarketObservation> {
        self.markets.iter().filter(|market| market.product.eq_ignore_ascii_case(crop)).collect()
    }

    /// Farm observations for one crop, matched case-insensitively.
    pub fn farms_for_crop(&self, crop: &str) -> Vec<&FarmObservation> {
        self.farms.iter().filter(|farm| farm.crop_type.eq_ignore_ascii_case(crop)).collect()
    }

    /// Unique market crop names in first-appearance order.
    pub fn market_crops(&self) -> Vec<&str> {
        let mut crops: Vec<&str> = Vec::new();
        for market in &self.markets {
            if !crops.contains(&market.product.as_str()) {
                crops.push(market.product.as_str());
            }
        }
        crops
    }

    /// Unique farm crop names in first-appearance order.
    pub fn farm_crops(&self) -> Vec<&str> {
        let mut crops: Vec<&str> = Vec::new();
        for farm in &self.farms {
            if !crops.contains(&farm.crop_type.as_str()) {
                crops.push(farm.crop_type.as_str());
            }
        }
        crops
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_snapshot_has_both_datasets() {
        let data = ReferenceData::seeded();
        assert_eq!(data.farms.len(), 10);
        assert_eq!(data.markets.len(), 10);
    }

    #[test]
    fn crop_lists_preserve_first_appearance_order() {
        let data = ReferenceData::seeded();
        assert_eq!(data.farm_crops(), vec!["Wheat", "Soybean", "Corn", "Rice"]);
        assert_eq!(data.market_crops(), vec!["Rice", "Wheat", "Soybean", "Corn"]);
    }

    #[test]
    fn market_lookup_is_case_insensitive() {
        let data = ReferenceData::seeded();
        assert_eq!(data.markets_for_crop("rice").len(), 4);
        assert_eq!(data.markets_for_crop("RICE").len(), 4);
        assert!(data.markets_for_crop("Unobtainium").is_empty());
    }

    #[test]
    fn farm_lookup_is_case_insensitive() {
        let data = ReferenceData::seeded();
        assert_eq!(data.farms_for_crop("wheat").len(), 3);
        assert_eq!(data.farms_for_crop("Soybean").len(), 4);
        assert!(data.farms_for_crop("Unobtainium").is_empty());
    }

    #[test]
    fn scores_and_indices_are_finite_and_non_negative() {
        let data = ReferenceData::seeded();
        for farm in &data.farms {
            assert!(farm.sustainability_score.is_finite());
            assert!((0.0..=100.0).contains(&farm.sustainability_score));
        }
        for market in &data.markets {
            for value in [
                market.market_price,
                market.demand_index,
                market.supply_index,
                market.weather_impact,
                market.consumer_trend_index,
            ] {
                assert!(value.is_finite() && value >= 0.0);
            }
        }
    }
}

use serde::{Deserialize, Serialize};

/// Seasonal sensitivity bucket recorded for a market observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seasonality {
    Low,
    Medium,
    High,
}

/// One field-level survey row from the farm snapshot.
///
/// Source of truth for land/crop suitability and the per-crop sustainability
/// aggregates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FarmObservation {
    pub id: u32,
    pub soil_ph: f64,
    pub soil_moisture: f64,
    pub temperature: f64,
    pub rainfall_mm: f64,
    pub crop_type: String,
    pub fertilizer_usage: f64,
    pub pesticide_usage: f64,
    pub crop_yield: f64,
    /// Composite score in the 0-100 range.
    pub sustainability_score: f64,
}

/// One market survey row for a single crop.
///
/// Source of truth for market trend and weather-impact aggregates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketObservation {
    pub id: u32,
    pub product: String,
    pub market_price: f64,
    pub demand_index: f64,
    pub supply_index: f64,
    pub competition_level: f64,
    pub economic_factor: f64,
    pub weather_impact: f64,
    pub seasonality: Seasonality,
    pub consumer_trend_index: f64,
}

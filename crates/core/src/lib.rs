pub mod advisors;
pub mod config;
pub mod dataset;
pub mod domain;
pub mod errors;
pub mod metrics;
pub mod profiles;

pub use advisors::{
    land_advisor, market_researcher, sustainability_monitor, weather_analyst, AdvisoryEngine,
    AgentData, AgentResponse,
};
pub use dataset::ReferenceData;
pub use domain::observation::{FarmObservation, MarketObservation, Seasonality};
pub use domain::profile::{FarmerProfile, ProfileDraft, ProfileId};
pub use errors::DomainError;
pub use metrics::{
    market_trends, sustainability_scores_by_crop, weather_impacts, CropImpact, CropScore,
    CropTrend, TrendDirection, TrendSummary,
};
pub use profiles::ProfileRepository;

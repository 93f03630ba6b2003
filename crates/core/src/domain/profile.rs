use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProfileId(pub u64);

/// Submission fields for a new farmer profile. The repository assigns the id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub name: String,
    pub location: String,
    /// Acres; must be positive.
    pub land_size: f64,
    /// Crops the farmer has grown, most recent first.
    pub crop_history: Vec<String>,
    pub financial_goal: String,
    pub sustainability_goal: String,
}

/// An accepted farmer profile. Immutable once created; lives for the process
/// lifetime inside the repository that created it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FarmerProfile {
    pub id: ProfileId,
    pub name: String,
    pub location: String,
    pub land_size: f64,
    pub crop_history: Vec<String>,
    pub financial_goal: String,
    pub sustainability_goal: String,
}

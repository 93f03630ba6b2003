//! In-memory farmer profile repository.
//!
//! Profiles are append-only for the process lifetime. A single writer lock
//! serializes submissions so id assignment stays monotonic and unique even if
//! the repository is shared across threads.

use std::sync::{Mutex, PoisonError};

use crate::domain::profile::{FarmerProfile, ProfileDraft, ProfileId};
use crate::errors::DomainError;

#[derive(Debug, Clone, Copy)]
struct ProfileSeed {
    name: &'static str,
    location: &'static str,
    land_size: f64,
    crop_history: &'static [&'static str],
    financial_goal: &'static str,
    sustainability_goal: &'static str,
}

const PROFILE_SEEDS: &[ProfileSeed] = &[
    ProfileSeed {
        name: "John Smith",
        location: "California",
        land_size: 5.0,
        crop_history: &["Corn", "Wheat", "Soybean"],
        financial_goal: "Increase profit by 15%",
        sustainability_goal: "Reduce water usage by 20%",
    },
    ProfileSeed {
        name: "Maria Rodriguez",
        location: "Iowa",
        land_size: 12.0,
        crop_history: &["Corn", "Soybean"],
        financial_goal: "Stabilize income",
        sustainability_goal: "Improve soil health",
    },
    ProfileSeed {
        name: "Robert Johnson",
        location: "Nebraska",
        land_size: 8.0,
        crop_history: &["Wheat", "Corn"],
        financial_goal: "Maximize yield",
        sustainability_goal: "Reduce carbon footprint",
    },
];

#[derive(Debug, Default)]
struct Store {
    profiles: Vec<FarmerProfile>,
    next_id: u64,
}

/// Append-only store of accepted farmer profiles.
#[derive(Debug)]
pub struct ProfileRepository {
    inner: Mutex<Store>,
}

impl ProfileRepository {
    /// Empty repository; ids start at 1.
    pub fn new() -> Self {
        Self { inner: Mutex::new(Store { profiles: Vec::new(), next_id: 1 }) }
    }

    /// Repository preloaded with the demo farmer profiles.
    pub fn seeded() -> Self {
        let repository = Self::new();
        for seed in PROFILE_SEEDS {
            let draft = ProfileDraft {
                name: seed.name.to_owned(),
                location: seed.location.to_owned(),
                land_size: seed.land_size,
                crop_history: seed.crop_history.iter().map(|crop| (*crop).to_owned()).collect(),
                financial_goal: seed.financial_goal.to_owned(),
                sustainability_goal: seed.sustainability_goal.to_owned(),
            };
            // Seed rows satisfy the submission invariants.
            let _ = repository.submit(draft);
        }
        repository
    }

    /// Validate a submission and append it with the next id.
    ///
    /// This is the collaborator-side validation gate: the advisory engine
    /// itself never rejects a profile.
    pub fn submit(&self, draft: ProfileDraft) -> Result<FarmerProfile, DomainError> {
        if draft.name.trim().is_empty() {
            return Err(DomainError::InvalidProfile("name must not be empty".to_owned()));
        }
        if draft.crop_history.is_empty() {
            return Err(DomainError::InvalidProfile(
                "crop history must include at least one crop".to_owned(),
            ));
        }
        if !draft.land_size.is_finite() || draft.land_size <= 0.0 {
            return Err(DomainError::InvalidProfile(
                "land size must be a positive number of acres".to_owned(),
            ));
        }

        let mut store = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let profile = FarmerProfile {
            id: ProfileId(store.next_id),
            name: draft.name,
            location: draft.location,
            land_size: draft.land_size,
            crop_history: draft.crop_history,
            financial_goal: draft.financial_goal,
            sustainability_goal: draft.sustainability_goal,
        };
        store.next_id += 1;
        store.profiles.push(profile.clone());
        Ok(profile)
    }

    pub fn get(&self, id: ProfileId) -> Option<FarmerProfile> {
        let store = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        store.profiles.iter().find(|profile| profile.id == id).cloned()
    }

    pub fn all(&self) -> Vec<FarmerProfile> {
        let store = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        store.profiles.clone()
    }
}

impl Default for ProfileRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, crops: &[&str]) -> ProfileDraft {
        ProfileDraft {
            name: name.to_owned(),
            location: "California".to_owned(),
            land_size: 5.0,
            crop_history: crops.iter().map(|crop| (*crop).to_owned()).collect(),
            financial_goal: "Increase profit".to_owned(),
            sustainability_goal: "Reduce water usage".to_owned(),
        }
    }

    #[test]
    fn submit_assigns_monotonic_unique_ids() {
        let repository = ProfileRepository::new();
        let first = repository.submit(draft("A", &["Corn"])).unwrap();
        let second = repository.submit(draft("B", &["Rice"])).unwrap();

        assert_eq!(first.id, ProfileId(1));
        assert_eq!(second.id, ProfileId(2));
        assert_eq!(repository.all().len(), 2);
    }

    #[test]
    fn submit_rejects_empty_name() {
        let repository = ProfileRepository::new();
        let result = repository.submit(draft("   ", &["Corn"]));
        assert!(matches!(result, Err(DomainError::InvalidProfile(ref message)) if message.contains("name")));
        assert!(repository.all().is_empty());
    }

    #[test]
    fn submit_rejects_empty_crop_history() {
        let repository = ProfileRepository::new();
        let result = repository.submit(draft("A", &[]));
        assert!(matches!(result, Err(DomainError::InvalidProfile(ref message)) if message.contains("crop history")));
    }

    #[test]
    fn submit_rejects_non_positive_land_size() {
        let repository = ProfileRepository::new();
        let mut bad = draft("A", &["Corn"]);
        bad.land_size = 0.0;
        assert!(repository.submit(bad).is_err());
    }

    #[test]
    fn seeded_repository_holds_demo_profiles() {
        let repository = ProfileRepository::seeded();
        let profiles = repository.all();

        assert_eq!(profiles.len(), 3);
        assert_eq!(profiles[0].name, "John Smith");
        assert_eq!(profiles[0].location, "California");
        assert_eq!(repository.get(ProfileId(2)).unwrap().name, "Maria Rodriguez");
        assert!(repository.get(ProfileId(99)).is_none());
    }

    #[test]
    fn instances_are_isolated() {
        let first = ProfileRepository::new();
        let second = ProfileRepository::new();
        first.submit(draft("A", &["Corn"])).unwrap();

        assert_eq!(first.all().len(), 1);
        assert!(second.all().is_empty());
    }
}

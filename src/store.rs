//! Shared wizard state: the persisted profile blob and its staged views.
//!
//! All wizard steps accumulate their data into one [`StoredState`] carried by
//! a [`WizardContext`] that the dispatch loop passes into every step by
//! reference. The context — never the steps — persists the blob to
//! localStorage after each consumed event, so the storage key stays a pure
//! transport concern.
//!
//! The persisted shape is a single JSON object with all-optional fields.
//! Readers tolerate a missing key (empty object) and discard unparseable
//! JSON; writes always serialize the whole object, so fields written by an
//! earlier step survive a later step's merge.

use serde::{Deserialize, Serialize};

/// localStorage key holding the accumulated wizard data.
#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "career_path_form_data";

/// Minimum selectable age.
pub const AGE_MIN: u8 = 16;
/// Maximum selectable age.
pub const AGE_MAX: u8 = 20;

/// Academic stream of the student's current (class 12) education.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stream {
    Science,
    Commerce,
    Arts,
}

impl Stream {
    pub const ALL: [Stream; 3] = [Stream::Science, Stream::Commerce, Stream::Arts];

    pub fn label(self) -> &'static str {
        match self {
            Stream::Science => "Science (PCM/PCB)",
            Stream::Commerce => "Commerce",
            Stream::Arts => "Arts/Humanities",
        }
    }
}

/// Where the student would prefer to study.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Location {
    SameCity,
    SameState,
    AnywhereIndia,
    Abroad,
}

impl Location {
    pub const ALL: [Location; 4] = [
        Location::SameCity,
        Location::SameState,
        Location::AnywhereIndia,
        Location::Abroad,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Location::SameCity => "Same city",
            Location::SameState => "Same state",
            Location::AnywhereIndia => "Anywhere in India",
            Location::Abroad => "Abroad",
        }
    }
}

/// Yearly tuition budget band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Budget {
    Low,
    Medium,
    High,
    Premium,
}

impl Budget {
    pub const ALL: [Budget; 4] = [Budget::Low, Budget::Medium, Budget::High, Budget::Premium];

    pub fn label(self) -> &'static str {
        match self {
            Budget::Low => "Under ₹2 Lakhs per year",
            Budget::Medium => "₹2-5 Lakhs per year",
            Budget::High => "₹5-10 Lakhs per year",
            Budget::Premium => "Above ₹10 Lakhs per year",
        }
    }
}

/// A fully-specified academic profile, produced by the onboarding step.
#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    pub name: String,
    pub age: u8,
    pub stream: Stream,
    pub percentage: u8,
    pub location: Location,
    pub budget: Budget,
}

/// A profile plus the interest selection — everything the recommendations
/// step needs. Only constructible through [`StoredState::stage`], which is
/// what keeps an under-populated wizard out of the recommendations view.
#[derive(Clone, Debug, PartialEq)]
pub struct CompleteProfile {
    pub profile: Profile,
    pub interests: Vec<String>,
}

/// How far through the wizard the stored blob has progressed.
#[derive(Clone, Debug, PartialEq)]
pub enum Stage {
    /// Nothing usable stored yet.
    Empty,
    /// Profile fields are all present; interests are not.
    Profile(Profile),
    /// Profile and interests both present.
    Complete(CompleteProfile),
}

/// The persisted wizard blob. Every field is optional: steps fill it in
/// incrementally and a fresh visitor has none of them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<Stream>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<Budget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
}

impl StoredState {
    /// Merge a submitted profile into the blob. Overwrites all six profile
    /// fields atomically; a previously stored `interests` key is preserved.
    pub fn merge_profile(&mut self, profile: &Profile) {
        self.name = Some(profile.name.clone());
        self.age = Some(profile.age);
        self.stream = Some(profile.stream);
        self.percentage = Some(profile.percentage);
        self.preferred_location = Some(profile.location);
        self.budget = Some(profile.budget);
    }

    /// Merge an interest selection into the blob, leaving profile fields alone.
    pub fn merge_interests(&mut self, interests: &[String]) {
        self.interests = Some(interests.to_vec());
    }

    /// The stored profile, if every profile field is present.
    pub fn profile(&self) -> Option<Profile> {
        Some(Profile {
            name: self.name.clone()?,
            age: self.age?,
            stream: self.stream?,
            percentage: self.percentage?,
            location: self.preferred_location?,
            budget: self.budget?,
        })
    }

    /// Classify the blob into a wizard stage.
    pub fn stage(&self) -> Stage {
        match self.profile() {
            None => Stage::Empty,
            Some(profile) => match &self.interests {
                Some(interests) => Stage::Complete(CompleteProfile {
                    profile,
                    interests: interests.clone(),
                }),
                None => Stage::Profile(profile),
            },
        }
    }
}

/// The accumulated wizard data, passed by reference into every step's input
/// handler. Owns persistence so steps never touch localStorage directly.
pub struct WizardContext {
    pub stored: StoredState,
}

impl WizardContext {
    /// Load the stored blob from localStorage, or start empty when the key
    /// is absent, unparseable, or storage is unavailable.
    pub fn load() -> Self {
        Self {
            stored: load_stored(),
        }
    }

    /// Write the current blob back to localStorage.
    #[cfg(target_arch = "wasm32")]
    pub fn persist(&self) {
        let json = match serde_json::to_string(&self.stored) {
            Ok(j) => j,
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("CareerPath: failed to serialize wizard data: {e}").into(),
                );
                return;
            }
        };

        if let Some(storage) = local_storage() {
            if let Err(e) = storage.set_item(STORAGE_KEY, &json) {
                web_sys::console::warn_1(
                    &format!("CareerPath: failed to write localStorage: {e:?}").into(),
                );
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn persist(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(target_arch = "wasm32")]
fn load_stored() -> StoredState {
    let storage = match local_storage() {
        Some(s) => s,
        None => return StoredState::default(),
    };

    let json = match storage.get_item(STORAGE_KEY) {
        Ok(Some(j)) => j,
        _ => return StoredState::default(),
    };

    match serde_json::from_str(&json) {
        Ok(state) => state,
        Err(e) => {
            web_sys::console::warn_1(
                &format!("CareerPath: discarding unparseable wizard data: {e}").into(),
            );
            let _ = storage.remove_item(STORAGE_KEY);
            StoredState::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_stored() -> StoredState {
    StoredState::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> Profile {
        Profile {
            name: "Asha Verma".to_string(),
            age: 17,
            stream: Stream::Science,
            percentage: 85,
            location: Location::AnywhereIndia,
            budget: Budget::Medium,
        }
    }

    #[test]
    fn empty_blob_is_empty_stage() {
        let stored = StoredState::default();
        assert_eq!(stored.stage(), Stage::Empty);
        assert_eq!(stored.profile(), None);
    }

    #[test]
    fn merge_profile_reaches_profile_stage() {
        let mut stored = StoredState::default();
        stored.merge_profile(&sample_profile());

        assert_eq!(stored.stage(), Stage::Profile(sample_profile()));
    }

    #[test]
    fn merge_profile_preserves_interests() {
        let mut stored = StoredState::default();
        stored.merge_interests(&["programming".to_string(), "ai-ml".to_string()]);

        // Re-submitting the profile must not clobber the interests key
        stored.merge_profile(&sample_profile());
        assert_eq!(
            stored.interests,
            Some(vec!["programming".to_string(), "ai-ml".to_string()])
        );
    }

    #[test]
    fn merge_interests_preserves_profile() {
        let mut stored = StoredState::default();
        stored.merge_profile(&sample_profile());
        stored.merge_interests(&["writing".to_string()]);

        assert_eq!(stored.profile(), Some(sample_profile()));
    }

    #[test]
    fn complete_stage_requires_both() {
        let mut stored = StoredState::default();
        stored.merge_interests(&["writing".to_string()]);
        // Interests without a profile is still Empty: the profile gate comes first
        assert_eq!(stored.stage(), Stage::Empty);

        stored.merge_profile(&sample_profile());
        match stored.stage() {
            Stage::Complete(complete) => {
                assert_eq!(complete.profile, sample_profile());
                assert_eq!(complete.interests, vec!["writing".to_string()]);
            }
            other => panic!("expected Complete, got {:?}", other),
        }
    }

    #[test]
    fn partial_profile_is_empty_stage() {
        let stored = StoredState {
            name: Some("Asha".to_string()),
            age: Some(17),
            ..StoredState::default()
        };
        assert_eq!(stored.stage(), Stage::Empty);
    }

    #[test]
    fn resubmission_overwrites_all_fields() {
        let mut stored = StoredState::default();
        stored.merge_profile(&sample_profile());

        let updated = Profile {
            name: "Rohan".to_string(),
            age: 18,
            stream: Stream::Commerce,
            percentage: 72,
            location: Location::SameState,
            budget: Budget::Low,
        };
        stored.merge_profile(&updated);

        assert_eq!(stored.profile(), Some(updated));
    }

    // ── wire format ────────────────────────────────────────────────

    #[test]
    fn serializes_with_kebab_case_tokens() {
        let mut stored = StoredState::default();
        stored.merge_profile(&Profile {
            name: "Asha".to_string(),
            age: 17,
            stream: Stream::Science,
            percentage: 85,
            location: Location::AnywhereIndia,
            budget: Budget::Premium,
        });

        let json = serde_json::to_string(&stored).unwrap();
        assert!(json.contains("\"stream\":\"science\""));
        assert!(json.contains("\"preferred_location\":\"anywhere-india\""));
        assert!(json.contains("\"budget\":\"premium\""));
        // Unset keys are omitted, not serialized as null
        assert!(!json.contains("interests"));
    }

    #[test]
    fn reads_absent_fields_as_none() {
        let stored: StoredState = serde_json::from_str("{}").unwrap();
        assert_eq!(stored, StoredState::default());
    }

    #[test]
    fn roundtrips_through_json() {
        let mut stored = StoredState::default();
        stored.merge_profile(&sample_profile());
        stored.merge_interests(&[
            "programming".to_string(),
            "data-science".to_string(),
            "ai-ml".to_string(),
        ]);

        let json = serde_json::to_string(&stored).unwrap();
        let loaded: StoredState = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, stored);
        assert!(matches!(loaded.stage(), Stage::Complete(_)));
    }

    #[test]
    fn all_location_tokens_roundtrip() {
        for loc in Location::ALL {
            let json = serde_json::to_string(&loc).unwrap();
            let back: Location = serde_json::from_str(&json).unwrap();
            assert_eq!(back, loc);
        }
        assert_eq!(
            serde_json::to_string(&Location::SameCity).unwrap(),
            "\"same-city\""
        );
    }
}

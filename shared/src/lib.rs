use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use uuid::Uuid;

/// The twelve material categories the classifier can emit, in the exact
/// order of the model's output vector.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumIter,
    EnumString,
)]
pub enum Label {
    Battery,
    Biological,
    #[serde(rename = "Brown-glass")]
    #[strum(serialize = "Brown-glass")]
    BrownGlass,
    Cardboard,
    Clothes,
    #[serde(rename = "Green-glass")]
    #[strum(serialize = "Green-glass")]
    GreenGlass,
    Metal,
    Paper,
    Plastic,
    Shoes,
    Trash,
    #[serde(rename = "White-glass")]
    #[strum(serialize = "White-glass")]
    WhiteGlass,
}

impl Label {
    /// Maps the model's argmax position back to a label.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Folder name used when storing correction images for this label.
    pub fn folder(&self) -> String {
        self.as_ref().to_lowercase()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub session_id: Uuid,
    pub label: Label,
    pub confidence: f32,
    pub tip: String,
}

/// Distinguishes a well-formed "no match" answer from a transport failure:
/// absence is a value, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Lookup<T> {
    Found(T),
    NoMatch,
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationDetails {
    pub address: String,
    pub phone: String,
    pub hours: String,
    pub url: String,
}

/// One drop-off site as returned by the geographic search, with lazily
/// fetched details attached when available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationReport {
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
    pub location_id: String,
    pub details: Option<LocationDetails>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationSearchRequest {
    pub session_id: Uuid,
    pub zip_code: String,
    pub prediction_correct: bool,
    #[serde(default)]
    pub true_label: Option<Label>,
    #[serde(default)]
    pub allow_training: bool,
    pub specific_item: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    Ok,
    ZipNotFound,
    Curbside,
    NoNearby,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationSearchResponse {
    pub status: SearchStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<FeedbackOutcome>,
    #[serde(default)]
    pub locations: Vec<LocationReport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackOutcome {
    Stored,
    Duplicate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn twelve_labels_in_model_order() {
        assert_eq!(Label::iter().count(), 12);
        assert_eq!(Label::from_index(0), Some(Label::Battery));
        assert_eq!(Label::from_index(11), Some(Label::WhiteGlass));
        assert_eq!(Label::from_index(12), None);
    }

    #[test]
    fn hyphenated_spellings_round_trip() {
        assert_eq!(Label::BrownGlass.to_string(), "Brown-glass");
        assert_eq!(Label::from_str("Brown-glass").unwrap(), Label::BrownGlass);
        assert_eq!(
            serde_json::to_string(&Label::WhiteGlass).unwrap(),
            "\"White-glass\""
        );
        assert_eq!(
            serde_json::from_str::<Label>("\"Green-glass\"").unwrap(),
            Label::GreenGlass
        );
    }

    #[test]
    fn folder_names_are_lowercase() {
        assert_eq!(Label::Battery.folder(), "battery");
        assert_eq!(Label::BrownGlass.folder(), "brown-glass");
    }

    #[test]
    fn lookup_separates_absence_from_presence() {
        assert!(Lookup::Found(3).is_found());
        assert!(!Lookup::<i32>::NoMatch.is_found());
    }

    #[test]
    fn search_status_uses_snake_case_tags() {
        assert_eq!(
            serde_json::to_string(&SearchStatus::ZipNotFound).unwrap(),
            "\"zip_not_found\""
        );
        assert_eq!(
            serde_json::to_string(&FeedbackOutcome::Duplicate).unwrap(),
            "\"duplicate\""
        );
    }
}

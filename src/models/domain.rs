use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use validator::{Validate, ValidationError};

use crate::core::catalog::{Color, ColorScores, Motivator, BEST_PICKS, LEAST_PICKS, MODE_PICKS};

/// One "most like me / least like me" round of the quiz
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_round"))]
pub struct AnswerRound {
    /// Tokens picked as most representative
    #[serde(default)]
    pub best: Vec<String>,
    /// The single pick within `best`
    #[serde(default)]
    pub most: String,
    /// Tokens picked as least representative, drawn from outside `best`
    #[serde(default)]
    pub least: Vec<String>,
}

fn validate_round(round: &AnswerRound) -> Result<(), ValidationError> {
    if round.best.len() != BEST_PICKS {
        return Err(ValidationError::new("best_count"));
    }
    if round.least.len() != LEAST_PICKS {
        return Err(ValidationError::new("least_count"));
    }
    if !round.best.contains(&round.most) {
        return Err(ValidationError::new("most_not_in_best"));
    }

    let best: HashSet<&str> = round.best.iter().map(String::as_str).collect();
    if best.len() != round.best.len() {
        return Err(ValidationError::new("duplicate_pick"));
    }
    let mut least = HashSet::new();
    for token in &round.least {
        if best.contains(token.as_str()) || !least.insert(token.as_str()) {
            return Err(ValidationError::new("least_overlaps_best"));
        }
    }

    Ok(())
}

/// A completed answer set for the scoring questions
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct Answers {
    #[validate(nested)]
    #[serde(rename = "traitsRound1")]
    pub traits_round1: AnswerRound,
    #[validate(nested)]
    #[serde(rename = "traitsRound2")]
    pub traits_round2: AnswerRound,
    #[validate(nested)]
    pub images: AnswerRound,
    #[validate(custom(function = "validate_modes"))]
    #[serde(default)]
    pub modes: Vec<String>,
}

fn validate_modes(modes: &[String]) -> Result<(), ValidationError> {
    let unique: HashSet<&str> = modes.iter().map(String::as_str).collect();
    if modes.len() != MODE_PICKS || unique.len() != modes.len() {
        return Err(ValidationError::new("mode_count"));
    }
    Ok(())
}

/// Persona archetype
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub name: String,
    pub description: String,
}

/// Terminal output of the scorer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResult {
    #[serde(rename = "winningCategory")]
    pub winning_category: Motivator,
    pub persona: Persona,
    pub scores: ColorScores,
    #[serde(rename = "topTwoColors")]
    pub top_two_colors: [Color; 2],
}

/// Enrollment figure as found in the reference dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Enrollment {
    Count(u64),
    Decimal(f64),
    Text(String),
}

impl Enrollment {
    /// Parse to a head count, `None` when the figure is unusable
    ///
    /// Text figures may carry thousands separators, e.g. `"12,345"`.
    pub fn value(&self) -> Option<u64> {
        match self {
            Enrollment::Count(n) => Some(*n),
            Enrollment::Decimal(f) if f.is_finite() && *f >= 0.0 => Some(f.round() as u64),
            Enrollment::Decimal(_) => None,
            Enrollment::Text(s) => {
                let digits: String = s
                    .trim()
                    .chars()
                    .filter(|c| *c != ',' && *c != '_' && !c.is_whitespace())
                    .collect();
                digits.parse().ok()
            }
        }
    }
}

/// College reference record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct College {
    #[serde(default)]
    pub name: String,
    #[serde(alias = "url", default)]
    pub website: String,
    #[serde(default)]
    pub state: String,
    #[serde(rename = "type", alias = "collegeType", default)]
    pub college_type: String,
    #[serde(alias = "population", default)]
    pub enrollment: Option<Enrollment>,
}

impl College {
    /// Records need a name and a website to be shown at all
    #[inline]
    pub fn is_plausible(&self) -> bool {
        !self.name.trim().is_empty() && !self.website.trim().is_empty()
    }

    pub fn enrollment_count(&self) -> Option<u64> {
        self.enrollment.as_ref().and_then(Enrollment::value)
    }
}

/// Matched college as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollegeMatch {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum LocationPreference {
    InState,
    OutOfState,
    #[default]
    NoPreference,
}

impl From<&str> for LocationPreference {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "in-state" | "in state" | "instate" => LocationPreference::InState,
            "out-of-state" | "out of state" | "outofstate" => LocationPreference::OutOfState,
            _ => LocationPreference::NoPreference,
        }
    }
}

impl From<String> for LocationPreference {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Option<String>> for LocationPreference {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(value) => Self::from(value.as_str()),
            None => Self::default(),
        }
    }
}

impl From<LocationPreference> for String {
    fn from(value: LocationPreference) -> Self {
        match value {
            LocationPreference::InState => "In-state",
            LocationPreference::OutOfState => "Out-of-state",
            LocationPreference::NoPreference => "No preference",
        }
        .to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum CollegeType {
    Public,
    Private,
    Denominational,
    #[default]
    NoPreference,
}

impl CollegeType {
    pub fn label(&self) -> Option<&'static str> {
        match self {
            CollegeType::Public => Some("Public"),
            CollegeType::Private => Some("Private"),
            CollegeType::Denominational => Some("Denominational"),
            CollegeType::NoPreference => None,
        }
    }
}

impl From<&str> for CollegeType {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "public" => CollegeType::Public,
            "private" => CollegeType::Private,
            "denominational" => CollegeType::Denominational,
            _ => CollegeType::NoPreference,
        }
    }
}

impl From<String> for CollegeType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Option<String>> for CollegeType {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(value) => Self::from(value.as_str()),
            None => Self::default(),
        }
    }
}

impl From<CollegeType> for String {
    fn from(value: CollegeType) -> Self {
        value.label().unwrap_or("No Preference").to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum CollegeSize {
    /// 2,500 or less
    Small,
    /// 2,501 to 7,500
    Medium,
    /// 7,501 and up
    Large,
    #[default]
    NoPreference,
}

impl CollegeSize {
    /// Whether an enrollment figure falls within this size band
    #[inline]
    pub fn contains(&self, enrollment: u64) -> bool {
        match self {
            CollegeSize::Small => enrollment <= 2500,
            CollegeSize::Medium => (2501..=7500).contains(&enrollment),
            CollegeSize::Large => enrollment >= 7501,
            CollegeSize::NoPreference => true,
        }
    }
}

impl From<&str> for CollegeSize {
    fn from(value: &str) -> Self {
        let compact: String = value
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .collect::<String>()
            .to_ascii_lowercase();

        match compact.as_str() {
            "2500orless" | "small" => CollegeSize::Small,
            "2501-7500" | "medium" => CollegeSize::Medium,
            "7501+" | "large" => CollegeSize::Large,
            _ => CollegeSize::NoPreference,
        }
    }
}

impl From<String> for CollegeSize {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Option<String>> for CollegeSize {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(value) => Self::from(value.as_str()),
            None => Self::default(),
        }
    }
}

impl From<CollegeSize> for String {
    fn from(value: CollegeSize) -> Self {
        match value {
            CollegeSize::Small => "2,500 or less",
            CollegeSize::Medium => "2,501-7,500",
            CollegeSize::Large => "7,501+",
            CollegeSize::NoPreference => "",
        }
        .to_string()
    }
}

/// User-selected criteria for the college matcher
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollegeFilters {
    #[serde(default, alias = "locationPreference")]
    pub location: LocationPreference,
    #[serde(rename = "collegeType", default)]
    pub college_type: CollegeType,
    #[serde(rename = "collegeSize", default)]
    pub college_size: CollegeSize,
    /// Residence state, by name or postal code
    #[serde(default)]
    pub state: String,
}

/// Flat record handed to the submission sink
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub reference: uuid::Uuid,
    #[serde(rename = "personaName")]
    pub persona_name: String,
    pub state: String,
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub affiliation: Option<String>,
    #[serde(rename = "winningCategory")]
    pub winning_category: Option<String>,
    #[serde(rename = "topTwoColors")]
    pub top_two_colors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(best: [&str; 3], most: &str, least: [&str; 3]) -> AnswerRound {
        AnswerRound {
            best: best.iter().map(|s| s.to_string()).collect(),
            most: most.to_string(),
            least: least.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_enrollment_parsing() {
        assert_eq!(Enrollment::Count(1800).value(), Some(1800));
        assert_eq!(Enrollment::Decimal(2500.4).value(), Some(2500));
        assert_eq!(Enrollment::Text("12,345".to_string()).value(), Some(12345));
        assert_eq!(Enrollment::Text(" 900 ".to_string()).value(), Some(900));
        assert_eq!(Enrollment::Text("unknown".to_string()).value(), None);
        assert_eq!(Enrollment::Decimal(-3.0).value(), None);
    }

    #[test]
    fn test_college_deserializes_aliases() {
        let college: College = serde_json::from_str(
            r#"{"name": "Grinnell College", "url": "grinnell.edu", "state": "IA", "collegeType": "Private", "population": "1,800"}"#,
        )
        .unwrap();

        assert_eq!(college.website, "grinnell.edu");
        assert_eq!(college.college_type, "Private");
        assert_eq!(college.enrollment_count(), Some(1800));
        assert!(college.is_plausible());
    }

    #[test]
    fn test_college_without_website_is_not_plausible() {
        let college: College = serde_json::from_str(r#"{"name": "Nowhere U", "state": "IA"}"#).unwrap();
        assert!(!college.is_plausible());
        assert_eq!(college.enrollment_count(), None);
    }

    #[test]
    fn test_size_bands() {
        assert!(CollegeSize::Small.contains(2500));
        assert!(!CollegeSize::Small.contains(2501));
        assert!(CollegeSize::Medium.contains(2501));
        assert!(CollegeSize::Medium.contains(7500));
        assert!(!CollegeSize::Medium.contains(7501));
        assert!(CollegeSize::Large.contains(7501));
        assert!(CollegeSize::NoPreference.contains(0));
    }

    #[test]
    fn test_filter_labels() {
        assert_eq!(CollegeSize::from("2,500 or less"), CollegeSize::Small);
        assert_eq!(CollegeSize::from("2,501-7,500"), CollegeSize::Medium);
        assert_eq!(CollegeSize::from("7,501+"), CollegeSize::Large);
        assert_eq!(CollegeSize::from(""), CollegeSize::NoPreference);
        assert_eq!(CollegeType::from("No Preference"), CollegeType::NoPreference);
        assert_eq!(CollegeType::from("denominational"), CollegeType::Denominational);
        assert_eq!(LocationPreference::from("In-state"), LocationPreference::InState);
        assert_eq!(LocationPreference::from("No preference"), LocationPreference::NoPreference);
    }

    #[test]
    fn test_filters_deserialize() {
        let filters: CollegeFilters = serde_json::from_str(
            r#"{"location": "In-state", "collegeType": "Public", "collegeSize": "7,501+", "state": "Iowa"}"#,
        )
        .unwrap();

        assert_eq!(filters.location, LocationPreference::InState);
        assert_eq!(filters.college_type, CollegeType::Public);
        assert_eq!(filters.college_size, CollegeSize::Large);
        assert_eq!(filters.state, "Iowa");
    }

    #[test]
    fn test_null_filters_mean_no_preference() {
        let filters: CollegeFilters = serde_json::from_str(
            r#"{"location": null, "collegeType": null, "collegeSize": null, "state": "IA"}"#,
        )
        .unwrap();

        assert_eq!(filters.location, LocationPreference::NoPreference);
        assert_eq!(filters.college_type, CollegeType::NoPreference);
        assert_eq!(filters.college_size, CollegeSize::NoPreference);
    }

    #[test]
    fn test_round_validation() {
        let valid = round(["Bold", "Curious", "Poised"], "Bold", ["Tough", "Selfless", "Playful"]);
        assert!(valid.validate().is_ok());

        let most_outside = round(["Bold", "Curious", "Poised"], "Tough", ["Tough", "Selfless", "Playful"]);
        assert!(most_outside.validate().is_err());

        let overlap = round(["Bold", "Curious", "Poised"], "Bold", ["Bold", "Selfless", "Playful"]);
        assert!(overlap.validate().is_err());

        let mut short = valid.clone();
        short.best.pop();
        assert!(short.validate().is_err());
    }

    #[test]
    fn test_modes_validation() {
        assert!(validate_modes(&["Care With Me".to_string(), "Defy With Me".to_string()]).is_ok());
        assert!(validate_modes(&["Care With Me".to_string()]).is_err());
        assert!(validate_modes(&["Care With Me".to_string(), "Care With Me".to_string()]).is_err());
    }
}

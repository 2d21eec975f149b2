use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::{Answers, CollegeFilters};

/// Request to score a completed answer set
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreRequest {
    #[validate(nested)]
    pub answers: Answers,
}

/// Request for college matches
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchCollegesRequest {
    #[serde(flatten)]
    pub filters: CollegeFilters,
}

/// Flat submission record posted by the quiz client
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitRequest {
    #[validate(length(min = 1, max = 100))]
    #[serde(alias = "persona_name", rename = "personaName", default)]
    pub persona_name: String,
    #[validate(length(min = 1, max = 100))]
    #[serde(default)]
    pub state: String,
    #[validate(length(max = 200))]
    #[serde(alias = "full_name", rename = "fullName", default)]
    pub full_name: Option<String>,
    #[validate(email)]
    #[serde(default)]
    pub email: Option<String>,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub affiliation: Option<String>,
    #[serde(alias = "top_two_colors", rename = "topTwoColors", default)]
    pub top_two_colors: Vec<String>,
}

/// Full quiz completion: answers, college filters and contact details
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompleteQuizRequest {
    #[validate(nested)]
    pub answers: Answers,
    #[validate(custom(function = "validate_residence_state"))]
    #[serde(default)]
    pub filters: CollegeFilters,
    #[validate(length(max = 200))]
    #[serde(alias = "full_name", rename = "fullName", default)]
    pub full_name: Option<String>,
    #[validate(email)]
    #[serde(default)]
    pub email: Option<String>,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub affiliation: Option<String>,
}

/// The residence state is stored with every submission
fn validate_residence_state(filters: &CollegeFilters) -> Result<(), ValidationError> {
    let state = filters.state.trim();
    if state.is_empty() || state.chars().count() > 100 {
        return Err(ValidationError::new("state"));
    }
    Ok(())
}

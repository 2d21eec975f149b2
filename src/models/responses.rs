use serde::{Deserialize, Serialize};

use crate::models::domain::{CollegeMatch, QuizResult};

/// Response for the college match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchCollegesResponse {
    pub colleges: Vec<CollegeMatch>,
    #[serde(rename = "poolSize")]
    pub pool_size: usize,
}

/// Response for a completed quiz
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteQuizResponse {
    pub reference: uuid::Uuid,
    pub result: QuizResult,
    pub colleges: Vec<CollegeMatch>,
}

/// Response for a stored submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub message: String,
    pub reference: uuid::Uuid,
    #[serde(rename = "submittedAt")]
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

/// Option lists a quiz client renders, in presentation order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionsResponse {
    #[serde(rename = "traitsRound1")]
    pub traits_round1: Vec<String>,
    #[serde(rename = "traitsRound2")]
    pub traits_round2: Vec<String>,
    pub images: Vec<String>,
    pub modes: Vec<String>,
    pub locations: Vec<String>,
    #[serde(rename = "collegeTypes")]
    pub college_types: Vec<String>,
    #[serde(rename = "collegeSizes")]
    pub college_sizes: Vec<String>,
    pub affiliations: Vec<String>,
    pub states: Vec<String>,
    pub limits: SelectionLimits,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SelectionLimits {
    pub best: usize,
    pub least: usize,
    pub modes: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub colleges: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

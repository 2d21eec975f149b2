// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AnswerRound, Answers, College, CollegeFilters, CollegeMatch, CollegeSize, CollegeType,
    Enrollment, LocationPreference, Persona, QuizResult, Submission,
};
pub use requests::{CompleteQuizRequest, MatchCollegesRequest, ScoreRequest, SubmitRequest};
pub use responses::{
    CompleteQuizResponse, ErrorResponse, HealthResponse, MatchCollegesResponse, QuestionsResponse,
    SelectionLimits, SubmitResponse,
};

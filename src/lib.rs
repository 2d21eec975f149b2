//! Persona Quiz - color-trait personality scoring and college matching
//!
//! This library scores a completed four-section persona quiz into per-color
//! tallies, a winning motivator and a named persona, and recommends a small
//! random sample of colleges from a reference dataset filtered by location,
//! type and size preferences.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Catalog, Color, ColorScores, Matcher, Motivator, Scorer, ScoringError};
pub use crate::models::{Answers, College, CollegeFilters, CollegeMatch, Persona, QuizResult};
pub use crate::services::CollegeDataset;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let catalog = Catalog::new();
        assert_eq!(catalog.persona_count(), 81);
        assert_eq!(Matcher::default().limits(), (3, 5));
    }
}

// Core algorithm exports
pub mod catalog;
pub mod filters;
pub mod matcher;
mod personas;
pub mod scoring;
pub mod states;

pub use catalog::{Catalog, Color, ColorScores, Motivator, TokenKind};
pub use filters::{matches_size, matches_state, matches_type, narrow_or_keep, normalize_url};
pub use matcher::{MatchResult, Matcher};
pub use scoring::{winning_motivator, Scorer, ScoringError};
pub use states::{state_code, state_names, US_STATES};

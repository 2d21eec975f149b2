use std::sync::Arc;
use thiserror::Error;

use crate::core::catalog::{Catalog, Color, ColorScores, Motivator, TokenKind};
use crate::models::{AnswerRound, Answers, Persona, QuizResult};

/// Errors surfaced by the scorer
///
/// Only a token missing from the score tables can fail a scoring call.
/// That is a caller defect and is never defaulted away.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringError {
    #[error("Unknown {kind} token: {token}")]
    UnknownToken { kind: &'static str, token: String },
}

/// Converts a completed answer set into a persona classification
///
/// Scoring steps:
/// 1. +1 per best pick, +1 for the single most-like pick, -1 per least pick, for each round
/// 2. +1 per mode of connection
/// 3. Motivator totals from color triads, ties resolved Vitality > Strength > Creativity
/// 4. Persona from the top two colors, ties resolved by color name
#[derive(Debug, Clone)]
pub struct Scorer {
    catalog: Arc<Catalog>,
}

impl Scorer {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Score a completed answer set
    pub fn score(&self, answers: &Answers) -> Result<QuizResult, ScoringError> {
        let scores = self.tally(answers)?;

        let winning_category = winning_motivator(&scores);

        let ranked = scores.ranked();
        let top_two_colors = [ranked[0].0, ranked[1].0];

        let persona = self
            .catalog
            .persona_for_pair(top_two_colors[0], top_two_colors[1])
            .unwrap_or_else(|| fallback_persona(winning_category));

        tracing::debug!(
            "Scored answers: motivator={}, top colors={}-{}, persona={}",
            winning_category,
            top_two_colors[0],
            top_two_colors[1],
            persona.name
        );

        Ok(QuizResult {
            winning_category,
            persona,
            scores,
            top_two_colors,
        })
    }

    /// Accumulate the net color scores for an answer set
    pub fn tally(&self, answers: &Answers) -> Result<ColorScores, ScoringError> {
        let mut scores = ColorScores::new();

        self.apply_round(&mut scores, &answers.traits_round1, TokenKind::Trait)?;
        self.apply_round(&mut scores, &answers.traits_round2, TokenKind::Trait)?;
        self.apply_round(&mut scores, &answers.images, TokenKind::Image)?;

        for mode in &answers.modes {
            scores.add(self.resolve(mode, TokenKind::Trait)?, 1);
        }

        Ok(scores)
    }

    /// Apply one best/most/least round to a score vector
    pub fn apply_round(
        &self,
        scores: &mut ColorScores,
        round: &AnswerRound,
        kind: TokenKind,
    ) -> Result<(), ScoringError> {
        for token in &round.best {
            scores.add(self.resolve(token, kind)?, 1);
        }

        scores.add(self.resolve(&round.most, kind)?, 1);

        for token in &round.least {
            scores.add(self.resolve(token, kind)?, -1);
        }

        Ok(())
    }

    #[inline]
    fn resolve(&self, token: &str, kind: TokenKind) -> Result<Color, ScoringError> {
        self.catalog
            .color_of(token, kind)
            .ok_or_else(|| ScoringError::UnknownToken {
                kind: match kind {
                    TokenKind::Trait => "trait",
                    TokenKind::Image => "image",
                },
                token: token.to_string(),
            })
    }
}

/// Pick the motivator with the highest triad total
///
/// Candidates are visited in tie-break order and only a strictly greater
/// total displaces the leader.
pub fn winning_motivator(scores: &ColorScores) -> Motivator {
    let mut order = Motivator::TIE_BREAK_ORDER.into_iter();
    let mut best = order.next().unwrap_or(Motivator::Vitality);
    let mut best_total = scores.motivator_total(best);

    for motivator in order {
        let total = scores.motivator_total(motivator);
        if total > best_total {
            best = motivator;
            best_total = total;
        }
    }

    best
}

fn fallback_persona(motivator: Motivator) -> Persona {
    Persona {
        name: motivator.label().to_string(),
        description: String::new(),
    }
}

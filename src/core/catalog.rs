use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::core::personas::PERSONA_TABLE;
use crate::models::Persona;

/// One of the nine category labels a quiz token maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Blue,
    Green,
    Maroon,
    Orange,
    Pink,
    Purple,
    Red,
    Silver,
    Yellow,
}

impl Color {
    /// All colors in declaration order, which is also alphabetical order
    pub const ALL: [Color; 9] = [
        Color::Blue,
        Color::Green,
        Color::Maroon,
        Color::Orange,
        Color::Pink,
        Color::Purple,
        Color::Red,
        Color::Silver,
        Color::Yellow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Maroon => "Maroon",
            Color::Orange => "Orange",
            Color::Pink => "Pink",
            Color::Purple => "Purple",
            Color::Red => "Red",
            Color::Silver => "Silver",
            Color::Yellow => "Yellow",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three named triads partitioning the nine colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Motivator {
    #[serde(rename = "Strength Motivator")]
    Strength,
    #[serde(rename = "Vitality Motivator")]
    Vitality,
    #[serde(rename = "Creativity Motivator")]
    Creativity,
}

impl Motivator {
    /// Ranking priority applied when totals are equal
    pub const TIE_BREAK_ORDER: [Motivator; 3] =
        [Motivator::Vitality, Motivator::Strength, Motivator::Creativity];

    pub fn label(&self) -> &'static str {
        match self {
            Motivator::Strength => "Strength Motivator",
            Motivator::Vitality => "Vitality Motivator",
            Motivator::Creativity => "Creativity Motivator",
        }
    }

    pub fn colors(&self) -> [Color; 3] {
        match self {
            Motivator::Strength => [Color::Silver, Color::Blue, Color::Maroon],
            Motivator::Vitality => [Color::Pink, Color::Purple, Color::Red],
            Motivator::Creativity => [Color::Green, Color::Orange, Color::Yellow],
        }
    }
}

impl fmt::Display for Motivator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which lookup table resolves a round's tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Trait,
    Image,
}

pub const TRAITS_ROUND_1: [&str; 9] = [
    "Confident", "Curious", "Determined", "Imaginative", "Poised",
    "Compassionate", "Enthusiastic", "Bold", "Innovative",
];

pub const TRAITS_ROUND_2: [&str; 9] = [
    "Influential", "Adventurous", "Tough", "Expressive", "Polished",
    "Selfless", "Playful", "Independent", "Analytical",
];

pub const IMAGE_SETS: [&str; 9] = [
    "OrangeSet.jpg", "BrownSet.jpg", "RedSet.jpg", "YellowSet.jpg", "PurpleSet.jpg",
    "BlueSet.jpg", "GreenSet.jpg", "PinkSet.jpg", "BlackSet.jpg",
];

pub const MODES_OF_CONNECTION: [&str; 9] = [
    "Achieve With Me", "Explore With Me", "Strive With Me", "Create With Me", "Refine With Me",
    "Care With Me", "Enjoy With Me", "Defy With Me", "Invent With Me",
];

pub const AFFILIATIONS: [&str; 4] = ["Admitted Student", "Current Student", "Faculty/Staff", "Alum"];
pub const COLLEGE_LOCATIONS: [&str; 3] = ["In-state", "Out-of-state", "No preference"];
pub const COLLEGE_TYPES: [&str; 4] = ["Public", "Private", "Denominational", "No Preference"];
pub const COLLEGE_SIZES: [&str; 3] = ["2,500 or less", "2,501-7,500", "7,501+"];

/// Selection limits for each bounded multi-select
pub const BEST_PICKS: usize = 3;
pub const LEAST_PICKS: usize = 3;
pub const MODE_PICKS: usize = 2;

// Each token list is ordered by Color::ALL.
const TRAIT_LISTS: [[&str; 9]; 3] = [TRAITS_ROUND_1, TRAITS_ROUND_2, MODES_OF_CONNECTION];

const IMAGE_COLORS: [(&str, Color); 9] = [
    ("OrangeSet.jpg", Color::Orange),
    ("BrownSet.jpg", Color::Maroon),
    ("RedSet.jpg", Color::Red),
    ("YellowSet.jpg", Color::Yellow),
    ("PurpleSet.jpg", Color::Purple),
    ("BlueSet.jpg", Color::Blue),
    ("GreenSet.jpg", Color::Green),
    ("PinkSet.jpg", Color::Pink),
    ("BlackSet.jpg", Color::Silver),
];

/// Immutable reference data shared by the scorer and the HTTP layer
///
/// Built once at startup and shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Catalog {
    trait_colors: HashMap<&'static str, Color>,
    image_colors: HashMap<&'static str, Color>,
    personas: HashMap<&'static str, (&'static str, &'static str)>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::with_personas(PERSONA_TABLE)
    }

    /// Build a catalog over a custom `(key, name, description)` persona table
    pub(crate) fn with_personas(personas: &[(&'static str, &'static str, &'static str)]) -> Self {
        let trait_colors = TRAIT_LISTS
            .iter()
            .flat_map(|list| list.iter().copied().zip(Color::ALL))
            .collect();

        let image_colors = IMAGE_COLORS.iter().copied().collect();

        let personas = personas
            .iter()
            .map(|(key, name, description)| (*key, (*name, *description)))
            .collect();

        Self {
            trait_colors,
            image_colors,
            personas,
        }
    }

    /// Resolve a token to its color, `None` if the token is not catalogued
    pub fn color_of(&self, token: &str, kind: TokenKind) -> Option<Color> {
        match kind {
            TokenKind::Trait => self.trait_colors.get(token).copied(),
            TokenKind::Image => self.image_colors.get(token).copied(),
        }
    }

    /// Look up a persona by its exact `"{primary}-{secondary}"` key
    pub fn persona(&self, key: &str) -> Option<Persona> {
        self.personas.get(key).map(|(name, description)| Persona {
            name: name.to_string(),
            description: description.to_string(),
        })
    }

    /// Look up the persona for a color pair, trying both orderings
    pub fn persona_for_pair(&self, first: Color, second: Color) -> Option<Persona> {
        self.persona(&format!("{}-{}", first, second))
            .or_else(|| self.persona(&format!("{}-{}", second, first)))
    }

    pub fn persona_count(&self) -> usize {
        self.personas.len()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Net integer score per color for one scoring call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorScores(BTreeMap<Color, i32>);

impl ColorScores {
    pub fn new() -> Self {
        Self(Color::ALL.iter().map(|c| (*c, 0)).collect())
    }

    #[inline]
    pub fn add(&mut self, color: Color, delta: i32) {
        *self.0.entry(color).or_insert(0) += delta;
    }

    #[inline]
    pub fn get(&self, color: Color) -> i32 {
        self.0.get(&color).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Color, i32)> + '_ {
        self.0.iter().map(|(c, s)| (*c, *s))
    }

    /// Sum of the three colors in a motivator triad
    pub fn motivator_total(&self, motivator: Motivator) -> i32 {
        motivator.colors().iter().map(|c| self.get(*c)).sum()
    }

    /// Colors by score descending, ties broken by color name ascending
    pub fn ranked(&self) -> Vec<(Color, i32)> {
        let mut ranked: Vec<(Color, i32)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.as_str().cmp(b.0.as_str())));
        ranked
    }
}

impl Default for ColorScores {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_tables_cover_every_color() {
        let catalog = Catalog::new();
        for list in TRAIT_LISTS {
            let mut colors: Vec<Color> = list
                .iter()
                .map(|t| catalog.color_of(t, TokenKind::Trait).unwrap())
                .collect();
            colors.sort();
            assert_eq!(colors, Color::ALL.to_vec());
        }
    }

    #[test]
    fn test_known_token_colors() {
        let catalog = Catalog::new();
        assert_eq!(catalog.color_of("Confident", TokenKind::Trait), Some(Color::Blue));
        assert_eq!(catalog.color_of("Analytical", TokenKind::Trait), Some(Color::Yellow));
        assert_eq!(catalog.color_of("Defy With Me", TokenKind::Trait), Some(Color::Silver));
        assert_eq!(catalog.color_of("BrownSet.jpg", TokenKind::Image), Some(Color::Maroon));
        assert_eq!(catalog.color_of("BlackSet.jpg", TokenKind::Image), Some(Color::Silver));
    }

    #[test]
    fn test_tables_are_separate() {
        let catalog = Catalog::new();
        assert_eq!(catalog.color_of("BlueSet.jpg", TokenKind::Trait), None);
        assert_eq!(catalog.color_of("Confident", TokenKind::Image), None);
    }

    #[test]
    fn test_motivators_partition_colors() {
        let mut colors: Vec<Color> = Motivator::TIE_BREAK_ORDER
            .iter()
            .flat_map(|m| m.colors())
            .collect();
        colors.sort();
        assert_eq!(colors, Color::ALL.to_vec());
    }

    #[test]
    fn test_persona_catalog_size() {
        assert_eq!(Catalog::new().persona_count(), 81);
    }

    #[test]
    fn test_every_distinct_pair_resolves() {
        let catalog = Catalog::new();
        for a in Color::ALL {
            for b in Color::ALL {
                if a != b {
                    assert!(catalog.persona_for_pair(a, b).is_some(), "{}-{}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_absent_pair_has_no_persona() {
        let catalog = Catalog::with_personas(&[("Blue-Maroon", "Champion", "Champions lead.")]);

        assert_eq!(catalog.persona_count(), 1);
        assert_eq!(catalog.persona_for_pair(Color::Maroon, Color::Blue).unwrap().name, "Champion");
        assert!(catalog.persona_for_pair(Color::Green, Color::Orange).is_none());
        assert!(Catalog::new().persona_for_pair(Color::Blue, Color::Blue).is_none());
    }

    #[test]
    fn test_ranked_breaks_ties_by_name() {
        let mut scores = ColorScores::new();
        scores.add(Color::Yellow, 2);
        scores.add(Color::Green, 2);
        scores.add(Color::Red, 1);

        let ranked = scores.ranked();
        assert_eq!(ranked[0], (Color::Green, 2));
        assert_eq!(ranked[1], (Color::Yellow, 2));
        assert_eq!(ranked[2], (Color::Red, 1));
        assert_eq!(ranked[3], (Color::Blue, 0));
    }

    #[test]
    fn test_scores_serialize_by_label() {
        let mut scores = ColorScores::new();
        scores.add(Color::Maroon, -2);
        let json = serde_json::to_value(&scores).unwrap();
        assert_eq!(json["Maroon"], -2);
        assert_eq!(json.as_object().unwrap().len(), 9);
    }
}

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::filters::{matches_size, matches_state, matches_type, narrow_or_keep, normalize_url};
use crate::core::states::state_code;
use crate::models::{College, CollegeFilters, CollegeMatch, LocationPreference};

/// Default bounds for how many colleges a match returns
pub const DEFAULT_MIN_RESULTS: usize = 3;
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub colleges: Vec<CollegeMatch>,
    /// Size of the narrowed pool the sample was drawn from
    pub pool_size: usize,
}

/// College matcher - staged filtering with fallback, then random sampling
///
/// # Pipeline Stages
/// 1. Plausibility (non-empty name and website)
/// 2. Location (in-state / out-of-state)
/// 3. College type
/// 4. College size
/// 5. Shuffle and sample between `min_results` and `max_results` records
///
/// Stages 2 to 4 never empty the pool: a filter that matches nothing is skipped,
/// so a type or size miss leaves the location pool in place.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    min_results: usize,
    max_results: usize,
}

impl Matcher {
    pub fn new(min_results: usize, max_results: usize) -> Self {
        let min_results = min_results.max(1);
        Self {
            min_results,
            max_results: max_results.max(min_results),
        }
    }

    pub fn with_default_limits() -> Self {
        Self::new(DEFAULT_MIN_RESULTS, DEFAULT_MAX_RESULTS)
    }

    pub fn limits(&self) -> (usize, usize) {
        (self.min_results, self.max_results)
    }

    /// Find college matches using the thread-local random source
    pub fn find_matches(&self, filters: &CollegeFilters, pool: &[College]) -> MatchResult {
        self.match_with_rng(filters, pool, &mut rand::thread_rng())
    }

    /// Find college matches drawing randomness from `rng`
    pub fn match_with_rng<R: Rng + ?Sized>(
        &self,
        filters: &CollegeFilters,
        pool: &[College],
        rng: &mut R,
    ) -> MatchResult {
        let mut narrowed = self.narrow(filters, pool);
        let pool_size = narrowed.len();

        narrowed.shuffle(rng);

        let count = rng.gen_range(self.min_results..=self.max_results).min(pool_size);

        let colleges = narrowed
            .into_iter()
            .take(count)
            .map(|college| CollegeMatch {
                name: college.name.trim().to_string(),
                url: normalize_url(&college.website),
            })
            .collect::<Vec<_>>();

        tracing::info!(
            "Matched {} colleges from a pool of {} ({} in dataset)",
            colleges.len(),
            pool_size,
            pool.len()
        );

        MatchResult {
            colleges,
            pool_size,
        }
    }

    /// Apply the filter stages without sampling
    ///
    /// The returned pool keeps dataset order.
    pub fn narrow<'a>(&self, filters: &CollegeFilters, pool: &'a [College]) -> Vec<&'a College> {
        // Stage 1: drop records that cannot be shown
        let plausible: Vec<&College> = pool.iter().filter(|c| c.is_plausible()).collect();
        if plausible.len() < pool.len() {
            tracing::debug!(
                "Excluded {} implausible college records",
                pool.len() - plausible.len()
            );
        }

        // Stage 2: location
        let located = match (filters.location, state_code(&filters.state)) {
            (LocationPreference::InState, Some(code)) => {
                narrow_or_keep(plausible, "in-state", |c| matches_state(c, code))
            }
            (LocationPreference::OutOfState, Some(code)) => {
                narrow_or_keep(plausible, "out-of-state", |c| !matches_state(c, code))
            }
            (LocationPreference::NoPreference, _) => plausible,
            (_, None) => {
                if !filters.state.trim().is_empty() {
                    tracing::warn!("Unknown state {:?}, skipping location filter", filters.state);
                }
                plausible
            }
        };

        // Stage 3: college type
        let current = narrow_or_keep(located, "type", |c| {
            matches_type(c, filters.college_type)
        });

        // Stage 4: college size
        narrow_or_keep(current, "size", |c| matches_size(c, filters.college_size))
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_limits()
    }
}

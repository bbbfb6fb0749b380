mod config;
pub(crate) mod rules;

pub use config::{ScoreWeights, WeightsError, DEFAULT_WEIGHTS};

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::domain::{Candidate, Criterion, Listing};
use super::similarity::SkillMatcher;
use super::tables::MatchingTables;

/// Stateless calculator producing the five sub-scores and their weighted composite.
#[derive(Debug, Clone)]
pub struct ScoreCalculator {
    weights: ScoreWeights,
    matcher: SkillMatcher,
    tables: Arc<MatchingTables>,
}

impl ScoreCalculator {
    pub fn new(
        weights: ScoreWeights,
        matcher: SkillMatcher,
        tables: Arc<MatchingTables>,
    ) -> Result<Self, WeightsError> {
        weights.validate()?;
        Ok(Self {
            weights,
            matcher,
            tables,
        })
    }

    pub fn breakdown(&self, candidate: &Candidate, listing: &Listing) -> BTreeMap<Criterion, f64> {
        BTreeMap::from([
            (
                Criterion::Skills,
                rules::skills_score(&self.matcher, &listing.required_skills, &candidate.skills),
            ),
            (
                Criterion::Education,
                rules::education_score(&self.tables, candidate, listing),
            ),
            (
                Criterion::University,
                rules::university_score(
                    &listing.preferred_universities,
                    candidate.university.as_deref(),
                ),
            ),
            (
                Criterion::Experience,
                rules::experience_score(&self.tables, candidate),
            ),
            (
                Criterion::Location,
                rules::location_score(candidate.location.as_deref(), &listing.location),
            ),
        ])
    }

    pub fn score(&self, candidate: &Candidate, listing: &Listing) -> MatchScore {
        let breakdown = self.breakdown(candidate, listing);
        let weighted: f64 = breakdown
            .iter()
            .map(|(criterion, value)| value * self.weights.weight(*criterion))
            .sum();

        MatchScore {
            overall: weighted.clamp(0.0, 1.0),
            breakdown,
        }
    }
}

impl Default for ScoreCalculator {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
            matcher: SkillMatcher::default(),
            tables: Arc::new(MatchingTables::default()),
        }
    }
}

/// Composite score with the per-criterion values it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    pub overall: f64,
    pub breakdown: BTreeMap<Criterion, f64>,
}

impl MatchScore {
    pub fn sub_score(&self, criterion: Criterion) -> f64 {
        self.breakdown.get(&criterion).copied().unwrap_or_default()
    }
}

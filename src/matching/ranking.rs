use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::compatibility::{classify_compatibility, CompatibilityLabel};
use super::domain::{Candidate, CandidateId, Criterion, Listing, ListingId};
use super::qualification::QualificationGate;
use super::scoring::{MatchScore, ScoreCalculator};
use super::urgency::urgency_at;

/// Cut-offs applied while ranking in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingThresholds {
    /// Candidates at or below this score are dropped from a listing's ranking.
    pub candidate_min_score: f64,
    /// Listings at or below this score are dropped from a candidate's ranking.
    pub listing_min_score: f64,
    /// Multiplier applied to urgency when ordering listings for a candidate.
    pub urgency_weight: f64,
}

impl Default for RankingThresholds {
    fn default() -> Self {
        Self {
            candidate_min_score: 0.3,
            listing_min_score: 0.4,
            urgency_weight: 0.1,
        }
    }
}

/// One ranked pairing of a candidate and a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub candidate_id: CandidateId,
    pub listing_id: ListingId,
    pub overall: f64,
    pub breakdown: BTreeMap<Criterion, f64>,
    pub compatibility: CompatibilityLabel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_qualified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<f64>,
}

impl MatchResult {
    fn from_score(candidate: &Candidate, listing: &Listing, score: MatchScore) -> Self {
        Self {
            candidate_id: candidate.id.clone(),
            listing_id: listing.id.clone(),
            compatibility: classify_compatibility(score.overall),
            overall: score.overall,
            breakdown: score.breakdown,
            is_qualified: None,
            urgency: None,
        }
    }
}

/// Orders pools of candidates or listings. Equal sort keys fall back to the
/// ascending identifier so output is reproducible.
#[derive(Debug, Clone)]
pub struct Ranker {
    calculator: ScoreCalculator,
    gate: QualificationGate,
    thresholds: RankingThresholds,
}

impl Ranker {
    pub fn new(
        calculator: ScoreCalculator,
        gate: QualificationGate,
        thresholds: RankingThresholds,
    ) -> Self {
        Self {
            calculator,
            gate,
            thresholds,
        }
    }

    pub fn calculator(&self) -> &ScoreCalculator {
        &self.calculator
    }

    pub fn gate(&self) -> &QualificationGate {
        &self.gate
    }

    /// Candidates for a listing. The qualification gate is not applied here.
    pub fn rank_candidates_for_job(
        &self,
        listing: &Listing,
        candidates: &[Candidate],
        limit: usize,
    ) -> Vec<MatchResult> {
        let mut ranked: Vec<MatchResult> = candidates
            .iter()
            .map(|candidate| {
                let score = self.calculator.score(candidate, listing);
                MatchResult::from_score(candidate, listing, score)
            })
            .filter(|result| result.overall > self.thresholds.candidate_min_score)
            .collect();

        ranked.sort_by(|a, b| {
            descending(a.overall, b.overall).then_with(|| a.candidate_id.cmp(&b.candidate_id))
        });
        ranked.truncate(limit);

        debug!(
            listing_id = %listing.id,
            pool_size = candidates.len(),
            returned = ranked.len(),
            "ranked candidates for listing"
        );
        ranked
    }

    /// Listings for a candidate: qualified listings above the score floor,
    /// ordered by score plus weighted urgency.
    pub fn rank_listings_for_candidate(
        &self,
        candidate: &Candidate,
        listings: &[Listing],
        limit: usize,
        now: DateTime<Utc>,
    ) -> Vec<MatchResult> {
        let mut ranked: Vec<(f64, MatchResult)> = listings
            .iter()
            .map(|listing| {
                let score = self.calculator.score(candidate, listing);
                let mut result = MatchResult::from_score(candidate, listing, score);
                let urgency = urgency_at(listing, now);
                result.is_qualified = Some(self.gate.is_qualified(candidate, listing));
                result.urgency = Some(urgency);
                (result.overall + urgency * self.thresholds.urgency_weight, result)
            })
            .filter(|(_, result)| {
                result.is_qualified == Some(true)
                    && result.overall > self.thresholds.listing_min_score
            })
            .collect();

        ranked.sort_by(|(a_key, a), (b_key, b)| {
            descending(*a_key, *b_key).then_with(|| a.listing_id.cmp(&b.listing_id))
        });
        ranked.truncate(limit);

        debug!(
            candidate_id = %candidate.id,
            pool_size = listings.len(),
            returned = ranked.len(),
            "ranked listings for candidate"
        );
        ranked.into_iter().map(|(_, result)| result).collect()
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(
            ScoreCalculator::default(),
            QualificationGate::default(),
            RankingThresholds::default(),
        )
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

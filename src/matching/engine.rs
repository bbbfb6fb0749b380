use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::compatibility::{classify_compatibility, CompatibilityLabel};
use super::config::MatchingConfig;
use super::domain::{Candidate, Listing};
use super::qualification::{QualificationGate, QualificationReport};
use super::ranking::{MatchResult, Ranker};
use super::scoring::{MatchScore, ScoreCalculator, WeightsError};
use super::similarity::SkillMatcher;
use super::skill_gap::{SkillGapAnalyzer, SkillGapReport};
use super::tables::MatchingTables;

/// Entry point bundling every matching component behind one configuration.
///
/// The engine holds no mutable state; share it behind `Arc` across threads.
#[derive(Debug, Clone)]
pub struct MatchingEngine {
    ranker: Ranker,
    analyzer: SkillGapAnalyzer,
}

impl MatchingEngine {
    pub fn new(config: MatchingConfig, tables: MatchingTables) -> Result<Self, WeightsError> {
        let tables = Arc::new(tables);
        let matcher = SkillMatcher::new(config.skill_threshold);
        let calculator = ScoreCalculator::new(config.weights, matcher, Arc::clone(&tables))?;
        let gate = QualificationGate::new(config.missing_data_policy);

        Ok(Self {
            ranker: Ranker::new(calculator, gate, config.ranking),
            analyzer: SkillGapAnalyzer::new(matcher, tables),
        })
    }

    pub fn score(&self, candidate: &Candidate, listing: &Listing) -> MatchScore {
        self.ranker.calculator().score(candidate, listing)
    }

    pub fn is_qualified(&self, candidate: &Candidate, listing: &Listing) -> bool {
        self.ranker.gate().is_qualified(candidate, listing)
    }

    pub fn qualification_report(
        &self,
        candidate: &Candidate,
        listing: &Listing,
    ) -> QualificationReport {
        self.ranker.gate().evaluate(candidate, listing)
    }

    pub fn rank_candidates_for_job(
        &self,
        listing: &Listing,
        candidates: &[Candidate],
        limit: usize,
    ) -> Vec<MatchResult> {
        self.ranker.rank_candidates_for_job(listing, candidates, limit)
    }

    pub fn rank_listings_for_candidate(
        &self,
        candidate: &Candidate,
        listings: &[Listing],
        limit: usize,
        now: DateTime<Utc>,
    ) -> Vec<MatchResult> {
        self.ranker.rank_listings_for_candidate(candidate, listings, limit, now)
    }

    pub fn classify_compatibility(&self, score: f64) -> CompatibilityLabel {
        classify_compatibility(score)
    }

    pub fn analyze_skill_gap(&self, candidate: &Candidate, listing: &Listing) -> SkillGapReport {
        self.analyzer.analyze(candidate, listing)
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self {
            ranker: Ranker::default(),
            analyzer: SkillGapAnalyzer::default(),
        }
    }
}

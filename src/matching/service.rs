use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::domain::{Candidate, CandidateId, Listing, ListingId};
use super::engine::MatchingEngine;
use super::qualification::QualificationReport;
use super::ranking::MatchResult;
use super::repository::{ProfileRepository, RepositoryError};
use super::scoring::MatchScore;
use super::skill_gap::SkillGapReport;

/// Service resolving identifiers through the repository before running the engine.
pub struct MatchingService<R> {
    repository: Arc<R>,
    engine: Arc<MatchingEngine>,
}

impl<R> MatchingService<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: Arc<R>, engine: Arc<MatchingEngine>) -> Self {
        Self { repository, engine }
    }

    pub fn engine(&self) -> &MatchingEngine {
        &self.engine
    }

    /// Composite score and breakdown for one candidate/listing pair.
    pub fn score_pair(
        &self,
        candidate_id: &CandidateId,
        listing_id: &ListingId,
    ) -> Result<MatchScore, MatchServiceError> {
        let candidate = self.candidate(candidate_id)?;
        let listing = self.listing(listing_id)?;
        Ok(self.engine.score(&candidate, &listing))
    }

    pub fn qualification(
        &self,
        candidate_id: &CandidateId,
        listing_id: &ListingId,
    ) -> Result<QualificationReport, MatchServiceError> {
        let candidate = self.candidate(candidate_id)?;
        let listing = self.listing(listing_id)?;
        Ok(self.engine.qualification_report(&candidate, &listing))
    }

    /// Rank every active candidate against a listing.
    pub fn candidates_for_listing(
        &self,
        listing_id: &ListingId,
        limit: usize,
    ) -> Result<Vec<MatchResult>, MatchServiceError> {
        let listing = self.listing(listing_id)?;
        let pool = self.repository.active_candidates()?;
        let ranked = self.engine.rank_candidates_for_job(&listing, &pool, limit);

        info!(
            listing_id = %listing.id,
            pool_size = pool.len(),
            returned = ranked.len(),
            "candidate ranking complete"
        );
        Ok(ranked)
    }

    /// Rank every active listing for a candidate, with urgency measured at `now`.
    pub fn listings_for_candidate(
        &self,
        candidate_id: &CandidateId,
        limit: usize,
        now: DateTime<Utc>,
    ) -> Result<Vec<MatchResult>, MatchServiceError> {
        let candidate = self.candidate(candidate_id)?;
        let pool = self.repository.active_listings()?;
        let ranked = self
            .engine
            .rank_listings_for_candidate(&candidate, &pool, limit, now);

        info!(
            candidate_id = %candidate.id,
            pool_size = pool.len(),
            returned = ranked.len(),
            "listing ranking complete"
        );
        Ok(ranked)
    }

    pub fn skill_gap(
        &self,
        candidate_id: &CandidateId,
        listing_id: &ListingId,
    ) -> Result<SkillGapReport, MatchServiceError> {
        let candidate = self.candidate(candidate_id)?;
        let listing = self.listing(listing_id)?;
        Ok(self.engine.analyze_skill_gap(&candidate, &listing))
    }

    fn candidate(&self, id: &CandidateId) -> Result<Candidate, MatchServiceError> {
        debug!(candidate_id = %id, "fetching candidate");
        self.repository
            .fetch_candidate(id)?
            .ok_or_else(|| MatchServiceError::CandidateNotFound(id.clone()))
    }

    fn listing(&self, id: &ListingId) -> Result<Listing, MatchServiceError> {
        debug!(listing_id = %id, "fetching listing");
        self.repository
            .fetch_listing(id)?
            .ok_or_else(|| MatchServiceError::ListingNotFound(id.clone()))
    }
}

/// Error raised by the matching service.
#[derive(Debug, thiserror::Error)]
pub enum MatchServiceError {
    #[error("candidate {0} not found")]
    CandidateNotFound(CandidateId),
    #[error("listing {0} not found")]
    ListingNotFound(ListingId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

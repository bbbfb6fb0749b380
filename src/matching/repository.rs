use std::collections::BTreeMap;

use super::domain::{Candidate, CandidateId, Listing, ListingId};

/// Read-only data access for candidate and listing snapshots.
pub trait ProfileRepository: Send + Sync {
    fn fetch_candidate(&self, id: &CandidateId) -> Result<Option<Candidate>, RepositoryError>;
    fn fetch_listing(&self, id: &ListingId) -> Result<Option<Listing>, RepositoryError>;
    fn active_candidates(&self) -> Result<Vec<Candidate>, RepositoryError>;
    fn active_listings(&self) -> Result<Vec<Listing>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Snapshot store backed by ordered maps, used by the CLI and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfiles {
    candidates: BTreeMap<CandidateId, Candidate>,
    listings: BTreeMap<ListingId, Listing>,
}

impl InMemoryProfiles {
    pub fn new(candidates: Vec<Candidate>, listings: Vec<Listing>) -> Self {
        let mut profiles = Self::default();
        profiles.extend_candidates(candidates);
        profiles.extend_listings(listings);
        profiles
    }

    /// Later records replace earlier ones with the same identifier.
    pub fn extend_candidates(&mut self, candidates: impl IntoIterator<Item = Candidate>) {
        for candidate in candidates {
            self.candidates.insert(candidate.id.clone(), candidate);
        }
    }

    pub fn extend_listings(&mut self, listings: impl IntoIterator<Item = Listing>) {
        for listing in listings {
            self.listings.insert(listing.id.clone(), listing);
        }
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn listing_count(&self) -> usize {
        self.listings.len()
    }
}

impl ProfileRepository for InMemoryProfiles {
    fn fetch_candidate(&self, id: &CandidateId) -> Result<Option<Candidate>, RepositoryError> {
        Ok(self.candidates.get(id).cloned())
    }

    fn fetch_listing(&self, id: &ListingId) -> Result<Option<Listing>, RepositoryError> {
        Ok(self.listings.get(id).cloned())
    }

    fn active_candidates(&self) -> Result<Vec<Candidate>, RepositoryError> {
        Ok(self
            .candidates
            .values()
            .filter(|candidate| candidate.active)
            .cloned()
            .collect())
    }

    fn active_listings(&self) -> Result<Vec<Listing>, RepositoryError> {
        Ok(self
            .listings
            .values()
            .filter(|listing| listing.active)
            .cloned()
            .collect())
    }
}

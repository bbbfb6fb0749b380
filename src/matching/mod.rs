//! Candidate-to-listing matching: fuzzy skill similarity, weighted scoring,
//! a hard qualification gate, urgency, compatibility bands, and ranking in
//! both directions.
//!
//! Everything below `engine` is pure and synchronous over already-fetched
//! snapshots. `service` adds identifier resolution through a
//! [`ProfileRepository`].

pub mod compatibility;
pub mod config;
pub mod domain;
pub mod engine;
pub mod qualification;
pub mod ranking;
pub mod repository;
pub mod scoring;
pub mod service;
pub mod similarity;
pub mod skill_gap;
pub mod tables;
pub mod urgency;

#[cfg(test)]
mod tests;

pub use compatibility::{classify_compatibility, CompatibilityLabel};
pub use config::MatchingConfig;
pub use domain::{
    Candidate, CandidateId, Criterion, Listing, ListingCategory, ListingId, ListingRequirements,
    NumericField, Qualifications, SubjectList, YearOfStudy,
};
pub use engine::MatchingEngine;
pub use qualification::{
    GateRule, MissingDataPolicy, QualificationFailure, QualificationGate, QualificationReport,
};
pub use ranking::{MatchResult, Ranker, RankingThresholds};
pub use repository::{InMemoryProfiles, ProfileRepository, RepositoryError};
pub use scoring::{MatchScore, ScoreCalculator, ScoreWeights, WeightsError};
pub use service::{MatchServiceError, MatchingService};
pub use similarity::{similarity, SkillMatcher, SKILL_MATCH_THRESHOLD};
pub use skill_gap::{SkillGapAnalyzer, SkillGapReport, SkillRecommendation};
pub use tables::MatchingTables;
pub use urgency::urgency_at;

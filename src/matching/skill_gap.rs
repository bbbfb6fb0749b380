use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::domain::{Candidate, CandidateId, Listing, ListingId};
use super::similarity::SkillMatcher;
use super::tables::MatchingTables;

/// Learning resources suggested for one missing skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecommendation {
    pub skill: String,
    pub resources: Vec<String>,
}

/// Missing and covered skills of a candidate against one listing.
///
/// `existing_skills` is indexed by the candidate's skills, so its length need
/// not equal the number of required skills that were covered, and `coverage`
/// may exceed 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGapReport {
    pub candidate_id: CandidateId,
    pub listing_id: ListingId,
    pub missing_skills: Vec<String>,
    pub existing_skills: Vec<String>,
    pub coverage: f64,
    pub recommendations: Vec<SkillRecommendation>,
}

#[derive(Debug, Clone)]
pub struct SkillGapAnalyzer {
    matcher: SkillMatcher,
    tables: Arc<MatchingTables>,
}

impl SkillGapAnalyzer {
    pub fn new(matcher: SkillMatcher, tables: Arc<MatchingTables>) -> Self {
        Self { matcher, tables }
    }

    pub fn analyze(&self, candidate: &Candidate, listing: &Listing) -> SkillGapReport {
        let required = &listing.required_skills;
        let missing_skills: Vec<String> = self
            .matcher
            .uncovered(&candidate.skills, required)
            .into_iter()
            .map(str::to_string)
            .collect();
        let existing_skills: Vec<String> = self
            .matcher
            .covered(&candidate.skills, required)
            .into_iter()
            .map(str::to_string)
            .collect();

        let coverage = if required.is_empty() {
            0.0
        } else {
            existing_skills.len() as f64 / required.len() as f64
        };

        let recommendations = missing_skills
            .iter()
            .map(|skill| SkillRecommendation {
                skill: skill.clone(),
                resources: self.tables.resources_for(skill),
            })
            .collect();

        SkillGapReport {
            candidate_id: candidate.id.clone(),
            listing_id: listing.id.clone(),
            missing_skills,
            existing_skills,
            coverage,
            recommendations,
        }
    }
}

impl Default for SkillGapAnalyzer {
    fn default() -> Self {
        Self::new(SkillMatcher::default(), Arc::new(MatchingTables::default()))
    }
}

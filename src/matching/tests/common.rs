use chrono::{DateTime, TimeZone, Utc};

use crate::matching::domain::{
    Candidate, CandidateId, Listing, ListingCategory, ListingId, ListingRequirements,
    NumericField, Qualifications, SubjectList, YearOfStudy,
};
use crate::matching::repository::{ProfileRepository, RepositoryError};
use crate::matching::{MatchingConfig, MatchingEngine, MatchingTables, MissingDataPolicy};

pub(super) fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(super) fn engine() -> MatchingEngine {
    MatchingEngine::default()
}

pub(super) fn strict_engine() -> MatchingEngine {
    let config = MatchingConfig {
        missing_data_policy: MissingDataPolicy::Fail,
        ..MatchingConfig::default()
    };
    MatchingEngine::new(config, MatchingTables::default()).expect("default weights are valid")
}

pub(super) fn requirements() -> ListingRequirements {
    ListingRequirements {
        min_gpa: Some(NumericField::Number(3.0)),
        required_qualifications: strings(&["Mathematics"]),
        course_keywords: Some("Computer Science / Software Engineering".to_string()),
        min_experience: Some(NumericField::Number(1.0)),
        portfolio_required: false,
    }
}

/// Leeds internship that the strong candidate clears on every rule.
pub(super) fn listing(id: &str) -> Listing {
    Listing {
        title: "Frontend Intern".to_string(),
        required_skills: strings(&["JavaScript", "SQL"]),
        preferred_universities: strings(&["University of Leeds"]),
        description: "Internship for computer science students".to_string(),
        location: "Leeds".to_string(),
        requirements: Some(requirements()),
        ..Listing::new(id, ListingCategory::Internship)
    }
}

/// Scores 0.925 against [`listing`] and passes its gate.
pub(super) fn strong_candidate(id: &str) -> Candidate {
    Candidate {
        name: Some("Ada Strong".to_string()),
        skills: strings(&["JavaScript", "SQL", "React"]),
        course: Some("Computer Science".to_string()),
        year_of_study: YearOfStudy::Third,
        university: Some("University of Leeds".to_string()),
        gpa: Some(NumericField::Number(3.6)),
        location: Some("Leeds, UK".to_string()),
        qualifications: Some(Qualifications {
            subjects: Some(SubjectList::Text("Mathematics, Computing".to_string())),
            portfolio: true,
        }),
        ..Candidate::new(id)
    }
}

/// Scores 0.535 against [`listing`].
pub(super) fn middling_candidate(id: &str) -> Candidate {
    Candidate {
        skills: strings(&["JavaScript"]),
        course: Some("Business Computing".to_string()),
        year_of_study: YearOfStudy::Second,
        university: Some("UCL".to_string()),
        location: Some("Leeds".to_string()),
        ..Candidate::new(id)
    }
}

/// Scores 0.255 against [`listing`].
pub(super) fn weak_candidate(id: &str) -> Candidate {
    Candidate {
        skills: strings(&["Painting"]),
        course: Some("History of Art".to_string()),
        year_of_study: YearOfStudy::First,
        university: Some("York St John".to_string()),
        location: Some("York".to_string()),
        ..Candidate::new(id)
    }
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub(super) struct UnavailableRepository;

impl ProfileRepository for UnavailableRepository {
    fn fetch_candidate(&self, _id: &CandidateId) -> Result<Option<Candidate>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch_listing(&self, _id: &ListingId) -> Result<Option<Listing>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn active_candidates(&self) -> Result<Vec<Candidate>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn active_listings(&self) -> Result<Vec<Listing>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

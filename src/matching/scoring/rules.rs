use crate::matching::domain::{Candidate, Listing};
use crate::matching::similarity::SkillMatcher;
use crate::matching::tables::MatchingTables;

const NEUTRAL_SCORE: f64 = 0.5;
const COURSE_KEYWORD_WEIGHT: f64 = 0.3;
const YEAR_RELEVANCE_WEIGHT: f64 = 0.2;
const PREFERRED_UNIVERSITY_SCORE: f64 = 1.0;
const OTHER_UNIVERSITY_SCORE: f64 = 0.2;
const SAME_LOCALITY_SCORE: f64 = 1.0;
const OTHER_LOCALITY_SCORE: f64 = 0.3;
const MIN_KEYWORD_CHARS: usize = 4;

/// Share of required skills covered by the candidate. Not capped at 1.0.
pub(crate) fn skills_score(
    matcher: &SkillMatcher,
    required_skills: &[String],
    candidate_skills: &[String],
) -> f64 {
    if required_skills.is_empty() {
        return NEUTRAL_SCORE;
    }

    let matched = matcher.covered(candidate_skills, required_skills).len();
    matched as f64 / required_skills.len() as f64
}

pub(crate) fn education_score(
    tables: &MatchingTables,
    candidate: &Candidate,
    listing: &Listing,
) -> f64 {
    let keyword_ratio = candidate
        .course
        .as_deref()
        .map(|course| course_keyword_ratio(course, &listing.searchable_text()))
        .unwrap_or(0.0);
    let relevance = tables.year_relevance(candidate.year_of_study, listing.category);

    let score = NEUTRAL_SCORE
        + keyword_ratio * COURSE_KEYWORD_WEIGHT
        + relevance * YEAR_RELEVANCE_WEIGHT;
    score.min(1.0)
}

/// Fraction of the course name's longer words that appear in the listing text.
pub(crate) fn course_keyword_ratio(course: &str, listing_text: &str) -> f64 {
    let haystack = listing_text.to_lowercase();
    let keywords: Vec<String> = course
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_KEYWORD_CHARS)
        .map(str::to_lowercase)
        .collect();

    if keywords.is_empty() {
        return 0.0;
    }

    let matched = keywords
        .iter()
        .filter(|keyword| haystack.contains(keyword.as_str()))
        .count();
    matched as f64 / keywords.len() as f64
}

pub(crate) fn university_score(preferred: &[String], university: Option<&str>) -> f64 {
    if preferred.is_empty() {
        return NEUTRAL_SCORE;
    }

    let Some(university) = university.map(str::trim).filter(|name| !name.is_empty()) else {
        return OTHER_UNIVERSITY_SCORE;
    };

    let university = university.to_lowercase();
    if preferred
        .iter()
        .any(|name| name.trim().to_lowercase() == university)
    {
        PREFERRED_UNIVERSITY_SCORE
    } else {
        OTHER_UNIVERSITY_SCORE
    }
}

pub(crate) fn experience_score(tables: &MatchingTables, candidate: &Candidate) -> f64 {
    tables.experience_for(candidate.year_of_study)
}

pub(crate) fn location_score(candidate_location: Option<&str>, listing_location: &str) -> f64 {
    let Some(candidate_location) = candidate_location.filter(|value| !value.trim().is_empty())
    else {
        return NEUTRAL_SCORE;
    };

    if primary_locality(candidate_location) == primary_locality(listing_location) {
        SAME_LOCALITY_SCORE
    } else {
        OTHER_LOCALITY_SCORE
    }
}

/// Text before the first comma, trimmed and lowercased ("Leeds, UK" -> "leeds").
pub(crate) fn primary_locality(location: &str) -> String {
    location
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::domain::{ListingCategory, YearOfStudy};

    fn skills(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn skills_ratio_can_exceed_one() {
        let matcher = SkillMatcher::default();
        let required = skills(&["React"]);
        let candidate = skills(&["React", "react", "ReactJS"]);

        let score = skills_score(&matcher, &required, &candidate);
        assert!(score > 1.0, "expected unbounded ratio, got {score}");
    }

    #[test]
    fn course_keywords_ignore_short_words() {
        let ratio = course_keyword_ratio(
            "BSc in Computer Science",
            "We want students of computer engineering",
        );
        assert!((ratio - 0.5).abs() < 1e-9);
        assert_eq!(course_keyword_ratio("BA Art", "art gallery"), 0.0);
    }

    #[test]
    fn education_is_capped_at_one() {
        let tables = MatchingTables::default();
        let mut candidate = Candidate::new("c-1");
        candidate.course = Some("Computer Science".to_string());
        candidate.year_of_study = YearOfStudy::FifthPlus;
        let mut listing = Listing::new("l-1", ListingCategory::FullTime);
        listing.description = "Computer science graduates".to_string();

        assert_eq!(education_score(&tables, &candidate, &listing), 1.0);
    }

    #[test]
    fn education_without_course_uses_year_relevance_only() {
        let tables = MatchingTables::default();
        let mut candidate = Candidate::new("c-1");
        candidate.year_of_study = YearOfStudy::Second;
        let listing = Listing::new("l-1", ListingCategory::Internship);

        let score = education_score(&tables, &candidate, &listing);
        assert!((score - (0.5 + 0.9 * 0.2)).abs() < 1e-9);
    }

    #[test]
    fn university_preferences() {
        let preferred = skills(&["University of Leeds", "UCL"]);
        assert_eq!(university_score(&[], Some("X")), 0.5);
        assert_eq!(university_score(&preferred, Some("ucl")), 1.0);
        assert_eq!(university_score(&preferred, Some("Oxford")), 0.2);
        assert_eq!(university_score(&preferred, None), 0.2);
    }

    #[test]
    fn location_compares_primary_locality() {
        assert_eq!(location_score(None, "Leeds"), 0.5);
        assert_eq!(location_score(Some("  "), "Leeds"), 0.5);
        assert_eq!(location_score(Some("leeds, West Yorkshire"), " Leeds , UK"), 1.0);
        assert_eq!(location_score(Some("York"), "Leeds, UK"), 0.3);
    }
}

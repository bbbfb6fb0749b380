use super::common::*;
use crate::matching::domain::{Candidate, Criterion, Listing, ListingCategory, YearOfStudy};
use crate::matching::CompatibilityLabel;

#[test]
fn fuzzy_skill_match_counts_case_variants() {
    let engine = engine();
    let mut listing = Listing::new("l-1", ListingCategory::Internship);
    listing.required_skills = strings(&["JavaScript", "SQL"]);
    let mut candidate = Candidate::new("c-1");
    candidate.skills = strings(&["Javascript", "Python"]);

    let score = engine.score(&candidate, &listing);

    assert_close(score.sub_score(Criterion::Skills), 0.5);
}

#[test]
fn empty_required_skills_are_neutral() {
    let engine = engine();
    let listing = Listing::new("l-1", ListingCategory::FullTime);
    let candidate = strong_candidate("c-1");

    let score = engine.score(&candidate, &listing);

    assert_eq!(score.sub_score(Criterion::Skills), 0.5);
}

#[test]
fn empty_preference_list_does_not_penalize_university() {
    let engine = engine();
    let listing = Listing::new("l-1", ListingCategory::PartTime);
    let mut candidate = Candidate::new("c-1");
    candidate.university = Some("X".to_string());

    let score = engine.score(&candidate, &listing);

    assert_eq!(score.sub_score(Criterion::University), 0.5);
}

#[test]
fn final_year_candidate_against_internship() {
    let engine = engine();
    let listing = Listing::new("l-1", ListingCategory::Internship);
    let mut candidate = Candidate::new("c-1");
    candidate.year_of_study = YearOfStudy::FifthPlus;

    let score = engine.score(&candidate, &listing);

    assert_eq!(score.sub_score(Criterion::Experience), 1.0);
    // no course, so education is the base plus the year relevance term (0.3 * 0.2)
    assert_close(score.sub_score(Criterion::Education), 0.5 + 0.3 * 0.2);
}

#[test]
fn strong_candidate_composite_is_weighted_sum() {
    let engine = engine();
    let score = engine.score(&strong_candidate("c-1"), &listing("l-1"));

    assert_eq!(score.breakdown.len(), Criterion::ALL.len());
    assert_close(score.sub_score(Criterion::Skills), 1.0);
    assert_close(score.sub_score(Criterion::Education), 0.94);
    assert_close(score.sub_score(Criterion::University), 1.0);
    assert_close(score.sub_score(Criterion::Experience), 0.6);
    assert_close(score.sub_score(Criterion::Location), 1.0);
    assert_close(score.overall, 0.925);
    assert_eq!(
        engine.classify_compatibility(score.overall),
        CompatibilityLabel::Excellent
    );
}

#[test]
fn thin_profiles_score_from_neutral_defaults() {
    let engine = engine();
    let score = engine.score(
        &Candidate::new("c-1"),
        &Listing::new("l-1", ListingCategory::Other),
    );

    assert_close(score.sub_score(Criterion::Education), 0.6);
    assert_close(score.overall, 0.525);
}

#[test]
fn composite_is_clamped_even_when_skills_ratio_exceeds_one() {
    let engine = engine();
    let mut listing = listing("l-1");
    listing.required_skills = strings(&["React"]);
    let mut candidate = strong_candidate("c-1");
    candidate.skills = strings(&["React", "react", "ReactJS", "React Native"]);

    let score = engine.score(&candidate, &listing);

    assert_close(score.sub_score(Criterion::Skills), 4.0);
    assert_eq!(score.overall, 1.0);
}

#[test]
fn overall_stays_within_unit_interval() {
    let engine = engine();
    let candidates = [
        strong_candidate("c-1"),
        middling_candidate("c-2"),
        weak_candidate("c-3"),
        Candidate::new("c-4"),
    ];
    let listings = [
        listing("l-1"),
        Listing::new("l-2", ListingCategory::FullTime),
        Listing::new("l-3", ListingCategory::Other),
    ];

    for candidate in &candidates {
        for listing in &listings {
            let overall = engine.score(candidate, listing).overall;
            assert!(
                (0.0..=1.0).contains(&overall),
                "{} vs {} scored {overall}",
                candidate.id,
                listing.id
            );
        }
    }
}

#[test]
fn scoring_is_idempotent() {
    let engine = engine();
    let candidate = middling_candidate("c-1");
    let listing = listing("l-1");

    assert_eq!(
        engine.score(&candidate, &listing),
        engine.score(&candidate, &listing)
    );
}

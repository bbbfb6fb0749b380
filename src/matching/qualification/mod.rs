//! Hard eligibility gate evaluated independently of the numeric score.
//!
//! A rule only runs when the listing imposes it. When the listing imposes a rule
//! but the candidate (or a malformed listing value) gives nothing to compare,
//! [`MissingDataPolicy`] decides the outcome. The minimum-GPA rule is the
//! exception: it fails whenever either GPA is absent or not numeric.

mod policy;

pub use policy::{GateRule, MissingDataPolicy, QualificationFailure, QualificationReport};

use super::domain::{Candidate, Listing, ListingRequirements};

const MIN_COURSE_TOKEN_CHARS: usize = 4;

#[derive(Debug, Clone, Copy, Default)]
pub struct QualificationGate {
    policy: MissingDataPolicy,
}

impl QualificationGate {
    pub fn new(policy: MissingDataPolicy) -> Self {
        Self { policy }
    }

    pub fn is_qualified(&self, candidate: &Candidate, listing: &Listing) -> bool {
        self.evaluate(candidate, listing).passed()
    }

    pub fn evaluate(&self, candidate: &Candidate, listing: &Listing) -> QualificationReport {
        let Some(requirements) = listing.requirements.as_ref() else {
            return QualificationReport {
                failures: vec![QualificationFailure::RequirementsMissing],
            };
        };

        let mut failures = Vec::new();
        self.check_gpa(candidate, requirements, &mut failures);
        self.check_qualifications(candidate, requirements, &mut failures);
        self.check_course(candidate, requirements, &mut failures);
        self.check_experience(candidate, requirements, &mut failures);
        check_portfolio(candidate, requirements, &mut failures);

        QualificationReport { failures }
    }

    fn missing(&self, rule: GateRule, failures: &mut Vec<QualificationFailure>) {
        if self.policy == MissingDataPolicy::Fail {
            failures.push(QualificationFailure::MissingData { rule });
        }
    }

    fn check_gpa(
        &self,
        candidate: &Candidate,
        requirements: &ListingRequirements,
        failures: &mut Vec<QualificationFailure>,
    ) {
        let Some(minimum) = requirements.min_gpa.as_ref() else {
            return;
        };

        let required = minimum.value();
        let actual = candidate.gpa.as_ref().and_then(|gpa| gpa.value());
        match (required, actual) {
            (Some(required), Some(actual)) if actual < required => {
                failures.push(QualificationFailure::GpaBelowMinimum { required, actual });
            }
            (Some(_), Some(_)) => {}
            _ => failures.push(QualificationFailure::GpaUnverifiable),
        }
    }

    fn check_qualifications(
        &self,
        candidate: &Candidate,
        requirements: &ListingRequirements,
        failures: &mut Vec<QualificationFailure>,
    ) {
        let required: Vec<&str> = requirements
            .required_qualifications
            .iter()
            .map(|qualification| qualification.trim())
            .filter(|qualification| !qualification.is_empty())
            .collect();
        if required.is_empty() {
            return;
        }

        let subjects: Vec<String> = candidate
            .qualifications
            .as_ref()
            .and_then(|qualifications| qualifications.subjects.as_ref())
            .map(|subjects| {
                subjects
                    .normalized()
                    .into_iter()
                    .map(|subject| subject.to_lowercase())
                    .collect()
            })
            .unwrap_or_default();
        if subjects.is_empty() {
            self.missing(GateRule::RequiredQualifications, failures);
            return;
        }

        for qualification in required {
            let needle = qualification.to_lowercase();
            if !subjects.iter().any(|subject| subject.contains(&needle)) {
                failures.push(QualificationFailure::QualificationMissing {
                    qualification: qualification.to_string(),
                });
            }
        }
    }

    fn check_course(
        &self,
        candidate: &Candidate,
        requirements: &ListingRequirements,
        failures: &mut Vec<QualificationFailure>,
    ) {
        let Some(course_text) = requirements
            .course_keywords
            .as_deref()
            .filter(|text| !text.trim().is_empty())
        else {
            return;
        };

        let Some(course) = candidate
            .course
            .as_deref()
            .filter(|course| !course.trim().is_empty())
        else {
            self.missing(GateRule::CourseRelevance, failures);
            return;
        };

        let course = course.to_lowercase();
        let relevant = course_text
            .split(|c: char| c.is_whitespace() || c == '/' || c == '&')
            .filter(|token| token.chars().count() >= MIN_COURSE_TOKEN_CHARS)
            .any(|token| course.contains(&token.to_lowercase()));

        if !relevant {
            failures.push(QualificationFailure::CourseNotRelevant);
        }
    }

    fn check_experience(
        &self,
        candidate: &Candidate,
        requirements: &ListingRequirements,
        failures: &mut Vec<QualificationFailure>,
    ) {
        let Some(minimum) = requirements.min_experience.as_ref() else {
            return;
        };

        let required = minimum.value().map(|value| value.trunc() as i64);
        let actual = candidate.year_of_study.experience_ordinal();
        match (required, actual) {
            (Some(required), Some(actual)) if i64::from(actual) < required => {
                failures.push(QualificationFailure::InsufficientExperience { required, actual });
            }
            (Some(_), Some(_)) => {}
            _ => self.missing(GateRule::Experience, failures),
        }
    }
}

fn check_portfolio(
    candidate: &Candidate,
    requirements: &ListingRequirements,
    failures: &mut Vec<QualificationFailure>,
) {
    let has_portfolio = candidate
        .qualifications
        .as_ref()
        .is_some_and(|qualifications| qualifications.portfolio);

    if requirements.portfolio_required && !has_portfolio {
        failures.push(QualificationFailure::PortfolioMissing);
    }
}

use serde::{Deserialize, Serialize};

/// What the gate does when a listing imposes a rule the candidate has no data for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingDataPolicy {
    /// Skip the rule.
    #[default]
    Pass,
    /// Treat the rule as failed.
    Fail,
}

impl MissingDataPolicy {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pass" | "skip" | "open" => Some(Self::Pass),
            "fail" | "closed" => Some(Self::Fail),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MissingDataPolicy::Pass => "pass",
            MissingDataPolicy::Fail => "fail",
        }
    }
}

/// Individual eligibility rules evaluated by the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateRule {
    RequiredQualifications,
    CourseRelevance,
    Experience,
}

impl GateRule {
    pub const fn label(self) -> &'static str {
        match self {
            GateRule::RequiredQualifications => "required qualifications",
            GateRule::CourseRelevance => "course relevance",
            GateRule::Experience => "experience",
        }
    }
}

/// Reason a candidate did not clear the gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum QualificationFailure {
    RequirementsMissing,
    GpaBelowMinimum { required: f64, actual: f64 },
    GpaUnverifiable,
    QualificationMissing { qualification: String },
    CourseNotRelevant,
    InsufficientExperience { required: i64, actual: u8 },
    PortfolioMissing,
    MissingData { rule: GateRule },
}

impl QualificationFailure {
    pub fn summary(&self) -> String {
        match self {
            QualificationFailure::RequirementsMissing => {
                "listing has no requirements block".to_string()
            }
            QualificationFailure::GpaBelowMinimum { required, actual } => {
                format!("GPA {actual:.2} below minimum {required:.2}")
            }
            QualificationFailure::GpaUnverifiable => {
                "GPA missing or not numeric while a minimum is required".to_string()
            }
            QualificationFailure::QualificationMissing { qualification } => {
                format!("missing required qualification '{qualification}'")
            }
            QualificationFailure::CourseNotRelevant => {
                "course does not match the listing's course requirement".to_string()
            }
            QualificationFailure::InsufficientExperience { required, actual } => {
                format!("{actual} year(s) of experience, {required} required")
            }
            QualificationFailure::PortfolioMissing => "portfolio required".to_string(),
            QualificationFailure::MissingData { rule } => {
                format!("no data to evaluate {} rule", rule.label())
            }
        }
    }
}

/// Outcome of running every gate rule against a candidate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QualificationReport {
    pub failures: Vec<QualificationFailure>,
}

impl QualificationReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn summary(&self) -> String {
        if self.failures.is_empty() {
            return "qualified".to_string();
        }

        let reasons: Vec<String> = self.failures.iter().map(|f| f.summary()).collect();
        format!("not qualified: {}", reasons.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_policy_names() {
        assert_eq!(MissingDataPolicy::parse("PASS"), Some(MissingDataPolicy::Pass));
        assert_eq!(MissingDataPolicy::parse(" fail "), Some(MissingDataPolicy::Fail));
        assert_eq!(MissingDataPolicy::parse("maybe"), None);
        assert_eq!(MissingDataPolicy::default(), MissingDataPolicy::Pass);
    }

    #[test]
    fn report_summary_lists_reasons() {
        let report = QualificationReport {
            failures: vec![
                QualificationFailure::GpaBelowMinimum {
                    required: 3.5,
                    actual: 3.2,
                },
                QualificationFailure::PortfolioMissing,
            ],
        };

        assert!(!report.passed());
        assert_eq!(
            report.summary(),
            "not qualified: GPA 3.20 below minimum 3.50; portfolio required"
        );
        assert_eq!(QualificationReport::default().summary(), "qualified");
    }
}

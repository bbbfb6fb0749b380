use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier wrapper for candidate profiles.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(pub String);

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for opportunity listings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(pub String);

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Year of study recorded on a candidate profile.
///
/// Anything outside `1`..`4` and `5+` deserializes to `Unknown` so scoring can
/// fall back to its neutral values instead of rejecting the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum YearOfStudy {
    First,
    Second,
    Third,
    Fourth,
    FifthPlus,
    #[default]
    Unknown,
}

impl YearOfStudy {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "1" => Self::First,
            "2" => Self::Second,
            "3" => Self::Third,
            "4" => Self::Fourth,
            "5+" => Self::FifthPlus,
            _ => Self::Unknown,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            YearOfStudy::First => "1",
            YearOfStudy::Second => "2",
            YearOfStudy::Third => "3",
            YearOfStudy::Fourth => "4",
            YearOfStudy::FifthPlus => "5+",
            YearOfStudy::Unknown => "unknown",
        }
    }

    /// Years of experience implied by the year of study (first year = 0).
    pub const fn experience_ordinal(self) -> Option<u8> {
        match self {
            YearOfStudy::First => Some(0),
            YearOfStudy::Second => Some(1),
            YearOfStudy::Third => Some(2),
            YearOfStudy::Fourth => Some(3),
            YearOfStudy::FifthPlus => Some(4),
            YearOfStudy::Unknown => None,
        }
    }
}

impl fmt::Display for YearOfStudy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for YearOfStudy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for YearOfStudy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct YearVisitor;

        impl<'de> Visitor<'de> for YearVisitor {
            type Value = YearOfStudy;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a year of study such as 1, \"3\" or \"5+\"")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(YearOfStudy::parse(value))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                Ok(YearOfStudy::parse(&value.to_string()))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                Ok(YearOfStudy::parse(&value.to_string()))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
                if value.is_finite() && value >= 0.0 && value.fract() == 0.0 {
                    Ok(YearOfStudy::parse(&format!("{value:.0}")))
                } else {
                    Ok(YearOfStudy::Unknown)
                }
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(YearOfStudy::Unknown)
            }
        }

        deserializer.deserialize_any(YearVisitor)
    }
}

/// Engagement type advertised by a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingCategory {
    #[serde(alias = "full_time", alias = "fulltime")]
    FullTime,
    Internship,
    #[serde(alias = "part_time", alias = "parttime")]
    PartTime,
    #[default]
    #[serde(other)]
    Other,
}

impl ListingCategory {
    pub const fn label(self) -> &'static str {
        match self {
            ListingCategory::FullTime => "full-time",
            ListingCategory::Internship => "internship",
            ListingCategory::PartTime => "part-time",
            ListingCategory::Other => "other",
        }
    }
}

/// Numeric field that upstream records sometimes carry as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Number(f64),
    Text(String),
}

impl NumericField {
    /// Finite numeric value, or `None` when the field is malformed.
    pub fn value(&self) -> Option<f64> {
        let value = match self {
            NumericField::Number(number) => *number,
            NumericField::Text(text) => text.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for NumericField {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for NumericField {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Subjects are captured either as a list or as one comma separated string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubjectList {
    List(Vec<String>),
    Text(String),
}

impl SubjectList {
    pub fn normalized(&self) -> Vec<String> {
        let raw: Vec<&str> = match self {
            SubjectList::List(items) => items.iter().map(String::as_str).collect(),
            SubjectList::Text(text) => text.split(',').collect(),
        };

        raw.into_iter()
            .map(str::trim)
            .filter(|subject| !subject.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Qualifications {
    #[serde(default)]
    pub subjects: Option<SubjectList>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub portfolio: bool,
}

/// Read-only snapshot of a candidate profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, alias = "program")]
    pub course: Option<String>,
    #[serde(default, alias = "year", alias = "yearOfStudy")]
    pub year_of_study: YearOfStudy,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub gpa: Option<NumericField>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub qualifications: Option<Qualifications>,
    #[serde(default = "default_active", deserialize_with = "null_as_active")]
    pub active: bool,
}

impl Candidate {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: CandidateId(id.into()),
            name: None,
            skills: Vec::new(),
            course: None,
            year_of_study: YearOfStudy::Unknown,
            university: None,
            gpa: None,
            location: None,
            qualifications: None,
            active: true,
        }
    }
}

/// Eligibility requirements attached to a listing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListingRequirements {
    #[serde(default, alias = "minGPA", alias = "minGpa")]
    pub min_gpa: Option<NumericField>,
    #[serde(
        default,
        alias = "requiredQualifications",
        deserialize_with = "null_as_default"
    )]
    pub required_qualifications: Vec<String>,
    #[serde(default, alias = "courseKeywords", alias = "courseRequirement")]
    pub course_keywords: Option<String>,
    #[serde(default, alias = "minExperience")]
    pub min_experience: Option<NumericField>,
    #[serde(
        default,
        alias = "portfolioRequired",
        deserialize_with = "null_as_default"
    )]
    pub portfolio_required: bool,
}

/// Read-only snapshot of an opportunity listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(
        default,
        alias = "requiredSkills",
        deserialize_with = "null_as_default"
    )]
    pub required_skills: Vec<String>,
    #[serde(
        default,
        alias = "preferredUniversities",
        deserialize_with = "null_as_default"
    )]
    pub preferred_universities: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, alias = "requirementsText")]
    pub requirements_text: Option<String>,
    #[serde(default, alias = "type", deserialize_with = "null_as_default")]
    pub category: ListingCategory,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    /// RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC).
    #[serde(
        default,
        alias = "applicationDeadline",
        deserialize_with = "flexible_deadline"
    )]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub urgent: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
    #[serde(default)]
    pub requirements: Option<ListingRequirements>,
    #[serde(default = "default_active", deserialize_with = "null_as_active")]
    pub active: bool,
}

impl Listing {
    pub fn new(id: impl Into<String>, category: ListingCategory) -> Self {
        Self {
            id: ListingId(id.into()),
            title: String::new(),
            required_skills: Vec::new(),
            preferred_universities: Vec::new(),
            description: String::new(),
            requirements_text: None,
            category,
            location: String::new(),
            deadline: None,
            urgent: false,
            featured: false,
            requirements: None,
            active: true,
        }
    }

    /// Description and requirement text searched for course keywords.
    pub fn searchable_text(&self) -> String {
        match self.requirements_text.as_deref() {
            Some(requirements) => format!("{} {}", self.description, requirements),
            None => self.description.clone(),
        }
    }
}

fn default_active() -> bool {
    true
}

fn null_as_active<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<bool>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_else(default_active))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let opt = Option::<T>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

fn flexible_deadline<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Some(naive.and_utc()))
        .ok_or_else(|| de::Error::custom(format!("invalid deadline '{trimmed}'")))
}

/// Weighted criteria contributing to the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Skills,
    Education,
    University,
    Experience,
    Location,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::Skills,
        Criterion::Education,
        Criterion::University,
        Criterion::Experience,
        Criterion::Location,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Criterion::Skills => "skills",
            Criterion::Education => "education",
            Criterion::University => "university",
            Criterion::Experience => "experience",
            Criterion::Location => "location",
        }
    }
}

use super::normalizer::{clean_cell, parse_flag, split_skills};
use crate::matching::domain::{Candidate, NumericField, Qualifications, SubjectList, YearOfStudy};
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_roster<R: Read>(reader: R) -> Result<Vec<Candidate>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut candidates = Vec::new();

    for record in csv_reader.deserialize::<RosterRow>() {
        let row = record?;
        let id = clean_cell(&row.id);
        if id.is_empty() {
            tracing::warn!("skipping roster row without an id");
            continue;
        }
        candidates.push(row.into_candidate(id));
    }

    Ok(candidates)
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    id: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    skills: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    course: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    year: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    university: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    gpa: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    location: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    subjects: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    portfolio: Option<String>,
}

impl RosterRow {
    fn into_candidate(self, id: String) -> Candidate {
        let portfolio = self.portfolio.as_deref().is_some_and(parse_flag);
        let subjects = self.subjects.as_deref().map(clean_cell);
        let qualifications = (subjects.is_some() || portfolio).then(|| Qualifications {
            subjects: subjects.map(SubjectList::Text),
            portfolio,
        });

        Candidate {
            name: self.name.as_deref().map(clean_cell),
            skills: self.skills.as_deref().map(split_skills).unwrap_or_default(),
            course: self.course.as_deref().map(clean_cell),
            year_of_study: self
                .year
                .as_deref()
                .map(YearOfStudy::parse)
                .unwrap_or_default(),
            university: self.university.as_deref().map(clean_cell),
            gpa: self.gpa.map(NumericField::Text),
            location: self.location.as_deref().map(clean_cell),
            qualifications,
            ..Candidate::new(id)
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

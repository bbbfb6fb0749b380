use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{ListingCategory, YearOfStudy};

/// Value used whenever a lookup has no entry for the requested key.
pub const NEUTRAL_LOOKUP: f64 = 0.5;

const SKILL_PLACEHOLDER: &str = "{skill}";

/// How well a year of study suits each listing category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryRelevance {
    pub internship: f64,
    pub part_time: f64,
    pub full_time: f64,
}

impl CategoryRelevance {
    pub const fn new(internship: f64, part_time: f64, full_time: f64) -> Self {
        Self {
            internship,
            part_time,
            full_time,
        }
    }

    pub fn for_category(&self, category: ListingCategory) -> Option<f64> {
        match category {
            ListingCategory::Internship => Some(self.internship),
            ListingCategory::PartTime => Some(self.part_time),
            ListingCategory::FullTime => Some(self.full_time),
            ListingCategory::Other => None,
        }
    }
}

/// Static lookup data injected into the score calculator and gap analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingTables {
    pub year_relevance: BTreeMap<YearOfStudy, CategoryRelevance>,
    pub experience_proxy: BTreeMap<YearOfStudy, f64>,
    /// Learning resources keyed by lowercase skill name.
    pub skill_resources: BTreeMap<String, Vec<String>>,
    /// Resources offered for skills missing from `skill_resources`; `{skill}` is substituted.
    pub fallback_resources: Vec<String>,
}

impl MatchingTables {
    pub fn year_relevance(&self, year: YearOfStudy, category: ListingCategory) -> f64 {
        self.year_relevance
            .get(&year)
            .and_then(|row| row.for_category(category))
            .unwrap_or(NEUTRAL_LOOKUP)
    }

    pub fn experience_for(&self, year: YearOfStudy) -> f64 {
        self.experience_proxy
            .get(&year)
            .copied()
            .unwrap_or(NEUTRAL_LOOKUP)
    }

    pub fn resources_for(&self, skill: &str) -> Vec<String> {
        let key = skill.trim().to_lowercase();
        match self.skill_resources.get(&key) {
            Some(resources) => resources.clone(),
            None => self
                .fallback_resources
                .iter()
                .map(|template| template.replace(SKILL_PLACEHOLDER, skill.trim()))
                .collect(),
        }
    }
}

impl Default for MatchingTables {
    fn default() -> Self {
        let year_relevance = BTreeMap::from([
            (YearOfStudy::First, CategoryRelevance::new(0.8, 0.6, 0.3)),
            (YearOfStudy::Second, CategoryRelevance::new(0.9, 0.7, 0.4)),
            (YearOfStudy::Third, CategoryRelevance::new(0.7, 0.8, 0.7)),
            (YearOfStudy::Fourth, CategoryRelevance::new(0.5, 0.6, 0.9)),
            (YearOfStudy::FifthPlus, CategoryRelevance::new(0.3, 0.4, 1.0)),
        ]);

        let experience_proxy = BTreeMap::from([
            (YearOfStudy::First, 0.2),
            (YearOfStudy::Second, 0.4),
            (YearOfStudy::Third, 0.6),
            (YearOfStudy::Fourth, 0.8),
            (YearOfStudy::FifthPlus, 1.0),
        ]);

        let skill_resources = [
            (
                "javascript",
                &[
                    "MDN Web Docs: JavaScript Guide",
                    "JavaScript.info",
                    "freeCodeCamp JavaScript Algorithms and Data Structures",
                ][..],
            ),
            (
                "typescript",
                &["TypeScript Handbook", "Total TypeScript tutorials"][..],
            ),
            (
                "python",
                &[
                    "Official Python Tutorial",
                    "Automate the Boring Stuff with Python",
                    "Python for Everybody (Coursera)",
                ][..],
            ),
            (
                "java",
                &["Oracle Java Tutorials", "Java Programming MOOC (University of Helsinki)"][..],
            ),
            (
                "sql",
                &[
                    "SQLBolt interactive lessons",
                    "Mode SQL Tutorial",
                    "PostgreSQL documentation",
                ][..],
            ),
            (
                "react",
                &[
                    "React documentation: Learn React",
                    "Full Stack Open (University of Helsinki)",
                ][..],
            ),
            (
                "node.js",
                &["Node.js official guides", "The Odin Project: NodeJS path"][..],
            ),
            (
                "html",
                &["MDN Web Docs: HTML basics", "web.dev Learn HTML"][..],
            ),
            ("css", &["MDN Web Docs: CSS first steps", "web.dev Learn CSS"][..]),
            ("git", &["Pro Git book", "GitHub Skills"][..]),
            (
                "machine learning",
                &[
                    "Machine Learning Specialization (Coursera)",
                    "fast.ai Practical Deep Learning",
                ][..],
            ),
            (
                "data analysis",
                &["Google Data Analytics Certificate", "Kaggle Learn: Pandas"][..],
            ),
            (
                "excel",
                &["Microsoft Excel training center", "ExcelJet formula guides"][..],
            ),
            (
                "communication",
                &["Toastmasters International", "Coursera: Improving Communication Skills"][..],
            ),
            (
                "project management",
                &["Google Project Management Certificate", "PMI project management basics"][..],
            ),
        ]
        .into_iter()
        .map(|(skill, resources)| {
            (
                skill.to_string(),
                resources.iter().map(|entry| entry.to_string()).collect(),
            )
        })
        .collect();

        Self {
            year_relevance,
            experience_proxy,
            skill_resources,
            fallback_resources: vec![
                "Online courses covering {skill} (Coursera, edX, Udemy)".to_string(),
                "Official {skill} documentation and tutorials".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_relevance_matches_reference_table() {
        let tables = MatchingTables::default();
        assert_eq!(
            tables.year_relevance(YearOfStudy::First, ListingCategory::Internship),
            0.8
        );
        assert_eq!(
            tables.year_relevance(YearOfStudy::Third, ListingCategory::PartTime),
            0.8
        );
        assert_eq!(
            tables.year_relevance(YearOfStudy::FifthPlus, ListingCategory::Internship),
            0.3
        );
        assert_eq!(
            tables.year_relevance(YearOfStudy::FifthPlus, ListingCategory::FullTime),
            1.0
        );
    }

    #[test]
    fn unknown_keys_are_neutral() {
        let tables = MatchingTables::default();
        assert_eq!(
            tables.year_relevance(YearOfStudy::Unknown, ListingCategory::FullTime),
            NEUTRAL_LOOKUP
        );
        assert_eq!(
            tables.year_relevance(YearOfStudy::Second, ListingCategory::Other),
            NEUTRAL_LOOKUP
        );
        assert_eq!(tables.experience_for(YearOfStudy::Unknown), NEUTRAL_LOOKUP);
        assert_eq!(tables.experience_for(YearOfStudy::Fourth), 0.8);
    }

    #[test]
    fn resources_fall_back_to_generic_entry() {
        let tables = MatchingTables::default();
        assert!(tables.resources_for("SQL")[0].contains("SQLBolt"));

        let fallback = tables.resources_for("Haskell");
        assert_eq!(fallback.len(), 2);
        assert!(fallback.iter().all(|entry| entry.contains("Haskell")));
    }
}

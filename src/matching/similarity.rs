//! Fuzzy comparison of skill names.
//!
//! Skills are compared with Jaro-Winkler over case-folded input. The metric is
//! not perfectly symmetric once the prefix bonus is applied, so every caller in
//! the crate passes the candidate's skill first and the listing's required skill
//! second. [`SkillMatcher`] encodes that order.

use serde::{Deserialize, Serialize};

/// Similarity above which two skill names denote the same skill.
pub const SKILL_MATCH_THRESHOLD: f64 = 0.7;

const PREFIX_SCALE: f64 = 0.1;
const MAX_PREFIX_LENGTH: usize = 4;

/// Case-insensitive Jaro-Winkler similarity in `[0, 1]`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    jaro_winkler(&a, &b)
}

fn jaro_winkler(a: &[char], b: &[char]) -> f64 {
    let jaro = jaro(a, b);
    let prefix = a
        .iter()
        .zip(b.iter())
        .take(MAX_PREFIX_LENGTH)
        .take_while(|(left, right)| left == right)
        .count();

    jaro + prefix as f64 * PREFIX_SCALE * (1.0 - jaro)
}

fn jaro(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let window = (a.len().max(b.len()) / 2).saturating_sub(1);
    let mut a_matched = vec![false; a.len()];
    let mut b_matched = vec![false; b.len()];
    let mut matches = 0usize;

    for (i, ch) in a.iter().enumerate() {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(b.len());
        for j in start..end {
            if b_matched[j] || b[j] != *ch {
                continue;
            }
            a_matched[i] = true;
            b_matched[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let mut transpositions = 0usize;
    let mut k = 0usize;
    for (i, ch) in a.iter().enumerate() {
        if !a_matched[i] {
            continue;
        }
        while !b_matched[k] {
            k += 1;
        }
        if *ch != b[k] {
            transpositions += 1;
        }
        k += 1;
    }

    let m = matches as f64;
    let t = transpositions as f64 / 2.0;
    (m / a.len() as f64 + m / b.len() as f64 + (m - t) / m) / 3.0
}

/// Threshold-based skill equivalence shared by scoring and gap analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillMatcher {
    threshold: f64,
}

impl SkillMatcher {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn matches(&self, candidate_skill: &str, required_skill: &str) -> bool {
        similarity(candidate_skill, required_skill) > self.threshold
    }

    pub fn matches_any(&self, candidate_skill: &str, required: &[String]) -> bool {
        required
            .iter()
            .any(|required_skill| self.matches(candidate_skill, required_skill))
    }

    /// Candidate skills that match at least one required skill, in candidate order.
    pub fn covered<'a>(
        &self,
        candidate_skills: &'a [String],
        required: &[String],
    ) -> Vec<&'a str> {
        candidate_skills
            .iter()
            .filter(|skill| self.matches_any(skill, required))
            .map(String::as_str)
            .collect()
    }

    /// Required skills no candidate skill matches, in listing order.
    pub fn uncovered<'a>(
        &self,
        candidate_skills: &[String],
        required: &'a [String],
    ) -> Vec<&'a str> {
        required
            .iter()
            .filter(|required_skill| {
                !candidate_skills
                    .iter()
                    .any(|skill| self.matches(skill, required_skill))
            })
            .map(String::as_str)
            .collect()
    }
}

impl Default for SkillMatcher {
    fn default() -> Self {
        Self::new(SKILL_MATCH_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-3
    }

    #[test]
    fn identical_and_empty_inputs() {
        assert!(approx(similarity("rust", "rust"), 1.0));
        assert!(approx(similarity("", ""), 1.0));
        assert!(approx(similarity("rust", ""), 0.0));
        assert!(approx(similarity("abc", "xyz"), 0.0));
    }

    #[test]
    fn classic_reference_values() {
        assert!(approx(similarity("MARTHA", "MARHTA"), 0.961));
        assert!(approx(similarity("DWAYNE", "DUANE"), 0.84));
        assert!(approx(similarity("DIXON", "DICKSONX"), 0.813));
    }

    #[test]
    fn comparison_ignores_case() {
        assert!(approx(similarity("Javascript", "JavaScript"), 1.0));
        assert!(similarity("Node.js", "nodejs") > SKILL_MATCH_THRESHOLD);
    }

    #[test]
    fn unrelated_skills_stay_below_threshold() {
        assert!(similarity("Python", "JavaScript") < SKILL_MATCH_THRESHOLD);
        assert!(similarity("Javascript", "SQL") < SKILL_MATCH_THRESHOLD);
        assert!(similarity("Python", "SQL") < SKILL_MATCH_THRESHOLD);
    }

    #[test]
    fn matcher_reports_covered_and_uncovered_skills() {
        let matcher = SkillMatcher::default();
        let candidate = vec!["Javascript".to_string(), "Python".to_string()];
        let required = vec!["JavaScript".to_string(), "SQL".to_string()];

        assert_eq!(matcher.covered(&candidate, &required), vec!["Javascript"]);
        assert_eq!(matcher.uncovered(&candidate, &required), vec!["SQL"]);
    }
}

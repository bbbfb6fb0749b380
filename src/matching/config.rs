use serde::{Deserialize, Serialize};

use super::qualification::MissingDataPolicy;
use super::ranking::RankingThresholds;
use super::scoring::ScoreWeights;
use super::similarity::SKILL_MATCH_THRESHOLD;

/// Tunable knobs for the matching engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    #[serde(default)]
    pub weights: ScoreWeights,
    #[serde(default = "default_skill_threshold")]
    pub skill_threshold: f64,
    #[serde(default)]
    pub missing_data_policy: MissingDataPolicy,
    #[serde(default)]
    pub ranking: RankingThresholds,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            skill_threshold: SKILL_MATCH_THRESHOLD,
            missing_data_policy: MissingDataPolicy::default(),
            ranking: RankingThresholds::default(),
        }
    }
}

fn default_skill_threshold() -> f64 {
    SKILL_MATCH_THRESHOLD
}

use serde::{Deserialize, Serialize};

use crate::matching::domain::Criterion;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Composite weights applied to each sub-score.
pub const DEFAULT_WEIGHTS: ScoreWeights = ScoreWeights {
    skills: 0.35,
    education: 0.25,
    university: 0.15,
    experience: 0.15,
    location: 0.10,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub skills: f64,
    pub education: f64,
    pub university: f64,
    pub experience: f64,
    pub location: f64,
}

impl ScoreWeights {
    pub fn new(
        skills: f64,
        education: f64,
        university: f64,
        experience: f64,
        location: f64,
    ) -> Result<Self, WeightsError> {
        let weights = Self {
            skills,
            education,
            university,
            experience,
            location,
        };
        weights.validate()?;
        Ok(weights)
    }

    pub fn sum(&self) -> f64 {
        self.skills + self.education + self.university + self.experience + self.location
    }

    pub fn weight(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Skills => self.skills,
            Criterion::Education => self.education,
            Criterion::University => self.university,
            Criterion::Experience => self.experience,
            Criterion::Location => self.location,
        }
    }

    pub fn validate(&self) -> Result<(), WeightsError> {
        for criterion in Criterion::ALL {
            let weight = self.weight(criterion);
            if !weight.is_finite() || weight < 0.0 {
                return Err(WeightsError::InvalidWeight { criterion, weight });
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(WeightsError::SumNotOne { sum });
        }

        Ok(())
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum WeightsError {
    #[error("weight for {criterion:?} must be a non-negative number (found {weight})")]
    InvalidWeight { criterion: Criterion, weight: f64 },
    #[error("score weights must sum to 1.0 (found {sum})")]
    SumNotOne { sum: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        assert!((DEFAULT_WEIGHTS.sum() - 1.0).abs() < 1e-9);
        assert!(DEFAULT_WEIGHTS.validate().is_ok());
    }

    #[test]
    fn rejects_weights_that_do_not_sum_to_one() {
        match ScoreWeights::new(0.5, 0.5, 0.5, 0.0, 0.0) {
            Err(WeightsError::SumNotOne { sum }) => assert!((sum - 1.5).abs() < 1e-9),
            other => panic!("expected sum error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_negative_weights() {
        assert!(matches!(
            ScoreWeights::new(1.2, -0.2, 0.0, 0.0, 0.0),
            Err(WeightsError::InvalidWeight {
                criterion: Criterion::Education,
                ..
            })
        ));
    }
}

//! Voting ensemble

use crate::features::FEATURE_COUNT;
use super::logistic::LogisticModel;
use super::model::{Classifier, Diagnosis};

/// How member outputs are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VotingStrategy {
    /// Average member probabilities
    Soft,
    /// Majority of member predictions; no probabilities
    Hard,
}

/// Ensemble of logistic members
#[derive(Debug, Clone)]
pub struct VotingModel {
    name: String,
    strategy: VotingStrategy,
    members: Vec<LogisticModel>,
}

impl VotingModel {
    pub fn new(name: &str, strategy: VotingStrategy, members: Vec<LogisticModel>) -> Self {
        VotingModel {
            name: name.to_string(),
            strategy,
            members,
        }
    }

    fn average_proba(&self, features: &[f64; FEATURE_COUNT]) -> [f64; 2] {
        let mut malignant = 0.0;
        for member in &self.members {
            malignant += member.malignant_probability(features);
        }
        let p = if self.members.is_empty() { 0.0 } else { malignant / self.members.len() as f64 };
        [1.0 - p, p]
    }
}

impl Classifier for VotingModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Diagnosis {
        match self.strategy {
            VotingStrategy::Soft => {
                let proba = self.average_proba(features);
                // ties resolve to the lower class
                if proba[1] > proba[0] { Diagnosis::Malignant } else { Diagnosis::Benign }
            }
            VotingStrategy::Hard => {
                let malignant_votes = self.members.iter()
                    .filter(|m| m.predict(features) == Diagnosis::Malignant)
                    .count();
                if 2 * malignant_votes > self.members.len() { Diagnosis::Malignant } else { Diagnosis::Benign }
            }
        }
    }

    fn predict_proba(&self, features: &[f64; FEATURE_COUNT]) -> Option<[f64; 2]> {
        match self.strategy {
            VotingStrategy::Soft => Some(self.average_proba(features)),
            VotingStrategy::Hard => None,
        }
    }
}

//! The immutable configuration snapshot.
//!
//! A snapshot is parsed from a JSON datafile once and never mutated. It
//! answers two questions for the rest of the SDK:
//!
//! 1. Which experiments exist, in datafile order (`all_experiments`)?
//! 2. Which variations does a given experiment have (`experiment`)?
//!
//! Lookups for experiments that are not (or no longer) in the snapshot
//! return `None`. Callers degrade to empty candidate lists; a vanished
//! experiment is never an error at this layer.

use crate::{ConfigError, ConfigResult, ExperimentKey, VariationKey};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One treatment arm within an experiment
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variation {
    /// Key of this variation, unique within its experiment
    pub key: VariationKey,
}

impl Variation {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: VariationKey::new(key),
        }
    }
}

/// A named test with one or more variations
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experiment {
    /// Key of this experiment, unique within the configuration
    pub key: ExperimentKey,
    /// Treatment arms, in datafile order
    pub variations: Vec<Variation>,
}

impl Experiment {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: ExperimentKey::new(key),
            variations: Vec::new(),
        }
    }

    pub fn with_variation(mut self, key: impl Into<String>) -> Self {
        self.variations.push(Variation::new(key));
        self
    }

    /// Variation keys in datafile order
    pub fn variation_keys(&self) -> Vec<VariationKey> {
        self.variations.iter().map(|v| v.key.clone()).collect()
    }

    /// Look up a variation by key
    pub fn variation(&self, key: &VariationKey) -> Option<&Variation> {
        self.variations.iter().find(|v| &v.key == key)
    }
}

/// Datafile wire shape. Parsed, then validated into a `ConfigSnapshot`.
#[derive(Debug, Deserialize)]
struct Datafile {
    experiments: Vec<Experiment>,
}

/// The parsed, validated configuration. Immutable after construction.
#[derive(Clone, Debug)]
pub struct ConfigSnapshot {
    /// Experiments in datafile order
    experiments: Vec<Experiment>,
    /// Key -> position in `experiments`
    index: HashMap<ExperimentKey, usize>,
}

impl ConfigSnapshot {
    /// Build a snapshot from already-constructed experiments.
    ///
    /// Rejects empty and duplicate experiment keys; everything else is
    /// accepted as-is, including experiments with no variations.
    pub fn new(experiments: Vec<Experiment>) -> ConfigResult<Self> {
        let mut index = HashMap::with_capacity(experiments.len());
        for (pos, experiment) in experiments.iter().enumerate() {
            if experiment.key.is_empty() {
                return Err(ConfigError::EmptyExperimentKey);
            }
            if index.insert(experiment.key.clone(), pos).is_some() {
                return Err(ConfigError::DuplicateExperiment(experiment.key.clone()));
            }
        }
        Ok(Self { experiments, index })
    }

    /// Parse and validate a JSON datafile.
    pub fn from_json(datafile: &str) -> ConfigResult<Self> {
        let raw: Datafile = serde_json::from_str(datafile)?;
        Self::new(raw.experiments)
    }

    /// All experiments, in datafile order
    pub fn all_experiments(&self) -> &[Experiment] {
        &self.experiments
    }

    /// Experiment keys in datafile order
    pub fn experiment_keys(&self) -> Vec<ExperimentKey> {
        self.experiments.iter().map(|e| e.key.clone()).collect()
    }

    /// Look up an experiment by key
    pub fn experiment(&self, key: &ExperimentKey) -> Option<&Experiment> {
        self.index.get(key).map(|&pos| &self.experiments[pos])
    }

    /// Number of experiments in the snapshot
    pub fn experiment_count(&self) -> usize {
        self.experiments.len()
    }
}

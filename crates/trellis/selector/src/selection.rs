//! Picker choices and the selection state.

use serde::{Deserialize, Serialize};
use trellis_types::{ExperimentKey, VariationKey};

/// What the operator chose in a picker.
///
/// Every picker leads with an "unselected" sentinel row; choosing it
/// clears the corresponding state instead of selecting a real key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pick<K> {
    /// The leading sentinel row
    Unselected,
    /// A real key
    Key(K),
}

impl<K> Pick<K> {
    pub fn key(&self) -> Option<&K> {
        match self {
            Pick::Unselected => None,
            Pick::Key(key) => Some(key),
        }
    }
}

impl<K> From<Option<K>> for Pick<K> {
    fn from(value: Option<K>) -> Self {
        match value {
            None => Pick::Unselected,
            Some(key) => Pick::Key(key),
        }
    }
}

/// The editor's selection state.
///
/// A variation can only be selected while an experiment is; picking a new
/// experiment always resets the variation to absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// Nothing chosen yet
    NoExperiment,
    /// An experiment chosen, variation still open
    Experiment { experiment: ExperimentKey },
    /// Both halves of the override chosen
    ExperimentAndVariation {
        experiment: ExperimentKey,
        variation: VariationKey,
    },
}

impl Selection {
    /// The selected experiment key, if any
    pub fn experiment(&self) -> Option<&ExperimentKey> {
        match self {
            Selection::NoExperiment => None,
            Selection::Experiment { experiment }
            | Selection::ExperimentAndVariation { experiment, .. } => Some(experiment),
        }
    }

    /// The selected variation key, if any
    pub fn variation(&self) -> Option<&VariationKey> {
        match self {
            Selection::ExperimentAndVariation { variation, .. } => Some(variation),
            _ => None,
        }
    }

    /// True only when both keys are selected
    pub fn is_complete(&self) -> bool {
        matches!(self, Selection::ExperimentAndVariation { .. })
    }
}

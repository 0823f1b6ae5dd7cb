//! The forced-variation selector.

use crate::{Pick, Selection, SelectorError, SelectorResult};
use std::sync::Arc;
use trellis_overrides::ForcedVariationStore;
use trellis_types::{ConfigSnapshot, ExperimentKey, UserId, VariationKey};

/// Drives the editor's selection state against a configuration snapshot
/// and commits the result to the override table.
///
/// The selector holds no durable state of its own. Candidate lists come
/// straight from the snapshot; the only externally observable effect is
/// the mutation performed by `save` and `remove`.
#[derive(Clone, Debug)]
pub struct ForcedVariationSelector {
    config: Arc<ConfigSnapshot>,
    user: UserId,
    selection: Selection,
}

impl ForcedVariationSelector {
    /// Create a selector for one user against the given snapshot
    pub fn new(config: Arc<ConfigSnapshot>, user: UserId) -> Self {
        Self {
            config,
            user,
            selection: Selection::NoExperiment,
        }
    }

    /// The user this editor session edits overrides for
    pub fn user(&self) -> &UserId {
        &self.user
    }

    /// The current selection state
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Seed the selection from an existing override pair.
    ///
    /// Keys that are no longer in the configuration degrade to the nearest
    /// valid state: an unknown experiment leaves the selection empty, an
    /// unknown variation leaves just the experiment selected.
    pub fn prefill(&mut self, experiment: &ExperimentKey, variation: &VariationKey) {
        if self.config.experiment(experiment).is_none() {
            self.selection = Selection::NoExperiment;
            return;
        }

        self.pick_experiment(Pick::Key(experiment.clone()));
        if self.variation_candidates().contains(variation) {
            self.pick_variation(Pick::Key(variation.clone()));
        }
    }

    /// All experiment keys, in configuration order
    pub fn experiment_candidates(&self) -> Vec<ExperimentKey> {
        self.config.experiment_keys()
    }

    /// The selected experiment's variation keys, in configuration order.
    ///
    /// Empty when no experiment is selected, or when the selected
    /// experiment has vanished from the configuration.
    pub fn variation_candidates(&self) -> Vec<VariationKey> {
        let Some(experiment) = self.selection.experiment() else {
            return Vec::new();
        };

        self.config
            .experiment(experiment)
            .map(|e| e.variation_keys())
            .unwrap_or_default()
    }

    /// Apply an experiment-picker choice.
    ///
    /// Picking a key moves to `Experiment` and resets any previously
    /// selected variation; picking the sentinel clears everything.
    pub fn pick_experiment(&mut self, pick: Pick<ExperimentKey>) {
        self.selection = match pick {
            Pick::Unselected => Selection::NoExperiment,
            Pick::Key(experiment) => Selection::Experiment { experiment },
        };
    }

    /// Apply a variation-picker choice.
    ///
    /// A no-op while no experiment is selected (the variation picker is
    /// empty then anyway); picking the sentinel drops back to just the
    /// experiment.
    pub fn pick_variation(&mut self, pick: Pick<VariationKey>) {
        let Some(experiment) = self.selection.experiment().cloned() else {
            return;
        };

        self.selection = match pick {
            Pick::Unselected => Selection::Experiment { experiment },
            Pick::Key(variation) => Selection::ExperimentAndVariation {
                experiment,
                variation,
            },
        };
    }

    /// True when `save` would attempt a commit
    pub fn can_save(&self) -> bool {
        self.selection.is_complete()
    }

    /// Commit the selected pair as a forced variation.
    ///
    /// Requires a complete selection; store-side validation failures
    /// (vanished experiment, unknown variation) propagate to the caller.
    pub fn save(&self, store: &mut ForcedVariationStore) -> SelectorResult<()> {
        let Selection::ExperimentAndVariation {
            experiment,
            variation,
        } = &self.selection
        else {
            return Err(SelectorError::NothingSelected);
        };

        store.set(experiment, &self.user, Some(variation))?;

        tracing::debug!(
            experiment = %experiment,
            user = %self.user,
            variation = %variation,
            "Selection saved"
        );
        Ok(())
    }

    /// Clear any forced variation for the selected experiment.
    ///
    /// Requires only an experiment; clearing when no override exists is a
    /// successful no-op.
    pub fn remove(&self, store: &mut ForcedVariationStore) -> SelectorResult<()> {
        let Some(experiment) = self.selection.experiment() else {
            return Err(SelectorError::NothingSelected);
        };

        store.set(experiment, &self.user, None)?;

        tracing::debug!(
            experiment = %experiment,
            user = %self.user,
            "Selection removed"
        );
        Ok(())
    }
}

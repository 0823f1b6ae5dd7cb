//! Trellis Overrides - the forced-variation table
//!
//! A forced variation pins a specific user, for a specific experiment, to
//! a fixed variation key, bypassing normal randomized assignment. The
//! store is a plain in-memory map with last-writer-wins semantics; access
//! is serialized by the caller (the editor workflow is single-threaded),
//! so there is no locking here.
//!
//! Every mutation is validated against the configuration snapshot and
//! surfaces failure as a `Result`. Callers can no longer silently drop a
//! failed override the way a discarded boolean allowed.

#![deny(unsafe_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use trellis_types::{ConfigSnapshot, ExperimentKey, UserId, VariationKey};

/// Errors that can occur when mutating the override table
#[derive(Debug, thiserror::Error)]
pub enum OverrideError {
    #[error("Experiment key must not be empty")]
    EmptyExperimentKey,

    #[error("Unknown experiment key: {0}")]
    UnknownExperiment(ExperimentKey),

    #[error("Experiment {experiment} has no variation {variation}")]
    UnknownVariation {
        experiment: ExperimentKey,
        variation: VariationKey,
    },
}

/// Result alias for override operations
pub type OverrideResult<T> = Result<T, OverrideError>;

/// One forced-variation record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForcedVariation {
    /// The variation this user is pinned to
    pub variation: VariationKey,
    /// When the override was set
    pub forced_at: DateTime<Utc>,
}

/// The per-user override table.
///
/// A forced variation is either bound to exactly one variation key or
/// absent; there is no partially-set state. Setting an entry that already
/// exists overwrites it (last writer wins).
#[derive(Clone, Debug)]
pub struct ForcedVariationStore {
    config: Arc<ConfigSnapshot>,
    entries: HashMap<(UserId, ExperimentKey), ForcedVariation>,
}

impl ForcedVariationStore {
    /// Create an empty store validating against the given snapshot
    pub fn new(config: Arc<ConfigSnapshot>) -> Self {
        Self {
            config,
            entries: HashMap::new(),
        }
    }

    /// The snapshot mutations are validated against
    pub fn config(&self) -> &ConfigSnapshot {
        &self.config
    }

    /// Set or clear the forced variation for `(user, experiment)`.
    ///
    /// `Some(variation)` validates both keys against the configuration and
    /// inserts or overwrites the entry. `None` clears any existing entry;
    /// clearing an absent entry is a successful no-op.
    pub fn set(
        &mut self,
        experiment: &ExperimentKey,
        user: &UserId,
        variation: Option<&VariationKey>,
    ) -> OverrideResult<()> {
        if experiment.is_empty() {
            return Err(OverrideError::EmptyExperimentKey);
        }

        match variation {
            Some(variation) => {
                let known = self
                    .config
                    .experiment(experiment)
                    .ok_or_else(|| OverrideError::UnknownExperiment(experiment.clone()))?;

                if known.variation(variation).is_none() {
                    return Err(OverrideError::UnknownVariation {
                        experiment: experiment.clone(),
                        variation: variation.clone(),
                    });
                }

                self.entries.insert(
                    (user.clone(), experiment.clone()),
                    ForcedVariation {
                        variation: variation.clone(),
                        forced_at: Utc::now(),
                    },
                );

                tracing::info!(
                    experiment = %experiment,
                    user = %user,
                    variation = %variation,
                    "Forced variation set"
                );
            }
            None => {
                self.entries.remove(&(user.clone(), experiment.clone()));

                tracing::info!(
                    experiment = %experiment,
                    user = %user,
                    "Forced variation cleared"
                );
            }
        }

        Ok(())
    }

    /// The forced variation key for `(user, experiment)`, if any
    pub fn get(&self, user: &UserId, experiment: &ExperimentKey) -> Option<&VariationKey> {
        self.entry(user, experiment).map(|e| &e.variation)
    }

    /// The full override record for `(user, experiment)`, if any
    pub fn entry(&self, user: &UserId, experiment: &ExperimentKey) -> Option<&ForcedVariation> {
        self.entries.get(&(user.clone(), experiment.clone()))
    }

    /// Number of overrides currently set
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_types::Experiment;

    fn make_store() -> ForcedVariationStore {
        let config = ConfigSnapshot::new(vec![
            Experiment::new("exp1").with_variation("A").with_variation("B"),
            Experiment::new("exp2").with_variation("control"),
        ])
        .unwrap();
        ForcedVariationStore::new(Arc::new(config))
    }

    #[test]
    fn test_set_and_get() {
        let mut store = make_store();
        let user = UserId::new("tester");
        let exp = ExperimentKey::new("exp1");

        store.set(&exp, &user, Some(&VariationKey::new("B"))).unwrap();

        assert_eq!(store.get(&user, &exp), Some(&VariationKey::new("B")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_last_writer_wins() {
        let mut store = make_store();
        let user = UserId::new("tester");
        let exp = ExperimentKey::new("exp1");

        store.set(&exp, &user, Some(&VariationKey::new("A"))).unwrap();
        store.set(&exp, &user, Some(&VariationKey::new("B"))).unwrap();

        assert_eq!(store.get(&user, &exp), Some(&VariationKey::new("B")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear_removes_entry() {
        let mut store = make_store();
        let user = UserId::new("tester");
        let exp = ExperimentKey::new("exp1");

        store.set(&exp, &user, Some(&VariationKey::new("A"))).unwrap();
        store.set(&exp, &user, None).unwrap();

        assert!(store.get(&user, &exp).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear_absent_entry_is_noop() {
        let mut store = make_store();
        let result = store.set(&ExperimentKey::new("exp1"), &UserId::new("tester"), None);
        assert!(result.is_ok());
    }

    #[test]
    fn test_unknown_experiment_rejected() {
        let mut store = make_store();
        let result = store.set(
            &ExperimentKey::new("vanished"),
            &UserId::new("tester"),
            Some(&VariationKey::new("A")),
        );
        assert!(matches!(result, Err(OverrideError::UnknownExperiment(_))));
    }

    #[test]
    fn test_unknown_variation_rejected() {
        let mut store = make_store();
        let result = store.set(
            &ExperimentKey::new("exp1"),
            &UserId::new("tester"),
            Some(&VariationKey::new("Z")),
        );
        assert!(matches!(
            result,
            Err(OverrideError::UnknownVariation { .. })
        ));
    }

    #[test]
    fn test_empty_experiment_key_rejected() {
        let mut store = make_store();
        let result = store.set(
            &ExperimentKey::new(""),
            &UserId::new("tester"),
            Some(&VariationKey::new("A")),
        );
        assert!(matches!(result, Err(OverrideError::EmptyExperimentKey)));
    }

    #[test]
    fn test_overrides_are_scoped_per_user() {
        let mut store = make_store();
        let exp = ExperimentKey::new("exp1");

        store
            .set(&exp, &UserId::new("alice"), Some(&VariationKey::new("A")))
            .unwrap();
        store
            .set(&exp, &UserId::new("bob"), Some(&VariationKey::new("B")))
            .unwrap();

        assert_eq!(
            store.get(&UserId::new("alice"), &exp),
            Some(&VariationKey::new("A"))
        );
        assert_eq!(
            store.get(&UserId::new("bob"), &exp),
            Some(&VariationKey::new("B"))
        );
    }

    #[test]
    fn test_entry_records_timestamp() {
        let mut store = make_store();
        let user = UserId::new("tester");
        let exp = ExperimentKey::new("exp2");

        let before = Utc::now();
        store
            .set(&exp, &user, Some(&VariationKey::new("control")))
            .unwrap();

        let entry = store.entry(&user, &exp).unwrap();
        assert_eq!(entry.variation, VariationKey::new("control"));
        assert!(entry.forced_at >= before);
    }
}

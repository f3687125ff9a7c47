use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};

/// Action keys selected for a webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionSet(BTreeSet<String>);

impl ActionSet {
    /// Set of the given keys; duplicates collapse.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(keys.into_iter().map(Into::into).collect())
    }

    /// Whether `key` is selected.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    /// Returns whether the key was newly selected.
    pub fn insert(&mut self, key: &str) -> bool {
        self.0.insert(key.to_string())
    }

    /// Removing a key that is not selected is a no-op.
    pub fn remove(&mut self, key: &str) -> bool {
        self.0.remove(key)
    }

    /// Selects or clears one key.
    pub fn set(&mut self, key: &str, checked: bool) {
        if checked {
            self.insert(key);
        } else {
            self.remove(key);
        }
    }

    /// Number of selected keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keys in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    /// Keys as sent to the backend.
    pub fn to_list(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn removing_absent_key_is_noop() {
        let mut actions = ActionSet::from_keys(["TASKS_CREATED"]);
        assert!(!actions.remove("PROJECT_DELETED"));
        assert_eq!(actions.to_list(), vec!["TASKS_CREATED".to_string()]);
    }

    proptest! {
        #[test]
        fn toggle_on_then_off_restores_the_set(
            keys in proptest::collection::btree_set("[A-Z_]{1,8}", 0..6),
            toggled in "[A-Z_]{1,8}",
        ) {
            let mut actions = ActionSet::from_keys(keys.iter().cloned());
            prop_assume!(!actions.contains(&toggled));
            let before = actions.clone();

            actions.set(&toggled, true);
            prop_assert!(actions.contains(&toggled));
            actions.set(&toggled, false);

            prop_assert_eq!(actions, before);
        }
    }
}

use indexmap::IndexMap;
use std::sync::Arc;
use crate::enums::header_field::HeaderField;
use crate::structs::header_row::HeaderRow;

/// Editable, ordered header rows.
///
/// Keys may be blank or repeated while the user edits; [`HeaderRows::collapse`]
/// turns the rows into the unique-keyed map the backend stores. Rows are held
/// copy-on-write: a [`HeaderRows::snapshot`] taken before an edit never
/// observes that edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderRows {
    rows: Arc<Vec<HeaderRow>>,
}

impl HeaderRows {
    /// Wraps the given rows.
    pub fn new(rows: Vec<HeaderRow>) -> Self {
        Self { rows: Arc::new(rows) }
    }

    /// One row per map entry, in the map's order.
    pub fn from_map(headers: &IndexMap<String, String>) -> Self {
        Self::new(headers.iter().map(|(k, v)| HeaderRow::new(k, v)).collect())
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&HeaderRow> {
        self.rows.get(index)
    }

    /// Rows in order.
    pub fn iter(&self) -> impl Iterator<Item = &HeaderRow> {
        self.rows.iter()
    }

    /// Index of the first row with this key.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.rows.iter().position(|row| row.key == key)
    }

    /// Shares the current rows without copying them.
    pub fn snapshot(&self) -> Arc<Vec<HeaderRow>> {
        Arc::clone(&self.rows)
    }

    /// Whether any row has an empty key.
    pub fn has_blank_key(&self) -> bool {
        self.rows.iter().any(HeaderRow::is_blank_key)
    }

    /// Appends an empty row unless one with a blank key is already there.
    /// Returns whether a row was added.
    pub fn add_blank(&mut self) -> bool {
        if self.has_blank_key() {
            return false;
        }
        Arc::make_mut(&mut self.rows).push(HeaderRow::default());
        true
    }

    /// Positional removal; later rows shift down.
    pub fn remove(&mut self, index: usize) -> Option<HeaderRow> {
        if index >= self.rows.len() {
            return None;
        }
        Some(Arc::make_mut(&mut self.rows).remove(index))
    }

    /// Replaces one component of the row at `index`. Returns `false` when
    /// there is no such row.
    pub fn edit(&mut self, field: HeaderField, index: usize, text: &str) -> bool {
        if index >= self.rows.len() {
            return false;
        }
        let row = &mut Arc::make_mut(&mut self.rows)[index];
        match field {
            HeaderField::Key => row.key = text.to_string(),
            HeaderField::Value => row.value = text.to_string(),
        }
        true
    }

    /// Later rows win over earlier rows with the same key. A key keeps the
    /// position of its first row.
    pub fn collapse(&self) -> IndexMap<String, String> {
        self.rows
            .iter()
            .map(|row| (row.key.clone(), row.value.clone()))
            .collect()
    }

    /// Owned copy of the rows.
    pub fn to_vec(&self) -> Vec<HeaderRow> {
        self.rows.as_ref().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rows(pairs: &[(&str, &str)]) -> HeaderRows {
        HeaderRows::new(pairs.iter().map(|(k, v)| HeaderRow::new(k, v)).collect())
    }

    #[test]
    fn add_blank_is_noop_when_blank_key_exists() {
        let mut headers = rows(&[("X-Foo", "bar"), ("", "pending")]);
        let before = headers.clone();

        assert!(!headers.add_blank());
        assert_eq!(headers, before);
    }

    #[test]
    fn add_blank_appends_empty_row() {
        let mut headers = rows(&[("X-Foo", "bar")]);

        assert!(headers.add_blank());
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get(1), Some(&HeaderRow::default()));
    }

    #[test]
    fn remove_out_of_range_leaves_rows_alone() {
        let mut headers = rows(&[("A", "1")]);
        assert_eq!(headers.remove(3), None);
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn snapshot_survives_later_edits() {
        let mut headers = rows(&[("X-Foo", "bar")]);
        let snapshot = headers.snapshot();

        assert!(headers.edit(HeaderField::Value, 0, "baz"));

        assert_eq!(snapshot[0].value, "bar");
        assert_eq!(headers.get(0).map(|r| r.value.as_str()), Some("baz"));
    }

    #[test]
    fn collapse_keeps_last_duplicate() {
        let headers = rows(&[("A", "first"), ("B", "b"), ("A", "second")]);
        let map = headers.collapse();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("A").map(String::as_str), Some("second"));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    proptest! {
        #[test]
        fn remove_shrinks_by_one_and_keeps_order(
            pairs in proptest::collection::vec(("[a-z]{0,3}", "[a-z]{0,3}"), 1..12),
            pick in any::<prop::sample::Index>(),
        ) {
            let mut headers = HeaderRows::new(
                pairs.iter().map(|(k, v)| HeaderRow::new(k, v)).collect(),
            );
            let index = pick.index(headers.len());
            let mut expected = headers.to_vec();
            expected.remove(index);

            let removed = headers.remove(index);

            prop_assert!(removed.is_some());
            prop_assert_eq!(headers.len(), pairs.len() - 1);
            prop_assert_eq!(headers.to_vec(), expected);
        }

        #[test]
        fn add_blank_never_creates_a_second_blank_row(
            pairs in proptest::collection::vec(("[a-z]{0,2}", "[a-z]{0,2}"), 0..8),
            attempts in 1usize..5,
        ) {
            let mut headers = HeaderRows::new(
                pairs.iter().map(|(k, v)| HeaderRow::new(k, v)).collect(),
            );
            let blanks_before = headers.iter().filter(|r| r.is_blank_key()).count();

            for _ in 0..attempts {
                headers.add_blank();
            }

            let blanks_after = headers.iter().filter(|r| r.is_blank_key()).count();
            prop_assert_eq!(blanks_after, blanks_before.max(1));
        }
    }
}

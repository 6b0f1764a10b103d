use crate::constants::{INITIAL_VISIBLE, LOAD_MORE_STEP};
use crate::models::Resource;

/// A fetched collection plus the search term and reveal position. Filtering
/// and slicing are recomputed on every read; the reveal count drops back to
/// the initial step whenever the collection changes size.
#[derive(Debug, Clone)]
pub struct ListView<R: Resource> {
    records: Vec<R>,
    search: String,
    reveal: usize,
}

impl<R: Resource> Default for ListView<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> ListView<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            search: String::new(),
            reveal: INITIAL_VISIBLE,
        }
    }

    pub fn with_records(records: Vec<R>) -> Self {
        let mut view = Self::new();
        view.replace(records);
        view
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search.push(c);
    }

    pub fn pop_search_char(&mut self) {
        self.search.pop();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    /// Records matching the current search term, in fetch order.
    pub fn filtered(&self) -> Vec<&R> {
        self.records.iter().filter(|r| r.matches(&self.search)).collect()
    }

    /// Revealed slice of the filtered records.
    pub fn visible(&self) -> Vec<&R> {
        let mut filtered = self.filtered();
        filtered.truncate(self.visible_count());
        filtered
    }

    pub fn visible_count(&self) -> usize {
        self.reveal
    }

    pub fn can_load_more(&self) -> bool {
        self.visible_count() < self.filtered().len()
    }

    /// Hidden filtered records not yet revealed.
    pub fn remaining(&self) -> usize {
        self.filtered().len().saturating_sub(self.visible_count())
    }

    /// Reveals the next step. Returns false when everything is visible.
    pub fn load_more(&mut self) -> bool {
        if !self.can_load_more() {
            return false;
        }
        self.reveal += LOAD_MORE_STEP;
        true
    }

    /// Shows `limit` rows, rounded up to the next reveal step.
    pub fn reveal_at_least(&mut self, limit: usize) {
        while self.visible_count() < limit && self.load_more() {}
    }

    /// Back to a fresh mount: no records, no search term, initial reveal.
    pub fn reset(&mut self) {
        self.records.clear();
        self.search.clear();
        self.reveal = INITIAL_VISIBLE;
    }

    /// Swaps in a freshly fetched collection.
    pub fn replace(&mut self, records: Vec<R>) {
        if records.len() != self.records.len() {
            self.reveal = INITIAL_VISIBLE;
        }
        self.records = records;
    }

    pub fn find(&self, key: &str) -> Option<&R> {
        self.records.iter().find(|r| r.key() == key)
    }

    pub fn find_mut(&mut self, key: &str) -> Option<&mut R> {
        self.records.iter_mut().find(|r| r.key() == key)
    }

    /// Drops every record with `key`. Returns whether anything was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.key() != key);
        let removed = self.records.len() != before;
        if removed {
            self.reveal = INITIAL_VISIBLE;
        }
        removed
    }

    /// Text to draw instead of rows, when nothing is visible.
    pub fn empty_message(&self) -> Option<String> {
        if self.visible().is_empty() {
            Some(format!("No {} found", R::PLURAL))
        } else {
            None
        }
    }
}

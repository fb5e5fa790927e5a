//! Owned result buffer for the current search.

/// Append-only sequence of sanitized result lines.
///
/// Lines keep enumerator output order. Duplicates are kept. The store is
/// cleared and refilled on every new search, never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineStore {
    lines: Vec<String>,
}

impl LineStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `line` and append it.
    ///
    /// Empty lines are rejected so the store never holds one.
    pub fn append(&mut self, line: String) {
        if line.is_empty() {
            return;
        }
        self.lines.push(line);
    }

    /// Drop every owned line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Replace the contents with `lines`, keeping their order.
    pub fn replace<I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.clear();
        for line in lines {
            self.append(line);
        }
    }

    /// Number of stored lines.
    pub fn size(&self) -> usize {
        self.lines.len()
    }

    /// True when no lines are stored.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at `index`, or `None` outside `[0, size)`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Iterate lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

impl FromIterator<String> for LineStore {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        let mut store = Self::new();
        store.replace(iter);
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_of(lines: &[&str]) -> LineStore {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn new_store_is_empty() {
        let store = LineStore::new();
        assert_eq!(store.size(), 0);
        assert!(store.is_empty());
        assert_eq!(store.get(0), None);
    }

    #[test]
    fn append_keeps_insertion_order() {
        let store = store_of(&["/b", "/a", "/c"]);
        let lines: Vec<&str> = store.iter().collect();
        assert_eq!(lines, vec!["/b", "/a", "/c"]);
    }

    #[test]
    fn append_keeps_duplicates() {
        let store = store_of(&["/tmp", "/tmp"]);
        assert_eq!(store.size(), 2);
    }

    #[test]
    fn append_rejects_empty_line() {
        let mut store = LineStore::new();
        store.append(String::new());
        assert!(store.is_empty());
    }

    #[test]
    fn get_out_of_range_is_none() {
        let store = store_of(&["/etc"]);
        assert_eq!(store.get(0), Some("/etc"));
        assert_eq!(store.get(1), None);
    }

    #[test]
    fn clear_resets_to_empty() {
        let mut store = store_of(&["/a", "/b"]);
        store.clear();
        assert_eq!(store.size(), 0);
    }

    #[test]
    fn replace_discards_previous_results() {
        let mut store = store_of(&["/old/one", "/old/two"]);
        store.replace(vec!["/new".to_string()]);
        assert_eq!(store.size(), 1);
        assert_eq!(store.get(0), Some("/new"));
    }

    #[test]
    fn grows_past_initial_capacity() {
        let mut store = LineStore::new();
        for i in 0..1_000 {
            store.append(format!("/path/{i}"));
        }
        assert_eq!(store.size(), 1_000);
        assert_eq!(store.get(999), Some("/path/999"));
    }
}

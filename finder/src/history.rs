//! Remembers recently submitted values per field, newest first.
//!
//! Every field keeps at most `limit` distinct values; submitting a value
//! again moves it to the front instead of storing it twice.
use std::collections::{BTreeMap, VecDeque};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct History {
    #[serde(skip)]
    limit: usize,
    fields: BTreeMap<String, VecDeque<String>>,
}

impl History {
    pub fn new(limit: usize) -> History {
        History {
            limit,
            fields: BTreeMap::new(),
        }
    }

    /// A missing file is an empty history.
    pub fn load<P: AsRef<Path>>(path: P, limit: usize) -> Result<History> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("No history at '{}'", path.display());
            return Ok(History::new(limit));
        }
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read history from '{}'", path.display()))?;
        let mut history = serde_json::from_str::<History>(&source)
            .with_context(|| format!("Failed to parse history in '{}'", path.display()))?;
        history.limit = limit;
        for values in history.fields.values_mut() {
            values.truncate(limit);
        }
        Ok(history)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write history to '{}'", path.display()))?;
        Ok(())
    }

    pub fn record(&mut self, field: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() || self.limit == 0 {
            return;
        }
        let values = self.fields.entry(field.to_owned()).or_default();
        values.retain(|v| v != value);
        values.push_front(value.to_owned());
        values.truncate(self.limit);
    }

    pub fn recent(&self, field: &str) -> impl Iterator<Item = &str> {
        self.fields
            .get(field)
            .into_iter()
            .flat_map(|values| values.iter().map(String::as_str))
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> { self.fields.keys().map(String::as_str) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recent(history: &History, field: &str) -> Vec<String> {
        history.recent(field).map(String::from).collect()
    }

    #[test]
    fn newest_values_come_first() {
        let mut history = History::new(5);
        history.record("query", "a");
        history.record("query", "b");
        history.record("channel", "UC1");
        assert_eq!(recent(&history, "query"), vec!["b", "a"]);
        assert_eq!(history.fields().collect::<Vec<_>>(), vec!["channel", "query"]);
        assert_eq!(recent(&history, "order"), Vec::<String>::new());
    }

    #[test]
    fn resubmitting_moves_to_front() {
        let mut history = History::new(5);
        for v in &["a", "b", "c", "a"] {
            history.record("query", v);
        }
        assert_eq!(recent(&history, "query"), vec!["a", "c", "b"]);
    }

    #[test]
    fn fields_are_bounded() {
        let mut history = History::new(3);
        for i in 0..10 {
            history.record("query", &i.to_string());
        }
        assert_eq!(recent(&history, "query"), vec!["9", "8", "7"]);
    }

    #[test]
    fn blank_values_are_ignored() {
        let mut history = History::new(3);
        history.record("query", "   ");
        assert_eq!(history.fields().count(), 0);
    }

    #[test]
    fn round_trips_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.json");

        let missing = History::load(&path, 4).unwrap();
        assert_eq!(missing.fields().count(), 0);

        let mut history = History::new(4);
        for v in &["a", "b", "c", "d"] {
            history.record("query", v);
        }
        history.save(&path).unwrap();

        let smaller = History::load(&path, 2).unwrap();
        assert_eq!(recent(&smaller, "query"), vec!["d", "c"]);
    }

    #[test]
    fn corrupt_files_are_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(History::load(&path, 4).is_err());
    }
}

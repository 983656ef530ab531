// src/history.rs
//
// Historial de resultados: un log JSON de solo-añadir bajo una única clave.

use crate::model::Category;
use crate::storage::{KeyValueStore, StorageError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const HISTORY_KEY: &str = "test-history";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryTally {
    pub correct: usize,
    pub total: usize,
}

/// Resumen persistido de una sesión terminada. Nunca se modifica.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    /// Momento de finalización en milisegundos desde epoch
    pub date: i64,
    pub score: u32,
    pub correct_answers: usize,
    pub total_questions: usize,
    /// Segundos
    pub time_spent: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_breakdown: Option<BTreeMap<Category, CategoryTally>>,
}

pub struct HistoryStore<S> {
    store: S,
}

impl<S: KeyValueStore> HistoryStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Todo el historial, del más antiguo al más reciente. Datos corruptos = vacío.
    pub fn read(&self) -> Vec<TestResult> {
        self.store
            .get(HISTORY_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn read_newest_first(&self) -> Vec<TestResult> {
        let mut results = self.read();
        results.reverse();
        results
    }

    pub fn append(&mut self, result: TestResult) -> Result<(), StorageError> {
        let mut results = self.read();
        results.push(result);
        let json = serde_json::to_string(&results)?;
        self.store.set(HISTORY_KEY, &json)
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.store.remove(HISTORY_KEY)
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn result(date: i64, score: u32) -> TestResult {
        TestResult {
            date,
            score,
            correct_answers: 1,
            total_questions: 2,
            time_spent: 30,
            category_breakdown: None,
        }
    }

    #[test]
    fn append_preserves_order() {
        let mut history = HistoryStore::new(MemoryStore::default());
        let r1 = result(1, 50);
        let r2 = result(2, 100);
        history.append(r1.clone()).expect("append r1");
        history.append(r2.clone()).expect("append r2");
        assert_eq!(history.read(), vec![r1.clone(), r2.clone()]);
        assert_eq!(history.read_newest_first(), vec![r2, r1]);
    }

    #[test]
    fn clear_removes_the_key() {
        let mut history = HistoryStore::new(MemoryStore::default());
        history.append(result(1, 10)).expect("append");
        history.clear().expect("clear");
        assert!(history.read().is_empty());
        assert_eq!(history.store().get(HISTORY_KEY), None);
    }

    #[test]
    fn corrupt_data_reads_as_empty() {
        let mut store = MemoryStore::default();
        store.set(HISTORY_KEY, "not json").expect("set");
        let history = HistoryStore::new(store);
        assert!(history.read().is_empty());
    }

    #[test]
    fn json_that_is_not_an_array_reads_as_empty() {
        let mut store = MemoryStore::default();
        store.set(HISTORY_KEY, r#"{"score": 3}"#).expect("set");
        assert!(HistoryStore::new(store).read().is_empty());
    }

    #[test]
    fn append_over_corrupt_data_starts_a_fresh_log() {
        let mut store = MemoryStore::default();
        store.set(HISTORY_KEY, "not json").expect("set");
        let mut history = HistoryStore::new(store);
        history.append(result(5, 80)).expect("append");
        assert_eq!(history.read(), vec![result(5, 80)]);
    }

    #[test]
    fn persisted_shape_uses_camel_case_and_category_keys() {
        let mut breakdown = BTreeMap::new();
        breakdown.insert(
            Category::NumericSeries,
            CategoryTally {
                correct: 2,
                total: 3,
            },
        );
        let r = TestResult {
            category_breakdown: Some(breakdown),
            ..result(1_700_000_000_000, 67)
        };
        let mut history = HistoryStore::new(MemoryStore::default());
        history.append(r.clone()).expect("append");

        let raw = history.store().get(HISTORY_KEY).expect("hay datos");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("json válido");
        let first = &value[0];
        assert_eq!(first["date"], 1_700_000_000_000_i64);
        assert_eq!(first["correctAnswers"], 1);
        assert_eq!(first["totalQuestions"], 2);
        assert_eq!(first["timeSpent"], 30);
        assert_eq!(first["categoryBreakdown"]["numeric_series"]["correct"], 2);
        assert_eq!(history.read(), vec![r]);
    }

    #[test]
    fn breakdown_is_optional_when_reading() {
        let mut store = MemoryStore::default();
        store
            .set(
                HISTORY_KEY,
                r#"[{"date":1,"score":70,"correctAnswers":7,"totalQuestions":10,"timeSpent":12}]"#,
            )
            .expect("set");
        let results = HistoryStore::new(store).read();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 70);
        assert!(results[0].category_breakdown.is_none());
    }
}

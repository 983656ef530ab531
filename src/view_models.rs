// src/view_models.rs

use crate::history::{CategoryTally, TestResult};
use crate::model::Category;
use crate::scoring::percentage;

#[derive(Clone, Debug, PartialEq)]
pub struct HistoryRow {
    pub date: String,
    pub score: u32,
    pub correct: usize,
    pub total: usize,
    pub time: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BreakdownRow {
    pub category: Category,
    pub correct: usize,
    pub total: usize,
    pub percent: u32,
}

impl HistoryRow {
    pub fn from_result(r: &TestResult) -> Self {
        Self {
            date: format_date(r.date),
            score: r.score,
            correct: r.correct_answers,
            total: r.total_questions,
            time: format_duration(r.time_spent),
        }
    }

    pub fn score_label(&self) -> String {
        score_label(self.score)
    }
}

impl BreakdownRow {
    pub fn label(&self) -> String {
        format!("{} ({}/{})", self.category.label(), self.correct, self.total)
    }
}

/// Filas del desglose por categoría, en el orden fijo de `Category::ALL`.
pub fn breakdown_rows(r: &TestResult) -> Vec<BreakdownRow> {
    let Some(breakdown) = &r.category_breakdown else {
        return Vec::new();
    };
    Category::ALL
        .iter()
        .filter_map(|c| {
            breakdown.get(c).map(|CategoryTally { correct, total }| BreakdownRow {
                category: *c,
                correct: *correct,
                total: *total,
                percent: percentage(*correct, *total),
            })
        })
        .collect()
}

pub fn score_label(score: u32) -> String {
    if score >= 90 {
        format!("{score}% 🌟")
    } else if score >= 70 {
        format!("{score}% ✅")
    } else {
        format!("{score}% 💪")
    }
}

pub fn format_duration(seconds: u64) -> String {
    let (m, s) = (seconds / 60, seconds % 60);
    if m == 0 {
        format!("{s} s")
    } else {
        format!("{m} min {s:02} s")
    }
}

pub fn format_date(epoch_ms: i64) -> String {
    match chrono::DateTime::from_timestamp_millis(epoch_ms) {
        Some(utc) => utc
            .with_timezone(&chrono::Local)
            .format("%d/%m/%Y %H:%M")
            .to_string(),
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn durations_read_naturally() {
        assert_eq!(format_duration(0), "0 s");
        assert_eq!(format_duration(45), "45 s");
        assert_eq!(format_duration(65), "1 min 05 s");
        assert_eq!(format_duration(600), "10 min 00 s");
    }

    #[test]
    fn dates_have_a_fixed_shape() {
        let s = format_date(1_700_000_000_000);
        assert_eq!(s.len(), "dd/mm/yyyy HH:MM".len());
        assert_eq!(s.matches('/').count(), 2);
        assert_eq!(format_date(i64::MAX), "—");
    }

    #[test]
    fn breakdown_rows_follow_category_order() {
        let mut b = BTreeMap::new();
        b.insert(
            Category::FigureClassification,
            CategoryTally {
                correct: 1,
                total: 1,
            },
        );
        b.insert(
            Category::NumericAnalogies,
            CategoryTally {
                correct: 1,
                total: 3,
            },
        );
        let r = TestResult {
            date: 0,
            score: 50,
            correct_answers: 2,
            total_questions: 4,
            time_spent: 10,
            category_breakdown: Some(b),
        };
        let rows = breakdown_rows(&r);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, Category::NumericAnalogies);
        assert_eq!(rows[0].percent, 33);
        assert_eq!(rows[1].category, Category::FigureClassification);
        assert_eq!(rows[1].percent, 100);

        let row = HistoryRow::from_result(&r);
        assert_eq!(row.time, "10 s");
        assert_eq!(row.score_label(), "50% 💪");
    }

    #[test]
    fn missing_breakdown_gives_no_rows() {
        let r = TestResult {
            date: 0,
            score: 0,
            correct_answers: 0,
            total_questions: 1,
            time_spent: 0,
            category_breakdown: None,
        };
        assert!(breakdown_rows(&r).is_empty());
    }
}

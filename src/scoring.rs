// src/scoring.rs

use crate::history::{CategoryTally, TestResult};
use crate::model::Question;
use crate::session::AnswerMap;
use std::collections::BTreeMap;

/// round(100 × correct / total), redondeando .5 hacia arriba. 0 si no hay preguntas.
pub fn percentage(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * correct + total) / (2 * total)) as u32
}

/// Resumen de una sesión. Una pregunta sin respuesta cuenta como fallo.
pub fn summarize(
    questions: &[Question],
    answers: &AnswerMap,
    started_ms: i64,
    finished_ms: i64,
) -> TestResult {
    let mut breakdown: BTreeMap<_, CategoryTally> = BTreeMap::new();
    let mut correct = 0;

    for q in questions {
        let ok = answers
            .get(&q.id)
            .map(|chosen| q.is_correct(chosen))
            .unwrap_or(false);
        let tally = breakdown.entry(q.category).or_default();
        tally.total += 1;
        if ok {
            tally.correct += 1;
            correct += 1;
        }
    }

    let elapsed_ms = finished_ms.saturating_sub(started_ms).max(0) as u64;

    TestResult {
        date: finished_ms,
        score: percentage(correct, questions.len()),
        correct_answers: correct,
        total_questions: questions.len(),
        time_spent: (elapsed_ms + 500) / 1000,
        category_breakdown: Some(breakdown),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Difficulty, QuestionOption};

    fn question(id: &str, category: Category) -> Question {
        Question {
            id: id.to_string(),
            category,
            difficulty: Difficulty::Easy,
            prompt: format!("Pregunta {id}"),
            visual: None,
            options: ["a", "b"]
                .iter()
                .map(|o| QuestionOption {
                    id: o.to_string(),
                    label: o.to_uppercase(),
                    visual: None,
                })
                .collect(),
            correct_answer_id: "a".to_string(),
            explanation: String::new(),
            hint: None,
        }
    }

    fn answered(questions: &[Question], n_correct: usize) -> AnswerMap {
        questions
            .iter()
            .enumerate()
            .map(|(i, q)| {
                let choice = if i < n_correct { "a" } else { "b" };
                (q.id.clone(), choice.to_string())
            })
            .collect()
    }

    fn questions(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| question(&format!("q{i}"), Category::NumericSeries))
            .collect()
    }

    #[test]
    fn seven_of_ten_is_seventy() {
        let qs = questions(10);
        let r = summarize(&qs, &answered(&qs, 7), 0, 0);
        assert_eq!(r.score, 70);
        assert_eq!(r.correct_answers, 7);
        assert_eq!(r.total_questions, 10);
    }

    #[test]
    fn all_and_none_correct() {
        let qs = questions(3);
        assert_eq!(summarize(&qs, &answered(&qs, 3), 0, 0).score, 100);
        let qs = questions(4);
        assert_eq!(summarize(&qs, &answered(&qs, 0), 0, 0).score, 0);
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn unanswered_questions_count_as_wrong() {
        let qs = questions(2);
        let mut answers = AnswerMap::new();
        answers.insert("q0".to_string(), "a".to_string());
        let r = summarize(&qs, &answers, 0, 0);
        assert_eq!(r.correct_answers, 1);
        assert_eq!(r.score, 50);
    }

    #[test]
    fn breakdown_groups_by_category() {
        let qs = vec![
            question("s1", Category::NumericSeries),
            question("s2", Category::NumericSeries),
            question("m1", Category::FigureMatrices),
        ];
        let mut answers = AnswerMap::new();
        answers.insert("s1".into(), "a".into());
        answers.insert("s2".into(), "b".into());
        answers.insert("m1".into(), "a".into());

        let r = summarize(&qs, &answers, 0, 0);
        let breakdown = r.category_breakdown.expect("breakdown");
        assert_eq!(breakdown.len(), 2);
        assert_eq!(
            breakdown[&Category::NumericSeries],
            CategoryTally {
                correct: 1,
                total: 2
            }
        );
        assert_eq!(
            breakdown[&Category::FigureMatrices],
            CategoryTally {
                correct: 1,
                total: 1
            }
        );
    }

    #[test]
    fn time_spent_is_rounded_seconds() {
        let qs = questions(1);
        let answers = answered(&qs, 1);
        assert_eq!(summarize(&qs, &answers, 1_000, 62_400).time_spent, 61);
        assert_eq!(summarize(&qs, &answers, 1_000, 1_600).time_spent, 1);
        // Reloj hacia atrás
        let r = summarize(&qs, &answers, 5_000, 1_000);
        assert_eq!(r.time_spent, 0);
        assert_eq!(r.date, 1_000);
    }
}

// src/session.rs
//
// Máquina de estados de una sesión de test, independiente de la interfaz.

use crate::history::TestResult;
use crate::model::Question;
use crate::scoring::summarize;
use std::collections::BTreeMap;

/// id de pregunta -> id de la opción elegida
pub type AnswerMap = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Presenting,
    OptionSelected { option_id: String },
    ResultShown { option_id: String, correct: bool },
    Completed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub answers: AnswerMap,
    pub result: TestResult,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    NextQuestion,
    Finished(Completion),
}

#[derive(Debug, Clone)]
pub struct Session {
    questions: Vec<Question>,
    index: usize,
    phase: Phase,
    answers: AnswerMap,
    hint_visible: bool,
    started_ms: i64,
}

impl Session {
    /// `None` si la selección está vacía.
    pub fn start(questions: Vec<Question>, now_ms: i64) -> Option<Self> {
        if questions.is_empty() {
            return None;
        }
        Some(Self {
            questions,
            index: 0,
            phase: Phase::Presenting,
            answers: AnswerMap::new(),
            hint_visible: false,
            started_ms: now_ms,
        })
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.questions.len()
    }

    pub fn current(&self) -> &Question {
        &self.questions[self.index]
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    /// Opción resaltada (tentativa o ya enviada)
    pub fn selected(&self) -> Option<&str> {
        match &self.phase {
            Phase::OptionSelected { option_id } | Phase::ResultShown { option_id, .. } => {
                Some(option_id.as_str())
            }
            Phase::Presenting | Phase::Completed => None,
        }
    }

    pub fn is_answer_locked(&self) -> bool {
        matches!(self.phase, Phase::ResultShown { .. } | Phase::Completed)
    }

    /// Marca (o cambia) la opción tentativa. No hace nada con la respuesta bloqueada
    /// ni con ids que no son de la pregunta actual.
    pub fn select(&mut self, option_id: &str) -> bool {
        if self.is_answer_locked() || self.current().option(option_id).is_none() {
            return false;
        }
        self.phase = Phase::OptionSelected {
            option_id: option_id.to_string(),
        };
        true
    }

    /// Solo válido con una opción tentativa.
    pub fn submit(&mut self) -> bool {
        let Phase::OptionSelected { option_id } = &self.phase else {
            return false;
        };
        let option_id = option_id.clone();
        let question = self.current();
        let correct = question.is_correct(&option_id);
        let question_id = question.id.clone();

        self.answers.insert(question_id, option_id.clone());
        self.phase = Phase::ResultShown { option_id, correct };
        true
    }

    /// Solo válido con el resultado a la vista. En la última pregunta finaliza.
    pub fn advance(&mut self, now_ms: i64) -> Option<Advance> {
        if !matches!(self.phase, Phase::ResultShown { .. }) {
            return None;
        }
        if self.is_last() {
            self.phase = Phase::Completed;
            let result = summarize(&self.questions, &self.answers, self.started_ms, now_ms);
            return Some(Advance::Finished(Completion {
                answers: self.answers.clone(),
                result,
            }));
        }
        self.index += 1;
        self.phase = Phase::Presenting;
        self.hint_visible = false;
        Some(Advance::NextQuestion)
    }

    pub fn toggle_hint(&mut self) {
        if self.phase != Phase::Completed {
            self.hint_visible = !self.hint_visible;
        }
    }

    /// Abandona la sesión sin resumen.
    pub fn quit(self) {
        log::info!(
            "Sesión abandonada en la pregunta {} de {}",
            self.index + 1,
            self.questions.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Difficulty, QuestionOption};

    fn question(id: &str) -> Question {
        Question {
            id: id.to_string(),
            category: Category::NumericPuzzles,
            difficulty: Difficulty::Medium,
            prompt: String::from("¿Cuánto es 1 + 1?"),
            visual: None,
            options: [("a", "1"), ("b", "2"), ("c", "3")]
                .iter()
                .map(|(id, label)| QuestionOption {
                    id: id.to_string(),
                    label: label.to_string(),
                    visual: None,
                })
                .collect(),
            correct_answer_id: "b".to_string(),
            explanation: "1 + 1 = 2".to_string(),
            hint: Some("Cuenta con los dedos".to_string()),
        }
    }

    fn session(n: usize) -> Session {
        let qs = (0..n).map(|i| question(&format!("q{i}"))).collect();
        Session::start(qs, 1_000).expect("sesión no vacía")
    }

    #[test]
    fn empty_selection_does_not_start() {
        assert!(Session::start(Vec::new(), 0).is_none());
    }

    #[test]
    fn submit_without_selection_is_rejected() {
        let mut s = session(2);
        assert!(!s.submit());
        assert_eq!(s.phase(), &Phase::Presenting);
        assert!(s.answers().is_empty());
    }

    #[test]
    fn reselecting_overwrites_the_tentative_choice() {
        let mut s = session(1);
        assert!(s.select("a"));
        assert!(s.select("c"));
        assert_eq!(s.selected(), Some("c"));
        assert!(s.answers().is_empty());
    }

    #[test]
    fn unknown_option_is_ignored() {
        let mut s = session(1);
        assert!(!s.select("z"));
        assert_eq!(s.phase(), &Phase::Presenting);
    }

    #[test]
    fn selecting_after_result_has_no_effect() {
        let mut s = session(2);
        s.select("a");
        assert!(s.submit());
        assert_eq!(
            s.phase(),
            &Phase::ResultShown {
                option_id: "a".into(),
                correct: false
            }
        );
        assert!(!s.select("b"));
        assert_eq!(s.selected(), Some("a"));
        assert_eq!(s.answers().get("q0").map(String::as_str), Some("a"));
        // Un segundo envío tampoco cambia nada
        assert!(!s.submit());
    }

    #[test]
    fn advance_requires_a_shown_result() {
        let mut s = session(2);
        assert_eq!(s.advance(2_000), None);
        s.select("b");
        assert_eq!(s.advance(2_000), None);
        s.submit();
        assert_eq!(s.advance(2_000), Some(Advance::NextQuestion));
        assert_eq!(s.index(), 1);
        assert_eq!(s.phase(), &Phase::Presenting);
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn hint_resets_only_on_question_change() {
        let mut s = session(2);
        s.toggle_hint();
        assert!(s.hint_visible());
        s.select("a");
        s.select("b");
        assert!(s.hint_visible());
        s.submit();
        assert!(s.hint_visible());
        s.advance(0);
        assert!(!s.hint_visible());
    }

    #[test]
    fn last_question_always_finalizes() {
        let mut s = session(2);
        s.select("b");
        s.submit();
        s.advance(2_000);
        s.select("a");
        s.submit();
        let Some(Advance::Finished(done)) = s.advance(31_000) else {
            panic!("la última pregunta debe finalizar");
        };
        assert_eq!(s.phase(), &Phase::Completed);
        assert_eq!(s.index(), 1);
        assert_eq!(done.answers.len(), 2);
        assert_eq!(done.result.correct_answers, 1);
        assert_eq!(done.result.total_questions, 2);
        assert_eq!(done.result.score, 50);
        assert_eq!(done.result.time_spent, 30);
        assert_eq!(done.result.date, 31_000);

        // Completada: nada más responde
        assert_eq!(s.advance(40_000), None);
        assert!(!s.select("b"));
        assert!(!s.submit());
    }

    #[test]
    fn single_question_session_finishes_after_one_answer() {
        let mut s = session(1);
        assert!(s.is_last());
        s.select("b");
        s.submit();
        match s.advance(1_000) {
            Some(Advance::Finished(done)) => assert_eq!(done.result.score, 100),
            other => panic!("esperaba Finished, llegó {other:?}"),
        }
    }
}

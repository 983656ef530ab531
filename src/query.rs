// src/query.rs

use crate::model::{Category, Difficulty, Filter, Question};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Petición de preguntas para una sesión. `count <= 0` significa "sin límite".
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct QuestionQuery {
    pub category: Filter<Category>,
    pub difficulty: Filter<Difficulty>,
    pub count: i32,
    pub shuffle: bool,
}

impl Default for QuestionQuery {
    fn default() -> Self {
        Self {
            category: Filter::Mixed,
            difficulty: Filter::Mixed,
            count: 10,
            shuffle: true,
        }
    }
}

impl QuestionQuery {
    pub fn matches(&self, q: &Question) -> bool {
        self.category.matches(&q.category) && self.difficulty.matches(&q.difficulty)
    }
}

/// Fisher–Yates: de la última posición a la primera, intercambia con un índice
/// uniforme en `[0, i]`.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Filtra, baraja (opcional) y recorta el banco según la petición.
pub fn select_questions<R: Rng + ?Sized>(
    bank: &[Question],
    query: &QuestionQuery,
    rng: &mut R,
) -> Vec<Question> {
    let mut selected: Vec<Question> = bank.iter().filter(|q| query.matches(q)).cloned().collect();

    if query.shuffle {
        shuffle(&mut selected, rng);
    }
    if query.count > 0 {
        selected.truncate(query.count as usize);
    }
    selected
}

/// Tabla cruzada categoría × dificultad (incluyendo "todas") del banco completo.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BankCounts {
    cells: HashMap<(Filter<Category>, Filter<Difficulty>), usize>,
}

impl BankCounts {
    pub fn compute(bank: &[Question]) -> Self {
        let mut cells = HashMap::new();
        for category in Filter::<Category>::all_choices() {
            for difficulty in Filter::<Difficulty>::all_choices() {
                let n = bank
                    .iter()
                    .filter(|q| category.matches(&q.category) && difficulty.matches(&q.difficulty))
                    .count();
                cells.insert((category, difficulty), n);
            }
        }
        Self { cells }
    }

    pub fn get(&self, category: Filter<Category>, difficulty: Filter<Difficulty>) -> usize {
        self.cells.get(&(category, difficulty)).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.get(Filter::Mixed, Filter::Mixed)
    }
}

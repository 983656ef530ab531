// src/data.rs

use crate::model::Question;
use std::sync::OnceLock;

static BANK: OnceLock<Vec<Question>> = OnceLock::new();

/// Carga el banco de preguntas desde el YAML embebido
pub fn read_questions_embedded() -> Vec<Question> {
    let file_content = include_str!("data/question_bank.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear el banco de preguntas YAML")
}

/// Banco global de solo lectura; se parsea una única vez.
pub fn question_bank() -> &'static [Question] {
    BANK.get_or_init(|| {
        let bank = read_questions_embedded();
        log::debug!("Banco de preguntas cargado: {} preguntas", bank.len());
        bank
    })
}

// src/config.rs

use std::path::PathBuf;

pub const DATA_DIR_VAR: &str = "COGAT_QUIZ_DATA_DIR";
pub const DEFAULT_COUNT_VAR: &str = "COGAT_QUIZ_DEFAULT_COUNT";
const DEFAULT_COUNT: i32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Carpeta del historial en nativo (en web se usa localStorage)
    pub data_dir: PathBuf,
    /// Nº de preguntas inicial si no hay preferencias guardadas
    pub default_count: i32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            default_count: DEFAULT_COUNT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables inyectable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let data_dir = lookup(DATA_DIR_VAR)
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let default_count = match lookup(DEFAULT_COUNT_VAR) {
            Some(raw) => raw.trim().parse::<i32>().unwrap_or_else(|_| {
                log::warn!("{DEFAULT_COUNT_VAR}={raw:?} no es un número; uso {DEFAULT_COUNT}");
                DEFAULT_COUNT
            }),
            None => defaults.default_count,
        };

        Self {
            data_dir,
            default_count,
        }
    }
}

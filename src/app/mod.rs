use crate::config::AppConfig;
use crate::data::question_bank;
use crate::history::{HistoryStore, TestResult};
use crate::model::{AppState, Question};
use crate::query::QuestionQuery;
use crate::session::Session;
use crate::storage::{KeyValueStore, default_store};
use eframe::APP_KEY;

// Submódulos
pub mod actions;
pub mod completion;
pub mod navigation;
pub mod queries;

// Re-export de view models
pub use crate::view_models::{BreakdownRow, HistoryRow};

pub struct QuizApp {
    pub state: AppState,
    /// Última configuración de test elegida; se guarda con eframe
    pub setup: QuestionQuery,
    pub session: Option<Session>,
    pub last_result: Option<TestResult>,
    history: HistoryStore<Box<dyn KeyValueStore>>,
    pub message: String,
    pub confirm_clear: bool,
    /// Filas del historial ya leídas; se refrescan al cambiar el historial
    history_cache: Vec<HistoryRow>,
    bank: &'static [Question],
}

impl QuizApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = AppConfig::from_env();
        let setup = cc
            .storage
            .and_then(|s| eframe::get_value::<QuestionQuery>(s, APP_KEY))
            .unwrap_or(QuestionQuery {
                count: config.default_count,
                ..QuestionQuery::default()
            });
        let store = default_store(&config);
        log::info!("Historial en {:?}", config.data_dir);

        Self::with_store(setup, store)
    }

    /// Constructor sin contexto de egui: útil para tests y para inyectar otro almacenamiento.
    pub fn with_store(setup: QuestionQuery, store: Box<dyn KeyValueStore>) -> Self {
        let mut app = Self {
            state: AppState::Welcome,
            setup,
            session: None,
            last_result: None,
            history: HistoryStore::new(store),
            message: String::new(),
            confirm_clear: false,
            history_cache: Vec::new(),
            bank: question_bank(),
        };
        app.refrescar_historial();
        app
    }
}

/// Milisegundos desde epoch (también en wasm).
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

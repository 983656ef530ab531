use super::*;
use crate::query::select_questions;

impl QuizApp {
    pub fn volver_inicio(&mut self) {
        if let Some(session) = self.session.take() {
            session.quit();
        }
        self.state = AppState::Welcome;
        self.message.clear();
    }

    pub fn abrir_configuracion(&mut self) {
        self.state = AppState::Setup;
        self.message.clear();
    }

    pub fn abrir_historial(&mut self) {
        self.state = AppState::History;
        self.confirm_clear = false;
        self.message.clear();
        self.refrescar_historial();
    }

    /// Selecciona las preguntas según `setup` y arranca la sesión.
    /// Si no hay ninguna, se queda en la configuración con un aviso.
    pub fn empezar_test(&mut self) {
        let mut rng = rand::thread_rng();
        let questions = select_questions(self.bank, &self.setup, &mut rng);

        match Session::start(questions, now_millis()) {
            Some(session) => {
                log::info!(
                    "Nueva sesión: {} preguntas (categoría {:?}, dificultad {:?}, barajar {})",
                    session.len(),
                    self.setup.category,
                    self.setup.difficulty,
                    self.setup.shuffle
                );
                self.session = Some(session);
                self.last_result = None;
                self.state = AppState::Quiz;
                self.message.clear();
            }
            None => {
                self.state = AppState::Setup;
                self.message = "⚠ No hay preguntas con esa combinación. Prueba otra.".into();
            }
        }
    }
}

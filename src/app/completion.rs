use super::*;
use crate::session::Completion;

impl QuizApp {
    /// Recibe la sesión terminada: guarda el resumen y lleva a la vista de resultados.
    pub fn finalizar(&mut self, done: Completion) {
        self.session = None;
        let Completion { answers, result } = done;
        log::info!(
            "Sesión terminada: {}% ({}/{}) en {} s",
            result.score,
            result.correct_answers,
            result.total_questions,
            result.time_spent
        );
        log::debug!("Respuestas: {answers:?}");

        self.message.clear();
        if let Err(e) = self.history.append(result.clone()) {
            log::warn!("No se pudo guardar el resultado: {e}");
            self.message = format!("⚠ No se pudo guardar el resultado: {e}");
        }
        self.refrescar_historial();
        self.last_result = Some(result);
        self.state = AppState::Results;
    }

    pub fn borrar_historial(&mut self) {
        self.confirm_clear = false;
        match self.history.clear() {
            Ok(()) => {
                log::info!("Historial borrado");
                self.message = "Historial borrado.".into();
            }
            Err(e) => {
                log::warn!("No se pudo borrar el historial: {e}");
                self.message = format!("⚠ No se pudo borrar el historial: {e}");
            }
        }
        self.refrescar_historial();
    }
}

use super::*;
use crate::session::Advance;

impl QuizApp {
    pub fn seleccionar_opcion(&mut self, option_id: &str) {
        if let Some(session) = self.session.as_mut() {
            session.select(option_id);
        }
    }

    pub fn enviar_respuesta(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.submit() {
            self.message = "⚠ Elige una respuesta antes de comprobar.".into();
            return;
        }
        self.message.clear();
    }

    pub fn alternar_pista(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.toggle_hint();
        }
    }

    /// Pasa a la siguiente pregunta o, si era la última, cierra la sesión.
    pub fn siguiente_pregunta(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.advance(now_millis()) {
            Some(Advance::NextQuestion) => self.message.clear(),
            Some(Advance::Finished(done)) => self.finalizar(done),
            None => {}
        }
    }

    pub fn abandonar_test(&mut self) {
        if let Some(session) = self.session.take() {
            session.quit();
        }
        self.state = AppState::Setup;
        self.message = "Test abandonado. No se ha guardado ningún resultado.".into();
    }
}

mod helpers;
pub mod layout;
mod svg;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{status_bar, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // BARRA SUPERIOR (abandonar durante el test, inicio en el resto)
        if self.state != AppState::Welcome {
            top_panel(self, ctx);
        }

        // BARRA DE ESTADO Y TEMA
        status_bar(self, ctx);

        // Dispatch por estado
        match self.state {
            AppState::Welcome => views::welcome::ui_welcome(self, ctx),
            AppState::Setup => views::setup::ui_setup(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Results => views::results::ui_results(self, ctx),
            AppState::History => views::history::ui_history(self, ctx),
        }

        if self.confirm_clear {
            views::history::confirm_clear(self, ctx);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.setup);
    }
}

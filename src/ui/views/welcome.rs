use crate::QuizApp;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::{Placement, card};
use crate::view_models::score_label;
use egui::{Context, RichText};

pub fn ui_welcome(app: &mut QuizApp, ctx: &Context) {
    // Se calcula fuera del panel para no mezclar préstamos
    let total = app.bank().len();
    let last = app.last_saved_score();

    card(ctx, 480.0, Placement::Middle { est_height: 260.0 }, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("🧠 Práctica de razonamiento");
            ui.add_space(6.0);
            ui.label(format!("{total} preguntas de números y figuras"));
            ui.add_space(18.0);

            let btn_w = (ui.available_width() * 0.9).clamp(120.0, 400.0);
            let btn_h = 40.0;

            if big_list_button(ui, "▶ Empezar práctica", btn_w, btn_h, true) {
                app.abrir_configuracion();
            }
            ui.add_space(5.0);
            if big_list_button(ui, "📜 Ver historial", btn_w, btn_h, true) {
                app.abrir_historial();
            }

            if let Some(score) = last {
                ui.add_space(12.0);
                ui.label(
                    RichText::new(format!("Último resultado: {}", score_label(score)))
                        .color(egui::Color32::YELLOW),
                );
            }
        });
    });
}

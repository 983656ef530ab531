use crate::QuizApp;
use crate::model::AppState;
use crate::ui::layout::{Placement, action_row, card};
use crate::view_models::{format_duration, score_label};
use egui::{Context, Grid, RichText};

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    let Some(result) = app.last_result.clone() else {
        app.state = AppState::Welcome;
        return;
    };
    let rows = app.last_breakdown_rows();

    card(ctx, 520.0, Placement::Middle { est_height: 460.0 }, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Resultados");
            ui.add_space(10.0);
            ui.label(RichText::new(score_label(result.score)).size(40.0).strong());
            ui.add_space(6.0);
            ui.label(format!(
                "Aciertos: {} de {}",
                result.correct_answers, result.total_questions
            ));
            ui.label(format!("Tiempo: {}", format_duration(result.time_spent)));
        });
        ui.add_space(12.0);

        if !rows.is_empty() {
            ui.label(RichText::new("Por categoría").strong());
            Grid::new("results_breakdown_grid")
                .striped(true)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Categoría");
                    ui.label("Aciertos");
                    ui.label("%");
                    ui.end_row();
                    for r in &rows {
                        ui.label(r.category.label());
                        ui.label(format!("{}/{}", r.correct, r.total));
                        ui.label(format!("{}%", r.percent));
                        ui.end_row();
                    }
                });
            ui.add_space(12.0);
        }

        let width = ui.available_width();
        match action_row(ui, width, &["📜 Historial", "🔄 Otra práctica"]) {
            Some(0) => app.abrir_historial(),
            Some(_) => app.abrir_configuracion(),
            None => {}
        }

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.label(RichText::new(&app.message).color(egui::Color32::YELLOW));
        }
    });
}

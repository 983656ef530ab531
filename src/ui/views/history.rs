use crate::QuizApp;
use crate::ui::layout::{Placement, card};
use egui::{Button, Context, Grid, RichText, ScrollArea};

pub fn ui_history(app: &mut QuizApp, ctx: &Context) {
    // Copia de las filas en caché (del más reciente al más antiguo)
    let rows = app.history_rows().to_vec();

    card(ctx, 620.0, Placement::Top, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Historial de tests");
        });
        ui.add_space(10.0);

        if rows.is_empty() {
            ui.label("Todavía no hay resultados guardados.");
        } else {
            ScrollArea::vertical().max_height(420.0).show(ui, |ui| {
                Grid::new("history_grid")
                    .striped(true)
                    .spacing([16.0, 4.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Fecha").strong());
                        ui.label(RichText::new("Puntuación").strong());
                        ui.label(RichText::new("Aciertos").strong());
                        ui.label(RichText::new("Tiempo").strong());
                        ui.end_row();

                        for r in &rows {
                            ui.label(&r.date);
                            ui.label(r.score_label());
                            ui.label(format!("{}/{}", r.correct, r.total));
                            ui.label(&r.time);
                            ui.end_row();
                        }
                    });
            });
        }

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if ui.add_enabled(!rows.is_empty(), Button::new("🗑 Borrar historial")).clicked() {
                app.confirm_clear = true;
            }
            if ui.button("▶ Nueva práctica").clicked() {
                app.abrir_configuracion();
            }
        });

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.label(&app.message);
        }
    });
}

pub fn confirm_clear(app: &mut QuizApp, ctx: &Context) {
    egui::Window::new("Confirmar borrado")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("¿Seguro que quieres borrar todo el historial? ¡Esta acción no se puede deshacer!");
            ui.horizontal(|ui| {
                if ui.button("Sí, borrar").clicked() {
                    app.borrar_historial();
                }
                if ui.button("No").clicked() {
                    app.confirm_clear = false;
                }
            });
        });
}

use crate::QuizApp;
use crate::model::{Category, Difficulty, Filter};
use crate::ui::layout::{Placement, action_row, card};
use egui::{ComboBox, Context, DragValue, Grid, RichText};

pub fn ui_setup(app: &mut QuizApp, ctx: &Context) {
    let counts = app.bank_counts();

    card(ctx, 560.0, Placement::Middle { est_height: 520.0 }, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Preparar el test");
        });
        ui.add_space(12.0);

        Grid::new("setup_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Categoría:");
                ComboBox::from_id_salt("category_filter")
                    .selected_text(app.setup.category.label())
                    .width(240.0)
                    .show_ui(ui, |ui| {
                        for choice in Filter::<Category>::all_choices() {
                            ui.selectable_value(&mut app.setup.category, choice, choice.label());
                        }
                    });
                ui.end_row();

                ui.label("Dificultad:");
                ComboBox::from_id_salt("difficulty_filter")
                    .selected_text(app.setup.difficulty.label())
                    .width(240.0)
                    .show_ui(ui, |ui| {
                        for choice in Filter::<Difficulty>::all_choices() {
                            ui.selectable_value(&mut app.setup.difficulty, choice, choice.label());
                        }
                    });
                ui.end_row();

                ui.label("Nº de preguntas:");
                ui.horizontal(|ui| {
                    ui.add(DragValue::new(&mut app.setup.count).range(0..=100));
                    ui.label(RichText::new("(0 = todas)").weak());
                });
                ui.end_row();

                ui.label("Orden:");
                ui.checkbox(&mut app.setup.shuffle, "Barajar las preguntas");
                ui.end_row();
            });

        ui.add_space(8.0);
        ui.label(format!("Este test tendrá {} preguntas.", app.selection_size()));
        ui.add_space(12.0);

        // Tabla de preguntas disponibles por categoría y dificultad
        ui.label(RichText::new("Preguntas disponibles").strong());
        Grid::new("bank_counts_grid")
            .striped(true)
            .spacing([10.0, 4.0])
            .show(ui, |ui| {
                ui.label("");
                for d in Filter::<Difficulty>::all_choices() {
                    ui.label(match d {
                        Filter::Mixed => "Todas",
                        Filter::Only(d) => d.label(),
                    });
                }
                ui.end_row();

                for c in Filter::<Category>::all_choices() {
                    ui.label(match c {
                        Filter::Mixed => "Todas",
                        Filter::Only(c) => c.label(),
                    });
                    for d in Filter::<Difficulty>::all_choices() {
                        ui.label(counts.get(c, d).to_string());
                    }
                    ui.end_row();
                }
            });

        ui.add_space(12.0);
        let width = ui.available_width();
        match action_row(ui, width, &["Volver", "Comenzar ▶"]) {
            Some(0) => app.volver_inicio(),
            Some(_) => app.empezar_test(),
            None => {}
        }

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.label(RichText::new(&app.message).color(egui::Color32::YELLOW));
        }
    });
}

use crate::QuizApp;
use crate::model::AppState;
use crate::session::Phase;
use crate::ui::helpers::{OptionLook, option_button};
use crate::ui::svg::svg_visual;
use egui::{CentralPanel, Context, RichText, ScrollArea};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    // Si no hay sesión (p. ej. tras recargar), volvemos a la configuración
    let Some(session) = app.session.as_ref() else {
        app.state = AppState::Setup;
        return;
    };

    // Copia de lo necesario para pintar; las acciones se aplican al final
    let question = session.current().clone();
    let phase = session.phase().clone();
    let position = session.index() + 1;
    let total = session.len();
    let is_last = session.is_last();
    let hint_visible = session.hint_visible();
    let selected = session.selected().map(str::to_owned);

    let mut clicked_option: Option<String> = None;
    let mut comprobar = false;
    let mut siguiente = false;
    let mut pista = false;

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(panel_width);

                ui.heading(format!("Pregunta {position} de {total}"));
                ui.label(
                    RichText::new(format!(
                        "{} · {}",
                        question.category.label(),
                        question.difficulty.label()
                    ))
                    .weak(),
                );
                ui.add_space(10.0);

                ui.label(RichText::new(&question.prompt).size(22.0));
                ui.add_space(8.0);

                if let Some(visual) = &question.visual {
                    svg_visual(ui, &question.id, visual, panel_width);
                    ui.add_space(8.0);
                }

                // ----------- OPCIONES -----------
                let locked = matches!(phase, Phase::ResultShown { .. } | Phase::Completed);
                let n = question.options.len().max(1) as f32;
                let option_w = ((panel_width - 8.0 * (n - 1.0)) / n).max(60.0);
                ui.horizontal_wrapped(|ui| {
                    for option in &question.options {
                        let look = if locked && option.id == question.correct_answer_id {
                            OptionLook::Correct
                        } else if locked && selected.as_deref() == Some(option.id.as_str()) {
                            OptionLook::Wrong
                        } else if selected.as_deref() == Some(option.id.as_str()) {
                            OptionLook::Selected
                        } else {
                            OptionLook::Normal
                        };
                        ui.vertical(|ui| {
                            if let Some(visual) = &option.visual {
                                let uri = format!("{}-{}", question.id, option.id);
                                svg_visual(ui, &uri, visual, option_w);
                            }
                            if option_button(ui, &option.label, option_w, look, !locked) {
                                clicked_option = Some(option.id.clone());
                            }
                        });
                    }
                });
                ui.add_space(10.0);

                // ----------- PISTA -----------
                if let Some(hint) = &question.hint {
                    let label = if hint_visible { "Ocultar pista" } else { "💡 Pista" };
                    if ui.button(label).clicked() {
                        pista = true;
                    }
                    if hint_visible {
                        ui.label(format!("💡 {hint}"));
                    }
                    ui.add_space(6.0);
                }

                // ----------- RESULTADO -----------
                match &phase {
                    Phase::Presenting | Phase::OptionSelected { .. } => {
                        let can_submit = matches!(phase, Phase::OptionSelected { .. });
                        if ui
                            .add_enabled(
                                can_submit,
                                egui::Button::new("Comprobar").min_size([panel_width / 2.0, 36.0].into()),
                            )
                            .clicked()
                        {
                            comprobar = true;
                        }
                    }
                    Phase::ResultShown { correct, .. } => {
                        if *correct {
                            ui.label(RichText::new("✅ ¡Correcto!").heading().color(egui::Color32::GREEN));
                        } else {
                            let right = question
                                .correct_option()
                                .map(|o| o.label.clone())
                                .unwrap_or_default();
                            ui.label(
                                RichText::new(format!("❌ No es correcto. La respuesta es {right}."))
                                    .heading()
                                    .color(egui::Color32::LIGHT_RED),
                            );
                        }
                        ui.add_space(4.0);
                        ui.label(&question.explanation);
                        ui.add_space(8.0);

                        let next = if is_last { "Ver resultados 🏁" } else { "Siguiente ▶" };
                        if ui
                            .add_sized([panel_width / 2.0, 36.0], egui::Button::new(next))
                            .clicked()
                        {
                            siguiente = true;
                        }
                    }
                    Phase::Completed => {}
                }

                ui.add_space(8.0);
                if !app.message.is_empty() {
                    ui.label(&app.message);
                }
            });
        });
    });

    if let Some(id) = clicked_option {
        app.seleccionar_opcion(&id);
    }
    if pista {
        app.alternar_pista();
    }
    if comprobar {
        app.enviar_respuesta();
    }
    if siguiente {
        app.siguiente_pregunta();
    }
}

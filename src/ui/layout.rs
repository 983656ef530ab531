use crate::QuizApp;
use crate::model::AppState;
use egui::{Align, Button, CentralPanel, Context, Frame, Layout, Margin, RichText, Ui};

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if app.state == AppState::Quiz {
                if ui.button("✖ Abandonar test").clicked() {
                    app.abandonar_test();
                }
            } else if ui.button("🏠 Inicio").clicked() {
                app.volver_inicio();
            }
        });
    });
}

/// Barra inferior: progreso del test (o resultados guardados) y selector de tema.
pub fn status_bar(app: &QuizApp, ctx: &Context) {
    let status = match &app.session {
        Some(session) if app.state == AppState::Quiz => format!(
            "Pregunta {} de {} · {} respondidas",
            session.index() + 1,
            session.len(),
            session.answers().len()
        ),
        _ => match app.history_rows().len() {
            0 => "Sin resultados guardados".to_string(),
            1 => "1 resultado guardado".to_string(),
            n => format!("{n} resultados guardados"),
        },
    };

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(status).weak());
            ui.with_layout(
                Layout::right_to_left(Align::Center),
                egui::widgets::global_theme_preference_switch,
            );
        });
    });
}

/// Colocación vertical de la tarjeta de una vista
#[derive(Clone, Copy)]
pub enum Placement {
    /// Centrada; `est_height` es la altura aproximada del contenido
    Middle { est_height: f32 },
    Top,
}

/// Tarjeta de contenido centrada en horizontal y de ancho máximo `max_width`.
pub fn card(ctx: &Context, max_width: f32, placement: Placement, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let gap = match placement {
            Placement::Middle { est_height } => ((ui.available_height() - est_height) / 2.0).max(0.0),
            Placement::Top => 12.0,
        };
        ui.add_space(gap);
        ui.vertical_centered(|ui| {
            let width = ui.available_width().min(max_width);
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(Margin::same(16))
                .show(ui, |ui| {
                    ui.set_width(width);
                    inner(ui);
                });
        });
    });
}

/// Botones de igual ancho repartidos en `width`. Devuelve el índice del pulsado.
pub fn action_row(ui: &mut Ui, width: f32, labels: &[&str]) -> Option<usize> {
    let n = labels.len().max(1) as f32;
    let gap = ui.spacing().item_spacing.x;
    let button_w = ((width - gap * (n - 1.0)) / n).max(40.0);

    let mut clicked = None;
    ui.horizontal(|ui| {
        for (i, label) in labels.iter().enumerate() {
            if ui.add_sized([button_w, 36.0], Button::new(*label)).clicked() {
                clicked = Some(i);
            }
        }
    });
    clicked
}

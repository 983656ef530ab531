// src/ui/helpers.rs
use egui::{Button, Color32, Ui, Vec2};

pub const CORRECT_FILL: Color32 = Color32::from_rgb(46, 125, 50);
pub const WRONG_FILL: Color32 = Color32::from_rgb(183, 28, 28);

pub fn big_list_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Estado visual de una opción en la pantalla del test
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum OptionLook {
    Normal,
    Selected,
    Correct,
    Wrong,
}

pub fn option_button(ui: &mut Ui, label: &str, width: f32, look: OptionLook, enabled: bool) -> bool {
    let text = egui::RichText::new(label).size(22.0);
    let mut button = Button::new(text)
        .min_size(Vec2::new(width, 44.0))
        .selected(look == OptionLook::Selected);
    match look {
        OptionLook::Correct => button = button.fill(CORRECT_FILL),
        OptionLook::Wrong => button = button.fill(WRONG_FILL),
        OptionLook::Normal | OptionLook::Selected => {}
    }
    ui.add_enabled(enabled, button).clicked()
}

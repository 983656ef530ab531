// src/ui/svg.rs
//
// Rasterizado de los SVG de las preguntas. Se usa resvg con un `Options` propio
// en lugar del cargador de imágenes de egui_extras: ese no trae fuentes, y sin
// fuentes resvg descarta todos los `<text>` (el `?`, las cantidades, la igualdad).
// Las fuentes son las mismas que incrusta egui, así que funciona igual en wasm.

use crate::visuals::Visual;
use egui::load::{SizeHint, SizedTexture};
use egui::{ColorImage, Id, TextureHandle, TextureOptions, Ui, Vec2};
use resvg::usvg::Options;
use std::sync::OnceLock;

fn svg_options() -> &'static Options<'static> {
    static OPTIONS: OnceLock<Options<'static>> = OnceLock::new();
    OPTIONS.get_or_init(|| {
        let mut options = Options::default();
        let db = options.fontdb_mut();
        db.load_font_data(epaint_default_fonts::UBUNTU_LIGHT.to_vec());
        let family = db
            .faces()
            .next()
            .and_then(|face| face.families.first())
            .map(|(name, _)| name.clone());
        // Para los emoji de la balanza (🍎, ⚖...) resvg cae a esta fuente
        db.load_font_data(epaint_default_fonts::NOTO_EMOJI_REGULAR.to_vec());

        if let Some(family) = family {
            db.set_serif_family(family.clone());
            db.set_sans_serif_family(family.clone());
            options.font_family = family;
        }
        options
    })
}

/// SVG -> imagen de `width_px` píxeles de ancho, manteniendo la proporción.
pub fn rasterize(markup: &str, width_px: u32) -> Result<ColorImage, String> {
    egui_extras::image::load_svg_bytes_with_size(
        markup.as_bytes(),
        SizeHint::Width(width_px),
        svg_options(),
    )
}

/// Dibuja el SVG de un descriptor escalado a `max_width` como mucho.
/// La textura se guarda en la memoria de egui por `uri_id` y ancho en píxeles.
pub fn svg_visual(ui: &mut Ui, uri_id: &str, visual: &Visual, max_width: f32) {
    let (w, h) = visual.size();
    let scale = (max_width / w).min(1.5);
    let size = Vec2::new(w * scale, h * scale);
    let width_px = (size.x * ui.ctx().pixels_per_point()).round().max(1.0) as u32;

    let key = Id::new(("svg_visual", uri_id, width_px));
    let texture = match ui.data(|d| d.get_temp::<TextureHandle>(key)) {
        Some(texture) => texture,
        None => match rasterize(&visual.markup(), width_px) {
            Ok(image) => {
                let texture =
                    ui.ctx()
                        .load_texture(format!("svg-{uri_id}"), image, TextureOptions::LINEAR);
                ui.data_mut(|d| d.insert_temp(key, texture.clone()));
                texture
            }
            Err(e) => {
                log::warn!("No se pudo dibujar la imagen {uri_id}: {e}");
                ui.label("⚠");
                return;
            }
        },
    };
    ui.image(SizedTexture::new(texture.id(), size));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visuals::{Weight, balance_svg, bead_count_svg, bead_series_svg};

    fn without_text(svg: &str) -> String {
        let mut out = String::new();
        let mut rest = svg;
        while let Some(start) = rest.find("<text") {
            out.push_str(&rest[..start]);
            let end = rest[start..].find("</text>").expect("texto cerrado");
            rest = &rest[start + end + "</text>".len()..];
        }
        out.push_str(rest);
        out
    }

    fn draws_its_text(svg: &str) {
        let stripped = without_text(svg);
        assert_ne!(svg, stripped, "el SVG debería llevar texto");
        let with_text = rasterize(svg, 400).expect("svg válido");
        let shapes_only = rasterize(&stripped, 400).expect("svg válido");
        assert_eq!(with_text.size, shapes_only.size);
        assert_ne!(
            with_text.pixels, shapes_only.pixels,
            "el texto no llega a la imagen"
        );
    }

    #[test]
    fn series_placeholder_is_drawn() {
        draws_its_text(&bead_series_svg(&[1, 2, 3]));
    }

    #[test]
    fn balance_labels_and_equation_are_drawn() {
        draws_its_text(&balance_svg(
            &[Weight::Count(3)],
            &[Weight::Count(2), Weight::Unknown],
            "🍎",
        ));
    }

    #[test]
    fn balance_equation_alone_changes_the_image() {
        let svg = balance_svg(&[Weight::Count(3)], &[Weight::Count(2), Weight::Unknown], "🍎");
        let start = svg.find(r#"<text class="equation""#).expect("igualdad");
        let end = start + svg[start..].find("</text>").expect("cierre") + "</text>".len();
        let no_equation = format!("{}{}", &svg[..start], &svg[end..]);

        let full = rasterize(&svg, 400).expect("svg válido");
        let partial = rasterize(&no_equation, 400).expect("svg válido");
        assert_ne!(full.pixels, partial.pixels);
    }

    #[test]
    fn rasterizes_at_the_requested_width() {
        let image = rasterize(&bead_count_svg(3), 240).expect("svg válido");
        assert_eq!(image.size, [240, 120]);
    }
}

// src/visuals.rs
//
// Generadores de SVG para las preguntas: ábaco (cuentas en varillas) y balanza.
// Todo es determinista y sin referencias externas, se puede incrustar tal cual.

use serde::{Deserialize, Serialize};
use std::fmt::Write;

pub const PLACEHOLDER: &str = "?";
const DEFAULT_ITEM: &str = "🍎";

const SERIES_W: f32 = 400.0;
const SERIES_H: f32 = 180.0;
const BALANCE_W: f32 = 400.0;
const BALANCE_H: f32 = 200.0;
const BEADS_W: f32 = 120.0;
const BEADS_H: f32 = 60.0;

const BEAD_COLORS: [&str; 4] = ["#e74c3c", "#3498db", "#f1c40f", "#2ecc71"];

/// Peso de un grupo de la balanza: una cantidad o el hueco `?`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WeightRepr", into = "WeightRepr")]
pub enum Weight {
    Count(u32),
    Unknown,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum WeightRepr {
    Count(u32),
    Marker(String),
}

impl TryFrom<WeightRepr> for Weight {
    type Error = String;

    fn try_from(repr: WeightRepr) -> Result<Self, Self::Error> {
        match repr {
            WeightRepr::Count(n) => Ok(Weight::Count(n)),
            WeightRepr::Marker(m) if m == PLACEHOLDER => Ok(Weight::Unknown),
            WeightRepr::Marker(m) => Err(format!("marcador de peso desconocido: {m:?}")),
        }
    }
}

impl From<Weight> for WeightRepr {
    fn from(w: Weight) -> Self {
        match w {
            Weight::Count(n) => WeightRepr::Count(n),
            Weight::Unknown => WeightRepr::Marker(PLACEHOLDER.to_string()),
        }
    }
}

impl Weight {
    fn label(&self) -> String {
        match self {
            Weight::Count(n) => n.to_string(),
            Weight::Unknown => PLACEHOLDER.to_string(),
        }
    }
}

/// Descriptor de la imagen de una pregunta u opción, tal y como se escribe en el banco.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Visual {
    BeadSeries {
        values: Vec<u32>,
    },
    Beads {
        count: u32,
    },
    Balance {
        left: Vec<Weight>,
        right: Vec<Weight>,
        #[serde(default)]
        item: Option<String>,
    },
}

impl Visual {
    pub fn markup(&self) -> String {
        match self {
            Visual::BeadSeries { values } => bead_series_svg(values),
            Visual::Beads { count } => bead_count_svg(*count),
            Visual::Balance { left, right, item } => {
                balance_svg(left, right, item.as_deref().unwrap_or(DEFAULT_ITEM))
            }
        }
    }

    /// Tamaño intrínseco (ancho, alto) del documento generado
    pub fn size(&self) -> (f32, f32) {
        match self {
            Visual::BeadSeries { .. } => (SERIES_W, SERIES_H),
            Visual::Beads { .. } => (BEADS_W, BEADS_H),
            Visual::Balance { .. } => (BALANCE_W, BALANCE_H),
        }
    }
}

fn svg_open(out: &mut String, w: f32, h: f32) {
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#
    );
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Una varilla por número más una varilla final con `?`.
pub fn bead_series_svg(values: &[u32]) -> String {
    let rods = values.len() + 1;
    let slot = SERIES_W / rods as f32;
    let base_y = SERIES_H - 20.0;
    let top_y = 25.0;
    let ry: f32 = 7.0;
    let rx = (slot * 0.35).min(14.0);

    let mut out = String::new();
    svg_open(&mut out, SERIES_W, SERIES_H);
    let _ = write!(
        out,
        r##"<rect x="10" y="{base_y}" width="{w}" height="8" rx="3" fill="#8d6e63"/>"##,
        w = SERIES_W - 20.0
    );

    for (i, &count) in values.iter().enumerate() {
        let cx = slot * (i as f32 + 0.5);
        let _ = write!(
            out,
            r##"<line class="rod" x1="{cx:.1}" y1="{top_y}" x2="{cx:.1}" y2="{base_y}" stroke="#5d4037" stroke-width="3"/>"##
        );
        // Si no caben, se juntan las cuentas
        let room = base_y - top_y - 4.0;
        let step = if count == 0 {
            0.0
        } else {
            (2.0 * ry + 2.0).min(room / count as f32)
        };
        let color = BEAD_COLORS[i % BEAD_COLORS.len()];
        for k in 0..count {
            let cy = base_y - ry - 1.0 - step * k as f32;
            let _ = write!(
                out,
                r##"<ellipse class="bead" cx="{cx:.1}" cy="{cy:.1}" rx="{rx:.1}" ry="{ry}" fill="{color}" stroke="#333" stroke-width="1"/>"##
            );
        }
    }

    let cx = slot * (values.len() as f32 + 0.5);
    let _ = write!(
        out,
        r##"<line class="rod" x1="{cx:.1}" y1="{top_y}" x2="{cx:.1}" y2="{base_y}" stroke="#5d4037" stroke-width="3" stroke-dasharray="6 4"/>"##
    );
    let _ = write!(
        out,
        r##"<text x="{cx:.1}" y="{ty:.1}" font-size="40" font-weight="bold" text-anchor="middle" fill="#9c27b0">{PLACEHOLDER}</text>"##,
        ty = (base_y + top_y) / 2.0 + 14.0
    );
    out.push_str("</svg>");
    out
}

/// Varilla horizontal pequeña con `count` cuentas, para las opciones.
pub fn bead_count_svg(count: u32) -> String {
    let mid = BEADS_H / 2.0;
    let room = BEADS_W - 20.0;
    let step = if count == 0 {
        0.0
    } else {
        (18.0_f32).min(room / count as f32)
    };
    let r = (step / 2.0 - 1.0).clamp(2.0, 8.0);

    let mut out = String::new();
    svg_open(&mut out, BEADS_W, BEADS_H);
    let _ = write!(
        out,
        r##"<line class="rod" x1="5" y1="{mid}" x2="{x2}" y2="{mid}" stroke="#5d4037" stroke-width="3"/>"##,
        x2 = BEADS_W - 5.0
    );
    for k in 0..count {
        let cx = 10.0 + step * (k as f32 + 0.5);
        let _ = write!(
            out,
            r##"<circle class="bead" cx="{cx:.1}" cy="{mid}" r="{r:.1}" fill="#e74c3c" stroke="#333" stroke-width="1"/>"##
        );
    }
    out.push_str("</svg>");
    out
}

fn equation_side(groups: &[Weight]) -> String {
    if groups.is_empty() {
        return "0".to_string();
    }
    groups
        .iter()
        .map(Weight::label)
        .collect::<Vec<_>>()
        .join(" + ")
}

fn platform_groups(out: &mut String, groups: &[Weight], x0: f32, width: f32, item: &str) {
    if groups.is_empty() {
        return;
    }
    let slot = width / groups.len() as f32;
    for (i, group) in groups.iter().enumerate() {
        let gx = x0 + slot * i as f32 + 4.0;
        let gw = slot - 8.0;
        let cx = gx + gw / 2.0;
        let (fill, icon) = match group {
            Weight::Count(_) => ("#fff3e0", item.to_string()),
            Weight::Unknown => ("#f3e5f5", PLACEHOLDER.to_string()),
        };
        let _ = write!(
            out,
            r##"<rect class="group" x="{gx:.1}" y="58" width="{gw:.1}" height="54" rx="8" fill="{fill}" stroke="#999" stroke-width="1"/>"##
        );
        let _ = write!(
            out,
            r#"<text x="{cx:.1}" y="82" font-size="20" text-anchor="middle">{}</text>"#,
            escape_text(&icon)
        );
        let _ = write!(
            out,
            r##"<text x="{cx:.1}" y="104" font-size="16" font-weight="bold" text-anchor="middle" fill="#333">{}</text>"##,
            escape_text(&group.label())
        );
    }
}

/// Balanza con dos platos; cada grupo lleva su emoji y su cantidad (o `?`).
/// Debajo se escribe la igualdad. No calcula el valor que falta.
pub fn balance_svg(left: &[Weight], right: &[Weight], item: &str) -> String {
    let beam_y = 120.0;
    let plate_w = 150.0;
    let left_x = 30.0;
    let right_x = BALANCE_W - 30.0 - plate_w;

    let mut out = String::new();
    svg_open(&mut out, BALANCE_W, BALANCE_H);
    let _ = write!(
        out,
        r##"<polygon points="200,{beam_y} 178,172 222,172" fill="#90a4ae" stroke="#455a64" stroke-width="2"/>"##
    );
    let _ = write!(
        out,
        r##"<rect x="160" y="172" width="80" height="6" rx="2" fill="#455a64"/>"##
    );
    let _ = write!(
        out,
        r##"<line x1="{x1}" y1="{beam_y}" x2="{x2}" y2="{beam_y}" stroke="#455a64" stroke-width="4"/>"##,
        x1 = left_x,
        x2 = right_x + plate_w
    );
    for x in [left_x, right_x] {
        let _ = write!(
            out,
            r##"<rect class="platform" x="{x}" y="{y}" width="{plate_w}" height="6" rx="2" fill="#607d8b"/>"##,
            y = beam_y - 6.0
        );
    }
    platform_groups(&mut out, left, left_x, plate_w, item);
    platform_groups(&mut out, right, right_x, plate_w, item);

    let equation = format!("{} = {}", equation_side(left), equation_side(right));
    let _ = write!(
        out,
        r##"<text class="equation" x="200" y="195" font-size="16" text-anchor="middle" fill="#333">{}</text>"##,
        escape_text(&equation)
    );
    out.push_str("</svg>");
    out
}

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Lighten, Srgb};

// ---------------------------------------------------------------------------
// Hex colours from chart layouts
// ---------------------------------------------------------------------------

/// Parse a `#rrggbb` colour. Unparseable text falls back to grey.
pub fn hex_color(hex: &str) -> Color32 {
    match hex.parse::<Srgb<u8>>() {
        Ok(c) => Color32::from_rgb(c.red, c.green, c.blue),
        Err(e) => {
            log::warn!("Ignoring colour {hex:?}: {e}");
            Color32::GRAY
        }
    }
}

/// Colour `i` of a layout, or a generated one when the layout has too few.
pub fn nth_color(colors: &[String], i: usize, n: usize) -> Color32 {
    match colors.get(i) {
        Some(hex) => hex_color(hex),
        None => generate_palette(n.max(1))[i % n.max(1)],
    }
}

/// Brighten a colour in HSL space, used for hover highlights.
pub fn lighten(color: Color32, amount: f32) -> Color32 {
    let rgb = Srgb::new(color.r(), color.g(), color.b()).into_format::<f32>();
    let hsl: Hsl = rgb.into_color();
    to_color32(hsl.lighten(amount).into_color())
}

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            to_color32(hsl.into_color())
        })
        .collect()
}

fn to_color32(rgb: Srgb) -> Color32 {
    let rgb: Srgb<u8> = rgb.into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

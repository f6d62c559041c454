use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

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
            let hue = 210.0 + (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Series colours: data + one per overlay
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct SeriesColors {
    pub data: Color32,
    pub regression: Color32,
    pub mean: Color32,
    pub error_bars: Color32,
}

impl Default for SeriesColors {
    fn default() -> Self {
        let p = generate_palette(4);
        SeriesColors {
            data: p[0],
            regression: p[1],
            mean: p[2],
            error_bars: p[3].gamma_multiply(0.6),
        }
    }
}

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Team colours
// ---------------------------------------------------------------------------

/// Hue of the first team's bars (blue).
pub const FIRST_TEAM_HUE: f32 = 225.0;
/// Hue of the second team's bars (red).
pub const SECOND_TEAM_HUE: f32 = 0.0;

/// Convert an HSL hue at the app's fixed saturation/lightness to `Color32`.
pub fn color_from_hue(hue: f32) -> Color32 {
    let hsl = Hsl::new(hue, 0.75, 0.5);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Bar colours for the first and second team.
pub fn team_colors() -> [Color32; 2] {
    [color_from_hue(FIRST_TEAM_HUE), color_from_hue(SECOND_TEAM_HUE)]
}

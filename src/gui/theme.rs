use crate::dashboard::page::Tone;
use crate::settings::ThemeMode;
use eframe::egui;

/// Visuals for the configured theme. `System` keeps whatever the context
/// already uses.
pub fn theme_visuals(mode: ThemeMode, defaults: &egui::Visuals) -> egui::Visuals {
    match mode {
        ThemeMode::System => defaults.clone(),
        ThemeMode::Dark => {
            let mut visuals = egui::Visuals::dark();
            visuals.panel_fill = egui::Color32::from_rgb(15, 18, 26);
            visuals.window_fill = egui::Color32::from_rgb(22, 26, 36);
            visuals.hyperlink_color = egui::Color32::from_rgb(120, 170, 255);
            visuals
        }
        ThemeMode::Light => {
            let mut visuals = egui::Visuals::light();
            visuals.panel_fill = egui::Color32::from_rgb(245, 246, 250);
            visuals.window_fill = egui::Color32::from_rgb(255, 255, 255);
            visuals.hyperlink_color = egui::Color32::from_rgb(35, 102, 214);
            visuals
        }
    }
}

/// Foreground colour for a tone on a dark or light background.
pub fn tone_color(tone: Tone, dark_mode: bool) -> egui::Color32 {
    match (tone, dark_mode) {
        (Tone::Neutral, true) => egui::Color32::from_rgb(160, 168, 184),
        (Tone::Neutral, false) => egui::Color32::from_rgb(90, 98, 112),
        (Tone::Positive, true) => egui::Color32::from_rgb(96, 214, 140),
        (Tone::Positive, false) => egui::Color32::from_rgb(22, 140, 70),
        (Tone::Caution, true) => egui::Color32::from_rgb(245, 190, 80),
        (Tone::Caution, false) => egui::Color32::from_rgb(176, 110, 0),
        (Tone::Negative, true) => egui::Color32::from_rgb(255, 110, 110),
        (Tone::Negative, false) => egui::Color32::from_rgb(196, 40, 40),
        (Tone::Accent, true) => egui::Color32::from_rgb(190, 150, 255),
        (Tone::Accent, false) => egui::Color32::from_rgb(110, 60, 200),
    }
}

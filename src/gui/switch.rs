use crate::dashboard::{SwitchOption, ViewMode};
use eframe::egui;

/// Draws the view switch. Returns the view whose tab was clicked, if any.
///
/// Each tab is a selectable label so the active tab reports itself as
/// selected to assistive tech.
pub fn view_switch(ui: &mut egui::Ui, options: &[SwitchOption]) -> Option<ViewMode> {
    let mut picked = None;
    ui.horizontal(|ui| {
        for (idx, opt) in options.iter().enumerate() {
            ui.vertical(|ui| {
                let text = egui::RichText::new(opt.label).strong();
                let resp = ui
                    .selectable_label(opt.active, text)
                    .on_hover_text(format!("{} (Ctrl+{})", opt.subtitle, idx + 1));
                if resp.clicked() {
                    picked = Some(opt.view);
                }
                ui.label(egui::RichText::new(opt.subtitle).small().weak());
            });
            ui.add_space(12.0);
        }
    });
    picked
}

/// View requested with Ctrl/Cmd plus a digit key this frame.
pub fn shortcut_view(ctx: &egui::Context) -> Option<ViewMode> {
    const DIGITS: [egui::Key; 9] = [
        egui::Key::Num1,
        egui::Key::Num2,
        egui::Key::Num3,
        egui::Key::Num4,
        egui::Key::Num5,
        egui::Key::Num6,
        egui::Key::Num7,
        egui::Key::Num8,
        egui::Key::Num9,
    ];
    ctx.input(|i| {
        if !i.modifiers.command {
            return None;
        }
        DIGITS
            .iter()
            .position(|&key| i.key_pressed(key))
            .and_then(ViewMode::from_shortcut_index)
    })
}

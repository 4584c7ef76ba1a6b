use super::theme::tone_color;
use crate::dashboard::page::{
    rows, AlertRow, Badge, BoardColumn, Card, HeatTile, HeroBlock, Page, Section, SectionBody,
    StatTile, SummaryBlock,
};
use eframe::egui;

const CARD_WIDTH: f32 = 240.0;

/// Draws a rendered page top to bottom.
pub fn show_page(ui: &mut egui::Ui, page: &Page) {
    hero(ui, &page.hero);
    for row in rows(&page.sections) {
        ui.add_space(12.0);
        if let [left, right] = row {
            ui.columns(2, |cols| {
                section(&mut cols[0], left);
                section(&mut cols[1], right);
            });
        } else {
            for s in row {
                section(ui, s);
            }
        }
    }
    if !page.footer.is_empty() {
        ui.add_space(16.0);
        ui.separator();
        for line in &page.footer {
            ui.label(egui::RichText::new(line).small().weak());
        }
    }
}

fn hero(ui: &mut egui::Ui, hero: &HeroBlock) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(&hero.eyebrow).small().strong());
            ui.heading(&hero.title);
            if let Some(line) = &hero.dateline {
                ui.label(&line.condensed).on_hover_text(&line.long);
            }
            if !hero.subtitle.is_empty() {
                ui.label(egui::RichText::new(&hero.subtitle).weak());
            }
        });
        if let Some(card) = &hero.card {
            ui.add_space(24.0);
            egui::Frame::group(ui.style()).show(ui, |ui| stat_tile(ui, card));
        }
    });
}

fn section(ui: &mut egui::Ui, section: &Section) {
    if let Some(title) = &section.title {
        ui.heading(title);
    }
    match &section.body {
        SectionBody::Stats(tiles) => {
            ui.horizontal_wrapped(|ui| {
                for tile in tiles {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_min_width(160.0);
                        stat_tile(ui, tile);
                    });
                }
            });
        }
        SectionBody::Board(columns) => board(ui, columns),
        SectionBody::Summaries(blocks) => {
            for block in blocks {
                summary(ui, block);
            }
        }
        SectionBody::Cards(cards) => {
            ui.horizontal_wrapped(|ui| {
                for c in cards {
                    card(ui, c, CARD_WIDTH);
                }
            });
        }
        SectionBody::Heatmap(tiles) => {
            ui.horizontal_wrapped(|ui| {
                for tile in tiles {
                    heat_tile(ui, tile);
                }
            });
        }
        SectionBody::Alerts(alerts) => {
            for alert in alerts {
                alert_row(ui, alert);
            }
        }
    }
}

fn stat_tile(ui: &mut egui::Ui, tile: &StatTile) {
    ui.vertical(|ui| {
        ui.label(egui::RichText::new(&tile.label).small().weak());
        ui.label(egui::RichText::new(&tile.value).size(20.0).strong());
        if let Some(note) = &tile.note {
            ui.label(egui::RichText::new(note).small());
        }
    });
}

fn badge(ui: &mut egui::Ui, badge: &Badge) {
    let color = tone_color(badge.tone, ui.visuals().dark_mode);
    egui::Frame::none()
        .stroke(egui::Stroke::new(1.0, color))
        .rounding(8.0)
        .inner_margin(egui::Margin::symmetric(6.0, 1.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(&badge.text).small().color(color));
        });
}

fn card(ui: &mut egui::Ui, card: &Card, width: f32) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(width);
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&card.title).strong());
                if let Some(b) = &card.badge {
                    badge(ui, b);
                }
            });
            if let Some(sub) = &card.subtitle {
                ui.label(egui::RichText::new(sub).weak());
            }
            if !card.meta.is_empty() {
                ui.horizontal_wrapped(|ui| {
                    for m in &card.meta {
                        ui.label(egui::RichText::new(m).small());
                    }
                });
            }
            if !card.tags.is_empty() {
                ui.horizontal_wrapped(|ui| {
                    for tag in &card.tags {
                        ui.label(egui::RichText::new(format!("#{tag}")).small().italics());
                    }
                });
            }
            if let Some(body) = &card.body {
                ui.label(body);
            }
            if let Some(meter) = &card.meter {
                ui.add(
                    egui::ProgressBar::new(meter.fraction())
                        .desired_width(width)
                        .text(&meter.label),
                );
            }
        });
    });
}

fn board(ui: &mut egui::Ui, columns: &[BoardColumn]) {
    if columns.is_empty() {
        return;
    }
    ui.columns(columns.len(), |cols| {
        for (ui, column) in cols.iter_mut().zip(columns) {
            ui.horizontal(|ui| {
                ui.strong(&column.title);
                ui.label(egui::RichText::new(column.cards.len().to_string()).small().weak());
            });
            let width = ui.available_width() - 16.0;
            for c in &column.cards {
                card(ui, c, width.max(120.0));
            }
        }
    });
}

fn summary(ui: &mut egui::Ui, block: &SummaryBlock) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.strong(&block.heading);
        for list in &block.lists {
            ui.label(egui::RichText::new(&list.label).small().strong());
            for item in &list.items {
                ui.label(format!("• {item}"));
            }
        }
    });
}

fn heat_tile(ui: &mut egui::Ui, tile: &HeatTile) {
    let color = tone_color(tile.tone, ui.visuals().dark_mode);
    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.5, color))
        .show(ui, |ui| {
            ui.set_width(110.0);
            ui.vertical(|ui| {
                ui.strong(&tile.label);
                ui.label(egui::RichText::new(&tile.value).color(color).strong());
                ui.label(egui::RichText::new(&tile.caption).small().weak());
            });
        });
}

fn alert_row(ui: &mut egui::Ui, alert: &AlertRow) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(&alert.time).monospace());
        badge(ui, &alert.badge);
        ui.label(&alert.text);
    });
}

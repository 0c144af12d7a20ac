// src/gui/components/tier_cards.rs
//
// One tinted card per tier, laid out in up to three columns.

use eframe::egui::{self, Align, Frame, Layout, Margin, RichText, Stroke};

use crate::{
    config::consts::EMPTY_TIER_TEXT,
    tiers::{PlayerEntry, Tier, TierMapping},
};

use super::theme::{tier_accent, tier_fill, BADGE_FILL, CARD_STROKE, ITEM_FILL};

fn column_count(width: f32) -> usize {
    if width >= 1000.0 { 3 } else if width >= 650.0 { 2 } else { 1 }
}

pub fn draw(ui: &mut egui::Ui, tiers: &TierMapping) {
    let ncols = column_count(ui.available_width());
    egui::ScrollArea::vertical()
        .id_salt("tier_cards")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.columns(ncols, |cols| {
                for (i, (tier, players)) in tiers.iter().enumerate() {
                    card(&mut cols[i % ncols], tier, players);
                    cols[i % ncols].add_space(12.0);
                }
            });
        });
}

fn card(ui: &mut egui::Ui, tier: Tier, players: &[PlayerEntry]) {
    Frame::new()
        .fill(tier_fill(tier))
        .stroke(Stroke::new(1.0, CARD_STROKE))
        .corner_radius(14.0)
        .inner_margin(Margin::same(14))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(tier.to_string()).size(22.0).strong().color(tier_accent(tier)));
                ui.weak(format!("· {}", players.len()));
            });
            ui.add_space(6.0);

            if players.is_empty() {
                ui.weak(EMPTY_TIER_TEXT);
                return;
            }
            for p in players {
                player_row(ui, p);
            }
        });
}

fn player_row(ui: &mut egui::Ui, p: &PlayerEntry) {
    Frame::new()
        .fill(ITEM_FILL)
        .stroke(Stroke::new(1.0, CARD_STROKE))
        .corner_radius(10.0)
        .inner_margin(Margin::symmetric(10, 6))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.add(egui::Label::new(p.name()).truncate());
                if let Some(region) = p.region() {
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        Frame::new()
                            .fill(BADGE_FILL)
                            .corner_radius(6.0)
                            .inner_margin(Margin::symmetric(6, 2))
                            .show(ui, |ui| {
                                ui.label(RichText::new(region).small());
                            });
                    });
                }
            });
        });
    ui.add_space(4.0);
}

#[cfg(test)]
mod tests {
    use super::column_count;

    #[test]
    fn columns_follow_width() {
        assert_eq!(column_count(400.0), 1);
        assert_eq!(column_count(800.0), 2);
        assert_eq!(column_count(1200.0), 3);
    }
}

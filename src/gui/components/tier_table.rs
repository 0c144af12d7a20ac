// src/gui/components/tier_table.rs
//
// Flat Tier / Player / Region table of the visible tiers.

use eframe::egui::{self, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::tiers::{export, Tier, TierMapping};

use super::theme::tier_accent;

pub fn draw(ui: &mut egui::Ui, tiers: &TierMapping) {
    // Same shape as the CSV export.
    let rows: Vec<(Tier, &str, &str)> = tiers
        .iter()
        .flat_map(|(tier, players)| {
            players.iter().map(move |p| (tier, p.name(), p.region().unwrap_or("")))
        })
        .collect();

    TableBuilder::new(ui)
        .striped(true)
        .id_salt("tier_table")
        .column(Column::exact(70.0))
        .column(Column::initial(260.0).resizable(true).clip(true).at_least(80.0))
        .column(Column::remainder())
        .header(24.0, |mut header| {
            for h in export::EXPORT_HEADERS {
                header.col(|ui| { ui.strong(h); });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let (tier, name, region) = rows[row.index()];
                row.col(|ui| {
                    ui.label(RichText::new(tier.number().to_string()).color(tier_accent(tier)).strong());
                });
                row.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                    ui.label(name);
                });
                row.col(|ui| { ui.label(region); });
            });
        });
}

// src/gui/components/theme.rs
//
// Per-tier tints: 1 yellow, 2 cyan, 3 orange, 4 indigo, 5 pink.

use eframe::egui::Color32;

use crate::tiers::Tier;

pub fn tier_accent(tier: Tier) -> Color32 {
    match tier.number() {
        1 => Color32::from_rgb(0xEA, 0xB3, 0x08),
        2 => Color32::from_rgb(0x06, 0xB6, 0xD4),
        3 => Color32::from_rgb(0xF9, 0x73, 0x16),
        4 => Color32::from_rgb(0x63, 0x66, 0xF1),
        5 => Color32::from_rgb(0xEC, 0x48, 0x99),
        _ => Color32::GRAY,
    }
}

/// Card background: the accent at low alpha.
pub fn tier_fill(tier: Tier) -> Color32 {
    let c = tier_accent(tier);
    Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), 36)
}

pub const CARD_STROKE: Color32 = Color32::from_rgb(0x1F, 0x29, 0x37);
pub const ITEM_FILL: Color32 = Color32::from_rgb(0x11, 0x18, 0x27);
pub const BADGE_FILL: Color32 = Color32::from_rgb(0x1F, 0x29, 0x37);
pub const ERROR_TEXT: Color32 = Color32::from_rgb(0xF8, 0x71, 0x71);

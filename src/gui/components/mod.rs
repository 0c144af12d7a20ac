// src/gui/components/mod.rs
pub mod header;
pub mod status;
pub mod tier_cards;
pub mod tier_table;
pub mod theme;

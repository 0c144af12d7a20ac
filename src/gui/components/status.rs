// src/gui/components/status.rs
//
// Loading spinner or the load error. Nothing once the sheet is in.

use eframe::egui::{self, RichText};

use crate::loader::LoadState;

use super::theme::ERROR_TEXT;

pub fn draw(ui: &mut egui::Ui, load: &LoadState) {
    match load {
        LoadState::Pending => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.weak("Loading...");
            });
        }
        LoadState::Failed(e) => {
            ui.label(RichText::new(e.user_message()).color(ERROR_TEXT));
        }
        LoadState::Succeeded(_) => {}
    }
}

// src/gui/components/header.rs
//
// Title, live search, view toggle and sheet actions.

use eframe::egui::{self, Align, Layout, RichText};

use crate::{
    config::{consts::APP_TITLE, state::ViewMode},
    csv::Delim,
    gui::app::App,
    tiers::export,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.heading(RichText::new(APP_TITLE).strong());

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let loading = app.is_loading();

            if ui.add_enabled(!loading, egui::Button::new("Reload")).clicked() {
                logf!("UI: Reload");
                let ctx = ui.ctx().clone();
                app.start_load(&ctx);
            }

            match app.state.source.remote_url() {
                Some(url) => { ui.hyperlink_to("View CSV", url); }
                None => { ui.add_enabled(false, egui::Button::new("View CSV")); }
            }

            if ui.add_enabled(!app.state.tiers.is_empty(), egui::Button::new("Copy CSV")).clicked() {
                let text = export::to_string(&app.state.visible(), Delim::Csv);
                ui.ctx().copy_text(text);
                logf!("UI: Copied {} players", app.state.visible().len());
            }

            let view = &mut app.state.gui.view;
            ui.selectable_value(view, ViewMode::Table, "Table");
            ui.selectable_value(view, ViewMode::Cards, "Cards");

            let search = ui.add(
                egui::TextEdit::singleline(&mut app.state.query)
                    .hint_text("Search player...")
                    .desired_width(240.0),
            );
            if search.changed() {
                logd!("UI: Search {:?}", app.state.query);
            }
        });
    });
    ui.add_space(6.0);
}

// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{
        consts::{APP_TITLE, FOOTER_TEXT},
        options,
        state::{AppState, ViewMode},
    },
    loader::{self, LoadHandle, LoadState},
};

use super::components::{header, status, tier_cards, tier_table};

pub fn run(native: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let source = options::resolve_source(None);
    eframe::run_native(
        APP_TITLE,
        native,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(App::new(&cc.egui_ctx, AppState::new(source))))
        }),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // in-flight load; dropped once its outcome is applied
    loader: Option<LoadHandle>,
}

impl App {
    /// Starts the one automatic load for this lifecycle.
    pub fn new(ctx: &egui::Context, state: AppState) -> Self {
        let mut app = Self { state, loader: None };
        app.start_load(ctx);
        app
    }

    /// Begin a fresh lifecycle: clear loaded tiers and fetch again.
    pub fn start_load(&mut self, ctx: &egui::Context) {
        self.state.restart_load();
        let repaint = ctx.clone();
        self.loader = Some(loader::spawn(self.state.source.clone(), move || {
            repaint.request_repaint()
        }));
        logf!("UI: Load started");
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.state.load.is_pending()
    }

    fn poll_load(&mut self) {
        let Some(handle) = self.loader.as_mut() else { return };
        if let Some(outcome) = handle.poll() {
            if let LoadState::Failed(e) = &outcome {
                logd!("UI: showing load error ({e})");
            }
            self.state.apply_load(outcome);
            self.loader = None;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            header::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.weak(FOOTER_TEXT);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(format!("{} players", self.state.tiers.len()));
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            status::draw(ui, &self.state.load);

            // Tiers only once the sheet is in.
            if !matches!(self.state.load, LoadState::Succeeded(_)) {
                return;
            }
            let visible = self.state.visible();
            match self.state.gui.view {
                ViewMode::Cards => tier_cards::draw(ui, &visible),
                ViewMode::Table => tier_table::draw(ui, &visible),
            }
        });
    }
}

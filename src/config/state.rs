// src/config/state.rs
use std::borrow::Cow;

use crate::{
    config::options::SheetSource,
    loader::LoadState,
    tiers::{self, TierMapping},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Cards,
    Table,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub view: ViewMode,
    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            view: ViewMode::Cards,
            window_w: 1100,
            window_h: 760,
        }
    }
}

/// Everything the tier list screen knows. Owned by the top-level controller.
#[derive(Debug)]
pub struct AppState {
    pub source: SheetSource,
    pub load: LoadState,
    /// Parsed sheet; five empty tiers until a load succeeds.
    pub tiers: TierMapping,
    /// Live search text, as typed.
    pub query: String,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(source: SheetSource) -> Self {
        Self {
            source,
            load: LoadState::Pending,
            tiers: TierMapping::new(),
            query: s!(),
            gui: GuiState::default(),
        }
    }

    /// Take the outcome of a load. Success parses the text into tiers.
    pub fn apply_load(&mut self, outcome: LoadState) {
        if let LoadState::Succeeded(text) = &outcome {
            self.tiers = tiers::parse(text);
            logf!("Parse: players={}", self.tiers.len());
        }
        self.load = outcome;
    }

    /// Back to a fresh lifecycle: pending, nothing loaded. The query is kept.
    pub fn restart_load(&mut self) {
        self.load = LoadState::Pending;
        self.tiers = TierMapping::new();
    }

    /// Tiers after applying the current query.
    pub fn visible(&self) -> Cow<'_, TierMapping> {
        tiers::filter(&self.tiers, &self.query)
    }
}

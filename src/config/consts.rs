// src/config/consts.rs

// Sheet location
pub const SHEET_ENV_VAR: &str = "PEARL_SHEET_CSV";
pub const SHEET_PLACEHOLDER: &str = "YOUR_CSV_LINK_HERE";
pub const CONFIG_FILE: &str = "pearl.cfg";

// Net
pub const USER_AGENT: &str = concat!("pearl_tierlist/", env!("CARGO_PKG_VERSION"));

// Local files
pub const STORE_DIR: &str = ".pearl";
pub const LOG_FILE: &str = "debug.log";

// Tiers
pub const TIER_COUNT: usize = 5;

// UI text
pub const APP_TITLE: &str = "Pearl Tierlist";
pub const LOAD_ERROR_MESSAGE: &str =
    "Could not load sheet. Set PEARL_SHEET_CSV or replace YOUR_CSV_LINK_HERE.";
pub const EMPTY_TIER_TEXT: &str = "No players yet";
pub const FOOTER_TEXT: &str = "Auto-updating from Google Sheets";

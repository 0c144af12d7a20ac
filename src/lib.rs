// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod file;
pub mod gui;
pub mod loader;
pub mod tiers;

pub use error::LoadError;
pub use tiers::{filter, parse, PlayerEntry, Tier, TierMapping};

// src/tiers/export.rs
//
// Flatten tiers into long-layout rows: Tier, Player, Region.
// The output parses back into the same mapping.

use crate::csv::{rows_to_string, Delim};

use super::TierMapping;

pub const EXPORT_HEADERS: [&str; 3] = ["Tier", "Player", "Region"];

pub fn headers() -> Vec<String> {
    EXPORT_HEADERS.iter().map(|h| s!(*h)).collect()
}

/// One row per player, tiers in order, bucket order kept.
pub fn to_rows(tiers: &TierMapping) -> Vec<Vec<String>> {
    let mut rows = Vec::with_capacity(tiers.len());
    for (tier, players) in tiers.iter() {
        for p in players {
            rows.push(vec![
                tier.number().to_string(),
                s!(p.name()),
                p.region().map(|r| s!(r)).unwrap_or_default(),
            ]);
        }
    }
    rows
}

/// Full export text including the header line.
pub fn to_string(tiers: &TierMapping, delim: Delim) -> String {
    rows_to_string(Some(&headers()), &to_rows(tiers), delim)
}

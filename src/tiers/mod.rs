// src/tiers/mod.rs
//! Tier list data model.
//!
//! A `TierMapping` always holds exactly five buckets (tiers 1..=5, best first).
//! Buckets keep source row order; nothing is sorted or deduplicated.
//!
//! - `parse`  turns sheet text into a mapping (never fails).
//! - `filter` narrows a mapping by a player-name query.
//! - `export` flattens a mapping back into long-layout rows.

use std::fmt;

use crate::config::consts::TIER_COUNT;

pub mod export;
pub mod filter;
pub mod parse;

pub use filter::filter;
pub use parse::parse;

/// A tier number, guaranteed to be in `1..=5`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tier(u8);

impl Tier {
    pub const ALL: [Tier; TIER_COUNT] = [Tier(1), Tier(2), Tier(3), Tier(4), Tier(5)];

    /// `None` for anything outside `1..=5`.
    pub fn new(n: u32) -> Option<Self> {
        match n {
            1..=5 => Some(Tier(n as u8)),
            _ => None,
        }
    }

    pub fn number(self) -> u8 { self.0 }

    #[inline]
    fn index(self) -> usize { self.0 as usize - 1 }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tier {}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerEntry {
    name: String,
    region: Option<String>,
}

impl PlayerEntry {
    /// Trims both fields. Returns `None` when the name is blank;
    /// a blank region becomes `None`.
    pub fn new(name: &str, region: Option<&str>) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let region = region
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(|r| s!(r));
        Some(Self { name: s!(name), region })
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn region(&self) -> Option<&str> { self.region.as_deref() }
}

/// Tier number → ordered players.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TierMapping {
    buckets: [Vec<PlayerEntry>; TIER_COUNT],
}

impl TierMapping {
    pub fn new() -> Self { Self::default() }

    pub fn bucket(&self, tier: Tier) -> &[PlayerEntry] {
        &self.buckets[tier.index()]
    }

    /// Appends at the end of the tier's bucket.
    pub fn push(&mut self, tier: Tier, entry: PlayerEntry) {
        self.buckets[tier.index()].push(entry);
    }

    /// All five tiers in order, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &[PlayerEntry])> + '_ {
        Tier::ALL.into_iter().map(move |t| (t, self.bucket(t)))
    }

    /// Total players across tiers.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Copy of a single tier; the other four come back empty.
    pub fn only(&self, tier: Tier) -> TierMapping {
        let mut out = TierMapping::new();
        out.buckets[tier.index()] = self.bucket(tier).to_vec();
        out
    }

    /// Build a mapping by keeping, per tier, the entries `keep` accepts.
    pub fn retain_cloned<F>(&self, mut keep: F) -> TierMapping
    where
        F: FnMut(&PlayerEntry) -> bool,
    {
        let mut out = TierMapping::new();
        for (tier, players) in self.iter() {
            for p in players.iter().filter(|p| keep(p)) {
                out.push(tier, p.clone());
            }
        }
        out
    }
}

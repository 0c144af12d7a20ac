// src/tiers/parse.rs
//
// Sheet text → TierMapping. Two sheet shapes are understood:
//
//   Wide:  one column per tier ("Tier 1", "Tier 2", ...), one player per cell.
//   Long:  one row per player with tier / player / region columns.
//
// Row 0 is always the header. Parsing never fails; unusable rows are skipped.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::consts::TIER_COUNT;
use crate::csv::{parse_rows, Delim};

use super::{PlayerEntry, Tier, TierMapping};

// Any "Tier 1"/"Tier 2"-like header switches to wide layout.
static WIDE_HINT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^tier\s*[12]").unwrap());

static WIDE_COLUMN: Lazy<Vec<Regex>> = Lazy::new(|| {
    (1..=TIER_COUNT)
        .map(|n| Regex::new(&format!(r"(?i)^tier\s*{n}$")).unwrap())
        .collect()
});

static LONG_TIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^tier").unwrap());
static LONG_PLAYER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(player|name)$").unwrap());
static LONG_REGION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^region$").unwrap());

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

// Positional fallbacks for long layout.
const DEFAULT_TIER_COL: usize = 0;
const DEFAULT_PLAYER_COL: usize = 1;
const DEFAULT_REGION_COL: usize = 2;

const BOM: char = '\u{FEFF}';

/// Sheet shape, resolved once from the header row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Column index per tier; `None` when that tier has no column.
    Wide { columns: [Option<usize>; TIER_COUNT] },
    Long { tier: usize, player: usize, region: usize },
}

impl Layout {
    /// Pick the layout from an already-trimmed header row.
    pub fn detect(header: &[String]) -> Self {
        if header.iter().any(|h| WIDE_HINT.is_match(h)) {
            let mut columns = [None; TIER_COUNT];
            for (slot, re) in columns.iter_mut().zip(WIDE_COLUMN.iter()) {
                *slot = find_column(header, re);
            }
            return Layout::Wide { columns };
        }

        Layout::Long {
            tier: find_column(header, &LONG_TIER).unwrap_or(DEFAULT_TIER_COL),
            player: find_column(header, &LONG_PLAYER).unwrap_or(DEFAULT_PLAYER_COL),
            region: find_column(header, &LONG_REGION).unwrap_or(DEFAULT_REGION_COL),
        }
    }

    /// Bucket the data rows (header excluded).
    pub fn extract(&self, rows: &[Vec<String>]) -> TierMapping {
        match self {
            Layout::Wide { columns } => extract_wide(rows, columns),
            Layout::Long { tier, player, region } => extract_long(rows, *tier, *player, *region),
        }
    }
}

fn find_column(header: &[String], re: &Regex) -> Option<usize> {
    header.iter().position(|h| re.is_match(h))
}

/// Missing cells read as "".
#[inline]
fn cell(row: &[String], ci: usize) -> &str {
    row.get(ci).map(String::as_str).unwrap_or("")
}

/// Parse sheet text into tiers. Total: the worst case is five empty tiers.
///
/// A leading byte-order mark (Excel "CSV UTF-8") is dropped with the
/// surrounding whitespace.
pub fn parse(csv_text: &str) -> TierMapping {
    let text = csv_text.trim_matches(|c: char| c.is_whitespace() || c == BOM);
    let grid = normalize(parse_rows(text, Delim::Csv));
    let Some((header, data)) = grid.split_first() else {
        return TierMapping::new();
    };
    Layout::detect(header).extract(data)
}

/// Trim every cell.
fn normalize(rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    rows.into_iter()
        .map(|row| {
            row.into_iter()
                .map(|c| {
                    let t = c.trim();
                    if t.len() == c.len() { c } else { s!(t) }
                })
                .collect()
        })
        .collect()
}

/// Every non-empty cell under a tier column becomes a player (no region).
pub fn extract_wide(rows: &[Vec<String>], columns: &[Option<usize>; TIER_COUNT]) -> TierMapping {
    let mut tiers = TierMapping::new();
    for row in rows {
        for (tier, col) in Tier::ALL.into_iter().zip(columns.iter()) {
            let Some(ci) = *col else { continue };
            if let Some(entry) = PlayerEntry::new(cell(row, ci), None) {
                tiers.push(tier, entry);
            }
        }
    }
    tiers
}

/// One player per row. Rows without a name, or whose tier cell has no
/// digits or a number outside 1..=5, are dropped.
pub fn extract_long(rows: &[Vec<String>], tier_col: usize, player_col: usize, region_col: usize) -> TierMapping {
    let mut tiers = TierMapping::new();
    for row in rows {
        let Some(entry) = PlayerEntry::new(cell(row, player_col), Some(cell(row, region_col))) else {
            continue;
        };
        if let Some(tier) = tier_number(cell(row, tier_col)) {
            tiers.push(tier, entry);
        }
    }
    tiers
}

/// First digit run in the cell: "Tier: 3", "3rd" and "T3" all give tier 3.
/// Out-of-range numbers (including ones too large to parse) give `None`.
pub fn tier_number(cell: &str) -> Option<Tier> {
    let digits = DIGITS.find(cell)?;
    let n: u32 = digits.as_str().parse().ok()?;
    Tier::new(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| s!(*c)).collect()
    }

    #[test]
    fn wide_detected_from_tier_two_anywhere() {
        let layout = Layout::detect(&header(&["Player", "Region", "tier2"]));
        assert_eq!(layout, Layout::Wide { columns: [None, Some(2), None, None, None] });
    }

    #[test]
    fn wide_column_needs_exact_number() {
        // "Tier 10" hints wide but is not the Tier 1 column
        let layout = Layout::detect(&header(&["Tier 10", "TIER   3"]));
        assert_eq!(layout, Layout::Wide { columns: [None, None, Some(1), None, None] });
    }

    #[test]
    fn long_columns_by_name_then_position() {
        let layout = Layout::detect(&header(&["Region", "Name", "Tier rank"]));
        assert_eq!(layout, Layout::Long { tier: 2, player: 1, region: 0 });

        let layout = Layout::detect(&header(&["rank", "who", "where"]));
        assert_eq!(layout, Layout::Long { tier: 0, player: 1, region: 2 });
    }

    #[test]
    fn tier_digits() {
        assert_eq!(tier_number("Tier: 3"), Tier::new(3));
        assert_eq!(tier_number("3rd"), Tier::new(3));
        assert_eq!(tier_number("T3"), Tier::new(3));
        assert_eq!(tier_number("05"), Tier::new(5));
        assert_eq!(tier_number("12"), None);
        assert_eq!(tier_number("0"), None);
        assert_eq!(tier_number("top"), None);
        assert_eq!(tier_number("99999999999999999999"), None);
    }

    #[test]
    fn long_extraction_skips_short_rows() {
        let rows = vec![header(&["2"]), header(&["1", "Zed"])];
        let tiers = extract_long(&rows, 0, 1, 2);
        assert_eq!(tiers.len(), 1);
        assert_eq!(tiers.bucket(Tier::ALL[0])[0].region(), None);
    }
}

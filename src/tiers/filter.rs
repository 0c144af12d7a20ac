// src/tiers/filter.rs
use std::borrow::Cow;

use super::TierMapping;

/// Keep players whose name contains `query` (trimmed, case-insensitive).
///
/// A blank query hands back the input itself, borrowed.
pub fn filter<'a>(tiers: &'a TierMapping, query: &str) -> Cow<'a, TierMapping> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Cow::Borrowed(tiers);
    }
    Cow::Owned(tiers.retain_cloned(|p| p.name().to_lowercase().contains(&needle)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiers::{PlayerEntry, Tier};

    fn sample() -> TierMapping {
        let mut m = TierMapping::new();
        m.push(Tier::ALL[0], PlayerEntry::new("Cara", None).unwrap());
        m.push(Tier::ALL[0], PlayerEntry::new("Bob", Some("NA")).unwrap());
        m.push(Tier::ALL[3], PlayerEntry::new("Oscar", None).unwrap());
        m
    }

    #[test]
    fn blank_query_borrows_input() {
        let m = sample();
        let out = filter(&m, "  ");
        assert!(matches!(out, Cow::Borrowed(_)));
        assert!(std::ptr::eq(out.as_ref(), &m));
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        let m = sample();
        let out = filter(&m, " CA ");
        let names: Vec<_> = out.iter()
            .flat_map(|(_, ps)| ps.iter().map(|p| p.name().to_string()))
            .collect();
        assert_eq!(names, vec!["Cara", "Oscar"]);
        assert_eq!(out.bucket(Tier::ALL[1]).len(), 0);
    }
}

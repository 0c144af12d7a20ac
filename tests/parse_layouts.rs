// tests/parse_layouts.rs
//
// Sheet text → tiers, both layouts.
//
use pearl_tierlist::tiers::{parse, PlayerEntry, Tier, TierMapping};

fn tier(n: u32) -> Tier { Tier::new(n).unwrap() }

fn names(m: &TierMapping, n: u32) -> Vec<&str> {
    m.bucket(tier(n)).iter().map(PlayerEntry::name).collect()
}

#[test]
fn empty_and_header_only_give_five_empty_tiers() {
    for text in ["", "   \n\n", "Tier,Player,Region\n", "Tier 1,Tier 2"] {
        let m = parse(text);
        assert_eq!(m, TierMapping::new(), "input {text:?}");
        assert_eq!(m.iter().count(), 5);
    }
}

#[test]
fn wide_two_columns() {
    let m = parse("Tier 1,Tier 2\nBob,Cara\n");
    assert_eq!(names(&m, 1), ["Bob"]);
    assert_eq!(names(&m, 2), ["Cara"]);
    for n in 3..=5 {
        assert!(m.bucket(tier(n)).is_empty());
    }
    assert!(m.bucket(tier(1))[0].region().is_none());
}

#[test]
fn wide_wins_over_long_headers() {
    // Player/Region headers present, but a Tier 2 column forces wide layout.
    let m = parse("Player,Region,Tier 2\nAlice,EU,Zoe\n");
    assert_eq!(names(&m, 2), ["Zoe"]);
    assert_eq!(m.len(), 1);
}

#[test]
fn wide_keeps_row_order_and_skips_blanks() {
    let text = "\
Tier 1,Tier 2,Tier 3,tier4,TIER 5
A1,,C1,D1,
A2,B2,, ,E2
,B3
";
    let m = parse(text);
    assert_eq!(names(&m, 1), ["A1", "A2"]);
    assert_eq!(names(&m, 2), ["B2", "B3"]);
    assert_eq!(names(&m, 3), ["C1"]);
    assert_eq!(names(&m, 4), ["D1"]);
    assert_eq!(names(&m, 5), ["E2"]);
}

#[test]
fn wide_missing_tier_columns_contribute_nothing() {
    let m = parse("Tier 1,Notes,Tier 4\nAce,ignored,Dee\n");
    assert_eq!(names(&m, 1), ["Ace"]);
    assert_eq!(names(&m, 4), ["Dee"]);
    assert!(m.bucket(tier(2)).is_empty());
    assert!(m.bucket(tier(3)).is_empty());
}

#[test]
fn long_alice_tier_three_without_region() {
    let m = parse("Tier,Player,Region\nTier 3,Alice,\n");
    assert_eq!(m.bucket(tier(3)), &[PlayerEntry::new("Alice", None).unwrap()]);
    assert_eq!(m.len(), 1);
}

#[test]
fn long_drops_bad_tiers_and_blank_players() {
    let text = "\
Tier,Player,Region
7,Seven,EU
12,Twelve,EU
none,NoDigits,EU
2,,EU
 ,   ,
4th, Dana ,  NA
";
    let m = parse(text);
    assert_eq!(m.len(), 1);
    let dana = &m.bucket(tier(4))[0];
    assert_eq!(dana.name(), "Dana");
    assert_eq!(dana.region(), Some("NA"));
}

#[test]
fn long_digit_forms() {
    let m = parse("tier,name\nTier: 3,A\n3rd,B\nT3,C\n");
    assert_eq!(names(&m, 3), ["A", "B", "C"]);
}

#[test]
fn long_columns_found_by_name_in_any_order() {
    let m = parse("REGION,Name,Tier rank\nEU,Ana,1\n,Ben,5\n");
    assert_eq!(m.bucket(tier(1)), &[PlayerEntry::new("Ana", Some("EU")).unwrap()]);
    assert_eq!(m.bucket(tier(5)), &[PlayerEntry::new("Ben", None).unwrap()]);
}

#[test]
fn long_positional_fallback_never_reads_header_as_data() {
    // No recognisable headers: columns 0/1/2 are tier/player/region.
    // The header row itself ("1", "Header", "X") must not become a player.
    let m = parse("1,Header,X\n2,Real,EU\n");
    assert!(m.bucket(tier(1)).is_empty());
    assert_eq!(m.bucket(tier(2)), &[PlayerEntry::new("Real", Some("EU")).unwrap()]);
}

#[test]
fn quoted_cells_and_crlf() {
    let text = "Tier,Player,Region\r\n1,\"Smith, \"\"Ace\"\"\",\"North\nAmerica\"\r\n";
    let m = parse(text);
    let p = &m.bucket(tier(1))[0];
    assert_eq!(p.name(), "Smith, \"Ace\"");
    assert_eq!(p.region(), Some("North\nAmerica"));
}

#[test]
fn duplicates_are_kept() {
    let m = parse("Tier,Player\n1,Sam\n1,Sam\n");
    assert_eq!(names(&m, 1), ["Sam", "Sam"]);
}

#[test]
fn parse_is_deterministic() {
    let text = "Tier,Player,Region\n1,A,EU\n2,B,\n9,C,NA\n";
    assert_eq!(parse(text), parse(text));
}

#[test]
fn stray_quotes_in_names_stay_literal() {
    let m = parse("Tier,Player,Region\n1,Ana 5'11\",EU\n2,Ben,EU\n3,Cal,EU\n");
    assert_eq!(m.len(), 3);
    assert_eq!(names(&m, 1), ["Ana 5'11\""]);
    assert_eq!(names(&m, 2), ["Ben"]);
    assert_eq!(names(&m, 3), ["Cal"]);

    let m = parse("Tier,Player,Region\n1,Dwayne \"Rock\" J,NA\n");
    assert_eq!(names(&m, 1), ["Dwayne \"Rock\" J"]);
    assert_eq!(m.bucket(tier(1))[0].region(), Some("NA"));
}

#[test]
fn byte_order_mark_is_ignored() {
    let m = parse("\u{FEFF}Tier 1,Tier 2\nBob,Cara\n");
    assert_eq!(names(&m, 1), ["Bob"]);
    assert_eq!(names(&m, 2), ["Cara"]);

    let m = parse("\u{FEFF}Tier,Player,Region\n4,Dan,SA\n");
    assert_eq!(names(&m, 4), ["Dan"]);
    assert_eq!(m.bucket(tier(4))[0].region(), Some("SA"));
}

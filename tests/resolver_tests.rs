use rgx_ranking::domain::{Division, PlayerDirectory, PlayerRecord, RatedEntry};
use rgx_ranking::errors::LookupError;
use rgx_ranking::resolver::{Identifier, IdentifierResolver};

fn player(name: &str, player_id: i64, rank: u32, division: Division, elo_rating: i64) -> PlayerRecord {
    PlayerRecord {
        name: name.to_string(),
        player_id,
        rank,
        club: Some("Roundnet Club".to_string()),
        city: None,
        games: 50,
        elo_rating,
        division,
        trend_90_days: 5,
        pro_status: false,
        exists_in_both_divisions: false,
    }
}

fn directory() -> PlayerDirectory {
    PlayerDirectory::new(
        vec![
            player("Paul Siemer", 265, 1, Division::Open, 2104),
            player("Alex Kraft", 31, 2, Division::Open, 2010),
            player("Jonas Berg", 190, 3, Division::Open, 1988),
            player("Robin Hahn", 18, 4, Division::Open, 1850),
        ],
        vec![
            player("Lena Vogel", 12, 1, Division::Women, 1902),
            player("Alex Kraft", 31, 2, Division::Women, 1840),
            player("Robin Hahn", 77, 3, Division::Women, 1700),
            player("Mia Sommer", 265, 4, Division::Women, 1650),
        ],
    )
    .expect("directory should be consistent")
}

#[test]
fn id_in_one_division_returns_that_record() {
    let resolver = IdentifierResolver::new();
    let dir = directory();

    let open_only = resolver.lookup(&dir, "190").unwrap();
    assert_eq!(open_only.record.division, Division::Open);
    assert_eq!(open_only.record.name, "Jonas Berg");

    let women_only = resolver.lookup(&dir, "12").unwrap();
    assert_eq!(women_only.record.division, Division::Women);
}

#[test]
fn id_in_both_divisions_returns_women_record() {
    let resolver = IdentifierResolver::new();
    let resolved = resolver.lookup(&directory(), "265").unwrap();

    // Same id names different people per division; Women still wins
    assert_eq!(resolved.record.division, Division::Women);
    assert_eq!(resolved.record.name, "Mia Sommer");
    assert_eq!(resolved.match_score, None);
    assert!(resolved.exact_match);
}

#[test]
fn exact_match_tracks_score() {
    let resolver = IdentifierResolver::new();
    let dir = directory();

    for query in ["Paul Siemer", "paul siemer", "Paul Siemr", "Siemer Paul", "Jonas"] {
        let resolved = resolver.lookup(&dir, query).unwrap();
        assert_eq!(resolved.exact_match, resolved.match_score == Some(100), "query {query}");
    }
}

#[test]
fn shared_name_with_open_suffix_returns_open() {
    let resolver = IdentifierResolver::new();
    let dir = directory();

    let plain = resolver.lookup(&dir, "Alex Kraft").unwrap();
    assert_eq!(plain.record.division, Division::Women);

    for query in ["Alex Kraft (o)", "Alex Kraft (1)"] {
        let open = resolver.lookup(&dir, query).unwrap();
        assert_eq!(open.record.division, Division::Open);
        assert_eq!(open.match_score, Some(100));
    }
}

#[test]
fn shared_name_with_different_ids_still_follows_name_rules() {
    let resolver = IdentifierResolver::new();
    let dir = directory();

    assert_eq!(resolver.lookup(&dir, "Robin Hahn").unwrap().record.player_id, 77);
    assert_eq!(resolver.lookup(&dir, "Robin Hahn (o)").unwrap().record.player_id, 18);
}

#[test]
fn open_request_without_open_record_falls_back_to_women() {
    let resolver = IdentifierResolver::new();
    let resolved = resolver.lookup(&directory(), "Lena Vogel (o)").unwrap();
    assert_eq!(resolved.record.division, Division::Women);
}

#[test]
fn unmatched_number_differs_by_entry_point() {
    let resolver = IdentifierResolver::new();
    let dir = directory();

    assert!(matches!(resolver.lookup(&dir, "1850"), Err(LookupError::NotFound(_))));
    assert_eq!(resolver.resolve_rating(&dir, "1850").unwrap(), RatedEntry::direct(1850));
}

#[test]
fn matched_number_in_rating_mode_uses_player_rating() {
    let resolver = IdentifierResolver::new();
    let entry = resolver.resolve_rating(&directory(), "31").unwrap();
    assert_eq!(entry.rating, 1840);
    assert_eq!(entry.display_name, "Alex Kraft");
}

#[test]
fn direct_rating_needs_no_directory() {
    let resolver = IdentifierResolver::new();
    let empty = PlayerDirectory::default();

    let entry = resolver.resolve_rating(&empty, "(1972)").unwrap();
    assert_eq!(entry.rating, 1972);
    assert_eq!(entry.display_name, "Direct RGX 1972");
}

#[test]
fn names_in_rating_mode_resolve_fuzzily() {
    let resolver = IdentifierResolver::new();
    let entry = resolver.resolve_rating(&directory(), "Jonas Bergg").unwrap();
    assert_eq!(entry.rating, 1988);
}

#[test]
fn malformed_literal_in_rating_mode_is_invalid() {
    let resolver = IdentifierResolver::new();
    assert!(matches!(
        resolver.resolve_rating(&directory(), "(18 50)"),
        Err(LookupError::InvalidIdentifier(_))
    ));
}

#[test]
fn empty_directory_reports_not_found_for_everything_but_ratings() {
    let resolver = IdentifierResolver::new();
    let empty = PlayerDirectory::default();

    assert!(matches!(resolver.lookup(&empty, "12"), Err(LookupError::NotFound(_))));
    assert!(matches!(resolver.lookup(&empty, "Lena"), Err(LookupError::NotFound(_))));
    assert!(matches!(resolver.resolve_rating(&empty, "Lena"), Err(LookupError::NotFound(_))));
    assert_eq!(resolver.resolve_rating(&empty, "12").unwrap().rating, 12);
}

#[test]
fn parse_and_resolve_agree() {
    let resolver = IdentifierResolver::new();
    let dir = directory();
    let identifier = Identifier::parse("Jonas Berg (o)").unwrap();

    assert_eq!(
        identifier,
        Identifier::Name {
            text: "Jonas Berg".to_string(),
            wants_open: true
        }
    );
    assert_eq!(resolver.resolve(&dir, &identifier).unwrap().record.player_id, 190);
}

#[test]
fn oversized_rating_literal_depends_on_entry_point() {
    let resolver = IdentifierResolver::new();
    let dir = directory();

    assert!(matches!(
        resolver.lookup(&dir, "(99999999999999999999)"),
        Err(LookupError::NotFound(_))
    ));
    assert!(matches!(
        resolver.history_target(&dir, "(99999999999999999999)"),
        Err(LookupError::NotFound(_))
    ));
    assert!(matches!(
        resolver.resolve_rating(&dir, "(99999999999999999999)"),
        Err(LookupError::InvalidIdentifier(_))
    ));
}

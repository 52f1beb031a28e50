use super::*;

// =============================================================
// Helpers
// =============================================================

fn chess_club(participants: &[&str]) -> Activity {
    Activity {
        description: "d".to_owned(),
        schedule: "Mon".to_owned(),
        max_participants: 10,
        participants: participants.iter().map(|p| (*p).to_owned()).collect(),
    }
}

fn map_of(entries: &[(&str, Activity)]) -> ActivityMap {
    ActivityMap::new(
        entries
            .iter()
            .map(|(name, a)| ((*name).to_owned(), a.clone()))
            .collect(),
    )
}

// =============================================================
// ActivitiesState
// =============================================================

#[test]
fn state_defaults_to_loading_with_no_options() {
    let s = ActivitiesState::default();
    assert_eq!(s.listing, Listing::Loading);
    assert!(s.options.is_empty());
    assert!(!s.notice.is_visible());
}

#[test]
fn apply_activities_fills_listing_and_options_in_order() {
    let mut s = ActivitiesState::default();
    s.apply_activities(map_of(&[("Zumba", chess_club(&[])), ("Chess Club", chess_club(&["a@x.com"]))]));
    assert_eq!(s.options, vec!["Zumba".to_owned(), "Chess Club".to_owned()]);
    match &s.listing {
        Listing::Loaded(entries) => assert_eq!(entries.len(), 2),
        other => panic!("expected loaded listing, got {other:?}"),
    }
    assert_eq!(s.activity("Chess Club").map(Activity::spots_left), Some(9));
}

#[test]
fn apply_activities_replaces_previous_snapshot() {
    let mut s = ActivitiesState::default();
    s.apply_activities(map_of(&[("Art", chess_club(&[])), ("Chess Club", chess_club(&[]))]));
    s.apply_activities(map_of(&[("Chess Club", chess_club(&["a@x.com", "b@x.com"]))]));
    assert_eq!(s.options, vec!["Chess Club".to_owned()]);
    assert!(s.activity("Art").is_none());
    assert_eq!(s.activity("Chess Club").map(Activity::spots_left), Some(8));
}

#[test]
fn fail_load_keeps_select_options() {
    let mut s = ActivitiesState::default();
    s.apply_activities(map_of(&[("Chess Club", chess_club(&[]))]));
    s.fail_load();
    assert_eq!(s.listing, Listing::Failed);
    assert_eq!(s.options, vec!["Chess Club".to_owned()]);
    assert!(s.activity("Chess Club").is_none());
}

#[test]
fn empty_fetch_clears_options() {
    let mut s = ActivitiesState::default();
    s.apply_activities(map_of(&[("Chess Club", chess_club(&[]))]));
    s.apply_activities(ActivityMap::default());
    assert!(s.options.is_empty());
    assert_eq!(s.listing, Listing::Loaded(Vec::new()));
}

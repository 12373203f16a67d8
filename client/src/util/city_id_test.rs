use super::*;

// =============================================================
// extract_city_id_from_url
// =============================================================

#[test]
fn no_relevant_fragment_is_none() {
    assert_eq!(extract_city_id_from_url(""), None);
    assert_eq!(extract_city_id_from_url("https://parking.org"), None);
    assert_eq!(extract_city_id_from_url("https://parking.org#shoup"), None);
    assert_eq!(extract_city_id_from_url("https://parking.org#city"), None);
    assert_eq!(extract_city_id_from_url("https://parking.org#parking-reform-map"), None);
}

#[test]
fn empty_value_is_none() {
    assert_eq!(extract_city_id_from_url("https://parking.org#city="), None);
    assert_eq!(extract_city_id_from_url("https://parking.org#parking-reform-map="), None);
    assert_eq!(extract_city_id_from_url("https://parking.org#city=..."), None);
}

#[test]
fn extracts_city_marker() {
    assert_eq!(extract_city_id_from_url("https://parking.org#city=my-city").as_deref(), Some("my-city"));
}

#[test]
fn extracts_legacy_marker_lowercased() {
    assert_eq!(
        extract_city_id_from_url("https://parking.org#parking-reform-map=MY-CITY").as_deref(),
        Some("my-city")
    );
}

#[test]
fn strips_dots() {
    assert_eq!(extract_city_id_from_url("https://parking.org#city=st.-louis").as_deref(), Some("st-louis"));
    assert_eq!(extract_city_id_from_url("https://parking.org#city=st.-louis.").as_deref(), Some("st-louis"));
}

#[test]
fn ignores_trailing_parameters() {
    assert_eq!(extract_city_id_from_url("https://parking.org/?x=1#city=tempe-az&y=2").as_deref(), Some("tempe-az"));
}

#[test]
fn detects_lots_toggle() {
    assert!(has_lots_toggle("https://parking.org#lots-toggle"));
    assert!(has_lots_toggle("https://parking.org#city=tempe-az#lots-toggle"));
    assert!(!has_lots_toggle("https://parking.org#city=tempe-az"));
    assert!(!has_lots_toggle(""));
}

#[test]
fn lots_toggle_does_not_change_the_city() {
    let url = "https://parking.org#city=tempe-az#lots-toggle";
    assert_eq!(extract_city_id_from_url(url).as_deref(), Some("tempe-az"));
    assert!(!has_lots_toggle(&determine_share_url(url, "tempe-az")));
}

// =============================================================
// determine_share_url
// =============================================================

#[test]
fn share_url_appends_marker() {
    assert_eq!(determine_share_url("https://parking.org", "tempe-az"), "https://parking.org#city=tempe-az");
    assert_eq!(
        determine_share_url("https://parking.org", "saint-shoup-village-az"),
        "https://parking.org#city=saint-shoup-village-az"
    );
}

#[test]
fn share_url_replaces_existing_fragment() {
    assert_eq!(determine_share_url("https://parking.org#already-hash", "tempe-az"), "https://parking.org#city=tempe-az");
    assert_eq!(
        determine_share_url("https://parking.org#city=another-city-ny", "tempe-az"),
        "https://parking.org#city=tempe-az"
    );
}

#[test]
fn share_url_is_idempotent() {
    let once = determine_share_url("https://parking.org/map?embed=1", "columbus-oh");
    assert_eq!(determine_share_url(&once, "columbus-oh"), once);
}

#[test]
fn share_url_round_trips_every_id() {
    for id in ["atlanta-ga", "st-louis-mo", "hartford-ct", "fort-worth-tx", "winston-salem-nc"] {
        let url = determine_share_url("https://parking.org/#parking-reform-map=old", id);
        assert_eq!(extract_city_id_from_url(&url).as_deref(), Some(id));
    }
}

// =============================================================
// parse_city_id_from_json
// =============================================================

#[test]
fn slugifies_display_names() {
    assert_eq!(parse_city_id_from_json("Tempe, AZ"), "tempe-az");
    assert_eq!(parse_city_id_from_json("TEMPE, AZ"), "tempe-az");
    assert_eq!(parse_city_id_from_json("Saint Shoup Village, AZ"), "saint-shoup-village-az");
    assert_eq!(parse_city_id_from_json("St. Shoup Village, AZ"), "st-shoup-village-az");
    assert_eq!(parse_city_id_from_json("No state"), "no-state");
    assert_eq!(parse_city_id_from_json("Hartford - rail station"), "hartford-rail-station");
}

#[test]
fn camel_case_splits_words() {
    assert_eq!(parse_city_id_from_json("NewHaven"), "new-haven");
}

#[test]
fn current_url_is_empty_outside_browser() {
    #[cfg(not(feature = "csr"))]
    assert!(current_url().is_empty());
}

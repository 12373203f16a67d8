use super::*;

const STATS: &str = r#"{
    "columbus-oh": {
        "name": "Columbus, OH",
        "percentage": "11%",
        "population": "905,748",
        "reforms": "implemented",
        "url": "https://parkingreform.org/columbus",
        "cityType": "Core City",
        "urbanizedAreaPopulation": "1,567,254",
        "parkingScore": "53",
        "contribution": null
    },
    "atlanta-ga": {
        "name": "Atlanta, GA",
        "percentage": "14%",
        "population": "498,715",
        "reforms": null,
        "url": null,
        "cityType": "Core City",
        "urbanizedAreaPopulation": "4,999,259",
        "parkingScore": null,
        "contribution": "maintainer@example.com"
    },
    "hartford-ct": {
        "name": "Hartford",
        "percentage": "22%",
        "population": "121,054",
        "county": "Hartford County",
        "transitStation": ""
    }
}"#;

// =============================================================
// parse_city_stats
// =============================================================

#[test]
fn parse_keeps_file_order() {
    let stats = parse_city_stats(STATS).unwrap();
    let ids: Vec<_> = stats.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(ids, vec!["columbus-oh", "atlanta-ga", "hartford-ct"]);
}

#[test]
fn parse_reads_base_fields() {
    let stats = parse_city_stats(STATS).unwrap();
    let (_, columbus) = &stats[0];
    assert_eq!(columbus.name, "Columbus, OH");
    assert_eq!(columbus.percentage, "11%");
    assert_eq!(columbus.population, "905,748");
    assert_eq!(columbus.reforms(), Some("implemented"));
    assert_eq!(columbus.url(), Some("https://parkingreform.org/columbus"));
}

#[test]
fn parse_rejects_non_object() {
    assert!(matches!(parse_city_stats("[]"), Err(DataError::StatsParse(_))));
}

#[test]
fn parse_names_malformed_record() {
    let err = parse_city_stats(r#"{"ok": {"name": "A", "percentage": "1%", "population": "1"}, "bad": {"name": 3}}"#)
        .unwrap_err();
    assert!(matches!(err, DataError::InvalidStats { ref id, .. } if id == "bad"));
}

// =============================================================
// Capability accessors
// =============================================================

#[test]
fn primary_capabilities() {
    let stats = parse_city_stats(STATS).unwrap();
    let (_, columbus) = &stats[0];
    assert_eq!(columbus.city_type(), Some("Core City"));
    assert_eq!(columbus.urbanized_area_population(), Some("1,567,254"));
    assert_eq!(columbus.parking_score(), Some("53"));
    assert_eq!(columbus.contribution(), None);
    assert_eq!(columbus.county(), None);
}

#[test]
fn null_fields_read_as_absent() {
    let stats = parse_city_stats(STATS).unwrap();
    let (_, atlanta) = &stats[1];
    assert_eq!(atlanta.reforms(), None);
    assert_eq!(atlanta.url(), None);
    assert_eq!(atlanta.parking_score(), None);
    assert_eq!(atlanta.contribution(), Some("maintainer@example.com"));
}

#[test]
fn ct_capabilities() {
    let stats = parse_city_stats(STATS).unwrap();
    let (_, hartford) = &stats[2];
    assert_eq!(hartford.county(), Some("Hartford County"));
    assert_eq!(hartford.transit_station(), None);
    assert_eq!(hartford.reforms(), None);
}

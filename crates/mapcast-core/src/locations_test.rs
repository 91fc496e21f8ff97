use super::*;

#[test]
fn parse_cities_accepts_country_entries() {
    let cities = parse_cities(
        "cities:\n  - name: London\n    country: GB\n  - name: Paris\n    country: FR\n",
    )
    .expect("valid list should parse");
    assert_eq!(cities.len(), 2);
    assert_eq!(cities[0], LocationQuery::city("London", "GB"));
}

#[test]
fn parse_cities_accepts_coordinate_entries() {
    let cities = parse_cities(
        "cities:\n  - name: Reykjavik\n    lat: 64.1466\n    lon: -21.9426\n",
    )
    .expect("valid list should parse");
    assert_eq!(
        cities[0].locator,
        Locator::Point {
            lat: 64.1466,
            lon: -21.9426
        }
    );
}

#[test]
fn parse_cities_rejects_empty_list() {
    let result = parse_cities("cities: []\n");
    assert!(
        matches!(result, Err(ConfigError::InvalidCityList(_))),
        "expected InvalidCityList, got: {result:?}"
    );
}

#[test]
fn parse_cities_rejects_empty_name() {
    let result = parse_cities("cities:\n  - name: \"\"\n    country: GB\n");
    assert!(
        matches!(result, Err(ConfigError::InvalidCityList(_))),
        "expected InvalidCityList, got: {result:?}"
    );
}

#[test]
fn parse_cities_rejects_out_of_range_coordinate() {
    let result = parse_cities("cities:\n  - name: Nowhere\n    lat: 95.0\n    lon: 10.0\n");
    assert!(
        matches!(result, Err(ConfigError::InvalidCityList(_))),
        "expected InvalidCityList, got: {result:?}"
    );
}

#[test]
fn parse_cities_rejects_malformed_yaml() {
    let result = parse_cities("cities: [not closed\n");
    assert!(
        matches!(result, Err(ConfigError::CityFileParse { .. })),
        "expected CityFileParse, got: {result:?}"
    );
}

#[test]
fn load_cities_missing_file_is_a_read_error() {
    let result = load_cities(Path::new("/definitely/not/here/cities.yaml"));
    assert!(
        matches!(result, Err(ConfigError::CityFileRead { .. })),
        "expected CityFileRead, got: {result:?}"
    );
}

#[test]
fn default_cities_covers_the_stock_twelve() {
    let cities = default_cities();
    assert_eq!(cities.len(), 12);
    assert!(cities.contains(&LocationQuery::city("London", "GB")));
    assert!(cities.contains(&LocationQuery::city("Rio de Janeiro", "BR")));
}

#[test]
fn display_labels_both_locator_shapes() {
    assert_eq!(LocationQuery::city("London", "GB").to_string(), "London,GB");
    assert_eq!(
        LocationQuery::point("Reykjavik", 64.1466, -21.9426).to_string(),
        "Reykjavik@64.1466,-21.9426"
    );
}

#[test]
fn location_query_round_trips_through_serde() {
    let city = LocationQuery::city("Tokyo", "JP");
    let json = serde_json::to_string(&city).expect("serialize");
    assert_eq!(json, r#"{"name":"Tokyo","country":"JP"}"#);
    let back: LocationQuery = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, city);
}

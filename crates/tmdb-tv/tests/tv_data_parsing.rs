//! Integration tests for parsing TV series responses.

use std::fs;
use std::path::PathBuf;
use tmdb_tv::models::TvDetails;

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_details() -> TvDetails {
    let fixture_path = fixtures_dir().join("tv_details.json");
    let json_data = fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read TV fixture at {}: {}",
            fixture_path.display(),
            e
        )
    });

    serde_json::from_str(&json_data)
        .unwrap_or_else(|e| panic!("Failed to deserialize TV details: {e}"))
}

#[test]
fn test_series_fields() {
    let series = load_details();

    assert_eq!(series.id, 1399);
    assert_eq!(series.series_type, "Scripted");
    assert_eq!(series.status, "Ended");
    assert!(!series.in_production);
    assert!(series.episode_run_time.is_empty());
    assert_eq!(series.networks[0].name, "HBO");
    assert_eq!(series.created_by[0].name, "David Benioff");
}

#[test]
fn test_seasons_and_episodes() {
    let series = load_details();

    assert_eq!(series.seasons.len(), 2);
    assert_eq!(series.seasons[0].season_number, 0);
    assert!(series.seasons[1].poster_path.is_none());

    let last = series.last_episode_to_air.expect("last episode is present");
    assert_eq!(last.name, "The Iron Throne");
    assert_eq!(last.runtime, Some(80));
    assert!(series.next_episode_to_air.is_none());
}

#[test]
fn test_appended_aggregate_credits_and_ids() {
    let series = load_details();

    let credits = series.aggregate_credits.expect("aggregate credits were appended");
    assert_eq!(credits.cast[0].roles[0].character, "Tyrion Lannister");
    assert_eq!(credits.cast[0].total_episode_count, 67);
    assert!(credits.crew.is_empty());

    let ids = series.external_ids.expect("external ids were appended");
    assert_eq!(ids.imdb_id.as_deref(), Some("tt0944947"));
    assert_eq!(ids.tvdb_id, Some(121_361));
}

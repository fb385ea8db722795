use nba_rest::{
    app::{RunOptions, run},
    config::Config,
    data_fetcher::cache::{CacheProvider, CsvFileCache, dataset_cache_path},
    error::AppError,
    output::OutputFormat,
    testing_utils::{SAMPLE_SCHEDULE_HTML, TestDataBuilder},
};
use std::path::Path;
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn november_page() -> String {
    TestDataBuilder::schedule_page_html(&[
        TestDataBuilder::raw_game_row("Sun, Nov 1, 2015", "7:00p", "Atlanta Hawks", "Charlotte Hornets"),
        TestDataBuilder::raw_game_row("Tue, Nov 3, 2015", "7:30p", "New York Knicks", "Atlanta Hawks"),
    ])
}

async fn mount_page(server: &MockServer, page_path: &str, body: String, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

fn test_config(server: &MockServer, dir: &Path) -> Config {
    Config {
        source_url_template: format!("{}/NBA_{{season}}_games-{{month}}.html", server.uri()),
        season_months: vec!["October".to_string(), "November".to_string()],
        cache_path: dir.join("data-raw").join("nba.csv").to_string_lossy().to_string(),
        output_path: dir.join("data").join("rest.csv").to_string_lossy().to_string(),
        ..Config::default()
    }
}

fn summary_row<'a>(content: &'a str, team: &str, location: &str) -> Option<Vec<&'a str>> {
    content
        .lines()
        .map(|line| line.split(',').collect::<Vec<_>>())
        .find(|fields| fields[0] == team && fields[1] == location)
}

/// Full season: two month pages are fetched, cached and summarized
#[tokio::test]
async fn test_season_pipeline_end_to_end() {
    let server = MockServer::start().await;
    mount_page(&server, "/NBA_2016_games-october.html", SAMPLE_SCHEDULE_HTML.to_string(), 1).await;
    mount_page(&server, "/NBA_2016_games-november.html", november_page(), 1).await;

    let temp_dir = tempdir().unwrap();
    let config = test_config(&server, temp_dir.path());

    let report = run(&config, &RunOptions::default()).await.unwrap();
    assert_eq!(report.games, 5);
    assert_eq!(report.team_games, 10);

    // Separator rows were dropped before caching
    let cached = CsvFileCache::new(dataset_cache_path(&config.cache_path, 2016, None))
        .load()
        .unwrap()
        .unwrap();
    assert_eq!(cached.len(), 5);

    let content = std::fs::read_to_string(&config.output_path).unwrap();
    assert_eq!(content.lines().next().unwrap(), "team,location,mean,std");

    // Hawks: home 10-27 (first), away 10-30 (2), away 11-01 (1), home 11-03 (1)
    let away = summary_row(&content, "Atlanta Hawks", "away").unwrap();
    assert_eq!(away[2], "1.5");
    let std: f64 = away[3].parse().unwrap();
    assert!((std - 0.5f64.sqrt()).abs() < 1e-12);

    let home = summary_row(&content, "Atlanta Hawks", "home").unwrap();
    assert_eq!(home[2], "1.0");
    assert_eq!(home[3], "");

    // Teams that only ever appeared once have no rows under the default policy
    assert!(summary_row(&content, "Detroit Pistons", "away").is_none());
}

/// A second run reads the cache instead of the network
#[tokio::test]
async fn test_second_run_uses_cache() {
    let server = MockServer::start().await;
    mount_page(&server, "/NBA_2016_games-october.html", SAMPLE_SCHEDULE_HTML.to_string(), 1).await;
    mount_page(&server, "/NBA_2016_games-november.html", november_page(), 1).await;

    let temp_dir = tempdir().unwrap();
    let config = test_config(&server, temp_dir.path());

    let first = run(&config, &RunOptions::default()).await.unwrap();
    let first_output = std::fs::read_to_string(&config.output_path).unwrap();
    let second = run(&config, &RunOptions::default()).await.unwrap();
    let second_output = std::fs::read_to_string(&config.output_path).unwrap();

    assert_eq!(first.games, second.games);
    assert_eq!(first_output, second_output);
    // Mock expectations (one call per page) are verified when the server drops
}

/// --refresh fetches again even though a cache exists
#[tokio::test]
async fn test_refresh_refetches() {
    let server = MockServer::start().await;
    mount_page(&server, "/NBA_2016_games-october.html", SAMPLE_SCHEDULE_HTML.to_string(), 2).await;
    mount_page(&server, "/NBA_2016_games-november.html", november_page(), 2).await;

    let temp_dir = tempdir().unwrap();
    let config = test_config(&server, temp_dir.path());
    let refresh = RunOptions {
        refresh: true,
        ..RunOptions::default()
    };

    run(&config, &RunOptions::default()).await.unwrap();
    run(&config, &refresh).await.unwrap();
}

/// Switching seasons never reuses the previous season's cache
#[tokio::test]
async fn test_each_season_has_its_own_cache() {
    let server = MockServer::start().await;
    mount_page(&server, "/NBA_2016_games-november.html", november_page(), 1).await;

    let temp_dir = tempdir().unwrap();
    let mut config = test_config(&server, temp_dir.path());
    let november = RunOptions {
        month: Some("November".to_string()),
        ..RunOptions::default()
    };

    let first = run(&config, &november).await.unwrap();
    assert_eq!(first.games, 2);

    // No page for the next season: the run must go to the network and fail
    config.season = 2017;
    let err = run(&config, &november).await.unwrap_err();
    assert!(matches!(err, AppError::PageNotFound { .. }));

    let next_season = TestDataBuilder::schedule_page_html(&[TestDataBuilder::raw_game_row(
        "Tue, Nov 1, 2016",
        "7:00p",
        "Boston Celtics",
        "Chicago Bulls",
    )]);
    mount_page(&server, "/NBA_2017_games-november.html", next_season, 1).await;

    let second = run(&config, &november).await.unwrap();
    assert_eq!(second.games, 1);
    let data_raw = temp_dir.path().join("data-raw");
    assert!(data_raw.join("nba-2016-november.csv").exists());
    assert!(data_raw.join("nba-2017-november.csv").exists());
}

/// An abbreviated month name fetches the full-name page and shares its cache
#[tokio::test]
async fn test_abbreviated_month_fetches_full_name_page() {
    let server = MockServer::start().await;
    mount_page(&server, "/NBA_2016_games-november.html", november_page(), 1).await;

    let temp_dir = tempdir().unwrap();
    let config = test_config(&server, temp_dir.path());
    let options = RunOptions {
        month: Some("Nov".to_string()),
        ..RunOptions::default()
    };

    let report = run(&config, &options).await.unwrap();
    assert_eq!(report.games, 2);
    assert!(temp_dir.path().join("data-raw").join("nba-2016-november.csv").exists());
}

/// A single month uses its own cache file next to the season cache
#[tokio::test]
async fn test_single_month_variant() {
    let server = MockServer::start().await;
    mount_page(&server, "/NBA_2016_games-november.html", november_page(), 1).await;

    let temp_dir = tempdir().unwrap();
    let config = Config {
        output_format: OutputFormat::Json,
        ..test_config(&server, temp_dir.path())
    };
    let options = RunOptions {
        month: Some("November".to_string()),
        ..RunOptions::default()
    };

    let report = run(&config, &options).await.unwrap();
    assert_eq!(report.games, 2);

    assert!(temp_dir.path().join("data-raw").join("nba-2016-november.csv").exists());
    assert!(!temp_dir.path().join("data-raw").join("nba-2016.csv").exists());

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&config.output_path).unwrap()).unwrap();
    let records = json.as_array().unwrap();
    // Hawks home 11-03 follows away 11-01: one observation, std undefined
    let hawks_home = records
        .iter()
        .find(|r| r["team"] == "Atlanta Hawks" && r["location"] == "home")
        .unwrap();
    assert_eq!(hawks_home["mean"], 1.0);
    assert!(hawks_home["std"].is_null());
}

/// A missing page aborts the run without writing cache or output
#[tokio::test]
async fn test_missing_page_is_fatal() {
    let server = MockServer::start().await;
    mount_page(&server, "/NBA_2016_games-october.html", SAMPLE_SCHEDULE_HTML.to_string(), 1).await;
    Mock::given(method("GET"))
        .and(path("/NBA_2016_games-november.html"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let temp_dir = tempdir().unwrap();
    let config = test_config(&server, temp_dir.path());

    let err = run(&config, &RunOptions::default()).await.unwrap_err();
    assert!(matches!(err, AppError::PageNotFound { .. }));
    assert!(!dataset_cache_path(&config.cache_path, 2016, None).exists());
    assert!(!Path::new(&config.output_path).exists());
}

/// A malformed cached value surfaces as a data error naming the row
#[tokio::test]
async fn test_bad_cached_value_is_reported() {
    let temp_dir = tempdir().unwrap();
    let server = MockServer::start().await;
    let config = test_config(&server, temp_dir.path());

    let table = TestDataBuilder::raw_schedule(&[
        TestDataBuilder::raw_game_row("Tue, Oct 27, 2015", "8:00p", "Detroit Pistons", "Atlanta Hawks"),
        TestDataBuilder::raw_game_row("Tue, Oct 27, 2015", "8:00", "Cleveland Cavaliers", "Chicago Bulls"),
    ]);
    CsvFileCache::new(dataset_cache_path(&config.cache_path, config.season, None))
        .save(&table)
        .unwrap();

    let err = run(&config, &RunOptions::default()).await.unwrap_err();
    assert!(err.is_data_error());
    match err {
        AppError::Parse { row, column, .. } => {
            assert_eq!(row, 2);
            assert_eq!(column, "start");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

use chrono::Month;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::cli::Args;
use crate::config::Config;
use crate::data_fetcher::api::{
    HttpTableSource, TableSource, build_season_urls,
    create_http_client_with_timeout, load_or_fetch,
};
use crate::data_fetcher::cache::{CacheProvider, CsvFileCache, dataset_cache_path};
use crate::data_fetcher::models::RestSummary;
use crate::data_fetcher::processors::{
    apply_null_policy, derive_rest_days, normalize_games, summarize_rest,
};
use crate::error::AppError;
use crate::output::{write_games_csv, write_summary, write_team_games_csv};

/// Per-run choices that are not part of the persistent configuration.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Single month to process instead of the configured season months.
    pub month: Option<String>,
    pub refresh: bool,
    pub export_games: Option<PathBuf>,
    pub export_team_games: Option<PathBuf>,
}

impl From<&Args> for RunOptions {
    fn from(args: &Args) -> Self {
        RunOptions {
            month: args.month.clone(),
            refresh: args.refresh,
            export_games: args.export_games.as_ref().map(PathBuf::from),
            export_team_games: args.export_team_games.as_ref().map(PathBuf::from),
        }
    }
}

/// What a pipeline run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub games: usize,
    pub team_games: usize,
    pub summaries: Vec<RestSummary>,
    pub output_path: PathBuf,
}

/// Full English name of a month given by name or abbreviation ("Nov" and
/// "november" both become "November"). The site only serves full names.
pub fn month_name(month: &str) -> Result<&'static str, AppError> {
    month
        .trim()
        .parse::<Month>()
        .map(|m| m.name())
        .map_err(|_| AppError::config_error(format!("Unknown month name: '{month}'")))
}

/// URLs of the pages making up the requested dataset: one month, or every
/// configured season month in order.
pub fn dataset_urls(config: &Config, month: Option<&str>) -> Result<Vec<String>, AppError> {
    let months = match month {
        Some(month) => vec![month_name(month)?],
        None => config
            .season_months
            .iter()
            .map(|m| month_name(m))
            .collect::<Result<Vec<_>, _>>()?,
    };
    Ok(build_season_urls(
        &config.source_url_template,
        config.season,
        &months,
    ))
}

/// Runs the pipeline against the schedule site, caching the raw table in the
/// cache file for the configured season (or its per-month variant).
pub async fn run(config: &Config, options: &RunOptions) -> Result<RunReport, AppError> {
    let month = options.month.as_deref().map(month_name).transpose()?;
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let source = HttpTableSource::new(client);
    let cache = CsvFileCache::new(dataset_cache_path(&config.cache_path, config.season, month));
    run_with(config, options, &cache, &source).await
}

/// Runs the pipeline with the given cache and table source: load or fetch the
/// raw table, normalize it, derive rest days, aggregate and write the summary.
#[instrument(skip_all, fields(season = config.season, month = ?options.month))]
pub async fn run_with(
    config: &Config,
    options: &RunOptions,
    cache: &dyn CacheProvider,
    source: &dyn TableSource,
) -> Result<RunReport, AppError> {
    let urls = dataset_urls(config, options.month.as_deref())?;
    let raw = load_or_fetch(cache, source, &urls, options.refresh).await?;

    let games = normalize_games(&raw)?;
    info!("Normalized {} games", games.len());
    if let Some(path) = &options.export_games {
        write_games_csv(&games, path)?;
    }

    let team_games = derive_rest_days(&games);
    if let Some(path) = &options.export_team_games {
        write_team_games_csv(&team_games, path)?;
    }

    let observations = apply_null_policy(team_games.clone(), config.null_rest_policy);
    let summaries = summarize_rest(&observations);

    let output_path = Path::new(&config.output_path).to_path_buf();
    write_summary(&summaries, &output_path, config.output_format)?;
    info!(
        "Summarized {} teams over {} team-games",
        summaries.len(),
        observations.len()
    );

    Ok(RunReport {
        games: games.len(),
        team_games: team_games.len(),
        summaries,
        output_path,
    })
}

//! URL building for the schedule pages

/// Builds the URL of one month's schedule page by substituting `{season}` and
/// `{month}` in the template. Month names are lowercased, as the site expects.
///
/// # Example
/// ```
/// use nba_rest::data_fetcher::api::build_month_url;
///
/// let url = build_month_url(
///     "https://www.basketball-reference.com/leagues/NBA_{season}_games-{month}.html",
///     2016,
///     "October",
/// );
/// assert_eq!(
///     url,
///     "https://www.basketball-reference.com/leagues/NBA_2016_games-october.html"
/// );
/// ```
pub fn build_month_url(template: &str, season: i32, month: &str) -> String {
    template
        .replace("{season}", &season.to_string())
        .replace("{month}", &month.trim().to_lowercase())
}

/// Builds the schedule page URLs for every month of a season, in the given order.
pub fn build_season_urls<S: AsRef<str>>(template: &str, season: i32, months: &[S]) -> Vec<String> {
    months
        .iter()
        .map(|month| build_month_url(template, season, month.as_ref()))
        .collect()
}

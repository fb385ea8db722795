use chrono::{NaiveDate, NaiveTime};

use crate::data_fetcher::models::{GameRecord, RawTable};

/// Source headers of a basketball-reference schedule table, as published.
pub const SCHEDULE_HEADERS: [&str; 11] = [
    "Date",
    "Start (ET)",
    "Visitor/Neutral",
    "PTS",
    "Home/Neutral",
    "PTS",
    "",
    "",
    "Attend.",
    "Arena",
    "Notes",
];

/// A trimmed-down October schedule page: three games, a header row repeated in
/// the body, the "Playoffs" separator and a blank row.
pub const SAMPLE_SCHEDULE_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><title>2015-16 NBA Schedule and Results</title></head>
<body>
<div id="div_schedule">
<table class="stats_table" id="schedule">
  <caption>October Schedule Table</caption>
  <thead>
    <tr>
      <th data-stat="date_game">Date</th>
      <th data-stat="game_start_time">Start (ET)</th>
      <th data-stat="visitor_team_name">Visitor/Neutral</th>
      <th data-stat="visitor_pts">PTS</th>
      <th data-stat="home_team_name">Home/Neutral</th>
      <th data-stat="home_pts">PTS</th>
      <th data-stat="box_score_text"></th>
      <th data-stat="overtimes"></th>
      <th data-stat="attendance">Attend.</th>
      <th data-stat="arena_name">Arena</th>
      <th data-stat="game_remarks">Notes</th>
    </tr>
  </thead>
  <tbody>
    <tr>
      <th data-stat="date_game"><a href="/boxscores/index.fcgi?month=10&amp;day=27&amp;year=2015">Tue, Oct 27, 2015</a></th>
      <td data-stat="game_start_time">8:00p</td>
      <td data-stat="visitor_team_name"><a href="/teams/DET/2016.html">Detroit Pistons</a></td>
      <td data-stat="visitor_pts">106</td>
      <td data-stat="home_team_name"><a href="/teams/ATL/2016.html">Atlanta Hawks</a></td>
      <td data-stat="home_pts">94</td>
      <td data-stat="box_score_text"><a href="/boxscores/201510270ATL.html">Box Score</a></td>
      <td data-stat="overtimes"></td>
      <td data-stat="attendance">19,187</td>
      <td data-stat="arena_name">Philips Arena</td>
      <td data-stat="game_remarks"></td>
    </tr>
    <tr>
      <th data-stat="date_game"><a href="/boxscores/index.fcgi?month=10&amp;day=27&amp;year=2015">Tue, Oct 27, 2015</a></th>
      <td data-stat="game_start_time">10:30p</td>
      <td data-stat="visitor_team_name"><a href="/teams/CLE/2016.html">Cleveland Cavaliers</a></td>
      <td data-stat="visitor_pts">95</td>
      <td data-stat="home_team_name"><a href="/teams/CHI/2016.html">Chicago Bulls</a></td>
      <td data-stat="home_pts">97</td>
      <td data-stat="box_score_text"><a href="/boxscores/201510270CHI.html">Box Score</a></td>
      <td data-stat="overtimes">OT</td>
      <td data-stat="attendance">21,957</td>
      <td data-stat="arena_name">United Center</td>
      <td data-stat="game_remarks"></td>
    </tr>
    <tr class="thead">
      <th>Date</th><th>Start (ET)</th><th>Visitor/Neutral</th><th>PTS</th><th>Home/Neutral</th><th>PTS</th><th></th><th></th><th>Attend.</th><th>Arena</th><th>Notes</th>
    </tr>
    <tr>
      <th data-stat="date_game"><a href="/boxscores/index.fcgi?month=10&amp;day=30&amp;year=2015">Fri, Oct 30, 2015</a></th>
      <td data-stat="game_start_time">7:30p</td>
      <td data-stat="visitor_team_name"><a href="/teams/ATL/2016.html">Atlanta Hawks</a></td>
      <td data-stat="visitor_pts">112</td>
      <td data-stat="home_team_name"><a href="/teams/NYK/2016.html">New York Knicks</a></td>
      <td data-stat="home_pts">101</td>
      <td data-stat="box_score_text"><a href="/boxscores/201510300NYK.html">Box Score</a></td>
      <td data-stat="overtimes"></td>
      <td data-stat="attendance">19,812</td>
      <td data-stat="arena_name">Madison Square Garden (IV)</td>
      <td data-stat="game_remarks"></td>
    </tr>
    <tr>
      <th colspan="11">Playoffs</th>
    </tr>
    <tr>
      <th></th><td></td>
    </tr>
  </tbody>
</table>
</div>
</body>
</html>
"#;

/// Test utilities for creating schedule fixtures
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// A raw schedule table with the published headers and the given rows.
    pub fn raw_schedule(rows: &[[&str; 11]]) -> RawTable {
        RawTable::with_raw_headers(
            SCHEDULE_HEADERS.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    /// A regulation game row with fixed scores, attendance and arena.
    pub fn raw_game_row<'a>(
        date: &'a str,
        start: &'a str,
        away_team: &'a str,
        home_team: &'a str,
    ) -> [&'a str; 11] {
        [
            date,
            start,
            away_team,
            "100",
            home_team,
            "90",
            "Box Score",
            "",
            "18,000",
            "Arena",
            "",
        ]
    }

    /// A normalized game at 19:30 with fixed scores.
    pub fn game(date: NaiveDate, date_game_id: u32, away_team: &str, home_team: &str) -> GameRecord {
        GameRecord {
            date,
            start: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
            date_game_id,
            away_team: away_team.to_string(),
            away_points: 100,
            home_team: home_team.to_string(),
            home_points: 90,
            box_score: "Box Score".to_string(),
            n_ot: 0,
            attendance: Some(18000),
            arena: "Arena".to_string(),
            notes: String::new(),
        }
    }

    /// Renders rows as a schedule page in the site's layout.
    pub fn schedule_page_html(rows: &[[&str; 11]]) -> String {
        let header_cells: String = SCHEDULE_HEADERS
            .iter()
            .map(|h| format!("<th>{h}</th>"))
            .collect();
        let body: String = rows
            .iter()
            .map(|row| {
                let cells: String = row
                    .iter()
                    .enumerate()
                    .map(|(i, cell)| {
                        if i == 0 {
                            format!("<th>{cell}</th>")
                        } else {
                            format!("<td>{cell}</td>")
                        }
                    })
                    .collect();
                format!("<tr>{cells}</tr>\n")
            })
            .collect();
        format!(
            "<html><body><table id=\"schedule\"><thead><tr>{header_cells}</tr></thead>\
             <tbody>\n{body}</tbody></table></body></html>"
        )
    }
}

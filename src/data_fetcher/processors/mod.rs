pub mod aggregation;
pub mod html_table;
pub mod normalizer;
pub mod rest_days;
pub mod time_formatting;

pub use aggregation::{mean, sample_std, summarize_rest};
pub use html_table::{drop_separator_rows, extract_schedule_table};
pub use normalizer::{COLUMN_MAPPING, canonical_name, normalize_games};
pub use rest_days::{
    NullRestPolicy, apply_null_policy, assign_rest_days, derive_rest_days, reshape_team_games,
};
pub use time_formatting::{expand_meridiem, parse_game_date, parse_start_time};

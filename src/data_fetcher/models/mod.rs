pub mod games;
pub mod raw;
pub mod team_games;

pub use games::GameRecord;
pub use raw::RawTable;
pub use team_games::{Location, RestSummary, TeamGame};

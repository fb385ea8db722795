use crate::app::{self, RunOptions};
use crate::cli::Args;
use crate::config::Config;
use crate::error::AppError;
use tracing::{error, info};

/// Handles the --list-config command.
pub fn handle_list_config_command(config: &Config) {
    config.display();
}

/// Handles the --write-config command.
///
/// Saves the effective configuration, including values given as flags,
/// to the platform config file.
pub async fn handle_write_config_command(config: &Config) -> Result<(), AppError> {
    config.save().await?;
    println!("Config written to {}", Config::get_config_path());
    Ok(())
}

/// Handles the default command: computes and writes the rest summary.
pub async fn handle_summary_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let options = RunOptions::from(args);
    match app::run(config, &options).await {
        Ok(report) => {
            info!(
                "Done: {} games, {} team-games, {} summary rows written to {}",
                report.games,
                report.team_games,
                report.summaries.len(),
                report.output_path.display()
            );
            Ok(())
        }
        Err(e) => {
            error!("{e}");
            Err(e)
        }
    }
}

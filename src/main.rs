use clap::Parser;
use nba_rest::cli::Args;
use nba_rest::commands::{
    handle_list_config_command, handle_summary_command, handle_write_config_command,
};
use nba_rest::config::Config;
use nba_rest::error::AppError;
use nba_rest::logging::setup_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Flags override file and environment values; validate only the result
    let config = args.resolve_config(Config::load_unvalidated().await?)?;

    if args.list_config {
        handle_list_config_command(&config);
        return Ok(());
    }

    if args.write_config {
        return handle_write_config_command(&config).await;
    }

    // The guard must live until the end of main so buffered log lines are flushed
    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    handle_summary_command(&args, &config).await
}

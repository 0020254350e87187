//! Voice Memos CLI entry point

use std::process::ExitCode;

use clap::Parser;

use voice_memos::cli::{
    app::{load_merged_config, resolve_run_options},
    config_cmd::handle_config_command,
    run_delete, run_list, run_play, run_shell, Cli, Commands, Presenter, EXIT_ERROR,
    EXIT_USAGE_ERROR,
};
use voice_memos::domain::config::AppConfig;
use voice_memos::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let presenter = Presenter::new();

    // Config commands don't need the recordings directory
    let command = match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        other => other,
    };

    // Build CLI config from args
    let cli_config = AppConfig {
        recordings_dir: cli.dir.map(|d| d.to_string_lossy().into_owned()),
        audio_mode: None, // --mode is applied per run, never saved
        format: cli.format.clone(),
    };

    let config = load_merged_config(cli_config).await;

    let options = match resolve_run_options(&config, cli.mode.as_deref()) {
        Ok(options) => options,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    match command {
        Some(Commands::List) => run_list(options).await,
        Some(Commands::Play { index }) => run_play(options, index).await,
        Some(Commands::Delete { index }) => run_delete(options, index).await,
        Some(Commands::Shell) | None => run_shell(options).await,
        Some(Commands::Config { .. }) => unreachable!(), // Handled above
    }
}

/// Route `log` output to stderr, honoring RUST_LOG
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

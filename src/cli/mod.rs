//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, the one-shot command
//! runners and the interactive shell.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod observer;
pub mod presenter;
pub mod shell;

// Re-export commonly used types
pub use app::{run_delete, run_list, run_play, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, RunOptions};
pub use observer::CliObserver;
pub use presenter::Presenter;
pub use shell::run_shell;

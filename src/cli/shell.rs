//! Interactive shell
//!
//! A single loop owns the recording store and the playback controller and
//! multiplexes stdin commands, engine events and Ctrl+C, so every state
//! change happens on one task.

use std::io::{self, BufRead};
use std::process::ExitCode;
use std::str::FromStr;
use std::thread;

use thiserror::Error;
use tokio::sync::mpsc;

use crate::application::RecordingStore;
use crate::domain::playback::PlaybackState;

use super::app::{build_controller, CliController, EXIT_SUCCESS};
use super::args::RunOptions;
use super::observer::CliObserver;
use super::presenter::Presenter;

const HELP: &str = "\
Commands:
  list | ls        show recordings, newest first
  reload           re-scan the recordings directory
  play <N>         play recording N (stops the current one)
  stop             stop playback
  delete <N>       delete recording N
  info <N>         show where recording N is stored
  status           show playback state and output device
  help             show this help
  quit | exit      leave the shell";

/// A parsed shell line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    Reload,
    Play(usize),
    Stop,
    Delete(usize),
    Info(usize),
    Status,
    Help,
    Quit,
}

/// Error when a shell line cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellCommandError {
    #[error("Unknown command: \"{0}\". Type 'help' for a list of commands")]
    Unknown(String),

    #[error("'{0}' needs a recording index, e.g. '{0} 0'")]
    MissingIndex(String),

    #[error("Invalid index: \"{0}\"")]
    InvalidIndex(String),
}

impl FromStr for ShellCommand {
    type Err = ShellCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let command = words.next().unwrap_or_default().to_lowercase();

        let index = |words: &mut std::str::SplitWhitespace<'_>| match words.next() {
            Some(word) => word
                .parse::<usize>()
                .map_err(|_| ShellCommandError::InvalidIndex(word.to_string())),
            None => Err(ShellCommandError::MissingIndex(command.clone())),
        };

        match command.as_str() {
            "list" | "ls" => Ok(Self::List),
            "reload" => Ok(Self::Reload),
            "play" | "p" => Ok(Self::Play(index(&mut words)?)),
            "stop" | "s" => Ok(Self::Stop),
            "delete" | "rm" => Ok(Self::Delete(index(&mut words)?)),
            "info" => Ok(Self::Info(index(&mut words)?)),
            "status" => Ok(Self::Status),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(ShellCommandError::Unknown(s.trim().to_string())),
        }
    }
}

/// Whether the loop keeps running after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Forward stdin lines from a dedicated thread.
///
/// A blocked stdin read cannot be cancelled, so it must stay off the runtime's
/// blocking pool or shutdown would wait for the next line. The thread is left
/// parked in `read` when the shell exits.
fn spawn_line_reader() -> mpsc::UnboundedReceiver<io::Result<String>> {
    let (tx, rx) = mpsc::unbounded_channel();
    let spawned = thread::Builder::new()
        .name("voice-memos-stdin".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let failed = line.is_err();
                if tx.send(line).is_err() || failed {
                    break;
                }
            }
        });
    if let Err(e) = spawned {
        // The sender was dropped with the closure, so the shell sees end of input
        log::error!("Failed to start input reader: {}", e);
    }
    rx
}

/// Run the interactive shell
pub async fn run_shell(options: RunOptions) -> ExitCode {
    let presenter = Presenter::new();
    let mut store = RecordingStore::new(&options.dir);
    let (mut controller, mut events) = build_controller(&options, CliObserver::new());
    let mut lines = spawn_line_reader();

    presenter.info(&format!(
        "Recordings in {} (type 'help' for commands)",
        store.directory().display()
    ));
    reload(&mut store, &controller, &presenter).await;
    presenter.prompt();

    loop {
        tokio::select! {
            line = lines.recv() => {
                let line = match line {
                    Some(Ok(line)) => line,
                    None => break,
                    Some(Err(e)) => {
                        presenter.error(&format!("Failed to read input: {}", e));
                        break;
                    }
                };
                if line.trim().is_empty() {
                    presenter.prompt();
                    continue;
                }
                match line.parse::<ShellCommand>() {
                    Ok(command) => {
                        if execute(command, &mut store, &mut controller, &presenter).await == Flow::Exit {
                            break;
                        }
                    }
                    Err(e) => presenter.warn(&e.to_string()),
                }
                presenter.prompt();
            }
            Some(event) = events.recv() => {
                controller.handle_engine_event(event).await;
            }
            _ = tokio::signal::ctrl_c() => {
                eprintln!();
                break;
            }
        }
    }

    // Leaving the list stops whatever is still playing
    if controller.is_playing() {
        controller.stop().await;
    }

    ExitCode::from(EXIT_SUCCESS)
}

async fn execute(
    command: ShellCommand,
    store: &mut RecordingStore,
    controller: &mut CliController,
    presenter: &Presenter,
) -> Flow {
    match command {
        ShellCommand::List => {
            presenter.recording_list(store.recordings(), controller.observer().selected());
        }
        ShellCommand::Reload => reload(store, controller, presenter).await,
        ShellCommand::Play(index) => match store.get(index).cloned() {
            Some(recording) => {
                if let Err(e) = controller.play(&recording).await {
                    presenter.error(&e.to_string());
                }
                controller.observer_mut().select(index);
                if controller.state() == PlaybackState::Playing {
                    presenter.success(&format!("Playing {}", recording.name()));
                }
            }
            None => presenter.warn(&no_recording(index, store)),
        },
        ShellCommand::Stop => controller.stop().await,
        ShellCommand::Delete(index) => match store.delete(index).await {
            Ok(removed) => {
                controller.observer_mut().row_removed(index);
                presenter.success(&format!("Deleted {}", removed.name()));
                presenter.recording_list(store.recordings(), controller.observer().selected());
            }
            Err(e) => presenter.error(&e.to_string()),
        },
        ShellCommand::Info(index) => match store.get(index) {
            Some(recording) => presenter.recording_detail(index, recording),
            None => presenter.warn(&no_recording(index, store)),
        },
        ShellCommand::Status => {
            let state = match controller.current() {
                Some(recording) => format!("{} ({})", controller.state(), recording.name()),
                None => controller.state().to_string(),
            };
            presenter.playback_status(&state);
            presenter.audio_route("Output", controller.output_route().as_deref());
        }
        ShellCommand::Help => presenter.output(HELP),
        ShellCommand::Quit => return Flow::Exit,
    }
    Flow::Continue
}

async fn reload(store: &mut RecordingStore, controller: &CliController, presenter: &Presenter) {
    if let Err(e) = store.load().await {
        presenter.error(&e.to_string());
        return;
    }
    presenter.recording_list(store.recordings(), controller.observer().selected());
}

fn no_recording(index: usize, store: &RecordingStore) -> String {
    format!("No recording at index {} ({} available)", index, store.len())
}

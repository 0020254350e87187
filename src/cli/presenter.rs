//! CLI presenter for output formatting

use std::io::{self, Write};

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::recording::Recording;

/// Presenter for CLI output formatting
pub struct Presenter {
    spinner: Option<ProgressBar>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self { spinner: None }
    }

    /// Start a spinner with message
    pub fn start_spinner(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg} {elapsed:.dim}")
        {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    /// Update spinner message
    pub fn update_spinner(&self, message: &str) {
        if let Some(ref spinner) = self.spinner {
            spinner.set_message(message.to_string());
        }
    }

    /// Mark spinner as success and finish
    pub fn spinner_success(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✓".green(), message));
        }
    }

    /// Mark spinner as failed and finish
    pub fn spinner_fail(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✗".red(), message));
        }
    }

    /// Stop spinner without status
    pub fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    pub fn is_spinner_active(&self) -> bool {
        self.spinner.is_some()
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print the shell prompt
    pub fn prompt(&self) {
        print!("{} ", ">".cyan());
        let _ = io::stdout().flush();
    }

    /// Print the recording list, marking the selected row
    pub fn recording_list(&self, recordings: &[Recording], selected: Option<usize>) {
        if recordings.is_empty() {
            self.info("No recordings");
            return;
        }
        for (index, recording) in recordings.iter().enumerate() {
            println!("{}", format_row(index, recording, selected == Some(index)));
        }
    }

    /// Print a recording's name and location
    pub fn recording_detail(&self, index: usize, recording: &Recording) {
        println!("{} {}", format!("#{}", index).cyan(), recording.name());
        println!("  {}", recording.location().display().to_string().dimmed());
    }

    /// Print playback status
    pub fn playback_status(&self, state: &str) {
        eprintln!("{} Playback: {}", "●".cyan(), state);
    }

    /// Print the audio route, "none" when no device is available
    pub fn audio_route(&self, label: &str, device: Option<&str>) {
        eprintln!("{} {}: {}", "●".cyan(), label, device.unwrap_or("none"));
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Format one row of the recording list
pub fn format_row(index: usize, recording: &Recording, selected: bool) -> String {
    let marker = if selected { "▶" } else { " " };
    format!("{} {:>3}  {}", marker, index, recording.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_row_unselected() {
        let rec = Recording::from_location("/m/2024-05-01.wav").unwrap();
        let row = format_row(2, &rec, false);
        assert!(row.starts_with(' '));
        assert!(row.contains("  2  2024-05-01.wav"));
    }

    #[test]
    fn format_row_selected() {
        let rec = Recording::from_location("/m/a.wav").unwrap();
        assert!(format_row(0, &rec, true).starts_with('▶'));
    }

    #[test]
    fn spinner_lifecycle() {
        let mut presenter = Presenter::new();
        assert!(!presenter.is_spinner_active());
        presenter.start_spinner("Playing");
        assert!(presenter.is_spinner_active());
        presenter.stop_spinner();
        assert!(!presenter.is_spinner_active());
    }
}

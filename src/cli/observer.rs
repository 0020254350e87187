//! Playback observer that reports to the terminal

use crate::application::ports::PlaybackObserver;

use super::presenter::Presenter;

/// Prints playback lifecycle changes and tracks the selected list row
pub struct CliObserver {
    presenter: Presenter,
    selected: Option<usize>,
    spinner: bool,
}

impl CliObserver {
    /// Observer printing one status line per transition
    pub fn new() -> Self {
        Self {
            presenter: Presenter::new(),
            selected: None,
            spinner: false,
        }
    }

    /// Observer showing a spinner for the duration of playback
    pub fn with_spinner() -> Self {
        Self {
            spinner: true,
            ..Self::new()
        }
    }

    /// Mark a list row as selected
    pub fn select(&mut self, index: usize) {
        self.selected = Some(index);
    }

    /// Keep the selection on the same recording after row `index` is removed
    pub fn row_removed(&mut self, index: usize) {
        self.selected = match self.selected {
            Some(selected) if selected == index => None,
            Some(selected) if selected > index => Some(selected - 1),
            other => other,
        };
    }

    /// Currently selected row
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn presenter_mut(&mut self) -> &mut Presenter {
        &mut self.presenter
    }
}

impl Default for CliObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackObserver for CliObserver {
    fn on_playback_starting(&mut self) {
        if self.spinner {
            self.presenter.start_spinner("Starting playback...");
        } else {
            self.presenter.playback_status("starting");
        }
    }

    fn on_playback_finished(&mut self) {
        if self.spinner {
            self.presenter.stop_spinner();
        }
        // Finishing clears the selection, like deselecting the row
        if self.selected.take().is_some() && !self.spinner {
            self.presenter.playback_status("finished");
        }
    }
}

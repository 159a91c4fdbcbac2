use crossterm::event::Event as CrosstermEvent;

/// Index into the configured project list.
pub type ProjectId = usize;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Image probe results
    ImageLoaded {
        project: ProjectId,
    },
    ImageFailed {
        project: ProjectId,
        error: String,
    },
}

use crate::app::event::ProjectId;

/// Side effects requested by the handler, carried out by the main loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    OpenUrl { url: String },
    ComposeMail { address: String },
    ProbeImage { project: ProjectId, url: String },
}

//! Portfolio card images and their one-shot load-failure fallback.

/// Shown in place of a project image that failed to load.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400/1a202c/FFFFFF?text=Image+Error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStatus {
    Pending,
    Loaded,
    Failed,
}

#[derive(Debug, Clone)]
pub struct ProjectImage {
    pub src: String,
    pub status: ImageStatus,
    /// Replacement source, consumed by the first load failure.
    fallback: Option<String>,
}

impl ProjectImage {
    pub fn new(src: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            status: ImageStatus::Pending,
            fallback: Some(fallback.into()),
        }
    }

    /// Handle a load failure. Swaps in the fallback the first time and
    /// returns `true`; every later call only records the failure.
    pub fn on_error(&mut self) -> bool {
        match self.fallback.take() {
            Some(fallback) => {
                tracing::debug!(from = %self.src, to = %fallback, "image failed, using placeholder");
                self.src = fallback;
                self.status = ImageStatus::Pending;
                true
            }
            None => {
                self.status = ImageStatus::Failed;
                false
            }
        }
    }

    pub fn on_load(&mut self) {
        self.status = ImageStatus::Loaded;
    }

    pub fn is_substituted(&self) -> bool {
        self.fallback.is_none()
    }
}

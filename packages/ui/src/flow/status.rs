use std::time::Duration;

/// Where every verification page sends the user when it is done.
pub const LOGIN_PATH: &str = "/login";

/// What a page is showing. Starts at `Loading` and is set once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageStatus {
    Loading,
    Success,
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Toast raised when a page settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Timed navigation to schedule once the page has settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub to: &'static str,
    pub after: Duration,
}

/// Everything a page flow decided. The component applies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub status: PageStatus,
    pub notice: Notice,
    pub redirect: Option<Redirect>,
    /// Drop the `pendingVerificationEmail` session marker.
    pub clear_pending_email: bool,
}

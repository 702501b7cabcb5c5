//! Local UI chrome state (notices, sidebar).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`session`,
//! `tours`) so pages can report outcomes without owning a toast widget.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// How long a notice stays up before it dismisses itself.
pub const NOTICE_TIMEOUT_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NoticeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "notice notice--info",
            Self::Success => "notice notice--success",
            Self::Error => "notice notice--error",
        }
    }
}

/// A user-visible message, toast style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub notices: Vec<Notice>,
    next_notice_id: u64,
    /// Sidebar visibility on narrow screens.
    pub sidebar_open: bool,
}

impl UiState {
    /// Show a notice and return its id for later dismissal.
    pub fn notify(&mut self, kind: NoticeKind, title: impl Into<String>, message: impl Into<String>) -> u64 {
        self.next_notice_id += 1;
        let id = self.next_notice_id;
        self.notices.push(Notice { id, kind, title: title.into(), message: message.into() });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }
}

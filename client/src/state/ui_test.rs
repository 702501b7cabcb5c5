use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_has_no_notices() {
    let state = UiState::default();
    assert!(state.notices.is_empty());
    assert!(!state.sidebar_open);
}

// =============================================================
// Notices
// =============================================================

#[test]
fn notify_assigns_increasing_ids() {
    let mut state = UiState::default();
    let a = state.notify(NoticeKind::Success, "Saved", "Tour created");
    let b = state.notify(NoticeKind::Error, "Error", "Upload failed");
    assert!(b > a);
    assert_eq!(state.notices.len(), 2);
    assert_eq!(state.notices[1].kind, NoticeKind::Error);
}

#[test]
fn dismiss_removes_only_that_notice() {
    let mut state = UiState::default();
    let a = state.notify(NoticeKind::Info, "a", "");
    let b = state.notify(NoticeKind::Info, "b", "");

    state.dismiss(a);
    assert_eq!(state.notices.iter().map(|n| n.id).collect::<Vec<_>>(), [b]);
    state.dismiss(a);
    assert_eq!(state.notices.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = UiState::default();
    let a = state.notify(NoticeKind::Info, "a", "");
    state.dismiss(a);
    assert_ne!(state.notify(NoticeKind::Info, "b", ""), a);
}

#[test]
fn toggle_sidebar_flips() {
    let mut state = UiState::default();
    state.toggle_sidebar();
    assert!(state.sidebar_open);
    state.toggle_sidebar();
    assert!(!state.sidebar_open);
}

#[test]
fn notice_kind_css_classes_are_distinct() {
    assert_ne!(NoticeKind::Info.css_class(), NoticeKind::Error.css_class());
    assert_ne!(NoticeKind::Success.css_class(), NoticeKind::Error.css_class());
}

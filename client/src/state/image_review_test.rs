use super::*;

fn staged(names: &[&'static str]) -> Vec<StagedImage<&'static str>> {
    names.iter().map(|n| StagedImage { file: *n, preview: Some(format!("blob:{n}")) }).collect()
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn starts_closed() {
    let review = ImageReview::<&str>::new();
    assert_eq!(review.step(), ReviewStep::Closed);
    assert!(review.current().is_none());
}

#[test]
fn staging_opens_at_first_image() {
    let mut review = ImageReview::new();
    review.stage(staged(&["a", "b", "c"]));

    assert_eq!(review.step(), ReviewStep::Open { index: 0, total: 3 });
    assert_eq!(review.current().map(|s| s.file), Some("a"));
    assert_eq!(review.pending_len(), 3);
}

#[test]
fn staging_nothing_stays_closed() {
    let mut review = ImageReview::<&str>::new();
    review.stage(Vec::new());
    assert_eq!(review.step(), ReviewStep::Closed);
}

#[test]
fn confirm_and_reject_advance_then_close() {
    let mut review = ImageReview::new();
    review.stage(staged(&["a", "b", "c"]));

    assert_eq!(review.confirm().map(|s| s.file), Some("a"));
    assert_eq!(review.step(), ReviewStep::Open { index: 1, total: 3 });
    assert_eq!(review.reject().map(|s| s.file), Some("b"));
    assert_eq!(review.step(), ReviewStep::Open { index: 2, total: 3 });
    assert_eq!(review.confirm().map(|s| s.file), Some("c"));
    assert_eq!(review.step(), ReviewStep::Closed);
    assert!(review.confirm().is_none());
}

#[test]
fn dismiss_drains_remaining_in_order() {
    let mut review = ImageReview::new();
    review.stage(staged(&["a", "b", "c"]));
    review.confirm();

    let dropped: Vec<_> = review.dismiss().into_iter().map(|s| s.file).collect();
    assert_eq!(dropped, ["b", "c"]);
    assert_eq!(review.step(), ReviewStep::Closed);
    assert_eq!(review.pending_len(), 0);
}

#[test]
fn staging_while_open_extends_round() {
    let mut review = ImageReview::new();
    review.stage(staged(&["a", "b"]));
    review.confirm();
    review.stage(staged(&["c"]));

    assert_eq!(review.step(), ReviewStep::Open { index: 1, total: 3 });
    assert_eq!(review.current().map(|s| s.file), Some("b"));
}

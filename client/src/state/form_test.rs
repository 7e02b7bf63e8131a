use super::*;

#[test]
fn notices_default_is_empty() {
    let notices = Notices::default();
    assert!(notices.current.is_none());
}

#[test]
fn notices_show_replaces_current() {
    let mut notices = Notices::default();
    let first = notices.show(NoticeKind::Error, "one");
    let second = notices.show(NoticeKind::Success, "two");
    assert_ne!(first, second);
    let current = notices.current.expect("notice");
    assert_eq!(current.text, "two");
    assert_eq!(current.kind, NoticeKind::Success);
    assert_eq!(current.seq, second);
}

#[test]
fn notices_dismiss_ignores_stale_seq() {
    let mut notices = Notices::default();
    let stale = notices.show(NoticeKind::Error, "old");
    let fresh = notices.show(NoticeKind::Error, "new");

    notices.dismiss(stale);
    assert_eq!(notices.current.as_ref().map(|n| n.text.as_str()), Some("new"));

    notices.dismiss(fresh);
    assert!(notices.current.is_none());
}

use super::*;

#[test]
fn push_appends_in_order() {
    let mut state = NoticeState::default();
    state.push(NoticeLevel::Success, "Login successful!");
    state.push(NoticeLevel::Error, "Logout failed. Please try again.");
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].message, "Login successful!");
    assert_eq!(state.items[1].level, NoticeLevel::Error);
}

#[test]
fn dismiss_removes_only_matching_notice() {
    let mut state = NoticeState::default();
    let first = state.push(NoticeLevel::Success, "one");
    let second = state.push(NoticeLevel::Success, "two");
    state.dismiss(first);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, second);
}

#[test]
fn dismiss_unknown_id_is_a_no_op() {
    let mut state = NoticeState::default();
    state.push(NoticeLevel::Error, "kept");
    state.dismiss(Uuid::new_v4());
    assert_eq!(state.items.len(), 1);
}

#[test]
fn level_class_suffixes() {
    assert_eq!(NoticeLevel::Success.class_suffix(), "success");
    assert_eq!(NoticeLevel::Error.class_suffix(), "error");
}

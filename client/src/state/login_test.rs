use super::*;

// =============================================================
// LoginFormState transitions
// =============================================================

#[test]
fn initial_state_is_idle_without_message() {
    let state = LoginFormState::default();
    assert_eq!(state.phase(), LoginPhase::Idle);
    assert!(!state.disabled);
    assert!(!state.message_visible());
}

#[test]
fn begin_submit_locks_and_clears_message() {
    let mut state = LoginFormState { message: Some("Invalid credentials".to_owned()), ..Default::default() };
    state.begin_submit();
    assert_eq!(state.phase(), LoginPhase::Submitting);
    assert!(state.message.is_none());
}

#[test]
fn settle_unlocks_and_keeps_message() {
    let mut state = LoginFormState { disabled: true, message: Some("x".to_owned()), ..Default::default() };
    state.settle();
    assert_eq!(state.phase(), LoginPhase::Idle);
    assert_eq!(state.message.as_deref(), Some("x"));
}

#[test]
fn show_message_ignores_empty_text() {
    let mut state = LoginFormState::default();
    state.show_message(Some(String::new()));
    assert!(!state.message_visible());
    state.show_message(Some("Invalid credentials".to_owned()));
    assert_eq!(state.message.as_deref(), Some("Invalid credentials"));
    state.show_message(None);
    assert!(!state.message_visible());
}

#[test]
fn first_trigger_locks_and_returns_raw_fields() {
    let mut state = LoginFormState {
        username: "a@b.com ".to_owned(),
        password: String::new(),
        message: Some("Invalid credentials".to_owned()),
        ..Default::default()
    };
    let creds = state.try_begin_submit();
    assert_eq!(creds, Some(Credentials { username: "a@b.com ".to_owned(), password: String::new() }));
    assert_eq!(state.phase(), LoginPhase::Submitting);
    assert!(state.message.is_none());
}

#[test]
fn second_trigger_while_submitting_is_dropped() {
    let mut state = LoginFormState::default();
    assert!(state.try_begin_submit().is_some());
    assert_eq!(state.try_begin_submit(), None);
    assert_eq!(state.phase(), LoginPhase::Submitting);
}

#[test]
fn trigger_after_settle_submits_again() {
    let mut state = LoginFormState::default();
    assert!(state.try_begin_submit().is_some());
    state.settle();
    assert!(state.try_begin_submit().is_some());
}

#[test]
fn signal_trigger_is_gated_while_submitting() {
    let signal = RwSignal::new(LoginFormState::default());
    assert!(signal.try_update(LoginFormState::try_begin_submit).flatten().is_some());
    assert!(signal.try_update(LoginFormState::try_begin_submit).flatten().is_none());
}

#[test]
fn credentials_are_raw_field_values() {
    let state = LoginFormState {
        username: "  a@b.com".to_owned(),
        password: String::new(),
        ..Default::default()
    };
    let creds = state.credentials();
    assert_eq!(creds.username, "  a@b.com");
    assert_eq!(creds.password, "");
}

// =============================================================
// FormCell
// =============================================================

#[test]
fn refcell_form_cell_applies_update() {
    let cell = RefCell::new(LoginFormState::default());
    assert!(cell.update_form(LoginFormState::begin_submit));
    assert!(cell.borrow().disabled);
}

#[test]
fn signal_form_cell_applies_update() {
    let signal = RwSignal::new(LoginFormState::default());
    assert!(signal.update_form(LoginFormState::begin_submit));
    assert!(signal.get_untracked().disabled);
}

#[test]
fn disposed_signal_reports_unmounted() {
    let signal = RwSignal::new(LoginFormState::default());
    signal.dispose();
    assert!(!signal.update_form(LoginFormState::settle));
}

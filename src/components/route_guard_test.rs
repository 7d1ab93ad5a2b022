use super::*;
use crate::net::types::Profile;

fn authenticated_state(roles: &[&str]) -> SessionState {
    let mut state = SessionState::default();
    state.set_authenticated(
        Profile {
            id: "u-1".to_owned(),
            display_name: "Ana".to_owned(),
            email: "ana@taller.test".to_owned(),
        },
        "tok-abc".to_owned(),
        roles.iter().map(|r| (*r).to_owned()).collect(),
    );
    state
}

// =============================================================
// render_gate: the wrapped view must never be instantiated on deny
// =============================================================

#[test]
fn render_gate_invokes_child_exactly_once_on_allow() {
    let mut render_count = 0;
    let state = authenticated_state(&["admin"]);
    let decision = decide(&state, &["admin".to_owned()]);

    let rendered = render_gate(decision, || {
        render_count += 1;
        "view"
    });

    assert_eq!(rendered, Some("view"));
    assert_eq!(render_count, 1);
}

#[test]
fn render_gate_never_invokes_child_on_insufficient_role() {
    let mut render_count = 0;
    let state = authenticated_state(&["Mecanico"]);
    let decision = decide(&state, &["admin".to_owned()]);

    let rendered = render_gate(decision, || {
        render_count += 1;
        "view"
    });

    assert_eq!(decision, GuardDecision::RedirectUnauthorized);
    assert_eq!(rendered, None);
    assert_eq!(render_count, 0);
}

#[test]
fn render_gate_never_invokes_child_while_loading() {
    let mut render_count = 0;
    let decision = decide(&SessionState::default(), &[]);

    let rendered = render_gate(decision, || {
        render_count += 1;
        "view"
    });

    assert_eq!(decision, GuardDecision::Loading);
    assert_eq!(rendered, None);
    assert_eq!(render_count, 0);
}

#[test]
fn render_gate_never_invokes_child_when_unauthenticated() {
    let mut render_count = 0;
    let mut state = SessionState::default();
    state.clear();
    let decision = decide(&state, &[]);

    let rendered = render_gate(decision, || {
        render_count += 1;
        "view"
    });

    assert_eq!(decision, GuardDecision::RedirectLogin);
    assert_eq!(rendered, None);
    assert_eq!(render_count, 0);
}

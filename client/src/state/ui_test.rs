use super::*;

#[test]
fn ui_state_defaults() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::System);
    assert!(state.sidebar_expanded);
    assert!(!state.is_dark());
}

#[test]
fn system_theme_follows_browser() {
    let state = UiState { system_prefers_dark: true, ..UiState::default() };
    assert!(state.is_dark());
}

#[test]
fn explicit_theme_overrides_browser() {
    let state = UiState { theme: Theme::Light, system_prefers_dark: true, ..UiState::default() };
    assert!(!state.is_dark());
}

#[test]
fn toggle_sidebar_flips() {
    let mut state = UiState::default();
    state.toggle_sidebar();
    assert!(!state.sidebar_expanded);
    state.toggle_sidebar();
    assert!(state.sidebar_expanded);
}

#[test]
fn cycle_theme_advances_and_returns_new_value() {
    let mut state = UiState { theme: Theme::Light, ..UiState::default() };
    assert_eq!(state.cycle_theme(), Theme::Dark);
    assert_eq!(state.cycle_theme(), Theme::System);
    assert_eq!(state.cycle_theme(), Theme::Light);
    assert_eq!(state.theme, Theme::Light);
}

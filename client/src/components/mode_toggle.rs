//! Theme toggle button (light -> dark -> system).

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::theme;

#[component]
pub fn ModeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_click = move |_| {
        if let Some(next) = ui.try_update(UiState::cycle_theme) {
            theme::persist(next);
        }
    };

    view! {
        <button
            class="btn mode-toggle"
            on:click=on_click
            title=move || format!("Theme: {}", ui.get().theme.as_str())
            aria-label="Toggle theme"
        >
            {move || ui.get().theme.glyph()}
        </button>
    }
}

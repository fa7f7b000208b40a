//! Brand logo that follows the effective theme.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::theme::logo_src;

#[component]
pub fn BrandLogo(#[prop(into, optional)] class: String) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    view! { <img class=format!("brand-logo {class}") src=move || logo_src(ui.get().is_dark()) alt="ClientIQ"/> }
}

//! Frame shared by every signed-in page: sidebar, header, content area.

use leptos::prelude::*;

use crate::components::app_sidebar::AppSidebar;
use crate::components::mode_toggle::ModeToggle;
use crate::components::user_nav::UserNav;
use crate::routes::AppRoute;
use crate::state::ui::UiState;

#[component]
pub fn ViewShell(route: AppRoute, children: Children) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="shell" class:shell--collapsed=move || !ui.get().sidebar_expanded>
            <AppSidebar/>
            <div class="shell__inset">
                <header class="shell__header">
                    <div class="shell__header-start">
                        <button
                            class="btn shell__sidebar-trigger"
                            on:click=move |_| ui.update(UiState::toggle_sidebar)
                            title="Toggle sidebar"
                            aria-label="Toggle sidebar"
                        >
                            "☰"
                        </button>
                        <h1 class="shell__title">{route.title()}</h1>
                    </div>
                    <div class="shell__header-end">
                        <ModeToggle/>
                        <UserNav/>
                    </div>
                </header>
                <main class="shell__main">{children()}</main>
            </div>
        </div>
    }
}

//! Primary navigation sidebar.
//!
//! DESIGN
//! ======
//! Entries come from `AppRoute::NAV`; the active entry is derived from the
//! router location so highlighting follows back/forward navigation.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::brand_logo::BrandLogo;
use crate::routes::AppRoute;
use crate::state::ui::UiState;

#[component]
pub fn AppSidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;

    view! {
        <aside class="sidebar" class:sidebar--collapsed=move || !ui.get().sidebar_expanded>
            <div class="sidebar__header">
                <Show
                    when=move || ui.get().sidebar_expanded
                    fallback=|| view! { <span class="sidebar__mark">"CQ"</span> }
                >
                    <BrandLogo class="sidebar__logo"/>
                </Show>
            </div>
            <nav class="sidebar__nav">
                <ul class="sidebar__menu">
                    {AppRoute::NAV
                        .into_iter()
                        .map(|route| {
                            let active = move || pathname.with(|path| route.is_active(path));
                            view! {
                                <li class="sidebar__item">
                                    <a
                                        class="sidebar__link"
                                        class:sidebar__link--active=active
                                        href=route.path()
                                        title=route.title()
                                        aria-current=move || active().then_some("page")
                                    >
                                        <span class="sidebar__icon" aria-hidden="true">{route.icon()}</span>
                                        <span class="sidebar__label">{route.title()}</span>
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </aside>
    }
}

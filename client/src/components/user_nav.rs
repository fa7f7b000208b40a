//! Header user menu with identity details and sign-out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::BrowserAuthGate;
use crate::routes::AppRoute;
use crate::session::Session;
use crate::state::auth::AuthState;

#[component]
pub fn UserNav() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gate = expect_context::<BrowserAuthGate>();
    let navigate = use_navigate();
    let open = RwSignal::new(false);

    let identity = move || auth.get().user().cloned();
    let initials = move || identity().map(|u| u.initials()).unwrap_or_default();
    let name = move || identity().map(|u| u.name).unwrap_or_default();
    let email = move || identity().map(|u| u.email).unwrap_or_default();

    let on_logout = move |_| {
        gate.logout();
        auth.set(AuthState::restored(Session::LoggedOut));
        open.set(false);
        navigate(AppRoute::Login.path(), NavigateOptions::default());
    };

    view! {
        <div class="user-nav">
            <button
                class="user-nav__avatar"
                on:click=move |_| open.update(|o| *o = !*o)
                aria-haspopup="menu"
                aria-expanded=move || open.get().to_string()
            >
                {initials}
            </button>
            <div class="user-nav__menu" class:user-nav__menu--open=move || open.get() role="menu">
                <p class="user-nav__name">{name}</p>
                <p class="user-nav__email">{email}</p>
                <hr class="user-nav__divider"/>
                <button class="btn user-nav__logout" role="menuitem" on:click=on_logout>
                    "Log out"
                </button>
            </div>
        </div>
    }
}

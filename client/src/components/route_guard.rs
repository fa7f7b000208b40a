//! Guard wrapper applied by every routed page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior. The guard
//! re-reads the persisted session when it mounts, decides once the session is
//! known, and only then builds its children. A denied navigation replaces the
//! history entry with the redirect target.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::{BrowserAuthGate, GuardDecision, guard};
use crate::components::skeleton::{ShimmerCard, ShimmerList, ShimmerTable};
use crate::routes::AppRoute;
use crate::state::auth::AuthState;

/// Render `children` only when `route`'s access policy admits the visitor.
#[component]
pub fn RouteGuard(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gate = expect_context::<BrowserAuthGate>();
    let navigate = use_navigate();

    // Refresh from storage for this navigation.
    Effect::new(move || {
        auth.set(AuthState::restored(gate.session()));
    });

    let decision = Memo::new(move |_| auth.with(|state| guard::decide(route, state)));

    Effect::new(move || {
        if let Some(GuardDecision::Redirect(target)) = decision.get() {
            log::debug!("guard redirect {} -> {}", route.path(), target.path());
            navigate(target.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show
            when=move || decision.get() == Some(GuardDecision::Proceed)
            fallback=move || view! { <RoutePending route=route/> }
        >
            {children()}
        </Show>
    }
}

/// Placeholder shown while the session loads or a redirect is in flight,
/// shaped like the content the route will show.
#[component]
fn RoutePending(route: AppRoute) -> impl IntoView {
    let placeholder = match route {
        AppRoute::Clients | AppRoute::AuditLogs => view! { <ShimmerTable rows=5 columns=4/> }.into_any(),
        AppRoute::Cases | AppRoute::Faq => view! { <ShimmerList count=4 show_actions=true/> }.into_any(),
        AppRoute::Dashboard | AppRoute::Login | AppRoute::Signup => view! { <ShimmerCard lines=4/> }.into_any(),
    };
    view! { <div class="route-pending" aria-busy="true">{placeholder}</div> }
}

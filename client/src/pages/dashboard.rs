//! Dashboard: the default signed-in landing view.

use leptos::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::components::route_guard::RouteGuard;
use crate::components::view_shell::ViewShell;
use crate::routes::AppRoute;

/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RouteGuard route=AppRoute::Dashboard>
            <ViewShell route=AppRoute::Dashboard>
                <EmptyState
                    icon="▦"
                    title="Welcome to ClientIQ"
                    description="Get started by managing your clients, cases, and FAQs. Use the sidebar to navigate to different sections of the application."
                />
            </ViewShell>
        </RouteGuard>
    }
}

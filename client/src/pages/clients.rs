//! Client directory (placeholder).

use leptos::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::components::route_guard::RouteGuard;
use crate::components::view_shell::ViewShell;
use crate::routes::AppRoute;

#[component]
pub fn ClientsPage() -> impl IntoView {
    view! {
        <RouteGuard route=AppRoute::Clients>
            <ViewShell route=AppRoute::Clients>
                <EmptyState
                    icon="👥"
                    title="No clients yet"
                    description="Get started by adding your first client. Manage relationships, contact information, and case history all in one place."
                    action="Add Client"
                />
            </ViewShell>
        </RouteGuard>
    }
}

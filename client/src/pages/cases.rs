//! Case tracking (placeholder).

use leptos::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::components::route_guard::RouteGuard;
use crate::components::view_shell::ViewShell;
use crate::routes::AppRoute;

#[component]
pub fn CasesPage() -> impl IntoView {
    view! {
        <RouteGuard route=AppRoute::Cases>
            <ViewShell route=AppRoute::Cases>
                <EmptyState
                    icon="⚖"
                    title="No cases yet"
                    description="Start tracking your legal cases, documents, and proceedings. Keep everything organized and easily accessible."
                    action="Add Case"
                />
            </ViewShell>
        </RouteGuard>
    }
}

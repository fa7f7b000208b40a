//! Audit log viewer (placeholder). Read-only, so no call to action.

use leptos::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::components::route_guard::RouteGuard;
use crate::components::view_shell::ViewShell;
use crate::routes::AppRoute;

#[component]
pub fn AuditLogsPage() -> impl IntoView {
    view! {
        <RouteGuard route=AppRoute::AuditLogs>
            <ViewShell route=AppRoute::AuditLogs>
                <EmptyState
                    icon="↺"
                    title="No audit logs yet"
                    description="Audit logs will appear here as system activity, user actions, and security events are recorded."
                />
            </ViewShell>
        </RouteGuard>
    }
}

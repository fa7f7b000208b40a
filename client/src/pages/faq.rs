//! FAQ management (placeholder).

use leptos::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::components::route_guard::RouteGuard;
use crate::components::view_shell::ViewShell;
use crate::routes::AppRoute;

#[component]
pub fn FaqPage() -> impl IntoView {
    view! {
        <RouteGuard route=AppRoute::Faq>
            <ViewShell route=AppRoute::Faq>
                <EmptyState
                    icon="?"
                    title="No FAQs yet"
                    description="Create and manage frequently asked questions to help your clients find answers quickly and reduce support requests."
                    action="Add FAQ"
                />
            </ViewShell>
        </RouteGuard>
    }
}

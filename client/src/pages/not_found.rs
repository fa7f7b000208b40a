use leptos::prelude::*;

use crate::routes::AppRoute;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <a class="btn" href=AppRoute::Dashboard.path()>"Back to dashboard"</a>
        </div>
    }
}

//! Empty-state panel used by the workspace placeholder pages.

use leptos::prelude::*;

#[component]
pub fn EmptyState(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    /// Optional call-to-action label. Clicking it is only logged.
    #[prop(optional)]
    action: Option<&'static str>,
) -> impl IntoView {
    view! {
        <section class="empty-state">
            <div class="empty-state__media" aria-hidden="true">{icon}</div>
            <h2 class="empty-state__title">{title}</h2>
            <p class="empty-state__description">{description}</p>
            {action.map(|label| {
                view! {
                    <button class="btn btn--primary empty-state__action" on:click=move |_| log::info!("{label} clicked")>
                        {label}
                    </button>
                }
            })}
        </section>
    }
}

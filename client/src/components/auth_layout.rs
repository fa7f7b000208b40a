//! Centered card layout shared by the sign-in and sign-up views.

use leptos::prelude::*;

use crate::components::brand_logo::BrandLogo;
use crate::components::mode_toggle::ModeToggle;

#[component]
pub fn AuthLayout(title: &'static str, description: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-page__backdrop" aria-hidden="true"></div>
            <div class="auth-page__toggle">
                <ModeToggle/>
            </div>
            <div class="auth-card">
                <header class="auth-card__header">
                    <BrandLogo class="auth-card__logo"/>
                    <h1 class="auth-card__title">{title}</h1>
                    <p class="auth-card__description">{description}</p>
                </header>
                {children()}
            </div>
        </div>
    }
}

/// Inline message under a form field; renders nothing when `message` is `None`.
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<&'static str>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class="field__error">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}

//! Account creation page.
//!
//! TRADE-OFFS
//! ==========
//! There is no registration backend. A valid submission waits out the
//! simulated latency and sends the visitor to sign in; nothing is stored.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::auth_layout::{AuthLayout, FieldError};
use crate::components::route_guard::RouteGuard;
use crate::consts::SIGNUP_LATENCY_MS;
use crate::forms::{SignupErrors, SignupForm, password_requirements};
use crate::routes::AppRoute;
use crate::util::latency;

#[component]
pub fn SignupPage() -> impl IntoView {
    view! {
        <RouteGuard route=AppRoute::Signup>
            <SignupCard/>
        </RouteGuard>
    }
}

#[component]
fn SignupCard() -> impl IntoView {
    let navigate = use_navigate();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let accept_terms = RwSignal::new(false);
    let show_password = RwSignal::new(false);
    let errors = RwSignal::new(SignupErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = SignupForm {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            accept_terms: accept_terms.get_untracked(),
        };
        if let Err(field_errors) = form.validate() {
            errors.set(field_errors);
            return;
        }
        errors.set(SignupErrors::default());
        busy.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            latency::simulate(SIGNUP_LATENCY_MS).await;
            log::info!("sign-up accepted for {}", form.email);
            busy.set(false);
            navigate(AppRoute::Login.path(), NavigateOptions::default());
        });
    };

    let password_type = move || if show_password.get() { "text" } else { "password" };

    view! {
        <AuthLayout title="Create an account" description="Enter your information to get started">
            <form class="auth-form" on:submit=on_submit novalidate=true>
                <div class="auth-form__pair">
                    <div class="field" class:field--invalid=move || errors.get().first_name.is_some()>
                        <label class="field__label" for="first-name">"First name"</label>
                        <input
                            id="first-name"
                            class="field__input"
                            type="text"
                            placeholder="John"
                            autocomplete="given-name"
                            prop:value=move || first_name.get()
                            on:input=move |ev| first_name.set(event_target_value(&ev))
                        />
                        <FieldError message=Signal::derive(move || errors.get().first_name)/>
                    </div>
                    <div class="field" class:field--invalid=move || errors.get().last_name.is_some()>
                        <label class="field__label" for="last-name">"Last name"</label>
                        <input
                            id="last-name"
                            class="field__input"
                            type="text"
                            placeholder="Doe"
                            autocomplete="family-name"
                            prop:value=move || last_name.get()
                            on:input=move |ev| last_name.set(event_target_value(&ev))
                        />
                        <FieldError message=Signal::derive(move || errors.get().last_name)/>
                    </div>
                </div>

                <div class="field" class:field--invalid=move || errors.get().email.is_some()>
                    <label class="field__label" for="email">"Email"</label>
                    <input
                        id="email"
                        class="field__input"
                        type="email"
                        placeholder="name@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <FieldError message=Signal::derive(move || errors.get().email)/>
                </div>

                <div class="field" class:field--invalid=move || errors.get().password.is_some()>
                    <label class="field__label" for="password">"Password"</label>
                    <div class="field__row">
                        <input
                            id="password"
                            class="field__input"
                            type=password_type
                            placeholder="Create a password"
                            autocomplete="new-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            class="field__reveal"
                            type="button"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                            aria-label="Toggle password visibility"
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <ul class="password-checklist">
                        {move || {
                            password_requirements(&password.get())
                                .into_iter()
                                .map(|req| {
                                    view! {
                                        <li class="password-checklist__item" class:password-checklist__item--met=req.met>
                                            {if req.met { "\u{2713} " } else { "\u{2022} " }}
                                            {req.label}
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                    <FieldError message=Signal::derive(move || errors.get().password)/>
                </div>

                <div class="field" class:field--invalid=move || errors.get().confirm_password.is_some()>
                    <label class="field__label" for="confirm-password">"Confirm password"</label>
                    <input
                        id="confirm-password"
                        class="field__input"
                        type=password_type
                        placeholder="Confirm your password"
                        autocomplete="new-password"
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| confirm_password.set(event_target_value(&ev))
                    />
                    <FieldError message=Signal::derive(move || errors.get().confirm_password)/>
                </div>

                <div class="field field--checkbox" class:field--invalid=move || errors.get().accept_terms.is_some()>
                    <label class="field__check">
                        <input
                            type="checkbox"
                            prop:checked=move || accept_terms.get()
                            on:change=move |ev| accept_terms.set(event_target_checked(&ev))
                        />
                        " I agree to the terms of service and privacy policy"
                    </label>
                    <FieldError message=Signal::derive(move || errors.get().accept_terms)/>
                </div>

                <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Create account" }}
                </button>
                <p class="auth-form__switch">
                    "Already have an account? "
                    <a href=AppRoute::Login.path()>"Sign in"</a>
                </p>
            </form>
        </AuthLayout>
    }
}

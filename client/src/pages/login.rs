//! Sign-in page backed by the placeholder auth gate.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::BrowserAuthGate;
use crate::components::auth_layout::{AuthLayout, FieldError};
use crate::components::route_guard::RouteGuard;
use crate::consts::LOGIN_LATENCY_MS;
use crate::forms::{LoginErrors, LoginForm};
use crate::routes::AppRoute;
use crate::session::Session;
use crate::state::auth::AuthState;
use crate::util::latency;

/// Redirects to the dashboard if the user is already signed in.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <RouteGuard route=AppRoute::Login>
            <LoginCard/>
        </RouteGuard>
    }
}

#[component]
fn LoginCard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gate = expect_context::<BrowserAuthGate>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let errors = RwSignal::new(LoginErrors::default());
    let server_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        server_error.set(String::new());
        let form = LoginForm { email: email.get_untracked(), password: password.get_untracked() };
        if let Err(field_errors) = form.validate() {
            errors.set(field_errors);
            return;
        }
        errors.set(LoginErrors::default());
        busy.set(true);

        let gate = gate.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            latency::simulate(LOGIN_LATENCY_MS).await;
            match gate.login(&form.email, &form.password) {
                Ok(identity) => {
                    auth.set(AuthState::restored(Session::LoggedIn(identity)));
                    navigate(AppRoute::Dashboard.path(), NavigateOptions::default());
                }
                Err(e) => {
                    server_error.set(e.to_string());
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <AuthLayout title="Welcome back" description="Enter your credentials to access your account">
            <form class="auth-form" on:submit=on_submit novalidate=true>
                <Show when=move || !server_error.get().is_empty()>
                    <div class="auth-form__banner" role="alert">{move || server_error.get()}</div>
                </Show>

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
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Enter your password"
                            autocomplete="current-password"
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
                    <FieldError message=Signal::derive(move || errors.get().password)/>
                </div>

                <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
                <p class="auth-form__switch">
                    "Don't have an account? "
                    <a href=AppRoute::Signup.path()>"Sign up"</a>
                </p>
            </form>
        </AuthLayout>
    }
}

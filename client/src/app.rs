//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::auth::BrowserAuthGate;
use crate::components::pwa_update_prompt::PwaUpdatePrompt;
use crate::pages::{
    audit_logs::AuditLogsPage, cases::CasesPage, clients::ClientsPage, dashboard::DashboardPage, faq::FaqPage,
    login::LoginPage, not_found::NotFoundPage, signup::SignupPage,
};
use crate::routes::AppRoute;
use crate::state::{auth::AuthState, pwa::PwaState, ui::UiState};
use crate::util::{pwa, theme};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and the auth gate, then sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    let pwa_state = RwSignal::new(PwaState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(pwa_state);
    provide_context(BrowserAuthGate::browser());

    // Browser-only preferences; effects do not run during SSR.
    Effect::new(move || {
        ui.update(|s| {
            s.theme = theme::read_preference();
            s.system_prefers_dark = theme::system_prefers_dark();
        });
    });
    Effect::new(move || theme::apply(ui.with(UiState::is_dark)));
    Effect::new(move || pwa::register(pwa_state));

    view! {
        <Stylesheet id="leptos" href="/pkg/clientiq.css"/>
        <Title text="ClientIQ"/>
        <Meta name="description" content="Client, case, and audit management for legal teams"/>
        <Meta name="theme-color" content="#0f172a"/>
        <Link rel="manifest" href="/manifest.webmanifest"/>
        <Link rel="icon" href="/favicon.ico"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment(AppRoute::Dashboard.segment()) view=DashboardPage/>
                <Route path=StaticSegment(AppRoute::Clients.segment()) view=ClientsPage/>
                <Route path=StaticSegment(AppRoute::Cases.segment()) view=CasesPage/>
                <Route path=StaticSegment(AppRoute::AuditLogs.segment()) view=AuditLogsPage/>
                <Route path=StaticSegment(AppRoute::Faq.segment()) view=FaqPage/>
                <Route path=StaticSegment(AppRoute::Login.segment()) view=LoginPage/>
                <Route path=StaticSegment(AppRoute::Signup.segment()) view=SignupPage/>
            </Routes>
        </Router>
        <PwaUpdatePrompt/>
    }
}

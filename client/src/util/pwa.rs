//! Service-worker registration and update activation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser events are translated into [`PwaState`] transitions; the update
//! prompt component renders from that state. Outside hydrate builds both
//! entry points are no-ops.

use leptos::prelude::*;

use crate::state::pwa::PwaState;

/// Register the service worker and watch for updates.
pub fn register(pwa: RwSignal<PwaState>) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };
        let container = window.navigator().service_worker();
        let promise = container.register(crate::consts::SERVICE_WORKER_PATH);
        leptos::task::spawn_local(async move {
            let registration = match wasm_bindgen_futures::JsFuture::from(promise).await {
                Ok(value) => match value.dyn_into::<web_sys::ServiceWorkerRegistration>() {
                    Ok(registration) => registration,
                    Err(value) => {
                        log::error!("service worker registration returned {value:?}");
                        return;
                    }
                },
                Err(e) => {
                    log::error!("service worker registration error: {e:?}");
                    return;
                }
            };
            log::info!("service worker registered for {}", registration.scope());

            if container.controller().is_some() && registration.waiting().is_some() {
                pwa.update(|s| s.on_installed(true));
            }
            let installing_from = registration.clone();
            let on_update_found = Closure::<dyn FnMut()>::new(move || {
                log::info!("service worker update found");
                pwa.update(PwaState::on_update_found);
                let Some(worker) = installing_from.installing() else {
                    return;
                };
                let watched = worker.clone();
                let container = container.clone();
                let on_state_change = Closure::<dyn FnMut()>::new(move || match watched.state() {
                    web_sys::ServiceWorkerState::Installed => {
                        let has_controller = container.controller().is_some();
                        log::info!("service worker installed (controller: {has_controller})");
                        pwa.update(|s| s.on_installed(has_controller));
                    }
                    web_sys::ServiceWorkerState::Redundant => {
                        log::warn!("service worker install abandoned");
                        pwa.update(PwaState::on_install_abandoned);
                    }
                    _ => {}
                });
                worker.set_onstatechange(Some(on_state_change.as_ref().unchecked_ref()));
                on_state_change.forget();
            });
            registration.set_onupdatefound(Some(on_update_found.as_ref().unchecked_ref()));
            on_update_found.forget();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = pwa;
    }
}

/// Activate the waiting worker and reload. Ignored unless an update is
/// pending and not already running.
pub fn apply_update(pwa: RwSignal<PwaState>) {
    if !pwa.try_update(PwaState::begin_update).unwrap_or(false) {
        return;
    }
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Err(e) = skip_waiting_and_reload().await {
            log::error!("failed to update service worker: {e:?}");
            pwa.update(PwaState::update_failed);
        }
    });
}

#[cfg(feature = "hydrate")]
async fn skip_waiting_and_reload() -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::JsValue;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let container = window.navigator().service_worker();
    let registration = wasm_bindgen_futures::JsFuture::from(container.get_registration())
        .await?
        .dyn_into::<web_sys::ServiceWorkerRegistration>()?;
    if let Some(waiting) = registration.waiting() {
        waiting.post_message(&JsValue::from_str(crate::consts::SKIP_WAITING_MESSAGE))?;
    }
    window.location().reload()
}

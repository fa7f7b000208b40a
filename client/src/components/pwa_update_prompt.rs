//! Toast offering to activate a newly installed app version.

use leptos::prelude::*;

use crate::state::pwa::PwaState;
use crate::util::pwa;

#[component]
pub fn PwaUpdatePrompt() -> impl IntoView {
    let state = expect_context::<RwSignal<PwaState>>();
    let updating = move || state.get().updating;

    view! {
        <Show when=move || state.get().show_prompt()>
            <div class="pwa-prompt" role="status">
                <h2 class="pwa-prompt__title">"Update Available"</h2>
                <p class="pwa-prompt__description">
                    "A new version of ClientIQ is available. Would you like to update now?"
                </p>
                <div class="pwa-prompt__actions">
                    <button class="btn btn--primary" on:click=move |_| pwa::apply_update(state) disabled=updating>
                        {move || if updating() { "Updating..." } else { "Update Now" }}
                    </button>
                    <button class="btn btn--outline" on:click=move |_| state.update(PwaState::dismiss) disabled=updating>
                        "Later"
                    </button>
                </div>
            </div>
        </Show>
    }
}

//! Snapshot and clear buttons above the stream.

use leptos::prelude::*;

use crate::state::overlay::OverlayState;

/// Toolbar with the `#snapshot` and `#clear` triggers.
///
/// Clearing drops every overlay immediately; the `clear_areas` response is
/// not awaited and a failure does not restore anything.
#[component]
pub fn Toolbar() -> impl IntoView {
    let overlay = expect_context::<RwSignal<OverlayState>>();

    let on_snapshot = move |_| {
        #[cfg(feature = "hydrate")]
        {
            crate::net::api::fire(crate::net::api::snapshot_empty_state());
        }
    };

    let on_clear = move |_| {
        #[cfg(feature = "hydrate")]
        {
            crate::net::api::fire(crate::net::api::clear_areas());
        }
        overlay.update(|s| {
            s.clear();
        });
    };

    view! {
        <div class="parking-toolbar">
            <button id="snapshot" class="btn parking-toolbar__snapshot" on:click=on_snapshot>
                "Snapshot empty state"
            </button>
            <button id="clear" class="btn parking-toolbar__clear" on:click=on_clear>
                "Clear areas"
            </button>
        </div>
    }
}

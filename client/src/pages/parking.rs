//! Parking page: the stream, its overlays and the toolbar.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. On mount it loads the registered areas once and
//! starts the occupancy poll; the poll is cancelled when the page unmounts.

use leptos::html::Img;
use leptos::prelude::*;

use crate::components::overlay_layer::OverlayLayer;
use crate::components::stream_view::StreamView;
use crate::components::toolbar::Toolbar;
use crate::state::overlay::OverlayState;

#[component]
pub fn ParkingPage() -> impl IntoView {
    let overlay = expect_context::<RwSignal<OverlayState>>();
    let stream_ref = NodeRef::<Img>::new();

    // Initial load: render every registered area without re-submitting it.
    let requested_load = RwSignal::new(false);
    Effect::new(move || {
        if requested_load.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let Some(stream) = stream_ref.get() else {
                return;
            };
            requested_load.set(true);
            leptos::task::spawn_local(async move {
                use crate::net::api;
                use crate::util::stream_input::page_offset;

                let Some(areas) = api::settle(api::get_areas().await) else {
                    return;
                };
                let origin = page_offset(&stream);
                let loaded = overlay.try_update(|s| s.load(areas, origin)).unwrap_or_default();
                log::info!("loaded {loaded} areas");
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (overlay, stream_ref);
        }
    });

    #[cfg(feature = "hydrate")]
    {
        let poll = crate::net::occupancy_poll::spawn_occupancy_poll(overlay);
        on_cleanup(move || poll.cancel());
    }

    view! {
        <div class="parking-page">
            <div class="parking-page__toolbar">
                <Toolbar/>
            </div>
            <div class="parking-page__stream">
                <StreamView stream_ref=stream_ref/>
            </div>
            <OverlayLayer/>
        </div>
    }
}

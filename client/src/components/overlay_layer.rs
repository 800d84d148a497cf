//! Absolutely positioned `parking-area` boxes, one per overlay.

use leptos::prelude::*;

use crate::state::overlay::OverlayState;

/// Renders every overlay as `div.parking-area[data-area-name]`.
///
/// Geometry is fixed when the overlay is created; only the busy/free class
/// follows later polls.
#[component]
pub fn OverlayLayer() -> impl IntoView {
    let overlay = expect_context::<RwSignal<OverlayState>>();

    view! {
        <div class="parking-overlays">
            {move || {
                overlay
                    .get()
                    .overlays
                    .into_iter()
                    .map(|o| {
                        let class = o.class_list();
                        let style = o.style();
                        let name = o.area.name;
                        let area_name = name.clone();
                        view! {
                            <div class=class style=style data-area-name=area_name>
                                {name}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

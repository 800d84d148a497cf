//! The stream surface that accepts the two-click area gesture.

use leptos::html::Img;
use leptos::prelude::*;

use crate::state::overlay::OverlayState;

pub const DEFAULT_STREAM_URL: &str = "/color_video_stream";

/// `#color_stream` image. A completed gesture draws its overlay at once and
/// then submits `add_area` in the background.
#[component]
pub fn StreamView(
    stream_ref: NodeRef<Img>,
    #[prop(optional, into)] src: Option<String>,
) -> impl IntoView {
    let overlay = expect_context::<RwSignal<OverlayState>>();
    let src = src.unwrap_or_else(|| DEFAULT_STREAM_URL.to_owned());

    let on_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            use crate::net::api;
            use crate::util::stream_input::{click_point, page_offset, prompt_area_name};

            let Some(stream) = stream_ref.get_untracked() else {
                return;
            };
            let Some(point) = click_point(&ev, &stream) else {
                return;
            };
            let origin = page_offset(&stream);
            let submitted = overlay.try_update(|s| s.click(point, origin, prompt_area_name)).flatten();
            if let Some(area) = submitted {
                api::fire(async move { api::add_area(&area).await });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&ev, overlay, stream_ref);
        }
    };

    view! {
        <img id="color_stream" class="parking-stream" src=src node_ref=stream_ref on:click=on_click/>
    }
}

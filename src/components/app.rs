use crate::settings::FeedSettings;
#[cfg(not(target_arch = "wasm32"))]
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

/// Video surface and status line. The feed controller takes over both
/// elements once they are mounted; nothing here re-renders them.
#[component]
pub fn FeedPage() -> Element {
    let settings = use_hook(FeedSettings::default);

    {
        let settings = settings.clone();
        use_effect(move || {
            #[cfg(target_arch = "wasm32")]
            crate::components::feed_controller::start_feed(settings.clone());
            #[cfg(not(target_arch = "wasm32"))]
            warn!(
                "live feed needs a browser target; {} is not available here",
                settings.reader_global
            );
        });
    }

    rsx! {
        document::Script { src: settings.reader_script.clone() }
        div { class: "feed",
            video { id: "{settings.video_element_id}", class: "feed-video" }
            div { id: "{settings.message_element_id}", class: "feed-message" }
        }
    }
}

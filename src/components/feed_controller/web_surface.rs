// Web surface: the page's <video> element plus the status text element.
use super::FeedSurface;
use crate::error::FeedError;
use crate::preferences::FeedPreferences;
use crate::settings::FeedSettings;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, HtmlElement, HtmlVideoElement, MediaStream};

pub struct WebFeedSurface {
    video: HtmlVideoElement,
    message: HtmlElement,
}

impl WebFeedSurface {
    /// Look up both page elements by id.
    pub fn locate(settings: &FeedSettings) -> Result<Self, FeedError> {
        let video = find_element::<HtmlVideoElement>(&settings.video_element_id)?;
        let message = find_element::<HtmlElement>(&settings.message_element_id)?;
        Ok(Self { video, message })
    }
}

fn find_element<T: JsCast>(id: &str) -> Result<T, FeedError> {
    window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| FeedError::MissingElement(id.to_string()))
}

impl FeedSurface for WebFeedSurface {
    type Stream = MediaStream;

    fn apply_preferences(&mut self, preferences: &FeedPreferences) {
        self.video.set_controls(preferences.show_controls);
        self.video.set_muted(preferences.muted);
        self.video.set_autoplay(preferences.autoplay);
        // No typed setter for playsInline.
        let video_js = JsValue::from(self.video.clone());
        let _ = js_sys::Reflect::set(
            &video_js,
            &"playsInline".into(),
            &JsValue::from_bool(preferences.plays_inline),
        );
    }

    fn set_controls_visible(&mut self, visible: bool) {
        self.video.set_controls(visible);
    }

    fn bind_stream(&mut self, stream: Option<MediaStream>) {
        self.video.set_src_object(stream.as_ref());
    }

    fn set_status_text(&mut self, text: &str) {
        self.message.set_inner_text(text);
    }
}

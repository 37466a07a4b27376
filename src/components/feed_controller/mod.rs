//! Feed Controller - owns the video surface and the status-message state machine.
//! Reader callbacks arrive as `FeedEvent`s and are applied serially on the page thread.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

use crate::preferences::{resolve_configuration, FeedPreferences};

// Browser surface backed by the page's video and status elements.
#[cfg(target_arch = "wasm32")]
mod web_surface;
// Reader construction and callback wiring.
#[cfg(target_arch = "wasm32")]
mod media_reader;

#[cfg(target_arch = "wasm32")]
pub use media_reader::start_feed;
#[cfg(target_arch = "wasm32")]
pub use web_surface::WebFeedSurface;

/// Lifecycle notifications delivered by the stream reader.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedEvent<T> {
    /// Negotiation failed or the stream dropped; carries the reader's message verbatim.
    Error(String),
    /// A track arrived. `None` when the track event carried no stream.
    TrackReceived(Option<T>),
}

/// Display collaborator driven by the controller.
pub trait FeedSurface {
    type Stream;

    fn apply_preferences(&mut self, preferences: &FeedPreferences);
    fn set_controls_visible(&mut self, visible: bool);
    fn bind_stream(&mut self, stream: Option<Self::Stream>);
    fn set_status_text(&mut self, text: &str);
}

pub struct FeedController<S: FeedSurface> {
    surface: S,
    preferences: FeedPreferences,
    default_controls: bool,
    status_message: String,
}

impl<S: FeedSurface> FeedController<S> {
    /// Resolve preferences from `query`, push them onto the surface, and capture
    /// the default controls visibility.
    pub fn initialize(mut surface: S, query: &str) -> Self {
        let preferences = resolve_configuration(query);
        surface.apply_preferences(&preferences);
        Self {
            surface,
            preferences,
            default_controls: preferences.show_controls,
            status_message: String::new(),
        }
    }

    pub fn handle(&mut self, event: FeedEvent<S::Stream>) {
        match event {
            FeedEvent::Error(message) => self.set_status(message),
            FeedEvent::TrackReceived(stream) => {
                self.set_status(String::new());
                self.surface.bind_stream(stream);
            }
        }
    }

    // Controls are visible only while the feed is nominal and the viewer asked for them.
    fn set_status(&mut self, message: String) {
        let visible = message.is_empty() && self.default_controls;
        self.surface.set_controls_visible(visible);
        self.surface.set_status_text(&message);
        self.status_message = message;
    }

    pub fn preferences(&self) -> &FeedPreferences {
        &self.preferences
    }

    pub fn default_controls(&self) -> bool {
        self.default_controls
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

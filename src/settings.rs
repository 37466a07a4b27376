/// Page wiring for the feed viewer: element ids, endpoint, and reader lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedSettings {
    pub video_element_id: String,
    pub message_element_id: String,
    /// Path segment resolved against the page URL to reach the WHEP endpoint.
    pub endpoint_segment: String,
    /// Global constructor exported by the reader script.
    pub reader_global: String,
    pub reader_script: String,
    pub reader_poll_interval_ms: u32,
    pub reader_poll_attempts: u32,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            video_element_id: "video".to_string(),
            message_element_id: "message".to_string(),
            endpoint_segment: "whep".to_string(),
            reader_global: "MediaMTXWebRTCReader".to_string(),
            reader_script: "reader.js".to_string(),
            reader_poll_interval_ms: 50,
            reader_poll_attempts: 100,
        }
    }
}

// Reader bootstrap: wait for the reader script, construct it, and route its
// callbacks into the controller.
use super::{FeedController, FeedEvent, WebFeedSurface};
use crate::diagnostics::{log_perf, now_ms};
use crate::error::FeedError;
use crate::settings::FeedSettings;
use crate::utils::whep_endpoint;
use dioxus::logger::tracing::{error, info, warn};
use dioxus::prelude::spawn;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, MediaStream};

type SharedController = Rc<RefCell<FeedController<WebFeedSurface>>>;

/// Page-ready entry point. Applies preferences synchronously, then connects
/// the reader on a spawned task so the caller never waits on the network.
pub fn start_feed(settings: FeedSettings) {
    let started_at = now_ms();

    let surface = match WebFeedSurface::locate(&settings) {
        Ok(surface) => surface,
        Err(err) => {
            error!("feed bootstrap aborted: {err}");
            return;
        }
    };

    let (href, search) = match page_location() {
        Ok(location) => location,
        Err(err) => {
            error!("feed bootstrap aborted: {err}");
            return;
        }
    };

    let controller: SharedController =
        Rc::new(RefCell::new(FeedController::initialize(surface, &search)));
    {
        let ctl = controller.borrow();
        let preferences = serde_json::to_string(ctl.preferences()).unwrap_or_default();
        info!("feed preferences resolved: {preferences}");
    }

    let endpoint = match whep_endpoint(&href, &settings.endpoint_segment, &search) {
        Ok(endpoint) => endpoint,
        Err(err) => {
            report_bootstrap_failure(&controller, err);
            return;
        }
    };
    info!("connecting to {endpoint}");

    spawn(async move {
        match connect_reader(&settings, &endpoint, controller.clone()).await {
            Ok(reader) => {
                // The reader and its callbacks live for the rest of the page.
                std::mem::forget(reader);
                log_perf("feed bootstrap", started_at, &endpoint);
            }
            Err(err) => report_bootstrap_failure(&controller, err),
        }
    });
}

fn page_location() -> Result<(String, String), FeedError> {
    let location = window()
        .map(|w| w.location())
        .ok_or_else(|| FeedError::InvalidPageUrl("no window".to_string()))?;
    let href = location
        .href()
        .map_err(|e| FeedError::InvalidPageUrl(js_message(&e)))?;
    let search = location
        .search()
        .map_err(|e| FeedError::InvalidPageUrl(js_message(&e)))?;
    Ok((href, search))
}

fn report_bootstrap_failure(controller: &SharedController, err: FeedError) {
    error!("feed bootstrap failed: {err}");
    controller
        .borrow_mut()
        .handle(FeedEvent::Error(err.to_string()));
}

async fn connect_reader(
    settings: &FeedSettings,
    endpoint: &str,
    controller: SharedController,
) -> Result<JsValue, FeedError> {
    let constructor = wait_for_reader(settings).await?;

    let on_error = {
        let controller = controller.clone();
        Closure::wrap(Box::new(move |err: JsValue| {
            let message = js_message(&err);
            warn!("stream reader error: {message}");
            controller.borrow_mut().handle(FeedEvent::Error(message));
        }) as Box<dyn FnMut(JsValue)>)
    };
    let on_track = Closure::wrap(Box::new(move |evt: JsValue| {
        let stream = first_stream(&evt);
        info!("stream track received (stream present: {})", stream.is_some());
        controller
            .borrow_mut()
            .handle(FeedEvent::TrackReceived(stream));
    }) as Box<dyn FnMut(JsValue)>);

    let conf = js_sys::Object::new();
    set_field(&conf, "url", &JsValue::from_str(endpoint))?;
    set_field(&conf, "onError", on_error.as_ref())?;
    set_field(&conf, "onTrack", on_track.as_ref())?;

    let reader = js_sys::Reflect::construct(&constructor, &js_sys::Array::of1(&conf))
        .map_err(|e| FeedError::ReaderConstruction(js_message(&e)))?;

    on_error.forget();
    on_track.forget();
    Ok(reader)
}

// The reader script may still be loading when the page becomes ready.
async fn wait_for_reader(settings: &FeedSettings) -> Result<js_sys::Function, FeedError> {
    for _ in 0..settings.reader_poll_attempts {
        if let Some(constructor) = reader_constructor(&settings.reader_global) {
            return Ok(constructor);
        }
        gloo_timers::future::TimeoutFuture::new(settings.reader_poll_interval_ms).await;
    }
    reader_constructor(&settings.reader_global)
        .ok_or_else(|| FeedError::ReaderUnavailable(settings.reader_global.clone()))
}

fn reader_constructor(name: &str) -> Option<js_sys::Function> {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()
}

fn set_field(target: &js_sys::Object, key: &str, value: &JsValue) -> Result<(), FeedError> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|e| FeedError::ReaderConstruction(js_message(&e)))
}

fn first_stream(evt: &JsValue) -> Option<MediaStream> {
    let streams = js_sys::Reflect::get(evt, &"streams".into()).ok()?;
    streams
        .dyn_into::<js_sys::Array>()
        .ok()?
        .get(0)
        .dyn_into::<MediaStream>()
        .ok()
}

fn js_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.to_string());
    }
    format!("{value:?}")
}

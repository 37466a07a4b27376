use dioxus::logger::tracing::debug;

/// Milliseconds since the Unix epoch, from the browser clock on wasm.
#[inline]
pub fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }
}

#[inline]
pub fn log_perf(scope: &str, started_at_ms: f64, details: &str) {
    let elapsed_ms = (now_ms() - started_at_ms).max(0.0).round() as u64;
    if details.trim().is_empty() {
        debug!("[perf] {scope} took {elapsed_ms}ms");
    } else {
        debug!("[perf] {scope} took {elapsed_ms}ms | {details}");
    }
}

//! Fire-and-forget telemetry over `fetch`.
//!
//! The endpoint base comes from `ARK_TELEMETRY_URL` at compile time. Builds
//! without it get a [`NullSink`], so nothing leaves the browser.

use ark_game::{NullSink, StatsPayload, TelemetrySink};

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Unexpected status {0}")]
    Status(u16),
}

/// Resolved endpoint URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryEndpoints {
    pub play_count: String,
    pub completion_stats: String,
}

impl TelemetryEndpoints {
    #[must_use]
    pub fn from_base(base: &str) -> Option<Self> {
        let base = base.trim().trim_end_matches('/');
        if base.is_empty() {
            return None;
        }
        Some(Self {
            play_count: format!("{base}/updateCounter"),
            completion_stats: format!("{base}/addGame"),
        })
    }
}

/// Sink that POSTs to the telemetry endpoints without awaiting the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSink {
    endpoints: TelemetryEndpoints,
}

impl FetchSink {
    #[must_use]
    pub const fn new(endpoints: TelemetryEndpoints) -> Self {
        Self { endpoints }
    }

    #[must_use]
    pub const fn endpoints(&self) -> &TelemetryEndpoints {
        &self.endpoints
    }

    #[cfg(target_arch = "wasm32")]
    fn dispatch(&self, url: &str, body: Option<String>) {
        let url = url.to_string();
        wasm_bindgen_futures::spawn_local(async move {
            match send(&url, body.as_deref()).await {
                Ok(()) => log::debug!("telemetry sent to {url}"),
                Err(err) => log::error!("telemetry to {url} failed: {err}"),
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[allow(clippy::unused_self)]
    fn dispatch(&self, url: &str, body: Option<String>) {
        log::debug!(
            "telemetry to {url} skipped off-browser ({} byte body)",
            body.map_or(0, |body| body.len())
        );
    }
}

#[cfg(target_arch = "wasm32")]
#[allow(clippy::future_not_send)]
async fn send(url: &str, body: Option<&str>) -> Result<(), TelemetryError> {
    let response = crate::dom::post_json(url, body)
        .await
        .map_err(|err| TelemetryError::Request(crate::dom::js_error_message(&err)))?;
    if response.ok() {
        Ok(())
    } else {
        Err(TelemetryError::Status(response.status()))
    }
}

impl TelemetrySink for FetchSink {
    fn increment_play_count(&self) {
        self.dispatch(&self.endpoints.play_count, None);
    }

    fn record_completion_stats(&self, payload: &StatsPayload) {
        match serde_json::to_string(payload) {
            Ok(body) => self.dispatch(&self.endpoints.completion_stats, Some(body)),
            Err(err) => log::error!("could not encode completion stats: {err}"),
        }
    }
}

/// The sink chosen for this build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebSink {
    Null(NullSink),
    Fetch(FetchSink),
}

impl WebSink {
    #[must_use]
    pub fn from_base(base: Option<&str>) -> Self {
        base.and_then(TelemetryEndpoints::from_base)
            .map_or(Self::Null(NullSink), |endpoints| {
                Self::Fetch(FetchSink::new(endpoints))
            })
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }
}

impl TelemetrySink for WebSink {
    fn increment_play_count(&self) {
        match self {
            Self::Null(sink) => sink.increment_play_count(),
            Self::Fetch(sink) => sink.increment_play_count(),
        }
    }

    fn record_completion_stats(&self, payload: &StatsPayload) {
        match self {
            Self::Null(sink) => sink.record_completion_stats(payload),
            Self::Fetch(sink) => sink.record_completion_stats(payload),
        }
    }
}

#[must_use]
pub fn web_sink() -> WebSink {
    WebSink::from_base(crate::paths::telemetry_base().as_deref())
}

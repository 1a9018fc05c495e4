use std::sync::Arc;

use tracing::{debug, warn};

use tiktok_events::{
    AdRevenuePayload, ContentEventName, ContentEventProperties, Properties, StandardEvent,
};

use crate::{
    identifier::{validate_tt_app_ids, TtAppIds},
    sink::{NativeSink, UnlinkedSink},
    TikTokBusinessError,
};

/// Initialize request. `debug` defaults to `false`; the app ids stay raw
/// until [`TikTokBusinessClient::initialize`] validates them.
#[derive(Debug, Clone)]
pub struct InitRequest {
    pub(crate) app_id: String,
    pub(crate) tt_app_ids: TtAppIds,
    pub(crate) access_token: String,
    pub(crate) debug: bool,
}

impl InitRequest {
    pub fn new(
        app_id: impl Into<String>,
        tt_app_ids: impl Into<TtAppIds>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            tt_app_ids: tt_app_ids.into(),
            access_token: access_token.into(),
            debug: false,
        }
    }

    /// Enables the native SDK's debug/verbose mode.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct TikTokBusinessClientBuilder {
    sink: Option<Arc<dyn NativeSink>>,
}

impl TikTokBusinessClientBuilder {
    /// Injects the native collaborator. Without it, [`build`] wires the
    /// always-failing [`UnlinkedSink`].
    ///
    /// [`build`]: TikTokBusinessClientBuilder::build
    pub fn sink(mut self, sink: Arc<dyn NativeSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn build(self) -> TikTokBusinessClient {
        TikTokBusinessClient {
            sink: self.sink.unwrap_or_else(|| Arc::new(UnlinkedSink)),
        }
    }
}

/// Facade over the platform-native TikTok Business SDK.
///
/// Holds a read-only reference to the injected sink; never retries, caches,
/// or reorders calls. Each operation settles with the sink's opaque
/// confirmation token or the first failure encountered.
#[derive(Debug, Clone)]
pub struct TikTokBusinessClient {
    sink: Arc<dyn NativeSink>,
}

impl TikTokBusinessClient {
    pub fn builder() -> TikTokBusinessClientBuilder {
        TikTokBusinessClientBuilder::default()
    }

    /// Convenience constructor for an already-built sink.
    pub fn new(sink: Arc<dyn NativeSink>) -> Self {
        Self { sink }
    }

    /// Initializes the native SDK. The only operation with local validation:
    /// a malformed `tt_app_ids` fails here and the sink is never called.
    pub async fn initialize(&self, request: InitRequest) -> Result<String, TikTokBusinessError> {
        let normalized = validate_tt_app_ids(request.tt_app_ids)?;
        debug!(app_id = %request.app_id, tt_app_ids = %normalized, debug = request.debug, "initialize");
        self.relay(
            self.sink
                .initialize(
                    &request.app_id,
                    normalized.as_str(),
                    &request.access_token,
                    request.debug,
                )
                .await,
        )
    }

    /// Associates the current device with a known user. All four fields are
    /// mandatory; malformed values pass through to the native layer.
    pub async fn identify(
        &self,
        external_id: &str,
        external_user_name: &str,
        phone_number: &str,
        email: &str,
    ) -> Result<String, TikTokBusinessError> {
        debug!(external_id, "identify");
        self.relay(
            self.sink
                .identify(external_id, external_user_name, phone_number, email)
                .await,
        )
    }

    /// Clears the identity set by [`identify`].
    ///
    /// [`identify`]: TikTokBusinessClient::identify
    pub async fn logout(&self) -> Result<String, TikTokBusinessError> {
        debug!("logout");
        self.relay(self.sink.logout().await)
    }

    /// Asks the native layer to deliver its pending events now.
    pub async fn flush(&self) -> Result<String, TikTokBusinessError> {
        debug!("flush");
        self.relay(self.sink.flush().await)
    }

    /// Reports a standard-taxonomy event. Absent id/properties are forwarded
    /// as absent, not as empty values.
    pub async fn track_event(&self, event: StandardEvent) -> Result<String, TikTokBusinessError> {
        let (name, event_id, properties) = event.into_parts();
        debug!(name = name.as_str(), "track_event");
        let properties = properties.map(Properties::into_map);
        self.relay(
            self.sink
                .track_event(name.as_str(), event_id.as_deref(), properties.as_ref())
                .await,
        )
    }

    /// Reports a content (commerce) event with its taxonomy-constrained
    /// property map.
    pub async fn track_content_event(
        &self,
        name: ContentEventName,
        properties: ContentEventProperties,
    ) -> Result<String, TikTokBusinessError> {
        debug!(name = name.as_str(), "track_content_event");
        self.relay(
            self.sink
                .track_content_event(name.as_str(), &properties.into_map())
                .await,
        )
    }

    /// Reports an event outside the standard taxonomy under an arbitrary
    /// name.
    pub async fn track_custom_event(
        &self,
        name: impl Into<String>,
        properties: Option<Properties>,
    ) -> Result<String, TikTokBusinessError> {
        let name = name.into();
        debug!(name = %name, "track_custom_event");
        let properties = properties.map(Properties::into_map);
        self.relay(
            self.sink
                .track_custom_event(&name, properties.as_ref())
                .await,
        )
    }

    /// Reports impression-level ad revenue.
    pub async fn track_ad_revenue(
        &self,
        payload: AdRevenuePayload,
    ) -> Result<String, TikTokBusinessError> {
        let (fields, event_id) = payload.into_parts();
        debug!("track_ad_revenue");
        self.relay(
            self.sink
                .track_ad_revenue(&fields, event_id.as_deref())
                .await,
        )
    }

    fn relay(
        &self,
        result: Result<String, crate::SinkError>,
    ) -> Result<String, TikTokBusinessError> {
        result.map_err(|err| {
            warn!(error = %err, "native sink reported failure");
            TikTokBusinessError::from(err)
        })
    }
}

use std::fmt::Debug;

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

/// Failures surfaced by the native collaborator and relayed unchanged by the
/// facade. `NotLinked` is the uniform failure of the fallback sink used when
/// no real collaborator was injected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SinkError {
    #[error("native SDK initialization failed: {message}")]
    Init { message: String },
    #[error("native SDK identify failed: {message}")]
    Identify { message: String },
    #[error("native SDK flush failed: {message}")]
    Flush { message: String },
    #[error("native SDK track failed: {message}")]
    Track { message: String },
    #[error("native TikTok Business SDK is not linked")]
    NotLinked,
}

/// The platform-native event-delivery engine.
///
/// Implementations own batching, network transport, retry, and on-device
/// persistence of pending events; the facade only hands them validated,
/// defaulted inputs. Every method settles with the engine's opaque
/// confirmation token on success.
#[async_trait]
pub trait NativeSink: Send + Sync + Debug {
    /// Receives exactly the four positional initialize values; `tt_app_ids`
    /// is always the canonical comma-joined form, never a raw array.
    async fn initialize(
        &self,
        app_id: &str,
        tt_app_ids: &str,
        access_token: &str,
        debug: bool,
    ) -> Result<String, SinkError>;

    async fn identify(
        &self,
        external_id: &str,
        external_user_name: &str,
        phone_number: &str,
        email: &str,
    ) -> Result<String, SinkError>;

    async fn logout(&self) -> Result<String, SinkError>;

    async fn flush(&self) -> Result<String, SinkError>;

    async fn track_event(
        &self,
        name: &str,
        event_id: Option<&str>,
        properties: Option<&Map<String, Value>>,
    ) -> Result<String, SinkError>;

    async fn track_content_event(
        &self,
        name: &str,
        properties: &Map<String, Value>,
    ) -> Result<String, SinkError>;

    async fn track_custom_event(
        &self,
        name: &str,
        properties: Option<&Map<String, Value>>,
    ) -> Result<String, SinkError>;

    async fn track_ad_revenue(
        &self,
        payload: &Map<String, Value>,
        event_id: Option<&str>,
    ) -> Result<String, SinkError>;
}

/// Fallback collaborator substituted when no native binding is available.
/// Every operation fails with [`SinkError::NotLinked`] without suspending.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnlinkedSink;

#[async_trait]
impl NativeSink for UnlinkedSink {
    async fn initialize(
        &self,
        _app_id: &str,
        _tt_app_ids: &str,
        _access_token: &str,
        _debug: bool,
    ) -> Result<String, SinkError> {
        Err(SinkError::NotLinked)
    }

    async fn identify(
        &self,
        _external_id: &str,
        _external_user_name: &str,
        _phone_number: &str,
        _email: &str,
    ) -> Result<String, SinkError> {
        Err(SinkError::NotLinked)
    }

    async fn logout(&self) -> Result<String, SinkError> {
        Err(SinkError::NotLinked)
    }

    async fn flush(&self) -> Result<String, SinkError> {
        Err(SinkError::NotLinked)
    }

    async fn track_event(
        &self,
        _name: &str,
        _event_id: Option<&str>,
        _properties: Option<&Map<String, Value>>,
    ) -> Result<String, SinkError> {
        Err(SinkError::NotLinked)
    }

    async fn track_content_event(
        &self,
        _name: &str,
        _properties: &Map<String, Value>,
    ) -> Result<String, SinkError> {
        Err(SinkError::NotLinked)
    }

    async fn track_custom_event(
        &self,
        _name: &str,
        _properties: Option<&Map<String, Value>>,
    ) -> Result<String, SinkError> {
        Err(SinkError::NotLinked)
    }

    async fn track_ad_revenue(
        &self,
        _payload: &Map<String, Value>,
        _event_id: Option<&str>,
    ) -> Result<String, SinkError> {
        Err(SinkError::NotLinked)
    }
}

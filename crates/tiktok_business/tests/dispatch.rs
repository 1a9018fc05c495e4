//! Facade dispatch contract against an in-process fake collaborator.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Map, Value};

use tiktok_business::{
    InitRequest, NativeSink, SinkError, TikTokBusinessClient, TikTokBusinessError,
};
use tiktok_events::{
    AdRevenuePayload, ContentEventName, ContentEventProperties, ContentItem, Properties,
    StandardEvent, StandardEventName,
};

/// Every call the fake sink observed, with the exact values it received.
#[derive(Debug, Clone, PartialEq)]
enum Call {
    Initialize {
        app_id: String,
        tt_app_ids: String,
        access_token: String,
        debug: bool,
    },
    Identify {
        external_id: String,
        external_user_name: String,
        phone_number: String,
        email: String,
    },
    Logout,
    Flush,
    TrackEvent {
        name: String,
        event_id: Option<String>,
        properties: Option<Map<String, Value>>,
    },
    TrackContentEvent {
        name: String,
        properties: Map<String, Value>,
    },
    TrackCustomEvent {
        name: String,
        properties: Option<Map<String, Value>>,
    },
    TrackAdRevenue {
        payload: Map<String, Value>,
        event_id: Option<String>,
    },
}

#[derive(Debug, Default)]
struct RecordingSink {
    calls: Mutex<Vec<Call>>,
    fail_with: Mutex<Option<SinkError>>,
}

impl RecordingSink {
    fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn failing(error: SinkError) -> Arc<Self> {
        let sink = Self::default();
        *sink.fail_with.lock().unwrap() = Some(error);
        Arc::new(sink)
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<String, SinkError> {
        self.calls.lock().unwrap().push(call);
        match self.fail_with.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok("ok".to_string()),
        }
    }
}

#[async_trait]
impl NativeSink for RecordingSink {
    async fn initialize(
        &self,
        app_id: &str,
        tt_app_ids: &str,
        access_token: &str,
        debug: bool,
    ) -> Result<String, SinkError> {
        self.record(Call::Initialize {
            app_id: app_id.to_string(),
            tt_app_ids: tt_app_ids.to_string(),
            access_token: access_token.to_string(),
            debug,
        })
    }

    async fn identify(
        &self,
        external_id: &str,
        external_user_name: &str,
        phone_number: &str,
        email: &str,
    ) -> Result<String, SinkError> {
        self.record(Call::Identify {
            external_id: external_id.to_string(),
            external_user_name: external_user_name.to_string(),
            phone_number: phone_number.to_string(),
            email: email.to_string(),
        })
    }

    async fn logout(&self) -> Result<String, SinkError> {
        self.record(Call::Logout)
    }

    async fn flush(&self) -> Result<String, SinkError> {
        self.record(Call::Flush)
    }

    async fn track_event(
        &self,
        name: &str,
        event_id: Option<&str>,
        properties: Option<&Map<String, Value>>,
    ) -> Result<String, SinkError> {
        self.record(Call::TrackEvent {
            name: name.to_string(),
            event_id: event_id.map(str::to_string),
            properties: properties.cloned(),
        })
    }

    async fn track_content_event(
        &self,
        name: &str,
        properties: &Map<String, Value>,
    ) -> Result<String, SinkError> {
        self.record(Call::TrackContentEvent {
            name: name.to_string(),
            properties: properties.clone(),
        })
    }

    async fn track_custom_event(
        &self,
        name: &str,
        properties: Option<&Map<String, Value>>,
    ) -> Result<String, SinkError> {
        self.record(Call::TrackCustomEvent {
            name: name.to_string(),
            properties: properties.cloned(),
        })
    }

    async fn track_ad_revenue(
        &self,
        payload: &Map<String, Value>,
        event_id: Option<&str>,
    ) -> Result<String, SinkError> {
        self.record(Call::TrackAdRevenue {
            payload: payload.clone(),
            event_id: event_id.map(str::to_string),
        })
    }
}

fn client_with(sink: Arc<RecordingSink>) -> TikTokBusinessClient {
    TikTokBusinessClient::builder().sink(sink).build()
}

#[tokio::test]
async fn initialize_forwards_four_positional_values_with_normalized_ids() {
    let sink = RecordingSink::new();
    let client = client_with(sink.clone());

    let token = client
        .initialize(
            InitRequest::new("com.example.app", vec!["11".to_string(), "22".to_string()], "tok")
                .debug(true),
        )
        .await
        .expect("initialize");

    assert_eq!(token, "ok");
    assert_eq!(
        sink.calls(),
        vec![Call::Initialize {
            app_id: "com.example.app".to_string(),
            tt_app_ids: "11,22".to_string(),
            access_token: "tok".to_string(),
            debug: true,
        }]
    );
}

#[tokio::test]
async fn malformed_identifier_never_reaches_the_sink() {
    let sink = RecordingSink::new();
    let client = client_with(sink.clone());

    let err = client
        .initialize(InitRequest::new("app", "11, 22", "tok"))
        .await
        .unwrap_err();

    assert!(matches!(err, TikTokBusinessError::Identifier(_)));
    assert!(sink.calls().is_empty(), "sink must not be consulted");
}

#[tokio::test]
async fn identify_passes_all_four_fields_through_unvalidated() {
    let sink = RecordingSink::new();
    let client = client_with(sink.clone());

    client
        .identify("u-1", "ada", "not-a-phone", "not-an-email")
        .await
        .expect("identify");

    assert_eq!(
        sink.calls(),
        vec![Call::Identify {
            external_id: "u-1".to_string(),
            external_user_name: "ada".to_string(),
            phone_number: "not-a-phone".to_string(),
            email: "not-an-email".to_string(),
        }]
    );
}

#[tokio::test]
async fn track_event_defaults_id_and_properties_to_absent() {
    let sink = RecordingSink::new();
    let client = client_with(sink.clone());

    client
        .track_event(StandardEvent::new(StandardEventName::Login))
        .await
        .expect("track_event");

    assert_eq!(
        sink.calls(),
        vec![Call::TrackEvent {
            name: "Login".to_string(),
            event_id: None,
            properties: None,
        }]
    );
}

#[tokio::test]
async fn track_event_forwards_id_and_properties_when_given() {
    let sink = RecordingSink::new();
    let client = client_with(sink.clone());

    client
        .track_event(
            StandardEvent::new(StandardEventName::Purchase)
                .event_id("evt-9")
                .properties(Properties::new().insert("value", 12.5)),
        )
        .await
        .expect("track_event");

    let calls = sink.calls();
    match &calls[0] {
        Call::TrackEvent {
            name,
            event_id,
            properties,
        } => {
            assert_eq!(name, "Purchase");
            assert_eq!(event_id.as_deref(), Some("evt-9"));
            let props = properties.as_ref().expect("properties forwarded");
            assert_eq!(props["value"], serde_json::json!(12.5));
        }
        other => panic!("unexpected call: {other:?}"),
    }
}

#[tokio::test]
async fn content_event_forwards_constrained_property_map() {
    let sink = RecordingSink::new();
    let client = client_with(sink.clone());

    client
        .track_content_event(
            ContentEventName::Purchase,
            ContentEventProperties::new()
                .currency("USD")
                .value(30.0)
                .contents(vec![ContentItem::new().content_id("sku-1").quantity(3)]),
        )
        .await
        .expect("track_content_event");

    let calls = sink.calls();
    match &calls[0] {
        Call::TrackContentEvent { name, properties } => {
            assert_eq!(name, "Purchase");
            assert_eq!(properties["currency"], serde_json::json!("USD"));
            let contents = properties["contents"].as_array().expect("contents");
            assert_eq!(contents[0]["content_id"], serde_json::json!("sku-1"));
        }
        other => panic!("unexpected call: {other:?}"),
    }
}

#[tokio::test]
async fn custom_event_accepts_arbitrary_names() {
    let sink = RecordingSink::new();
    let client = client_with(sink.clone());

    client
        .track_custom_event("tutorial_step_3", None)
        .await
        .expect("track_custom_event");

    assert_eq!(
        sink.calls(),
        vec![Call::TrackCustomEvent {
            name: "tutorial_step_3".to_string(),
            properties: None,
        }]
    );
}

#[tokio::test]
async fn ad_revenue_forwards_payload_and_optional_id() {
    let sink = RecordingSink::new();
    let client = client_with(sink.clone());

    client
        .track_ad_revenue(
            AdRevenuePayload::new()
                .revenue(0.07)
                .currency("USD")
                .ad_network("admob")
                .event_id("imp-1"),
        )
        .await
        .expect("track_ad_revenue");

    let calls = sink.calls();
    match &calls[0] {
        Call::TrackAdRevenue { payload, event_id } => {
            assert_eq!(payload["revenue"], serde_json::json!(0.07));
            assert_eq!(payload["adNetwork"], serde_json::json!("admob"));
            assert_eq!(event_id.as_deref(), Some("imp-1"));
        }
        other => panic!("unexpected call: {other:?}"),
    }
}

#[tokio::test]
async fn sink_failures_are_relayed_unchanged() {
    let sink = RecordingSink::failing(SinkError::Flush {
        message: "queue full".to_string(),
    });
    let client = client_with(sink);

    let err = client.flush().await.unwrap_err();
    assert_eq!(
        err,
        TikTokBusinessError::Sink(SinkError::Flush {
            message: "queue full".to_string(),
        })
    );
}

#[tokio::test]
async fn every_operation_rejects_uniformly_when_unlinked() {
    let client = TikTokBusinessClient::builder().build();

    let results: Vec<Result<String, TikTokBusinessError>> = vec![
        client
            .initialize(InitRequest::new("app", "11", "tok"))
            .await,
        client.identify("id", "name", "phone", "mail").await,
        client.logout().await,
        client.flush().await,
        client
            .track_event(StandardEvent::new(StandardEventName::Login))
            .await,
        client
            .track_content_event(ContentEventName::ViewContent, ContentEventProperties::new())
            .await,
        client.track_custom_event("anything", None).await,
        client.track_ad_revenue(AdRevenuePayload::new()).await,
    ];

    assert_eq!(results.len(), 8);
    for result in results {
        let err = result.unwrap_err();
        assert!(err.is_not_linked(), "expected NotLinked, got {err:?}");
    }
}

#[tokio::test]
async fn awaited_calls_reach_the_sink_in_issue_order() {
    let sink = RecordingSink::new();
    let client = client_with(sink.clone());

    client
        .initialize(InitRequest::new("app", "11", "tok"))
        .await
        .expect("initialize");
    client
        .track_event(StandardEvent::new(StandardEventName::LaunchApp))
        .await
        .expect("track_event");
    client.flush().await.expect("flush");

    let names: Vec<&'static str> = sink
        .calls()
        .iter()
        .map(|call| match call {
            Call::Initialize { .. } => "initialize",
            Call::TrackEvent { .. } => "track_event",
            Call::Flush => "flush",
            other => panic!("unexpected call: {other:?}"),
        })
        .collect();
    assert_eq!(names, ["initialize", "track_event", "flush"]);
}

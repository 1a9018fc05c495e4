//! Demonstrates the full facade flow against a stub collaborator that logs
//! each dispatched call instead of delivering it.
//!
//! Usage: `cargo run -p tiktok_business --example track_purchase`

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use tiktok_business::{InitRequest, NativeSink, SinkError, TikTokBusinessClient};
use tiktok_events::{
    ContentEventName, ContentEventProperties, ContentItem, Properties, StandardEvent,
    StandardEventName,
};

/// Prints every call it receives and confirms with a counter token.
#[derive(Debug, Default)]
struct LoggingSink;

#[async_trait]
impl NativeSink for LoggingSink {
    async fn initialize(
        &self,
        app_id: &str,
        tt_app_ids: &str,
        access_token: &str,
        debug: bool,
    ) -> Result<String, SinkError> {
        println!("initialize(app_id={app_id}, tt_app_ids={tt_app_ids}, access_token={access_token}, debug={debug})");
        Ok("init-ok".to_string())
    }

    async fn identify(
        &self,
        external_id: &str,
        external_user_name: &str,
        phone_number: &str,
        email: &str,
    ) -> Result<String, SinkError> {
        println!("identify({external_id}, {external_user_name}, {phone_number}, {email})");
        Ok("identify-ok".to_string())
    }

    async fn logout(&self) -> Result<String, SinkError> {
        println!("logout()");
        Ok("logout-ok".to_string())
    }

    async fn flush(&self) -> Result<String, SinkError> {
        println!("flush()");
        Ok("flush-ok".to_string())
    }

    async fn track_event(
        &self,
        name: &str,
        event_id: Option<&str>,
        properties: Option<&Map<String, Value>>,
    ) -> Result<String, SinkError> {
        println!("track_event({name}, id={event_id:?}, props={properties:?})");
        Ok("track-ok".to_string())
    }

    async fn track_content_event(
        &self,
        name: &str,
        properties: &Map<String, Value>,
    ) -> Result<String, SinkError> {
        println!("track_content_event({name}, {properties:?})");
        Ok("track-ok".to_string())
    }

    async fn track_custom_event(
        &self,
        name: &str,
        properties: Option<&Map<String, Value>>,
    ) -> Result<String, SinkError> {
        println!("track_custom_event({name}, {properties:?})");
        Ok("track-ok".to_string())
    }

    async fn track_ad_revenue(
        &self,
        payload: &Map<String, Value>,
        event_id: Option<&str>,
    ) -> Result<String, SinkError> {
        println!("track_ad_revenue({payload:?}, id={event_id:?})");
        Ok("track-ok".to_string())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = TikTokBusinessClient::builder()
        .sink(Arc::new(LoggingSink))
        .build();

    client
        .initialize(InitRequest::new("com.example.shop", ["735123", "735124"], "demo-token"))
        .await?;

    client
        .identify("user-42", "ada", "+15550100", "ada@example.com")
        .await?;

    client
        .track_event(
            StandardEvent::new(StandardEventName::Registration)
                .properties(Properties::new().insert("method", "email")),
        )
        .await?;

    client
        .track_content_event(
            ContentEventName::Purchase,
            ContentEventProperties::new()
                .currency("USD")
                .value(42.0)
                .order_id("ord-1001")
                .contents(vec![
                    ContentItem::new()
                        .content_id("sku-7")
                        .content_name("desk lamp")
                        .price(21.0)
                        .quantity(2),
                ]),
        )
        .await?;

    client.flush().await?;
    client.logout().await?;

    Ok(())
}

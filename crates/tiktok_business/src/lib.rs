#![forbid(unsafe_code)]
//! Async facade over the platform-native TikTok Business events SDK.
//!
//! The facade validates and defaults inputs, then forwards each call to an
//! injected [`NativeSink`] collaborator that owns batching, transport, retry,
//! and on-device persistence. Nothing is queued, retried, or reordered here:
//! every operation is an independent stateless request that settles when the
//! sink settles, with the sink's opaque confirmation token on success.
//!
//! ```rust,no_run
//! use tiktok_business::{InitRequest, TikTokBusinessClient};
//! use tiktok_events::{Properties, StandardEvent, StandardEventName};
//!
//! # async fn run(sink: std::sync::Arc<dyn tiktok_business::NativeSink>) -> Result<(), tiktok_business::TikTokBusinessError> {
//! let client = TikTokBusinessClient::builder().sink(sink).build();
//!
//! client
//!     .initialize(InitRequest::new("com.example.app", "123456", "tt-access-token"))
//!     .await?;
//!
//! client
//!     .track_event(
//!         StandardEvent::new(StandardEventName::Registration)
//!             .properties(Properties::new().insert("method", "email")),
//!     )
//!     .await?;
//! # Ok(()) }
//! ```
//!
//! ## Ordering contract
//!
//! `initialize` must complete before any other operation is meaningful; the
//! native layer rejects out-of-order calls with its own diagnostics. This
//! facade documents that contract but keeps no session state of its own, so
//! callers that need ordering must await each call before issuing the next.
//!
//! ## When no collaborator is linked
//!
//! A client built without a sink uses [`UnlinkedSink`], which fails every
//! operation with [`SinkError::NotLinked`]. The failure is uniform across all
//! eight operations and distinct from every validation diagnostic.

mod client;
mod error;
mod identifier;
mod sink;

pub use client::{InitRequest, TikTokBusinessClient, TikTokBusinessClientBuilder};
pub use error::TikTokBusinessError;
pub use identifier::{validate_tt_app_ids, IdentifierError, NormalizedTtAppIds, TtAppIds};
pub use sink::{NativeSink, SinkError, UnlinkedSink};

#![forbid(unsafe_code)]
//! Typed event taxonomy for the TikTok Business events facade.
//!
//! This crate is intentionally transport-free. It provides:
//! - The closed sets of standard event names, content event names, and the
//!   parameter keys content events accept.
//! - Payload builders (`Properties`, `ContentEventProperties`, `ContentItem`,
//!   `AdRevenuePayload`) that render to `serde_json` maps the facade forwards
//!   verbatim to the native layer.
//!
//! Custom event names and ad-revenue payload keys are deliberately open
//! (plain strings / free-form keys); only the standard and content taxonomies
//! are closed enums.

mod content;
mod properties;
mod standard;

pub use content::{ContentEventName, ContentEventParameter, ContentsParameter};
pub use properties::{
    AdRevenuePayload, ContentEventProperties, ContentItem, Properties, StandardEvent,
};
pub use standard::StandardEventName;

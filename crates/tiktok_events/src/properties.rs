use serde_json::{Map, Value};

use crate::{ContentEventParameter, ContentsParameter, StandardEventName};

/// Free-form property map for standard and custom events.
///
/// Keys are open; values may be any JSON scalar or array. The facade forwards
/// the rendered map verbatim.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
    inner: Map<String, Value>,
}

impl Properties {
    pub fn new() -> Self {
        Self { inner: Map::new() }
    }

    /// Inserts a key/value pair, replacing any previous value for the key.
    pub fn insert(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.inner.insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.inner.get(key)
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.inner
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.inner
    }
}

impl From<Map<String, Value>> for Properties {
    fn from(inner: Map<String, Value>) -> Self {
        Self { inner }
    }
}

impl From<Properties> for Value {
    fn from(props: Properties) -> Self {
        Value::Object(props.inner)
    }
}

/// A standard event record: taxonomy name plus optional id and properties.
///
/// Both optional fields default to absent and are forwarded as absent.
#[derive(Debug, Clone)]
pub struct StandardEvent {
    pub(crate) name: StandardEventName,
    pub(crate) event_id: Option<String>,
    pub(crate) properties: Option<Properties>,
}

impl StandardEvent {
    pub fn new(name: StandardEventName) -> Self {
        Self {
            name,
            event_id: None,
            properties: None,
        }
    }

    /// Opaque deduplication token attached by the caller.
    pub fn event_id(mut self, id: impl Into<String>) -> Self {
        self.event_id = Some(id.into());
        self
    }

    pub fn properties(mut self, properties: Properties) -> Self {
        self.properties = Some(properties);
        self
    }

    pub fn name(&self) -> StandardEventName {
        self.name
    }

    /// Decomposes the record into its name, optional id, and optional
    /// properties, in dispatch order.
    pub fn into_parts(self) -> (StandardEventName, Option<String>, Option<Properties>) {
        (self.name, self.event_id, self.properties)
    }
}

/// One record inside a content event's `contents` list.
///
/// Only the keys in [`ContentsParameter`] can be set; the builder cannot
/// produce a record with a key outside that set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentItem {
    fields: Map<String, Value>,
}

impl ContentItem {
    pub fn new() -> Self {
        Self::default()
    }

    fn set(mut self, key: ContentsParameter, value: impl Into<Value>) -> Self {
        self.fields.insert(key.as_str().to_string(), value.into());
        self
    }

    pub fn content_id(self, id: impl Into<String>) -> Self {
        self.set(ContentsParameter::ContentId, id.into())
    }

    pub fn content_category(self, category: impl Into<String>) -> Self {
        self.set(ContentsParameter::ContentCategory, category.into())
    }

    pub fn brand(self, brand: impl Into<String>) -> Self {
        self.set(ContentsParameter::Brand, brand.into())
    }

    pub fn price(self, price: f64) -> Self {
        self.set(ContentsParameter::Price, price)
    }

    pub fn quantity(self, quantity: u64) -> Self {
        self.set(ContentsParameter::Quantity, quantity)
    }

    pub fn content_name(self, name: impl Into<String>) -> Self {
        self.set(ContentsParameter::ContentName, name.into())
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

/// Property map for a content event, constrained to [`ContentEventParameter`]
/// keys. The `contents` key holds an ordered list of [`ContentItem`] records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentEventProperties {
    fields: Map<String, Value>,
}

impl ContentEventProperties {
    pub fn new() -> Self {
        Self::default()
    }

    fn set(mut self, key: ContentEventParameter, value: impl Into<Value>) -> Self {
        self.fields.insert(key.as_str().to_string(), value.into());
        self
    }

    pub fn content_type(self, content_type: impl Into<String>) -> Self {
        self.set(ContentEventParameter::ContentType, content_type.into())
    }

    pub fn content_id(self, id: impl Into<String>) -> Self {
        self.set(ContentEventParameter::ContentId, id.into())
    }

    pub fn description(self, description: impl Into<String>) -> Self {
        self.set(ContentEventParameter::Description, description.into())
    }

    /// ISO 4217 code, e.g. `"USD"`. Not validated here; the collector owns
    /// the accepted currency list.
    pub fn currency(self, currency: impl Into<String>) -> Self {
        self.set(ContentEventParameter::Currency, currency.into())
    }

    pub fn value(self, value: f64) -> Self {
        self.set(ContentEventParameter::Value, value)
    }

    pub fn order_id(self, order_id: impl Into<String>) -> Self {
        self.set(ContentEventParameter::OrderId, order_id.into())
    }

    /// Replaces the `contents` list, preserving item order.
    pub fn contents(self, items: Vec<ContentItem>) -> Self {
        let rendered: Vec<Value> = items.into_iter().map(ContentItem::into_value).collect();
        self.set(ContentEventParameter::Contents, rendered)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }
}

/// Ad revenue payload. The named setters cover the recommended keys; callers
/// may attach arbitrary additional scalar keys with [`AdRevenuePayload::extra`].
#[derive(Debug, Clone, Default)]
pub struct AdRevenuePayload {
    fields: Map<String, Value>,
    pub(crate) event_id: Option<String>,
}

impl AdRevenuePayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn revenue(mut self, revenue: f64) -> Self {
        self.fields.insert("revenue".to_string(), revenue.into());
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.fields.insert("currency".to_string(), currency.into().into());
        self
    }

    pub fn ad_network(mut self, network: impl Into<String>) -> Self {
        self.fields.insert("adNetwork".to_string(), network.into().into());
        self
    }

    pub fn ad_unit(mut self, unit: impl Into<String>) -> Self {
        self.fields.insert("adUnit".to_string(), unit.into().into());
        self
    }

    pub fn ad_format(mut self, format: impl Into<String>) -> Self {
        self.fields.insert("adFormat".to_string(), format.into().into());
        self
    }

    pub fn placement(mut self, placement: impl Into<String>) -> Self {
        self.fields.insert("placement".to_string(), placement.into().into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.fields.insert("country".to_string(), country.into().into());
        self
    }

    /// Precision label reported by the mediation platform, e.g. `"exact"` or
    /// `"estimated"`.
    pub fn precision(mut self, precision: impl Into<String>) -> Self {
        self.fields.insert("precision".to_string(), precision.into().into());
        self
    }

    /// Arbitrary additional key. Later writes win over earlier ones,
    /// including the named setters.
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Optional deduplication token, absent by default.
    pub fn event_id(mut self, id: impl Into<String>) -> Self {
        self.event_id = Some(id.into());
        self
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Decomposes the payload into the key map and the optional event id.
    pub fn into_parts(self) -> (Map<String, Value>, Option<String>) {
        (self.fields, self.event_id)
    }
}

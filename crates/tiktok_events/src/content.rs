use std::fmt;

use serde::Serialize;

/// Closed set of content (commerce) event names.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub enum ContentEventName {
    AddToCart,
    AddToWishlist,
    Checkout,
    Purchase,
    ViewContent,
}

impl ContentEventName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentEventName::AddToCart => "AddToCart",
            ContentEventName::AddToWishlist => "AddToWishlist",
            ContentEventName::Checkout => "Checkout",
            ContentEventName::Purchase => "Purchase",
            ContentEventName::ViewContent => "ViewContent",
        }
    }
}

impl fmt::Display for ContentEventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameter keys a content event payload may carry.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ContentEventParameter {
    ContentType,
    ContentId,
    Description,
    Currency,
    Value,
    Contents,
    OrderId,
}

impl ContentEventParameter {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentEventParameter::ContentType => "content_type",
            ContentEventParameter::ContentId => "content_id",
            ContentEventParameter::Description => "description",
            ContentEventParameter::Currency => "currency",
            ContentEventParameter::Value => "value",
            ContentEventParameter::Contents => "contents",
            ContentEventParameter::OrderId => "order_id",
        }
    }
}

/// Parameter keys each record inside a `contents` list may carry.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ContentsParameter {
    ContentId,
    ContentCategory,
    Brand,
    Price,
    Quantity,
    ContentName,
}

impl ContentsParameter {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentsParameter::ContentId => "content_id",
            ContentsParameter::ContentCategory => "content_category",
            ContentsParameter::Brand => "brand",
            ContentsParameter::Price => "price",
            ContentsParameter::Quantity => "quantity",
            ContentsParameter::ContentName => "content_name",
        }
    }
}

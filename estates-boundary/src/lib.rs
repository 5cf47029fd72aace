use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

/// Opaque identifier as delivered by the backend.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(untagged)]
pub enum PropertyId {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
}

/// A listing record.
///
/// No field is mandatory. The coordinates are
/// delivered either as `lat`/`lng` or as
/// `latitude`/`longitude`, the area either in
/// square meters (`area`) or square feet (`area_sqft`).
#[rustfmt::skip]
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Property {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id        : Option<PropertyId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title     : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address   : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city      : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state     : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price     : Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms  : Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms : Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area      : Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_sqft : Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images    : Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat       : Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng       : Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude  : Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude : Option<f64>,
}

/// Response of the listing endpoints.
///
/// `GET /properties` responds with a bare array,
/// `GET /api/properties` wraps it into `{ "items": [...] }`.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(untagged)]
pub enum PropertyList {
    Items(Vec<Property>),
    Wrapped {
        #[serde(default)]
        items: Option<Vec<Property>>,
    },
}

impl PropertyList {
    #[must_use]
    pub fn into_items(self) -> Vec<Property> {
        match self {
            Self::Items(items) => items,
            Self::Wrapped { items } => items.unwrap_or_default(),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, PartialEq, Eq, thiserror::Error)
)]
#[cfg_attr(feature = "extra-derive", error("{message} (HTTP status {http_status})"))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}

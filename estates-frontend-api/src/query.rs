use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Filters of the property search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyQuery {
    pub text: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub bedrooms: Option<u32>,
}

impl PropertyQuery {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let Self {
            text,
            min_price,
            max_price,
            bedrooms,
        } = self;
        text.as_deref().map_or(true, |t| t.trim().is_empty())
            && min_price.is_none()
            && max_price.is_none()
            && bedrooms.is_none()
    }

    /// Build a query from the raw values of the search form.
    ///
    /// Values that are not valid non-negative numbers are ignored.
    #[must_use]
    pub fn from_form(text: &str, min_price: &str, max_price: &str, bedrooms: &str) -> Self {
        let text = text.trim();
        Self {
            text: (!text.is_empty()).then(|| text.to_string()),
            min_price: parse_amount("min_price", min_price),
            max_price: parse_amount("max_price", max_price),
            bedrooms: parse_field("bedrooms", bedrooms),
        }
    }

    /// The URL query string without a leading `?`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let Self {
            text,
            min_price,
            max_price,
            bedrooms,
        } = self;
        let mut params = vec![];
        if let Some(text) = text.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            let encoded_text = utf8_percent_encode(text, NON_ALPHANUMERIC);
            params.push(("q", encoded_text.to_string()));
        }
        if let Some(min_price) = min_price {
            params.push(("min_price", min_price.to_string()));
        }
        if let Some(max_price) = max_price {
            params.push(("max_price", max_price.to_string()));
        }
        if let Some(bedrooms) = bedrooms {
            params.push(("bedrooms", bedrooms.to_string()));
        }
        params
            .into_iter()
            .map(|(key, value)| [key, &value].join("="))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn parse_field<T: std::str::FromStr>(name: &str, value: &str) -> Option<T> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("Ignore invalid {name}: {value:?}");
            None
        }
    }
}

fn parse_amount(name: &str, value: &str) -> Option<f64> {
    parse_field::<f64>(name, value).filter(|v| {
        let valid = v.is_finite() && *v >= 0.0;
        if !valid {
            log::warn!("Ignore invalid {name}: {v}");
        }
        valid
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query() {
        let query = PropertyQuery::default();
        assert!(query.is_empty());
        assert_eq!(query.to_query_string(), "");
        assert!(PropertyQuery::from_form(" ", "", "", "").is_empty());
    }

    #[test]
    fn query_string_in_fixed_order() {
        let query = PropertyQuery {
            text: Some("loft".into()),
            min_price: Some(250_000.0),
            max_price: Some(1_500_000.0),
            bedrooms: Some(2),
        };
        assert_eq!(
            query.to_query_string(),
            "q=loft&min_price=250000&max_price=1500000&bedrooms=2"
        );
    }

    #[test]
    fn omit_missing_filters() {
        let query = PropertyQuery {
            bedrooms: Some(3),
            ..Default::default()
        };
        assert!(!query.is_empty());
        assert_eq!(query.to_query_string(), "bedrooms=3");
    }

    #[test]
    fn encode_text() {
        let query = PropertyQuery::from_form("  5th Ave & Park ", "", "", "");
        assert_eq!(query.text.as_deref(), Some("5th Ave & Park"));
        assert_eq!(query.to_query_string(), "q=5th%20Ave%20%26%20Park");
    }

    #[test]
    fn parse_form_values() {
        let query = PropertyQuery::from_form("", "100000", " 250000.5 ", "4");
        assert_eq!(
            query,
            PropertyQuery {
                text: None,
                min_price: Some(100_000.0),
                max_price: Some(250_000.5),
                bedrooms: Some(4),
            }
        );
    }

    #[test]
    fn ignore_invalid_form_values() {
        let query = PropertyQuery::from_form("", "-5", "lots", "2.5");
        assert!(query.is_empty());
        let query = PropertyQuery::from_form("", "NaN", "inf", "-1");
        assert!(query.is_empty());
    }
}

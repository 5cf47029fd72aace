use gloo_net::http::Request;

use estates_boundary::PropertyList;
use estates_entities::property::Property;

use crate::{into_json, PropertyQuery, Result};

/// Public listings API
#[derive(Debug, Clone, Copy)]
pub struct PublicApi {
    url: &'static str,
}

impl PublicApi {
    #[must_use]
    pub fn new(url: &'static str) -> Self {
        Self {
            url: url.trim_end_matches('/'),
        }
    }

    #[must_use]
    pub const fn url(&self) -> &'static str {
        self.url
    }

    #[must_use]
    pub fn search_properties_url(&self, query: &PropertyQuery) -> String {
        let url = format!("{}/properties", self.url);
        if query.is_empty() {
            url
        } else {
            format!("{url}?{}", query.to_query_string())
        }
    }

    #[must_use]
    pub fn featured_properties_url(&self) -> String {
        format!("{}/api/properties", self.url)
    }

    pub async fn search_properties(&self, query: &PropertyQuery) -> Result<Vec<Property>> {
        let url = self.search_properties_url(query);
        log::debug!("Search properties: {url}");
        let response = Request::get(&url).send().await?;
        let list: PropertyList = into_json(response).await?;
        Ok(list.into_items().into_iter().map(Property::from).collect())
    }

    pub async fn featured_properties(&self) -> Result<Vec<Property>> {
        let url = self.featured_properties_url();
        log::debug!("Fetch featured properties: {url}");
        let response = Request::get(&url).send().await?;
        let list: PropertyList = into_json(response).await?;
        Ok(list.into_items().into_iter().map(Property::from).collect())
    }
}

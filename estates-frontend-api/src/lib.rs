use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod public;
mod query;
mod search;

pub use self::{public::*, query::*, search::*};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("{0}")]
    Api(#[from] estates_boundary::Error),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Fetch(format!("Invalid JSON payload: {err}"))
    }
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    } else {
        let http_status = response.status();
        let message = response.status_text();
        let err = response
            .json::<estates_boundary::Error>()
            .await
            .unwrap_or(estates_boundary::Error {
                http_status,
                message,
            });
        Err(err.into())
    }
}

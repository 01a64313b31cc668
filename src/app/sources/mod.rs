pub mod headhunter;
pub mod superjob;

pub use headhunter::HeadHunterSource;
pub use superjob::SuperJobSource;

use crate::utils::error::{Result, StatsError};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub(crate) fn build_client(timeout_seconds: Option<u64>) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout_seconds {
        builder = builder.timeout(Duration::from_secs(timeout));
    }
    Ok(builder.build()?)
}

/// Sends the request and decodes a JSON body, sorting failures into
/// transient (connect/timeout) and protocol faults.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    source_name: &str,
    endpoint: &str,
    request: RequestBuilder,
) -> Result<T> {
    let response = request
        .send()
        .await
        .map_err(|e| StatsError::from_transport(endpoint, e))?;

    let status = response.status();
    tracing::debug!("{} response status: {}", source_name, status);

    if !status.is_success() {
        return Err(StatsError::HttpStatusError {
            status: status.as_u16(),
            url: response.url().to_string(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| StatsError::from_transport(endpoint, e))?;

    serde_json::from_str(&body).map_err(|e| StatsError::ResponseFormatError {
        source_name: source_name.to_string(),
        message: e.to_string(),
    })
}

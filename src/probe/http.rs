use std::time::Duration;

use reqwest::redirect::Policy;
use reqwest::{Client as HttpClient, StatusCode};

use super::Error;
use crate::cancellation::Cancellation;

/// Builds the client used for every HTTP check.
///
/// Redirects are never followed: a `3xx` answer is reported as it is.
///
/// # Errors
///
/// Will return an error if the underlying TLS backend cannot be initialized.
pub fn client(timeout: Duration) -> Result<HttpClient, reqwest::Error> {
    HttpClient::builder().timeout(timeout).redirect(Policy::none()).build()
}

/// Sends a single `GET` request and returns the response status code.
///
/// The request is abandoned as soon as `cancellation` is cancelled.
///
/// # Errors
///
/// Will return an error if the request cannot be built, if it fails at the
/// transport level (including the timeout), or if it is cancelled.
pub async fn get(client: &HttpClient, url: &str, cancellation: &Cancellation) -> Result<StatusCode, Error> {
    let request = client
        .get(url)
        .build()
        .map_err(|e| Error::RequestBuilding { err: e.into() })?;

    tracing::debug!("GET {url}");

    tokio::select! {
        biased;
        () = cancellation.cancelled() => {
            tracing::debug!("GET {url} cancelled");
            Err(Error::Cancelled)
        }
        response = client.execute(request) => {
            let response = response.map_err(|e| Error::Http { err: e.into() })?;

            tracing::debug!("GET {url} answered {}", response.status());

            Ok(response.status())
        }
    }
}

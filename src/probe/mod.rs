//! Probing a single target.
//!
//! A probe runs up to two checks, in this order:
//!
//! 1. A TCP connection to the explicit port of the URL, when one is detected
//!    (see [`address::get_port`]).
//! 2. A single HTTP `GET` when the URL scheme is `http` or `https`.
//!
//! A target that needs neither check (for example `cache=redis` with no port)
//! is reported as reachable.
//!
//! HTTP answers outside `[200, 300)` are reported with an `HTTP <code>`
//! status but are NOT errors: only unreachable ports, transport failures,
//! invalid URLs and cancellation make a target fail.
pub mod address;
pub mod http;
pub mod tcp;

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::{Client as HttpClient, StatusCode};
use serde::Serialize;
use thiserror::Error;

use crate::cancellation::Cancellation;
use crate::target::Status;

#[derive(Error, Debug, Clone, Serialize)]
#[serde(into = "String")]
pub enum Error {
    #[error("Invalid URL")]
    InvalidUrl,

    #[error("Request creation error: {err}")]
    RequestBuilding { err: Arc<reqwest::Error> },

    #[error("Port {port} unreachable: {err}")]
    PortUnreachable { port: String, err: Arc<std::io::Error> },

    #[error("HTTP error: {err}")]
    Http { err: Arc<reqwest::Error> },

    #[error("context cancelled")]
    Cancelled,
}

impl From<Error> for String {
    fn from(value: Error) -> Self {
        value.to_string()
    }
}

impl Error {
    /// The status reported for a target that failed with this error.
    #[must_use]
    pub fn status(&self) -> Status {
        match self {
            Error::InvalidUrl | Error::RequestBuilding { .. } => Status::Error,
            Error::PortUnreachable { .. } | Error::Http { .. } => Status::Fail,
            Error::Cancelled => Status::Pending,
        }
    }
}

/// The result of probing one URL.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub status: Status,
    pub latency: Duration,
    pub error: Option<Error>,
}

impl Outcome {
    fn reached(status: Status, latency: Duration) -> Self {
        Self {
            status,
            latency,
            error: None,
        }
    }

    fn failed(err: Error) -> Self {
        Self {
            status: err.status(),
            latency: Duration::ZERO,
            error: Some(err),
        }
    }
}

/// Probes targets with a shared HTTP client.
#[derive(Debug, Clone)]
pub struct Prober {
    client: HttpClient,
    timeout: Duration,
}

impl Prober {
    /// # Errors
    ///
    /// Will return an error if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: http::client(timeout)?,
            timeout,
        })
    }

    /// Probes one URL.
    ///
    /// The latency covers every check run for the URL. It is zero when the
    /// probe fails.
    pub async fn probe(&self, url: &str, cancellation: &Cancellation) -> Outcome {
        let start = Instant::now();

        if cancellation.is_cancelled() {
            return Outcome::failed(Error::Cancelled);
        }

        if address::parse_host(url).is_empty() {
            return Outcome::failed(Error::InvalidUrl);
        }

        if let Some(port) = address::get_port(url) {
            if let Err(err) = tcp::connect(&address::socket_address(address::authority(url), port), self.timeout).await {
                return Outcome::failed(Error::PortUnreachable {
                    port: port.to_owned(),
                    err: err.into(),
                });
            }
        }

        if address::is_http(url) {
            return match http::get(&self.client, url, cancellation).await {
                Ok(code) => Outcome::reached(status_of(code), start.elapsed()),
                Err(err) => Outcome::failed(err),
            };
        }

        Outcome::reached(Status::Ok, start.elapsed())
    }
}

fn status_of(code: StatusCode) -> Status {
    if code.is_success() {
        Status::Ok
    } else {
        Status::Http(code.as_u16())
    }
}

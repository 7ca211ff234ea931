//! Targets given on the command line.
//!
//! Every argument has the form `name=url`. Only the first `=` separates the
//! name from the URL, so the URL itself may contain `=` characters:
//!
//! ```text
//! search=http://localhost:8080/search?q=rust
//! ```
use std::time::Duration;

use derive_more::Display;
use serde::Serialize;

use crate::probe::{Error, Outcome};

/// The status of a [`Target`] as shown in the report.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// Not probed yet, or the probe was cancelled.
    #[default]
    #[display("")]
    Pending,
    #[display("OK")]
    Ok,
    /// The HTTP endpoint answered with a code outside `[200, 300)`.
    #[display("HTTP {_0}")]
    Http(u16),
    #[display("FAIL")]
    Fail,
    #[display("ERROR")]
    Error,
}

impl Serialize for Status {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// One named URL to be probed.
#[derive(Debug, Clone, Default)]
pub struct Target {
    pub name: String,
    pub url: String,
    pub status: Status,
    pub latency: Duration,
    /// `None` means the target is reachable.
    pub error: Option<Error>,
}

impl Target {
    /// Builds a target from a `name=url` argument.
    ///
    /// An argument without `=` yields a target with an empty name and URL.
    /// It is not rejected here: probing it later fails with an invalid URL.
    #[must_use]
    pub fn parse(arg: &str) -> Self {
        match arg.split_once('=') {
            Some((name, url)) => Self {
                name: name.to_owned(),
                url: url.to_owned(),
                ..Self::default()
            },
            None => Self::default(),
        }
    }

    /// Records the outcome of probing this target.
    pub fn record(&mut self, outcome: Outcome) {
        self.status = outcome.status;
        self.latency = outcome.latency;
        self.error = outcome.error;
    }

    #[must_use]
    pub fn is_reachable(&self) -> bool {
        self.error.is_none()
    }
}

//! API connectivity tester.
//!
//! Checks that a list of named services are reachable. Every service is
//! given on the command line as a `name=url` pair:
//!
//! ```text
//! apiconnector api=http://localhost:8080/health db=localhost:5432
//! ```
//!
//! For each target the tool:
//!
//! 1. Dials a TCP connection when the URL carries an explicit port.
//! 2. Sends a single HTTP `GET` (redirects are not followed) when the URL
//!    scheme is `http` or `https`.
//!
//! Targets are probed one after the other, in the order they were given.
//! The output is one line per target plus a summary:
//!
//! ```text
//! === API CONNECTIVITY TEST ===
//!
//! api                  OK (12ms)
//! db                   FAIL (Port 5432 unreachable: Connection refused (os error 111))
//!
//! Summary: 1 OK, 1 FAIL
//! ```
//!
//! The process exits with `0` when every probe succeeded and `1` otherwise.
//!
//! Pressing `Ctrl+C` (or sending `SIGTERM`) cancels the run: the in-flight
//! HTTP request is abandoned and the remaining targets are not probed.
pub mod app;
pub mod bootstrap;
pub mod cancellation;
pub mod console;
pub mod probe;
pub mod report;
pub mod runner;
pub mod signals;
pub mod target;

/// Timeout used for every network step of a probe unless overridden.
pub const DEFAULT_TIMEOUT_SEC: u64 = 5;

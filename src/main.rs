//! Checks that a list of named services are reachable.
//!
//! ```text
//! cargo run -- api=http://localhost:8080/health db=postgres://localhost:5432
//! ```
use std::process::ExitCode;

use apiconnector::app;

#[tokio::main]
async fn main() -> ExitCode {
    app::run().await
}

//! Rendering of the connectivity report.
use std::time::Duration;

use serde::Serialize;

use crate::console::printer::Palette;
use crate::probe::Error;
use crate::target::{Status, Target};

pub const HEADER: &str = "=== API CONNECTIVITY TEST ===";

/// Width the service names are padded to.
pub const NAME_WIDTH: usize = 20;

/// Formats a latency as whole microseconds below one millisecond and as
/// whole milliseconds otherwise.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    if duration < Duration::from_millis(1) {
        format!("{}µs", duration.as_micros())
    } else {
        format!("{}ms", duration.as_millis())
    }
}

/// The report line of a probed target.
#[must_use]
pub fn target_line(target: &Target, palette: Palette) -> String {
    match &target.error {
        None => format!(
            "{:<width$} {} ({})",
            target.name,
            palette.green("OK"),
            format_duration(target.latency),
            width = NAME_WIDTH
        ),
        Some(err) => format!("{:<width$} {} ({err})", target.name, palette.red("FAIL"), width = NAME_WIDTH),
    }
}

#[must_use]
pub fn summary_line(ok: usize, fail: usize) -> String {
    format!("Summary: {ok} OK, {fail} FAIL")
}

/// Serializable view of a [`Target`].
#[derive(Serialize, Debug)]
pub struct TargetOutput<'a> {
    pub service: &'a str,
    pub url: &'a str,
    pub status: Status,
    pub latency_ms: u64,
    pub error: Option<&'a Error>,
}

impl<'a> From<&'a Target> for TargetOutput<'a> {
    fn from(target: &'a Target) -> Self {
        Self {
            service: &target.name,
            url: &target.url,
            status: target.status,
            latency_ms: u64::try_from(target.latency.as_millis()).unwrap_or(u64::MAX),
            error: target.error.as_ref(),
        }
    }
}

/// Renders the targets as a pretty JSON array.
///
/// # Errors
///
/// Will return an error if `serde_json` fails to serialize the report.
pub fn to_json(targets: &[Target]) -> Result<String, serde_json::Error> {
    let output: Vec<TargetOutput<'_>> = targets.iter().map(TargetOutput::from).collect();

    serde_json::to_string_pretty(&output)
}

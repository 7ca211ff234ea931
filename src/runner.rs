//! Sequential run over all the targets.
//!
//! Targets are probed one after the other, in the order they were given.
//! The cancellation token is checked before every target: once it is
//! cancelled the run stops and the remaining targets keep their
//! [`Status::Pending`](crate::target::Status::Pending) status.
use thiserror::Error;

use crate::cancellation::Cancellation;
use crate::console::printer::{Palette, Printer};
use crate::probe::Prober;
use crate::report;
use crate::target::Target;

#[derive(Error, Debug)]
pub enum Error {
    #[error("context cancelled")]
    Cancelled,

    #[error("{count} connection failures")]
    Failures { count: usize },

    #[error("failed to render the JSON report: {err}")]
    JsonReport { err: serde_json::Error },
}

/// How the results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// One line per target while probing, then a summary line.
    #[default]
    Text,
    /// A single JSON array once every target has been probed.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub ok: usize,
    pub fail: usize,
}

pub struct Runner<'a, P: Printer> {
    prober: &'a Prober,
    printer: &'a P,
    palette: Palette,
    format: Format,
}

impl<'a, P: Printer> Runner<'a, P> {
    #[must_use]
    pub fn new(prober: &'a Prober, printer: &'a P, palette: Palette, format: Format) -> Self {
        Self {
            prober,
            printer,
            palette,
            format,
        }
    }

    /// Probes every target and prints the report.
    ///
    /// Each target is updated in place with the outcome of its probe.
    ///
    /// # Errors
    ///
    /// Will return an error if the run is cancelled, if at least one target
    /// is unreachable, or if the JSON report cannot be rendered.
    pub async fn run(&self, targets: &mut [Target], cancellation: &Cancellation) -> Result<Summary, Error> {
        tracing::info!("Running checks for {} targets ...", targets.len());

        if self.format == Format::Text {
            self.printer.println(&self.palette.cyan(report::HEADER));
            self.printer.println("");
        }

        let mut summary = Summary::default();

        for target in targets.iter_mut() {
            if cancellation.is_cancelled() {
                tracing::info!("run cancelled");
                return Err(Error::Cancelled);
            }

            tracing::debug!("probing {} at {}", target.name, target.url);

            let outcome = self.prober.probe(&target.url, cancellation).await;
            target.record(outcome);

            if target.is_reachable() {
                summary.ok += 1;
            } else {
                summary.fail += 1;
            }

            if self.format == Format::Text {
                self.printer.println(&report::target_line(target, self.palette));
            }
        }

        match self.format {
            Format::Text => {
                self.printer.println("");
                self.printer.println(&report::summary_line(summary.ok, summary.fail));
            }
            Format::Json => {
                let json = report::to_json(targets).map_err(|err| Error::JsonReport { err })?;
                self.printer.println(&json);
            }
        }

        if summary.fail > 0 {
            return Err(Error::Failures { count: summary.fail });
        }

        Ok(summary)
    }
}

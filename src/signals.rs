//! This module contains functions to handle signals.
use tracing::{error, info};

use crate::cancellation::Cancellation;
use crate::console::printer::Printer;

/// Message shown to the user when the run is interrupted.
pub const SHUTDOWN_MESSAGE: &str = "\nReceived shutdown signal, cancelling...";

/// Resolves on `ctrl_c` or the `terminate` signal.
///
/// If a handler cannot be installed the error is logged and that signal is
/// simply never observed.
pub async fn global_shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!("failed to install terminate signal handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {}
    }
}

/// Spawns the single listener that cancels `cancellation` when the process
/// receives a shutdown signal.
///
/// The listener lives until the signal arrives or the runtime shuts down.
pub fn cancel_on_shutdown<P>(cancellation: Cancellation, printer: P) -> tokio::task::JoinHandle<()>
where
    P: Printer + Send + 'static,
{
    tokio::spawn(async move {
        global_shutdown_signal().await;

        info!("global shutdown signal processed");

        printer.println(SHUTDOWN_MESSAGE);

        cancellation.cancel();
    })
}

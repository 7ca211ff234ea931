use std::io;
use std::time::Duration;

use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::Instrument as _;

/// Opens a TCP connection to `addr` and closes it right away.
///
/// No data is exchanged.
///
/// # Errors
///
/// Will return an error if the connection is refused, the address cannot be
/// resolved, or the connection is not established within `connect_timeout`.
pub async fn connect(addr: &str, connect_timeout: Duration) -> io::Result<()> {
    let span = tracing::debug_span!("tcp_connect", %addr);

    match timeout(connect_timeout, TcpStream::connect(addr)).instrument(span).await {
        Ok(Ok(_stream)) => {
            tracing::debug!(%addr, "tcp connect OK");
            Ok(())
        }
        Ok(Err(err)) => {
            tracing::warn!(%addr, error = %err, "tcp connect failed");
            Err(err)
        }
        Err(_) => {
            tracing::warn!(%addr, "tcp connect timed out");
            Err(io::Error::new(
                io::ErrorKind::TimedOut,
                format!("i/o timeout after {connect_timeout:?}"),
            ))
        }
    }
}

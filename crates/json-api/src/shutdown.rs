//! Stop the server on Ctrl+C or SIGTERM.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    io,
    time::Duration,
};

use salvo::server::ServerHandle;
use tokio::signal;
use tracing::{error, info};

/// Signal that asked the server to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StopSignal {
    Interrupt,
    Terminate,
}

impl Display for StopSignal {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Interrupt => "SIGINT",
            Self::Terminate => "SIGTERM",
        })
    }
}

#[cfg(unix)]
async fn next_stop_signal() -> io::Result<StopSignal> {
    let mut terminate = signal::unix::signal(signal::unix::SignalKind::terminate())?;

    tokio::select! {
        result = signal::ctrl_c() => result.map(|()| StopSignal::Interrupt),
        _ = terminate.recv() => Ok(StopSignal::Terminate),
    }
}

#[cfg(not(unix))]
async fn next_stop_signal() -> io::Result<StopSignal> {
    signal::ctrl_c().await.map(|()| StopSignal::Interrupt)
}

/// Wait for a stop signal, then let in-flight order requests finish within `grace`.
pub(crate) async fn drain_on_signal(handle: ServerHandle, grace: Duration) {
    match next_stop_signal().await {
        Ok(signal) => {
            info!(%signal, grace_seconds = grace.as_secs(), "draining orders-json");

            handle.stop_graceful(grace);
        }
        Err(source) => error!("failed to listen for shutdown signal: {source}"),
    }
}

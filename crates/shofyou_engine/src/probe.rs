use std::io;
use std::thread;
use std::time::Duration;

use shell_logging::{shell_debug, shell_info};
use thiserror::Error;
use tokio::net::TcpStream;
use tokio_util::sync::CancellationToken;

use crate::ConnectivityMonitor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSettings {
    pub host: String,
    pub port: u16,
    pub interval: Duration,
    pub connect_timeout: Duration,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            host: "shofyou.com".to_string(),
            port: 443,
            interval: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("connect to {target} timed out")]
    Timeout { target: String },
    #[error("connect to {target} failed: {source}")]
    Connect {
        target: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to start probe runtime: {0}")]
    Runtime(#[source] io::Error),
}

/// One TCP connect attempt against the probe target.
pub async fn probe_once(settings: &ProbeSettings) -> Result<(), ProbeError> {
    let target = format!("{}:{}", settings.host, settings.port);
    match tokio::time::timeout(settings.connect_timeout, TcpStream::connect(target.as_str())).await
    {
        Ok(Ok(_stream)) => Ok(()),
        Ok(Err(source)) => Err(ProbeError::Connect { target, source }),
        Err(_) => Err(ProbeError::Timeout { target }),
    }
}

/// Reachability source for hosts without a native signal: periodically
/// connects to the probe target and reports into a [`ConnectivityMonitor`].
/// Stops on [`TcpReachabilityProbe::stop`] or drop.
pub struct TcpReachabilityProbe {
    cancel: CancellationToken,
    thread: Option<thread::JoinHandle<()>>,
}

impl TcpReachabilityProbe {
    pub fn spawn(settings: ProbeSettings, monitor: ConnectivityMonitor) -> Result<Self, ProbeError> {
        let runtime = tokio::runtime::Runtime::new().map_err(ProbeError::Runtime)?;
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        shell_info!(
            "Starting reachability probe against {}:{} every {:?}",
            settings.host,
            settings.port,
            settings.interval
        );
        let thread = thread::spawn(move || runtime.block_on(run_probe(settings, monitor, token)));
        Ok(Self {
            cancel,
            thread: Some(thread),
        })
    }

    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.cancel.cancel();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for TcpReachabilityProbe {
    fn drop(&mut self) {
        self.shutdown();
    }
}

async fn run_probe(settings: ProbeSettings, monitor: ConnectivityMonitor, cancel: CancellationToken) {
    loop {
        let result = tokio::select! {
            _ = cancel.cancelled() => return,
            result = probe_once(&settings) => result,
        };
        match result {
            Ok(()) => monitor.report(Some(true)),
            Err(err) => {
                shell_debug!("Reachability probe failed: {}", err);
                monitor.report(Some(false));
            }
        }
        tokio::select! {
            _ = cancel.cancelled() => return,
            _ = tokio::time::sleep(settings.interval) => {}
        }
    }
}

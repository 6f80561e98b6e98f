use std::net::TcpListener;
use std::time::{Duration, Instant};

use shofyou_engine::{probe_once, ConnectivityMonitor, ProbeError, ProbeSettings, TcpReachabilityProbe};

#[test]
fn unknown_reachability_reads_as_connected() {
    let monitor = ConnectivityMonitor::new();
    assert_eq!(monitor.reachability(), None);
    assert!(monitor.currently_connected());
}

#[test]
fn subscribers_hear_transitions_only() {
    let monitor = ConnectivityMonitor::new();
    let subscription = monitor.subscribe();

    // None -> Some(true) keeps the effective state.
    monitor.report(Some(true));
    assert_eq!(subscription.try_recv(), None);

    monitor.report(Some(false));
    monitor.report(Some(false));
    assert_eq!(subscription.try_recv(), Some(false));
    assert_eq!(subscription.try_recv(), None);
    assert!(!monitor.currently_connected());

    // Indeterminate again counts as connected.
    monitor.report(None);
    assert_eq!(subscription.try_recv(), Some(true));
}

#[test]
fn latest_skips_stale_notifications() {
    let monitor = ConnectivityMonitor::new();
    let subscription = monitor.subscribe();

    monitor.report(Some(false));
    monitor.report(Some(true));
    monitor.report(Some(false));

    assert_eq!(subscription.latest(), Some(false));
    assert_eq!(subscription.latest(), None);
}

#[test]
fn dropping_subscription_deregisters() {
    let monitor = ConnectivityMonitor::new();
    let first = monitor.subscribe();
    let second = monitor.subscribe();
    assert_eq!(monitor.subscriber_count(), 2);

    first.remove();
    assert_eq!(monitor.subscriber_count(), 1);
    drop(second);
    assert_eq!(monitor.subscriber_count(), 0);

    monitor.report(Some(false));
    assert!(!monitor.currently_connected());
}

fn local_settings(port: u16) -> ProbeSettings {
    ProbeSettings {
        host: "127.0.0.1".to_string(),
        port,
        interval: Duration::from_millis(20),
        connect_timeout: Duration::from_secs(1),
    }
}

fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

#[tokio::test]
async fn probe_succeeds_against_listening_port() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    probe_once(&local_settings(port)).await.expect("reachable");
}

#[tokio::test]
async fn probe_fails_against_closed_port() {
    let port = closed_port();
    let err = probe_once(&local_settings(port)).await.unwrap_err();
    assert!(matches!(err, ProbeError::Connect { .. }));
}

#[test]
fn background_probe_reports_into_monitor() {
    let port = closed_port();
    let monitor = ConnectivityMonitor::new();
    let probe = TcpReachabilityProbe::spawn(local_settings(port), monitor.clone()).unwrap();

    let deadline = Instant::now() + Duration::from_secs(5);
    while monitor.reachability().is_none() && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(10));
    }
    probe.stop();

    assert_eq!(monitor.reachability(), Some(false));
    assert!(!monitor.currently_connected());
}

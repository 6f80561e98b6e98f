use std::sync::{mpsc, Arc, Mutex, MutexGuard};

use shell_logging::shell_info;

#[derive(Default)]
struct MonitorInner {
    reachable: Option<bool>,
    next_id: u64,
    subscribers: Vec<(u64, mpsc::Sender<bool>)>,
}

impl MonitorInner {
    fn effective(&self) -> bool {
        // Indeterminate reachability must not flash the offline screen.
        self.reachable.unwrap_or(true)
    }
}

/// Mirrors the platform reachability signal. Clones share state, so the
/// platform side and the shell can each hold one.
#[derive(Clone, Default)]
pub struct ConnectivityMonitor {
    inner: Arc<Mutex<MonitorInner>>,
}

impl ConnectivityMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn currently_connected(&self) -> bool {
        self.lock().effective()
    }

    /// Raw last report; `None` until the platform has said anything.
    pub fn reachability(&self) -> Option<bool> {
        self.lock().reachable
    }

    /// Records a platform report and notifies subscribers if the effective
    /// state flipped.
    pub fn report(&self, reachable: Option<bool>) {
        let mut inner = self.lock();
        let before = inner.effective();
        inner.reachable = reachable;
        let after = inner.effective();
        if before != after {
            shell_info!("Connectivity changed: connected={}", after);
            inner.subscribers.retain(|(_, tx)| tx.send(after).is_ok());
        }
    }

    pub fn subscribe(&self) -> ConnectivitySubscription {
        let (tx, rx) = mpsc::channel();
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, tx));
        ConnectivitySubscription {
            id,
            monitor: self.clone(),
            rx,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().subscribers.len()
    }

    fn lock(&self) -> MutexGuard<'_, MonitorInner> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn unsubscribe(&self, id: u64) {
        self.lock().subscribers.retain(|(other, _)| *other != id);
    }
}

/// Change notifications. Deregisters on drop.
pub struct ConnectivitySubscription {
    id: u64,
    monitor: ConnectivityMonitor,
    rx: mpsc::Receiver<bool>,
}

impl ConnectivitySubscription {
    pub fn try_recv(&self) -> Option<bool> {
        self.rx.try_recv().ok()
    }

    /// Most recent pending notification, discarding older ones.
    pub fn latest(&self) -> Option<bool> {
        self.rx.try_iter().last()
    }

    pub fn remove(self) {}
}

impl Drop for ConnectivitySubscription {
    fn drop(&mut self) {
        self.monitor.unsubscribe(self.id);
    }
}

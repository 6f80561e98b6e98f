use std::sync::{mpsc, Arc, Mutex, MutexGuard, Weak};

use shell_logging::shell_debug;

use crate::{LinkSource, LinkSubscription};

#[derive(Default)]
struct LinkInner {
    initial: Option<String>,
    next_id: u64,
    listeners: Vec<(u64, mpsc::Sender<String>)>,
}

fn lock(inner: &Mutex<LinkInner>) -> MutexGuard<'_, LinkInner> {
    inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// In-process [`LinkSource`]: the host's URL-open callback calls
/// [`LinkDispatcher::deliver`], and the shell subscribes through the trait.
#[derive(Clone, Default)]
pub struct LinkDispatcher {
    inner: Arc<Mutex<LinkInner>>,
}

impl LinkDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatcher for a process launched by `url`.
    pub fn with_initial_url(url: impl Into<String>) -> Self {
        let dispatcher = Self::default();
        lock(&dispatcher.inner).initial = Some(url.into());
        dispatcher
    }

    /// Forwards `url` to every live listener; returns how many received it.
    pub fn deliver(&self, url: impl Into<String>) -> usize {
        let url = url.into();
        let mut inner = lock(&self.inner);
        inner.listeners.retain(|(_, tx)| tx.send(url.clone()).is_ok());
        shell_debug!("Delivered link to {} listener(s)", inner.listeners.len());
        inner.listeners.len()
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.inner).listeners.len()
    }
}

impl LinkSource for LinkDispatcher {
    fn initial_url(&mut self) -> Option<String> {
        lock(&self.inner).initial.clone()
    }

    fn subscribe(&mut self, sink: mpsc::Sender<String>) -> Box<dyn LinkSubscription> {
        let mut inner = lock(&self.inner);
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, sink));
        Box::new(DispatcherSubscription {
            id,
            inner: Arc::downgrade(&self.inner),
        })
    }
}

struct DispatcherSubscription {
    id: u64,
    inner: Weak<Mutex<LinkInner>>,
}

impl LinkSubscription for DispatcherSubscription {
    fn remove(self: Box<Self>) {
        if let Some(inner) = self.inner.upgrade() {
            lock(&inner).listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

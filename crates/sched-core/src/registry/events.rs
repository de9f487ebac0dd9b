use std::{
    collections::BTreeMap,
    fmt,
    sync::{Arc, Mutex, PoisonError},
};

use sched_model::Name;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::error::CoreError;

/// Out-of-band status update emitted by a backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusEvent {
    #[serde(rename = "type", default)]
    pub event_type: String,
    pub id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub task_id: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub cluster: String,
    #[serde(default)]
    pub message: String,
}

/// What happened to the stored event for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOp {
    Add,
    Update,
    Delete,
}

impl fmt::Display for EventOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EventOp::Add => "add",
            EventOp::Update => "update",
            EventOp::Delete => "delete",
        })
    }
}

/// Latest event per id.
pub type EventStore = Arc<Mutex<BTreeMap<String, StatusEvent>>>;

/// Sending half of an executor's event stream.
#[derive(Debug, Clone)]
pub struct EventChannel {
    pub tx: mpsc::Sender<StatusEvent>,
    pub stop: CancellationToken,
    pub store: EventStore,
}

impl EventChannel {
    /// New channel with an empty store; the receiver goes to [`pump_events`].
    pub fn new(buffer: usize) -> (Self, mpsc::Receiver<StatusEvent>) {
        let (tx, rx) = mpsc::channel(buffer.max(1));
        let chan = Self {
            tx,
            stop: CancellationToken::new(),
            store: Arc::new(Mutex::new(BTreeMap::new())),
        };
        (chan, rx)
    }

    /// Most recent event stored for `id`.
    pub fn latest(&self, id: &str) -> Option<StatusEvent> {
        self.store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    fn record(&self, event: &StatusEvent) -> EventOp {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        match store.insert(event.id.clone(), event.clone()) {
            Some(_) => EventOp::Update,
            None => EventOp::Add,
        }
    }
}

/// Accessor for an executor's event channel.
pub type GetEventChanFn = Arc<dyn Fn(&Name) -> Result<EventChannel, CoreError> + Send + Sync>;

/// Callback invoked with `(key, event, op)`.
pub type EventCbFn = Arc<dyn Fn(&str, &StatusEvent, EventOp) -> Result<(), CoreError> + Send + Sync>;

#[derive(Clone)]
struct Entry {
    get_chan: GetEventChanFn,
    callback: EventCbFn,
}

/// Executor name → event channel accessor and callback.
///
/// Unlike [`super::ExecutorRegistry`], entries come and go at runtime.
#[derive(Default)]
pub struct EventRegistry {
    entries: Mutex<BTreeMap<Name, Entry>>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails with [`CoreError::DuplicateEventChannel`] if `name` is taken.
    pub fn register_ev_chan<G, C>(&self, name: Name, get_chan: G, callback: C) -> Result<(), CoreError>
    where
        G: Fn(&Name) -> Result<EventChannel, CoreError> + Send + Sync + 'static,
        C: Fn(&str, &StatusEvent, EventOp) -> Result<(), CoreError> + Send + Sync + 'static,
    {
        let mut entries = self.lock();
        if entries.contains_key(&name) {
            return Err(CoreError::DuplicateEventChannel(name.to_string()));
        }
        debug!(executor = %name, "event channel registered");
        entries.insert(
            name,
            Entry {
                get_chan: Arc::new(get_chan),
                callback: Arc::new(callback),
            },
        );
        Ok(())
    }

    /// No-op when `name` is not registered.
    pub fn unregister_ev_chan(&self, name: &Name) {
        if self.lock().remove(name).is_some() {
            debug!(executor = %name, "event channel unregistered");
        }
    }

    pub fn contains(&self, name: &Name) -> bool {
        self.lock().contains_key(name)
    }

    pub fn names(&self) -> Vec<Name> {
        self.lock().keys().cloned().collect()
    }

    /// Resolve the channel of `name` through its registered accessor.
    pub fn event_channel(&self, name: &Name) -> Result<EventChannel, CoreError> {
        let get_chan = self.entry(name)?.get_chan;
        get_chan(name)
    }

    pub fn callback(&self, name: &Name) -> Result<EventCbFn, CoreError> {
        Ok(self.entry(name)?.callback)
    }

    /// Invoke every registered callback; failures are logged and returned.
    pub fn broadcast(&self, key: &str, event: &StatusEvent, op: EventOp) -> Vec<(Name, CoreError)> {
        let snapshot: Vec<(Name, EventCbFn)> = self
            .lock()
            .iter()
            .map(|(n, e)| (n.clone(), e.callback.clone()))
            .collect();

        snapshot
            .into_iter()
            .filter_map(|(name, cb)| match cb(key, event, op) {
                Ok(()) => None,
                Err(e) => {
                    warn!(executor = %name, key, op = %op, error = %e, "event callback failed");
                    Some((name, e))
                }
            })
            .collect()
    }

    fn entry(&self, name: &Name) -> Result<Entry, CoreError> {
        self.lock()
            .get(name)
            .cloned()
            .ok_or_else(|| CoreError::EventChannelNotFound(name.to_string()))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<Name, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for EventRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRegistry")
            .field("executors", &self.names())
            .finish()
    }
}

/// Drain `rx` into `chan.store` and the callback registered for `name`.
///
/// Runs until `chan.stop` is cancelled or every sender is dropped.
pub async fn pump_events(
    registry: Arc<EventRegistry>,
    name: Name,
    chan: EventChannel,
    mut rx: mpsc::Receiver<StatusEvent>,
) -> Result<(), CoreError> {
    let callback = registry.callback(&name)?;
    info!(executor = %name, "event handler started");

    loop {
        tokio::select! {
            biased;
            _ = chan.stop.cancelled() => break,
            ev = rx.recv() => {
                let Some(ev) = ev else { break };
                let op = chan.record(&ev);
                if let Err(e) = callback(&ev.id, &ev, op) {
                    warn!(executor = %name, id = %ev.id, error = %e, "event callback failed");
                }
            }
        }
    }

    info!(executor = %name, "event handler exit");
    Ok(())
}

//! Application state.
//!
//! Every page load opens its own session: a busy counter plus the broadcast
//! channel feeding that page's socket. Actions and status lookups carry the
//! session id, so one page never sees another page's busy state.

use lexis_core::{BusyCounter, BusyIndicator, ClientConfig, Dispatcher, HttpTransport, LexisResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::broadcast;
use tracing::debug;
use uuid::Uuid;

/// WebSocket message types.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum PageEvent {
    Busy { visible: bool },
}

/// Busy indicator that pushes visibility changes to one page.
pub struct BroadcastIndicator {
    tx: broadcast::Sender<PageEvent>,
}

impl BusyIndicator for BroadcastIndicator {
    fn show(&self) {
        let _ = self.tx.send(PageEvent::Busy { visible: true });
    }

    fn hide(&self) {
        let _ = self.tx.send(PageEvent::Busy { visible: false });
    }
}

/// Busy state of one loaded page.
#[derive(Clone)]
pub struct PageSession {
    pub busy: BusyCounter,
    pub tx: broadcast::Sender<PageEvent>,
}

impl PageSession {
    fn new() -> Self {
        let (tx, _rx) = broadcast::channel(16);
        let busy = BusyCounter::new(Arc::new(BroadcastIndicator { tx: tx.clone() }));
        Self { busy, tx }
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    transport: HttpTransport,
    sessions: Arc<Mutex<HashMap<String, PageSession>>>,
}

impl AppState {
    /// Build the HTTP transport for `config`. Sessions start empty.
    pub fn new(config: &ClientConfig) -> LexisResult<Self> {
        Ok(Self {
            transport: HttpTransport::from_config(config)?,
            sessions: Arc::default(),
        })
    }

    /// Register a session for a freshly loaded page.
    pub fn open_session(&self) -> (String, PageSession) {
        let id = Uuid::new_v4().to_string();
        let session = PageSession::new();
        self.lock().insert(id.clone(), session.clone());
        debug!(session = %id, "Page session opened");
        (id, session)
    }

    /// Look up a registered session.
    pub fn find_session(&self, id: &str) -> Option<PageSession> {
        self.lock().get(id).cloned()
    }

    /// Session for an action. Unknown ids get an unregistered session, so
    /// their busy changes reach no page.
    pub fn action_session(&self, id: &str) -> PageSession {
        self.find_session(id).unwrap_or_else(PageSession::new)
    }

    /// Session for a connecting socket, registered again if the server
    /// restarted since the page loaded.
    pub fn socket_session(&self, id: &str) -> PageSession {
        self.lock()
            .entry(id.to_string())
            .or_insert_with(PageSession::new)
            .clone()
    }

    pub fn close_session(&self, id: &str) {
        if self.lock().remove(id).is_some() {
            debug!(session = %id, "Page session closed");
        }
    }

    pub fn session_count(&self) -> usize {
        self.lock().len()
    }

    /// Dispatcher whose busy indicator belongs to `session`.
    pub fn dispatcher(&self, session: &PageSession) -> Dispatcher {
        Dispatcher::new(self.transport.clone(), session.busy.clone())
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, PageSession>> {
        self.sessions.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

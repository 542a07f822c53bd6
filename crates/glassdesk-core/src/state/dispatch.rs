use std::convert::Infallible;
use std::fmt;

use tracing::debug;

use crate::state::events::Event;
use crate::state::store::Store;
use crate::state::types::{Command, Payload};
use crate::windows::{
    IdAllocator, WindowDefaults, WindowId, WindowKind, WindowManager, WindowRecord,
};

type Subscriber = Box<dyn FnMut(&[Event])>;

/// Default Store implementation: routes commands to the window manager and
/// notifies subscribers of every non-empty change set.
///
/// The store is an ordinary owned value. Whoever drives the UI owns it and
/// passes it where it is needed.
pub struct DesktopStore {
    windows: WindowManager<Payload>,
    subscribers: Vec<Subscriber>,
}

impl fmt::Debug for DesktopStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DesktopStore")
            .field("windows", &self.windows)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Default for DesktopStore {
    fn default() -> Self {
        Self::new(WindowDefaults::default())
    }
}

impl DesktopStore {
    pub fn new(defaults: WindowDefaults) -> Self {
        Self {
            windows: WindowManager::new(defaults),
            subscribers: Vec::new(),
        }
    }

    /// Store whose windows are named `win-1`, `win-2`, ... in opening order.
    pub fn with_sequential_ids(defaults: WindowDefaults) -> Self {
        Self {
            windows: WindowManager::new(defaults).with_id_allocator(IdAllocator::sequential()),
            subscribers: Vec::new(),
        }
    }

    /// Register a listener called after each dispatch that changed something.
    pub fn subscribe(&mut self, listener: impl FnMut(&[Event]) + 'static) {
        self.subscribers.push(Box::new(listener));
    }

    /// Read access to the window collection for rendering.
    pub fn windows(&self) -> &WindowManager<Payload> {
        &self.windows
    }

    pub fn window(&self, id: &WindowId) -> Option<&WindowRecord<Payload>> {
        self.windows.get(id)
    }

    /// Open a window and return its id along with the events.
    ///
    /// Same as dispatching [`Command::Open`], for callers that need the id of
    /// the window that was created or brought forward.
    pub fn open(
        &mut self,
        title: impl Into<String>,
        kind: WindowKind,
        payload: Option<Payload>,
    ) -> (WindowId, Vec<Event>) {
        let (id, events) = self.windows.open(title, kind, payload);
        self.notify(&events);
        (id, events)
    }

    fn apply(&mut self, cmd: Command) -> Vec<Event> {
        match cmd {
            Command::Open {
                title,
                kind,
                payload,
            } => self.windows.open(title, kind, payload).1,
            Command::Close { id } => self.windows.close(&id),
            Command::Minimize { id } => self.windows.minimize(&id),
            Command::Maximize { id } => self.windows.maximize(&id),
            Command::Focus { id } => self.windows.focus(&id),
            Command::Restore { id } => self.windows.restore(&id),
            Command::UpdatePosition { id, position } => {
                self.windows.update_position(&id, position)
            }
            Command::UpdateSize { id, size } => self.windows.update_size(&id, size),
            Command::UpdatePayload { id, payload } => self.windows.update_payload(&id, payload),
        }
    }

    fn notify(&mut self, events: &[Event]) {
        if events.is_empty() {
            return;
        }
        for subscriber in &mut self.subscribers {
            subscriber(events);
        }
    }
}

impl Store for DesktopStore {
    type Error = Infallible;

    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, Infallible> {
        debug!(event = "core.state.dispatch_started", command = ?cmd);

        let events = self.apply(cmd);
        self.notify(&events);

        debug!(
            event = "core.state.dispatch_completed",
            event_count = events.len()
        );
        Ok(events)
    }
}

//! The floating-window manager.
//!
//! `WindowManager` is a plain owned value: every operation is a state
//! transition over its own record collection that reports what changed as a
//! list of [`Event`]s. Operations naming a window that is not open are silent
//! no-ops and return no events, because close/focus races between input paths
//! are an expected part of UI event delivery.

use tracing::debug;

use crate::state::events::Event;
use crate::windows::types::{
    Position, Size, WindowDefaults, WindowId, WindowKind, WindowRecord, WindowStatus,
};

/// Source of window identifiers.
#[derive(Debug, Clone, Default)]
pub enum IdAllocator {
    /// Random UUID v4 identifiers.
    #[default]
    Random,
    /// `win-1`, `win-2`, ... in allocation order. Used by scripted replays
    /// where commands must name windows before they exist.
    Sequential { next: u64 },
}

impl IdAllocator {
    pub fn sequential() -> Self {
        IdAllocator::Sequential { next: 1 }
    }

    fn allocate(&mut self) -> WindowId {
        match self {
            IdAllocator::Random => WindowId::new(uuid::Uuid::new_v4().to_string()),
            IdAllocator::Sequential { next } => {
                let id = WindowId::new(format!("win-{}", next));
                *next += 1;
                id
            }
        }
    }
}

/// Tracks open windows, their stacking order and the active window.
#[derive(Debug, Clone)]
pub struct WindowManager<P> {
    /// Records in creation order.
    windows: Vec<WindowRecord<P>>,
    active: Option<WindowId>,
    defaults: WindowDefaults,
    ids: IdAllocator,
}

impl<P> Default for WindowManager<P> {
    fn default() -> Self {
        Self::new(WindowDefaults::default())
    }
}

impl<P> WindowManager<P> {
    pub fn new(defaults: WindowDefaults) -> Self {
        Self {
            windows: Vec::new(),
            active: None,
            defaults,
            ids: IdAllocator::default(),
        }
    }

    /// Replace the id source. Only affects windows opened afterwards.
    pub fn with_id_allocator(mut self, ids: IdAllocator) -> Self {
        self.ids = ids;
        self
    }

    /// Open a window, or bring the existing one forward for singleton kinds.
    ///
    /// Returns the id of the created or reused window. When an existing
    /// singleton is reused its payload is left untouched and `payload` is
    /// dropped.
    pub fn open(
        &mut self,
        title: impl Into<String>,
        kind: WindowKind,
        payload: Option<P>,
    ) -> (WindowId, Vec<Event>) {
        let mut events = Vec::new();

        if kind.is_singleton()
            && let Some(existing) = self.windows.iter_mut().find(|w| w.kind == kind)
        {
            let id = existing.id.clone();
            if existing.status == WindowStatus::Minimized {
                existing.status = WindowStatus::Normal;
                events.push(Event::WindowStatusChanged {
                    id: id.clone(),
                    status: WindowStatus::Normal,
                });
            }
            self.activate(&id, &mut events);
            self.raise(&id, &mut events);

            debug!(
                event = "core.windows.singleton_reused",
                window_id = %id,
                kind = %kind
            );
            return (id, events);
        }

        let id = self.ids.allocate();
        let record = WindowRecord {
            id: id.clone(),
            title: title.into(),
            kind,
            payload,
            position: self.defaults.position_for(self.windows.len()),
            size: self.defaults.size,
            status: WindowStatus::Normal,
            z_order: self.max_z_order() + 1,
        };

        debug!(
            event = "core.windows.opened",
            window_id = %id,
            kind = %kind,
            z_order = record.z_order
        );

        self.windows.push(record);
        events.push(Event::WindowOpened {
            id: id.clone(),
            kind,
        });
        self.activate(&id, &mut events);
        (id, events)
    }

    /// Remove a window. Closing is terminal.
    pub fn close(&mut self, id: &WindowId) -> Vec<Event> {
        let Some(index) = self.index_of(id) else {
            return Vec::new();
        };
        self.windows.remove(index);

        let mut events = vec![Event::WindowClosed { id: id.clone() }];
        self.deactivate(id, &mut events);

        debug!(event = "core.windows.closed", window_id = %id);
        events
    }

    /// Minimize from any status. Position and size are kept for the restore.
    pub fn minimize(&mut self, id: &WindowId) -> Vec<Event> {
        let Some(window) = self.get_mut(id) else {
            return Vec::new();
        };

        let mut events = Vec::new();
        if window.status != WindowStatus::Minimized {
            window.status = WindowStatus::Minimized;
            events.push(Event::WindowStatusChanged {
                id: id.clone(),
                status: WindowStatus::Minimized,
            });
        }
        self.deactivate(id, &mut events);
        events
    }

    /// Toggle between maximized and normal. Anything that is not maximized
    /// becomes maximized. The window becomes active either way.
    pub fn maximize(&mut self, id: &WindowId) -> Vec<Event> {
        let Some(window) = self.get_mut(id) else {
            return Vec::new();
        };

        window.status = match window.status {
            WindowStatus::Maximized => WindowStatus::Normal,
            WindowStatus::Normal | WindowStatus::Minimized => WindowStatus::Maximized,
        };
        let mut events = vec![Event::WindowStatusChanged {
            id: id.clone(),
            status: window.status,
        }];
        self.activate(id, &mut events);
        events
    }

    /// Make the window active and move it to the front.
    pub fn focus(&mut self, id: &WindowId) -> Vec<Event> {
        if self.index_of(id).is_none() {
            return Vec::new();
        }

        let mut events = Vec::new();
        self.activate(id, &mut events);
        self.raise(id, &mut events);
        events
    }

    /// Return the window to `Normal` and focus it.
    pub fn restore(&mut self, id: &WindowId) -> Vec<Event> {
        let Some(window) = self.get_mut(id) else {
            return Vec::new();
        };

        let mut events = Vec::new();
        if window.status != WindowStatus::Normal {
            window.status = WindowStatus::Normal;
            events.push(Event::WindowStatusChanged {
                id: id.clone(),
                status: WindowStatus::Normal,
            });
        }
        events.extend(self.focus(id));
        events
    }

    /// Store a new position. The caller only issues this while the window is
    /// `Normal`; the manager does not check.
    pub fn update_position(&mut self, id: &WindowId, position: Position) -> Vec<Event> {
        let Some(window) = self.get_mut(id) else {
            return Vec::new();
        };
        window.position = position;
        vec![Event::WindowMoved {
            id: id.clone(),
            position,
        }]
    }

    /// Store a new size exactly as given. Minimum-size clamping happens in
    /// the view layer before this is called.
    pub fn update_size(&mut self, id: &WindowId, size: Size) -> Vec<Event> {
        let Some(window) = self.get_mut(id) else {
            return Vec::new();
        };
        window.size = size;
        vec![Event::WindowResized {
            id: id.clone(),
            size,
        }]
    }

    pub fn update_payload(&mut self, id: &WindowId, payload: P) -> Vec<Event> {
        let Some(window) = self.get_mut(id) else {
            return Vec::new();
        };
        window.payload = Some(payload);
        vec![Event::PayloadUpdated { id: id.clone() }]
    }

    /// All open windows in creation order.
    pub fn windows(&self) -> &[WindowRecord<P>] {
        &self.windows
    }

    pub fn get(&self, id: &WindowId) -> Option<&WindowRecord<P>> {
        self.windows.iter().find(|w| &w.id == id)
    }

    pub fn active_id(&self) -> Option<&WindowId> {
        self.active.as_ref()
    }

    pub fn active(&self) -> Option<&WindowRecord<P>> {
        self.active.as_ref().and_then(|id| self.get(id))
    }

    /// First open window of the given kind, in creation order.
    pub fn find_by_kind(&self, kind: WindowKind) -> Option<&WindowRecord<P>> {
        self.windows.iter().find(|w| w.kind == kind)
    }

    /// Windows ordered back to front.
    pub fn stacking_order(&self) -> Vec<&WindowRecord<P>> {
        let mut ordered: Vec<_> = self.windows.iter().collect();
        ordered.sort_by_key(|w| w.z_order);
        ordered
    }

    pub fn frontmost(&self) -> Option<&WindowRecord<P>> {
        self.windows.iter().max_by_key(|w| w.z_order)
    }

    /// Minimized windows in creation order, for the dock.
    pub fn minimized(&self) -> impl Iterator<Item = &WindowRecord<P>> {
        self.windows.iter().filter(|w| w.is_minimized())
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    fn max_z_order(&self) -> u64 {
        self.windows.iter().map(|w| w.z_order).max().unwrap_or(0)
    }

    fn index_of(&self, id: &WindowId) -> Option<usize> {
        self.windows.iter().position(|w| &w.id == id)
    }

    fn get_mut(&mut self, id: &WindowId) -> Option<&mut WindowRecord<P>> {
        self.windows.iter_mut().find(|w| &w.id == id)
    }

    // Callers have already checked that `id` is present.
    fn raise(&mut self, id: &WindowId, events: &mut Vec<Event>) {
        let z_order = self.max_z_order() + 1;
        if let Some(window) = self.get_mut(id) {
            window.z_order = z_order;
            events.push(Event::WindowRaised {
                id: id.clone(),
                z_order,
            });
        }
    }

    fn activate(&mut self, id: &WindowId, events: &mut Vec<Event>) {
        if self.active.as_ref() != Some(id) {
            self.active = Some(id.clone());
            events.push(Event::ActiveWindowChanged {
                id: Some(id.clone()),
            });
        }
    }

    fn deactivate(&mut self, id: &WindowId, events: &mut Vec<Event>) {
        if self.active.as_ref() == Some(id) {
            self.active = None;
            events.push(Event::ActiveWindowChanged { id: None });
        }
    }
}

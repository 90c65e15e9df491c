//! Dropdown popover holding the calendar
//!
//! While expanded, the popover registers two document-level listeners: a
//! click outside its area closes it, and so does Escape. Each registration
//! is owned by a [`ListenerGuard`] that unregisters on drop, so collapsing
//! the popover (or dropping it) can never leak a listener.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ratatui::layout::{Position, Rect};
use tracing::{debug, trace};

/// Kinds of document-level listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerKind {
    OutsideClick,
    EscapeKey,
}

/// Registry of active document-level listeners
#[derive(Debug, Default)]
pub struct DocumentListeners {
    next_id: Cell<u64>,
    active: RefCell<Vec<(u64, ListenerKind)>>,
}

impl DocumentListeners {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Register a listener, returning the guard that owns it
    pub fn listen(self: &Rc<Self>, kind: ListenerKind) -> ListenerGuard {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.active.borrow_mut().push((id, kind));
        trace!("POPOVER: Registered {:?} listener #{}", kind, id);
        ListenerGuard {
            registry: Rc::clone(self),
            id,
            kind,
        }
    }

    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.active.borrow().iter().any(|(_, k)| *k == kind)
    }

    /// Number of registered listeners
    pub fn count(&self) -> usize {
        self.active.borrow().len()
    }

    fn remove(&self, id: u64) {
        self.active.borrow_mut().retain(|(active_id, _)| *active_id != id);
    }
}

/// Registration handle; the listener is removed when this is dropped
#[derive(Debug)]
pub struct ListenerGuard {
    registry: Rc<DocumentListeners>,
    id: u64,
    kind: ListenerKind,
}

impl ListenerGuard {
    pub fn kind(&self) -> ListenerKind {
        self.kind
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        trace!("POPOVER: Removing {:?} listener #{}", self.kind, self.id);
        self.registry.remove(self.id);
    }
}

/// Expandable container for the calendar
#[derive(Debug)]
pub struct Popover {
    listeners: Rc<DocumentListeners>,
    guards: Vec<ListenerGuard>,
    area: Rect,
}

impl Popover {
    pub fn new(listeners: Rc<DocumentListeners>) -> Self {
        Self {
            listeners,
            guards: Vec::new(),
            area: Rect::default(),
        }
    }

    /// Expanded exactly while the document listeners are held
    pub fn is_expanded(&self) -> bool {
        !self.guards.is_empty()
    }

    pub fn set_expanded(&mut self, expanded: bool) -> &mut Self {
        if expanded == self.is_expanded() {
            return self;
        }
        debug!("POPOVER: {}", if expanded { "Expanding" } else { "Collapsing" });
        if expanded {
            self.guards = vec![
                self.listeners.listen(ListenerKind::OutsideClick),
                self.listeners.listen(ListenerKind::EscapeKey),
            ];
        } else {
            self.guards.clear();
        }
        self
    }

    pub fn toggle(&mut self) -> &mut Self {
        let expanded = self.is_expanded();
        self.set_expanded(!expanded)
    }

    /// Record where the popover was last drawn
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Close on a click outside the popover area
    ///
    /// Returns true when the click was consumed by closing.
    pub fn handle_click(&mut self, x: u16, y: u16) -> bool {
        if !self.listeners.is_listening(ListenerKind::OutsideClick) {
            return false;
        }
        if self.area.contains(Position::new(x, y)) {
            return false;
        }
        debug!("POPOVER: Click outside at ({}, {})", x, y);
        self.set_expanded(false);
        true
    }

    /// Close on Escape; returns true when the key was consumed
    pub fn handle_escape(&mut self) -> bool {
        if !self.listeners.is_listening(ListenerKind::EscapeKey) {
            return false;
        }
        self.set_expanded(false);
        true
    }
}

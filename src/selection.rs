//! Shared selection cell
//!
//! Holds the single active target id for the page session. There is exactly
//! one [`SelectionWriter`] (owned by the species control) and any number of
//! [`SelectionReader`]s (presenter, host application, downstream analysis
//! actions). Everything runs on the UI thread, so the cell is `Rc`-based and
//! deliberately `!Send`.
//!
//! A publish stores the value, bumps the revision and then notifies
//! subscribers, all before returning. A reader looking after `publish`
//! returns always sees the new id.

use crate::catalog::TargetId;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

type Subscriber = Box<dyn FnMut(&TargetId)>;

struct Shared {
    active: RefCell<TargetId>,
    revision: Cell<u64>,
    subscribers: RefCell<Vec<Subscriber>>,
}

/// Create the selection cell seeded with `initial`
pub fn channel(initial: TargetId) -> (SelectionWriter, SelectionReader) {
    let shared = Rc::new(Shared {
        active: RefCell::new(initial),
        revision: Cell::new(0),
        subscribers: RefCell::new(Vec::new()),
    });

    (
        SelectionWriter {
            shared: Rc::clone(&shared),
        },
        SelectionReader { shared },
    )
}

/// Subscribers taken out for one publish. Dropping puts them back ahead of
/// any added meanwhile, also when a subscriber panics.
struct Running<'a> {
    shared: &'a Shared,
    subscribers: Vec<Subscriber>,
}

impl Drop for Running<'_> {
    fn drop(&mut self) {
        let mut subscribers = self.shared.subscribers.borrow_mut();
        let added = std::mem::take(&mut *subscribers);
        *subscribers = std::mem::take(&mut self.subscribers);
        subscribers.extend(added);
    }
}

/// Write side of the selection cell. Not `Clone`: there is one writer.
pub struct SelectionWriter {
    shared: Rc<Shared>,
}

impl SelectionWriter {
    /// Store `id` as the active target and notify subscribers
    pub fn publish(&self, id: TargetId) {
        *self.shared.active.borrow_mut() = id;
        self.shared.revision.set(self.shared.revision.get() + 1);

        // Subscribers are moved out while they run so they can read the cell
        // or subscribe further handles without a double borrow.
        let mut running = Running {
            shared: &self.shared,
            subscribers: std::mem::take(&mut *self.shared.subscribers.borrow_mut()),
        };
        let active = self.shared.active.borrow().clone();
        for subscriber in running.subscribers.iter_mut() {
            subscriber(&active);
        }
    }

    pub fn active(&self) -> TargetId {
        self.shared.active.borrow().clone()
    }

    /// A new read handle on the same cell
    pub fn reader(&self) -> SelectionReader {
        SelectionReader {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl fmt::Debug for SelectionWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionWriter")
            .field("active", &*self.shared.active.borrow())
            .field("revision", &self.shared.revision.get())
            .finish()
    }
}

/// Read side of the selection cell
#[derive(Clone)]
pub struct SelectionReader {
    shared: Rc<Shared>,
}

impl SelectionReader {
    /// Currently active target id
    pub fn active(&self) -> TargetId {
        self.shared.active.borrow().clone()
    }

    pub fn is_active(&self, id: &str) -> bool {
        *self.shared.active.borrow() == id
    }

    /// Number of publishes so far
    pub fn revision(&self) -> u64 {
        self.shared.revision.get()
    }

    /// Register a callback run after every publish
    pub fn subscribe(&self, subscriber: impl FnMut(&TargetId) + 'static) {
        self.shared
            .subscribers
            .borrow_mut()
            .push(Box::new(subscriber));
    }
}

impl fmt::Debug for SelectionReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionReader")
            .field("active", &*self.shared.active.borrow())
            .field("revision", &self.shared.revision.get())
            .finish()
    }
}

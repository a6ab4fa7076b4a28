//! In-memory DOM and storage doubles for unit tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::control::{ControlHost, ToggleControl};
use crate::store::{MemoryStore, PreferenceStore};

#[derive(Default)]
struct ControlInner {
    checked: Cell<bool>,
    handlers: RefCell<Vec<Box<dyn FnMut()>>>,
}

/// Checkbox stand-in. Clones share the same element.
#[derive(Clone, Default)]
pub struct FakeControl {
    inner: Rc<ControlInner>,
}

impl FakeControl {
    pub fn new(default_checked: bool) -> Self {
        let control = Self::default();
        control.inner.checked.set(default_checked);
        control
    }

    /// Simulate a user click: flip the checked state, then dispatch.
    pub fn click(&self) {
        self.inner.checked.set(!self.inner.checked.get());
        for handler in self.inner.handlers.borrow_mut().iter_mut() {
            handler();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.handlers.borrow().len()
    }
}

impl ToggleControl for FakeControl {
    fn is_checked(&self) -> bool {
        self.inner.checked.get()
    }

    fn set_checked(&self, checked: bool) {
        self.inner.checked.set(checked);
    }

    fn on_click(&self, handler: Box<dyn FnMut()>) {
        self.inner.handlers.borrow_mut().push(handler);
    }
}

/// Document stand-in holding controls by id.
#[derive(Default)]
pub struct FakeHost {
    controls: HashMap<String, FakeControl>,
}

impl FakeHost {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_control(id: &str, control: FakeControl) -> Self {
        let mut host = Self::default();
        host.controls.insert(id.to_owned(), control);
        host
    }
}

impl ControlHost for FakeHost {
    type Control = FakeControl;

    fn find_control(&self, id: &str) -> Option<FakeControl> {
        self.controls.get(id).cloned()
    }
}

/// Store that counts accesses.
#[derive(Default)]
pub struct RecordingStore {
    pub inner: MemoryStore,
    pub reads: Cell<usize>,
    pub writes: Cell<usize>,
}

impl RecordingStore {
    pub fn with_mode(value: &str) -> Self {
        Self { inner: MemoryStore::with_items([("mode", value)]), ..Self::default() }
    }
}

impl PreferenceStore for RecordingStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.reads.set(self.reads.get() + 1);
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) {
        self.writes.set(self.writes.get() + 1);
        self.inner.set_item(key, value);
    }
}

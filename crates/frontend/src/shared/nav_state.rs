//! Navigation-carried transient state.
//!
//! A list screen puts the selected record into the entity's buffer and then
//! navigates to the form route; the form takes the record exactly once in
//! its constructor. Reaching the form any other way (sidebar link, direct
//! URL) finds the buffer empty and is a normal Create entry, not an error.

use std::sync::{Arc, Mutex};

use contracts::domain::a001_supplier::aggregate::Supplier;
use contracts::domain::a002_location::aggregate::Location;
use contracts::domain::a003_employee::aggregate::Employee;
use contracts::domain::a004_asset::aggregate::Asset;
use contracts::domain::a005_category::aggregate::Category;
use leptos::prelude::*;

/// One-shot typed slot. `put` replaces any pending payload; `take` empties
/// the slot, so a second read (browser back, re-render) sees nothing.
pub struct Transient<T> {
    slot: Arc<Mutex<Option<T>>>,
}

impl<T> Clone for Transient<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T> Default for Transient<T> {
    fn default() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
        }
    }
}

impl<T> Transient<T> {
    pub fn put(&self, value: T) {
        *self.slot.lock().expect("transient slot poisoned") = Some(value);
    }

    pub fn take(&self) -> Option<T> {
        self.slot.lock().expect("transient slot poisoned").take()
    }
}

/// Register one buffer per editable entity on the root context.
pub fn provide_edit_buffers() {
    provide_context(Transient::<Supplier>::default());
    provide_context(Transient::<Location>::default());
    provide_context(Transient::<Employee>::default());
    provide_context(Transient::<Asset>::default());
    provide_context(Transient::<Category>::default());
}

pub fn use_edit_buffer<T>() -> Transient<T>
where
    T: Send + Sync + 'static,
{
    use_context::<Transient<T>>().expect("edit buffer not provided for this entity")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_is_one_shot() {
        let buffer = Transient::<u32>::default();
        buffer.put(7);
        assert_eq!(buffer.take(), Some(7));
        assert_eq!(buffer.take(), None);
    }

    #[test]
    fn empty_slot_yields_none() {
        let buffer = Transient::<u32>::default();
        assert_eq!(buffer.take(), None);
    }

    #[test]
    fn put_replaces_a_pending_payload() {
        let buffer = Transient::<u32>::default();
        buffer.put(1);
        buffer.put(2);
        assert_eq!(buffer.take(), Some(2));
        assert_eq!(buffer.take(), None);
    }

    #[test]
    fn clones_share_the_slot() {
        let buffer = Transient::<&'static str>::default();
        let other = buffer.clone();
        buffer.put("record");
        assert_eq!(other.take(), Some("record"));
        assert_eq!(buffer.take(), None);
    }
}

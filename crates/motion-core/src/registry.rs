//! Ordered subscriber registry.
//!
//! Subscribers are kept in registration order. Re-registering an existing id
//! swaps the callback in place, keeping its original position.

use crate::error::MotionError;
use crate::state::MotionEvent;
use fnv::FnvHashMap;
use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

/// Callback invoked for every dispatch. Returning an error marks this
/// subscriber as failed for that dispatch only.
///
/// Callbacks are `Fn` and may be re-entered: one that dispatches from inside
/// itself receives the nested event too. Mutable state lives behind the
/// callback's own `Cell`/`RefCell`.
pub type MotionCallback = Rc<dyn Fn(&MotionEvent<'_>) -> anyhow::Result<()>>;

struct Entry {
    id: Rc<str>,
    callback: MotionCallback,
}

#[derive(Default)]
pub struct Registry {
    order: BTreeMap<u64, Entry>,
    ids: FnvHashMap<Rc<str>, u64>,
    next_seq: u64,
}

/// A registry entry captured at the start of a dispatch.
pub(crate) struct Subscriber {
    seq: u64,
    pub(crate) id: Rc<str>,
    callback: MotionCallback,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. Returns `true` when an existing id was replaced.
    pub fn insert(&mut self, id: &str, callback: MotionCallback) -> bool {
        if let Some(seq) = self.ids.get(id) {
            if let Some(entry) = self.order.get_mut(seq) {
                entry.callback = callback;
                return true;
            }
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        let id: Rc<str> = Rc::from(id);
        self.ids.insert(id.clone(), seq);
        self.order.insert(seq, Entry { id, callback });
        false
    }

    pub fn remove(&mut self, id: &str) -> bool {
        match self.ids.remove(id) {
            Some(seq) => self.order.remove(&seq).is_some(),
            None => false,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.ids.clear();
    }

    /// Subscriber ids in dispatch order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.values().map(|e| &*e.id)
    }

    pub(crate) fn subscribers(&self) -> Vec<Subscriber> {
        self.order
            .iter()
            .map(|(seq, e)| Subscriber {
                seq: *seq,
                id: e.id.clone(),
                callback: e.callback.clone(),
            })
            .collect()
    }

    /// Whether `sub` is still registered with the same callback it was
    /// captured with.
    pub(crate) fn is_live(&self, sub: &Subscriber) -> bool {
        self.order
            .get(&sub.seq)
            .is_some_and(|e| Rc::ptr_eq(&e.callback, &sub.callback))
    }
}

impl Subscriber {
    /// Run the callback, turning an error or a panic into a [`MotionError`].
    pub(crate) fn call(&self, event: &MotionEvent<'_>) -> Result<(), MotionError> {
        let callback: &dyn Fn(&MotionEvent<'_>) -> anyhow::Result<()> = &*self.callback;
        match panic::catch_unwind(AssertUnwindSafe(|| callback(event))) {
            Ok(Ok(())) => Ok(()),
            Ok(Err(source)) => Err(MotionError::Subscriber {
                id: self.id.to_string(),
                trigger: event.trigger.to_owned(),
                source,
            }),
            Err(_) => Err(MotionError::SubscriberPanicked {
                id: self.id.to_string(),
                trigger: event.trigger.to_owned(),
            }),
        }
    }
}

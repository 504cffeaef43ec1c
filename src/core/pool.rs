//! Recycled field maps for the entries a logger creates internally
//!
//! `Logger::info` and friends, and the roots `Logger::with_field` derives
//! from, need a throwaway entry. The pool keeps a bounded set of emptied
//! maps so those calls can skip the allocation. Only a [`Scratch`] can be
//! returned, and entries handed to callers are never scratch entries.

use super::{entry::Entry, fields::Fields, level::Level, logger::Logger};
use crossbeam_channel::{bounded, Receiver, Sender};
use std::sync::Arc;

pub(crate) const DEFAULT_POOL_CAPACITY: usize = 64;

/// Entry borrowed from the pool
pub(crate) struct Scratch {
    entry: Entry,
}

impl Scratch {
    pub(crate) fn entry(&self) -> &Entry {
        &self.entry
    }

    pub(crate) fn entry_mut(&mut self) -> &mut Entry {
        &mut self.entry
    }
}

pub(crate) struct EntryPool {
    sender: Sender<Arc<Fields>>,
    receiver: Receiver<Arc<Fields>>,
}

impl EntryPool {
    pub(crate) fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self { sender, receiver }
    }

    /// Empty entry bound to `logger` at `level`
    pub(crate) fn get(&self, logger: &Logger, level: Level) -> Scratch {
        let data = self
            .receiver
            .try_recv()
            .unwrap_or_else(|_| Arc::new(Fields::new()));
        Scratch {
            entry: Entry::from_parts(logger.clone(), level, data),
        }
    }

    /// Return a scratch entry. A map still shared with a derived entry is
    /// left to that entry; a full pool drops the map.
    pub(crate) fn put(&self, scratch: Scratch) {
        let mut data = scratch.entry.into_data();
        if let Some(fields) = Arc::get_mut(&mut data) {
            fields.clear();
            let _ = self.sender.try_send(data);
        }
    }

    #[cfg(test)]
    pub(crate) fn available(&self) -> usize {
        self.receiver.len()
    }
}

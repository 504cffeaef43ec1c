//! Level hooks: side effects that run before an entry is formatted

use super::{entry::Entry, error::Result, level::Level};
use std::collections::HashMap;
use std::sync::Arc;

/// A hook fires synchronously for every entry logged at one of its levels.
///
/// Hooks run under the logger's lock and may modify the entry's fields;
/// the formatter sees those changes. Logging through the same logger from
/// inside `fire` deadlocks unless locking has been disabled.
pub trait Hook: Send + Sync {
    fn levels(&self) -> Vec<Level>;
    fn fire(&self, entry: &mut Entry) -> Result<()>;
}

impl<H: Hook + ?Sized> Hook for Arc<H> {
    fn levels(&self) -> Vec<Level> {
        (**self).levels()
    }

    fn fire(&self, entry: &mut Entry) -> Result<()> {
        (**self).fire(entry)
    }
}

/// Hooks registered per level, in registration order
#[derive(Clone, Default)]
pub struct LevelHooks {
    hooks: HashMap<Level, Vec<Arc<dyn Hook>>>,
}

impl LevelHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `hook` under every level it declares
    pub fn add(&mut self, hook: Arc<dyn Hook>) {
        for level in hook.levels() {
            self.hooks.entry(level).or_default().push(Arc::clone(&hook));
        }
    }

    /// Run the hooks for `level` in order; the first failure stops the rest.
    pub fn fire(&self, level: Level, entry: &mut Entry) -> Result<()> {
        if let Some(hooks) = self.hooks.get(&level) {
            for hook in hooks {
                hook.fire(entry)?;
            }
        }
        Ok(())
    }

    /// Number of hooks registered for `level`
    pub fn len_for(&self, level: Level) -> usize {
        self.hooks.get(&level).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.values().all(Vec::is_empty)
    }
}

impl std::fmt::Debug for LevelHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for level in Level::ALL {
            let count = self.len_for(level);
            if count > 0 {
                map.entry(&level, &count);
            }
        }
        map.finish()
    }
}

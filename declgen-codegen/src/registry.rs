//! Target registry.
//!
//! Maps target ids (e.g. `"golang"`) to the generator producing their
//! output. The registry is filled once at startup by plugin setup hooks
//! and only read afterwards.

use std::fmt;

use declgen_schema::Schema;
use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::{Error, Generation, Result};

/// A target generator: schema in, complete artifact set out.
pub type Generator = Box<dyn Fn(&Schema) -> Result<Generation> + Send + Sync>;

struct Entry {
    /// Name of the plugin that registered the target.
    plugin: String,
    generator: Generator,
}

/// Registry of available targets, in registration order.
#[derive(Default)]
pub struct TargetRegistry {
    targets: IndexMap<String, Entry>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generator for `target`, replacing any previous one.
    pub fn register<F>(&mut self, target: impl Into<String>, generator: F)
    where
        F: Fn(&Schema) -> Result<Generation> + Send + Sync + 'static,
    {
        self.register_from("", target, generator);
    }

    /// Register on behalf of a named plugin.
    ///
    /// Re-registering an id keeps its listing position and the new
    /// generator; the override is logged with both plugin names.
    pub(crate) fn register_from<F>(&mut self, plugin: &str, target: impl Into<String>, generator: F)
    where
        F: Fn(&Schema) -> Result<Generation> + Send + Sync + 'static,
    {
        let target = target.into();
        let entry = Entry {
            plugin: plugin.to_string(),
            generator: Box::new(generator),
        };

        match self.targets.insert(target.clone(), entry) {
            Some(previous) => warn!(
                id = %target,
                previous = %previous.plugin,
                plugin = %plugin,
                "target registered again, the last registration wins"
            ),
            None => debug!(id = %target, plugin = %plugin, "registered target"),
        }
    }

    /// Get the generator for `target`.
    pub fn lookup(&self, target: &str) -> Result<&Generator> {
        self.targets
            .get(target)
            .map(|entry| &entry.generator)
            .ok_or_else(|| Error::unknown_target(target, self.targets()))
    }

    /// Name of the plugin that provided `target`.
    pub fn provider(&self, target: &str) -> Option<&str> {
        self.targets.get(target).map(|entry| entry.plugin.as_str())
    }

    /// Registered target ids, in registration order.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.targets.keys().map(String::as_str)
    }

    pub fn contains(&self, target: &str) -> bool {
        self.targets.contains_key(target)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl fmt::Debug for TargetRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.targets.iter().map(|(id, entry)| (id, &entry.plugin)))
            .finish()
    }
}

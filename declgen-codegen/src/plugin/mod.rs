//! Plugin setup hooks.
//!
//! A plugin contributes one or more targets. At startup every plugin's
//! [`Plugin::setup`] is called exactly once, in the configured order, with a
//! [`Registrar`] through which it registers its targets.
//!
//! # Example
//!
//! ```ignore
//! struct GolangPlugin;
//!
//! impl Plugin for GolangPlugin {
//!     fn name(&self) -> &str { "golang" }
//!
//!     fn setup(&self, registrar: &mut Registrar<'_>) -> Result<()> {
//!         registrar.register_target("golang", generate_golang);
//!         Ok(())
//!     }
//! }
//! ```

mod directory;

pub use directory::{DirectoryPlugin, TARGET_MANIFEST, TargetManifest};

use declgen_schema::Schema;

use crate::{Generation, Result, TargetRegistry};

/// A provider of targets.
pub trait Plugin {
    /// The name of this plugin (for diagnostics and target listings).
    fn name(&self) -> &str;

    /// Register this plugin's targets.
    ///
    /// # Errors
    ///
    /// An error aborts application startup.
    fn setup(&self, registrar: &mut Registrar<'_>) -> Result<()>;
}

/// Handle passed to [`Plugin::setup`] for registering targets.
pub struct Registrar<'a> {
    plugin: &'a str,
    registry: &'a mut TargetRegistry,
}

impl<'a> Registrar<'a> {
    pub(crate) fn new(plugin: &'a str, registry: &'a mut TargetRegistry) -> Self {
        Self { plugin, registry }
    }

    /// Register `generator` as the target `target`.
    pub fn register_target<F>(&mut self, target: impl Into<String>, generator: F)
    where
        F: Fn(&Schema) -> Result<Generation> + Send + Sync + 'static,
    {
        self.registry.register_from(self.plugin, target, generator);
    }
}

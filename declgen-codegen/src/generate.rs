//! Generation entry points.
//!
//! [`App`] owns the target registry for the lifetime of the process. It is
//! built once from an ordered list of plugins and then only used to look up
//! and run targets.
//!
//! # Example
//!
//! ```ignore
//! let app = App::builder()
//!     .plugin(GolangPlugin)
//!     .plugin(DirectoryPlugin::new("./targets"))
//!     .build()?;
//!
//! let generation = app.generate(&schema, "golang")?;
//! generation.artifacts.write_all(Path::new("build"))?;
//! ```

use declgen_schema::Schema;
use tracing::debug;

use crate::{Error, Generation, Plugin, Registrar, Result, TargetRegistry};

/// Run the generator registered for `target` on `schema`.
///
/// Errors from the lookup or the generator are returned unchanged.
pub fn generate(registry: &TargetRegistry, schema: &Schema, target: &str) -> Result<Generation> {
    let generator = registry.lookup(target)?;
    debug!(id = %target, decls = schema.decls.len(), "generating target");
    generator(schema)
}

/// The application: a fully set up target registry.
#[derive(Debug)]
pub struct App {
    registry: TargetRegistry,
}

impl App {
    pub fn builder() -> AppBuilder {
        AppBuilder::default()
    }

    pub fn registry(&self) -> &TargetRegistry {
        &self.registry
    }

    /// Generate `target` for `schema`.
    pub fn generate(&self, schema: &Schema, target: &str) -> Result<Generation> {
        generate(&self.registry, schema, target)
    }
}

/// Collects plugins in order, then runs their setup hooks.
#[derive(Default)]
pub struct AppBuilder {
    plugins: Vec<Box<dyn Plugin>>,
}

impl AppBuilder {
    /// Add a plugin; plugins are set up in the order they are added.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Add several boxed plugins in order.
    pub fn plugins(mut self, plugins: impl IntoIterator<Item = Box<dyn Plugin>>) -> Self {
        self.plugins.extend(plugins);
        self
    }

    /// Call every plugin's setup hook once and return the resulting app.
    ///
    /// # Errors
    ///
    /// The first failing plugin aborts the build with [`Error::PluginSetup`].
    pub fn build(self) -> Result<App> {
        let mut registry = TargetRegistry::new();

        for plugin in &self.plugins {
            let name = plugin.name();
            debug!(plugin = %name, "setting up plugin");
            let mut registrar = Registrar::new(name, &mut registry);
            plugin
                .setup(&mut registrar)
                .map_err(|source| Error::PluginSetup {
                    plugin: name.to_string(),
                    source: Box::new(source),
                })?;
        }

        Ok(App { registry })
    }
}

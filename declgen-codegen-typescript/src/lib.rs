//! TypeScript target for declgen.

use std::path::Path;

use declgen_codegen::{Generation, Plugin, Registrar, Result, TemplateSet, TemplateTarget};
use declgen_schema::Schema;

/// Target id registered by [`TypeScriptPlugin`].
pub const TARGET: &str = "typescript";

/// The artifact reported once generation completes.
pub const PRIMARY: &str = "koinos.ts";

const TEMPLATES: &[&str] = &["koinos.ts.j2", "index.ts.j2"];

/// The TypeScript template target.
///
/// `templates/` and `rt/` are located through the crate's source directory
/// recorded at build time, so a built binary needs that tree in place.
pub fn target() -> TemplateTarget {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    TemplateTarget::new(
        TemplateSet::new(root.join("templates")).templates(TEMPLATES.iter().copied()),
        PRIMARY,
    )
    .with_runtime(root.join("rt"))
}

/// Generate TypeScript sources for `schema`.
pub fn generate(schema: &Schema) -> Result<Generation> {
    target().generate(schema)
}

/// Plugin contributing the `typescript` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TypeScriptPlugin;

impl Plugin for TypeScriptPlugin {
    fn name(&self) -> &str {
        "typescript"
    }

    fn setup(&self, registrar: &mut Registrar<'_>) -> Result<()> {
        let target = target();
        registrar.register_target(TARGET, move |schema| target.generate(schema));
        Ok(())
    }
}

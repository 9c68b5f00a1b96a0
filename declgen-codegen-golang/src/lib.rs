//! Go target for declgen.
//!
//! Renders `koinos.go` from the schema and bundles the Go runtime support
//! files under `rt/`.

use std::path::Path;

use declgen_codegen::{Generation, Plugin, Registrar, Result, TemplateSet, TemplateTarget};
use declgen_schema::Schema;

/// Target id registered by [`GolangPlugin`].
pub const TARGET: &str = "golang";

/// The artifact reported once generation completes.
pub const PRIMARY: &str = "koinos.go";

const TEMPLATES: &[&str] = &["koinos.go.j2"];

/// The Go template target, reading its templates and runtime tree from this
/// crate's directory.
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

/// Generate Go sources for `schema`.
pub fn generate(schema: &Schema) -> Result<Generation> {
    target().generate(schema)
}

/// Plugin contributing the `golang` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct GolangPlugin;

impl Plugin for GolangPlugin {
    fn name(&self) -> &str {
        "golang"
    }

    fn setup(&self, registrar: &mut Registrar<'_>) -> Result<()> {
        let target = target();
        registrar.register_target(TARGET, move |schema| target.generate(schema));
        Ok(())
    }
}

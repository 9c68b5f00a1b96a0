//! C++ target for declgen.
//!
//! Emits a forward-declaration header and a definitions header under
//! `koinos/`, one namespace block per declaration namespace.

use std::path::Path;

use declgen_codegen::{Generation, Plugin, Registrar, Result, TemplateSet, TemplateTarget};
use declgen_schema::Schema;

/// Target id registered by [`CppPlugin`].
pub const TARGET: &str = "cpp";

/// The artifact reported once generation completes.
pub const PRIMARY: &str = "koinos/types.hpp";

const TEMPLATES: &[&str] = &["koinos/types_fwd.hpp.j2", "koinos/types.hpp.j2"];

/// The C++ template target.
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

/// Generate C++ sources for `schema`.
pub fn generate(schema: &Schema) -> Result<Generation> {
    target().generate(schema)
}

/// Plugin contributing the `cpp` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct CppPlugin;

impl Plugin for CppPlugin {
    fn name(&self) -> &str {
        "cpp"
    }

    fn setup(&self, registrar: &mut Registrar<'_>) -> Result<()> {
        let target = target();
        registrar.register_target(TARGET, move |schema| target.generate(schema));
        Ok(())
    }
}

//! Target plugin assembly.
//!
//! Built-in targets are statically linked; extra targets come from
//! `--target-path` search directories and are set up after the built-ins.

use std::path::PathBuf;

use declgen_codegen::{App, DirectoryPlugin, Plugin};
use declgen_codegen_cpp::CppPlugin;
use declgen_codegen_golang::GolangPlugin;
use declgen_codegen_typescript::TypeScriptPlugin;

/// Target generated when none is given on the command line.
pub const DEFAULT_TARGET: &str = declgen_codegen_golang::TARGET;

/// The statically linked plugins, in setup order.
pub fn builtin_plugins() -> Vec<Box<dyn Plugin>> {
    vec![
        Box::new(CppPlugin),
        Box::new(GolangPlugin),
        Box::new(TypeScriptPlugin),
    ]
}

/// Build the application from the built-in plugins followed by one
/// directory plugin per search path.
pub fn build_app(search_paths: &[PathBuf]) -> declgen_codegen::Result<App> {
    let directories = search_paths
        .iter()
        .map(|path| Box::new(DirectoryPlugin::new(path)) as Box<dyn Plugin>);

    App::builder()
        .plugins(builtin_plugins())
        .plugins(directories)
        .build()
}

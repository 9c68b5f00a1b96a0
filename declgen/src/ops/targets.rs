//! Targets operation - listing registered targets.

use declgen_codegen::App;

use crate::reports::{TargetInfo, TargetsReport};

/// Execute the targets operation.
pub fn targets(app: &App) -> TargetsReport {
    let registry = app.registry();
    let targets = registry
        .targets()
        .map(|id| TargetInfo {
            id: id.to_string(),
            provider: registry.provider(id).unwrap_or_default().to_string(),
        })
        .collect();

    TargetsReport { targets }
}

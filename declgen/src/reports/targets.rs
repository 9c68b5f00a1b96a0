//! Targets command report data structures.

use super::output::{Output, Report};

/// Report data listing registered targets.
#[derive(Debug)]
pub struct TargetsReport {
    /// Targets in registration order.
    pub targets: Vec<TargetInfo>,
}

/// A registered target.
#[derive(Debug)]
pub struct TargetInfo {
    /// Target id passed to `--target`.
    pub id: String,
    /// Name of the plugin that registered it.
    pub provider: String,
}

impl Report for TargetsReport {
    fn render(&self, out: &mut dyn Output) {
        if self.targets.is_empty() {
            out.preformatted("No targets registered");
            return;
        }

        out.section(&format!("Targets ({})", self.targets.len()));
        for target in &self.targets {
            if target.id == target.provider {
                out.list_item(&target.id);
            } else {
                out.list_item(&format!("{} (from {})", target.id, target.provider));
            }
        }
    }
}

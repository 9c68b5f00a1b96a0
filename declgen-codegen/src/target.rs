//! Composite targets built from a template set and a runtime bundle.

use std::path::PathBuf;

use declgen_core::ArtifactSet;
use declgen_schema::Schema;

use crate::{RenderContext, Result, TemplateSet, copy_runtime_tree};

/// Output of one target generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    /// Every generated file, keyed by path relative to the output root.
    pub artifacts: ArtifactSet,
    /// The artifact to point the user at once generation completes.
    pub primary: String,
}

/// A target that renders a template set and then bundles a runtime tree.
///
/// Rendered artifacts come first; runtime files are merged after them and
/// win on path collisions.
#[derive(Debug, Clone)]
pub struct TemplateTarget {
    templates: TemplateSet,
    runtime_dir: Option<PathBuf>,
    primary: String,
}

impl TemplateTarget {
    pub fn new(templates: TemplateSet, primary: impl Into<String>) -> Self {
        Self {
            templates,
            runtime_dir: None,
            primary: primary.into(),
        }
    }

    /// Bundle the files under `dir` as `rt/...` artifacts.
    pub fn with_runtime(mut self, dir: impl Into<PathBuf>) -> Self {
        self.runtime_dir = Some(dir.into());
        self
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// Generate the full artifact set for `schema`.
    pub fn generate(&self, schema: &Schema) -> Result<Generation> {
        let ctx = RenderContext::build(schema);
        let mut artifacts = self.templates.render(&ctx)?;

        if let Some(dir) = &self.runtime_dir {
            artifacts.merge(copy_runtime_tree(dir)?);
        }

        Ok(Generation {
            artifacts,
            primary: self.primary.clone(),
        })
    }
}

//! Generation pipeline for the declgen code generator.
//!
//! This crate turns a parsed [`Schema`](declgen_schema::Schema) into the
//! artifact set of one target.
//!
//! # Module Organization
//!
//! - [`context`] - Render context built from the schema (declarations by name, namespaces)
//! - [`template`] - Template rendering for a target's ordered template set
//! - [`runtime`] - Copying a target's fixed `rt/` support tree
//! - [`target`] - Composite template + runtime targets
//! - [`registry`] - Target id to generator mapping
//! - [`plugin`] - Plugin setup hooks and directory-based target discovery
//! - [`generate`] - Generation entry points

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod context;
mod error;
pub mod generate;
pub mod plugin;
pub mod registry;
pub mod runtime;
pub mod target;
pub mod template;

pub use context::RenderContext;
pub use error::{Error, Result};
pub use generate::{App, AppBuilder, generate};
pub use plugin::{DirectoryPlugin, Plugin, Registrar, TARGET_MANIFEST, TargetManifest};
pub use registry::{Generator, TargetRegistry};
pub use runtime::copy_runtime_tree;
pub use target::{Generation, TemplateTarget};
pub use template::{TemplateSet, artifact_path};

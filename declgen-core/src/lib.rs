//! Core utilities and types for the declgen code generator.
//!
//! This crate provides the leaf building blocks shared by the code
//! generation crates: namespace resolution for declaration names and the
//! in-memory artifact set produced by every target.

mod artifact;
mod namespace;

// Generated output
pub use artifact::{ArtifactSet, write_file};
// Namespaced names
pub use namespace::{NAMESPACE_SEPARATOR, enclosing_namespace, fq_name, local_name, namespace_of};

//! Schema documents consumed by the declgen code generator.
//!
//! A schema is a JSON object whose `decls` field is an ordered list of
//! `[name, body]` pairs. Names are lists of namespace segments; bodies are
//! opaque and passed to templates untouched, as are all other top-level
//! fields.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod schema;

pub use error::{Error, Result};
pub use file::SchemaFile;
pub use schema::{Decl, Schema};

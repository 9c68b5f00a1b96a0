//! Render context built from a schema.
//!
//! The context is what every template sees: the parsed schema, the
//! declarations keyed by fully-qualified name, and the sorted set of
//! namespaces those names live in.

use std::collections::BTreeSet;

use declgen_core::namespace_of;
use declgen_schema::Schema;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Context passed to every template of a target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderContext {
    /// The schema being generated, including pass-through fields.
    pub schema: Schema,
    /// Declaration bodies keyed by fully-qualified name, in schema order.
    ///
    /// A repeated name keeps the position of its first occurrence and the
    /// body of its last one.
    pub decls_by_name: IndexMap<String, Value>,
    /// Distinct enclosing namespaces of `decls_by_name`, ascending.
    ///
    /// Top-level declarations contribute the empty namespace `""`.
    pub decl_namespaces: Vec<String>,
}

impl RenderContext {
    /// Build the render context for a schema.
    pub fn build(schema: &Schema) -> Self {
        let mut decls_by_name = IndexMap::with_capacity(schema.decls.len());

        for decl in &schema.decls {
            let name = decl.fq_name();
            debug!(name = %name, body = %decl.body, "declaration");
            if decls_by_name
                .insert(name.clone(), decl.body.clone())
                .is_some()
            {
                warn!(name = %name, "duplicate declaration name, the later body replaces the earlier one");
            }
        }

        let decl_namespaces = namespaces(decls_by_name.keys());

        Self {
            schema: schema.clone(),
            decls_by_name,
            decl_namespaces,
        }
    }
}

/// Sorted, deduplicated enclosing namespaces of fully-qualified names.
pub fn namespaces<'a>(names: impl IntoIterator<Item = &'a String>) -> Vec<String> {
    names
        .into_iter()
        .map(|name| namespace_of(name))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

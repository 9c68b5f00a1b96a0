//! Check operation - schema validation.

use declgen_codegen::context::namespaces;
use declgen_schema::{Decl, SchemaFile};

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Summarizes a parsed schema: declaration count, namespaces and names
/// declared more than once.
pub fn check(file: &SchemaFile) -> CheckReport {
    let schema = file.schema();
    let names: Vec<String> = schema.decls.iter().map(Decl::fq_name).collect();

    CheckReport {
        schema_path: file.path().to_path_buf(),
        decl_count: names.len(),
        namespaces: namespaces(&names),
        duplicates: schema.duplicate_names(),
    }
}

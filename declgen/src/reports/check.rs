//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from schema validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the schema file.
    pub schema_path: PathBuf,
    /// Number of declarations, duplicates included.
    pub decl_count: usize,
    /// Sorted, deduplicated enclosing namespaces.
    pub namespaces: Vec<String>,
    /// Fully-qualified names declared more than once.
    pub duplicates: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for name in &self.duplicates {
            out.warning(&format!(
                "'{}' is declared more than once; the last declaration wins",
                name
            ));
        }
        if !self.duplicates.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.schema_path.display()));
        out.newline();

        out.preformatted(&format!(
            "  {} declaration{}",
            self.decl_count,
            if self.decl_count == 1 { "" } else { "s" }
        ));

        if !self.namespaces.is_empty() {
            out.newline();
            out.section(&format!("  Namespaces ({})", self.namespaces.len()));
            for ns in &self.namespaces {
                let ns = if ns.is_empty() { "(global)" } else { ns.as_str() };
                out.list_item(ns);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render_with_duplicates() {
        let report = CheckReport {
            schema_path: PathBuf::from("schema.json"),
            decl_count: 3,
            namespaces: vec![String::new(), "a".to_string()],
            duplicates: vec!["a::Bar".to_string()],
        };
        let mut out = RecordingOutput::default();

        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "warning: 'a::Bar' is declared more than once; the last declaration wins",
                "",
                "✓ schema.json is valid",
                "",
                "  3 declarations",
                "",
                "  Namespaces (2):",
                "  - (global)",
                "  - a",
            ]
        );
    }
}

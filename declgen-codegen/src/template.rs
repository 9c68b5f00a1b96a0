//! Template rendering for a target's template set.
//!
//! Templates use Jinja syntax (via minijinja) and see the whole
//! [`RenderContext`] as their variables. Besides the built-in filters, the
//! environment provides:
//!
//! - `fq_name` (filter and function): join a name's segments, `["a", "Foo"]|fq_name` -> `a::Foo`
//! - `namespace_of` (filter): enclosing namespace of a qualified name, `"a::Foo"|namespace_of` -> `a`
//! - `local_name` (filter): last segment of a qualified name, `"a::Foo"|local_name` -> `Foo`

use std::path::{Path, PathBuf};

use declgen_core::{ArtifactSet, fq_name, local_name, namespace_of};
use minijinja::{Environment, ErrorKind, Value, path_loader};
use tracing::debug;

use crate::{Error, RenderContext, Result};

/// Ordered list of templates loaded from one directory.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    dir: PathBuf,
    names: Vec<String>,
}

impl TemplateSet {
    /// Create an empty template set rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            names: Vec::new(),
        }
    }

    /// Add a template, by its path relative to the set's directory.
    pub fn template(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Add several templates in order.
    pub fn templates<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Render every template in order against `ctx`.
    ///
    /// Each template produces one artifact at [`artifact_path`] of its name.
    pub fn render(&self, ctx: &RenderContext) -> Result<ArtifactSet> {
        let env = environment(&self.dir);
        let ctx = Value::from_serialize(ctx);
        let mut artifacts = ArtifactSet::new();

        for name in &self.names {
            let template = env
                .get_template(name)
                .map_err(|e| self.template_error(name, e))?;
            let rendered = template
                .render(&ctx)
                .map_err(|e| self.template_error(name, e))?;

            let path = artifact_path(name);
            debug!(template = %name, artifact = %path, bytes = rendered.len(), "rendered template");
            artifacts.insert(path, rendered);
        }

        Ok(artifacts)
    }

    fn template_error(&self, name: &str, err: minijinja::Error) -> Error {
        match err.kind() {
            ErrorKind::TemplateNotFound => Error::TemplateNotFound {
                template: name.to_string(),
                dir: self.dir.clone(),
            },
            _ => Error::Render {
                template: name.to_string(),
                source: err,
            },
        }
    }
}

fn environment(dir: &Path) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_loader(path_loader(dir.to_path_buf()));
    env.set_keep_trailing_newline(true);
    env.add_filter("fq_name", fq_name_filter);
    env.add_function("fq_name", fq_name_filter);
    env.add_filter("namespace_of", namespace_of_filter);
    env.add_filter("local_name", local_name_filter);
    env
}

fn fq_name_filter(segments: Vec<String>) -> String {
    fq_name(&segments)
}

fn namespace_of_filter(name: String) -> String {
    namespace_of(&name)
}

fn local_name_filter(name: String) -> String {
    local_name(&name).to_string()
}

/// Output path for a template: its name with the final extension removed.
///
/// `koinos.go.j2` becomes `koinos.go` and `koinos/types.hpp.j2` becomes
/// `koinos/types.hpp`. Names without an extension, including dot-files
/// such as `.gitignore`, are kept as-is.
pub fn artifact_path(template: &str) -> &str {
    let base_start = template.rfind('/').map_or(0, |i| i + 1);
    let base = &template[base_start..];
    let stem_start = base.len() - base.trim_start_matches('.').len();

    match base[stem_start..].rfind('.') {
        Some(dot) => &template[..base_start + stem_start + dot],
        None => template,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use declgen_schema::{Decl, Schema};
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    fn write_template(dir: &Path, name: &str, source: &str) {
        let path = dir.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, source).unwrap();
    }

    fn sample_context() -> RenderContext {
        RenderContext::build(&Schema::new(vec![
            Decl::new(["a", "b", "Foo"], json!({"fields": [{"name": "x", "type": "int32"}]})),
            Decl::new(["a", "Bar"], json!({})),
        ]))
    }

    #[test]
    fn test_artifact_path() {
        assert_eq!(artifact_path("koinos.go.j2"), "koinos.go");
        assert_eq!(artifact_path("X.ext.tmpl"), "X.ext");
        assert_eq!(artifact_path("koinos/types.hpp.j2"), "koinos/types.hpp");
        assert_eq!(artifact_path("README"), "README");
        assert_eq!(artifact_path(".gitignore"), ".gitignore");
        assert_eq!(artifact_path(".env.j2"), ".env");
        assert_eq!(artifact_path("v1.2/README"), "v1.2/README");
    }

    #[test]
    fn test_render_in_order() {
        let temp = TempDir::new().unwrap();
        write_template(temp.path(), "names.txt.j2", "{% for name in decls_by_name %}{{ name }};{% endfor %}");
        write_template(temp.path(), "ns.txt.j2", "{{ decl_namespaces|join(',') }}");

        let artifacts = TemplateSet::new(temp.path())
            .template("ns.txt.j2")
            .template("names.txt.j2")
            .render(&sample_context())
            .unwrap();

        assert_eq!(artifacts.paths().collect::<Vec<_>>(), vec!["ns.txt", "names.txt"]);
        insta::assert_snapshot!(artifacts.get("names.txt").unwrap(), @"a::b::Foo;a::Bar;");
        insta::assert_snapshot!(artifacts.get("ns.txt").unwrap(), @"a,a::b");
    }

    #[test]
    fn test_render_custom_filters() {
        let temp = TempDir::new().unwrap();
        write_template(
            temp.path(),
            "out.txt.j2",
            "{% for decl in schema.decls %}{{ decl[0]|fq_name }}={{ fq_name(decl[0]) }}@{{ decl[0]|fq_name|namespace_of }}/{{ decl[0]|fq_name|local_name }}|{% endfor %}",
        );

        let artifacts = TemplateSet::new(temp.path())
            .template("out.txt.j2")
            .render(&sample_context())
            .unwrap();

        insta::assert_snapshot!(artifacts.get("out.txt").unwrap(), @"a::b::Foo=a::b::Foo@a::b/Foo|a::Bar=a::Bar@a/Bar|");
    }

    #[test]
    fn test_render_sees_declaration_bodies() {
        let temp = TempDir::new().unwrap();
        write_template(
            temp.path(),
            "fields.txt.j2",
            "{% for name, decl in decls_by_name|items %}{% if decl.fields is defined %}{% for f in decl.fields %}{{ name }}.{{ f.name }}:{{ f.type }}{% endfor %}{% endif %}{% endfor %}",
        );

        let artifacts = TemplateSet::new(temp.path())
            .template("fields.txt.j2")
            .render(&sample_context())
            .unwrap();

        insta::assert_snapshot!(artifacts.get("fields.txt").unwrap(), @"a::b::Foo.x:int32");
    }

    #[test]
    fn test_render_keeps_trailing_newline() {
        let temp = TempDir::new().unwrap();
        write_template(temp.path(), "line.txt.j2", "one line\n");

        let artifacts = TemplateSet::new(temp.path())
            .template("line.txt.j2")
            .render(&sample_context())
            .unwrap();

        assert_eq!(artifacts.get("line.txt"), Some("one line\n"));
    }

    #[test]
    fn test_render_nested_template_name() {
        let temp = TempDir::new().unwrap();
        write_template(temp.path(), "koinos/types.hpp.j2", "#pragma once\n");

        let artifacts = TemplateSet::new(temp.path())
            .template("koinos/types.hpp.j2")
            .render(&sample_context())
            .unwrap();

        assert!(artifacts.contains("koinos/types.hpp"));
    }

    #[test]
    fn test_empty_set_renders_nothing() {
        let temp = TempDir::new().unwrap();

        let artifacts = TemplateSet::new(temp.path().join("missing"))
            .render(&sample_context())
            .unwrap();

        assert!(artifacts.is_empty());
    }

    #[test]
    fn test_missing_template() {
        let temp = TempDir::new().unwrap();

        let err = TemplateSet::new(temp.path())
            .template("absent.go.j2")
            .render(&sample_context())
            .unwrap_err();

        match err {
            Error::TemplateNotFound { template, dir } => {
                assert_eq!(template, "absent.go.j2");
                assert_eq!(dir, temp.path());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_filter_type_mismatch_is_render_error() {
        let temp = TempDir::new().unwrap();
        write_template(temp.path(), "bad.txt.j2", "{{ 42|fq_name }}");

        let err = TemplateSet::new(temp.path())
            .template("bad.txt.j2")
            .render(&sample_context())
            .unwrap_err();

        assert!(matches!(err, Error::Render { ref template, .. } if template == "bad.txt.j2"));
    }

    #[test]
    fn test_undefined_attribute_is_render_error() {
        let temp = TempDir::new().unwrap();
        write_template(temp.path(), "undefined.txt.j2", "{{ missing.attr }}");

        let err = TemplateSet::new(temp.path())
            .template("undefined.txt.j2")
            .render(&sample_context())
            .unwrap_err();

        assert!(matches!(err, Error::Render { ref template, .. } if template == "undefined.txt.j2"));
    }

    #[test]
    fn test_undefined_variable_renders_empty() {
        let temp = TempDir::new().unwrap();
        write_template(temp.path(), "lenient.txt.j2", "[{{ missing }}]");

        let artifacts = TemplateSet::new(temp.path())
            .template("lenient.txt.j2")
            .render(&sample_context())
            .unwrap();

        assert_eq!(artifacts.get("lenient.txt"), Some("[]"));
    }

    #[test]
    fn test_syntax_error_is_render_error() {
        let temp = TempDir::new().unwrap();
        write_template(temp.path(), "broken.txt.j2", "{% for x in %}");

        let err = TemplateSet::new(temp.path())
            .template("broken.txt.j2")
            .render(&sample_context())
            .unwrap_err();

        assert!(matches!(err, Error::Render { .. }));
        assert_eq!(err.to_string(), "failed to render template 'broken.txt.j2'");
    }
}

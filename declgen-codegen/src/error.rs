use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("unknown target '{target}'")]
    #[diagnostic(
        code(declgen::unknown_target),
        help("available targets: {available}")
    )]
    UnknownTarget { target: String, available: String },

    #[error("template '{template}' not found in '{dir}'")]
    #[diagnostic(code(declgen::template_not_found))]
    TemplateNotFound { template: String, dir: PathBuf },

    #[error("failed to render template '{template}'")]
    #[diagnostic(code(declgen::render_error))]
    Render {
        template: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("failed to read '{path}'")]
    #[diagnostic(code(declgen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid target manifest '{path}'")]
    #[diagnostic(
        code(declgen::target_manifest),
        help("a target manifest needs a [target] table with `name` and `primary`")
    )]
    TargetManifest {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("plugin '{plugin}' failed to set up")]
    #[diagnostic(code(declgen::plugin_setup))]
    PluginSetup {
        plugin: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn unknown_target<'a>(
        target: &str,
        available: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let available: Vec<_> = available.into_iter().collect();
        Error::UnknownTarget {
            target: target.to_string(),
            available: if available.is_empty() {
                "none".to_string()
            } else {
                available.join(", ")
            },
        }
    }
}

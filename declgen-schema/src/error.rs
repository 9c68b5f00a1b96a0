use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};
use thiserror::Error;

/// Result type for schema loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(declgen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema")]
    #[diagnostic(
        code(declgen::parse_error),
        help("a schema is a JSON object with a \"decls\" list of [name, body] pairs")
    )]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid schema here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create a parse error from a JSON error with source context.
    pub fn parse(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span: error_span(&source, src),
            source,
        })
    }
}

/// serde_json reports 1-based line/column; line 0 means no position (e.g. I/O).
fn error_span(err: &serde_json::Error, src: &str) -> Option<SourceSpan> {
    if err.line() == 0 {
        return None;
    }
    let offset = SourceOffset::from_location(src, err.line(), err.column());
    Some(SourceSpan::new(offset, 0))
}

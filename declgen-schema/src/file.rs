use std::path::{Path, PathBuf};

use crate::{Error, Result, Schema};

/// A schema file on disk with both raw content and parsed schema.
#[derive(Debug)]
pub struct SchemaFile {
    path: PathBuf,
    content: String,
    schema: Schema,
}

impl SchemaFile {
    /// Open and parse a schema file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let schema = Schema::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            schema,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

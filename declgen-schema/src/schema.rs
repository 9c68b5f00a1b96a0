//! Schema document model.

use std::{collections::HashSet, str::FromStr};

use declgen_core::fq_name;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Error, Result};

/// A parsed schema document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Declarations in document order.
    pub decls: Vec<Decl>,

    /// Every other top-level field, passed through to templates untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single declaration: a namespaced name and an opaque body.
///
/// Serialized as a two-element array `[["ns", "Name"], {...}]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(Vec<String>, Value)", into = "(Vec<String>, Value)")]
pub struct Decl {
    /// Namespace segments, outermost first.
    pub name: Vec<String>,
    /// Schema-specific declaration body.
    pub body: Value,
}

impl Decl {
    pub fn new<S: Into<String>>(name: impl IntoIterator<Item = S>, body: Value) -> Self {
        Self {
            name: name.into_iter().map(Into::into).collect(),
            body,
        }
    }

    /// Fully-qualified name of this declaration.
    pub fn fq_name(&self) -> String {
        fq_name(&self.name)
    }
}

impl From<(Vec<String>, Value)> for Decl {
    fn from((name, body): (Vec<String>, Value)) -> Self {
        Self { name, body }
    }
}

impl From<Decl> for (Vec<String>, Value) {
    fn from(decl: Decl) -> Self {
        (decl.name, decl.body)
    }
}

impl Schema {
    pub fn new(decls: Vec<Decl>) -> Self {
        Self {
            decls,
            extra: Map::new(),
        }
    }

    /// Parse a schema from JSON with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::parse(e, content, filename))
    }

    /// Fully-qualified names declared more than once, in order of first repeat.
    pub fn duplicate_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();

        for decl in &self.decls {
            let name = decl.fq_name();
            if !seen.insert(name.clone()) && reported.insert(name.clone()) {
                duplicates.push(name);
            }
        }
        duplicates
    }
}

impl FromStr for Schema {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "schema.json")
    }
}

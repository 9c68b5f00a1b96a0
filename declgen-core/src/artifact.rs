use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use eyre::{Result, WrapErr, bail};
use indexmap::{IndexMap, map};
use tempfile::TempDir;

/// Ordered set of generated text files, keyed by path relative to the output root.
///
/// Iteration follows insertion order. Inserting an existing path replaces
/// its content and keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactSet {
    files: IndexMap<String, String>,
}

impl ArtifactSet {
    /// Create an empty artifact set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an artifact, returning the content it replaced, if any.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) -> Option<String> {
        self.files.insert(path.into(), content.into())
    }

    /// Merge `other` into this set. Artifacts from `other` win on collision.
    pub fn merge(&mut self, other: ArtifactSet) {
        self.files.extend(other.files);
    }

    /// Get the content of an artifact.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    /// Check whether an artifact exists at `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// Artifact paths in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// `(path, content)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(p, c)| (p.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Write every artifact under `root`, creating intermediate directories.
    ///
    /// Either the whole set is written or nothing is. Paths are checked
    /// first: an absolute path, one escaping `root`, or one whose location
    /// is blocked by an existing non-directory fails before any write. The
    /// files are then written to a staging directory beside `root` and moved
    /// into place. Returns the written file paths in order.
    pub fn write_all(&self, root: &Path) -> Result<Vec<PathBuf>> {
        for path in self.paths() {
            check_relative(path)?;
            check_destination(root, path)?;
        }
        if self.is_empty() {
            return Ok(Vec::new());
        }

        let staging = staging_dir(root)?;
        for (path, content) in self.iter() {
            write_file(&staging.path().join(path), content)?;
        }

        let written: Vec<PathBuf> = self.paths().map(|path| root.join(path)).collect();
        if !root.exists() {
            fs::rename(staging.path(), root)
                .wrap_err_with(|| format!("failed to move output into '{}'", root.display()))?;
            return Ok(written);
        }

        for (path, full) in self.paths().zip(&written) {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::rename(staging.path().join(path), full)
                .wrap_err_with(|| format!("failed to move '{}' into place", full.display()))?;
        }
        Ok(written)
    }
}

fn check_relative(path: &str) -> Result<()> {
    if path.is_empty() {
        bail!("artifact path is empty");
    }
    for component in Path::new(path).components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            _ => bail!("artifact path '{}' must stay inside the output directory", path),
        }
    }
    Ok(())
}

/// Fail if an existing entry under `root` would block writing `path`.
fn check_destination(root: &Path, path: &str) -> Result<()> {
    let mut current = root.to_path_buf();
    if current.exists() && !current.is_dir() {
        bail!("output directory '{}' is not a directory", root.display());
    }

    let mut components = Path::new(path).components().peekable();
    while let Some(component) = components.next() {
        current.push(component);
        if !current.exists() {
            return Ok(());
        }
        let is_last = components.peek().is_none();
        if is_last && current.is_dir() {
            bail!("cannot write artifact '{}': '{}' is a directory", path, current.display());
        }
        if !is_last && !current.is_dir() {
            bail!("cannot write artifact '{}': '{}' is not a directory", path, current.display());
        }
    }
    Ok(())
}

/// Staging directory on the same filesystem as `root`.
fn staging_dir(root: &Path) -> Result<TempDir> {
    let parent = match root.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;
    tempfile::Builder::new()
        .prefix(".declgen-")
        .tempdir_in(parent)
        .wrap_err_with(|| format!("failed to create staging directory in '{}'", parent.display()))
}

/// Write `content` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

impl IntoIterator for ArtifactSet {
    type Item = (String, String);
    type IntoIter = map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}

impl<P: Into<String>, C: Into<String>> FromIterator<(P, C)> for ArtifactSet {
    fn from_iter<I: IntoIterator<Item = (P, C)>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<P: Into<String>, C: Into<String>> Extend<(P, C)> for ArtifactSet {
    fn extend<I: IntoIterator<Item = (P, C)>>(&mut self, iter: I) {
        for (path, content) in iter {
            self.insert(path, content);
        }
    }
}

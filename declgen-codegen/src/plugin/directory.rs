//! Targets discovered from a search directory.
//!
//! Each immediate subdirectory of a search path holding a `target.toml`
//! defines one target:
//!
//! ```text
//! <search path>/
//!   golang/
//!     target.toml
//!     templates/koinos.go.j2
//!     rt/basetypes.go
//! ```
//!
//! ```toml
//! [target]
//! name = "golang"
//! primary = "koinos.go"
//! templates = ["koinos.go.j2"]
//! runtime = true
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::debug;

use super::{Plugin, Registrar};
use crate::{Error, Result, TemplateSet, TemplateTarget, runtime::RUNTIME_DIR};

/// File name of a target manifest.
pub const TARGET_MANIFEST: &str = "target.toml";

/// Directory holding a target's templates, relative to its manifest.
const TEMPLATES_DIR: &str = "templates";

#[derive(Debug, Deserialize)]
struct ManifestFile {
    target: TargetManifest,
}

/// The `[target]` table of a `target.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TargetManifest {
    /// Target id used to select the target.
    pub name: String,
    /// Primary artifact path.
    pub primary: String,
    /// Templates to render, in order, relative to `templates/`.
    #[serde(default)]
    pub templates: Vec<String>,
    /// Whether to bundle the `rt/` directory.
    #[serde(default = "default_runtime")]
    pub runtime: bool,
}

fn default_runtime() -> bool {
    true
}

impl TargetManifest {
    /// Load a manifest from a `target.toml` file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let file: ManifestFile = toml::from_str(&content).map_err(|source| Error::TargetManifest {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(file.target)
    }

    /// Build the target defined by this manifest, rooted at `dir`.
    pub fn into_target(self, dir: &Path) -> TemplateTarget {
        let templates = TemplateSet::new(dir.join(TEMPLATES_DIR)).templates(self.templates);
        let target = TemplateTarget::new(templates, self.primary);
        if self.runtime {
            target.with_runtime(dir.join(RUNTIME_DIR))
        } else {
            target
        }
    }
}

/// Plugin registering every target found under one search directory.
#[derive(Debug, Clone)]
pub struct DirectoryPlugin {
    name: String,
    search_path: PathBuf,
}

impl DirectoryPlugin {
    pub fn new(search_path: impl Into<PathBuf>) -> Self {
        let search_path = search_path.into();
        Self {
            name: search_path.display().to_string(),
            search_path,
        }
    }

    pub fn search_path(&self) -> &Path {
        &self.search_path
    }

    /// Target directories and their manifests, in file-name order.
    pub fn discover(&self) -> Result<Vec<(PathBuf, TargetManifest)>> {
        let read_dir = fs::read_dir(&self.search_path).map_err(|e| Error::io(&self.search_path, e))?;

        let mut dirs = Vec::new();
        for entry in read_dir {
            let path = entry.map_err(|e| Error::io(&self.search_path, e))?.path();
            if path.join(TARGET_MANIFEST).is_file() {
                dirs.push(path);
            }
        }
        dirs.sort();

        dirs.into_iter()
            .map(|dir| {
                let manifest = TargetManifest::load(&dir.join(TARGET_MANIFEST))?;
                Ok((dir, manifest))
            })
            .collect()
    }
}

impl Plugin for DirectoryPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn setup(&self, registrar: &mut Registrar<'_>) -> Result<()> {
        for (dir, manifest) in self.discover()? {
            debug!(dir = %dir.display(), id = %manifest.name, "discovered target");
            let id = manifest.name.clone();
            let target = manifest.into_target(&dir);
            registrar.register_target(id, move |schema| target.generate(schema));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn write_manifest(dir: &Path, content: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(TARGET_MANIFEST), content).unwrap();
    }

    #[test]
    fn test_load_manifest_defaults() {
        let temp = TempDir::new().unwrap();
        write_manifest(
            temp.path(),
            r#"
            [target]
            name = "golang"
            primary = "koinos.go"
            "#,
        );

        let manifest = TargetManifest::load(&temp.path().join(TARGET_MANIFEST)).unwrap();

        assert_eq!(
            manifest,
            TargetManifest {
                name: "golang".to_string(),
                primary: "koinos.go".to_string(),
                templates: Vec::new(),
                runtime: true,
            }
        );
    }

    #[test]
    fn test_load_manifest_invalid() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), "[target]\nname = \"golang\"\n");

        let err = TargetManifest::load(&temp.path().join(TARGET_MANIFEST)).unwrap_err();

        assert!(matches!(err, Error::TargetManifest { .. }));
    }

    #[test]
    fn test_discover_sorted_and_filtered() {
        let temp = TempDir::new().unwrap();
        write_manifest(
            &temp.path().join("zeta"),
            "[target]\nname = \"z\"\nprimary = \"z.txt\"\n",
        );
        write_manifest(
            &temp.path().join("alpha"),
            "[target]\nname = \"a\"\nprimary = \"a.txt\"\n",
        );
        fs::create_dir_all(temp.path().join("not-a-target")).unwrap();
        fs::write(temp.path().join("stray.toml"), "").unwrap();

        let found = DirectoryPlugin::new(temp.path()).discover().unwrap();

        let names: Vec<_> = found.iter().map(|(_, m)| m.name.as_str()).collect();
        assert_eq!(names, vec!["a", "z"]);
        assert_eq!(found[0].0, temp.path().join("alpha"));
    }

    #[test]
    fn test_discover_missing_search_path() {
        let temp = TempDir::new().unwrap();

        let err = DirectoryPlugin::new(temp.path().join("missing"))
            .discover()
            .unwrap_err();

        assert!(matches!(err, Error::Io { .. }));
    }
}

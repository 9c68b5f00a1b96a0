//! Runtime support bundles.
//!
//! Targets that need fixed support code ship it in an `rt` directory next
//! to their templates. Every file of that tree is copied verbatim into the
//! output under the `rt/` prefix.

use std::{fs, io, path::Path};

use declgen_core::ArtifactSet;
use tracing::debug;
use walkdir::WalkDir;

use crate::{Error, Result};

/// Path prefix of runtime files in the output.
pub const RUNTIME_DIR: &str = "rt";

/// Copy every regular file under `source_root` into an artifact set keyed
/// by `rt/<relative path>`.
///
/// Files are visited in file-name order. Symbolic links are not followed
/// and, like other non-regular entries, are skipped. A missing root or an
/// unreadable file fails the whole copy.
pub fn copy_runtime_tree(source_root: &Path) -> Result<ArtifactSet> {
    let metadata = fs::metadata(source_root).map_err(|e| Error::io(source_root, e))?;
    if !metadata.is_dir() {
        return Err(Error::io(
            source_root,
            io::Error::other("runtime bundle root is not a directory"),
        ));
    }

    let mut artifacts = ArtifactSet::new();
    for entry in WalkDir::new(source_root)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(source_root).to_path_buf();
            Error::io(path, io::Error::from(e))
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let relative = path.strip_prefix(source_root).unwrap_or(path);
        let artifact = runtime_path(relative);

        debug!(file = %path.display(), artifact = %artifact, "bundled runtime file");
        artifacts.insert(artifact, content);
    }

    Ok(artifacts)
}

/// `rt/` followed by the `/`-joined components of `relative`.
fn runtime_path(relative: &Path) -> String {
    let mut path = String::from(RUNTIME_DIR);
    for component in relative.components() {
        path.push('/');
        path.push_str(&component.as_os_str().to_string_lossy());
    }
    path
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_copy_runtime_tree() {
        let temp = TempDir::new().unwrap();
        let rt = temp.path().join("rt");
        fs::create_dir_all(rt.join("nested").join("deeper")).unwrap();
        fs::write(rt.join("basetypes.go"), "package koinos\n").unwrap();
        fs::write(rt.join("nested").join("a.ts"), "export {}\n").unwrap();
        fs::write(rt.join("nested").join("deeper").join("b.hpp"), "#pragma once\n").unwrap();

        let artifacts = copy_runtime_tree(&rt).unwrap();

        assert_eq!(
            artifacts.paths().collect::<Vec<_>>(),
            vec!["rt/basetypes.go", "rt/nested/a.ts", "rt/nested/deeper/b.hpp"]
        );
        assert_eq!(artifacts.get("rt/basetypes.go"), Some("package koinos\n"));
        assert_eq!(artifacts.get("rt/nested/deeper/b.hpp"), Some("#pragma once\n"));
    }

    #[test]
    fn test_copy_is_verbatim() {
        let temp = TempDir::new().unwrap();
        let content = "{{ not a template }}\r\n\ttabs and \u{e9}\n";
        fs::write(temp.path().join("raw.txt"), content).unwrap();

        let artifacts = copy_runtime_tree(temp.path()).unwrap();

        assert_eq!(artifacts.get("rt/raw.txt"), Some(content));
    }

    #[test]
    fn test_empty_directory() {
        let temp = TempDir::new().unwrap();

        let artifacts = copy_runtime_tree(temp.path()).unwrap();

        assert!(artifacts.is_empty());
    }

    #[test]
    fn test_missing_root() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("rt");

        let err = copy_runtime_tree(&missing).unwrap_err();

        match err {
            Error::Io { path, source } => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_skipped() {
        let temp = TempDir::new().unwrap();
        let rt = temp.path().join("rt");
        let outside = temp.path().join("outside");
        fs::create_dir_all(&rt).unwrap();
        fs::create_dir_all(&outside).unwrap();
        fs::write(rt.join("a.txt"), "a").unwrap();
        fs::write(outside.join("secret.txt"), "secret").unwrap();
        std::os::unix::fs::symlink(outside.join("secret.txt"), rt.join("link.txt")).unwrap();
        std::os::unix::fs::symlink(&outside, rt.join("linked_dir")).unwrap();

        let artifacts = copy_runtime_tree(&rt).unwrap();

        assert_eq!(artifacts.paths().collect::<Vec<_>>(), vec!["rt/a.txt"]);
    }

    #[test]
    fn test_non_utf8_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "a").unwrap();
        fs::write(temp.path().join("bin.dat"), [0xff, 0xfe]).unwrap();

        let err = copy_runtime_tree(temp.path()).unwrap_err();

        match err {
            Error::Io { path, source } => {
                assert_eq!(path, temp.path().join("bin.dat"));
                assert_eq!(source.kind(), io::ErrorKind::InvalidData);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_root_is_a_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("rt");
        fs::write(&file, "not a dir").unwrap();

        assert!(matches!(copy_runtime_tree(&file), Err(Error::Io { .. })));
    }

    #[test]
    fn test_runtime_path() {
        assert_eq!(runtime_path(Path::new("a.go")), "rt/a.go");
        assert_eq!(runtime_path(&Path::new("x").join("y.ts")), "rt/x/y.ts");
    }
}

//! Manifest parsing for declared requirements.
//!
//! A manifest is a newline-separated list of `name==version` records (no
//! comment syntax, no range operators). Files are processed in the order
//! given; a package declared in more than one file keeps the last
//! declaration seen, along with the file that made it.
//!
//! File access is injectable so tests can parse without touching the
//! filesystem, in the same spirit as the prober's command injection.

use crate::error::{PipcheckError, Result};
use crate::requirement::{split_pin, RequirementSet};
use std::path::{Path, PathBuf};

/// Parse all manifests into a fresh [`RequirementSet`] using real file I/O.
///
/// Any unreadable file is fatal: the error propagates with no partial
/// result.
pub fn load_all(paths: &[PathBuf]) -> Result<RequirementSet> {
    load_all_with(paths, |path| std::fs::read_to_string(path))
}

/// Parse all manifests with a custom file-access capability.
pub fn load_all_with<F>(paths: &[PathBuf], read_fn: F) -> Result<RequirementSet>
where
    F: Fn(&Path) -> std::io::Result<String>,
{
    let mut set = RequirementSet::new();
    for path in paths {
        let contents = read_fn(path).map_err(|source| PipcheckError::ManifestRead {
            path: path.clone(),
            source,
        })?;
        let declared = parse_into(&contents, &file_name(path), &mut set);
        tracing::debug!(
            "parsed {} declaration(s) from {}",
            declared,
            path.display()
        );
    }
    Ok(set)
}

/// Parse one manifest's contents into the set, returning the number of
/// declarations recorded.
fn parse_into(contents: &str, file: &str, set: &mut RequirementSet) -> usize {
    let mut declared = 0;
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match split_pin(line) {
            Some((name, version)) => {
                set.record_declared(name, version, file);
                declared += 1;
            }
            None => {
                tracing::warn!("{}: skipping line without '==': {}", file, line);
            }
        }
    }
    declared
}

/// File name component used as the requirement source, falling back to the
/// full path for odd inputs like `..`.
fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fake_reader(
        files: Vec<(&'static str, &'static str)>,
    ) -> impl Fn(&Path) -> std::io::Result<String> {
        move |path| {
            files
                .iter()
                .find(|(name, _)| Path::new(name) == path)
                .map(|(_, contents)| contents.to_string())
                .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"))
        }
    }

    #[test]
    fn parses_single_manifest() {
        let reader = fake_reader(vec![("requirements.txt", "foo==1.2.3\nbar==2.0.0\n")]);
        let set = load_all_with(&[PathBuf::from("requirements.txt")], reader).unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.get("foo").unwrap().declared.as_deref(), Some("1.2.3"));
        assert_eq!(set.get("bar").unwrap().declared.as_deref(), Some("2.0.0"));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let reader = fake_reader(vec![("requirements.txt", "\nfoo==1.2.3\n\n\nbar==2.0.0\n\n")]);
        let set = load_all_with(&[PathBuf::from("requirements.txt")], reader).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn lines_without_separator_are_skipped() {
        let reader = fake_reader(vec![("requirements.txt", "foo==1.2.3\nnot a pin\n")]);
        let set = load_all_with(&[PathBuf::from("requirements.txt")], reader).unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.get("not a pin").is_none());
    }

    #[test]
    fn records_source_file_name() {
        let reader = fake_reader(vec![("deps/requirements.txt", "foo==1.2.3\n")]);
        let set = load_all_with(&[PathBuf::from("deps/requirements.txt")], reader).unwrap();

        let req = set.get("foo").unwrap();
        assert_eq!(req.source.display_name(), "requirements.txt");
    }

    #[test]
    fn later_file_overwrites_earlier_declaration() {
        let reader = fake_reader(vec![
            ("requirements.txt", "foo==1.0.0\n"),
            ("requirements-dev.txt", "foo==2.0.0\n"),
        ]);
        let set = load_all_with(
            &[
                PathBuf::from("requirements.txt"),
                PathBuf::from("requirements-dev.txt"),
            ],
            reader,
        )
        .unwrap();

        let req = set.get("foo").unwrap();
        assert_eq!(req.declared.as_deref(), Some("2.0.0"));
        assert_eq!(req.source.display_name(), "requirements-dev.txt");
    }

    #[test]
    fn disjoint_files_merge_order_independently() {
        let files = vec![
            ("requirements.txt", "foo==1.2.3\n"),
            ("requirements-dev.txt", "bar==3.4.5\n"),
        ];
        let forward = load_all_with(
            &[
                PathBuf::from("requirements.txt"),
                PathBuf::from("requirements-dev.txt"),
            ],
            fake_reader(files.clone()),
        )
        .unwrap();
        let reverse = load_all_with(
            &[
                PathBuf::from("requirements-dev.txt"),
                PathBuf::from("requirements.txt"),
            ],
            fake_reader(files),
        )
        .unwrap();

        for set in [&forward, &reverse] {
            assert_eq!(set.get("foo").unwrap().declared.as_deref(), Some("1.2.3"));
            assert_eq!(set.get("bar").unwrap().declared.as_deref(), Some("3.4.5"));
        }
    }

    #[test]
    fn unreadable_file_is_fatal() {
        let reader = fake_reader(vec![]);
        let err = load_all_with(&[PathBuf::from("missing.txt")], reader).unwrap_err();
        assert!(matches!(
            err,
            crate::error::PipcheckError::ManifestRead { .. }
        ));
    }

    #[test]
    fn load_all_reads_real_files() {
        let temp = TempDir::new().unwrap();
        let manifest = temp.path().join("requirements.txt");
        fs::write(&manifest, "foo==1.2.3\n").unwrap();

        let set = load_all(&[manifest]).unwrap();
        assert_eq!(set.get("foo").unwrap().declared.as_deref(), Some("1.2.3"));
    }

    #[test]
    fn load_all_fails_on_missing_real_file() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.txt");
        assert!(load_all(&[missing]).is_err());
    }
}

//! Lists performer folders under the root and filters them against the blacklist.

use crate::ImportError;
use std::path::Path;
use tracing::warn;
use walkdir::WalkDir;

/// Names of the immediate subdirectories of `root`, sorted by file name.
///
/// Symlinks are followed, so a link to a directory counts as one.
pub fn list_subdirectories(root: &Path) -> Result<Vec<String>, ImportError> {
    if !root.is_dir() {
        return Err(ImportError::InvalidRoot(root.to_path_buf()));
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) if e.depth() == 0 => return Err(ImportError::Walk(e)),
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        match entry.file_name().to_str() {
            Some(name) => names.push(name.to_string()),
            None => warn!(path = ?entry.path(), "skipping folder with non UTF-8 name"),
        }
    }
    Ok(names)
}

/// Case-insensitive substring blacklist.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    entries: Vec<String>,
}

impl Blacklist {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    pub fn matches(&self, name: &str) -> bool {
        let lowered = name.to_lowercase();
        self.entries.iter().any(|e| lowered.contains(e.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn blacklist_is_case_insensitive_substring() {
        let bl = Blacklist::new(["misc", "Studios"]);
        assert!(bl.matches("Misc Stuff"));
        assert!(bl.matches("big STUDIOS inc"));
        assert!(!bl.matches("Jane Doe"));
    }

    #[test]
    fn blank_entries_are_ignored() {
        let bl = Blacklist::new(["", "  "]);
        assert!(bl.is_empty());
        assert!(!bl.matches("anything"));
    }

    #[test]
    fn lists_only_immediate_directories() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("Jane Doe/scenes")).unwrap();
        fs::create_dir(temp.path().join("Amy Lee")).unwrap();
        fs::write(temp.path().join("notes.txt"), "x").unwrap();

        let names = list_subdirectories(temp.path()).unwrap();
        assert_eq!(names, vec!["Amy Lee".to_string(), "Jane Doe".to_string()]);
    }

    #[test]
    fn missing_root_is_invalid() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("nope");
        assert!(matches!(
            list_subdirectories(&missing),
            Err(ImportError::InvalidRoot(_))
        ));
    }

    #[test]
    fn file_root_is_invalid() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("file.txt");
        fs::write(&file, "x").unwrap();
        assert!(matches!(
            list_subdirectories(&file),
            Err(ImportError::InvalidRoot(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directory_counts_as_directory() {
        use std::os::unix::fs::symlink;

        let temp = tempdir().unwrap();
        let target = tempdir().unwrap();
        fs::create_dir(temp.path().join("Jane Doe")).unwrap();
        symlink(target.path(), temp.path().join("Amy Lee")).unwrap();
        fs::write(temp.path().join("notes.txt"), "x").unwrap();
        symlink(temp.path().join("notes.txt"), temp.path().join("link.txt")).unwrap();

        let names = list_subdirectories(temp.path()).unwrap();
        assert_eq!(names, vec!["Amy Lee".to_string(), "Jane Doe".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_folder_names_are_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("Jane Doe")).unwrap();
        let bad = OsStr::from_bytes(b"caf\xe9");
        // Some filesystems reject invalid UTF-8 outright; nothing to check then.
        if fs::create_dir(temp.path().join(bad)).is_err() {
            return;
        }

        let names = list_subdirectories(temp.path()).unwrap();
        assert_eq!(names, vec!["Jane Doe".to_string()]);
    }
}

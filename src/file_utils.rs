use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::InjectError;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    /// List the regular files directly inside `dir` whose name ends with
    /// `.{extension}`, sorted by file name. The match is case-sensitive.
    ///
    /// Entries that fail to resolve (dangling symlinks, editor lock files)
    /// only matter when their name matches; otherwise they are ignored.
    pub fn list_files_with_extension<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>, InjectError> {
        let dir = dir.as_ref();
        let suffix = format!(".{}", extension.trim_start_matches('.'));
        let has_suffix = |path: &Path| {
            path.file_name()
                .map(|name| {
                    let name = name.to_string_lossy();
                    name.len() > suffix.len() && name.ends_with(&suffix)
                })
                .unwrap_or(false)
        };
        let mut result = Vec::new();

        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let relevant = e.depth() == 0 || e.path().is_none_or(|p| has_suffix(p));
                    if relevant {
                        return Err(InjectError::ListDir {
                            path: dir.to_path_buf(),
                            message: e.to_string(),
                        });
                    }
                    debug!("Ignoring unreadable entry: {}", e);
                    continue;
                }
            };

            let path = entry.path();
            // Follows symlinks; a dangling link is not a file
            if has_suffix(path) && path.is_file() {
                result.push(entry.into_path());
            }
        }

        Ok(result)
    }

    // @returns: File name with its trailing extension replaced
    pub fn swap_extension<P: AsRef<Path>>(file_name: P, extension: &str) -> PathBuf {
        file_name
            .as_ref()
            .with_extension(extension.trim_start_matches('.'))
    }

    /// Read a UTF-8 file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String, InjectError> {
        fs::read_to_string(&path).map_err(|source| InjectError::Read {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }

    /// Overwrite an existing file with UTF-8 content. Parent directories are
    /// never created.
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<(), InjectError> {
        fs::write(&path, content.as_bytes()).map_err(|source| InjectError::Write {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/*!
 * Tests for file utility functions
 */

use std::fs;
use std::path::Path;
use anyhow::Result;
use docinject::file_utils::FileManager;
use docinject::errors::InjectError;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "page.html", "<html></html>")?;

    assert!(FileManager::file_exists(&test_file));

    Ok(())
}

/// A directory is not a file
#[test]
fn test_file_exists_withDirectory_shouldReturnFalse() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    assert!(!FileManager::file_exists(temp_dir.path()));
    assert!(FileManager::dir_exists(temp_dir.path()));

    Ok(())
}

/// Test that dir_exists returns false for non-existent directories
#[test]
fn test_dir_exists_withNonExistentDir_shouldReturnFalse() {
    assert!(!FileManager::dir_exists("./non_existent_directory_12345"));
}

/// Only direct children with the extension are listed, sorted by name
#[test]
fn test_list_files_withMixedEntries_shouldReturnSortedMatches() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path();
    common::create_test_file(dir, "b_second.md", "b")?;
    common::create_test_file(dir, "a_first.md", "a")?;
    common::create_test_file(dir, "notes.txt", "x")?;
    common::create_test_file(dir, "upper.MD", "x")?;
    common::create_test_file(&dir.join("nested"), "deep.md", "x")?;
    fs::create_dir(dir.join("folder.md"))?;

    let files = FileManager::list_files_with_extension(dir, "md")?;
    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();

    assert_eq!(names, vec!["a_first.md", "b_second.md"]);

    Ok(())
}

/// A leading dot on the extension is accepted
#[test]
fn test_list_files_withDottedExtension_shouldMatchSameFiles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "intro.md", "x")?;

    let files = FileManager::list_files_with_extension(temp_dir.path(), ".md")?;
    assert_eq!(files.len(), 1);

    Ok(())
}

/// Listing a missing directory is an error
#[test]
fn test_list_files_withMissingDir_shouldReturnListDirError() {
    let result = FileManager::list_files_with_extension("./non_existent_directory_12345", "md");
    assert!(matches!(result, Err(InjectError::ListDir { .. })));
}

/// The trailing extension is replaced, non-ASCII names survive
#[test]
fn test_swap_extension_withVariousNames_shouldReplaceTrailingExtension() {
    assert_eq!(FileManager::swap_extension("intro.md", "html"), Path::new("intro.html"));
    assert_eq!(
        FileManager::swap_extension("class1_css选择器基础.md", "html"),
        Path::new("class1_css选择器基础.html")
    );
    assert_eq!(FileManager::swap_extension("v1.2.md", ".html"), Path::new("v1.2.html"));
}

/// Test that read_to_string returns file content correctly
#[test]
fn test_read_to_string_withValidFile_shouldReturnContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let content = "你好\nHello";
    let test_file = common::create_test_file(temp_dir.path(), "doc.md", content)?;

    assert_eq!(FileManager::read_to_string(&test_file)?, content);

    Ok(())
}

/// Invalid UTF-8 is reported as a read error carrying the path
#[test]
fn test_read_to_string_withInvalidUtf8_shouldReturnReadError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("binary.md");
    fs::write(&path, [0xff, 0xfe, 0x00, 0xc3])?;

    match FileManager::read_to_string(&path) {
        Err(InjectError::Read { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected read error, got {:?}", other),
    }

    Ok(())
}

/// Writing overwrites existing content
#[test]
fn test_write_to_file_withExistingFile_shouldOverwrite() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "page.html", "old content")?;

    FileManager::write_to_file(&test_file, "new")?;

    assert_eq!(fs::read_to_string(&test_file)?, "new");

    Ok(())
}

/// Missing parent directories are not created
#[test]
fn test_write_to_file_withMissingParent_shouldReturnWriteError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("missing").join("page.html");

    let result = FileManager::write_to_file(&path, "x");

    assert!(matches!(result, Err(InjectError::Write { .. })));
    assert!(!temp_dir.path().join("missing").exists());

    Ok(())
}

/// Dangling symlinks without the extension do not break the listing
#[cfg(unix)]
#[test]
fn test_list_files_withDanglingSymlinks_shouldIgnoreThem() -> Result<()> {
    use std::os::unix::fs::symlink;

    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path();
    common::create_test_file(dir, "a.md", "a")?;
    symlink(dir.join("missing-target"), dir.join("notes.txt"))?;
    symlink("user@host.1234", dir.join(".#notes.txt"))?;
    // Matching name but no target: not a regular file, so not listed
    symlink(dir.join("gone.md.target"), dir.join("gone.md"))?;

    let files = FileManager::list_files_with_extension(dir, "md")?;

    assert_eq!(files, vec![dir.join("a.md")]);

    Ok(())
}

/// A symlink to a real document is still listed
#[cfg(unix)]
#[test]
fn test_list_files_withSymlinkToDocument_shouldListIt() -> Result<()> {
    use std::os::unix::fs::symlink;

    let temp_dir = common::create_temp_dir()?;
    let target = common::create_test_file(&temp_dir.path().join("shared"), "real.md", "x")?;
    let dir = temp_dir.path().join("en");
    fs::create_dir(&dir)?;
    symlink(&target, dir.join("linked.md"))?;

    let files = FileManager::list_files_with_extension(&dir, "md")?;

    assert_eq!(files, vec![dir.join("linked.md")]);

    Ok(())
}

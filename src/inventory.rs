//! Scan of the local storage directory into a page-number -> file-name map.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::Result;

/// Map from page number (digit string, as it appears in the file name) to
/// the full file name. Built once at startup and never mutated afterwards.
pub type InventoryMap = HashMap<String, String>;

/// Mirrored files are named `<pageNumber>_<baseName>.<ext>` with a
/// single-segment extension.
static FILE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)_.+\.[^.]+$").expect("file pattern is a valid regex"));

/// Returns the inventory of already-mirrored images in `dir`.
/// Files not matching the naming convention are ignored silently.
pub fn scan(dir: &Path) -> Result<InventoryMap> {
    let mut registry = InventoryMap::new();

    for entry in fs::read_dir(dir)? {
        let file_name = entry?.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if let Some(caps) = FILE_PATTERN.captures(name) {
            registry.insert(caps[1].to_string(), name.to_string());
        }
    }

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn keys_matching_files_by_number_prefix() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "5_sandwich.png");
        touch(dir.path(), "614_woodpecker.jpg");
        touch(dir.path(), "8_archive.tar.gz");

        let inventory = scan(dir.path()).unwrap();
        assert_eq!(inventory.len(), 3);
        assert_eq!(inventory["5"], "5_sandwich.png");
        assert_eq!(inventory["614"], "614_woodpecker.jpg");
        assert_eq!(inventory["8"], "8_archive.tar.gz");
    }

    #[test]
    fn ignores_files_outside_the_naming_convention() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "x9_not_all_digits.png");
        touch(dir.path(), "12_no_extension");
        touch(dir.path(), "_missing_number.png");

        let inventory = scan(dir.path()).unwrap();
        assert!(inventory.is_empty());
    }

    #[test]
    fn empty_directory_yields_empty_inventory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan(dir.path()).unwrap().is_empty());
    }
}

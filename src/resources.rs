use anyhow::Result;
use rayon::prelude::*;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::ResourceEntry;

/// Inventory every regular file reachable from the configured resource
/// paths. Hashing runs in parallel; the result is sorted by path so two
/// runs over the same tree produce the same manifest.
pub fn inventory_resources(resource_paths: &[PathBuf]) -> Result<Vec<ResourceEntry>> {
    let mut files = Vec::new();
    for path in resource_paths {
        collect_files(path, &mut files)?;
    }

    let mut entries: Vec<ResourceEntry> = files
        .par_iter()
        .map(|path| hash_file(path))
        .collect::<Result<Vec<_>>>()?;

    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}

fn collect_files(path: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    if path.is_file() {
        files.push(path.to_path_buf());
        return Ok(());
    }

    if path.is_dir() {
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            collect_files(&entry.path(), files)?;
        }
    }

    // Symlinks to nowhere and special files are skipped silently; the
    // freeze tool would not bundle them either.
    Ok(())
}

fn hash_file(path: &Path) -> Result<ResourceEntry> {
    let bytes = fs::read(path)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    let digest = format!("{:x}", hasher.finalize());

    Ok(ResourceEntry {
        path: path.to_path_buf(),
        size: bytes.len() as u64,
        sha256: digest,
    })
}

/// Total byte size of an inventory, for the summary display.
pub fn total_size(entries: &[ResourceEntry]) -> u64 {
    entries.iter().map(|e| e.size).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_inventory_walks_nested_dirs() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = dir.path().join("resource");
        fs::create_dir_all(root.join("img")).expect("Failed to create dirs");
        fs::write(root.join("readme.txt"), "hello").expect("Failed to write file");
        fs::write(root.join("img/logo.png"), [1u8, 2, 3]).expect("Failed to write file");

        let entries = inventory_resources(&[root.clone()]).expect("inventory should succeed");
        assert_eq!(entries.len(), 2);
        // Sorted by path
        assert!(entries[0].path.ends_with("img/logo.png"));
        assert!(entries[1].path.ends_with("readme.txt"));
        assert_eq!(total_size(&entries), 8);
    }

    #[test]
    fn test_known_digest() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let file = dir.path().join("data.bin");
        fs::write(&file, b"abc").expect("Failed to write file");

        let entries = inventory_resources(&[file]).expect("inventory should succeed");
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].sha256,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(entries[0].size, 3);
    }

    #[test]
    fn test_empty_paths_yield_empty_inventory() {
        let entries = inventory_resources(&[]).expect("inventory should succeed");
        assert!(entries.is_empty());
    }
}

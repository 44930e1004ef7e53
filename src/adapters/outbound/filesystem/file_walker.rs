use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Default directory depth for POM and jar scans.
pub const DEFAULT_SCAN_DEPTH: usize = 3;

/// Collects regular files with the given extension under each root,
/// descending at most `max_depth` levels (the root's own entries are level 1).
///
/// Missing roots and unreadable entries are logged and contribute nothing.
/// Symlinks are followed. Roots are made absolute first, so every returned
/// path is absolute. Results are sorted per root so repeated scans see the
/// same order.
pub fn collect_files(roots: &[PathBuf], max_depth: usize, extension: &str) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for root in roots {
        let root = match std::path::absolute(root) {
            Ok(root) => root,
            Err(e) => {
                tracing::warn!("Skipping {}: {}", root.display(), e);
                continue;
            }
        };
        if !root.is_dir() {
            tracing::warn!("Skipping {}: not a directory", root.display());
            continue;
        }

        for entry in WalkDir::new(&root)
            .max_depth(max_depth)
            .follow_links(true)
            .sort_by_file_name()
        {
            match entry {
                Ok(entry) if entry.file_type().is_file() && has_extension(entry.path(), extension) => {
                    files.push(entry.into_path());
                }
                Ok(_) => {}
                Err(e) => tracing::warn!("Error while scanning {}: {}", root.display(), e),
            }
        }
    }

    files
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(extension)
}

use std::fs;
use std::path::Path;
use log::debug;

/// Check whether `path` names an existing file.
///
/// Directories do not count, and a path ending in `/` never matches. The check
/// is a single `stat` with nothing cached between calls.
pub fn file_exists(path: &str) -> bool {
    if path.is_empty() || path.ends_with('/') {
        return false;
    }

    match fs::metadata(Path::new(path)) {
        Ok(metadata) => !metadata.is_dir(),
        Err(e) => {
            debug!("file_exists({:?}): {}", path, e);
            false
        }
    }
}

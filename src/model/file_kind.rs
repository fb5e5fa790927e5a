//! File-type classification for result coloring.

use std::path::Path;

/// What a result path points at, as far as coloring cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FileKind {
    /// A directory (symlinks followed).
    Directory,
    /// Owner-executable file.
    Executable,
    /// Regular file, special file, or a path that could not be stat'ed.
    #[default]
    Other,
}

impl FileKind {
    /// Stat `path` and classify it.
    ///
    /// Symlinks are followed. Any stat failure (deleted since the search,
    /// permission denied) classifies as `Other`.
    pub fn classify(path: impl AsRef<Path>) -> Self {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_dir() => FileKind::Directory,
            Ok(meta) if is_executable(&meta) => FileKind::Executable,
            _ => FileKind::Other,
        }
    }
}

#[cfg(unix)]
fn is_executable(meta: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    // owner execute bit
    meta.permissions().mode() & 0o100 != 0
}

#[cfg(not(unix))]
fn is_executable(_meta: &std::fs::Metadata) -> bool {
    false
}

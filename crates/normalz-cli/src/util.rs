use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Recursively collect every file under `dir` that `keep` accepts.
///
/// Unreadable directories and entries are skipped with a warning.
pub fn find_all_files(dir: &Path, keep: &impl Fn(&Path) -> bool, files: &mut Vec<PathBuf>) -> io::Result<()> {
    let Ok(entries) = fs::read_dir(dir) else {
        tracing::warn!(dir = %dir.display(), "Skipping unreadable directory");
        return Ok(());
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), "Skipping unreadable entry: {e}");
                continue;
            }
        };

        let path = entry.path();
        if path.is_dir() {
            find_all_files(&path, keep, files)?;
        } else if keep(&path) {
            files.push(path);
        }
    }
    Ok(())
}

/// Map `path` under `input_root` to the same relative location under `output_root`.
pub fn mirror_path(path: &Path, input_root: &Path, output_root: &Path) -> PathBuf {
    match path.strip_prefix(input_root) {
        Ok(relative) => output_root.join(relative),
        Err(_) => output_root.join(path.file_name().unwrap_or(path.as_os_str())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_all_files_recurses_and_filters() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("top.png"), b"").unwrap();
        fs::write(dir.path().join("a/b/deep.tif"), b"").unwrap();
        fs::write(dir.path().join("a/notes.txt"), b"").unwrap();

        let mut files = Vec::new();
        find_all_files(dir.path(), &normalz::is_supported_extension, &mut files).unwrap();
        files.sort();

        assert_eq!(
            files,
            vec![dir.path().join("a/b/deep.tif"), dir.path().join("top.png")]
        );
    }

    #[test]
    fn test_find_all_files_skips_unreadable_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut files = Vec::new();
        find_all_files(&dir.path().join("missing"), &normalz::is_supported_extension, &mut files).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_mirror_path() {
        let mirrored = mirror_path(Path::new("/in/x/y.png"), Path::new("/in"), Path::new("/out"));
        assert_eq!(mirrored, PathBuf::from("/out/x/y.png"));

        let outside = mirror_path(Path::new("/elsewhere/y.png"), Path::new("/in"), Path::new("/out"));
        assert_eq!(outside, PathBuf::from("/out/y.png"));
    }
}

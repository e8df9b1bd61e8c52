use std::path::Path;
use walkdir::WalkDir;

pub const SUPPORTED_EXTENSIONS: &[&str] = &["mp4", "avi", "mkv", "mov"];

/// Every playable file found in the videos directory, recomputed once at
/// startup. Only consulted when no playlist is active.
#[derive(Debug, Clone)]
pub struct VideoCatalog {
    files: Vec<String>,
}

impl VideoCatalog {
    /// Non-recursive scan for files with a supported extension. Dotfiles are
    /// skipped, names are kept sorted.
    pub fn scan(videos_dir: &Path) -> Self {
        let mut files = Vec::new();

        for entry in WalkDir::new(videos_dir)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
        {
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if name.starts_with('.') {
                continue;
            }
            if is_supported(name) {
                files.push(name.to_string());
            }
        }

        files.sort();
        Self { files }
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

fn is_supported(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| {
            SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn test_scan_filters_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.mp4");
        touch(dir.path(), "b.MKV");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "c.mov");

        let catalog = VideoCatalog::scan(dir.path());
        assert_eq!(catalog.files(), ["a.mp4", "b.MKV", "c.mov"]);
    }

    #[test]
    fn test_scan_skips_dotfiles_and_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), ".hidden.mp4");
        fs::create_dir(dir.path().join("nested")).unwrap();
        touch(&dir.path().join("nested"), "deep.mp4");
        touch(dir.path(), "top.mp4");

        let catalog = VideoCatalog::scan(dir.path());
        assert_eq!(catalog.files(), ["top.mp4"]);
    }

    #[test]
    fn test_no_matching_files_yields_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "readme.md");
        touch(dir.path(), "cover.jpg");

        let catalog = VideoCatalog::scan(dir.path());
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}

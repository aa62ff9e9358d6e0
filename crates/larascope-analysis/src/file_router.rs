//! File Router - walks a project tree and classifies files by path convention
//!
//! Classification is path-substring based with a fixed precedence order
//! (first match wins), mirroring Laravel's directory conventions. Files
//! that match no convention are still yielded as [`FileType::Unknown`] and
//! logged; only the extension allow-list skips files silently.

use larascope_domain::error::{Error, Result};
use larascope_domain::value_objects::FileType;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Directories pruned before descent, by name
const EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    "vendor",
    "storage",
    "__pycache__",
    "target",
    "build",
    "dist",
    "venv",
    "cache",
];

/// Extensions eligible for chunking: PHP sources plus the template,
/// config, markup, and data files a Laravel project carries
const ALLOWED_EXTENSIONS: &[&str] = &[
    "php", "js", "vue", "ts", "css", "scss", "env", "md", "txt", "json", "yaml", "yml",
];

/// A file selected for processing, with its detected artifact type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutedFile {
    /// Path to the file on disk
    pub path: PathBuf,
    /// Artifact type detected from the path convention
    pub file_type: FileType,
}

/// Walks a project root and yields `(path, detected_type)` pairs
///
/// Traversal prunes version-control, dependency, build/cache, and
/// virtual-environment directories (and any dot-prefixed directory)
/// before descending. No parsing happens here.
#[derive(Debug, Default)]
pub struct FileRouter;

impl FileRouter {
    /// Create a new file router
    pub fn new() -> Self {
        Self
    }

    /// Lazily walk `root`, yielding one [`RoutedFile`] per eligible file
    ///
    /// Fails with [`Error::PathNotFound`] if `root` does not exist.
    pub fn scan(&self, root: &Path) -> Result<impl Iterator<Item = RoutedFile>> {
        if !root.exists() {
            return Err(Error::path_not_found(root.display().to_string()));
        }

        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_excluded(entry));

        Ok(walker.filter_map(|entry| {
            let entry = entry.ok()?;
            if !entry.file_type().is_file() {
                return None;
            }
            let path = entry.into_path();
            if !has_allowed_extension(&path) {
                return None;
            }
            let file_type = Self::classify(&path);
            if file_type == FileType::Unknown {
                warn!(path = %path.display(), "could not determine file type, defaulting to unknown");
            }
            Some(RoutedFile { path, file_type })
        }))
    }

    /// Classify a file by its path convention, first match wins
    pub fn classify(path: &Path) -> FileType {
        // Normalize to forward slashes for consistent matching across OS
        let normalized = path.to_string_lossy().replace('\\', "/");
        let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");

        if normalized.contains("app/Http/Controllers") {
            FileType::Controller
        } else if normalized.contains("app/Models") {
            FileType::Model
        } else if normalized.contains("routes") {
            FileType::Route
        } else if normalized.contains("database/seeders") {
            FileType::Seeder
        } else if normalized.contains("database/factories") {
            FileType::Factory
        } else if normalized.contains("database/migrations") {
            FileType::Migration
        } else if normalized.contains("resources/views") && normalized.ends_with(".blade.php") {
            FileType::BladeTemplate
        } else if normalized.contains("app/Http/Middleware") {
            FileType::Middleware
        } else if normalized.contains("app/Http/Requests") {
            FileType::FormRequest
        } else if normalized.contains("app/Services") {
            FileType::Service
        } else if normalized.contains("config") {
            FileType::Config
        } else if normalized.contains("app/Providers") {
            FileType::Provider
        } else if normalized.contains("app/Console/Commands") {
            FileType::Command
        } else if normalized.contains("app/Events") {
            FileType::Event
        } else if normalized.contains("app/Listeners") {
            FileType::Listener
        } else if normalized.contains("app/Jobs") {
            FileType::Job
        } else if normalized.contains("app/Notifications") {
            FileType::Notification
        } else if normalized.contains("app/Rules") {
            FileType::ValidationRule
        } else if normalized.contains("app/Exceptions/Handler.php") {
            FileType::ExceptionHandler
        } else if normalized.contains("app/Helpers") {
            FileType::Helper
        } else if normalized.ends_with("bootstrap/app.php") {
            FileType::BootstrapScript
        } else if normalized.ends_with("public/index.php") {
            FileType::PublicEntryScript
        } else if file_name == ".env" || file_name.ends_with(".env") {
            FileType::Env
        } else if normalized.contains("tests") {
            FileType::Test
        } else {
            FileType::Unknown
        }
    }
}

/// A directory is excluded when dot-prefixed or in the fixed exclusion set
fn is_excluded(entry: &walkdir::DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || EXCLUDED_DIRS.contains(&name.as_ref())
}

fn has_allowed_extension(path: &Path) -> bool {
    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    // `.env` has no extension as far as Path is concerned
    if file_name == ".env" || file_name.ends_with(".env") {
        return true;
    }
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_precedence() {
        assert_eq!(
            FileRouter::classify(Path::new("app/Http/Controllers/LeaveController.php")),
            FileType::Controller
        );
        assert_eq!(
            FileRouter::classify(Path::new("app/Models/Leave.php")),
            FileType::Model
        );
        assert_eq!(
            FileRouter::classify(Path::new("routes/web.php")),
            FileType::Route
        );
        assert_eq!(
            FileRouter::classify(Path::new("database/migrations/2024_01_01_create_leaves.php")),
            FileType::Migration
        );
        assert_eq!(
            FileRouter::classify(Path::new("resources/views/leaves/index.blade.php")),
            FileType::BladeTemplate
        );
        // A plain PHP file under views is not a Blade template
        assert_eq!(
            FileRouter::classify(Path::new("resources/views/raw.php")),
            FileType::Unknown
        );
        assert_eq!(
            FileRouter::classify(Path::new("app/Exceptions/Handler.php")),
            FileType::ExceptionHandler
        );
        assert_eq!(
            FileRouter::classify(Path::new("bootstrap/app.php")),
            FileType::BootstrapScript
        );
        assert_eq!(
            FileRouter::classify(Path::new("public/index.php")),
            FileType::PublicEntryScript
        );
        assert_eq!(FileRouter::classify(Path::new(".env")), FileType::Env);
        assert_eq!(
            FileRouter::classify(Path::new("tests/Feature/LeaveTest.php")),
            FileType::Test
        );
        assert_eq!(
            FileRouter::classify(Path::new("app/Whatever.php")),
            FileType::Unknown
        );
    }

    #[test]
    fn test_windows_separators_normalized() {
        assert_eq!(
            FileRouter::classify(Path::new("app\\Http\\Controllers\\LeaveController.php")),
            FileType::Controller
        );
    }

    #[test]
    fn test_extension_allow_list() {
        assert!(has_allowed_extension(Path::new("a/b.php")));
        assert!(has_allowed_extension(Path::new("a/index.blade.php")));
        assert!(has_allowed_extension(Path::new("a/.env")));
        assert!(has_allowed_extension(Path::new("a/app.js")));
        assert!(!has_allowed_extension(Path::new("a/binary.so")));
        assert!(!has_allowed_extension(Path::new("a/archive.zip")));
    }

    #[test]
    fn test_scan_missing_root_fails() {
        let router = FileRouter::new();
        let err = router.scan(Path::new("/definitely/not/here")).err();
        assert!(matches!(
            err,
            Some(larascope_domain::Error::PathNotFound { .. })
        ));
    }
}

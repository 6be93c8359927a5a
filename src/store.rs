//! Page content lookup.
//!
//! A [`PageStore`] maps a page title to its raw markup. The server and CLI
//! depend only on the trait; where pages live is up to the implementation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Markup of the page created by `miniwiki init` and served by `--demo`.
pub const SAMPLE_PAGE: &str = "= Welcome to the Wiki =\n\
This is a simple page about ''Golang''. Visit the '''Golang Page''' by clicking [[Golang]]. \n\
To learn more, visit [https://golang.org].";

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("invalid page title: {0:?}")]
    InvalidTitle(String),

    #[error("failed to read page {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A source of page markup, keyed by title.
pub trait PageStore: Send + Sync {
    /// Look up a page. `Ok(None)` means the page doesn't exist.
    fn lookup(&self, title: &str) -> Result<Option<String>, StoreError>;
}

/// Reject titles that can't name a single file inside the pages directory.
pub fn validate_title(title: &str) -> Result<(), StoreError> {
    let invalid = title.is_empty()
        || title == "."
        || title == ".."
        || title.contains(['/', '\\', '\0']);
    if invalid {
        return Err(StoreError::InvalidTitle(title.to_string()));
    }
    Ok(())
}

/// Pages stored as `<dir>/<title>.<extension>` files.
pub struct DirectoryStore {
    dir: PathBuf,
    extension: String,
}

impl DirectoryStore {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    /// The file a title maps to.
    pub fn page_path(&self, title: &str) -> Result<PathBuf, StoreError> {
        validate_title(title)?;
        Ok(self.dir.join(format!("{}.{}", title, self.extension)))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl PageStore for DirectoryStore {
    fn lookup(&self, title: &str) -> Result<Option<String>, StoreError> {
        let path = self.page_path(title)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "page file not found");
                Ok(None)
            }
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }
}

/// Pages held in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pages: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding only the sample page, under the given title.
    pub fn with_sample(title: &str) -> Self {
        let mut store = Self::new();
        store.insert(title, SAMPLE_PAGE);
        store
    }

    pub fn insert(&mut self, title: impl Into<String>, markup: impl Into<String>) {
        self.pages.insert(title.into(), markup.into());
    }
}

impl PageStore for MemoryStore {
    fn lookup(&self, title: &str) -> Result<Option<String>, StoreError> {
        validate_title(title)?;
        Ok(self.pages.get(title).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Main_Page").is_ok());
        assert!(validate_title("Page with spaces").is_ok());
        assert!(validate_title("Ünïcode").is_ok());
        for bad in ["", ".", "..", "a/b", "..\\etc", "nul\0"] {
            assert!(
                matches!(validate_title(bad), Err(StoreError::InvalidTitle(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_directory_store_lookup() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Golang.wiki"), "''Go''").unwrap();

        let store = DirectoryStore::new(dir.path(), "wiki");
        assert_eq!(store.lookup("Golang").unwrap().as_deref(), Some("''Go''"));
        assert_eq!(store.lookup("Rust").unwrap(), None);
    }

    #[test]
    fn test_directory_store_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirectoryStore::new(dir.path().join("pages"), "wiki");
        assert!(matches!(
            store.lookup("../secret"),
            Err(StoreError::InvalidTitle(_))
        ));
    }

    #[test]
    fn test_directory_store_page_path() {
        let store = DirectoryStore::new("pages", "txt");
        assert_eq!(
            store.page_path("Home").unwrap(),
            PathBuf::from("pages").join("Home.txt")
        );
    }

    #[test]
    fn test_directory_store_read_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the page file should be can't be read as text
        std::fs::create_dir(dir.path().join("Broken.wiki")).unwrap();

        let store = DirectoryStore::new(dir.path(), "wiki");
        assert!(matches!(
            store.lookup("Broken"),
            Err(StoreError::Io { .. })
        ));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::with_sample("Main_Page");
        assert_eq!(
            store.lookup("Main_Page").unwrap().as_deref(),
            Some(SAMPLE_PAGE)
        );
        assert_eq!(store.lookup("Other").unwrap(), None);
        assert!(store.lookup("").is_err());
    }

    #[test]
    fn test_sample_page_keeps_trailing_space() {
        assert!(SAMPLE_PAGE.contains("[[Golang]]. \nTo learn more"));
    }
}

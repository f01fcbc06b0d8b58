//! Loading of named, packaged resources.
//!
//! Resources are addressed by logical, forward-slash separated names such as
//! `files/random_test_data.zip`, independent of where they live on disk.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use crate::Result;
use crate::ValidationError;

/// Logical name of the packaged fixture archive.
pub const DEFAULT_ARCHIVE_RESOURCE: &str = "files/random_test_data.zip";

/// Source of named resources.
pub trait ResourceLoader {
    /// Loads the full content of the named resource.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ResourceNotFound`] if no resource has that
    /// name, or an I/O error if it exists but cannot be read.
    fn load(&self, name: &str) -> Result<Vec<u8>>;
}

/// Resolves resource names under a root directory.
///
/// # Examples
///
/// ```no_run
/// use zipcheck_core::DirResourceLoader;
/// use zipcheck_core::ResourceLoader;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let loader = DirResourceLoader::new("tests/fixtures");
/// let bytes = loader.load("files/random_test_data.zip")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DirResourceLoader {
    root: PathBuf,
}

impl DirResourceLoader {
    /// Creates a loader rooted at `root`.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Returns the root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name);
        let is_plain = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
        (is_plain && !name.is_empty()).then(|| self.root.join(relative))
    }
}

impl ResourceLoader for DirResourceLoader {
    fn load(&self, name: &str) -> Result<Vec<u8>> {
        let not_found = || ValidationError::ResourceNotFound {
            name: name.to_string(),
        };

        let path = self.resolve(name).ok_or_else(not_found)?;
        match std::fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(not_found()),
            Err(e) if path.is_dir() => {
                tracing::debug!(path = %path.display(), error = %e, "resource is a directory");
                Err(not_found())
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Holds resources in memory.
///
/// # Examples
///
/// ```
/// use zipcheck_core::MemoryResourceLoader;
/// use zipcheck_core::ResourceLoader;
///
/// let loader = MemoryResourceLoader::new().with("files/data.csv", b"id\n".to_vec());
/// assert!(loader.load("files/data.csv").is_ok());
/// assert!(loader.load("files/other.csv").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryResourceLoader {
    resources: HashMap<String, Vec<u8>>,
}

impl MemoryResourceLoader {
    /// Creates an empty loader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a resource, replacing any previous one with the same name.
    pub fn insert(&mut self, name: impl Into<String>, bytes: Vec<u8>) {
        self.resources.insert(name.into(), bytes);
    }

    /// Adds a resource and returns the loader.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.insert(name, bytes);
        self
    }
}

impl ResourceLoader for MemoryResourceLoader {
    fn load(&self, name: &str) -> Result<Vec<u8>> {
        self.resources
            .get(name)
            .cloned()
            .ok_or_else(|| ValidationError::ResourceNotFound {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_dir_loader_reads_nested_resource() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("files")).unwrap();
        std::fs::write(temp.path().join("files/data.bin"), b"payload").unwrap();

        let loader = DirResourceLoader::new(temp.path());
        assert_eq!(loader.load("files/data.bin").unwrap(), b"payload");
    }

    #[test]
    fn test_dir_loader_missing_resource() {
        let temp = TempDir::new().unwrap();
        let loader = DirResourceLoader::new(temp.path());

        let err = loader.load("files/random_test_data.zip").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::ResourceNotFound { ref name } if name == "files/random_test_data.zip"
        ));
    }

    #[test]
    fn test_dir_loader_rejects_escaping_names() {
        let temp = TempDir::new().unwrap();
        let loader = DirResourceLoader::new(temp.path().join("root"));

        for name in ["../secret.zip", "/etc/passwd", "files/../../x", ""] {
            assert!(
                matches!(loader.load(name), Err(ValidationError::ResourceNotFound { .. })),
                "{name} should not resolve"
            );
        }
    }

    #[test]
    fn test_dir_loader_directory_is_not_a_resource() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("files")).unwrap();
        let loader = DirResourceLoader::new(temp.path());

        assert!(matches!(
            loader.load("files"),
            Err(ValidationError::ResourceNotFound { .. })
        ));
    }

    #[test]
    fn test_memory_loader() {
        let mut loader = MemoryResourceLoader::new();
        loader.insert("a.zip", vec![1, 2, 3]);
        assert_eq!(loader.load("a.zip").unwrap(), vec![1, 2, 3]);
        assert!(matches!(
            loader.load("b.zip"),
            Err(ValidationError::ResourceNotFound { .. })
        ));
    }
}

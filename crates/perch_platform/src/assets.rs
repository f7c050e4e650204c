//! Packaged resource loading
//!
//! Layouts and other resources ship inside the application package. Each
//! platform provides an [`AssetLoader`] that resolves an [`AssetPath`] to bytes.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use crate::{PlatformError, Result};

/// Location of an asset
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AssetPath {
    /// Relative to the platform's asset root
    Relative(String),
    /// Absolute path (on packaged platforms, still inside the package)
    Absolute(String),
    /// Compiled into the binary under a well-known name
    Embedded(&'static str),
}

impl AssetPath {
    /// The path as written, without its kind
    pub fn as_str(&self) -> &str {
        match self {
            AssetPath::Relative(rel) => rel,
            AssetPath::Absolute(abs) => abs,
            AssetPath::Embedded(name) => name,
        }
    }
}

impl From<&str> for AssetPath {
    fn from(path: &str) -> Self {
        if path.starts_with('/') {
            AssetPath::Absolute(path.to_string())
        } else {
            AssetPath::Relative(path.to_string())
        }
    }
}

impl fmt::Display for AssetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Loads assets for the current platform
pub trait AssetLoader: Send + Sync {
    /// Read the whole asset
    fn load(&self, path: &AssetPath) -> Result<Vec<u8>>;

    /// Read the asset as UTF-8 text
    fn load_string(&self, path: &AssetPath) -> Result<String> {
        let bytes = self.load(path)?;
        String::from_utf8(bytes)
            .map_err(|e| PlatformError::AssetLoad(format!("Asset '{}' is not UTF-8: {}", path, e)))
    }

    /// Whether the asset exists
    fn exists(&self, path: &AssetPath) -> bool;

    /// Name used in logs
    fn platform_name(&self) -> &'static str;
}

/// Loads assets from a directory on disk
#[derive(Debug, Clone)]
pub struct FilesystemAssetLoader {
    root: PathBuf,
}

impl FilesystemAssetLoader {
    /// Create a loader rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &AssetPath) -> Result<PathBuf> {
        match path {
            AssetPath::Relative(rel) => Ok(self.root.join(rel)),
            AssetPath::Absolute(abs) => Ok(PathBuf::from(abs)),
            AssetPath::Embedded(name) => Err(PlatformError::AssetLoad(format!(
                "Embedded asset '{}' is not available from the filesystem",
                name
            ))),
        }
    }
}

impl AssetLoader for FilesystemAssetLoader {
    fn load(&self, path: &AssetPath) -> Result<Vec<u8>> {
        let file = self.resolve(path)?;
        std::fs::read(&file).map_err(|e| {
            PlatformError::AssetLoad(format!("Failed to read '{}': {}", file.display(), e))
        })
    }

    fn exists(&self, path: &AssetPath) -> bool {
        self.resolve(path).map(|file| file.is_file()).unwrap_or(false)
    }

    fn platform_name(&self) -> &'static str {
        "filesystem"
    }
}

/// In-memory assets, typically filled from `include_bytes!`
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetLoader {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryAssetLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an asset under `name`
    pub fn with(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(name, bytes);
        self
    }

    /// Add or replace an asset under `name`
    pub fn insert(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.entries.insert(name.into(), bytes.into());
    }

    fn key<'a>(path: &'a AssetPath) -> &'a str {
        path.as_str().trim_start_matches('/')
    }
}

impl AssetLoader for MemoryAssetLoader {
    fn load(&self, path: &AssetPath) -> Result<Vec<u8>> {
        self.entries
            .get(Self::key(path))
            .cloned()
            .ok_or_else(|| PlatformError::AssetLoad(format!("Asset not found: {}", path)))
    }

    fn exists(&self, path: &AssetPath) -> bool {
        self.entries.contains_key(Self::key(path))
    }

    fn platform_name(&self) -> &'static str {
        "memory"
    }
}

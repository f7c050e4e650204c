//! Android asset loading via NDK AssetManager
//!
//! Layout resources ship in the APK's `assets/` folder and are read through
//! the AssetManager. Absolute and embedded paths are looked up there too.

use perch_platform::{AssetLoader, AssetPath, PlatformError, Result};

#[cfg(target_os = "android")]
use android_activity::AndroidApp;

/// Asset name inside the APK's `assets/` folder
pub(crate) fn asset_name(path: &AssetPath) -> &str {
    path.as_str().trim_start_matches('/')
}

/// Android asset loader using NDK AssetManager
pub struct AndroidAssetLoader {
    #[cfg(target_os = "android")]
    app: AndroidApp,
}

#[cfg(target_os = "android")]
impl AndroidAssetLoader {
    pub fn new(app: AndroidApp) -> Self {
        Self { app }
    }

    fn open(&self, name: &str) -> Result<Option<ndk::asset::Asset>> {
        let c_name = std::ffi::CString::new(name)
            .map_err(|e| PlatformError::AssetLoad(format!("Invalid asset name '{}': {}", name, e)))?;
        Ok(self.app.asset_manager().open(&c_name))
    }
}

#[cfg(target_os = "android")]
impl AssetLoader for AndroidAssetLoader {
    fn load(&self, path: &AssetPath) -> Result<Vec<u8>> {
        use std::io::Read;

        let name = asset_name(path);
        let mut asset = self
            .open(name)?
            .ok_or_else(|| PlatformError::AssetLoad(format!("Asset not found: {}", name)))?;

        let mut buffer = Vec::new();
        asset.read_to_end(&mut buffer).map_err(|e| {
            PlatformError::AssetLoad(format!("Failed to read asset '{}': {}", name, e))
        })?;
        tracing::debug!(asset = name, bytes = buffer.len(), "Loaded asset");
        Ok(buffer)
    }

    fn exists(&self, path: &AssetPath) -> bool {
        matches!(self.open(asset_name(path)), Ok(Some(_)))
    }

    fn platform_name(&self) -> &'static str {
        "android"
    }
}

// Stub implementation for non-Android builds (for cross-compilation checks)
#[cfg(not(target_os = "android"))]
impl AndroidAssetLoader {
    /// Create a placeholder loader (fails on non-Android)
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(not(target_os = "android"))]
impl Default for AndroidAssetLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_os = "android"))]
impl AssetLoader for AndroidAssetLoader {
    fn load(&self, path: &AssetPath) -> Result<Vec<u8>> {
        Err(PlatformError::Unsupported(format!(
            "Android asset '{}' only available on Android",
            asset_name(path)
        )))
    }

    fn exists(&self, _path: &AssetPath) -> bool {
        false
    }

    fn platform_name(&self) -> &'static str {
        "android-stub"
    }
}

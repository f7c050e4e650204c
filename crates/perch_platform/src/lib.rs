//! Perch Platform
//!
//! The seams between the host activity and the outside world:
//!
//! - [`RuntimeBridge`] receives the application context once per process
//! - [`WindowChrome`] hides system UI chrome
//! - [`AssetLoader`] reads packaged resources such as layouts
//! - [`GameSurface`] is the embedded view that owns the game loop
//!
//! Platform extensions (e.g. `perch_platform_android`) implement these for a
//! concrete OS; tests implement them with recording fakes.

pub mod assets;
pub mod bridge;
pub mod chrome;
pub mod error;
pub mod surface;

pub use assets::{AssetLoader, AssetPath, FilesystemAssetLoader, MemoryAssetLoader};
pub use bridge::{current_context, AppContext, ProcessBridge, RuntimeBridge};
pub use chrome::{ChromeMode, WindowChrome};
pub use error::{PlatformError, Result};
pub use surface::{GameSurface, SurfaceConfig};

//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Failed to initialize platform
    #[error("Platform initialization failed: {0}")]
    InitFailed(String),

    /// The runtime bridge refused or could not build the application context
    #[error("Runtime bridge registration failed: {0}")]
    BridgeRegistration(String),

    /// Window chrome could not be configured
    #[error("Window chrome configuration failed: {0}")]
    Chrome(String),

    /// Failed to load asset
    #[error("Asset load failed: {0}")]
    AssetLoad(String),

    /// Platform not supported on this OS
    #[error("Platform not supported: {0}")]
    Unsupported(String),

    /// Generic platform error
    #[error("Platform error: {0}")]
    Other(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;

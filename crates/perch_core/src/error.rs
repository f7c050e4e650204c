//! Host error types

use std::path::PathBuf;

use perch_platform::PlatformError;
use thiserror::Error;

use crate::layout::ViewId;
use crate::lifecycle::{LifecycleEvent, LifecycleState};

/// Errors raised by the host activity
///
/// None of these are recoverable: they mean the package or the host was
/// provisioned incorrectly, or the OS delivered callbacks out of order.
#[derive(Error, Debug)]
pub enum HostError {
    /// A collaborator failed
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// The lifecycle does not allow this event in the current state
    #[error("Cannot {event} while {state}")]
    InvalidTransition {
        state: LifecycleState,
        event: LifecycleEvent,
    },

    /// The layout resource is not valid TOML for a view tree
    #[error("Failed to parse layout '{resource}': {source}")]
    LayoutParse {
        resource: String,
        #[source]
        source: toml::de::Error,
    },

    /// The layout parsed but breaks the layout contract
    #[error("Invalid layout '{resource}': {reason}")]
    InvalidLayout { resource: String, reason: String },

    /// No view with this id exists in the hierarchy
    #[error("View not found: {0}")]
    ViewNotFound(ViewId),

    /// The view exists but is not the game surface
    #[error("View '{0}' is not a game surface")]
    NotAGameSurface(ViewId),

    /// Pause/resume arrived before the layout was inflated
    #[error("No view hierarchy has been inflated")]
    NotInflated,

    /// Config file could not be read
    #[error("Failed to read config {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid
    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for host operations
pub type Result<T> = std::result::Result<T, HostError>;

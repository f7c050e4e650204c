//! Perch Core
//!
//! The host activity shim: an explicit lifecycle state machine that wires
//! the application context into the runtime bridge, hides window chrome,
//! inflates a layout holding one embedded game surface, and forwards
//! pause/resume to that surface.
//!
//! # Example
//!
//! ```ignore
//! use perch_core::{HostActivity, HostConfig, HostServices};
//!
//! let mut activity = HostActivity::new(HostConfig::default(), services);
//! activity.on_create(None)?;
//! activity.on_resume()?;
//! activity.on_pause()?;
//! ```

pub mod activity;
pub mod config;
pub mod error;
pub mod layout;
pub mod lifecycle;
pub mod logging;

pub use activity::{HostActivity, HostServices};
pub use config::{HostConfig, LayoutConfig, LoggingConfig, WindowConfig};
pub use error::{HostError, Result};
pub use layout::{LayoutResource, SurfaceFactory, ViewHierarchy, ViewId, ViewNode};
pub use lifecycle::{Lifecycle, LifecycleEvent, LifecycleState};

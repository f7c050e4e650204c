//! The embedded game surface
//!
//! The surface owns a game's update/render loop and runs it on its own
//! schedule. The host only tells it when the loop may run.

use serde::{Deserialize, Serialize};

/// An embedded view that drives a game loop
pub trait GameSurface {
    /// Stop the game loop; called when the host leaves the foreground
    fn suspend(&mut self);

    /// Start or continue the game loop; called each time the host is resumed
    fn resume(&mut self);
}

/// Parameters a game surface is created with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Logical game width in pixels
    #[serde(default = "default_width")]
    pub width: u32,
    /// Logical game height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default)]
    pub title: Option<String>,
}

fn default_width() -> u32 {
    640
}

fn default_height() -> u32 {
    480
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            title: None,
        }
    }
}

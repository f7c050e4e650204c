//! Window chrome policy
//!
//! Both policies hide system UI; they differ in how. A host applies exactly
//! one of them, once, before its layout becomes visible.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Result;

/// How system chrome (status and navigation bars) is hidden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChromeMode {
    /// Coarse full-screen window flag
    #[default]
    Fullscreen,
    /// Hide system bar insets; a swipe from the edge reveals them transiently
    ImmersiveSwipeReveal,
}

impl ChromeMode {
    /// Config name of this mode
    pub fn name(&self) -> &'static str {
        match self {
            ChromeMode::Fullscreen => "fullscreen",
            ChromeMode::ImmersiveSwipeReveal => "immersive_swipe_reveal",
        }
    }
}

impl fmt::Display for ChromeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Applies a [`ChromeMode`] to the host window
pub trait WindowChrome {
    /// Apply `mode`. Changes are visible immediately.
    fn apply(&mut self, mode: ChromeMode) -> Result<()>;
}

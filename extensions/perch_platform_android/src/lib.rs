//! Perch Android Platform
//!
//! Native Activity integration and JNI bridge.
//!
//! [`AndroidHost::run`] drives a [`perch_core::HostActivity`] from the
//! `android-activity` event loop. The collaborators it wires in:
//!
//! - application context from `Activity.getApplicationContext()`
//! - [`AndroidWindowChrome`]: window flags or `WindowInsetsController`
//! - [`AndroidAssetLoader`]: the APK's `assets/` folder
//!
//! On other targets the collaborators are stubs that report
//! [`perch_platform::PlatformError::Unsupported`].

pub mod assets;
pub mod chrome;
pub mod logging;

#[cfg(target_os = "android")]
pub mod activity;
#[cfg(target_os = "android")]
pub mod bridge;

#[cfg(target_os = "android")]
pub use activity::AndroidHost;
pub use assets::AndroidAssetLoader;
pub use chrome::AndroidWindowChrome;

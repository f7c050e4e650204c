//! Window chrome for the native activity
//!
//! - [`ChromeMode::Fullscreen`] sets `FLAG_FULLSCREEN` through
//!   `android-activity`.
//! - [`ChromeMode::ImmersiveSwipeReveal`] hides the system bars through the
//!   window's `WindowInsetsController` (API 30+), with bars revealed
//!   transiently by a swipe.
//!
//! The immersive calls go through JNI on the native activity thread, not
//! the Java UI thread. Android may reject view mutations from that thread
//! with `CalledFromWrongThreadException`, which surfaces here as
//! [`PlatformError::Chrome`] and fails activity creation. Prefer
//! `Fullscreen` until these calls are posted to the UI thread.

use perch_platform::{ChromeMode, PlatformError, Result, WindowChrome};

#[cfg(target_os = "android")]
use android_activity::AndroidApp;

/// `WindowInsetsController.BEHAVIOR_SHOW_TRANSIENT_BARS_BY_SWIPE`
pub const BEHAVIOR_SHOW_TRANSIENT_BARS_BY_SWIPE: i32 = 2;

/// Applies [`ChromeMode`] to the activity window
pub struct AndroidWindowChrome {
    #[cfg(target_os = "android")]
    app: AndroidApp,
}

#[cfg(target_os = "android")]
impl AndroidWindowChrome {
    pub fn new(app: AndroidApp) -> Self {
        Self { app }
    }

    fn hide_system_bars(&self) -> Result<()> {
        use jni::objects::JObject;
        use jni::JavaVM;

        // SAFETY: android-activity hands out the process JavaVM pointer
        let vm = unsafe { JavaVM::from_raw(self.app.vm_as_ptr().cast()) }
            .map_err(|e| PlatformError::Chrome(format!("invalid JavaVM: {}", e)))?;
        let mut env = vm
            .attach_current_thread()
            .map_err(|e| PlatformError::Chrome(format!("failed to attach thread: {}", e)))?;
        // SAFETY: the activity reference is a global ref owned by android-activity
        let activity = unsafe { JObject::from_raw(self.app.activity_as_ptr().cast()) };

        immersive::hide_system_bars(&mut env, &activity).map_err(|e| {
            let _ = env.exception_clear();
            PlatformError::Chrome(format!("failed to hide system bars: {}", e))
        })
    }
}

#[cfg(target_os = "android")]
mod immersive {
    use jni::objects::{JObject, JValue};
    use jni::JNIEnv;

    use super::BEHAVIOR_SHOW_TRANSIENT_BARS_BY_SWIPE;

    pub(super) fn hide_system_bars(env: &mut JNIEnv, activity: &JObject) -> jni::errors::Result<()> {
        let window = env
            .call_method(activity, "getWindow", "()Landroid/view/Window;", &[])?
            .l()?;
        env.call_method(
            &window,
            "setDecorFitsSystemWindows",
            "(Z)V",
            &[JValue::Bool(0)],
        )?;

        let controller = env
            .call_method(
                &window,
                "getInsetsController",
                "()Landroid/view/WindowInsetsController;",
                &[],
            )?
            .l()?;
        let system_bars = env
            .call_static_method("android/view/WindowInsets$Type", "systemBars", "()I", &[])?
            .i()?;

        env.call_method(&controller, "hide", "(I)V", &[JValue::Int(system_bars)])?;
        env.call_method(
            &controller,
            "setSystemBarsBehavior",
            "(I)V",
            &[JValue::Int(BEHAVIOR_SHOW_TRANSIENT_BARS_BY_SWIPE)],
        )?;
        Ok(())
    }
}

#[cfg(target_os = "android")]
impl WindowChrome for AndroidWindowChrome {
    fn apply(&mut self, mode: ChromeMode) -> Result<()> {
        use android_activity::WindowManagerFlags;

        tracing::info!(%mode, "Configuring window chrome");
        match mode {
            ChromeMode::Fullscreen => {
                self.app
                    .set_window_flags(WindowManagerFlags::FULLSCREEN, WindowManagerFlags::empty());
                Ok(())
            }
            ChromeMode::ImmersiveSwipeReveal => self.hide_system_bars(),
        }
    }
}

// Stub implementation for non-Android builds (for cross-compilation checks)
#[cfg(not(target_os = "android"))]
impl AndroidWindowChrome {
    /// Create a placeholder chrome (fails on non-Android)
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(not(target_os = "android"))]
impl Default for AndroidWindowChrome {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_os = "android"))]
impl WindowChrome for AndroidWindowChrome {
    fn apply(&mut self, mode: ChromeMode) -> Result<()> {
        Err(PlatformError::Unsupported(format!(
            "{} chrome only available on Android",
            mode
        )))
    }
}

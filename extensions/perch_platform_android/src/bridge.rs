//! Application context for the runtime bridge
//!
//! The bridge is handed the *application* context, not the activity: it
//! outlives any single activity instance, so a global reference to it stays
//! valid for the whole process.

use std::ffi::c_void;

use android_activity::AndroidApp;
use jni::objects::JObject;
use jni::JavaVM;
use perch_platform::{AppContext, PlatformError, Result};

fn bridge_error(what: &str, e: jni::errors::Error) -> PlatformError {
    PlatformError::BridgeRegistration(format!("{}: {}", what, e))
}

/// Resolve `Activity.getApplicationContext()` into an [`AppContext`]
pub fn application_context(app: &AndroidApp) -> Result<AppContext> {
    let vm_ptr = app.vm_as_ptr();
    // SAFETY: android-activity hands out the process JavaVM pointer
    let vm = unsafe { JavaVM::from_raw(vm_ptr.cast()) }
        .map_err(|e| bridge_error("invalid JavaVM", e))?;
    let mut env = vm
        .attach_current_thread()
        .map_err(|e| bridge_error("failed to attach thread", e))?;

    // SAFETY: the activity reference is a global ref owned by android-activity
    let activity = unsafe { JObject::from_raw(app.activity_as_ptr().cast()) };
    let context = env
        .call_method(
            &activity,
            "getApplicationContext",
            "()Landroid/content/Context;",
            &[],
        )
        .and_then(|value| value.l())
        .map_err(|e| {
            let _ = env.exception_clear();
            bridge_error("getApplicationContext failed", e)
        })?;

    let global = env
        .new_global_ref(context)
        .map_err(|e| bridge_error("failed to pin application context", e))?;
    let raw = global.as_obj().as_raw() as *mut c_void;
    // The bridge holds this reference for the life of the process
    std::mem::forget(global);

    AppContext::new(vm_ptr, raw)
}

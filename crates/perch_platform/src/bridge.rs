//! Cross-language runtime bridge
//!
//! Foreign code (the embedded game runtime) reaches platform services through
//! the application context registered here. Registration is init-once for the
//! whole process: an Activity can be recreated many times, but the first
//! context registered stays current until the process exits.

use std::ffi::c_void;
use std::ptr::NonNull;
use std::sync::OnceLock;

use crate::{PlatformError, Result};

/// Raw handles to the host VM and its application context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppContext {
    vm: NonNull<c_void>,
    context: NonNull<c_void>,
}

// SAFETY: both handles are process-global (a JavaVM pointer and a JNI global
// reference) and valid from any thread.
unsafe impl Send for AppContext {}
unsafe impl Sync for AppContext {}

impl AppContext {
    /// Wrap raw VM and context handles; neither may be null
    pub fn new(vm: *mut c_void, context: *mut c_void) -> Result<Self> {
        let vm = NonNull::new(vm)
            .ok_or_else(|| PlatformError::BridgeRegistration("VM pointer is null".to_string()))?;
        let context = NonNull::new(context).ok_or_else(|| {
            PlatformError::BridgeRegistration("application context is null".to_string())
        })?;
        Ok(Self { vm, context })
    }

    pub fn vm(&self) -> *mut c_void {
        self.vm.as_ptr()
    }

    pub fn context(&self) -> *mut c_void {
        self.context.as_ptr()
    }
}

/// Sink for the application context
pub trait RuntimeBridge: Send + Sync {
    /// Make `context` reachable from foreign code.
    ///
    /// Called once per Activity creation; implementations decide how repeated
    /// registrations are handled.
    fn set_context(&self, context: AppContext) -> Result<()>;
}

static PROCESS_CONTEXT: OnceLock<AppContext> = OnceLock::new();

/// The process-wide bridge
///
/// The first registered context wins. Later registrations (a recreated
/// Activity) are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessBridge;

impl RuntimeBridge for ProcessBridge {
    fn set_context(&self, context: AppContext) -> Result<()> {
        let mut registered = false;
        let current = PROCESS_CONTEXT.get_or_init(|| {
            registered = true;
            context
        });

        if registered {
            tracing::info!("Application context registered with runtime bridge");
        } else if *current != context {
            tracing::debug!("Runtime bridge already holds an application context, keeping it");
        }
        Ok(())
    }
}

/// The context registered through [`ProcessBridge`], if any
pub fn current_context() -> Option<AppContext> {
    PROCESS_CONTEXT.get().copied()
}

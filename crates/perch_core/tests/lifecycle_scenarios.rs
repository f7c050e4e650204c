//! Lifecycle ordering scenarios for the host activity
//!
//! Every collaborator records into one shared call log, so each test can
//! assert the exact order in which the shim talks to the outside world.

use std::ffi::c_void;
use std::sync::{Arc, Mutex};

use perch_core::{HostActivity, HostConfig, HostError, HostServices, LifecycleState, ViewId};
use perch_platform::{
    AppContext, AssetLoader, AssetPath, ChromeMode, GameSurface, MemoryAssetLoader, PlatformError,
    RuntimeBridge, SurfaceConfig, WindowChrome,
};

const LAYOUT: &str = r#"
[root]
kind = "frame"
id = "content"

[[root.children]]
kind = "game_surface"
id = "game_view"
"#;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    RegisterContext,
    ConfigureChrome(ChromeMode),
    LoadLayout(String),
    InflateLayout,
    Resume,
    Suspend,
}

type CallLog = Arc<Mutex<Vec<Call>>>;

fn record(log: &CallLog, call: Call) {
    log.lock().unwrap().push(call);
}

struct RecordingBridge(CallLog);

impl RuntimeBridge for RecordingBridge {
    fn set_context(&self, _context: AppContext) -> perch_platform::Result<()> {
        record(&self.0, Call::RegisterContext);
        Ok(())
    }
}

struct RecordingChrome(CallLog);

impl WindowChrome for RecordingChrome {
    fn apply(&mut self, mode: ChromeMode) -> perch_platform::Result<()> {
        record(&self.0, Call::ConfigureChrome(mode));
        Ok(())
    }
}

struct RecordingAssets {
    log: CallLog,
    inner: MemoryAssetLoader,
}

impl AssetLoader for RecordingAssets {
    fn load(&self, path: &AssetPath) -> perch_platform::Result<Vec<u8>> {
        record(&self.log, Call::LoadLayout(path.to_string()));
        self.inner.load(path)
    }

    fn exists(&self, path: &AssetPath) -> bool {
        self.inner.exists(path)
    }

    fn platform_name(&self) -> &'static str {
        "recording"
    }
}

struct RecordingSurface(CallLog);

impl GameSurface for RecordingSurface {
    fn suspend(&mut self) {
        record(&self.0, Call::Suspend);
    }

    fn resume(&mut self) {
        record(&self.0, Call::Resume);
    }
}

fn context() -> AppContext {
    AppContext::new(0x1000 as *mut c_void, 0x2000 as *mut c_void).unwrap()
}

fn services_with_layout(log: &CallLog, layout: Option<&str>) -> HostServices {
    let mut inner = MemoryAssetLoader::new();
    if let Some(layout) = layout {
        inner.insert("layout/activity_main.toml", layout);
    }

    let surface_log = Arc::clone(log);
    HostServices {
        context: context(),
        bridge: Box::new(RecordingBridge(Arc::clone(log))),
        chrome: Box::new(RecordingChrome(Arc::clone(log))),
        assets: Box::new(RecordingAssets {
            log: Arc::clone(log),
            inner,
        }),
        surfaces: Box::new(move |_id: &ViewId, _config: &SurfaceConfig| {
            record(&surface_log, Call::InflateLayout);
            Ok::<_, PlatformError>(
                Box::new(RecordingSurface(Arc::clone(&surface_log))) as Box<dyn GameSurface>
            )
        }),
    }
}

fn activity(config: HostConfig) -> (HostActivity, CallLog) {
    let log = CallLog::default();
    let services = services_with_layout(&log, Some(LAYOUT));
    (HostActivity::new(config, services), log)
}

fn calls(log: &CallLog) -> Vec<Call> {
    log.lock().unwrap().clone()
}

fn count(log: &CallLog, call: &Call) -> usize {
    log.lock().unwrap().iter().filter(|c| *c == call).count()
}

#[test]
fn test_create_resume_pause_resume_destroy() {
    let (mut activity, log) = activity(HostConfig::default());

    activity.on_create(None).unwrap();
    activity.on_resume().unwrap();
    activity.on_pause().unwrap();
    activity.on_resume().unwrap();
    activity.on_destroy().unwrap();

    assert_eq!(
        calls(&log),
        vec![
            Call::RegisterContext,
            Call::ConfigureChrome(ChromeMode::Fullscreen),
            Call::LoadLayout("layout/activity_main.toml".to_string()),
            Call::InflateLayout,
            Call::Resume,
            Call::Suspend,
            Call::Resume,
        ]
    );

    // Nothing reaches the surface after destroy
    assert!(activity.on_pause().is_err());
    assert!(activity.on_resume().is_err());
    assert_eq!(calls(&log).len(), 7);
    assert_eq!(activity.state(), LifecycleState::Destroyed);
    assert!(activity.views().is_none());
}

#[test]
fn test_full_platform_sequence() {
    let (mut activity, log) = activity(HostConfig::default());

    activity.on_create(Some(&b"bundle"[..])).unwrap();
    for _ in 0..3 {
        activity.on_start().unwrap();
        activity.on_resume().unwrap();
        activity.on_pause().unwrap();
        activity.on_stop().unwrap();
    }
    activity.on_destroy().unwrap();

    assert_eq!(count(&log, &Call::Resume), 3);
    assert_eq!(count(&log, &Call::Suspend), 3);
    assert_eq!(count(&log, &Call::RegisterContext), 1);
}

#[test]
fn test_pause_while_paused_does_not_suspend_again() {
    let (mut activity, log) = activity(HostConfig::default());
    activity.on_create(None).unwrap();
    activity.on_resume().unwrap();
    activity.on_pause().unwrap();

    let err = activity.on_pause().unwrap_err();
    assert!(matches!(
        err,
        HostError::InvalidTransition {
            state: LifecycleState::Paused,
            ..
        }
    ));
    assert_eq!(count(&log, &Call::Suspend), 1);
}

#[test]
fn test_resume_while_resumed_does_not_resume_again() {
    let (mut activity, log) = activity(HostConfig::default());
    activity.on_create(None).unwrap();
    activity.on_resume().unwrap();

    assert!(activity.on_resume().is_err());
    assert_eq!(count(&log, &Call::Resume), 1);
    assert_eq!(activity.state(), LifecycleState::Resumed);
}

#[test]
fn test_nothing_forwarded_before_create() {
    let (mut activity, log) = activity(HostConfig::default());

    assert!(activity.on_resume().is_err());
    assert!(activity.on_pause().is_err());
    assert!(calls(&log).is_empty());
    assert_eq!(activity.state(), LifecycleState::Initialized);
}

#[test]
fn test_create_runs_once() {
    let (mut activity, log) = activity(HostConfig::default());
    activity.on_create(None).unwrap();

    assert!(matches!(
        activity.on_create(None),
        Err(HostError::InvalidTransition { .. })
    ));
    assert_eq!(count(&log, &Call::RegisterContext), 1);
    assert_eq!(count(&log, &Call::InflateLayout), 1);
}

#[test]
fn test_immersive_chrome_applied_before_inflation() {
    let mut config = HostConfig::default();
    config.window.chrome = ChromeMode::ImmersiveSwipeReveal;
    let (mut activity, log) = activity(config);

    activity.on_create(None).unwrap();

    let calls = calls(&log);
    let chrome = calls
        .iter()
        .position(|c| *c == Call::ConfigureChrome(ChromeMode::ImmersiveSwipeReveal))
        .unwrap();
    let inflate = calls.iter().position(|c| *c == Call::InflateLayout).unwrap();
    assert!(chrome < inflate);
    assert_eq!(
        calls
            .iter()
            .filter(|c| matches!(c, Call::ConfigureChrome(_)))
            .count(),
        1
    );
}

#[test]
fn test_missing_layout_is_fatal() {
    let log = CallLog::default();
    let mut activity = HostActivity::new(HostConfig::default(), services_with_layout(&log, None));

    let err = activity.on_create(None).unwrap_err();
    assert!(matches!(
        err,
        HostError::Platform(PlatformError::AssetLoad(_))
    ));
    assert_eq!(activity.state(), LifecycleState::Failed);
    assert!(activity.views().is_none());
}

#[test]
fn test_failed_create_is_not_retried() {
    let log = CallLog::default();
    let mut activity = HostActivity::new(HostConfig::default(), services_with_layout(&log, None));

    assert!(activity.on_create(None).is_err());
    assert!(matches!(
        activity.on_create(None),
        Err(HostError::InvalidTransition {
            state: LifecycleState::Failed,
            ..
        })
    ));
    assert_eq!(count(&log, &Call::RegisterContext), 1);
    assert_eq!(count(&log, &Call::ConfigureChrome(ChromeMode::Fullscreen)), 1);

    // Later callbacks are rejected as well
    assert!(activity.on_resume().is_err());
    assert!(activity.on_destroy().is_err());
    assert_eq!(count(&log, &Call::Resume), 0);
}

#[test]
fn test_layout_without_surface_is_fatal() {
    let log = CallLog::default();
    let services = services_with_layout(&log, Some("[root]\nkind = \"frame\"\nid = \"content\"\n"));
    let mut activity = HostActivity::new(HostConfig::default(), services);

    assert!(matches!(
        activity.on_create(None),
        Err(HostError::InvalidLayout { .. })
    ));
    assert_eq!(count(&log, &Call::InflateLayout), 0);
}

#[test]
fn test_configured_surface_id_must_exist() {
    let mut config = HostConfig::default();
    config.layout.surface_id = ViewId::from("ebiten_view");
    let (mut activity, _log) = activity(config);

    assert!(matches!(
        activity.on_create(None),
        Err(HostError::ViewNotFound(id)) if id.as_str() == "ebiten_view"
    ));
    assert_eq!(activity.state(), LifecycleState::Failed);
}

#[test]
fn test_destroy_without_pause_does_not_suspend() {
    let (mut activity, log) = activity(HostConfig::default());
    activity.on_create(None).unwrap();
    activity.on_resume().unwrap();
    activity.on_destroy().unwrap();

    assert_eq!(count(&log, &Call::Suspend), 0);
}

#[test]
fn test_bridge_failure_stops_creation() {
    struct RefusingBridge;

    impl RuntimeBridge for RefusingBridge {
        fn set_context(&self, _context: AppContext) -> perch_platform::Result<()> {
            Err(PlatformError::BridgeRegistration("refused".to_string()))
        }
    }

    let log = CallLog::default();
    let mut services = services_with_layout(&log, Some(LAYOUT));
    services.bridge = Box::new(RefusingBridge);
    let mut activity = HostActivity::new(HostConfig::default(), services);

    assert!(matches!(
        activity.on_create(None),
        Err(HostError::Platform(PlatformError::BridgeRegistration(_)))
    ));
    // Chrome and layout are untouched
    assert!(calls(&log).is_empty());
}

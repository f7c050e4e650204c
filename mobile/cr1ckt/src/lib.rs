//! cr1ck_t Android host
//!
//! Hosts the game behind a [`TickLoop`] surface: the update loop runs on its
//! own thread and only advances while the activity is resumed.

use std::sync::{Arc, Condvar, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use perch_core::ViewId;
use perch_platform::{GameSurface, PlatformError, SurfaceConfig};

/// 60 updates per second
const TICK: Duration = Duration::from_micros(16_667);

#[derive(Debug, Default)]
struct LoopState {
    running: bool,
    quit: bool,
    ticks: u64,
}

type Shared = Arc<(Mutex<LoopState>, Condvar)>;

/// Game surface running a fixed-rate update loop on a background thread
pub struct TickLoop {
    config: SurfaceConfig,
    shared: Shared,
    thread: Option<JoinHandle<()>>,
}

impl TickLoop {
    /// Spawn the loop thread; it stays parked until the first resume
    pub fn spawn(config: SurfaceConfig, tick: Duration) -> Result<Self, PlatformError> {
        let shared: Shared = Arc::default();
        let worker = Arc::clone(&shared);
        let thread = std::thread::Builder::new()
            .name("game-loop".to_string())
            .spawn(move || run_loop(&worker, tick))
            .map_err(|e| PlatformError::InitFailed(format!("failed to spawn game loop: {}", e)))?;

        tracing::info!(width = config.width, height = config.height, "Game loop spawned");
        Ok(Self {
            config,
            shared,
            thread: Some(thread),
        })
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Updates run so far
    pub fn ticks(&self) -> u64 {
        self.lock().ticks
    }

    pub fn is_running(&self) -> bool {
        self.lock().running
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LoopState> {
        // A poisoned lock only means the loop thread panicked mid-update
        self.shared.0.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn set_running(&mut self, running: bool) {
        self.lock().running = running;
        self.shared.1.notify_all();
    }
}

fn run_loop(shared: &Shared, tick: Duration) {
    let (lock, wake) = &**shared;
    loop {
        {
            let mut state = lock.lock().unwrap_or_else(|e| e.into_inner());
            while !state.running && !state.quit {
                state = wake.wait(state).unwrap_or_else(|e| e.into_inner());
            }
            if state.quit {
                return;
            }
            state.ticks += 1;
        }
        std::thread::sleep(tick);
    }
}

impl GameSurface for TickLoop {
    fn suspend(&mut self) {
        tracing::debug!(ticks = self.ticks(), "Suspending game loop");
        self.set_running(false);
    }

    fn resume(&mut self) {
        tracing::debug!(ticks = self.ticks(), "Resuming game loop");
        self.set_running(true);
    }
}

impl Drop for TickLoop {
    fn drop(&mut self) {
        self.lock().quit = true;
        self.shared.1.notify_all();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Surface factory used by the host
pub fn create_surface(
    id: &ViewId,
    config: &SurfaceConfig,
) -> Result<Box<dyn GameSurface>, PlatformError> {
    tracing::info!(view = %id, title = ?config.title, "Creating game surface");
    Ok(Box::new(TickLoop::spawn(config.clone(), TICK)?))
}

#[cfg(target_os = "android")]
#[no_mangle]
fn android_main(app: android_activity::AndroidApp) {
    use perch_core::HostConfig;
    use perch_platform_android::AndroidHost;

    let config = match HostConfig::from_toml_str(include_str!("../host.toml")) {
        Ok(config) => config,
        Err(e) => {
            perch_platform_android::logging::init_logging(&Default::default());
            tracing::error!("Invalid host.toml: {}", e);
            return;
        }
    };

    if let Err(e) = AndroidHost::run(app, config, create_surface) {
        tracing::error!("cr1ck_t host exited with error: {}", e);
    }
}

//! Android application runner
//!
//! Maps `android-activity` main events onto a [`HostActivity`].
//!
//! # Example
//!
//! ```ignore
//! use perch_core::HostConfig;
//! use perch_platform_android::AndroidHost;
//!
//! #[no_mangle]
//! fn android_main(app: android_activity::AndroidApp) {
//!     let config = HostConfig::from_toml_str(include_str!("../host.toml")).unwrap();
//!     AndroidHost::run(app, config, |_id: &_, config: &_| {
//!         Ok(Box::new(MyGame::new(config)) as Box<dyn GameSurface>)
//!     })
//!     .unwrap();
//! }
//! ```

use android_activity::{AndroidApp, MainEvent, PollEvent};
use perch_core::{HostActivity, HostConfig, HostServices, Result, SurfaceFactory};
use perch_platform::ProcessBridge;

use crate::assets::AndroidAssetLoader;
use crate::chrome::AndroidWindowChrome;

/// Android host runner
pub struct AndroidHost;

impl AndroidHost {
    /// Build the host services for `app`
    pub fn services<F>(app: &AndroidApp, surfaces: F) -> Result<HostServices>
    where
        F: SurfaceFactory + 'static,
    {
        Ok(HostServices {
            context: crate::bridge::application_context(app)?,
            bridge: Box::new(ProcessBridge),
            chrome: Box::new(AndroidWindowChrome::new(app.clone())),
            assets: Box::new(AndroidAssetLoader::new(app.clone())),
            surfaces: Box::new(surfaces),
        })
    }

    /// Run the host until the activity is destroyed.
    ///
    /// Returns the first lifecycle error; every error is fatal to the host.
    pub fn run<F>(app: AndroidApp, config: HostConfig, surfaces: F) -> Result<()>
    where
        F: SurfaceFactory + 'static,
    {
        crate::logging::init_logging(&config.logging);
        tracing::info!("AndroidHost::run starting");

        let services = Self::services(&app, surfaces)?;
        let mut activity = HostActivity::new(config, services);
        activity.on_create(None).map_err(|e| {
            tracing::error!("Failed to create host activity: {}", e);
            e
        })?;

        let mut failure = None;
        let mut running = true;

        tracing::info!("Entering Android event loop");

        while running {
            app.poll_events(None, |event| {
                let PollEvent::Main(main_event) = event else {
                    return;
                };

                let result = match main_event {
                    MainEvent::Start => activity.on_start(),
                    MainEvent::Resume { .. } => activity.on_resume(),
                    MainEvent::Pause => activity.on_pause(),
                    MainEvent::Stop => activity.on_stop(),
                    MainEvent::Destroy => {
                        running = false;
                        activity.on_destroy()
                    }
                    MainEvent::LowMemory => {
                        tracing::warn!("Low memory warning");
                        Ok(())
                    }
                    _ => Ok(()),
                };

                if let Err(e) = result {
                    tracing::error!(state = %activity.state(), "Lifecycle callback failed: {}", e);
                    failure.get_or_insert(e);
                    running = false;
                }
            });
        }

        tracing::info!("Android event loop finished");
        failure.map_or(Ok(()), Err)
    }
}

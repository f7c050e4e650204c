//! Host activity shim
//!
//! [`HostActivity`] is the explicit form of a platform Activity subclass:
//! the OS-facing callbacks are plain methods, and everything the Activity
//! would reach through inheritance or globals arrives in [`HostServices`].
//!
//! Creation registers the application context, hides window chrome, then
//! inflates the layout, in that order, so no frame is shown with default
//! chrome. Pause and resume are forwarded to the game surface so its loop
//! only runs while the activity is in the foreground.

use perch_platform::{AppContext, AssetLoader, AssetPath, GameSurface, RuntimeBridge, WindowChrome};

use crate::config::HostConfig;
use crate::error::{HostError, Result};
use crate::layout::{LayoutResource, SurfaceFactory, ViewHierarchy};
use crate::lifecycle::{Lifecycle, LifecycleEvent, LifecycleState};

/// Collaborators provided by the platform
pub struct HostServices {
    /// Application context handed to the runtime bridge
    pub context: AppContext,
    pub bridge: Box<dyn RuntimeBridge>,
    pub chrome: Box<dyn WindowChrome>,
    pub assets: Box<dyn AssetLoader>,
    pub surfaces: Box<dyn SurfaceFactory>,
}

/// An activity hosting one embedded game surface
pub struct HostActivity {
    config: HostConfig,
    services: HostServices,
    lifecycle: Lifecycle,
    views: Option<ViewHierarchy>,
}

impl HostActivity {
    pub fn new(config: HostConfig, services: HostServices) -> Self {
        Self {
            config,
            services,
            lifecycle: Lifecycle::new(),
            views: None,
        }
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Current lifecycle state
    pub fn state(&self) -> LifecycleState {
        self.lifecycle.state()
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    /// The inflated view hierarchy, once created and until destroyed
    pub fn views(&self) -> Option<&ViewHierarchy> {
        self.views.as_ref()
    }

    /// Called once when the OS creates the activity.
    ///
    /// `saved_state` is accepted for parity with the platform callback and
    /// is not used. If any step fails the activity enters
    /// [`LifecycleState::Failed`] and rejects every later callback, so the
    /// bridge and chrome are never touched twice.
    pub fn on_create(&mut self, saved_state: Option<&[u8]>) -> Result<()> {
        self.lifecycle.check(LifecycleEvent::Create)?;
        tracing::info!(
            chrome = %self.config.window.chrome,
            layout = %self.config.layout.resource,
            restored = saved_state.is_some(),
            "Creating host activity"
        );

        if let Err(e) = self.perform_create() {
            self.lifecycle.fail();
            return Err(e);
        }

        self.lifecycle.send(LifecycleEvent::Create)?;
        Ok(())
    }

    fn perform_create(&mut self) -> Result<()> {
        self.services.bridge.set_context(self.services.context)?;

        self.services.chrome.apply(self.config.window.chrome)?;

        let path = AssetPath::from(self.config.layout.resource.as_str());
        let layout = LayoutResource::load(&*self.services.assets, &path)?;
        let mut views = layout.inflate(&mut *self.services.surfaces)?;
        views.find_game_surface(&self.config.layout.surface_id)?;
        self.views = Some(views);
        Ok(())
    }

    pub fn on_start(&mut self) -> Result<()> {
        self.lifecycle.send(LifecycleEvent::Start)?;
        tracing::debug!("Host activity started");
        Ok(())
    }

    /// Resume the game surface, then enter `Resumed`
    pub fn on_resume(&mut self) -> Result<()> {
        self.lifecycle.check(LifecycleEvent::Resume)?;
        self.game_surface()?.resume();
        self.lifecycle.send(LifecycleEvent::Resume)?;
        tracing::info!("App resumed");
        Ok(())
    }

    /// Suspend the game surface, then enter `Paused`
    pub fn on_pause(&mut self) -> Result<()> {
        self.lifecycle.check(LifecycleEvent::Pause)?;
        self.game_surface()?.suspend();
        self.lifecycle.send(LifecycleEvent::Pause)?;
        tracing::info!("App paused");
        Ok(())
    }

    pub fn on_stop(&mut self) -> Result<()> {
        self.lifecycle.send(LifecycleEvent::Stop)?;
        tracing::debug!("Host activity stopped");
        Ok(())
    }

    /// Enter `Destroyed` and drop the view hierarchy.
    ///
    /// The surface is not suspended here; the OS pauses the activity before
    /// tearing it down whenever it was visible.
    pub fn on_destroy(&mut self) -> Result<()> {
        self.lifecycle.send(LifecycleEvent::Destroy)?;
        self.views = None;
        tracing::info!("App destroyed");
        Ok(())
    }

    fn game_surface(&mut self) -> Result<&mut dyn GameSurface> {
        let id = &self.config.layout.surface_id;
        self.views
            .as_mut()
            .ok_or(HostError::NotInflated)?
            .find_game_surface(id)
    }
}

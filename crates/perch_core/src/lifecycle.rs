//! Activity lifecycle state machine
//!
//! The OS drives an Activity through
//! `Created → Started → Resumed ⇄ Paused → Stopped → Destroyed`.
//! [`Lifecycle`] tracks that progression from a fixed transition table and
//! rejects events the table does not allow, so a duplicate pause or a
//! callback after destroy never reaches the game surface. A creation that
//! fails part-way ends in [`LifecycleState::Failed`], which accepts nothing.

use std::fmt;

use crate::error::{HostError, Result};

/// Lifecycle state of the host activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    /// Constructed, `on_create` not yet run
    Initialized,
    Created,
    Started,
    Resumed,
    Paused,
    Stopped,
    Destroyed,
    /// Creation failed; terminal
    Failed,
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LifecycleState::Initialized => "initialized",
            LifecycleState::Created => "created",
            LifecycleState::Started => "started",
            LifecycleState::Resumed => "resumed",
            LifecycleState::Paused => "paused",
            LifecycleState::Stopped => "stopped",
            LifecycleState::Destroyed => "destroyed",
            LifecycleState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Lifecycle callback delivered by the OS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    Create,
    Start,
    Resume,
    Pause,
    Stop,
    Destroy,
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LifecycleEvent::Create => "create",
            LifecycleEvent::Start => "start",
            LifecycleEvent::Resume => "resume",
            LifecycleEvent::Pause => "pause",
            LifecycleEvent::Stop => "stop",
            LifecycleEvent::Destroy => "destroy",
        };
        f.write_str(name)
    }
}

/// A transition in the lifecycle table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: LifecycleState,
    pub event: LifecycleEvent,
    pub to: LifecycleState,
}

const fn on(from: LifecycleState, event: LifecycleEvent, to: LifecycleState) -> Transition {
    Transition { from, event, to }
}

use LifecycleEvent as E;
use LifecycleState as S;

/// Allowed transitions.
///
/// Besides the platform's own sequence this accepts `Created → Resumed` and
/// `Stopped → Resumed` for hosts that do not report start, and `Destroy` from
/// any live state.
const TRANSITIONS: &[Transition] = &[
    on(S::Initialized, E::Create, S::Created),
    on(S::Created, E::Start, S::Started),
    on(S::Created, E::Resume, S::Resumed),
    on(S::Created, E::Destroy, S::Destroyed),
    on(S::Started, E::Resume, S::Resumed),
    on(S::Started, E::Stop, S::Stopped),
    on(S::Started, E::Destroy, S::Destroyed),
    on(S::Resumed, E::Pause, S::Paused),
    on(S::Resumed, E::Destroy, S::Destroyed),
    on(S::Paused, E::Resume, S::Resumed),
    on(S::Paused, E::Stop, S::Stopped),
    on(S::Paused, E::Destroy, S::Destroyed),
    on(S::Stopped, E::Start, S::Started),
    on(S::Stopped, E::Resume, S::Resumed),
    on(S::Stopped, E::Destroy, S::Destroyed),
];

/// Lifecycle state machine
#[derive(Debug, Clone)]
pub struct Lifecycle {
    current: LifecycleState,
    /// History of transitions (for debugging)
    history: Vec<Transition>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            current: LifecycleState::Initialized,
            history: Vec::new(),
        }
    }

    /// Get the current state
    pub fn state(&self) -> LifecycleState {
        self.current
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: LifecycleState) -> bool {
        self.current == state
    }

    /// Get transition history
    pub fn history(&self) -> &[Transition] {
        &self.history
    }

    /// Clear transition history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Check if an event can trigger a transition from the current state
    pub fn can_send(&self, event: LifecycleEvent) -> bool {
        self.target(event).is_some()
    }

    /// The state `event` would lead to, or an error if it is not allowed
    pub fn check(&self, event: LifecycleEvent) -> Result<LifecycleState> {
        self.target(event).ok_or(HostError::InvalidTransition {
            state: self.current,
            event,
        })
    }

    /// Apply `event`, returning the new state
    pub fn send(&mut self, event: LifecycleEvent) -> Result<LifecycleState> {
        let to = self.check(event)?;
        let transition = on(self.current, event, to);
        tracing::trace!(from = %transition.from, %event, to = %to, "lifecycle transition");
        self.current = to;
        self.history.push(transition);
        Ok(to)
    }

    /// Enter the terminal `Failed` state
    pub fn fail(&mut self) {
        tracing::trace!(from = %self.current, "lifecycle failed");
        self.current = LifecycleState::Failed;
    }

    fn target(&self, event: LifecycleEvent) -> Option<LifecycleState> {
        TRANSITIONS
            .iter()
            .find(|t| t.from == self.current && t.event == event)
            .map(|t| t.to)
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

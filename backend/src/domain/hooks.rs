//! Ordered observers notified around client scripts.
//!
//! Each client handler announces when it starts (after authentication) and
//! when it ends (once its response is built). Observers run synchronously in
//! registration order.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::Principal;

/// Client script a hook event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientScript {
    /// `/client/layout`.
    Layout,
    /// `/client/ticket_delete`.
    TicketDelete,
}

impl ClientScript {
    /// Script name as exposed in routes and logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Layout => "layout",
            Self::TicketDelete => "ticket_delete",
        }
    }
}

impl fmt::Display for ClientScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lifecycle point of a client script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptEvent {
    /// The principal was authenticated and the script is about to run.
    Start(ClientScript),
    /// The response has been built.
    End(ClientScript),
}

/// Receives script lifecycle events.
pub trait ScriptObserver: Send + Sync {
    /// Called for every event in registration order.
    fn notify(&self, event: ScriptEvent, principal: &Principal);
}

/// Ordered list of [`ScriptObserver`]s.
///
/// # Examples
/// ```
/// use std::sync::{Arc, Mutex};
///
/// use panel::domain::{
///     ClientScript, IdentityKind, Principal, ScriptEvent, ScriptHooks, ScriptObserver, UserId,
/// };
///
/// #[derive(Default)]
/// struct Recorder(Mutex<Vec<ScriptEvent>>);
///
/// impl ScriptObserver for Recorder {
///     fn notify(&self, event: ScriptEvent, _principal: &Principal) {
///         self.0.lock().expect("recorder lock").push(event);
///     }
/// }
///
/// let recorder = Arc::new(Recorder::default());
/// let hooks = ScriptHooks::default().with_observer(recorder.clone());
/// let principal = Principal::new(UserId::new(7).expect("id"), "jdoe", IdentityKind::User)
///     .expect("principal");
///
/// hooks.script_start(ClientScript::Layout, &principal);
/// hooks.script_end(ClientScript::Layout, &principal);
///
/// let events = recorder.0.lock().expect("recorder lock");
/// assert_eq!(
///     *events,
///     vec![ScriptEvent::Start(ClientScript::Layout), ScriptEvent::End(ClientScript::Layout)]
/// );
/// ```
#[derive(Clone, Default)]
pub struct ScriptHooks {
    observers: Vec<Arc<dyn ScriptObserver>>,
}

impl ScriptHooks {
    /// Append an observer after those already registered.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn ScriptObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// True when nobody listens.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Announce that `script` starts for `principal`.
    pub fn script_start(&self, script: ClientScript, principal: &Principal) {
        self.dispatch(ScriptEvent::Start(script), principal);
    }

    /// Announce that `script` finished for `principal`.
    pub fn script_end(&self, script: ClientScript, principal: &Principal) {
        self.dispatch(ScriptEvent::End(script), principal);
    }

    fn dispatch(&self, event: ScriptEvent, principal: &Principal) {
        for observer in &self.observers {
            observer.notify(event, principal);
        }
    }
}

impl fmt::Debug for ScriptHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptHooks")
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Observer that emits a debug event per script boundary.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingScriptObserver;

impl ScriptObserver for TracingScriptObserver {
    fn notify(&self, event: ScriptEvent, principal: &Principal) {
        match event {
            ScriptEvent::Start(script) => {
                debug!(script = script.name(), user_id = %principal.user_id(), "client script start");
            }
            ScriptEvent::End(script) => {
                debug!(script = script.name(), user_id = %principal.user_id(), "client script end");
            }
        }
    }
}

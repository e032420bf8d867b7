//! Dispatch of selected actions to caller-supplied handlers.
//!
//! # Design
//! - Handlers are plain `Callback<()>` values keyed by [`ActionKind`].
//! - A missing handler is the only handled failure: it is reported to the log sink and swallowed.
//! - Handler panics are not caught here.

use crate::core::actions::ActionKind;
use std::collections::HashMap;
use thiserror::Error;
use yew::Callback;

/// Failures raised while dispatching a selected action.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// No handler was registered for the selected action.
    #[error("Unknown or unimplemented action {action}")]
    UnhandledAction {
        /// Action that had no handler.
        action: ActionKind,
    },
}

/// Handlers registered by the parent view, keyed by action kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActionHandlers {
    handlers: HashMap<ActionKind, Callback<()>>,
}

impl ActionHandlers {
    /// Empty handler map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration.
    #[must_use]
    pub fn with(mut self, action: ActionKind, handler: Callback<()>) -> Self {
        self.insert(action, handler);
        self
    }

    /// Register `handler` for `action`, returning any handler it replaced.
    pub fn insert(&mut self, action: ActionKind, handler: Callback<()>) -> Option<Callback<()>> {
        self.handlers.insert(action, handler)
    }

    /// Whether a handler exists for `action`.
    #[must_use]
    pub fn contains(&self, action: ActionKind) -> bool {
        self.handlers.contains_key(&action)
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handlers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Invoke the handler registered for `action`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnhandledAction`] when no handler is registered;
    /// nothing is invoked in that case.
    pub fn dispatch(&self, action: ActionKind) -> Result<(), DispatchError> {
        let handler = self
            .handlers
            .get(&action)
            .ok_or(DispatchError::UnhandledAction { action })?;
        handler.emit(());
        Ok(())
    }
}

impl FromIterator<(ActionKind, Callback<()>)> for ActionHandlers {
    fn from_iter<I: IntoIterator<Item = (ActionKind, Callback<()>)>>(iter: I) -> Self {
        Self {
            handlers: iter.into_iter().collect(),
        }
    }
}

/// Dispatch `action`, sending a diagnostic to `log_error` when it has no handler.
///
/// Returns whether a handler ran.
pub fn dispatch_or_log(
    handlers: &ActionHandlers,
    action: ActionKind,
    log_error: impl FnOnce(String),
) -> bool {
    match handlers.dispatch(action) {
        Ok(()) => true,
        Err(err) => {
            log_error(err.to_string());
            false
        }
    }
}

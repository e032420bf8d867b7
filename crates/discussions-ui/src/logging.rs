//! Browser console sinks for diagnostics and demo activity.

use gloo::console;
use yew::Callback;

/// Default sink for dispatch diagnostics.
pub(crate) fn log_error(message: String) {
    console::error!(message);
}

/// Informational line for demo activity.
pub(crate) fn log_activity(message: &str) {
    console::log!("discussions activity", message);
}

/// Callback form of [`log_error`] for component props.
pub(crate) fn error_sink() -> Callback<String> {
    Callback::from(log_error)
}

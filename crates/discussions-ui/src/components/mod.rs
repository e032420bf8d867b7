pub(crate) mod actions_dropdown;
pub(crate) mod atoms;
pub(crate) mod popup;
pub(crate) mod thread;

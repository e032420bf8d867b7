//! Core, DOM-free primitives and helpers for the discussions UI.
pub mod actions;
pub mod content;
pub mod dispatch;
pub mod menu;
pub mod placement;
pub mod store;

//! Shared UI atoms used by the actions dropdown.

pub(crate) mod icon_button;
pub(crate) mod icons;

pub(crate) use icon_button::IconButton;

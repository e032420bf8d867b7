//! Popup positioning relative to the trigger.

use crate::core::menu::MenuEntry;

/// Gap between the trigger and the popup, in CSS pixels.
pub const POPUP_GAP: f64 = 4.0;
/// Popup width used for layout (matches the `w-44` menu class).
pub const POPUP_WIDTH: f64 = 176.0;
const ITEM_HEIGHT: f64 = 32.0;
const DIVIDER_HEIGHT: f64 = 9.0;
const POPUP_PADDING: f64 = 8.0;

/// Where the popup opens relative to its anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Placement {
    /// Below, left edges aligned.
    BottomStart,
    /// Below, right edges aligned.
    BottomEnd,
    /// Above, left edges aligned.
    TopStart,
    /// Above, right edges aligned.
    TopEnd,
    /// Below unless the viewport has more room above; left edges aligned.
    #[default]
    AutoStart,
}

impl Placement {
    /// Kebab-case name, as written to the popup's `data-placement` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BottomStart => "bottom-start",
            Self::BottomEnd => "bottom-end",
            Self::TopStart => "top-start",
            Self::TopEnd => "top-end",
            Self::AutoStart => "auto-start",
        }
    }
}

/// Anchor bounding box in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnchorRect {
    /// Distance from the viewport top.
    pub top: f64,
    /// Distance from the viewport left.
    pub left: f64,
    /// Box width.
    pub width: f64,
    /// Box height.
    pub height: f64,
}

/// Width/height pair used for the viewport and the popup.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

/// Resolved popup position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PopupPosition {
    /// Concrete placement (never [`Placement::AutoStart`]).
    pub placement: Placement,
    /// Top offset in viewport pixels.
    pub top: f64,
    /// Left offset in viewport pixels.
    pub left: f64,
}

impl PopupPosition {
    /// Inline style for a `position: fixed` container.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "position: fixed; top: {:.0}px; left: {:.0}px;",
            self.top, self.left
        )
    }

    /// Whether this position renders differently from `previous`.
    ///
    /// Offsets are compared in whole pixels, matching [`PopupPosition::style`].
    #[must_use]
    pub fn moved_from(&self, previous: Option<Self>) -> bool {
        previous.is_none_or(|previous| {
            previous.placement != self.placement
                || pixel_changed(previous.top, self.top)
                || pixel_changed(previous.left, self.left)
        })
    }
}

const fn pixel_changed(before: f64, after: f64) -> bool {
    (before.round() - after.round()).abs() >= 0.5
}

/// Estimated popup size for a list of menu rows.
#[must_use]
pub fn estimated_popup_size(entries: &[MenuEntry]) -> Size {
    let height = entries
        .iter()
        .map(|entry| match entry {
            MenuEntry::Divider { .. } => DIVIDER_HEIGHT,
            MenuEntry::Item(_) => ITEM_HEIGHT,
        })
        .sum::<f64>()
        + POPUP_PADDING;
    Size {
        width: POPUP_WIDTH,
        height,
    }
}

/// Position a popup of `popup` size next to `anchor` inside `viewport`.
///
/// The horizontal offset is clamped so the popup stays on screen when it fits.
#[must_use]
pub fn popup_position(
    anchor: AnchorRect,
    viewport: Size,
    popup: Size,
    placement: Placement,
) -> PopupPosition {
    let placement = resolve(anchor, viewport, popup, placement);
    let top = match placement {
        Placement::TopStart | Placement::TopEnd => (anchor.top - POPUP_GAP - popup.height).max(0.0),
        _ => anchor.top + anchor.height + POPUP_GAP,
    };
    let left = match placement {
        Placement::BottomEnd | Placement::TopEnd => anchor.left + anchor.width - popup.width,
        _ => anchor.left,
    };
    let max_left = (viewport.width - popup.width).max(0.0);
    PopupPosition {
        placement,
        top,
        left: left.min(max_left).max(0.0),
    }
}

fn resolve(anchor: AnchorRect, viewport: Size, popup: Size, placement: Placement) -> Placement {
    if placement != Placement::AutoStart {
        return placement;
    }
    let below = viewport.height - (anchor.top + anchor.height) - POPUP_GAP;
    let above = anchor.top - POPUP_GAP;
    if popup.height <= below || below >= above {
        Placement::BottomStart
    } else {
        Placement::TopStart
    }
}

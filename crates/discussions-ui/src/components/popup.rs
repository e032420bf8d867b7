//! Anchored popup with a click-to-dismiss backdrop.
//!
//! # Design
//! - Render nothing while closed; children mount only when open.
//! - Backdrop press and Escape both emit `on_close`; the caller owns the open flag.
//! - Position is computed from the anchor's bounding box on each open render.
//! - While open, window scroll and resize re-render the popup if the anchor moved.

use crate::core::placement::{AnchorRect, Placement, PopupPosition, Size, popup_position};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::utils::{document, window};
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ModalPopupProps {
    /// Whether the popup and its backdrop are mounted.
    pub open: bool,
    /// Element the popup is positioned against.
    pub anchor: NodeRef,
    /// Preferred side and alignment relative to the anchor.
    #[prop_or_default]
    pub placement: Placement,
    /// Expected popup size, used to flip and clamp the position.
    pub size: Size,
    /// Fired on backdrop press or Escape.
    pub on_close: Callback<()>,
    /// Popup content.
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ModalPopup)]
pub(crate) fn modal_popup(props: &ModalPopupProps) -> Html {
    let rendered = use_mut_ref(|| None::<PopupPosition>);
    let force_update = use_force_update();
    {
        let on_close = props.on_close.clone();
        let anchor = props.anchor.clone();
        let rendered = rendered.clone();
        use_effect_with_deps(
            move |(open, size, placement): &(bool, Size, Placement)| {
                let listeners = open.then(|| {
                    let keydown = EventListener::new(&document(), "keydown", move |event| {
                        let escape = event
                            .dyn_ref::<KeyboardEvent>()
                            .is_some_and(|key| key.key() == "Escape");
                        if escape {
                            on_close.emit(());
                        }
                    });
                    let (size, placement) = (*size, *placement);
                    let follow = move || {
                        let Some(next) = anchor_position(&anchor, size, placement) else {
                            return;
                        };
                        if next.moved_from(*rendered.borrow()) {
                            force_update.force_update();
                        }
                    };
                    let resize = EventListener::new(&window(), "resize", {
                        let follow = follow.clone();
                        move |_event| follow()
                    });
                    let scroll = EventListener::new_with_options(
                        &window(),
                        "scroll",
                        EventListenerOptions::run_in_capture_phase(),
                        move |_event| follow(),
                    );
                    [keydown, resize, scroll]
                });
                move || drop(listeners)
            },
            (props.open, props.size, props.placement),
        );
    }

    if !props.open {
        *rendered.borrow_mut() = None;
        return html! {};
    }

    let position = anchor_position(&props.anchor, props.size, props.placement);
    *rendered.borrow_mut() = position;
    let style = position.map(|position| AttrValue::from(position.style()));
    let side = position.map(|position| AttrValue::from(position.placement.as_str()));
    let container_class = classes!("z-50", style.is_none().then_some("absolute"));
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <>
            <div class="fixed inset-0 z-40" onmousedown={on_backdrop}></div>
            <div
                class={container_class}
                style={style}
                data-placement={side}
                role="presentation">
                {for props.children.iter()}
            </div>
        </>
    }
}

fn anchor_position(anchor: &NodeRef, size: Size, placement: Placement) -> Option<PopupPosition> {
    let rect = anchor.cast::<Element>()?.get_bounding_client_rect();
    let window = window();
    let viewport = Size {
        width: window.inner_width().ok()?.as_f64()?,
        height: window.inner_height().ok()?.as_f64()?,
    };
    let anchor = AnchorRect {
        top: rect.top(),
        left: rect.left(),
        width: rect.width(),
        height: rect.height(),
    };
    Some(popup_position(anchor, viewport, size, placement))
}

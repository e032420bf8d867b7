//! Actions dropdown for a single comment or post.
//!
//! # Design
//! - Derive the action list from the record on every render; never reorder it.
//! - Own only the open/closed flag; handlers and the log sink come from the caller.
//! - Close the popup before dispatching the selected action.

use crate::components::atoms::IconButton;
use crate::components::atoms::icons::{IconMoreVertical, action_icon};
use crate::components::popup::ModalPopup;
use crate::core::actions::{ActionKind, permitted_actions};
use crate::core::content::ContentRecord;
use crate::core::dispatch::ActionHandlers;
use crate::core::menu::{MenuEntry, MenuEvent, MenuState, menu_entries};
use crate::core::placement::{Placement, estimated_popup_size};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::logging::error_sink;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ActionsDropdownProps {
    /// Comment or post whose permitted actions are listed.
    pub content: ContentRecord,
    /// Handlers keyed by action; unlisted actions are logged on click.
    pub action_handlers: ActionHandlers,
    /// Keep the trigger inert and the popup closed.
    #[prop_or_default]
    pub disabled: bool,
    /// Popup placement relative to the trigger.
    #[prop_or_default]
    pub placement: Placement,
    /// Overrides the console sink for unhandled-action diagnostics.
    #[prop_or_default]
    pub on_log_error: Option<Callback<String>>,
}

#[function_component(ActionsDropdown)]
pub(crate) fn actions_dropdown(props: &ActionsDropdownProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let menu = use_state(MenuState::closed);
    let anchor = use_node_ref();
    let entries = menu_entries(&permitted_actions(&props.content));

    let on_toggle = {
        let menu = menu.clone();
        let disabled = props.disabled;
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            menu.set((*menu).apply(MenuEvent::Toggle { disabled }));
        })
    };
    let on_close = {
        let menu = menu.clone();
        Callback::from(move |()| menu.set((*menu).apply(MenuEvent::CloseRequested)))
    };
    let on_select = {
        let menu = menu.clone();
        let handlers = props.action_handlers.clone();
        let log_error = props.on_log_error.clone().unwrap_or_else(error_sink);
        Callback::from(move |action: ActionKind| {
            (*menu).select(
                |next| menu.set(next),
                &handlers,
                action,
                |message| log_error.emit(message),
            );
        })
    };

    html! {
        <>
            <span ref={anchor.clone()} class="inline-flex">
                <IconButton
                    aria_label={AttrValue::from(bundle.text("actions.menu_alt", "Actions menu"))}
                    disabled={props.disabled}
                    expanded={menu.is_open()}
                    onclick={on_toggle}
                >
                    <IconMoreVertical size={Some(AttrValue::from("4"))} />
                </IconButton>
            </span>
            <ModalPopup
                open={menu.is_open()}
                anchor={anchor}
                placement={props.placement}
                size={estimated_popup_size(&entries)}
                on_close={on_close}
            >
                <ul
                    role="menu"
                    class="menu bg-base-100 rounded-box w-44 p-1 shadow flex flex-col">
                    {for entries.iter().map(|entry| render_entry(entry, &bundle, &on_select))}
                </ul>
            </ModalPopup>
        </>
    }
}

fn render_entry(
    entry: &MenuEntry,
    bundle: &TranslationBundle,
    on_select: &Callback<ActionKind>,
) -> Html {
    match entry {
        MenuEntry::Divider { before } => html! {
            <li key={format!("divider-{before}")} role="separator">
                <hr class="my-1 border-base-200" />
            </li>
        },
        MenuEntry::Item(action) => {
            let kind = action.action;
            let onclick = on_select.reform(move |_: MouseEvent| kind);
            html! {
                <li key={action.id} role="none">
                    <button
                        type="button"
                        role="menuitem"
                        class="justify-start py-1.5 mr-4"
                        onclick={onclick}>
                        {action_icon(action.icon, "4")}
                        <span>{action.label.resolve(bundle)}</span>
                    </button>
                </li>
            }
        }
    }
}

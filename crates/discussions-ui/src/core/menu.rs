//! Open/closed state and entry layout for the actions dropdown.
//!
//! # Design
//! - The open flag only moves through [`MenuState::apply`].
//! - Selecting an entry commits the closed state before the handler runs.
//! - Entry layout mirrors the action order; the only insertion is a divider before delete.

use crate::core::actions::{ActionKind, ContentAction};
use crate::core::dispatch::{ActionHandlers, dispatch_or_log};

/// Visibility of one dropdown instance. Starts closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

/// Inputs that move the dropdown between open and closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// Trigger button activated.
    Toggle {
        /// Whether the trigger is currently disabled.
        disabled: bool,
    },
    /// Outside press, Escape, or an explicit close request.
    CloseRequested,
    /// A menu entry was clicked.
    ItemSelected,
}

impl MenuState {
    /// Initial, closed state.
    #[must_use]
    pub const fn closed() -> Self {
        Self { open: false }
    }

    /// Whether the popup should render.
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    /// Next state after `event`. A disabled trigger can only close the menu.
    #[must_use]
    pub const fn apply(self, event: MenuEvent) -> Self {
        match event {
            MenuEvent::Toggle { disabled: false } => Self { open: !self.open },
            MenuEvent::Toggle { disabled: true }
            | MenuEvent::CloseRequested
            | MenuEvent::ItemSelected => Self::closed(),
        }
    }

    /// Handle a click on the entry for `action`.
    ///
    /// The closed state goes to `commit` first, then the handler for `action` runs;
    /// a missing handler is reported through `log_error`. Returns whether a handler ran.
    pub fn select(
        self,
        commit: impl FnOnce(Self),
        handlers: &ActionHandlers,
        action: ActionKind,
        log_error: impl FnOnce(String),
    ) -> bool {
        commit(self.apply(MenuEvent::ItemSelected));
        dispatch_or_log(handlers, action, log_error)
    }
}

/// One row of the rendered menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEntry {
    /// Visual separator preceding the entry with the given id.
    Divider {
        /// Id of the entry that follows the divider.
        before: &'static str,
    },
    /// Clickable action.
    Item(ContentAction),
}

/// Lay out `actions` as menu rows, inserting a divider before each delete entry.
#[must_use]
pub fn menu_entries(actions: &[ContentAction]) -> Vec<MenuEntry> {
    let mut entries = Vec::with_capacity(actions.len() + 1);
    for action in actions {
        if action.action == ActionKind::Delete {
            entries.push(MenuEntry::Divider { before: action.id });
        }
        entries.push(MenuEntry::Item(*action));
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::{IconRef, MessageRef};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use yew::Callback;

    fn action(id: &'static str, kind: ActionKind) -> ContentAction {
        ContentAction {
            id,
            action: kind,
            icon: IconRef::Edit,
            label: MessageRef::new("actions.edit", "Edit"),
        }
    }

    #[test]
    fn starts_closed_and_toggles() {
        let state = MenuState::default();
        assert_eq!(state, MenuState::closed());
        let open = state.apply(MenuEvent::Toggle { disabled: false });
        assert!(open.is_open());
        assert!(!open.apply(MenuEvent::Toggle { disabled: false }).is_open());
    }

    #[test]
    fn disabled_trigger_never_opens() {
        let state = MenuState::closed().apply(MenuEvent::Toggle { disabled: true });
        assert!(!state.is_open());
        let open = MenuState::closed().apply(MenuEvent::Toggle { disabled: false });
        assert!(!open.apply(MenuEvent::Toggle { disabled: true }).is_open());
    }

    #[test]
    fn close_request_and_selection_close() {
        let open = MenuState::closed().apply(MenuEvent::Toggle { disabled: false });
        assert!(!open.apply(MenuEvent::CloseRequested).is_open());
        assert!(!open.apply(MenuEvent::ItemSelected).is_open());
        assert!(
            !MenuState::closed()
                .apply(MenuEvent::CloseRequested)
                .is_open()
        );
    }

    fn opened() -> MenuState {
        MenuState::closed().apply(MenuEvent::Toggle { disabled: false })
    }

    #[test]
    fn select_closes_and_runs_handler_once() {
        let calls = Rc::new(Cell::new(0));
        let handlers = ActionHandlers::new().with(ActionKind::Pin, {
            let calls = Rc::clone(&calls);
            Callback::from(move |()| calls.set(calls.get() + 1))
        });
        let mut state = opened();
        let mut logged = 0;

        let invoked = state.select(
            |next| state = next,
            &handlers,
            ActionKind::Pin,
            |_| logged += 1,
        );

        assert!(invoked);
        assert!(!state.is_open());
        assert_eq!(calls.get(), 1);
        assert_eq!(logged, 0);
    }

    #[test]
    fn select_closes_and_logs_once_without_handler() {
        let handlers = ActionHandlers::new();
        let logged = RefCell::new(Vec::new());
        let mut state = opened();

        let invoked = state.select(
            |next| state = next,
            &handlers,
            ActionKind::Close,
            |message| logged.borrow_mut().push(message),
        );

        assert!(!invoked);
        assert!(!state.is_open());
        assert_eq!(
            logged.into_inner(),
            vec!["Unknown or unimplemented action closed".to_string()]
        );
    }

    #[test]
    fn handler_sees_menu_already_closed() {
        let menu = Rc::new(Cell::new(opened()));
        let seen_open = Rc::new(Cell::new(None));
        let handlers = ActionHandlers::new().with(ActionKind::Delete, {
            let menu = Rc::clone(&menu);
            let seen_open = Rc::clone(&seen_open);
            Callback::from(move |()| seen_open.set(Some(menu.get().is_open())))
        });

        let invoked = menu.get().select(
            |next| menu.set(next),
            &handlers,
            ActionKind::Delete,
            |_| {},
        );

        assert!(invoked);
        assert_eq!(seen_open.get(), Some(false));
    }

    #[test]
    fn divider_precedes_only_delete() {
        let actions = [
            action("edit", ActionKind::Edit),
            action("delete", ActionKind::Delete),
            action("report", ActionKind::Report),
        ];
        assert_eq!(
            menu_entries(&actions),
            vec![
                MenuEntry::Item(actions[0]),
                MenuEntry::Divider { before: "delete" },
                MenuEntry::Item(actions[1]),
                MenuEntry::Item(actions[2]),
            ]
        );
    }

    #[test]
    fn no_delete_means_no_divider() {
        let actions = [
            action("copy-link", ActionKind::CopyLink),
            action("report", ActionKind::Report),
        ];
        let entries = menu_entries(&actions);
        assert_eq!(entries.len(), 2);
        assert!(
            entries
                .iter()
                .all(|entry| matches!(entry, MenuEntry::Item(_)))
        );
    }

    #[test]
    fn empty_actions_render_nothing() {
        assert!(menu_entries(&[]).is_empty());
    }

    #[test]
    fn delete_first_still_gets_divider() {
        let actions = [action("delete", ActionKind::Delete)];
        assert_eq!(
            menu_entries(&actions).first(),
            Some(&MenuEntry::Divider { before: "delete" })
        );
    }
}

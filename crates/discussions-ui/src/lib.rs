#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Discussions actions dropdown.
//! This crate holds the Yew comment/post action menu, its DOM-free core and locale bundles.

pub mod core;
pub mod i18n;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod logging;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::core::actions::{ActionKind, permitted_actions};
    use crate::core::content::ContentRecord;
    use crate::core::dispatch::ActionHandlers;
    use crate::core::menu::{MenuEntry, MenuEvent, MenuState, menu_entries};
    use crate::i18n::{LocaleCode, TranslationBundle};
    use serde_json::json;
    use std::cell::Cell;
    use std::rc::Rc;
    use yew::Callback;

    #[test]
    fn translation_fallbacks_work() {
        let bundle = TranslationBundle::new(LocaleCode::Fr);
        assert_eq!(bundle.text("actions.edit", "Edit"), "Modifier");
        assert_eq!(bundle.text("actions.missing_key", "Default"), "Default");
    }

    #[test]
    fn derived_actions_flow_through_menu_and_dispatch() {
        let post = ContentRecord::from_value(json!({
            "id": "thread-1",
            "editable_fields": ["raw_body", "abuse_flagged"],
            "abuse_flagged": false,
            "can_delete": true,
        }))
        .unwrap();
        let entries = menu_entries(&permitted_actions(&post));
        assert!(matches!(entries.get(2), Some(MenuEntry::Divider { .. })));

        let deleted = Rc::new(Cell::new(0));
        let handlers = ActionHandlers::new().with(ActionKind::Delete, {
            let deleted = Rc::clone(&deleted);
            Callback::from(move |()| deleted.set(deleted.get() + 1))
        });

        let mut menu = MenuState::closed().apply(MenuEvent::Toggle { disabled: false });
        assert!(menu.is_open());
        let invoked = menu.select(|next| menu = next, &handlers, ActionKind::Delete, |_| {});
        assert!(!menu.is_open());
        assert!(invoked);
        assert_eq!(deleted.get(), 1);
    }

    #[test]
    fn binary_denies_the_library_lints() {
        let main = include_str!("main.rs");
        for lint in ["unreachable_pub,", "missing_docs", "clippy::pedantic,"] {
            assert!(main.contains(lint), "main.rs should deny {lint}");
        }
    }

    #[test]
    fn hand_written_sources_fit_rustfmt_width() {
        let sources = [
            ("lib.rs", include_str!("lib.rs")),
            ("core/actions.rs", include_str!("core/actions.rs")),
            ("core/menu.rs", include_str!("core/menu.rs")),
            ("core/placement.rs", include_str!("core/placement.rs")),
            ("core/store.rs", include_str!("core/store.rs")),
            ("components/actions_dropdown.rs", include_str!("components/actions_dropdown.rs")),
            ("components/popup.rs", include_str!("components/popup.rs")),
            ("components/thread.rs", include_str!("components/thread.rs")),
        ];
        for (name, source) in sources {
            for (index, line) in source.lines().enumerate() {
                assert!(
                    line.chars().count() <= 100,
                    "{name}:{} is wider than 100 columns",
                    index + 1
                );
            }
        }
    }

    #[test]
    fn component_prop_fields_are_documented() {
        let sources = [
            ("components/actions_dropdown.rs", include_str!("components/actions_dropdown.rs")),
            ("components/popup.rs", include_str!("components/popup.rs")),
            ("components/atoms/icon_button.rs", include_str!("components/atoms/icon_button.rs")),
        ];
        for (name, source) in sources {
            let lines: Vec<_> = source.lines().map(str::trim).collect();
            for (index, line) in lines.iter().enumerate() {
                if !line.starts_with("pub ") || line.contains("fn ") {
                    continue;
                }
                let doc = lines[..index]
                    .iter()
                    .rev()
                    .find(|previous| !previous.starts_with("#["));
                assert!(
                    doc.is_some_and(|previous| previous.starts_with("///")),
                    "{name}:{} field has no doc comment",
                    index + 1
                );
            }
        }
    }
}

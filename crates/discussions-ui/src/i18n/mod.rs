//! Lightweight JSON-backed translations with per-locale bundles.

use serde::Deserialize;
use serde_json::Value;
use std::sync::LazyLock;

/// Supported locale codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    /// Arabic.
    Ar,
    /// English.
    En,
    /// Spanish.
    Es,
    /// French.
    Fr,
}

impl LocaleCode {
    #[must_use]
    /// All supported locales in display order.
    pub const fn all() -> [Self; 4] {
        [Self::Ar, Self::En, Self::Es, Self::Fr]
    }

    /// Two-letter RFC 5646 code for the locale.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
        }
    }

    /// Map an arbitrary browser language tag to a supported locale, falling back to None.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.to_ascii_lowercase();
        let base = lowered.split('-').next().unwrap_or_default();
        Self::all()
            .iter()
            .copied()
            .find(|locale| locale.code() == base)
    }
}

/// Default fallback locale.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::En;

/// Translation bundle containing a parsed JSON tree for the locale.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    /// Locale backing this bundle.
    pub locale: LocaleCode,
    tree: Value,
    rtl: bool,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl TranslationBundle {
    /// Build a translation bundle for the given locale.
    ///
    /// Missing keys degrade to English, then to the caller default.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        let raw = raw_locale(locale);
        let tree: Value = serde_json::from_str(raw).unwrap_or(Value::Null);
        let rtl = tree
            .get("meta")
            .and_then(|meta| meta.get("rtl"))
            .and_then(Value::as_bool)
            .unwrap_or(false);
        Self { locale, tree, rtl }
    }

    /// Resolve a dotted path (`section.key`) with English fallback and caller default.
    #[must_use]
    pub fn text(&self, path: &str, default: &str) -> String {
        resolve(&self.tree, path)
            .or_else(|| resolve(&EN_FALLBACK.tree, path))
            .unwrap_or_else(|| default.to_string())
    }

    /// Whether the locale prefers RTL layout (bidi).
    #[must_use]
    pub const fn rtl(&self) -> bool {
        self.rtl
    }
}

static EN_FALLBACK: LazyLock<TranslationBundle> =
    LazyLock::new(|| TranslationBundle::new(LocaleCode::En));

fn resolve(tree: &Value, path: &str) -> Option<String> {
    let mut node = tree;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str().map(ToString::to_string)
}

const fn raw_locale(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::Ar => include_str!("../../i18n/ar.json"),
        LocaleCode::En => include_str!("../../i18n/en.json"),
        LocaleCode::Es => include_str!("../../i18n/es.json"),
        LocaleCode::Fr => include_str!("../../i18n/fr.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::{ActionKind, permitted_actions};
    use crate::core::content::ContentRecord;
    use serde_json::json;

    #[test]
    fn missing_key_falls_back_to_default() {
        let bundle = TranslationBundle::new(LocaleCode::Fr);
        assert_eq!(bundle.text("nonexistent.key", "fallback"), "fallback");
    }

    #[test]
    fn rtl_flag_respects_meta() {
        assert!(TranslationBundle::new(LocaleCode::Ar).rtl());
        assert!(!TranslationBundle::new(LocaleCode::En).rtl());
    }

    #[test]
    fn lang_tags_map_to_base_locale() {
        assert_eq!(LocaleCode::from_lang_tag("fr-CA"), Some(LocaleCode::Fr));
        assert_eq!(LocaleCode::from_lang_tag("ES"), Some(LocaleCode::Es));
        assert_eq!(LocaleCode::from_lang_tag("de-DE"), None);
    }

    #[test]
    fn every_locale_labels_every_catalogue_entry() {
        let everything = ContentRecord::from_value(json!({
            "url": "https://forum.test/t/1",
            "editable_fields": ActionKind::all().map(ActionKind::wire_name),
        }))
        .unwrap();
        let mut flipped = everything.clone();
        for kind in ActionKind::all() {
            flipped.set(kind.wire_name(), true);
        }
        let mut unflipped = everything;
        for kind in ActionKind::all() {
            unflipped.set(kind.wire_name(), false);
        }
        let actions: Vec<_> = permitted_actions(&flipped)
            .into_iter()
            .chain(permitted_actions(&unflipped))
            .collect();

        for locale in LocaleCode::all() {
            let bundle = TranslationBundle::new(locale);
            assert!(
                !bundle.text("actions.menu_alt", "").is_empty(),
                "{} menu_alt",
                locale.code()
            );
            for action in &actions {
                assert!(
                    !bundle.text(action.label.key, "").is_empty(),
                    "{} {}",
                    locale.code(),
                    action.label.key
                );
            }
        }
    }
}

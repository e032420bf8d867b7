//! Action kinds and the default derivation of permitted actions for a record.
//!
//! # Design
//! - The catalogue is static and ordered; derivation only filters it.
//! - Permission comes from `editable_fields`, with `can_delete` and `url` special cases.
//! - Toggle pairs (pin/unpin, report/unreport, ...) are selected by strict field equality.

use crate::core::content::ContentRecord;
use crate::i18n::TranslationBundle;
use std::fmt::{self, Display, Formatter};

/// Operations a user can take on a comment or post.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Copy a permalink to the content.
    CopyLink,
    /// Edit the body.
    Edit,
    /// Pin or unpin a post.
    Pin,
    /// Endorse or unendorse a response.
    Endorse,
    /// Mark or unmark a response as the answer.
    MarkAnswered,
    /// Close or reopen a post.
    Close,
    /// Report or unreport abuse.
    Report,
    /// Delete the content.
    Delete,
}

impl ActionKind {
    /// All kinds in catalogue order.
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::CopyLink,
            Self::Edit,
            Self::Pin,
            Self::Endorse,
            Self::MarkAnswered,
            Self::Close,
            Self::Report,
            Self::Delete,
        ]
    }

    /// Field name used by the discussions API for this action.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::CopyLink => "copy_link",
            Self::Edit => "raw_body",
            Self::Pin => "pinned",
            Self::Endorse => "endorsed",
            Self::MarkAnswered => "answered",
            Self::Close => "closed",
            Self::Report => "abuse_flagged",
            Self::Delete => "delete",
        }
    }

    /// Reverse lookup of [`ActionKind::wire_name`].
    #[must_use]
    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|kind| kind.wire_name() == name)
    }
}

impl Display for ActionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Icons available to menu entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconRef {
    /// Chain link.
    Link,
    /// Pencil.
    Edit,
    /// Push pin.
    Pin,
    /// Check mark.
    Check,
    /// Check mark in a circle.
    CheckCircle,
    /// Closed padlock.
    Lock,
    /// Open padlock.
    Unlock,
    /// Flag.
    Flag,
    /// Trash can.
    Trash,
    /// Vertical ellipsis used by the trigger.
    MoreVertical,
}

/// Symbolic message identifier resolved through a [`TranslationBundle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageRef {
    /// Dotted bundle key.
    pub key: &'static str,
    /// Text used when no bundle carries the key.
    pub default: &'static str,
}

impl MessageRef {
    /// Build a message reference.
    #[must_use]
    pub const fn new(key: &'static str, default: &'static str) -> Self {
        Self { key, default }
    }

    /// Localized text for this message.
    #[must_use]
    pub fn resolve(&self, bundle: &TranslationBundle) -> String {
        bundle.text(self.key, self.default)
    }
}

/// A permitted operation rendered as one menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContentAction {
    /// Stable entry identifier, unique within a menu.
    pub id: &'static str,
    /// Dispatch key.
    pub action: ActionKind,
    /// Entry icon.
    pub icon: IconRef,
    /// Entry label.
    pub label: MessageRef,
}

impl ContentAction {
    const fn new(id: &'static str, action: ActionKind, icon: IconRef, label: MessageRef) -> Self {
        Self {
            id,
            action,
            icon,
            label,
        }
    }
}

struct CatalogueEntry {
    action: ContentAction,
    conditions: &'static [(&'static str, bool)],
}

const fn entry(
    id: &'static str,
    action: ActionKind,
    icon: IconRef,
    label: MessageRef,
    conditions: &'static [(&'static str, bool)],
) -> CatalogueEntry {
    CatalogueEntry {
        action: ContentAction::new(id, action, icon, label),
        conditions,
    }
}

static CATALOGUE: [CatalogueEntry; 13] = [
    entry(
        "copy-link",
        ActionKind::CopyLink,
        IconRef::Link,
        MessageRef::new("actions.copy_link", "Copy link"),
        &[],
    ),
    entry(
        "edit",
        ActionKind::Edit,
        IconRef::Edit,
        MessageRef::new("actions.edit", "Edit"),
        &[],
    ),
    entry(
        "pin",
        ActionKind::Pin,
        IconRef::Pin,
        MessageRef::new("actions.pin", "Pin"),
        &[("pinned", false)],
    ),
    entry(
        "unpin",
        ActionKind::Pin,
        IconRef::Pin,
        MessageRef::new("actions.unpin", "Unpin"),
        &[("pinned", true)],
    ),
    entry(
        "endorse",
        ActionKind::Endorse,
        IconRef::Check,
        MessageRef::new("actions.endorse", "Endorse"),
        &[("endorsed", false)],
    ),
    entry(
        "unendorse",
        ActionKind::Endorse,
        IconRef::Check,
        MessageRef::new("actions.unendorse", "Unendorse"),
        &[("endorsed", true)],
    ),
    entry(
        "answer",
        ActionKind::MarkAnswered,
        IconRef::CheckCircle,
        MessageRef::new("actions.mark_answered", "Mark as answered"),
        &[("answered", false)],
    ),
    entry(
        "unanswer",
        ActionKind::MarkAnswered,
        IconRef::CheckCircle,
        MessageRef::new("actions.unmark_answered", "Unmark as answered"),
        &[("answered", true)],
    ),
    entry(
        "close",
        ActionKind::Close,
        IconRef::Lock,
        MessageRef::new("actions.close", "Close"),
        &[("closed", false)],
    ),
    entry(
        "reopen",
        ActionKind::Close,
        IconRef::Unlock,
        MessageRef::new("actions.reopen", "Reopen"),
        &[("closed", true)],
    ),
    entry(
        "report",
        ActionKind::Report,
        IconRef::Flag,
        MessageRef::new("actions.report", "Report"),
        &[("abuse_flagged", false)],
    ),
    entry(
        "unreport",
        ActionKind::Report,
        IconRef::Flag,
        MessageRef::new("actions.unreport", "Unreport"),
        &[("abuse_flagged", true)],
    ),
    entry(
        "delete",
        ActionKind::Delete,
        IconRef::Trash,
        MessageRef::new("actions.delete", "Delete"),
        &[],
    ),
];

/// Ordered actions the current user may take on `content`.
#[must_use]
pub fn permitted_actions(content: &ContentRecord) -> Vec<ContentAction> {
    CATALOGUE
        .iter()
        .filter(|entry| {
            is_permitted(content, entry.action.action) && conditions_hold(content, entry.conditions)
        })
        .map(|entry| entry.action)
        .collect()
}

/// Whether the record grants `kind` at all, regardless of toggle state.
#[must_use]
pub fn is_permitted(content: &ContentRecord, kind: ActionKind) -> bool {
    if content
        .editable_fields()
        .any(|field| field == kind.wire_name())
    {
        return true;
    }
    match kind {
        ActionKind::Delete => content.bool_field("can_delete").unwrap_or(false),
        ActionKind::CopyLink => content.str_field("url").is_some(),
        _ => false,
    }
}

// A missing field never satisfies a condition.
fn conditions_hold(content: &ContentRecord, conditions: &[(&str, bool)]) -> bool {
    conditions
        .iter()
        .all(|(field, expected)| content.bool_field(field) == Some(*expected))
}

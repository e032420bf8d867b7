//! Demo thread store backing the app shell.
//!
//! # Design
//! - One reducer state holds the records and an activity log.
//! - Mutations are pure functions over record slices so they run in native tests.

use crate::core::actions::ActionKind;
use crate::core::content::ContentRecord;
use serde_json::json;
use std::rc::Rc;
use yew::Reducible;

/// Shared state for the demo discussion thread.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThreadStore {
    /// Post followed by its comments, in display order.
    pub records: Vec<ContentRecord>,
    /// Human-readable log of dispatched actions, newest last.
    pub activity: Vec<String>,
}

/// A dispatched action addressed to one record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThreadAction {
    /// Target record id.
    pub id: String,
    /// Action that was dispatched.
    pub action: ActionKind,
}

impl Reducible for ThreadStore {
    type Action = ThreadAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(&action.id, action.action);
        Rc::new(next)
    }
}

impl ThreadStore {
    /// Store seeded with [`demo_thread`].
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            records: demo_thread(),
            activity: Vec::new(),
        }
    }

    /// Apply `action` to the record with `id` and log it.
    pub fn apply(&mut self, id: &str, action: ActionKind) {
        self.records = apply_action(&self.records, id, action);
        self.activity.push(activity_line(id, action));
    }
}

/// Apply a dispatched action to the record with `id`.
///
/// Toggle actions flip the matching boolean field, delete removes the record,
/// and copy-link/edit leave records unchanged.
#[must_use]
pub fn apply_action(
    records: &[ContentRecord],
    id: &str,
    action: ActionKind,
) -> Vec<ContentRecord> {
    match action {
        ActionKind::Delete => records
            .iter()
            .filter(|record| record.id().as_deref() != Some(id))
            .cloned()
            .collect(),
        ActionKind::CopyLink | ActionKind::Edit => records.to_vec(),
        ActionKind::Pin
        | ActionKind::Endorse
        | ActionKind::MarkAnswered
        | ActionKind::Close
        | ActionKind::Report => records
            .iter()
            .map(|record| {
                if record.id().as_deref() == Some(id) {
                    toggle(record, action.wire_name())
                } else {
                    record.clone()
                }
            })
            .collect(),
    }
}

fn toggle(record: &ContentRecord, field: &str) -> ContentRecord {
    let current = record.bool_field(field).unwrap_or(false);
    record.clone().with_field(field, !current)
}

/// Actions the demo registers handlers for. Endorse is left out so its
/// diagnostic path stays reachable from the UI.
pub const DEMO_HANDLED: [ActionKind; 7] = [
    ActionKind::CopyLink,
    ActionKind::Edit,
    ActionKind::Pin,
    ActionKind::MarkAnswered,
    ActionKind::Close,
    ActionKind::Report,
    ActionKind::Delete,
];

/// Comments are locked while any thread in `records` is closed.
#[must_use]
pub fn menu_disabled(records: &[ContentRecord], record: &ContentRecord) -> bool {
    record.str_field("type") == Some("comment")
        && records.iter().any(|candidate| {
            candidate.str_field("type") == Some("thread")
                && candidate.bool_field("closed") == Some(true)
        })
}

/// Activity log line for a dispatched action.
#[must_use]
pub fn activity_line(id: &str, action: ActionKind) -> String {
    format!("{action} on {id}")
}

/// A post with two comments covering author, moderator and read-only permissions.
#[must_use]
pub fn demo_thread() -> Vec<ContentRecord> {
    [
        json!({
            "id": "thread-1",
            "type": "thread",
            "title": "Office hours moved to Thursday",
            "raw_body": "This week's office hours move to Thursday at 3pm.",
            "author": "staff",
            "url": "https://discussions.test/threads/thread-1",
            "editable_fields": ["abuse_flagged", "closed", "pinned", "raw_body"],
            "pinned": false,
            "closed": false,
            "abuse_flagged": false,
            "can_delete": true,
        }),
        json!({
            "id": "comment-1",
            "type": "comment",
            "raw_body": "Will the session be recorded?",
            "author": "learner",
            "editable_fields": ["abuse_flagged", "answered", "endorsed"],
            "endorsed": false,
            "answered": false,
            "abuse_flagged": false,
            "can_delete": false,
        }),
        json!({
            "id": "comment-2",
            "type": "comment",
            "raw_body": "Yes, recordings go up the next morning.",
            "author": "staff",
            "editable_fields": ["abuse_flagged", "raw_body"],
            "abuse_flagged": false,
            "can_delete": true,
        }),
    ]
    .into_iter()
    .filter_map(|value| ContentRecord::from_value(value).ok())
    .collect()
}

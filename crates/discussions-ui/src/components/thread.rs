//! Demo discussion thread with one actions dropdown per record.
//!
//! # Design
//! - Records and activity live in a [`ThreadStore`] reducer.
//! - Handlers mutate the store, so the derived menus change after each action.

use crate::components::actions_dropdown::ActionsDropdown;
use crate::core::content::ContentRecord;
use crate::core::dispatch::ActionHandlers;
use crate::core::store::{DEMO_HANDLED, ThreadAction, ThreadStore, activity_line, menu_disabled};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::logging::log_activity;
use yew::prelude::*;

const BADGES: [(&str, &str, &str); 5] = [
    ("pinned", "thread.pinned", "Pinned"),
    ("closed", "thread.closed", "Closed"),
    ("abuse_flagged", "thread.reported", "Reported"),
    ("endorsed", "thread.endorsed", "Endorsed"),
    ("answered", "thread.answered", "Answered"),
];

#[function_component(ThreadView)]
pub(crate) fn thread_view() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let store = use_reducer(ThreadStore::seeded);
    let dispatch = store.dispatcher();

    html! {
        <section class="flex flex-col gap-3 p-4 max-w-2xl mx-auto">
            <h1 class="text-lg font-semibold">{bundle.text("thread.title", "Discussion")}</h1>
            {for store.records.iter().map(|record| {
                render_record(record, menu_disabled(&store.records, record), &bundle, &dispatch)
            })}
            <aside class="card bg-base-100 p-3">
                <h2 class="text-sm font-semibold">{bundle.text("thread.activity", "Activity")}</h2>
                if store.activity.is_empty() {
                    <p class="text-xs opacity-60">
                        {bundle.text("thread.no_activity", "No actions yet")}
                    </p>
                } else {
                    <ol class="text-xs font-mono">
                        {for store.activity.iter().map(|line| html! { <li>{line.clone()}</li> })}
                    </ol>
                }
            </aside>
        </section>
    }
}

fn render_record(
    record: &ContentRecord,
    disabled: bool,
    bundle: &TranslationBundle,
    dispatch: &UseReducerDispatcher<ThreadStore>,
) -> Html {
    let id = record.id().unwrap_or_default();
    let title = record.str_field("title").map(ToString::to_string);
    let author = record.str_field("author").unwrap_or_default().to_string();
    let body = record.str_field("raw_body").unwrap_or_default().to_string();

    html! {
        <article key={id.clone()} class="card bg-base-100 shadow-sm">
            <div class="card-body p-3 gap-1">
                <header class="flex items-start justify-between gap-2">
                    <div class="flex flex-col">
                        {title
                            .map(|title| html! { <h2 class="font-semibold">{title}</h2> })
                            .unwrap_or_default()}
                        <span class="text-xs opacity-70">{author}</span>
                    </div>
                    <ActionsDropdown
                        content={record.clone()}
                        action_handlers={demo_handlers(&id, dispatch)}
                        disabled={disabled}
                    />
                </header>
                <p class="text-sm">{body}</p>
                <div class="flex gap-1">
                    {for BADGES
                        .iter()
                        .filter(|(field, _, _)| record.bool_field(field) == Some(true))
                        .map(|(_, key, default)| html! {
                            <span class="badge badge-sm">{bundle.text(key, default)}</span>
                        })}
                </div>
            </div>
        </article>
    }
}

fn demo_handlers(id: &str, dispatch: &UseReducerDispatcher<ThreadStore>) -> ActionHandlers {
    DEMO_HANDLED
        .into_iter()
        .map(|action| {
            let id = id.to_string();
            let dispatch = dispatch.clone();
            let handler = Callback::from(move |()| {
                log_activity(&activity_line(&id, action));
                dispatch.dispatch(ThreadAction {
                    id: id.clone(),
                    action,
                });
            });
            (action, handler)
        })
        .collect()
}

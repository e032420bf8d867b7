//! App shell mounting the demo discussion thread.

use crate::components::thread::ThreadView;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};
use gloo::utils::window;
use yew::prelude::*;

#[function_component(DiscussionsApp)]
fn discussions_app() -> Html {
    let bundle = use_memo(|_| TranslationBundle::new(detect_locale()), ());
    let dir = if bundle.rtl() { "rtl" } else { "ltr" };

    html! {
        <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
            <main dir={dir} class="min-h-screen bg-base-200">
                <ThreadView />
            </main>
        </ContextProvider<TranslationBundle>>
    }
}

fn detect_locale() -> LocaleCode {
    window()
        .navigator()
        .language()
        .as_deref()
        .and_then(LocaleCode::from_lang_tag)
        .unwrap_or(DEFAULT_LOCALE)
}

/// Mount the demo application on `#root`, or on the body when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<DiscussionsApp>::with_root(root).render();
    } else {
        yew::Renderer::<DiscussionsApp>::new().render();
    }
}

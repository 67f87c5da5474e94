use dioxus::prelude::*;

use crate::common::{storage::SearchStorage, style, suggestions::SuggestionList};
use crate::gallery::state::GalleryEvent;

// SearchHeader
//
// the query box with its suggestion panel.  submissions go through the
// gallery event coroutine, so this component never talks to the fetch
// machinery directly and the input text survives every submit
#[derive(Clone, PartialEq, Props)]
pub struct SearchHeaderProps {
    suggestion_signal: Signal<SuggestionList>,
    sticky_signal: Signal<bool>,
    #[props(default)]
    notice: String,
}

#[component]
pub fn SearchHeader(props: SearchHeaderProps) -> Element {
    let suggestion_signal = props.suggestion_signal;
    let sticky_signal = props.sticky_signal;
    let notice = props.notice.clone();

    let events = use_coroutine_handle::<GalleryEvent>();

    let mut draft_signal = use_signal(|| String::new());
    let mut show_suggestions_signal = use_signal(|| false);

    let header_class = if sticky_signal() {
        "gallery-header sticky"
    } else {
        "gallery-header"
    };

    rsx! {
        div {
            style { "{style::HEADER}" }
            div { class: "{header_class}",
                form {
                    onsubmit: move |_| {
                        show_suggestions_signal.set(false);
                        events.send(GalleryEvent::QuerySubmitted(draft_signal()));
                    },
                    input {
                        r#type: "text",
                        placeholder: "search for images",
                        value: "{draft_signal}",
                        oninput: move |evt| draft_signal.set(evt.value().clone()),
                        onfocus: move |_| show_suggestions_signal.set(true),
                    }
                    input { r#type: "submit", value: "Search" }
                }
                if !notice.is_empty() {
                    span { "{notice}" }
                }
            }
            if show_suggestions_signal() && !suggestion_signal.read().is_empty() {
                SuggestionPanel {
                    suggestion_signal,
                    draft_signal,
                    show_suggestions_signal,
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct SuggestionPanelProps {
    suggestion_signal: Signal<SuggestionList>,
    draft_signal: Signal<String>,
    show_suggestions_signal: Signal<bool>,
}

#[component]
fn SuggestionPanel(props: SuggestionPanelProps) -> Element {
    let mut suggestion_signal = props.suggestion_signal;
    let draft_signal = props.draft_signal;
    let mut show_suggestions_signal = props.show_suggestions_signal;

    // refiltered on every keystroke via the draft signal subscription
    let matches = suggestion_signal.read().filtered(&draft_signal());

    rsx! {
        div {
            style { "{style::SUGGESTIONS}" }
            div { class: "suggestions",
                h3 { "Recent Searches" }
                ul {
                    for query in matches {
                        SuggestionRow { query, draft_signal, show_suggestions_signal }
                    }
                }
                button { onclick: move |_| show_suggestions_signal.set(false), "Close" }
                button {
                    onclick: move |_| {
                        suggestion_signal.with_mut(|list| {
                            list.clear();
                            list.store();
                        });
                    },
                    "Clear History"
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct SuggestionRowProps {
    query: String,
    draft_signal: Signal<String>,
    show_suggestions_signal: Signal<bool>,
}

// picking a suggestion fills the input and immediately resubmits it
#[component]
fn SuggestionRow(props: SuggestionRowProps) -> Element {
    let query = props.query;
    let mut draft_signal = props.draft_signal;
    let mut show_suggestions_signal = props.show_suggestions_signal;

    let events = use_coroutine_handle::<GalleryEvent>();

    let label = query.clone();

    rsx! {
        li {
            onclick: move |_| {
                draft_signal.set(query.clone());
                show_suggestions_signal.set(false);
                events.send(GalleryEvent::QuerySubmitted(query.clone()));
            },
            "{label}"
        }
    }
}

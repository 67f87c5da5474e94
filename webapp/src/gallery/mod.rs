use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::{StreamExt, select, stream::FuturesUnordered};
use gloo_timers::callback::Timeout;
use tracing::{debug, error};

use crate::common::{modal::ModalBox, storage::SearchStorage, style, suggestions::SuggestionList};
use crate::components::search_bar::SearchHeader;
use api::photo::{FetchPhotosReq, fetch_photos};

pub mod grid;
use grid::PhotoGrid;

pub mod scroll;

pub mod state;
use state::{GalleryCommand, GalleryEvent, GalleryState, Phase};

// Gallery elements
//
// the endless feed of photo tiles with the search header above it and the
// preview modal on top.  all state transitions run through the event
// coroutine below, the components only ever send events into it
#[component]
pub fn Gallery() -> Element {
    let mut state_signal = use_signal(GalleryState::new);
    let mut suggestion_signal = use_signal(SuggestionList::fetch);
    let mut sticky_signal = use_signal(|| false);
    let notice_signal = use_signal(|| String::new());

    // the single consumer of gallery events
    //
    // in-flight fetches live in the unordered set so that scroll and submit
    // events keep flowing while a page is on the wire, and each completion
    // comes back around as another event
    let events = use_coroutine(move |mut rx: UnboundedReceiver<GalleryEvent>| async move {
        let mut inflight = FuturesUnordered::new();

        loop {
            let event = select! {
                event = rx.next() => match event {
                    Some(event) => event,
                    None => break,
                },
                event = inflight.select_next_some() => event,
            };

            for command in state_signal.write().apply(event) {
                match command {
                    GalleryCommand::Fetch {
                        generation,
                        page,
                        query,
                    } => {
                        inflight.push(run_fetch(generation, page, query, notice_signal));
                    }
                    GalleryCommand::SaveSuggestion(query) => {
                        suggestion_signal.with_mut(|list| {
                            list.push(&query);
                            list.store();
                        });
                    }
                }
            }
        }
    });

    use_future(move || async move {
        events.send(GalleryEvent::Mounted);
    });

    // the listener handle lives in the hook so scrolling detaches on unmount
    use_hook(|| {
        Rc::new(scroll::on_scroll(move |metrics| {
            let at_bottom = metrics.at_bottom();

            if *sticky_signal.peek() != at_bottom {
                sticky_signal.set(at_bottom);
            }

            if metrics.near_bottom() {
                events.send(GalleryEvent::NearBottom);
            }
        }))
    });

    let state = state_signal.read();

    rsx! {
        div {
            style { "{style::LOADING}" }
            SearchHeader {
                suggestion_signal,
                sticky_signal,
                notice: notice_signal(),
            }
            ModalBox {}
            PhotoGrid { photos: state.photos.clone() }
            if state.phase() != Phase::Idle {
                div { class: "loading",
                    div { class: "loading-spinner" }
                }
            }
        }
    }
}

async fn run_fetch(
    generation: u64,
    page: u32,
    query: String,
    notice_signal: Signal<String>,
) -> GalleryEvent {
    debug!("fetching page {page} for query \"{query}\"");

    let result = fetch_photos(&FetchPhotosReq { text: query, page })
        .await
        .map_err(|err| err.to_string());

    if let Err(err) = &result {
        error!("failed to fetch photos: {err}");
        show_notice(notice_signal, format!("Error fetching photos: {err}"));
    }

    GalleryEvent::FetchFinished { generation, result }
}

fn show_notice(mut notice_signal: Signal<String>, message: String) {
    notice_signal.set(message);

    let task = Timeout::new(4_000, move || notice_signal.set(String::new()));
    task.forget();
}

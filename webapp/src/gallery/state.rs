use api::photo::PhotoDescriptor;

// structs and types

// the feed lifecycle as seen by the view, projected from the flags so it can
// never drift out of sync with them
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Idle,
    Fetching,
    AwaitingMore,
}

// GalleryState
//
// the whole feed lives in one struct driven by apply(), which takes an event
// and returns the i/o commands for the caller to execute.  transitions are
// synchronous and never touch the browser, so at most one fetch is in flight
// at a time and the page counter only ever moves forward
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryState {
    pub page: u32,
    pub query: String,
    pub photos: Vec<PhotoDescriptor>,
    pub loading: bool,
    pub more_requested: bool,
    mounted: bool,
    generation: u64,
}

impl Default for GalleryState {
    fn default() -> Self {
        GalleryState {
            page: 1,
            query: String::new(),
            photos: Vec::new(),
            loading: false,
            more_requested: false,
            mounted: false,
            generation: 0,
        }
    }
}

// events

#[derive(Clone, Debug, PartialEq)]
pub enum GalleryEvent {
    Mounted,
    QuerySubmitted(String),
    NearBottom,
    FetchFinished {
        generation: u64,
        result: Result<Vec<PhotoDescriptor>, String>,
    },
}

// commands

#[derive(Clone, Debug, PartialEq)]
pub enum GalleryCommand {
    Fetch {
        generation: u64,
        page: u32,
        query: String,
    },
    SaveSuggestion(String),
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.more_requested {
            Phase::AwaitingMore
        } else if self.loading {
            Phase::Fetching
        } else {
            Phase::Idle
        }
    }

    pub fn apply(&mut self, event: GalleryEvent) -> Vec<GalleryCommand> {
        match event {
            // the view can remount without tearing down the state, so only
            // the first mount starts the initial fetch
            GalleryEvent::Mounted => {
                if self.mounted {
                    return Vec::new();
                }

                self.mounted = true;
                vec![self.begin_fetch()]
            }

            // a submission always lands in the history, but it only starts a
            // fetch when nothing is in flight
            GalleryEvent::QuerySubmitted(query) => {
                if query.is_empty() {
                    return Vec::new();
                }

                let mut commands = vec![GalleryCommand::SaveSuggestion(query.clone())];

                if !self.loading {
                    self.query = query;
                    self.page = 1;
                    commands.push(self.begin_fetch());
                }

                commands
            }

            // scrolling during a fetch parks the request in more_requested,
            // which completion drops rather than queues
            GalleryEvent::NearBottom => {
                if !self.mounted {
                    return Vec::new();
                }

                if self.loading {
                    self.more_requested = true;
                    return Vec::new();
                }

                self.page += 1;
                vec![self.begin_fetch()]
            }

            // completions carry the generation of the fetch that produced
            // them, anything else is stale and ignored outright
            GalleryEvent::FetchFinished { generation, result } => {
                if generation != self.generation {
                    return Vec::new();
                }

                self.loading = false;
                self.more_requested = false;

                if let Ok(batch) = result {
                    if self.page == 1 {
                        self.photos = batch;
                    } else {
                        self.photos.extend(batch);
                    }
                }

                Vec::new()
            }
        }
    }

    fn begin_fetch(&mut self) -> GalleryCommand {
        self.generation += 1;
        self.loading = true;

        GalleryCommand::Fetch {
            generation: self.generation,
            page: self.page,
            query: self.query.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(ids: &[&str]) -> Vec<PhotoDescriptor> {
        ids.iter()
            .map(|id| PhotoDescriptor {
                id: String::from(*id),
                server: String::from("65535"),
                secret: String::from("abc123"),
                title: String::new(),
            })
            .collect()
    }

    fn page_batch(prefix: &str, count: usize) -> Vec<PhotoDescriptor> {
        (0..count)
            .map(|n| PhotoDescriptor {
                id: format!("{prefix}{n}"),
                server: String::from("65535"),
                secret: String::from("abc123"),
                title: String::new(),
            })
            .collect()
    }

    // pull the lone fetch command out of a command list
    fn fetch_of(commands: &[GalleryCommand]) -> (u64, u32, String) {
        let fetches: Vec<_> = commands
            .iter()
            .filter_map(|command| match command {
                GalleryCommand::Fetch {
                    generation,
                    page,
                    query,
                } => Some((*generation, *page, query.clone())),
                _ => None,
            })
            .collect();

        assert_eq!(fetches.len(), 1, "expected exactly one fetch command");
        fetches[0].clone()
    }

    fn finish(state: &mut GalleryState, generation: u64, batch: Vec<PhotoDescriptor>) {
        let commands = state.apply(GalleryEvent::FetchFinished {
            generation,
            result: Ok(batch),
        });

        assert!(commands.is_empty());
    }

    #[test]
    fn mount_fetches_the_first_page() {
        let mut state = GalleryState::new();

        let commands = state.apply(GalleryEvent::Mounted);

        let (_, page, query) = fetch_of(&commands);
        assert_eq!(page, 1);
        assert_eq!(query, "");
        assert_eq!(state.phase(), Phase::Fetching);
    }

    #[test]
    fn mount_is_idempotent() {
        let mut state = GalleryState::new();

        let commands = state.apply(GalleryEvent::Mounted);
        let (generation, _, _) = fetch_of(&commands);

        assert!(state.apply(GalleryEvent::Mounted).is_empty());

        // the first fetch still lands after the repeat mount
        finish(&mut state, generation, batch(&["a"]));
        assert_eq!(state.photos.len(), 1);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn scroll_before_mount_is_ignored() {
        let mut state = GalleryState::new();

        assert!(state.apply(GalleryEvent::NearBottom).is_empty());
        assert_eq!(state.page, 1);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn empty_submit_is_ignored() {
        let mut state = GalleryState::new();
        let (generation, _, _) = fetch_of(&state.apply(GalleryEvent::Mounted));
        finish(&mut state, generation, batch(&["a"]));

        assert!(
            state
                .apply(GalleryEvent::QuerySubmitted(String::new()))
                .is_empty()
        );
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn submit_replaces_the_feed_at_page_one() {
        let mut state = GalleryState::new();
        let (generation, _, _) = fetch_of(&state.apply(GalleryEvent::Mounted));
        finish(&mut state, generation, batch(&["recent1", "recent2"]));

        let commands = state.apply(GalleryEvent::QuerySubmitted(String::from("cats")));

        assert_eq!(
            commands[0],
            GalleryCommand::SaveSuggestion(String::from("cats"))
        );
        let (generation, page, query) = fetch_of(&commands);
        assert_eq!(page, 1);
        assert_eq!(query, "cats");

        finish(&mut state, generation, batch(&["cat1"]));
        assert_eq!(state.photos, batch(&["cat1"]));
    }

    #[test]
    fn submit_while_loading_saves_without_fetching() {
        let mut state = GalleryState::new();
        let (generation, _, _) = fetch_of(&state.apply(GalleryEvent::Mounted));

        let commands = state.apply(GalleryEvent::QuerySubmitted(String::from("cats")));

        assert_eq!(
            commands,
            vec![GalleryCommand::SaveSuggestion(String::from("cats"))]
        );
        assert_eq!(state.query, "");
        assert_eq!(state.page, 1);

        // the in-flight fetch is unaffected
        finish(&mut state, generation, batch(&["recent1"]));
        assert_eq!(state.photos, batch(&["recent1"]));
    }

    #[test]
    fn repeat_submit_refetches_page_one() {
        let mut state = GalleryState::new();
        let (generation, _, _) = fetch_of(&state.apply(GalleryEvent::Mounted));
        finish(&mut state, generation, batch(&["recent1"]));

        let commands = state.apply(GalleryEvent::QuerySubmitted(String::from("cats")));
        let (generation, _, _) = fetch_of(&commands);
        finish(&mut state, generation, batch(&["cat1"]));

        let commands = state.apply(GalleryEvent::QuerySubmitted(String::from("cats")));

        let (_, page, query) = fetch_of(&commands);
        assert_eq!(page, 1);
        assert_eq!(query, "cats");
    }

    #[test]
    fn scroll_advances_one_page_at_a_time() {
        let mut state = GalleryState::new();
        let (generation, _, _) = fetch_of(&state.apply(GalleryEvent::Mounted));
        finish(&mut state, generation, batch(&["a"]));

        let (generation, page, _) = fetch_of(&state.apply(GalleryEvent::NearBottom));
        assert_eq!(page, 2);
        finish(&mut state, generation, batch(&["b"]));

        let (_, page, _) = fetch_of(&state.apply(GalleryEvent::NearBottom));
        assert_eq!(page, 3);
    }

    #[test]
    fn appended_pages_extend_the_feed() {
        let mut state = GalleryState::new();
        let (generation, _, _) = fetch_of(&state.apply(GalleryEvent::Mounted));
        finish(&mut state, generation, page_batch("first", 20));

        let (generation, _, _) = fetch_of(&state.apply(GalleryEvent::NearBottom));
        finish(&mut state, generation, page_batch("second", 20));

        assert_eq!(state.photos.len(), 40);
        assert_eq!(state.photos[0].id, "first0");
        assert_eq!(state.photos[20].id, "second0");
    }

    #[test]
    fn scroll_while_loading_is_dropped_at_completion() {
        let mut state = GalleryState::new();
        let (generation, _, _) = fetch_of(&state.apply(GalleryEvent::Mounted));
        finish(&mut state, generation, batch(&["a"]));

        let (generation, _, _) = fetch_of(&state.apply(GalleryEvent::NearBottom));

        assert!(state.apply(GalleryEvent::NearBottom).is_empty());
        assert_eq!(state.phase(), Phase::AwaitingMore);

        // completion drops the parked request instead of queuing another fetch
        finish(&mut state, generation, batch(&["b"]));
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.page, 2);

        // a fresh scroll afterwards still works
        let (_, page, _) = fetch_of(&state.apply(GalleryEvent::NearBottom));
        assert_eq!(page, 3);
    }

    #[test]
    fn failed_fetch_keeps_the_feed() {
        let mut state = GalleryState::new();
        let (generation, _, _) = fetch_of(&state.apply(GalleryEvent::Mounted));
        finish(&mut state, generation, batch(&["a"]));

        let (generation, _, _) = fetch_of(&state.apply(GalleryEvent::NearBottom));

        let commands = state.apply(GalleryEvent::FetchFinished {
            generation,
            result: Err(String::from("boom")),
        });

        assert!(commands.is_empty());
        assert_eq!(state.photos, batch(&["a"]));
        assert_eq!(state.phase(), Phase::Idle);

        // scrolling again retries with a fresh page
        let (_, page, _) = fetch_of(&state.apply(GalleryEvent::NearBottom));
        assert_eq!(page, 3);
    }

    #[test]
    fn stale_completion_is_dropped() {
        let mut state = GalleryState::new();
        let (first, _, _) = fetch_of(&state.apply(GalleryEvent::Mounted));
        finish(&mut state, first, batch(&["a"]));

        let (second, _, _) = fetch_of(&state.apply(GalleryEvent::NearBottom));

        // a duplicate completion from the first fetch changes nothing
        assert!(
            state
                .apply(GalleryEvent::FetchFinished {
                    generation: first,
                    result: Ok(batch(&["z"])),
                })
                .is_empty()
        );
        assert_eq!(state.photos, batch(&["a"]));
        assert_eq!(state.phase(), Phase::Fetching);

        finish(&mut state, second, batch(&["b"]));
        assert_eq!(state.photos, batch(&["a", "b"]));
    }

    #[test]
    fn phase_projects_the_flags() {
        let mut state = GalleryState::new();
        assert_eq!(state.phase(), Phase::Idle);

        let (generation, _, _) = fetch_of(&state.apply(GalleryEvent::Mounted));
        assert_eq!(state.phase(), Phase::Fetching);

        state.apply(GalleryEvent::NearBottom);
        assert_eq!(state.phase(), Phase::AwaitingMore);

        finish(&mut state, generation, batch(&["a"]));
        assert_eq!(state.phase(), Phase::Idle);
    }
}

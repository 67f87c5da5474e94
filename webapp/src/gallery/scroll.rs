use gloo_events::EventListener;
use web_sys::Window;

// how close to the bottom of the document counts as "near", in css pixels
pub const NEAR_BOTTOM_PX: f64 = 2.0;

// one sample of the window scroll geometry
//
// the checks live here rather than in the listener so they work on plain
// numbers, the browser only supplies the sample
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub viewport: f64,
    pub offset: f64,
    pub content: f64,
}

impl ScrollMetrics {
    pub fn near_bottom(&self) -> bool {
        self.viewport + self.offset >= self.content - NEAR_BOTTOM_PX
    }

    pub fn at_bottom(&self) -> bool {
        self.viewport + self.offset >= self.content
    }

    fn read(window: &Window) -> Option<ScrollMetrics> {
        let viewport = window.inner_height().ok()?.as_f64()?;
        let offset = window.scroll_y().ok()?;
        let content = f64::from(window.document()?.document_element()?.scroll_height());

        Some(ScrollMetrics {
            viewport,
            offset,
            content,
        })
    }
}

// attach a window scroll listener, dropping the handle detaches it
pub fn on_scroll(mut callback: impl FnMut(ScrollMetrics) + 'static) -> Option<EventListener> {
    let window = web_sys::window()?;
    let target = window.clone();

    Some(EventListener::new(&target, "scroll", move |_| {
        if let Some(metrics) = ScrollMetrics::read(&window) {
            callback(metrics);
        }
    }))
}

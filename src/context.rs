//! Session context for the Folio desktop shell.
//!
//! One [`UiSession`] lives for the whole window. Components read the
//! document through it and route every interaction back into it.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let page = use_page();
//! let session = page.session.read();
//! let hidden = session.document().is_hidden(node);
//!
//! // In event handlers
//! onclick: move |evt| {
//!     evt.stop_propagation();
//!     page.route(|s| s.click(node));
//! }
//! ```

use std::time::Instant;

use dioxus::prelude::*;
use folio_core::UiSession;

use crate::host::DesktopHost;

pub type DesktopSession = UiSession<DesktopHost>;

/// Handle to the page session plus the wall-clock origin of its timer
/// clock.
#[derive(Clone, Copy, PartialEq)]
pub struct PageHandle {
    pub session: Signal<DesktopSession>,
    origin: Instant,
}

impl PageHandle {
    pub fn new(session: Signal<DesktopSession>, origin: Instant) -> Self {
        Self { session, origin }
    }

    /// Bring the session clock up to wall time, run `f`, then carry out any
    /// scrolls it requested.
    pub fn route<R>(mut self, f: impl FnOnce(&mut DesktopSession) -> R) -> R {
        let now = self.origin.elapsed();
        let (result, scrolls) = {
            let mut session = self.session.write();
            session.advance_to(now);
            let result = f(&mut session);
            (result, session.host_mut().take_scrolls())
        };

        for request in scrolls {
            tracing::debug!(element = %request.element_id, "Scrolling into view");
            let eval = document::eval(&scroll_script(&request.element_id));
            spawn(async move {
                if let Err(err) = eval.await {
                    tracing::warn!(?err, "scrollIntoView failed");
                }
            });
        }
        result
    }

    /// Fire any timers that came due. Writes to the session only when one
    /// did, so idle ticks do not re-render.
    pub fn tick(mut self) {
        let now = self.origin.elapsed();
        let due = self
            .session
            .peek()
            .next_timer_deadline()
            .is_some_and(|deadline| deadline < now);
        if due {
            self.session.write().advance_to(now);
        }
    }
}

/// Script that smooth-scrolls the element with `element_id` to the top of
/// the viewport. A missing element is a no-op.
fn scroll_script(element_id: &str) -> String {
    format!(
        "document.getElementById({element_id:?})?.scrollIntoView({{ behavior: 'smooth', block: 'start' }});"
    )
}

/// Hook to access the page session from context.
pub fn use_page() -> PageHandle {
    use_context::<PageHandle>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_script_quotes_element_id() {
        let js = scroll_script("skills");
        assert!(js.starts_with("document.getElementById(\"skills\")?."));
        assert!(js.contains("behavior: 'smooth', block: 'start'"));

        let js = scroll_script("a\"b");
        assert!(js.contains("getElementById(\"a\\\"b\")"));
    }
}

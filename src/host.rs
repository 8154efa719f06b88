//! Desktop implementation of the page's host side effects.

use folio_core::{Host, ScrollRequest};
use rfd::{MessageButtons, MessageDialog, MessageLevel};

/// Host backed by native dialogs.
///
/// Scroll requests are queued rather than executed because they are
/// raised while the session is borrowed; [`crate::context::PageHandle`]
/// drains them once the borrow ends.
#[derive(Debug, Default)]
pub struct DesktopHost {
    pending_scrolls: Vec<ScrollRequest>,
}

impl DesktopHost {
    pub fn take_scrolls(&mut self) -> Vec<ScrollRequest> {
        std::mem::take(&mut self.pending_scrolls)
    }
}

impl Host for DesktopHost {
    fn alert(&mut self, message: &str) {
        // Blocks the UI thread until dismissed, like a browser alert
        MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title("Folio")
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn scroll_into_view(&mut self, request: ScrollRequest) {
        self.pending_scrolls.push(request);
    }
}

//! Host boundary: the side effects a page script asks of its browser.

use chrono::Datelike;
use serde::Serialize;

use crate::dom::NodeId;

/// A request to smoothly scroll an element to the top of the viewport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrollRequest {
    pub node: NodeId,
    pub element_id: String,
}

/// Side effects the controllers need from the environment.
pub trait Host {
    /// Show `message` and block until the user acknowledges it.
    fn alert(&mut self, message: &str);

    /// Smoothly scroll the element into view, aligned to the top.
    fn scroll_into_view(&mut self, request: ScrollRequest);

    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// Host that records every request instead of acting on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingHost {
    pub alerts: Vec<String>,
    pub scrolls: Vec<ScrollRequest>,
    year: Option<i32>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the year reported to the page.
    pub fn with_year(year: i32) -> Self {
        Self {
            year: Some(year),
            ..Self::default()
        }
    }

    pub fn last_scroll(&self) -> Option<&ScrollRequest> {
        self.scrolls.last()
    }
}

impl Host for RecordingHost {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn scroll_into_view(&mut self, request: ScrollRequest) {
        self.scrolls.push(request);
    }

    fn current_year(&self) -> i32 {
        self.year
            .unwrap_or_else(|| chrono::Local::now().year())
    }
}

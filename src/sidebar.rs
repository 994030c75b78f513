// src/sidebar.rs
// Sidebar summary list rendering.

use crate::datefmt::format_event_date;
use crate::error::OverlayError;
use crate::model::NewsSummary;
use crate::page::{PageHandle, SidebarEntry};

pub struct SidebarListRenderer {
    page: PageHandle,
}

impl SidebarListRenderer {
    pub fn new(page: PageHandle) -> Self {
        Self { page }
    }

    /// Replace the sidebar's content with one entry per summary, in input
    /// order. No diffing: prior entries are dropped wholesale. Each entry
    /// keeps its `id` so a click can dispatch into the detail pipeline.
    pub fn render(&self, items: &[NewsSummary]) -> Result<(), OverlayError> {
        let entries: Vec<SidebarEntry> = items
            .iter()
            .map(|it| SidebarEntry {
                news_id: it.id.clone(),
                label: it.event_summary.clone(),
                date_text: format_event_date(&it.date),
            })
            .collect();

        self.page.with_sidebar(|sidebar| {
            sidebar.entries = entries;
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, label: &str) -> NewsSummary {
        NewsSummary {
            id: id.into(),
            event_summary: label.into(),
            date: "2025-01-01T10:00:00Z".into(),
        }
    }

    #[test]
    fn render_replaces_prior_entries() {
        let page = PageHandle::new();
        let r = SidebarListRenderer::new(page.clone());

        r.render(&[summary("a", "X"), summary("b", "Y")]).unwrap();
        r.render(&[summary("c", "Z")]).unwrap();

        let sidebar = page.sidebar_snapshot().unwrap();
        assert_eq!(sidebar.entries.len(), 1);
        assert_eq!(sidebar.entries[0].news_id, "c");
        assert_eq!(sidebar.entries[0].label, "Z");
        assert_eq!(sidebar.entries[0].date_text, "2025/01/01 10:00");
    }

    #[test]
    fn missing_sidebar_is_an_error_not_a_panic() {
        let page = PageHandle::without_sidebar();
        let r = SidebarListRenderer::new(page);
        let err = r.render(&[summary("a", "X")]).unwrap_err();
        assert!(matches!(err, OverlayError::MissingElement { .. }));
    }
}

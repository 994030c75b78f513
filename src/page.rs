// src/page.rs
// Injected host-page state. The core never creates the overlay or sidebar
// containers; the embedder supplies them (or not) through a `PageHandle`,
// and every accessor degrades to `MissingElement` when a region is absent.

use std::sync::{Arc, RwLock};

use crate::error::OverlayError;

/// One rendered line in the overlay's link list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkLine {
    Link { label: String, href: String },
    /// Shown when the record carries no usable link list.
    Placeholder,
}

/// Header region of the detail overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayHeader {
    pub title: String,
    pub date_text: String,
    pub score_text: String,
}

/// The single detail overlay container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayRegion {
    pub visible: bool,
    pub header: OverlayHeader,
    /// Pre-formatted detail body, embedded verbatim.
    pub body: String,
    pub link_lines: Vec<LinkLine>,
    /// Internal content scroll offset, reset after the close transition.
    pub content_scroll: u32,
}

/// One sidebar entry; `news_id` is retained for click dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub news_id: String,
    pub label: String,
    pub date_text: String,
}

/// The sidebar container. Re-rendering replaces `entries` wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarRegion {
    pub entries: Vec<SidebarEntry>,
}

/// An inline reference marker found in page content, carrying the id of the
/// news item it points at. `bindings` counts attached click handlers; the
/// binder keeps it at most 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceMarker {
    pub news_id: String,
    pub bindings: u8,
}

impl ReferenceMarker {
    pub fn new(news_id: impl Into<String>) -> Self {
        Self {
            news_id: news_id.into(),
            bindings: 0,
        }
    }
}

#[derive(Debug, Default)]
struct Page {
    overlay: Option<OverlayRegion>,
    sidebar: Option<SidebarRegion>,
    markers: Vec<ReferenceMarker>,
    /// Page-level overflow lock: true while the overlay is open.
    scroll_locked: bool,
}

/// Cloneable handle over the shared page state.
#[derive(Clone)]
pub struct PageHandle {
    inner: Arc<RwLock<Page>>,
}

impl PageHandle {
    /// A page with both containers present (the normal embedding).
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Page {
                overlay: Some(OverlayRegion::default()),
                sidebar: Some(SidebarRegion::default()),
                markers: Vec::new(),
                scroll_locked: false,
            })),
        }
    }

    /// A page whose overlay container is missing — the core must degrade to
    /// logged no-ops against it.
    pub fn without_overlay() -> Self {
        let h = Self::new();
        if let Ok(mut page) = h.inner.write() {
            page.overlay = None;
        }
        h
    }

    /// A page whose sidebar container is missing.
    pub fn without_sidebar() -> Self {
        let h = Self::new();
        if let Ok(mut page) = h.inner.write() {
            page.sidebar = None;
        }
        h
    }

    /// Append a reference marker, as if fresh content mentioning a news item
    /// had been inserted into the page.
    pub fn push_marker(&self, news_id: impl Into<String>) {
        if let Ok(mut page) = self.inner.write() {
            page.markers.push(ReferenceMarker::new(news_id));
        }
    }

    pub fn with_overlay<R>(
        &self,
        f: impl FnOnce(&mut OverlayRegion) -> R,
    ) -> Result<R, OverlayError> {
        let mut page = self
            .inner
            .write()
            .map_err(|_| OverlayError::MissingElement { what: "page" })?;
        match page.overlay.as_mut() {
            Some(overlay) => Ok(f(overlay)),
            None => Err(OverlayError::MissingElement { what: "overlay" }),
        }
    }

    pub fn with_sidebar<R>(
        &self,
        f: impl FnOnce(&mut SidebarRegion) -> R,
    ) -> Result<R, OverlayError> {
        let mut page = self
            .inner
            .write()
            .map_err(|_| OverlayError::MissingElement { what: "page" })?;
        match page.sidebar.as_mut() {
            Some(sidebar) => Ok(f(sidebar)),
            None => Err(OverlayError::MissingElement { what: "sidebar" }),
        }
    }

    pub fn with_markers<R>(&self, f: impl FnOnce(&mut Vec<ReferenceMarker>) -> R) -> Option<R> {
        self.inner.write().ok().map(|mut page| f(&mut page.markers))
    }

    pub fn set_scroll_locked(&self, locked: bool) {
        if let Ok(mut page) = self.inner.write() {
            page.scroll_locked = locked;
        }
    }

    pub fn scroll_locked(&self) -> bool {
        self.inner.read().map(|p| p.scroll_locked).unwrap_or(false)
    }

    /// Snapshot of the overlay region, if present. Read-only view for
    /// embedders and tests.
    pub fn overlay_snapshot(&self) -> Option<OverlayRegion> {
        self.inner.read().ok().and_then(|p| p.overlay.clone())
    }

    pub fn sidebar_snapshot(&self) -> Option<SidebarRegion> {
        self.inner.read().ok().and_then(|p| p.sidebar.clone())
    }

    pub fn marker_snapshot(&self) -> Vec<ReferenceMarker> {
        self.inner
            .read()
            .map(|p| p.markers.clone())
            .unwrap_or_default()
    }
}

impl Default for PageHandle {
    fn default() -> Self {
        Self::new()
    }
}

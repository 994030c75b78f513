// src/overlay.rs
// Pipeline wiring: user action → fetch → render → open.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use metrics::counter;
use tracing::{debug, warn};

use crate::fetch::DetailSource;
use crate::modal::ModalController;
use crate::model::NewsSummary;
use crate::page::PageHandle;
use crate::refs::EventReferenceBinder;
use crate::render::NewsDetailRenderer;
use crate::scheduler::FrameScheduler;
use crate::sidebar::SidebarListRenderer;

/// The assembled news-detail overlay: one per page.
///
/// Every open re-fetches; there is no client cache. Concurrent opens race to
/// the single overlay region, so each fetch carries a sequence token and
/// only the latest issued request may apply its response ("last request
/// wins") — a stale response is discarded with a debug log.
pub struct NewsOverlay {
    page: PageHandle,
    source: Arc<dyn DetailSource>,
    renderer: NewsDetailRenderer,
    sidebar: SidebarListRenderer,
    binder: EventReferenceBinder,
    modal: ModalController,
    seq: AtomicU64,
}

impl NewsOverlay {
    pub fn new(
        page: PageHandle,
        source: Arc<dyn DetailSource>,
        scheduler: Arc<dyn FrameScheduler>,
    ) -> Self {
        Self {
            renderer: NewsDetailRenderer::new(page.clone()),
            sidebar: SidebarListRenderer::new(page.clone()),
            binder: EventReferenceBinder::new(page.clone()),
            modal: ModalController::new(page.clone(), scheduler),
            page,
            source,
            seq: AtomicU64::new(0),
        }
    }

    pub fn page(&self) -> &PageHandle {
        &self.page
    }

    /// Fetch `id` and, on success, render it and open the overlay.
    ///
    /// Failure policy is silent degradation: the error is logged and the
    /// overlay keeps whatever state it had before the click. No retries,
    /// no error surface.
    pub async fn open_detail(&self, id: &str) {
        let token = self.seq.fetch_add(1, Ordering::SeqCst) + 1;

        match self.source.fetch_detail(id).await {
            Ok(item) => {
                if self.seq.load(Ordering::SeqCst) != token {
                    counter!("news_detail_stale_responses_total").increment(1);
                    debug!(id, token, "discarding stale detail response");
                    return;
                }
                if let Err(e) = self.renderer.render(&item) {
                    warn!(%e, id, "detail render dropped");
                    return;
                }
                self.modal.open();
            }
            Err(e) => {
                warn!(%e, id, "news detail fetch failed; overlay unchanged");
            }
        }
    }

    /// Click on the sidebar entry at `index`. Out-of-range is a no-op.
    pub async fn click_sidebar(&self, index: usize) {
        let id = self
            .page
            .sidebar_snapshot()
            .and_then(|s| s.entries.get(index).map(|e| e.news_id.clone()));
        match id {
            Some(id) => self.open_detail(&id).await,
            None => debug!(index, "sidebar click out of range"),
        }
    }

    /// Click on the reference marker at `index`. Dispatches only if the
    /// binder has attached a handler to that marker.
    pub async fn click_reference(&self, index: usize) {
        let marker = self.page.marker_snapshot().into_iter().nth(index);
        match marker {
            Some(m) if m.bindings > 0 => self.open_detail(&m.news_id).await,
            Some(_) => debug!(index, "reference marker not bound; click ignored"),
            None => debug!(index, "reference click out of range"),
        }
    }

    pub fn close(&self) {
        self.modal.close();
    }

    pub fn render_sidebar(&self, items: &[NewsSummary]) {
        if let Err(e) = self.sidebar.render(items) {
            warn!(%e, "sidebar render dropped");
        }
    }

    /// Re-scan the page for unbound reference markers. Safe after any
    /// content change; already-bound markers are untouched.
    pub fn bind_references(&self) -> usize {
        self.binder.bind()
    }
}

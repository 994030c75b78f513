// src/modal.rs
// Overlay visibility and page scroll lock.

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::page::PageHandle;
use crate::scheduler::FrameScheduler;

/// Must match the embedding's overlay transition duration. Changing one
/// requires changing the other.
pub const OVERLAY_TRANSITION: Duration = Duration::from_millis(300);

pub struct ModalController {
    page: PageHandle,
    scheduler: Arc<dyn FrameScheduler>,
}

impl ModalController {
    pub fn new(page: PageHandle, scheduler: Arc<dyn FrameScheduler>) -> Self {
        Self { page, scheduler }
    }

    /// Lock page scroll now; flip the overlay visible on the next frame, so
    /// the renderer's mutations are committed before the transition starts.
    /// Idempotent; a missing overlay container is a logged no-op.
    pub fn open(&self) {
        if self.page.overlay_snapshot().is_none() {
            warn!("modal open: overlay container missing");
            return;
        }
        self.page.set_scroll_locked(true);

        let page = self.page.clone();
        self.scheduler.on_next_frame(Box::new(move || {
            if let Err(e) = page.with_overlay(|overlay| overlay.visible = true) {
                warn!(%e, "modal open: deferred visibility flip dropped");
            }
        }));
    }

    /// Hide the overlay and unlock scroll immediately; reset the overlay's
    /// internal content scroll once the transition has finished. Idempotent.
    pub fn close(&self) {
        if let Err(e) = self.page.with_overlay(|overlay| overlay.visible = false) {
            warn!(%e, "modal close: overlay container missing");
            return;
        }
        self.page.set_scroll_locked(false);

        let page = self.page.clone();
        self.scheduler.after(
            OVERLAY_TRANSITION,
            Box::new(move || {
                let _ = page.with_overlay(|overlay| overlay.content_scroll = 0);
            }),
        );
    }
}

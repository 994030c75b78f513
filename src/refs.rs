// src/refs.rs
// Inline reference-marker binding.

use tracing::debug;

use crate::page::PageHandle;

pub struct EventReferenceBinder {
    page: PageHandle,
}

impl EventReferenceBinder {
    pub fn new(page: PageHandle) -> Self {
        Self { page }
    }

    /// Scan the page's reference markers and bind each unbound one. Safe to
    /// call again after content changes: already-bound markers are left
    /// alone, so a marker never accumulates a second handler. Returns the
    /// number of markers bound by this pass.
    pub fn bind(&self) -> usize {
        let bound = self
            .page
            .with_markers(|markers| {
                let mut bound = 0;
                for marker in markers.iter_mut() {
                    if marker.bindings == 0 {
                        marker.bindings = 1;
                        bound += 1;
                    }
                }
                bound
            })
            .unwrap_or(0);
        if bound > 0 {
            debug!(bound, "bound reference markers");
        }
        bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebind_does_not_stack_handlers() {
        let page = PageHandle::new();
        page.push_marker("n1");
        page.push_marker("n2");

        let binder = EventReferenceBinder::new(page.clone());
        assert_eq!(binder.bind(), 2);
        assert_eq!(binder.bind(), 0);

        for m in page.marker_snapshot() {
            assert_eq!(m.bindings, 1);
        }
    }

    #[test]
    fn fresh_markers_get_bound_on_rescan() {
        let page = PageHandle::new();
        page.push_marker("n1");
        let binder = EventReferenceBinder::new(page.clone());
        binder.bind();

        page.push_marker("n2");
        assert_eq!(binder.bind(), 1);
    }
}

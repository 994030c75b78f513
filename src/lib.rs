// src/lib.rs
// Public library surface for embedders and integration tests.

pub mod config;
pub mod datefmt;
pub mod error;
pub mod fetch;
pub mod modal;
pub mod model;
pub mod overlay;
pub mod page;
pub mod refs;
pub mod render;
pub mod scheduler;
pub mod sidebar;

// ---- Re-exports for stable public API ----
pub use crate::config::OverlayConfig;
pub use crate::error::OverlayError;
pub use crate::fetch::{DetailSource, NewsDetailFetcher};
pub use crate::modal::{ModalController, OVERLAY_TRANSITION};
pub use crate::model::{NewsItem, NewsSummary};
pub use crate::overlay::NewsOverlay;
pub use crate::page::{LinkLine, PageHandle};
pub use crate::scheduler::{FrameScheduler, ManualScheduler, TokioScheduler};

use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Enable compact tracing logs in development only.
/// Activation requires BOTH:
///   - dev environment (debug build OR OVERLAY_ENV in {local, development, dev})
///   - OVERLAY_DEV_LOG=1
pub fn init_dev_tracing() {
    let dev_flag = std::env::var("OVERLAY_DEV_LOG")
        .ok()
        .is_some_and(|v| v == "1");

    let is_dev_env = cfg!(debug_assertions)
        || matches!(
            std::env::var("OVERLAY_ENV")
                .unwrap_or_default()
                .to_ascii_lowercase()
                .as_str(),
            "local" | "development" | "dev"
        );

    if !(dev_flag && is_dev_env) {
        return;
    }

    // Load .env in local/dev; no-op elsewhere.
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("news_overlay=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

/// Standard production wiring: real fetcher over the configured API base
/// URL, tokio-backed frame scheduler, caller-supplied page handle.
pub fn build_overlay(page: PageHandle, config: &OverlayConfig) -> NewsOverlay {
    let source = Arc::new(NewsDetailFetcher::new(config.api_base_url.clone()));
    NewsOverlay::new(page, source, Arc::new(TokioScheduler))
}

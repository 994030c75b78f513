// src/render.rs
// Fills the overlay's header and content regions from a fetched record.

use tracing::warn;
use url::Url;

use crate::datefmt::format_event_date;
use crate::error::OverlayError;
use crate::model::NewsItem;
use crate::page::{LinkLine, PageHandle};

/// Shown in place of a score when the record carries none.
pub const SCORE_PLACEHOLDER: &str = "暂无评分";

/// Text the embedder puts on a [`LinkLine::Placeholder`] line.
pub const NO_LINKS_PLACEHOLDER: &str = "暂无相关链接";

pub struct NewsDetailRenderer {
    page: PageHandle,
}

impl NewsDetailRenderer {
    pub fn new(page: PageHandle) -> Self {
        Self { page }
    }

    /// Replace the overlay's header and content with `item`. Does not touch
    /// visibility; the modal controller flips that afterwards.
    pub fn render(&self, item: &NewsItem) -> Result<(), OverlayError> {
        let link_lines = build_link_lines(&item.links);
        let date_text = format_event_date(&item.date);
        let score_text = format_score(item.score);

        self.page.with_overlay(|overlay| {
            overlay.header.title = item.event_summary.clone();
            overlay.header.date_text = date_text;
            overlay.header.score_text = score_text;
            overlay.body = item.content.clone();
            overlay.link_lines = link_lines;
        })
    }
}

/// Fixed one-decimal rendering for finite scores, placeholder otherwise.
pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(s) if s.is_finite() => format!("{s:.1}"),
        _ => SCORE_PLACEHOLDER.to_string(),
    }
}

/// One line per link, labeled with its host, in input order. Entries that do
/// not parse as a URL with a host are skipped with a warning; an empty input
/// list renders the placeholder line instead.
fn build_link_lines(links: &[String]) -> Vec<LinkLine> {
    if links.is_empty() {
        return vec![LinkLine::Placeholder];
    }
    links
        .iter()
        .filter_map(|raw| match Url::parse(raw) {
            Ok(url) => match url.host_str() {
                Some(host) => Some(LinkLine::Link {
                    label: host.to_string(),
                    href: raw.clone(),
                }),
                None => {
                    let err = OverlayError::MalformedLink { url: raw.clone() };
                    warn!(%err, "skipping link without host");
                    None
                }
            },
            Err(e) => {
                let err = OverlayError::MalformedLink { url: raw.clone() };
                warn!(%err, cause = %e, "skipping unparseable link");
                None
            }
        })
        .collect()
}

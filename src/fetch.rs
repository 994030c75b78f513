// src/fetch.rs
// Async client for the news detail API.

use std::time::Duration;

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use metrics::{counter, histogram};
use reqwest::Client;

use crate::error::OverlayError;
use crate::model::{NewsItem, NewsSummary};

/// Seam between the overlay pipeline and the wire. Production uses
/// [`NewsDetailFetcher`]; tests substitute recording or failing stubs.
#[async_trait]
pub trait DetailSource: Send + Sync {
    async fn fetch_detail(&self, id: &str) -> Result<NewsItem, OverlayError>;
}

/// Fetches news records from `GET {base}/api/news/{id}`.
///
/// No default request timeout: a hung request leaves the page in its
/// pre-click state, matching the observed upstream behavior. Embedders that
/// want a bound use [`with_timeout`](Self::with_timeout).
#[derive(Clone)]
pub struct NewsDetailFetcher {
    client: Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl NewsDetailFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout = Some(Duration::from_secs(secs));
        self
    }

    fn detail_url(&self, id: &str) -> String {
        format!("{}/api/news/{id}", self.base_url)
    }

    /// Fetch the sidebar feed: `GET {base}/api/news`.
    pub async fn fetch_summaries(&self) -> Result<Vec<NewsSummary>, OverlayError> {
        let url = format!("{}/api/news", self.base_url);
        let mut req = self.client.get(&url);
        if let Some(t) = self.timeout {
            req = req.timeout(t);
        }
        let rsp = req
            .send()
            .await
            .with_context(|| format!("GET {url}"))
            .map_err(OverlayError::fetch)?;
        let rsp = rsp
            .error_for_status()
            .context("news list status")
            .map_err(OverlayError::fetch)?;
        rsp.json::<Vec<NewsSummary>>()
            .await
            .context("decoding news list json")
            .map_err(OverlayError::fetch)
    }
}

#[async_trait]
impl DetailSource for NewsDetailFetcher {
    async fn fetch_detail(&self, id: &str) -> Result<NewsItem, OverlayError> {
        if id.trim().is_empty() {
            counter!("news_detail_fetch_failures_total").increment(1);
            return Err(OverlayError::fetch(anyhow!("empty news id")));
        }

        let t0 = std::time::Instant::now();
        let url = self.detail_url(id);
        let mut req = self.client.get(&url);
        if let Some(t) = self.timeout {
            req = req.timeout(t);
        }

        let out: Result<NewsItem, OverlayError> = async {
            let rsp = req
                .send()
                .await
                .with_context(|| format!("GET {url}"))
                .map_err(OverlayError::fetch)?;
            let rsp = rsp
                .error_for_status()
                .context("news detail status")
                .map_err(OverlayError::fetch)?;
            rsp.json::<NewsItem>()
                .await
                .context("decoding news detail json")
                .map_err(OverlayError::fetch)
        }
        .await;

        let ms = t0.elapsed().as_secs_f64() * 1_000.0;
        histogram!("news_detail_fetch_ms").record(ms);
        match &out {
            Ok(_) => counter!("news_detail_fetch_total").increment(1),
            Err(_) => counter!("news_detail_fetch_failures_total").increment(1),
        }
        out
    }
}

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::time::Duration;

use engine_logging::{engine_debug, engine_info, engine_warn};
use futures_util::StreamExt;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::{EngineEvent, FailureKind, FetchError, HarvestProgress, SearchPage, Stage};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
    pub allowed_content_types: Vec<String>,
    pub user_agent: String,
    /// Pause between consecutive page requests; the search API asks clients
    /// to stay under ten requests per second.
    pub request_interval: Duration,
    pub max_pages: usize,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 5,
            max_bytes: 8 * 1024 * 1024,
            allowed_content_types: vec!["application/json".to_string()],
            user_agent: format!("counter-harvester/{}", env!("CARGO_PKG_VERSION")),
            request_interval: Duration::from_millis(100),
            max_pages: 500,
        }
    }
}

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelProgressSink {
    tx: std::sync::mpsc::Sender<EngineEvent>,
}

impl ChannelProgressSink {
    pub fn new(tx: std::sync::mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

/// Reports progress through the `engine_*` log macros.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgressSink;

impl ProgressSink for LogProgressSink {
    fn emit(&self, event: EngineEvent) {
        match event {
            EngineEvent::Progress(HarvestProgress {
                stage,
                pages,
                cards,
                total_cards,
            }) => match total_cards {
                Some(total) => {
                    engine_info!("{stage:?}: {pages} pages, {cards}/{total} cards")
                }
                None => engine_info!("{stage:?}: {pages} pages, {cards} cards"),
            },
            EngineEvent::PageFailed { url, kind } => {
                engine_warn!("Page {url} failed: {kind}")
            }
        }
    }
}

#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Result<SearchPage, FetchError>;
}

/// Fetches search pages over HTTP. Each request gets its own client and
/// redirect counter, so clones can be used concurrently.
#[derive(Debug, Clone)]
pub struct ReqwestPageFetcher {
    settings: FetchSettings,
}

impl ReqwestPageFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        // Fail early on settings the client builder rejects.
        build_client(&settings, Arc::new(AtomicUsize::new(0)))?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &FetchSettings {
        &self.settings
    }

    fn is_content_type_allowed(&self, content_type: &str) -> bool {
        let ct = content_type.split(';').next().unwrap_or(content_type).trim();
        self.settings
            .allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ct))
    }

    fn too_large(&self, actual: u64) -> FetchError {
        FetchError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

fn build_client(
    settings: &FetchSettings,
    redirect_counter: Arc<AtomicUsize>,
) -> Result<reqwest::Client, FetchError> {
    let redirect_limit = settings.redirect_limit;
    let policy = reqwest::redirect::Policy::custom(move |attempt| {
        let count = attempt.previous().len();
        redirect_counter.store(count, Ordering::Relaxed);
        if count >= redirect_limit {
            attempt.error("redirect limit exceeded")
        } else {
            attempt.follow()
        }
    });

    reqwest::Client::builder()
        .connect_timeout(settings.connect_timeout)
        .timeout(settings.request_timeout)
        .user_agent(settings.user_agent.clone())
        .redirect(policy)
        .build()
        .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
}

#[async_trait::async_trait]
impl PageFetcher for ReqwestPageFetcher {
    async fn fetch_page(&self, url: &str) -> Result<SearchPage, FetchError> {
        self.fetch_page_with_redirects(url)
            .await
            .map(|(page, _)| page)
    }
}

impl ReqwestPageFetcher {
    /// Fetch one page and report how many redirects this request followed.
    pub async fn fetch_page_with_redirects(
        &self,
        url: &str,
    ) -> Result<(SearchPage, usize), FetchError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;

        let redirect_counter = Arc::new(AtomicUsize::new(0));
        let client = build_client(&self.settings, redirect_counter.clone())?;
        let response = client
            .get(parsed)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        if let Some(ct) = content_type.as_deref() {
            if !self.is_content_type_allowed(ct) {
                return Err(FetchError::new(
                    FailureKind::UnsupportedContentType {
                        content_type: ct.to_string(),
                    },
                    "unsupported content type",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }

        let redirects = redirect_counter.load(Ordering::Relaxed);
        engine_debug!(
            "Fetched {} bytes from {url} ({redirects} redirects)",
            bytes.len()
        );

        let page = serde_json::from_slice(&bytes)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;
        Ok((page, redirects))
    }
}

/// Fetch `start_url` and every page it links to through `next_page`.
///
/// Pages are requested one at a time, `settings.request_interval` apart.
pub async fn fetch_corpus(
    fetcher: &dyn PageFetcher,
    start_url: &str,
    settings: &FetchSettings,
    sink: &dyn ProgressSink,
) -> Result<Vec<SearchPage>, FetchError> {
    let mut pages: Vec<SearchPage> = Vec::new();
    let mut cards = 0usize;
    let mut next_url = Some(start_url.to_string());

    while let Some(url) = next_url.take() {
        if pages.len() >= settings.max_pages {
            return Err(FetchError::new(
                FailureKind::PageLimitExceeded {
                    max_pages: settings.max_pages,
                },
                format!("stopped before {url}"),
            ));
        }
        if !pages.is_empty() && !settings.request_interval.is_zero() {
            tokio::time::sleep(settings.request_interval).await;
        }

        let page = match fetcher.fetch_page(&url).await {
            Ok(page) => page,
            Err(err) => {
                sink.emit(EngineEvent::PageFailed {
                    url,
                    kind: err.kind.clone(),
                });
                return Err(err);
            }
        };

        cards += page.data.len();
        engine_info!("Fetched page {} with {} cards", pages.len() + 1, page.data.len());
        sink.emit(EngineEvent::Progress(HarvestProgress {
            stage: Stage::Fetching,
            pages: pages.len() + 1,
            cards,
            total_cards: page.total_cards,
        }));

        if page.has_more {
            next_url = page.next_page.clone();
            if next_url.is_none() {
                engine_warn!("Page {url} claims more results but has no next_page link");
            }
        }
        pages.push(page);
    }

    Ok(pages)
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_redirect() {
        return FetchError::new(FailureKind::RedirectLimitExceeded, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}

use std::fmt;

use counter_core::CounterTypeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetching,
    Scanning,
    Writing,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestProgress {
    pub stage: Stage,
    pub pages: usize,
    pub cards: usize,
    pub total_cards: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Progress(HarvestProgress),
    PageFailed { url: String, kind: FailureKind },
}

/// Outcome of one harvest run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HarvestReport {
    pub pages: usize,
    pub cards: usize,
    pub faces: usize,
    pub counters: CounterTypeSet,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    UnsupportedContentType { content_type: String },
    Decode,
    PageLimitExceeded { max_pages: usize },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type}")
            }
            FailureKind::Decode => write!(f, "malformed search page"),
            FailureKind::PageLimitExceeded { max_pages } => {
                write!(f, "more than {max_pages} result pages")
            }
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

use url::Url;

use crate::{FailureKind, FetchError};

pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://api.scryfall.com/cards/search";

/// Cards whose rules text uses "counter" as a word, minus the spell-countering
/// phrasings. "counter that" also hits Decree of Silence, but depletion
/// counters show up on other cards anyway.
pub const DEFAULT_QUERY: &str = r#"re:"\bcounter\b" -oracle:"counter it" -oracle:"counter target" -oracle:"counter that" -oracle:"counter the" include:extras in:paper"#;

/// First-page URL for `query` against `endpoint`, with `q` properly encoded.
pub fn search_url(endpoint: &str, query: &str) -> Result<String, FetchError> {
    let url = Url::parse_with_params(endpoint, &[("q", query)])
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
    Ok(url.into())
}

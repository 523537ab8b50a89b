use std::collections::HashSet;
use std::sync::LazyLock;

/// Words that announce a counter type in the token right before them.
pub const MARKER_WORDS: &[&str] = &["counter", "counters"];

/// Articles, quantifiers, number words and similar filler that can sit right
/// before "counter(s)" without ever naming a counter type.
pub const FORBIDDEN_COUNTERS: &[&str] = &[
    "a", "additional", "all", "and", "another", "does", "each", "may", "more", "moved", "no", "of",
    "target", "that", "the", "those", "with", "would", "X", "zero", "one", "two", "three", "four",
    "five", "six", "seven", "eight", "nine", "ten",
];

static STANDARD: LazyLock<Vocabulary> =
    LazyLock::new(|| Vocabulary::new(MARKER_WORDS.iter().copied(), FORBIDDEN_COUNTERS.iter().copied()));

/// Marker words plus the forbidden set. All lookups are exact and
/// case-sensitive; "The" is not filtered even though "the" is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    markers: HashSet<String>,
    forbidden: HashSet<String>,
}

impl Vocabulary {
    pub fn new<M, F>(markers: M, forbidden: F) -> Self
    where
        M: IntoIterator,
        M::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            markers: markers.into_iter().map(Into::into).collect(),
            forbidden: forbidden.into_iter().map(Into::into).collect(),
        }
    }

    /// Shared, read-only vocabulary built from [`MARKER_WORDS`] and
    /// [`FORBIDDEN_COUNTERS`].
    pub fn standard() -> &'static Vocabulary {
        &STANDARD
    }

    /// Standard vocabulary with additional forbidden words.
    pub fn with_extra_forbidden<I>(extra: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut vocabulary = Self::standard().clone();
        vocabulary
            .forbidden
            .extend(extra.into_iter().map(Into::into));
        vocabulary
    }

    pub fn is_marker(&self, token: &str) -> bool {
        self.markers.contains(token)
    }

    pub fn is_forbidden(&self, candidate: &str) -> bool {
        self.forbidden.contains(candidate)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::standard().clone()
    }
}

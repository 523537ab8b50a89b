use engine_logging::engine_trace;

use crate::Vocabulary;

/// Recovers counter-type names from the tokens leading up to a marker word.
///
/// Card text lists several types as "age, loyalty, or shield counters" or
/// "+1/+1 or -1/-1 counters", so the classifier starts at the token before the
/// marker and keeps stepping left while the list continues.
#[derive(Debug, Clone, Copy)]
pub struct TokenClassifier<'v> {
    vocabulary: &'v Vocabulary,
}

impl TokenClassifier<'static> {
    pub fn standard() -> Self {
        Self::new(Vocabulary::standard())
    }
}

impl<'v> TokenClassifier<'v> {
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &'v Vocabulary {
        self.vocabulary
    }

    /// Walk left from `position`, collecting candidates nearest-first.
    ///
    /// The walk continues one step when the current token ends with a comma,
    /// or two steps (skipping it) when the previous token is exactly "or".
    /// Forbidden candidates are dropped without ending the walk. A position
    /// outside `tokens` ends the walk; it never wraps around.
    pub fn classify<S: AsRef<str>>(&self, tokens: &[S], position: isize) -> Vec<String> {
        let mut found = Vec::new();
        let mut cursor = token_at(tokens, position).map(|word| (position, word));

        while let Some((index, word)) = cursor {
            let candidate = word.trim_end_matches(',');
            if self.vocabulary.is_forbidden(candidate) {
                engine_trace!("skipping forbidden candidate {candidate:?} at {index}");
            } else {
                found.push(candidate.to_owned());
            }

            cursor = if word.ends_with(',') {
                token_at(tokens, index - 1).map(|prev| (index - 1, prev))
            } else if token_at(tokens, index - 1) == Some("or") {
                token_at(tokens, index - 2).map(|prev| (index - 2, prev))
            } else {
                None
            };
        }

        found
    }
}

fn token_at<S: AsRef<str>>(tokens: &[S], position: isize) -> Option<&str> {
    usize::try_from(position)
        .ok()
        .and_then(|index| tokens.get(index))
        .map(AsRef::as_ref)
}

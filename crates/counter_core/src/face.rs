use crate::Vocabulary;

/// Whitespace-delimited tokens of one block of rules text.
///
/// A card with several faces (split, flip, adventure, ...) contributes one
/// `Face` per block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Face {
    tokens: Vec<String>,
}

impl Face {
    /// Tokenize `text`; absent text gives an empty face.
    pub fn from_text(text: Option<&str>) -> Self {
        let tokens = text
            .map(|text| text.split_whitespace().map(ToOwned::to_owned).collect())
            .unwrap_or_default();
        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Indices of tokens that exactly equal a marker word, left to right.
    pub fn anchors<'a>(&'a self, vocabulary: &'a Vocabulary) -> impl Iterator<Item = usize> + 'a {
        self.tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| vocabulary.is_marker(token))
            .map(|(index, _)| index)
    }
}

impl From<&str> for Face {
    fn from(text: &str) -> Self {
        Self::from_text(Some(text))
    }
}

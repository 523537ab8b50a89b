use std::fs;
use std::io;
use std::path::Path;

use counter_core::Face;
use serde::Deserialize;

/// One page of card-search results.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub data: Vec<CardRecord>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_page: Option<String>,
    #[serde(default)]
    pub total_cards: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct CardRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub oracle_text: Option<String>,
    #[serde(default)]
    pub card_faces: Option<Vec<FaceRecord>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct FaceRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub oracle_text: Option<String>,
}

impl CardRecord {
    /// Rules text blocks of this card.
    ///
    /// Multi-faced cards are read face by face and the top-level text is
    /// ignored; single-faced cards are their own only face.
    pub fn faces(&self) -> Vec<Face> {
        match &self.card_faces {
            Some(faces) => faces
                .iter()
                .map(|face| Face::from_text(face.oracle_text.as_deref()))
                .collect(),
            None => vec![Face::from_text(self.oracle_text.as_deref())],
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CorpusFileError {
    #[error("failed to read card file: {0}")]
    Io(#[from] io::Error),
    #[error("card file is neither a search page nor a card list: {0}")]
    Format(#[from] serde_json::Error),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CardFile {
    Cards(Vec<CardRecord>),
    Page(SearchPage),
}

/// Load cards from a saved search page or a bulk card list.
pub fn load_card_file(path: &Path) -> Result<Vec<CardRecord>, CorpusFileError> {
    let content = fs::read(path)?;
    let cards = match serde_json::from_slice::<CardFile>(&content)? {
        CardFile::Cards(cards) => cards,
        CardFile::Page(page) => page.data,
    };
    Ok(cards)
}

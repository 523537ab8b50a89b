use std::sync::Arc;

use counter_core::{CorpusScanner, Face, Vocabulary};
use engine_logging::engine_info;

use crate::fetch::{fetch_corpus, FetchSettings, PageFetcher, ProgressSink, ReqwestPageFetcher};
use crate::{CardRecord, EngineEvent, FetchError, HarvestProgress, HarvestReport, Stage};

/// Every face of every card, in card order.
pub fn faces_of<'c, I>(cards: I) -> Vec<Face>
where
    I: IntoIterator<Item = &'c CardRecord>,
{
    cards.into_iter().flat_map(CardRecord::faces).collect()
}

/// Scan already loaded cards.
pub fn harvest_cards(cards: &[CardRecord], vocabulary: &Vocabulary) -> HarvestReport {
    let faces = faces_of(cards);
    let counters = CorpusScanner::new(vocabulary).scan_parallel(&faces);
    HarvestReport {
        pages: 0,
        cards: cards.len(),
        faces: faces.len(),
        counters,
    }
}

/// Fetches the card corpus page by page and scans it for counter types.
pub struct Harvester {
    fetcher: Arc<dyn PageFetcher>,
    settings: FetchSettings,
    vocabulary: Vocabulary,
}

impl Harvester {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let fetcher = Arc::new(ReqwestPageFetcher::new(settings.clone())?);
        Ok(Self::with_fetcher(fetcher, settings))
    }

    pub fn with_fetcher(fetcher: Arc<dyn PageFetcher>, settings: FetchSettings) -> Self {
        Self {
            fetcher,
            settings,
            vocabulary: Vocabulary::default(),
        }
    }

    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    pub async fn run(
        &self,
        start_url: &str,
        sink: &dyn ProgressSink,
    ) -> Result<HarvestReport, FetchError> {
        let pages = fetch_corpus(self.fetcher.as_ref(), start_url, &self.settings, sink).await?;
        let cards: Vec<&CardRecord> = pages.iter().flat_map(|page| &page.data).collect();
        let total_cards = pages.first().and_then(|page| page.total_cards);

        sink.emit(EngineEvent::Progress(HarvestProgress {
            stage: Stage::Scanning,
            pages: pages.len(),
            cards: cards.len(),
            total_cards,
        }));

        let faces = faces_of(cards.iter().copied());
        let counters = CorpusScanner::new(&self.vocabulary).scan_parallel(&faces);
        engine_info!(
            "Found {} counter types in {} faces of {} cards",
            counters.len(),
            faces.len(),
            cards.len()
        );

        Ok(HarvestReport {
            pages: pages.len(),
            cards: cards.len(),
            faces: faces.len(),
            counters,
        })
    }
}

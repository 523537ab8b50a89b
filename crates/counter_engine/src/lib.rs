//! Counter engine: corpus retrieval, scanning pipeline and result persistence.
mod cards;
mod engine;
mod fetch;
mod persist;
mod search;
mod types;
mod types_file;

pub use cards::{load_card_file, CardRecord, CorpusFileError, FaceRecord, SearchPage};
pub use engine::{faces_of, harvest_cards, Harvester};
pub use fetch::{
    fetch_corpus, ChannelProgressSink, FetchSettings, LogProgressSink, PageFetcher, ProgressSink,
    ReqwestPageFetcher,
};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use search::{search_url, DEFAULT_QUERY, DEFAULT_SEARCH_ENDPOINT};
pub use types::{EngineEvent, FailureKind, FetchError, HarvestProgress, HarvestReport, Stage};
pub use types_file::{render_types, TypesFileWriter, DEFAULT_TYPES_FILENAME};

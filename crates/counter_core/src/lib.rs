//! Counter core: pure token scanning over card rules text.
mod classify;
mod counter_set;
mod face;
mod scan;
mod vocabulary;

pub use classify::TokenClassifier;
pub use counter_set::CounterTypeSet;
pub use face::Face;
pub use scan::CorpusScanner;
pub use vocabulary::{Vocabulary, FORBIDDEN_COUNTERS, MARKER_WORDS};

use std::path::PathBuf;

use counter_core::CounterTypeSet;
use engine_logging::engine_info;

use crate::persist::{AtomicFileWriter, PersistError};

pub const DEFAULT_TYPES_FILENAME: &str = "types.txt";

/// One counter type per line in case-insensitive order, followed by a blank
/// line.
pub fn render_types(counters: &CounterTypeSet) -> String {
    let mut out = String::new();
    for name in counters.sorted() {
        out.push_str(name);
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Persists a [`CounterTypeSet`] as a types file inside an output directory.
#[derive(Debug, Clone)]
pub struct TypesFileWriter {
    writer: AtomicFileWriter,
    filename: String,
}

impl TypesFileWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_filename(dir, DEFAULT_TYPES_FILENAME)
    }

    pub fn with_filename(dir: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        Self {
            writer: AtomicFileWriter::new(dir),
            filename: filename.into(),
        }
    }

    pub fn target(&self) -> PathBuf {
        self.writer.dir().join(&self.filename)
    }

    pub fn write(&self, counters: &CounterTypeSet) -> Result<PathBuf, PersistError> {
        let path = self.writer.write(&self.filename, render_types(counters))?;
        engine_info!("Wrote {} counter types to {:?}", counters.len(), path);
        Ok(path)
    }
}

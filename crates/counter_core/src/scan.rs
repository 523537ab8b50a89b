use engine_logging::engine_debug;
use rayon::prelude::*;

use crate::{CounterTypeSet, Face, TokenClassifier, Vocabulary};

/// Finds marker words in faces and collects the counter types before them.
#[derive(Debug, Clone, Copy)]
pub struct CorpusScanner<'v> {
    classifier: TokenClassifier<'v>,
}

impl CorpusScanner<'static> {
    pub fn standard() -> Self {
        Self::new(Vocabulary::standard())
    }
}

impl<'v> CorpusScanner<'v> {
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self {
            classifier: TokenClassifier::new(vocabulary),
        }
    }

    /// Add every counter type found in `face` to `found`.
    pub fn scan_face(&self, face: &Face, found: &mut CounterTypeSet) {
        let tokens = face.tokens();
        for anchor in face.anchors(self.classifier.vocabulary()) {
            // Marker as first token: position -1 yields nothing.
            let position = anchor as isize - 1;
            found.extend(self.classifier.classify(tokens, position));
        }
    }

    pub fn scan<'f, I>(&self, faces: I) -> CounterTypeSet
    where
        I: IntoIterator<Item = &'f Face>,
    {
        let mut found = CounterTypeSet::new();
        let mut face_count = 0usize;
        for face in faces {
            self.scan_face(face, &mut found);
            face_count += 1;
        }
        engine_debug!(
            "scanned {face_count} faces, {} distinct counter types",
            found.len()
        );
        found
    }

    /// Tokenize and scan raw face texts; `None` stands for a face without text.
    pub fn scan_texts<'t, I>(&self, texts: I) -> CounterTypeSet
    where
        I: IntoIterator<Item = Option<&'t str>>,
    {
        let mut found = CounterTypeSet::new();
        for text in texts {
            self.scan_face(&Face::from_text(text), &mut found);
        }
        found
    }

    /// Same result as [`scan`](Self::scan); faces are split across the rayon
    /// pool and the per-worker sets are unioned.
    pub fn scan_parallel(&self, faces: &[Face]) -> CounterTypeSet {
        let found = faces
            .par_iter()
            .fold(CounterTypeSet::new, |mut local, face| {
                self.scan_face(face, &mut local);
                local
            })
            .reduce(CounterTypeSet::new, CounterTypeSet::union);
        engine_debug!(
            "scanned {} faces in parallel, {} distinct counter types",
            faces.len(),
            found.len()
        );
        found
    }
}

// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer talks to these seams instead of the
// concrete JSON loader and Burn predictor, so either side can
// be replaced (e.g. a word2vec text loader) without touching
// the run workflow.

use anyhow::Result;

use crate::domain::word_vectors::WordVectors;

// ─── EmbeddingSource ──────────────────────────────────────────────────────────
/// Anything that can supply pretrained word vectors.
///
/// Implementations:
///   - JsonEmbeddingLoader → a JSON object of token → [f32]
pub trait EmbeddingSource {
    fn load(&self) -> Result<WordVectors>;
}

// ─── TextClassifier ───────────────────────────────────────────────────────────
/// Arg-max class and its probability
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub class:      usize,
    pub confidence: f32,
}

/// Anything that can assign a class index to raw text.
///
/// Implementations:
///   - Predictor → the trained LSTM classifier
pub trait TextClassifier {
    fn classify(&self, text: &str) -> Result<Prediction>;

    /// Returns the arg-max class index for `text`
    fn predict(&self, text: &str) -> Result<usize> {
        Ok(self.classify(text)?.class)
    }
}

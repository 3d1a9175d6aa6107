// ============================================================
// Layer 5 — Predictor
// ============================================================
use anyhow::{bail, Result};
use burn::prelude::*;

use crate::domain::traits::{Prediction, TextClassifier};
use crate::domain::vocabulary::Vocabulary;
use crate::ml::model::LstmClassifier;

/// Runs the trained classifier on raw text.
///
/// Construct it with `model.valid()` so `B` is the inner,
/// non-autodiff backend and no gradient graph is recorded.
pub struct Predictor<B: Backend> {
    model:  LstmClassifier<B>,
    vocab:  Vocabulary,
    device: B::Device,
}

impl<B: Backend> Predictor<B> {
    pub fn new(model: LstmClassifier<B>, vocab: Vocabulary, device: B::Device) -> Self {
        Self { model, vocab, device }
    }

    /// Classify an already-encoded sequence as a single-item batch.
    pub fn classify_ids(&self, ids: &[usize]) -> Result<Prediction> {
        if ids.is_empty() {
            bail!("Cannot classify an empty token sequence");
        }
        let vocab_size = self.model.vocab_size();
        if let Some(&id) = ids.iter().find(|&&id| id >= vocab_size) {
            bail!("Token id {id} is outside the vocabulary (size {vocab_size})");
        }

        let ids: Vec<i32> = ids.iter().map(|&id| id as i32).collect();
        let input = Tensor::<B, 1, Int>::from_ints(ids.as_slice(), &self.device)
            .unsqueeze::<2>(); // [1, seq_len]

        let probs = self.model.forward(input); // [1, num_classes]
        let class = probs
            .clone()
            .argmax(1)
            .into_data()
            .iter::<i64>()
            .next()
            .map(|c| c as usize);
        let probs: Vec<f32> = probs.into_data().iter::<f32>().collect();

        match class {
            Some(class) => Ok(Prediction {
                class,
                confidence: probs.get(class).copied().unwrap_or_default(),
            }),
            None => bail!("Model returned no class scores"),
        }
    }
}

impl<B: Backend> TextClassifier for Predictor<B> {
    /// Tokenize, encode (unknown → <UNK>) and classify `text`.
    fn classify(&self, text: &str) -> Result<Prediction> {
        let ids = self.vocab.encode(text);
        tracing::debug!("Encoded '{}' → {:?}", text, ids);
        self.classify_ids(&ids)
    }
}

// ============================================================
// Layer 2 — RunUseCase
// ============================================================
// Orchestrates the whole classifier run in order:
//
//   Step 1: Build vocabulary from the corpus    (Layer 3 - domain)
//   Step 2: Load pretrained word vectors        (Layer 4 - data)
//   Step 3: Assemble the embedding matrix       (Layer 4 - data)
//   Step 4: Build the LSTM classifier           (Layer 5 - ml)
//   Step 5: Encode the training examples        (Layer 4 - data)
//   Step 6: Run the training loop               (Layer 5 - ml)
//   Step 7: Classify the input text             (Layer 5 - ml)
//
// Reference: Rust Book §13 (Iterators and Closures)
//            Burn Book §5 (Training)

use anyhow::Result;
use burn::module::AutodiffModule;
use serde::{Deserialize, Serialize};

use crate::data::{
    dataset::ClassificationDataset,
    embeddings::{EmbeddingMatrix, JsonEmbeddingLoader},
};
use crate::domain::{
    label::SentimentLabel,
    labeled_text::LabeledText,
    traits::{EmbeddingSource, Prediction, TextClassifier},
    vocabulary::Vocabulary,
};
use crate::infra::metrics::TrainingHistory;
use crate::ml::{
    model::LstmClassifierConfig,
    predictor::Predictor,
    trainer::run_training,
};

type TrainBackend = burn::backend::Autodiff<burn::backend::NdArray>;

pub const DEFAULT_CORPUS: &str = "안녕 하세요 저는 챗봇 입니다 안녕 하세요";
pub const DEFAULT_TEXT: &str = "안녕 하세요 저는 챗봇 입니다";

// ─── Run Configuration ───────────────────────────────────────────────────────
// Everything a run needs. Serialisable so a run can be described
// as JSON and logged verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub embeddings_path: String,
    pub corpus:          String,
    pub text:            String,
    pub hidden_dim:      usize,
    pub num_classes:     usize,
    pub batch_size:      usize,
    pub epochs:          usize,
    pub lr:              f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            embeddings_path: "data/embeddings.json".to_string(),
            corpus:          DEFAULT_CORPUS.to_string(),
            text:            DEFAULT_TEXT.to_string(),
            hidden_dim:      128,
            num_classes:     3,
            batch_size:      2,
            epochs:          5,
            lr:              1e-3,
        }
    }
}

/// What a run produced, for the CLI to print
#[derive(Debug, Clone)]
pub struct RunReport {
    pub vocab_size:    usize,
    pub embedding_dim: usize,
    pub history:       TrainingHistory,
    pub prediction:    Prediction,
}

impl RunReport {
    pub fn label(&self) -> &'static str {
        SentimentLabel::name_of(self.prediction.class)
    }
}

// ─── RunUseCase ───────────────────────────────────────────────────────────────
pub struct RunUseCase {
    config: RunConfig,
    source: Box<dyn EmbeddingSource>,
}

impl RunUseCase {
    /// Read word vectors from `config.embeddings_path`
    pub fn new(config: RunConfig) -> Self {
        let source = Box::new(JsonEmbeddingLoader::new(&config.embeddings_path));
        Self { config, source }
    }

    /// Use any other source of word vectors
    pub fn with_source(config: RunConfig, source: Box<dyn EmbeddingSource>) -> Self {
        Self { config, source }
    }

    pub fn execute(&self) -> Result<RunReport> {
        let cfg = &self.config;
        tracing::debug!("Run config: {}", serde_json::to_string(cfg)?);

        // ── Step 1: Vocabulary ────────────────────────────────────────────────
        let vocab = Vocabulary::from_text(&cfg.corpus);
        tracing::info!("Vocabulary has {} entries", vocab.len());

        // ── Step 2–3: Word vectors → embedding matrix ─────────────────────────
        let vectors = self.source.load()?;
        let matrix  = EmbeddingMatrix::build(&vocab, &vectors, &mut rand::thread_rng());
        let (vocab_size, embedding_dim) = matrix.shape();

        // ── Step 4: Model ─────────────────────────────────────────────────────
        let device = burn::backend::ndarray::NdArrayDevice::default();
        let model  = LstmClassifierConfig::new(cfg.hidden_dim, cfg.num_classes)
            .init::<TrainBackend>(&matrix, &device);
        tracing::info!(
            "Model ready: embedding {}×{}, hidden_dim={}, classes={}",
            vocab_size, embedding_dim, cfg.hidden_dim, cfg.num_classes
        );

        // ── Step 5: Training data ─────────────────────────────────────────────
        let dataset = ClassificationDataset::from_texts(
            &LabeledText::demo_set(), &vocab, cfg.num_classes,
        )?;
        tracing::info!("Built {} training samples", dataset.sample_count());

        // ── Step 6: Train ─────────────────────────────────────────────────────
        let (model, history) = run_training(cfg, model, dataset, &device)?;

        // ── Step 7: Predict ───────────────────────────────────────────────────
        // model.valid() drops the autodiff wrapper: no gradients at inference
        let predictor  = Predictor::new(model.valid(), vocab, device);
        let prediction = predictor.classify(&cfg.text)?;

        tracing::info!(
            "Predicted class {} with probability {:.4}",
            prediction.class, prediction.confidence
        );

        Ok(RunReport { vocab_size, embedding_dim, history, prediction })
    }
}

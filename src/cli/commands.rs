// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `run` and `vocab`
// and all their configurable flags.
//
// Every default reproduces the reference run: 128 hidden
// units, 3 classes, batches of 2, 5 epochs of Adam at 1e-3.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use crate::application::run_use_case::{RunConfig, DEFAULT_CORPUS, DEFAULT_TEXT};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the vocabulary, train the classifier, then classify --text
    Run(RunArgs),

    /// Print the vocabulary built from --corpus
    Vocab(VocabArgs),
}

/// All arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// JSON file mapping tokens to embedding vectors
    #[arg(long, default_value = "data/embeddings.json")]
    pub embeddings: String,

    /// Whitespace-separated tokens the vocabulary is built from
    #[arg(long, default_value = DEFAULT_CORPUS)]
    pub corpus: String,

    /// Sentence to classify after training
    #[arg(long, default_value = DEFAULT_TEXT)]
    pub text: String,

    /// Size of the LSTM hidden state
    #[arg(long, default_value_t = 128)]
    pub hidden_dim: usize,

    /// Number of output classes (positive, negative, neutral)
    #[arg(long, default_value_t = 3)]
    pub num_classes: usize,

    /// Number of samples processed together in one forward pass
    #[arg(long, default_value_t = 2)]
    pub batch_size: usize,

    /// Number of full passes through the training data
    #[arg(long, default_value_t = 5)]
    pub epochs: usize,

    /// Adam learning rate
    #[arg(long, default_value_t = 1e-3)]
    pub lr: f64,
}

/// The application layer never sees clap types.
impl From<RunArgs> for RunConfig {
    fn from(a: RunArgs) -> Self {
        RunConfig {
            embeddings_path: a.embeddings,
            corpus:          a.corpus,
            text:            a.text,
            hidden_dim:      a.hidden_dim,
            num_classes:     a.num_classes,
            batch_size:      a.batch_size,
            epochs:          a.epochs,
            lr:              a.lr,
        }
    }
}

/// All arguments for the `vocab` command
#[derive(Args, Debug)]
pub struct VocabArgs {
    /// Whitespace-separated tokens the vocabulary is built from
    #[arg(long, default_value = DEFAULT_CORPUS)]
    pub corpus: String,
}

// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction, parsed with clap.
// All work is delegated to the application layer; this
// layer only routes and prints.
//
// Two commands are supported:
//   1. `run`   : train the classifier and classify one sentence
//   2. `vocab` : show the id assigned to every corpus token
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, RunArgs, VocabArgs};

use crate::domain::vocabulary::Vocabulary;

#[derive(Parser, Debug)]
#[command(
    name = "lstm-sentiment",
    version = "0.1.0",
    about = "Train a tiny LSTM sentiment classifier on pretrained embeddings, then classify text."
)]
pub struct Cli {
    /// The subcommand to run (run or vocab)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Run(args)   => run_classifier(args),
            Commands::Vocab(args) => print_vocab(args),
        }
    }
}

/// Handles the `run` subcommand.
fn run_classifier(args: RunArgs) -> Result<()> {
    use crate::application::run_use_case::RunUseCase;

    tracing::info!("Using embeddings from: {}", args.embeddings);

    let use_case = RunUseCase::new(args.into());
    let report   = use_case.execute()?;

    println!(
        "Vocabulary: {} entries, embedding dim {}",
        report.vocab_size, report.embedding_dim
    );
    if let Some(last) = report.history.last() {
        println!("Final loss: {:.4}", last.loss);
    }
    println!(
        "Predicted class: {} ({})",
        report.prediction.class,
        report.label()
    );
    Ok(())
}

/// Handles the `vocab` subcommand.
fn print_vocab(args: VocabArgs) -> Result<()> {
    let vocab = Vocabulary::from_text(&args.corpus);
    for (id, token) in vocab.iter() {
        println!("{id:>4}  {token}");
    }
    println!("{} entries", vocab.len());
    Ok(())
}

// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between files/text and model-ready tensors.
//
//   embeddings.json            corpus + labelled sentences
//       │                             │
//       ▼                             ▼
//   JsonEmbeddingLoader         Vocabulary (domain)
//       │                             │
//       ▼                             ▼
//   EmbeddingMatrix ◄───────── ClassificationDataset
//       │                             │
//       ▼                             ▼
//   model init (ml)           ClassificationBatcher
//                                     │
//                                     ▼
//                                DataLoader → training loop
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

/// Loads word vectors and lays out the embedding matrix
pub mod embeddings;

/// Implements Burn's Dataset trait for encoded samples
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;

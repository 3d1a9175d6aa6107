// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits describing what the
// classifier works with:
//   - the token vocabulary
//   - labelled example sentences
//   - the sentiment label table
//   - pretrained word vectors
//
// Rules for this layer:
//   - NO Burn framework types
//   - NO file I/O
//
// Everything here is unit-testable without a tensor backend.

// Token → id mapping with reserved <PAD>/<UNK>
pub mod vocabulary;

// A sentence paired with its class index
pub mod labeled_text;

// Class index → label name
pub mod label;

// Validated token → vector mapping
pub mod word_vectors;

// Seams implemented by the data and ml layers
pub mod traits;

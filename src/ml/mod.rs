// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// All model maths lives here, on top of the Burn framework.
//
//   model.rs     : The LSTM classifier
//                  • Embedding lookup (pretrained, trainable)
//                  • Single-layer LSTM, last hidden state only
//                  • Linear projection to class logits
//                  • Row-wise softmax
//
//   trainer.rs   : The training loop
//                  Forward pass, loss, backward pass and one
//                  Adam step per batch, mean loss per epoch
//
//   predictor.rs : Inference
//                  Encodes text, runs the model on the inner
//                  (non-autodiff) backend, decodes the arg-max
//
// Reference: Burn Book §3 (Building Blocks)
//            Burn Book §5 (Training)
//            Hochreiter & Schmidhuber (1997) LSTM

/// LSTM text classifier architecture
pub mod model;

/// Fixed-epoch training loop
pub mod trainer;

/// Arg-max prediction on raw text
pub mod predictor;

// ============================================================
// Layer 4 — Classification Batcher
// ============================================================
// Implements Burn's Batcher trait to turn a Vec of samples
// into tensors the model can consume.
//
// How batching works here:
//   Input:  N samples, each of sequence length S
//   Output: token_ids [N, S], labels [N]
//
//     [4, 5, 6]      [[4, 5, 6],
//     [2, 3, 2]  →    [2, 3, 2]]
//
// No padding is inserted. ClassificationDataset guarantees every
// sample has the same length, so each row's final LSTM state
// comes from its own last token.

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};

use crate::data::dataset::ClassificationSample;

// ─── ClassificationBatch ──────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct ClassificationBatch<B: Backend> {
    /// Token ids, shape: [batch_size, seq_len]
    pub token_ids: Tensor<B, 2, Int>,

    /// Class labels, shape: [batch_size]
    pub labels: Tensor<B, 1, Int>,
}

// ─── ClassificationBatcher ────────────────────────────────────────────────────
/// Holds the device so tensors are created where the model lives.
#[derive(Clone, Debug)]
pub struct ClassificationBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> ClassificationBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

impl<B: Backend> Batcher<ClassificationSample, ClassificationBatch<B>> for ClassificationBatcher<B> {
    fn batch(&self, items: Vec<ClassificationSample>) -> ClassificationBatch<B> {
        let batch_size = items.len();
        let seq_len    = items.first().map_or(0, ClassificationSample::seq_len);
        debug_assert!(
            items.iter().all(|s| s.seq_len() == seq_len),
            "samples in a batch must share one length"
        );

        let ids_flat: Vec<i32> = items
            .iter()
            .flat_map(|s| s.token_ids.iter().map(|&id| id as i32))
            .collect();

        let labels: Vec<i32> = items.iter().map(|s| s.label as i32).collect();

        let token_ids = Tensor::<B, 1, Int>::from_ints(
            ids_flat.as_slice(), &self.device
        ).reshape([batch_size, seq_len]);

        let labels = Tensor::<B, 1, Int>::from_ints(labels.as_slice(), &self.device);

        ClassificationBatch { token_ids, labels }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::embeddings::EmbeddingMatrix;
    use crate::ml::model::LstmClassifierConfig;
    use burn::backend::NdArray;

    type TestBackend = NdArray;

    fn ids_of(batch: &ClassificationBatch<TestBackend>) -> Vec<i64> {
        batch.token_ids.to_data().iter::<i64>().collect()
    }

    #[test]
    fn test_batch_shapes() {
        let batcher = ClassificationBatcher::<TestBackend>::new(Default::default());
        let batch = batcher.batch(vec![
            ClassificationSample::new(vec![4, 5, 6], 0),
            ClassificationSample::new(vec![2, 3, 2], 1),
        ]);
        assert_eq!(batch.token_ids.dims(), [2, 3]);
        assert_eq!(batch.labels.dims(), [2]);
        assert_eq!(ids_of(&batch), vec![4, 5, 6, 2, 3, 2]);
        let labels: Vec<i64> = batch.labels.into_data().iter::<i64>().collect();
        assert_eq!(labels, vec![0, 1]);
    }

    #[test]
    fn test_batched_row_matches_single_sample() {
        let device  = Default::default();
        let values  = (0..7 * 4).map(|v| ((v as f32) * 0.53).sin()).collect();
        let matrix  = EmbeddingMatrix::from_values(values, 7, 4).unwrap();
        let model   = LstmClassifierConfig::new(8, 3).init::<TestBackend>(&matrix, &device);
        let batcher = ClassificationBatcher::<TestBackend>::new(device);

        let first  = ClassificationSample::new(vec![4, 5, 6], 0);
        let second = ClassificationSample::new(vec![2, 3, 2], 1);

        let batched: Vec<f32> = model
            .forward(batcher.batch(vec![first, second.clone()]).token_ids)
            .into_data()
            .iter::<f32>()
            .collect();
        let alone: Vec<f32> = model
            .forward(batcher.batch(vec![second]).token_ids)
            .into_data()
            .iter::<f32>()
            .collect();

        for (b, a) in batched[3..].iter().zip(&alone) {
            assert!((b - a).abs() < 1e-5, "batched {b} vs alone {a}");
        }
    }
}

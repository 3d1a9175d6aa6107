use anyhow::{bail, Result};
use burn::data::dataset::Dataset;
use crate::domain::labeled_text::LabeledText;
use crate::domain::vocabulary::Vocabulary;

/// One encoded training sample: token ids and the class label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationSample {
    pub token_ids: Vec<usize>,
    pub label:     usize,
}

impl ClassificationSample {
    pub fn new(token_ids: Vec<usize>, label: usize) -> Self {
        Self { token_ids, label }
    }

    pub fn seq_len(&self) -> usize {
        self.token_ids.len()
    }
}

/// Validated, in-memory list of samples. Every id is below the
/// vocabulary size and every label below the number of classes,
/// so the embedding lookup and loss never index out of range.
///
/// All samples share one sequence length. Batches are never padded,
/// so the final LSTM state of every row is taken after its own last
/// token, exactly as at inference.
#[derive(Debug, Clone)]
pub struct ClassificationDataset {
    samples: Vec<ClassificationSample>,
}

impl ClassificationDataset {
    /// Encode labelled sentences through `vocab`.
    pub fn from_texts(texts: &[LabeledText], vocab: &Vocabulary, num_classes: usize) -> Result<Self> {
        let samples = texts
            .iter()
            .map(|t| ClassificationSample::new(vocab.encode(&t.text), t.label))
            .collect();
        Self::from_samples(samples, vocab.len(), num_classes)
    }

    pub fn from_samples(
        samples:     Vec<ClassificationSample>,
        vocab_size:  usize,
        num_classes: usize,
    ) -> Result<Self> {
        let seq_len = samples.first().map_or(0, ClassificationSample::seq_len);

        for (i, s) in samples.iter().enumerate() {
            if s.token_ids.is_empty() {
                bail!("Sample {i} has no tokens");
            }
            if s.seq_len() != seq_len {
                bail!(
                    "Sample {i} has {} tokens, expected {seq_len}: all samples must share one length",
                    s.seq_len()
                );
            }
            if let Some(&id) = s.token_ids.iter().find(|&&id| id >= vocab_size) {
                bail!("Sample {i} has token id {id}, vocabulary size is {vocab_size}");
            }
            if s.label >= num_classes {
                bail!("Sample {i} has label {}, expected < {num_classes}", s.label);
            }
        }
        Ok(Self { samples })
    }

    pub fn sample_count(&self) -> usize { self.samples.len() }
}

impl Dataset<ClassificationSample> for ClassificationDataset {
    fn get(&self, index: usize) -> Option<ClassificationSample> {
        self.samples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Vocabulary {
        Vocabulary::from_text("안녕 하세요 저는 챗봇 입니다 안녕 하세요")
    }

    #[test]
    fn test_demo_set_encodes_in_range() {
        let ds = ClassificationDataset::from_texts(&LabeledText::demo_set(), &vocab(), 3).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.get(0).unwrap().token_ids, vec![4, 5, 6]);
        assert_eq!(ds.get(1).unwrap().token_ids, vec![2, 3, 2]);
        assert!(ds.get(2).is_none());
    }

    #[test]
    fn test_rejects_out_of_range_id() {
        // 7 is one past the last id of a 7-entry vocabulary
        let samples = vec![ClassificationSample::new(vec![5, 6, 7], 1)];
        assert!(ClassificationDataset::from_samples(samples, 7, 3).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_label() {
        let samples = vec![ClassificationSample::new(vec![2], 3)];
        assert!(ClassificationDataset::from_samples(samples, 7, 3).is_err());
    }

    #[test]
    fn test_rejects_mixed_lengths() {
        let samples = vec![
            ClassificationSample::new(vec![4, 5, 6], 0),
            ClassificationSample::new(vec![2], 1),
        ];
        let err = ClassificationDataset::from_samples(samples, 7, 3).unwrap_err();
        assert!(err.to_string().contains("share one length"));
    }

    #[test]
    fn test_rejects_empty_sequence() {
        let texts = vec![LabeledText::new("   ", 0)];
        assert!(ClassificationDataset::from_texts(&texts, &vocab(), 3).is_err());
    }
}

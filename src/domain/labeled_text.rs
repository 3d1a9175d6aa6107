// ============================================================
// Layer 3 — LabeledText Domain Type
// ============================================================
// A raw training example: a whitespace-separated sentence and
// the integer class it belongs to.
//
// The text is kept un-encoded here; the data layer maps it to
// token ids through the Vocabulary before training.
//
// Example:
//   text:  "저는 챗봇 입니다"
//   label: 0 (positive)

use crate::domain::label::SentimentLabel;

/// One labelled sentence for classifier training.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledText {
    /// The sentence, tokens separated by whitespace
    pub text: String,

    /// Class index in `[0, num_classes)`
    pub label: usize,
}

impl LabeledText {
    pub fn new(text: impl Into<String>, label: usize) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }

    /// The two hand-written examples the demo run trains on.
    pub fn demo_set() -> Vec<Self> {
        vec![
            Self::new("저는 챗봇 입니다", SentimentLabel::Positive.index()),
            Self::new("안녕 하세요 안녕", SentimentLabel::Negative.index()),
        ]
    }
}

// ============================================================
// Layer 3 — Sentiment Labels
// ============================================================
// Human-readable names for the classifier's output classes.
//
//   0 → positive
//   1 → negative
//   2 → neutral
//
// The model itself only deals in class indices; this table is
// used when printing a prediction.

/// Name printed for a class index outside the label table
pub const UNKNOWN_LABEL: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 3] = [Self::Positive, Self::Negative, Self::Neutral];

    pub fn index(self) -> usize {
        match self {
            Self::Positive => 0,
            Self::Negative => 1,
            Self::Neutral => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }

    /// Label name for any class index, "unknown" when out of range
    pub fn name_of(index: usize) -> &'static str {
        Self::from_index(index).map_or(UNKNOWN_LABEL, Self::name)
    }
}

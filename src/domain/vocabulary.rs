// ============================================================
// Layer 3 — Vocabulary Domain Type
// ============================================================
// Maps every token in the corpus to a unique integer id.
//
// Id layout:
//   0 → <PAD>   (reserved; batches share one length and are never padded)
//   1 → <UNK>   (any token never seen while building)
//   2.. → corpus tokens, most frequent first
//
// Tokens with the same count keep the order in which they were
// first encountered, so the same corpus always yields the same ids.
//
// Example:
//   tokens: 안녕 하세요 저는 챗봇 입니다 안녕 하세요
//   ids:    <PAD>=0 <UNK>=1 안녕=2 하세요=3 저는=4 챗봇=5 입니다=6

use std::collections::HashMap;

pub const PAD_TOKEN: &str = "<PAD>";
pub const UNK_TOKEN: &str = "<UNK>";
pub const PAD_ID: usize = 0;
pub const UNK_ID: usize = 1;

/// Immutable token → id mapping with reserved padding/unknown entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    token_to_id: HashMap<String, usize>,
    /// Reverse lookup, indexed by id
    id_to_token: Vec<String>,
}

impl Vocabulary {
    /// Build a vocabulary from a sequence of tokens.
    /// An empty input yields only the two reserved entries.
    pub fn build<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // ── Step 1: Count tokens, remembering first-seen order ───────────────
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut first_seen: Vec<String> = Vec::new();

        for token in tokens {
            let token = token.as_ref();
            match counts.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(token.to_string(), 1);
                    first_seen.push(token.to_string());
                }
            }
        }

        // ── Step 2: Rank by count ────────────────────────────────────────────
        // sort_by is stable, so ties stay in first-seen order
        first_seen.sort_by(|a, b| counts[b].cmp(&counts[a]));

        // ── Step 3: Assign ids after the reserved entries ────────────────────
        let mut vocab = Self {
            token_to_id: HashMap::new(),
            id_to_token: Vec::with_capacity(first_seen.len() + 2),
        };
        vocab.insert(PAD_TOKEN);
        vocab.insert(UNK_TOKEN);
        for token in &first_seen {
            vocab.insert(token);
        }

        tracing::debug!(
            "Vocabulary built: {} entries from {} distinct tokens",
            vocab.len(),
            first_seen.len()
        );
        vocab
    }

    /// Build a vocabulary from whitespace-separated text
    pub fn from_text(text: &str) -> Self {
        Self::build(Self::tokenize(text))
    }

    /// Split text on Unicode whitespace. No normalisation is applied.
    pub fn tokenize(text: &str) -> Vec<&str> {
        text.split_whitespace().collect()
    }

    /// Tokenize `text` and map each token to its id,
    /// falling back to UNK_ID for tokens outside the vocabulary.
    pub fn encode(&self, text: &str) -> Vec<usize> {
        Self::tokenize(text)
            .into_iter()
            .map(|t| self.id_or_unk(t))
            .collect()
    }

    pub fn id_of(&self, token: &str) -> Option<usize> {
        self.token_to_id.get(token).copied()
    }

    pub fn id_or_unk(&self, token: &str) -> usize {
        self.id_of(token).unwrap_or(UNK_ID)
    }

    pub fn len(&self) -> usize {
        self.id_to_token.len()
    }

    /// Iterate `(id, token)` pairs in id order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.id_to_token
            .iter()
            .enumerate()
            .map(|(id, token)| (id, token.as_str()))
    }

    fn insert(&mut self, token: &str) {
        if self.token_to_id.contains_key(token) {
            return;
        }
        self.token_to_id.insert(token.to_string(), self.id_to_token.len());
        self.id_to_token.push(token.to_string());
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [&str; 7] = ["안녕", "하세요", "저는", "챗봇", "입니다", "안녕", "하세요"];

    #[test]
    fn test_reserved_entries_present() {
        let vocab = Vocabulary::build(SAMPLE);
        assert_eq!(vocab.id_of(PAD_TOKEN), Some(PAD_ID));
        assert_eq!(vocab.id_of(UNK_TOKEN), Some(UNK_ID));
    }

    #[test]
    fn test_one_entry_per_distinct_token() {
        let vocab = Vocabulary::build(SAMPLE);
        // 5 distinct tokens + 2 reserved
        assert_eq!(vocab.len(), 7);
    }

    #[test]
    fn test_frequent_tokens_get_lower_ids() {
        let vocab = Vocabulary::build(SAMPLE);
        let frequent = [vocab.id_of("안녕").unwrap(), vocab.id_of("하세요").unwrap()];
        for rare in ["저는", "챗봇", "입니다"] {
            let rare_id = vocab.id_of(rare).unwrap();
            assert!(frequent.iter().all(|&f| f < rare_id));
        }
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let vocab = Vocabulary::build(SAMPLE);
        assert_eq!(vocab.id_of("안녕"), Some(2));
        assert_eq!(vocab.id_of("하세요"), Some(3));
        assert_eq!(vocab.id_of("저는"), Some(4));
        assert_eq!(vocab.id_of("챗봇"), Some(5));
        assert_eq!(vocab.id_of("입니다"), Some(6));
    }

    #[test]
    fn test_ids_follow_non_increasing_frequency() {
        let tokens = ["c", "b", "a", "a", "b", "a", "d"];
        let vocab = Vocabulary::build(tokens);
        let order: Vec<&str> = vocab.iter().skip(2).map(|(_, t)| t).collect();
        assert_eq!(order, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_empty_input_has_only_reserved() {
        let vocab = Vocabulary::build(Vec::<String>::new());
        let entries: Vec<(usize, &str)> = vocab.iter().collect();
        assert_eq!(entries, vec![(PAD_ID, PAD_TOKEN), (UNK_ID, UNK_TOKEN)]);
    }

    #[test]
    fn test_reserved_token_in_corpus_is_not_duplicated() {
        let vocab = Vocabulary::build(["<UNK>", "hello", "<UNK>"]);
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.id_of(UNK_TOKEN), Some(UNK_ID));
        assert_eq!(vocab.id_of("hello"), Some(2));
    }

    #[test]
    fn test_unknown_tokens_encode_to_unk() {
        let vocab = Vocabulary::build(SAMPLE);
        assert_eq!(vocab.encode("없는 단어"), vec![UNK_ID, UNK_ID]);
        assert_eq!(vocab.encode("안녕 모름 입니다"), vec![2, UNK_ID, 6]);
    }

    #[test]
    fn test_tokenize_splits_on_any_whitespace() {
        assert_eq!(Vocabulary::tokenize("  a\tb\n c  "), vec!["a", "b", "c"]);
        assert!(Vocabulary::tokenize("   ").is_empty());
    }
}

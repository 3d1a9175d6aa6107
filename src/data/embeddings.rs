// ============================================================
// Layer 4 — Pretrained Embeddings
// ============================================================
// Loads word vectors from a JSON file and lays them out as an
// embedding matrix indexed by vocabulary id.
//
// Expected file format (one flat JSON object):
//   {
//     "안녕":   [0.12, -0.40, 0.33, ...],
//     "하세요": [0.05,  0.91, -0.27, ...]
//   }
//
// Matrix layout (row-major, vocab_size × dim):
//   row i = file vector of the token with id i, if the file has it
//         = a fresh standard-normal sample otherwise
//
// The reserved <PAD>/<UNK> rows are sampled like any other
// missing token, but only corpus tokens are reported in the
// random-init warning.
//
// Validation (fail fast, before any training starts):
//   - file must exist and parse as { string: [number] }
//   - the parsed map must pass WordVectors::from_map

use anyhow::{Context, Result};
use rand::Rng;
use rand_distr::StandardNormal;
use std::{collections::HashMap, fs, path::PathBuf};

use crate::domain::traits::EmbeddingSource;
use crate::domain::vocabulary::{Vocabulary, PAD_ID, UNK_ID};
use crate::domain::word_vectors::WordVectors;

// ─── JsonEmbeddingLoader ──────────────────────────────────────────────────────
/// Reads a JSON embeddings file once, on demand.
pub struct JsonEmbeddingLoader {
    path: PathBuf,
}

impl JsonEmbeddingLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EmbeddingSource for JsonEmbeddingLoader {
    fn load(&self) -> Result<WordVectors> {
        let json = fs::read_to_string(&self.path).with_context(|| {
            format!("Cannot read embeddings file '{}'", self.path.display())
        })?;

        let raw: HashMap<String, Vec<f32>> = serde_json::from_str(&json).with_context(|| {
            format!(
                "Embeddings file '{}' is not a JSON object of token → [number]",
                self.path.display()
            )
        })?;

        let vectors = WordVectors::from_map(raw)
            .with_context(|| format!("Invalid embeddings file '{}'", self.path.display()))?;

        tracing::info!(
            "Loaded {} word vectors (dim={}) from '{}'",
            vectors.len(),
            vectors.dim(),
            self.path.display()
        );
        Ok(vectors)
    }
}

// ─── EmbeddingMatrix ──────────────────────────────────────────────────────────
/// Row-major `rows × dim` lookup table; row i belongs to vocabulary id i.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingMatrix {
    values: Vec<f32>,
    rows: usize,
    dim: usize,
}

impl EmbeddingMatrix {
    /// Assemble the matrix for `vocab`, copying file vectors where present
    /// and sampling N(0, 1) values for every other token.
    pub fn build<R: Rng>(vocab: &Vocabulary, vectors: &WordVectors, rng: &mut R) -> Self {
        let dim = vectors.dim();

        let missing = missing_tokens(vocab, vectors);
        if !missing.is_empty() {
            tracing::warn!(
                "{} of {} tokens have no pretrained vector, using random init: {:?}",
                missing.len(),
                vocab.len(),
                missing
            );
        }

        let mut values = Vec::with_capacity(vocab.len() * dim);
        for (_, token) in vocab.iter() {
            match vectors.get(token) {
                Some(v) => values.extend_from_slice(v),
                None => values.extend((0..dim).map(|_| rng.sample::<f32, _>(StandardNormal))),
            }
        }

        Self {
            values,
            rows: vocab.len(),
            dim,
        }
    }

    /// (rows, dim)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.dim)
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }
}

/// Corpus tokens with no pretrained vector. The reserved <PAD>/<UNK>
/// rows are never in a word-vector file and are not reported.
fn missing_tokens<'a>(vocab: &'a Vocabulary, vectors: &WordVectors) -> Vec<&'a str> {
    vocab
        .iter()
        .filter(|&(id, token)| id != PAD_ID && id != UNK_ID && vectors.get(token).is_none())
        .map(|(_, token)| token)
        .collect()
}

#[cfg(test)]
impl EmbeddingMatrix {
    /// Wrap pre-laid-out values. `values.len()` must equal `rows * dim`.
    pub fn from_values(values: Vec<f32>, rows: usize, dim: usize) -> Result<Self> {
        if values.len() != rows * dim {
            anyhow::bail!(
                "Embedding matrix needs {} values for {}×{}, got {}",
                rows * dim,
                rows,
                dim,
                values.len()
            );
        }
        Ok(Self { values, rows, dim })
    }

    pub fn row(&self, id: usize) -> Option<&[f32]> {
        if id >= self.rows {
            return None;
        }
        Some(&self.values[id * self.dim..(id + 1) * self.dim])
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_json(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    fn sample_vectors() -> WordVectors {
        let mut map = HashMap::new();
        map.insert("안녕".to_string(), vec![0.5, -1.0, 2.0]);
        map.insert("챗봇".to_string(), vec![0.25, 0.0, -0.75]);
        WordVectors::from_map(map).unwrap()
    }

    #[test]
    fn test_loads_valid_file() {
        let f = write_json(r#"{"a": [1.0, 2.0], "b": [3, 4]}"#);
        let vectors = JsonEmbeddingLoader::new(f.path()).load().unwrap();
        assert_eq!(vectors.dim(), 2);
        assert_eq!(vectors.get("b"), Some(&[3.0, 4.0][..]));
    }

    #[test]
    fn test_missing_file_is_error() {
        let loader = JsonEmbeddingLoader::new("does/not/exist.json");
        assert!(loader.load().is_err());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let f = write_json(r#"{"a": "not a vector"}"#);
        assert!(JsonEmbeddingLoader::new(f.path()).load().is_err());
    }

    #[test]
    fn test_empty_object_is_error() {
        let f = write_json("{}");
        let err = JsonEmbeddingLoader::new(f.path()).load().unwrap_err();
        assert!(format!("{err:#}").contains("no entries"));
    }

    #[test]
    fn test_ragged_vectors_are_error() {
        let f = write_json(r#"{"a": [1.0, 2.0], "b": [3.0]}"#);
        assert!(JsonEmbeddingLoader::new(f.path()).load().is_err());
    }

    #[test]
    fn test_zero_length_vectors_are_error() {
        let f = write_json(r#"{"a": []}"#);
        assert!(JsonEmbeddingLoader::new(f.path()).load().is_err());
    }

    #[test]
    fn test_matrix_shape() {
        let vocab = Vocabulary::build(["안녕", "하세요", "챗봇"]);
        let mut rng = StdRng::seed_from_u64(7);
        let matrix = EmbeddingMatrix::build(&vocab, &sample_vectors(), &mut rng);
        assert_eq!(matrix.shape(), (vocab.len(), 3));
        assert_eq!(matrix.values().len(), vocab.len() * 3);
    }

    #[test]
    fn test_known_rows_copied_exactly() {
        let vocab = Vocabulary::build(["안녕", "하세요", "챗봇"]);
        let vectors = sample_vectors();
        let mut rng = StdRng::seed_from_u64(7);
        let matrix = EmbeddingMatrix::build(&vocab, &vectors, &mut rng);

        for token in ["안녕", "챗봇"] {
            let id = vocab.id_of(token).unwrap();
            assert_eq!(matrix.row(id), vectors.get(token));
        }
    }

    #[test]
    fn test_unknown_rows_are_sampled_finite() {
        let vocab = Vocabulary::build(["하세요"]);
        let mut rng = StdRng::seed_from_u64(7);
        let matrix = EmbeddingMatrix::build(&vocab, &sample_vectors(), &mut rng);
        let row = matrix.row(vocab.id_of("하세요").unwrap()).unwrap();
        assert!(row.iter().all(|v| v.is_finite()));
        assert!(row.iter().any(|&v| v != 0.0));
    }

    #[test]
    fn test_missing_tokens_skip_reserved_rows() {
        let vectors = sample_vectors();
        let vocab = Vocabulary::build(["안녕", "챗봇"]);
        assert!(missing_tokens(&vocab, &vectors).is_empty());

        let vocab = Vocabulary::build(["안녕", "하세요", "챗봇"]);
        assert_eq!(missing_tokens(&vocab, &vectors), vec!["하세요"]);
    }

    #[test]
    fn test_row_out_of_range() {
        let matrix = EmbeddingMatrix::from_values(vec![0.0; 6], 2, 3).unwrap();
        assert!(matrix.row(2).is_none());
        assert!(EmbeddingMatrix::from_values(vec![0.0; 5], 2, 3).is_err());
    }
}

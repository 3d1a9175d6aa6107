// ============================================================
// Layer 3 — WordVectors Domain Type
// ============================================================
// Pretrained token → vector mapping, as supplied by any
// EmbeddingSource. Validated once on construction:
//   - at least one entry
//   - every vector non-empty and of the same length
//
// so `dim()` is the same whichever entry it is read from.

use anyhow::{bail, Result};
use std::collections::HashMap;

/// Parsed word vectors; every vector has length `dim`.
#[derive(Debug, Clone)]
pub struct WordVectors {
    vectors: HashMap<String, Vec<f32>>,
    dim: usize,
}

impl WordVectors {
    /// Validate a raw token → vector map.
    pub fn from_map(vectors: HashMap<String, Vec<f32>>) -> Result<Self> {
        let dim = match vectors.values().next() {
            Some(v) => v.len(),
            None => bail!("Embeddings contain no entries, cannot infer dimensionality"),
        };
        if dim == 0 {
            bail!("Embedding vectors must not be empty");
        }
        if let Some((token, v)) = vectors.iter().find(|(_, v)| v.len() != dim) {
            bail!(
                "Embedding for '{}' has {} values, expected {}",
                token,
                v.len(),
                dim
            );
        }
        Ok(Self { vectors, dim })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn get(&self, token: &str) -> Option<&[f32]> {
        self.vectors.get(token).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, Vec<f32>)]) -> HashMap<String, Vec<f32>> {
        entries.iter().map(|(t, v)| (t.to_string(), v.clone())).collect()
    }

    #[test]
    fn test_valid_map() {
        let vectors = WordVectors::from_map(map(&[("a", vec![1.0, 2.0]), ("b", vec![3.0, 4.0])])).unwrap();
        assert_eq!(vectors.dim(), 2);
        assert_eq!(vectors.len(), 2);
        assert_eq!(vectors.get("a"), Some(&[1.0, 2.0][..]));
        assert!(vectors.get("c").is_none());
    }

    #[test]
    fn test_empty_map_is_error() {
        assert!(WordVectors::from_map(HashMap::new()).is_err());
    }

    #[test]
    fn test_ragged_map_is_error() {
        assert!(WordVectors::from_map(map(&[("a", vec![1.0, 2.0]), ("b", vec![3.0])])).is_err());
    }
}

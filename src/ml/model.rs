use burn::{
    module::Param,
    nn::{loss::CrossEntropyLoss, Embedding, Linear, LinearConfig, Lstm, LstmConfig},
    prelude::*,
    tensor::activation::softmax,
};

use crate::data::embeddings::EmbeddingMatrix;

// Config derive provides new(hidden_dim, num_classes), Clone and serde.
#[derive(Config, Debug)]
pub struct LstmClassifierConfig {
    pub hidden_dim:  usize,
    pub num_classes: usize,
}

impl LstmClassifierConfig {
    /// Build the classifier with its embedding layer initialised from
    /// `embeddings`. The embedding weight stays trainable.
    pub fn init<B: Backend>(&self, embeddings: &EmbeddingMatrix, device: &B::Device) -> LstmClassifier<B> {
        let (vocab_size, d_embed) = embeddings.shape();
        let weight = Tensor::<B, 2>::from_data(
            TensorData::new(embeddings.values().to_vec(), [vocab_size, d_embed]),
            device,
        );
        let embedding = Embedding { weight: Param::from_tensor(weight) };
        let lstm      = LstmConfig::new(d_embed, self.hidden_dim, true).init(device);
        let output    = LinearConfig::new(self.hidden_dim, self.num_classes).init(device);
        LstmClassifier {
            embedding, lstm, output,
            num_classes: self.num_classes,
        }
    }
}

#[derive(Module, Debug)]
pub struct LstmClassifier<B: Backend> {
    pub embedding:   Embedding<B>,
    pub lstm:        Lstm<B>,
    pub output:      Linear<B>,
    pub num_classes: usize,
}

impl<B: Backend> LstmClassifier<B> {
    /// token_ids: [batch, seq_len] → class probabilities: [batch, num_classes]
    pub fn forward(&self, token_ids: Tensor<B, 2, Int>) -> Tensor<B, 2> {
        let embedded = self.embedding.forward(token_ids); // [batch, seq_len, d_embed]

        // Only the hidden state after the last time step is kept.
        let (_, state) = self.lstm.forward(embedded, None);
        let logits = self.output.forward(state.hidden); // [batch, num_classes]

        softmax(logits, 1)
    }

    /// Cross-entropy between the predicted distribution and `labels`.
    /// The criterion is applied to the softmax output, not the raw logits.
    pub fn forward_loss(
        &self,
        token_ids: Tensor<B, 2, Int>,
        labels:    Tensor<B, 1, Int>,
        criterion: &CrossEntropyLoss<B>,
    ) -> Tensor<B, 1> {
        criterion.forward(self.forward(token_ids), labels)
    }

    /// Number of rows in the embedding table
    pub fn vocab_size(&self) -> usize {
        self.embedding.weight.val().dims()[0]
    }
}

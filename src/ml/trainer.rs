// ============================================================
// Layer 5 — Training Loop
// ============================================================
// Fixed-epoch training with Burn's DataLoader and Adam.
//
// Per epoch:
//   for each batch → forward → loss → backward → optimiser step
//   mean loss = sum of batch losses / number of batches
//
// There is no validation split, no early stopping and no
// checkpointing: the trained model is handed straight back
// to the caller.
//
// Reference: Burn Book §5, Kingma & Ba (2015) Adam

use anyhow::{bail, Result};
use burn::{
    data::dataloader::{DataLoader, DataLoaderBuilder},
    nn::loss::{CrossEntropyLoss, CrossEntropyLossConfig},
    optim::{AdamConfig, GradientsParams, Optimizer},
    prelude::*,
    tensor::backend::AutodiffBackend,
};

use crate::application::run_use_case::RunConfig;
use crate::data::{
    batcher::{ClassificationBatch, ClassificationBatcher},
    dataset::ClassificationDataset,
};
use crate::infra::metrics::{EpochMetrics, TrainingHistory};
use crate::ml::model::LstmClassifier;

/// Wire up the data loader, criterion and Adam from `cfg`, then train.
pub fn run_training<B: AutodiffBackend>(
    cfg:     &RunConfig,
    model:   LstmClassifier<B>,
    dataset: ClassificationDataset,
    device:  &B::Device,
) -> Result<(LstmClassifier<B>, TrainingHistory)> {
    if cfg.batch_size == 0 {
        bail!("batch_size must be at least 1");
    }

    // No shuffling and no worker threads: batches arrive in dataset order.
    let batcher = ClassificationBatcher::<B>::new(device.clone());
    let loader  = DataLoaderBuilder::new(batcher)
        .batch_size(cfg.batch_size)
        .build(dataset);

    let criterion = CrossEntropyLossConfig::new().init(device);
    let mut optim = adam_config().init::<B, LstmClassifier<B>>();

    tracing::info!(
        "Training for {} epochs (batch_size={}, lr={})",
        cfg.epochs, cfg.batch_size, cfg.lr
    );
    train_model(model, loader.as_ref(), &criterion, &mut optim, cfg.lr, cfg.epochs)
}

// ── Adam optimiser ────────────────────────────────────────────────────────────
// m = β1*m + (1-β1)*g        (mean)
// v = β2*v + (1-β2)*g²       (variance)
// θ = θ - lr * m / (√v + ε)  (update)
//
// β1 = 0.9, β2 = 0.999, ε = 1e-8
fn adam_config() -> AdamConfig {
    AdamConfig::new().with_epsilon(1e-8)
}

/// Run `num_epochs` passes over `loader`, one optimiser step per batch.
/// Returns the trained model and exactly `num_epochs` epoch records.
pub fn train_model<B, O>(
    mut model:  LstmClassifier<B>,
    loader:     &dyn DataLoader<ClassificationBatch<B>>,
    criterion:  &CrossEntropyLoss<B>,
    optim:      &mut O,
    lr:         f64,
    num_epochs: usize,
) -> Result<(LstmClassifier<B>, TrainingHistory)>
where
    B: AutodiffBackend,
    O: Optimizer<LstmClassifier<B>, B>,
{
    let mut history = TrainingHistory::new();

    for epoch in 1..=num_epochs {
        let mut loss_sum = 0.0f64;
        let mut batches  = 0usize;

        for batch in loader.iter() {
            let loss = model.forward_loss(batch.token_ids, batch.labels, criterion);

            loss_sum += loss.clone().into_scalar().elem::<f64>();
            batches  += 1;

            // Backward pass + optimiser update
            let grads = loss.backward();
            let grads = GradientsParams::from_grads(grads, &model);
            model = optim.step(lr, model, grads);
        }

        if batches == 0 {
            bail!("Training data produced no batches");
        }

        let metrics = EpochMetrics::new(epoch, num_epochs, loss_sum / batches as f64);
        println!("{metrics}");
        history.record(metrics);
    }

    tracing::info!("Training complete after {} epochs", history.len());
    Ok((model, history))
}

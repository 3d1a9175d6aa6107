// ============================================================
// Layer 6 — Training Metrics
// ============================================================
// Records the mean training loss of every epoch.
//
// One EpochMetrics is produced per epoch, so a run of N epochs
// always yields exactly N entries in the TrainingHistory.
//
// Display format (one line per epoch on stdout):
//   Epoch 1/5, Loss: 1.0986
//   Epoch 2/5, Loss: 1.0912
//
// How to read it:
//   - Loss should drift down as the model fits the examples
//   - The criterion sees probabilities, so the loss cannot
//     fall all the way to zero

use std::fmt;

/// Loss summary for a single training epoch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochMetrics {
    /// The epoch number (starts at 1)
    pub epoch: usize,

    /// Total epochs in the run
    pub num_epochs: usize,

    /// Mean cross-entropy loss over all batches of the epoch
    pub loss: f64,
}

impl EpochMetrics {
    pub fn new(epoch: usize, num_epochs: usize, loss: f64) -> Self {
        Self { epoch, num_epochs, loss }
    }

    /// Returns true if this epoch's loss beats `best_loss`
    pub fn is_improvement(&self, best_loss: f64) -> bool {
        self.loss < best_loss
    }
}

impl fmt::Display for EpochMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Epoch {}/{}, Loss: {:.4}", self.epoch, self.num_epochs, self.loss)
    }
}

/// Every epoch's metrics, in order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingHistory {
    epochs: Vec<EpochMetrics>,
}

impl TrainingHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, metrics: EpochMetrics) {
        if let Some(best) = self.best_loss() {
            if metrics.is_improvement(best) {
                tracing::debug!("Epoch {} improved loss {:.4} → {:.4}", metrics.epoch, best, metrics.loss);
            }
        }
        self.epochs.push(metrics);
    }

    pub fn len(&self) -> usize {
        self.epochs.len()
    }

    pub fn last(&self) -> Option<&EpochMetrics> {
        self.epochs.last()
    }

    /// Lowest loss seen so far
    pub fn best_loss(&self) -> Option<f64> {
        self.epochs.iter().map(|m| m.loss).reduce(f64::min)
    }
}

#[cfg(test)]
impl TrainingHistory {
    pub fn epochs(&self) -> &[EpochMetrics] {
        &self.epochs
    }

    pub fn losses(&self) -> Vec<f64> {
        self.epochs.iter().map(|m| m.loss).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.epochs.is_empty()
    }
}

// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to any one
// business layer:
//
//   metrics.rs : Per-epoch loss records
//                The trainer produces one EpochMetrics per
//                epoch; the history is returned to the caller
//                and each line is echoed to stdout.
//
// Nothing here touches the disk: a run lives and dies with
// the process.

/// Epoch metrics and training history
pub mod metrics;

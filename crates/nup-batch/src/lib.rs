//! Batch orchestration for layout computation
//!
//! Bridges a geometry-resolving collaborator and the layout optimizers in
//! `nup-layout`: a batch run resolves every document's effective page
//! dimensions, computes its layout (plain or even-column), and aggregates
//! per-document successes and failures into one report, with cooperative
//! cancellation and channel-based progress reporting.

mod orchestrator;
mod types;

pub use orchestrator::{BatchRequest, run_batch};
pub use types::*;

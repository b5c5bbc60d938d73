//! Batch layout runs over many documents
//!
//! Each document's computation is independent: resolve its geometry, compute
//! the layout, optionally compute the padding plan. Outcomes are folded into
//! a single report; a failure for one document never aborts the batch.

use std::sync::Arc;

use nup_layout::{
    BlankPageRequest, MediumConfig, PaginationMode, compute_layout, compute_layout_even_columns,
};
use tokio::sync::mpsc;

use crate::types::*;

/// What a batch run computes for every document
#[derive(Debug, Clone)]
pub struct BatchRequest {
    pub config: MediumConfig,
    /// Force an even column count (duplicate production)
    pub even_columns: bool,
    /// When set, also compute the blank-page padding plan per document
    pub pagination_mode: Option<PaginationMode>,
    pub documents: Vec<DocumentId>,
}

/// Run the layout computation for every document in the request.
///
/// The medium configuration is validated once up front. Documents are then
/// processed in order on the blocking pool; the cancellation flag is checked
/// between documents, and a progress update is emitted after each one.
/// Dropped receivers are tolerated, so a caller that only wants the final
/// report can discard the update channel.
pub async fn run_batch<S>(
    source: Arc<S>,
    request: BatchRequest,
    cancel: CancelFlag,
    updates: mpsc::UnboundedSender<BatchUpdate>,
) -> Result<BatchReport, BatchError>
where
    S: GeometrySource + 'static,
{
    request.config.validate()?;

    log::info!(
        "Starting batch layout run over {} documents",
        request.documents.len()
    );

    let report =
        tokio::task::spawn_blocking(move || run_batch_sync(source, request, cancel, updates))
            .await?;

    log::info!(
        "Batch layout run finished: {} completed, {} failed",
        report.completed.len(),
        report.failed.len()
    );
    Ok(report)
}

fn run_batch_sync<S: GeometrySource>(
    source: Arc<S>,
    request: BatchRequest,
    cancel: CancelFlag,
    updates: mpsc::UnboundedSender<BatchUpdate>,
) -> BatchReport {
    let total = request.documents.len();

    request
        .documents
        .iter()
        .enumerate()
        .fold(BatchReport::default(), |mut report, (index, &id)| {
            if report.cancelled {
                return report;
            }
            if cancel.is_cancelled() {
                log::info!("Batch cancelled after {} of {} documents", index, total);
                let _ = updates.send(BatchUpdate::Cancelled);
                report.cancelled = true;
                return report;
            }

            match process_document(source.as_ref(), &request, id) {
                Ok(layout) => {
                    let _ = updates.send(BatchUpdate::DocumentCompleted { id });
                    report.completed.push(layout);
                }
                Err(err) => {
                    log::debug!("Document {:?} failed: {}", id, err);
                    let _ = updates.send(BatchUpdate::DocumentFailed {
                        id,
                        message: err.to_string(),
                    });
                    report.failed.push((id, err));
                }
            }

            let _ = updates.send(BatchUpdate::Progress {
                operation: "layout".to_string(),
                current: index + 1,
                total,
            });
            report
        })
}

fn process_document<S: GeometrySource>(
    source: &S,
    request: &BatchRequest,
    id: DocumentId,
) -> Result<DocumentLayout, nup_layout::LayoutError> {
    let resolved = source.resolve(id)?;

    let layout = if request.even_columns {
        compute_layout_even_columns(resolved.page, &request.config)?
    } else {
        compute_layout(resolved.page, &request.config)?
    };

    let padding = match request.pagination_mode {
        Some(mode) => Some(
            BlankPageRequest {
                current_page_count: resolved.page_count,
                layout_quantity: layout.quantity,
                mode,
            }
            .calculate()?,
        ),
        None => None,
    };

    Ok(DocumentLayout {
        id,
        page_count: resolved.page_count,
        layout,
        padding,
    })
}

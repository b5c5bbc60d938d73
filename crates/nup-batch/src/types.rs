use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use nup_layout::{BlankPageResult, LayoutError, LayoutResult, PageGeometry};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

/// Handle to a document known to the geometry source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(pub u64);

/// Effective geometry for one document, as produced by the resolver
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedDocument {
    pub page: PageGeometry,
    pub page_count: u32,
}

/// Produces effective page geometry for documents.
///
/// Implementations typically read document metadata and fold any intrinsic
/// page rotation into upright millimeter dimensions. This is the only
/// blocking or fallible I/O a batch run touches; it is invoked from the
/// blocking pool.
pub trait GeometrySource: Send + Sync {
    fn resolve(&self, id: DocumentId) -> Result<ResolvedDocument, LayoutError>;
}

/// Updates sent from a batch run to its observer
#[derive(Debug, Clone)]
pub enum BatchUpdate {
    Progress {
        operation: String,
        current: usize,
        total: usize,
    },
    DocumentCompleted {
        id: DocumentId,
    },
    DocumentFailed {
        id: DocumentId,
        message: String,
    },
    Cancelled,
}

/// Layout outcome for one document
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLayout {
    pub id: DocumentId,
    pub page_count: u32,
    pub layout: LayoutResult,
    /// Padding plan, present when the request asked for one
    pub padding: Option<BlankPageResult>,
}

/// Aggregated outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    pub completed: Vec<DocumentLayout>,
    pub failed: Vec<(DocumentId, LayoutError)>,
    /// True when the run stopped early on the cancellation flag
    pub cancelled: bool,
}

/// Cooperative cancellation flag, checked between documents only
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

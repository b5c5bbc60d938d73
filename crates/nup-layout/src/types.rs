use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Invalid page geometry: {0}")]
    InvalidPageGeometry(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Effective page dimensions in millimeters.
///
/// Produced by the geometry resolver with any intrinsic page rotation already
/// folded in, so these are the upright dimensions of the unrotated candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageGeometry {
    pub width_mm: f64,
    pub height_mm: f64,
}

impl PageGeometry {
    pub fn new(width_mm: f64, height_mm: f64) -> Self {
        Self {
            width_mm,
            height_mm,
        }
    }

    /// Area of a single page copy in square millimeters
    pub fn area(&self) -> f64 {
        self.width_mm * self.height_mm
    }
}

/// Outcome of a layout search: the chosen grid, the orientation decision, and
/// the utilization figures for the chosen candidate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutResult {
    /// Number of grid rows
    pub rows: u32,
    /// Number of grid columns
    pub columns: u32,
    /// Copies placed per sheet (rows * columns)
    pub quantity: u32,
    /// Width of one grid cell in millimeters
    pub cell_width_mm: f64,
    /// Height of one grid cell in millimeters
    pub cell_height_mm: f64,
    /// Whether every copy is rotated 90 degrees
    pub rotated: bool,
    /// Rotation applied to each copy: 0 or 270 degrees
    pub rotation_angle_deg: u32,
    /// Space utilization percentage. The formula differs between the plain
    /// and even-column flat-sheet paths; see the optimizer docs.
    pub space_utilization_pct: f64,
    /// Fraction of a roll's usable width covered by whole columns.
    /// `None` for flat-sheet layouts.
    pub width_utilization_pct: Option<f64>,
    /// True when at least one copy fits
    pub printable: bool,
    /// Human-readable summary of the layout
    pub description: String,
}

/// Pagination policy for documents whose page count is not a multiple of the
/// layout quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaginationMode {
    /// Pad with blank pages up to a multiple of the layout quantity,
    /// spreading the padding evenly through the document
    Folding,
    /// Leave the page count unchanged and allow a partially filled final
    /// sheet
    Contiguous,
}

/// Inputs for a blank-page padding calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlankPageRequest {
    pub current_page_count: u32,
    pub layout_quantity: u32,
    pub mode: PaginationMode,
}

/// Padding plan for one document
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlankPageResult {
    /// Blank pages that must be added
    pub blank_pages_needed: u32,
    /// Page count after padding
    pub total_page_count: u32,
    /// 1-based page positions after which each blank page is inserted
    pub insertion_positions: Vec<u32>,
    /// Sheets required to print the padded document
    pub required_sheets: u32,
}

//! Layout search for repeating one page across a print medium
//!
//! Two optimizers cover the two media: bounded flat sheets and fixed-width
//! rolls. Each evaluates the page as supplied and rotated 90 degrees, then
//! picks an orientation by the medium's decision rules. The even-column
//! variants constrain the grid to an even column count for duplicate
//! (two-up) production runs.

mod flat;
mod roll;

pub use flat::{compute_flat_sheet_layout, compute_flat_sheet_layout_even_columns};
pub use roll::{compute_roll_material_layout, compute_roll_material_layout_even_columns};

use crate::options::MediumConfig;
use crate::types::{LayoutError, LayoutResult, PageGeometry, Result};

/// Tolerance in percentage points under which two orientations count as tied
/// on width utilization.
pub(crate) const WIDTH_UTILIZATION_TIE_PCT: f64 = 0.1;

/// Smallest column count an even-column layout may produce
pub(crate) const MIN_EVEN_COLUMNS: u32 = 2;

/// Compute the layout for `page` on the given medium.
pub fn compute_layout(page: PageGeometry, config: &MediumConfig) -> Result<LayoutResult> {
    match config {
        MediumConfig::FlatSheet(config) => compute_flat_sheet_layout(page, config),
        MediumConfig::Roll(config) => compute_roll_material_layout(page, config),
    }
}

/// Compute an even-column layout for `page` on the given medium.
pub fn compute_layout_even_columns(page: PageGeometry, config: &MediumConfig) -> Result<LayoutResult> {
    match config {
        MediumConfig::FlatSheet(config) => compute_flat_sheet_layout_even_columns(page, config),
        MediumConfig::Roll(config) => compute_roll_material_layout_even_columns(page, config),
    }
}

/// Reject non-positive page dimensions before any geometry is computed.
pub(crate) fn ensure_page(page: &PageGeometry) -> Result<()> {
    if page.width_mm <= 0.0 || page.height_mm <= 0.0 {
        return Err(LayoutError::InvalidPageGeometry(format!(
            "Page dimensions must be positive, got {} x {} mm",
            page.width_mm, page.height_mm
        )));
    }
    Ok(())
}

/// Force a column count down to the nearest even number, minimum 2.
/// Zero stays zero; the final clamp in each even-column path raises it.
pub(crate) fn force_even_columns(columns: u32) -> u32 {
    if columns % 2 == 0 {
        columns
    } else {
        (columns - 1).max(MIN_EVEN_COLUMNS)
    }
}

/// Clamp `value` to `cap` when a cap is set (0 = unbounded).
pub(crate) fn apply_cap(value: u32, cap: u32) -> u32 {
    if cap > 0 { value.min(cap) } else { value }
}

/// One-line summary of a chosen grid
pub(crate) fn describe_grid(rows: u32, columns: u32, quantity: u32, rotated: bool) -> String {
    if rotated {
        format!(
            "{} columns × {} rows, {} copies per sheet, rotated 270°",
            columns, rows, quantity
        )
    } else {
        format!(
            "{} columns × {} rows, {} copies per sheet",
            columns, rows, quantity
        )
    }
}

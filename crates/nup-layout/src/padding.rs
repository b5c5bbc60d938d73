//! Blank-page padding arithmetic
//!
//! When a document's page count is not a multiple of the layout quantity,
//! the Folding policy pads it with blank pages spread evenly through the
//! document; the Contiguous policy leaves the remainder on a partially
//! filled final sheet.

use crate::types::{BlankPageRequest, BlankPageResult, LayoutError, PaginationMode, Result};

/// Number of blank pages required to bring `current_page_count` up to a
/// multiple of `layout_quantity`. Returns 0 when `layout_quantity` is 0.
pub fn blank_pages_needed(current_page_count: u32, layout_quantity: u32) -> u32 {
    if layout_quantity == 0 {
        return 0;
    }
    let remainder = current_page_count % layout_quantity;
    if remainder == 0 {
        0
    } else {
        layout_quantity - remainder
    }
}

/// Full padding plan for a document, including where each blank page is
/// inserted under the Folding policy.
pub fn calculate_blank_page_insertion(
    current_page_count: u32,
    layout_quantity: u32,
    mode: PaginationMode,
) -> Result<BlankPageResult> {
    if layout_quantity == 0 {
        return Err(LayoutError::InvalidConfiguration(
            "Layout quantity must be positive".to_string(),
        ));
    }

    let remainder = current_page_count % layout_quantity;
    if remainder == 0 {
        return Ok(BlankPageResult {
            blank_pages_needed: 0,
            total_page_count: current_page_count,
            insertion_positions: Vec::new(),
            required_sheets: current_page_count.div_ceil(layout_quantity),
        });
    }

    match mode {
        PaginationMode::Folding => {
            let blank_pages_needed = layout_quantity - remainder;
            let total_page_count = current_page_count + blank_pages_needed;
            // Integer spread: every blank lands after a whole-page interval
            let interval = current_page_count / (blank_pages_needed + 1);
            let insertion_positions = (1..=blank_pages_needed).map(|i| i * interval).collect();
            Ok(BlankPageResult {
                blank_pages_needed,
                total_page_count,
                insertion_positions,
                required_sheets: total_page_count.div_ceil(layout_quantity),
            })
        }
        PaginationMode::Contiguous => Ok(BlankPageResult {
            blank_pages_needed: 0,
            total_page_count: current_page_count,
            insertion_positions: Vec::new(),
            required_sheets: current_page_count.div_ceil(layout_quantity),
        }),
    }
}

impl BlankPageRequest {
    /// Run the padding calculation these inputs describe.
    pub fn calculate(&self) -> Result<BlankPageResult> {
        calculate_blank_page_insertion(self.current_page_count, self.layout_quantity, self.mode)
    }
}

//! Flat-sheet layout search
//!
//! A bounded sheet is tried in both orientations: the page as supplied and
//! the page rotated 90 degrees. Whichever orientation places more copies
//! wins; ties keep the unrotated page. Row and column caps are applied only
//! after the orientation decision, so a cap never flips the winner.

use crate::options::FlatSheetConfig;
use crate::types::{LayoutResult, PageGeometry, Result};

use super::{MIN_EVEN_COLUMNS, apply_cap, describe_grid, ensure_page, force_even_columns};

/// One orientation candidate on a bounded sheet
#[derive(Debug, Clone, Copy)]
struct Candidate {
    columns: u32,
    rows: u32,
    /// Cell dimensions: the page dimensions, swapped when rotated
    cell_width_mm: f64,
    cell_height_mm: f64,
    rotated: bool,
}

impl Candidate {
    fn new(page: PageGeometry, printable_width: f64, printable_height: f64, rotated: bool) -> Self {
        let (w, h) = if rotated {
            (page.height_mm, page.width_mm)
        } else {
            (page.width_mm, page.height_mm)
        };
        Self {
            columns: (printable_width / w).floor() as u32,
            rows: (printable_height / h).floor() as u32,
            cell_width_mm: w,
            cell_height_mm: h,
            rotated,
        }
    }

    fn quantity(&self) -> u32 {
        self.columns * self.rows
    }
}

/// Compute how many copies of `page` fit on a bounded sheet.
///
/// Space utilization on this path is reported as usable area over the total
/// page area consumed, so it can exceed 100 when the caps shrink the grid.
pub fn compute_flat_sheet_layout(
    page: PageGeometry,
    config: &FlatSheetConfig,
) -> Result<LayoutResult> {
    config.validate()?;
    ensure_page(&page)?;

    let printable_width = config.printable_width();
    let printable_height = config.printable_height();

    let upright = Candidate::new(page, printable_width, printable_height, false);
    let turned = Candidate::new(page, printable_width, printable_height, true);

    // Rotation must win strictly; a tie keeps the unrotated page
    let chosen = if turned.quantity() > upright.quantity() {
        turned
    } else {
        upright
    };

    let rows = apply_cap(chosen.rows, config.row_cap).max(1);
    let columns = apply_cap(chosen.columns, config.column_cap).max(1);
    let quantity = rows * columns;

    let usable_area = printable_width * printable_height;
    let space_utilization_pct = usable_area / (quantity as f64 * page.area()) * 100.0;

    Ok(finish(rows, columns, quantity, &chosen, space_utilization_pct))
}

/// Even-column flat-sheet variant, for duplicate (two-up) production runs.
///
/// Each candidate's column count is forced down to the nearest even number
/// before the orientation decision, so the comparison reflects the quantity
/// an even grid can actually deliver. An odd user column cap is decremented.
///
/// Space utilization on this path is reported as total page area over usable
/// area, the inverse of [`compute_flat_sheet_layout`].
pub fn compute_flat_sheet_layout_even_columns(
    page: PageGeometry,
    config: &FlatSheetConfig,
) -> Result<LayoutResult> {
    config.validate()?;
    ensure_page(&page)?;

    let printable_width = config.printable_width();
    let printable_height = config.printable_height();

    let mut upright = Candidate::new(page, printable_width, printable_height, false);
    let mut turned = Candidate::new(page, printable_width, printable_height, true);
    upright.columns = force_even_columns(upright.columns);
    turned.columns = force_even_columns(turned.columns);

    let chosen = if turned.quantity() > upright.quantity() {
        turned
    } else {
        upright
    };

    let rows = apply_cap(chosen.rows, config.row_cap).max(1);
    let mut columns = chosen.columns;
    if config.column_cap > 0 {
        columns = columns.min(config.column_cap - config.column_cap % 2);
    }
    let columns = columns.max(MIN_EVEN_COLUMNS);
    let quantity = rows * columns;

    let usable_area = printable_width * printable_height;
    let space_utilization_pct = (quantity as f64 * page.area()) / usable_area * 100.0;

    Ok(finish(rows, columns, quantity, &chosen, space_utilization_pct))
}

fn finish(
    rows: u32,
    columns: u32,
    quantity: u32,
    chosen: &Candidate,
    space_utilization_pct: f64,
) -> LayoutResult {
    LayoutResult {
        rows,
        columns,
        quantity,
        cell_width_mm: chosen.cell_width_mm,
        cell_height_mm: chosen.cell_height_mm,
        rotated: chosen.rotated,
        rotation_angle_deg: if chosen.rotated { 270 } else { 0 },
        space_utilization_pct,
        width_utilization_pct: None,
        printable: quantity > 0,
        description: describe_grid(rows, columns, quantity, chosen.rotated),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn printable_190x277() -> FlatSheetConfig {
        FlatSheetConfig {
            paper_width_mm: 210.0,
            paper_height_mm: 297.0,
            margin_top_mm: 10.0,
            margin_bottom_mm: 10.0,
            margin_left_mm: 10.0,
            margin_right_mm: 10.0,
            row_cap: 0,
            column_cap: 0,
        }
    }

    #[test]
    fn test_unrotated_wins() {
        // Unrotated: 2 cols x 5 rows = 10; rotated: 3 cols x 3 rows = 9
        let result =
            compute_flat_sheet_layout(PageGeometry::new(90.0, 50.0), &printable_190x277()).unwrap();

        assert!(!result.rotated);
        assert_eq!(result.rotation_angle_deg, 0);
        assert_eq!(result.columns, 2);
        assert_eq!(result.rows, 5);
        assert_eq!(result.quantity, 10);
        assert_eq!(result.cell_width_mm, 90.0);
        assert_eq!(result.cell_height_mm, 50.0);
        assert!(result.printable);
    }

    #[test]
    fn test_rotated_wins() {
        // Unrotated: 3 cols x 3 rows = 9; rotated: 2 cols x 5 rows = 10
        let result =
            compute_flat_sheet_layout(PageGeometry::new(50.0, 90.0), &printable_190x277()).unwrap();

        assert!(result.rotated);
        assert_eq!(result.rotation_angle_deg, 270);
        assert_eq!(result.columns, 2);
        assert_eq!(result.rows, 5);
        assert_eq!(result.quantity, 10);
        // Cell dimensions are the swapped page dimensions
        assert_eq!(result.cell_width_mm, 90.0);
        assert_eq!(result.cell_height_mm, 50.0);
    }

    #[test]
    fn test_tie_keeps_unrotated() {
        // A square page fits identically in both orientations
        let result =
            compute_flat_sheet_layout(PageGeometry::new(60.0, 60.0), &printable_190x277()).unwrap();

        assert!(!result.rotated);
        assert_eq!(result.rotation_angle_deg, 0);
    }

    #[test]
    fn test_caps_shrink_after_selection() {
        let mut config = printable_190x277();
        config.row_cap = 3;
        config.column_cap = 1;

        let result = compute_flat_sheet_layout(PageGeometry::new(90.0, 50.0), &config).unwrap();

        assert_eq!(result.rows, 3);
        assert_eq!(result.columns, 1);
        assert_eq!(result.quantity, 3);
    }

    #[test]
    fn test_oversized_page_clamps_to_single_cell() {
        // Page larger than the printable area in both orientations
        let result =
            compute_flat_sheet_layout(PageGeometry::new(400.0, 500.0), &printable_190x277())
                .unwrap();

        assert_eq!(result.rows, 1);
        assert_eq!(result.columns, 1);
        assert_eq!(result.quantity, 1);
        assert!(result.printable);
    }

    #[test]
    fn test_space_utilization_plain_formula() {
        // usable 190 x 277 = 52630; 10 copies of 90 x 50 = 45000
        let result =
            compute_flat_sheet_layout(PageGeometry::new(90.0, 50.0), &printable_190x277()).unwrap();

        let expected = 52630.0 / 45000.0 * 100.0;
        assert!((result.space_utilization_pct - expected).abs() < 1e-9);
        assert_eq!(result.width_utilization_pct, None);
    }

    #[test]
    fn test_even_columns_keeps_even_winner() {
        // Unrotated: 2 cols (already even) x 5 rows = 10
        // Rotated: 3 -> 2 cols x 3 rows = 6
        let result =
            compute_flat_sheet_layout_even_columns(PageGeometry::new(90.0, 50.0), &printable_190x277())
                .unwrap();

        assert!(!result.rotated);
        assert_eq!(result.columns, 2);
        assert_eq!(result.rows, 5);
        assert_eq!(result.quantity, 10);
    }

    #[test]
    fn test_even_columns_forcing_flips_decision() {
        // Unrotated: 3 -> 2 cols x 3 rows = 6; rotated: 2 cols x 5 rows = 10
        let result =
            compute_flat_sheet_layout_even_columns(PageGeometry::new(50.0, 90.0), &printable_190x277())
                .unwrap();

        assert!(result.rotated);
        assert_eq!(result.columns, 2);
        assert_eq!(result.rows, 5);
        assert_eq!(result.quantity, 10);
    }

    #[test]
    fn test_even_columns_minimum_two() {
        // Only one column fits, but the even grid never drops below 2
        let result =
            compute_flat_sheet_layout_even_columns(PageGeometry::new(150.0, 50.0), &printable_190x277())
                .unwrap();

        assert_eq!(result.columns, 2);
        assert_eq!(result.columns % 2, 0);
    }

    #[test]
    fn test_even_columns_odd_cap_decremented() {
        let mut config = printable_190x277();
        config.column_cap = 5;

        // Page narrow enough for 6+ columns unrotated
        let result =
            compute_flat_sheet_layout_even_columns(PageGeometry::new(25.0, 250.0), &config).unwrap();

        assert_eq!(result.columns, 4);
        assert_eq!(result.columns % 2, 0);
    }

    #[test]
    fn test_even_columns_inverse_utilization_formula() {
        // 10 copies of 90 x 50 = 45000 over usable 52630
        let result =
            compute_flat_sheet_layout_even_columns(PageGeometry::new(90.0, 50.0), &printable_190x277())
                .unwrap();

        let expected = 45000.0 / 52630.0 * 100.0;
        assert!((result.space_utilization_pct - expected).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_margins_rejected() {
        let mut config = printable_190x277();
        config.margin_left_mm = 120.0;
        config.margin_right_mm = 120.0;

        let result = compute_flat_sheet_layout(PageGeometry::new(90.0, 50.0), &config);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_page_rejected() {
        let result = compute_flat_sheet_layout(PageGeometry::new(0.0, 50.0), &printable_190x277());
        assert!(result.is_err());
    }
}

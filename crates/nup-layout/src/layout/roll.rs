//! Roll-material layout search
//!
//! A roll has a fixed width and an effectively unbounded length that is cut
//! to a minimum. Columns are chosen per orientation across the usable width
//! for a single conceptual row; the row count then follows from the minimum
//! cut length. The two variants rank orientations differently: the plain
//! path puts width utilization first, the even-column path puts the column
//! count first.

use crate::options::RollMaterialConfig;
use crate::types::{LayoutResult, PageGeometry, Result};

use super::{
    MIN_EVEN_COLUMNS, WIDTH_UTILIZATION_TIE_PCT, apply_cap, describe_grid, ensure_page,
    force_even_columns,
};

/// One orientation candidate across the roll width
#[derive(Debug, Clone, Copy)]
struct RowCandidate {
    columns: u32,
    /// Width one placed copy occupies across the roll
    placed_width_mm: f64,
    /// Length one row of copies adds along the roll
    row_height_mm: f64,
    rotated: bool,
}

impl RowCandidate {
    fn new(page: PageGeometry, usable_width: f64, rotated: bool) -> Self {
        let (w, h) = if rotated {
            (page.height_mm, page.width_mm)
        } else {
            (page.width_mm, page.height_mm)
        };
        Self {
            columns: (usable_width / w).floor() as u32,
            placed_width_mm: w,
            row_height_mm: h,
            rotated,
        }
    }

    /// Fraction of the usable width covered by whole columns, as a
    /// percentage
    fn width_utilization(&self, usable_width: f64) -> f64 {
        self.columns as f64 * self.placed_width_mm / usable_width * 100.0
    }

    /// Used area over total page area when the usable width is subdivided
    /// equally across the columns
    fn space_utilization(&self, usable_width: f64, page: PageGeometry) -> f64 {
        if self.columns == 0 {
            return 0.0;
        }
        let cell_width = usable_width / self.columns as f64;
        let used_area = self.columns as f64 * cell_width * self.row_height_mm;
        used_area / (self.columns as f64 * page.area()) * 100.0
    }
}

/// Compute how many copies of `page` fit on a fixed-width roll.
///
/// Orientation precedence: larger width utilization (differences under 0.1
/// percentage points count as a tie), then more columns, then larger space
/// utilization.
pub fn compute_roll_material_layout(
    page: PageGeometry,
    config: &RollMaterialConfig,
) -> Result<LayoutResult> {
    config.validate()?;
    ensure_page(&page)?;

    let usable_width = config.usable_width();
    let upright = RowCandidate::new(page, usable_width, false);
    let turned = RowCandidate::new(page, usable_width, true);

    let chosen = select_plain(upright, turned, usable_width, page);
    let columns = apply_cap(chosen.columns, config.column_cap).max(1);

    Ok(finish(chosen, columns, page, config))
}

/// Even-column roll variant, for duplicate (two-up) production runs.
///
/// Column counts are forced even before the orientation decision, and the
/// precedence differs from the plain path: more columns wins outright, then
/// width utilization (same 0.1-point tolerance), then space utilization.
/// An odd user column cap is decremented.
pub fn compute_roll_material_layout_even_columns(
    page: PageGeometry,
    config: &RollMaterialConfig,
) -> Result<LayoutResult> {
    config.validate()?;
    ensure_page(&page)?;

    let usable_width = config.usable_width();
    let mut upright = RowCandidate::new(page, usable_width, false);
    let mut turned = RowCandidate::new(page, usable_width, true);
    upright.columns = force_even_columns(upright.columns);
    turned.columns = force_even_columns(turned.columns);

    let chosen = select_even(upright, turned, usable_width, page);

    let mut columns = chosen.columns;
    if config.column_cap > 0 {
        columns = columns.min(config.column_cap - config.column_cap % 2);
    }
    let columns = columns.max(MIN_EVEN_COLUMNS);

    Ok(finish(chosen, columns, page, config))
}

fn select_plain(
    upright: RowCandidate,
    turned: RowCandidate,
    usable_width: f64,
    page: PageGeometry,
) -> RowCandidate {
    let upright_width = upright.width_utilization(usable_width);
    let turned_width = turned.width_utilization(usable_width);
    if (upright_width - turned_width).abs() >= WIDTH_UTILIZATION_TIE_PCT {
        return if turned_width > upright_width {
            turned
        } else {
            upright
        };
    }
    if upright.columns != turned.columns {
        return if turned.columns > upright.columns {
            turned
        } else {
            upright
        };
    }
    if turned.space_utilization(usable_width, page) > upright.space_utilization(usable_width, page)
    {
        turned
    } else {
        upright
    }
}

fn select_even(
    upright: RowCandidate,
    turned: RowCandidate,
    usable_width: f64,
    page: PageGeometry,
) -> RowCandidate {
    if upright.columns != turned.columns {
        return if turned.columns > upright.columns {
            turned
        } else {
            upright
        };
    }
    let upright_width = upright.width_utilization(usable_width);
    let turned_width = turned.width_utilization(usable_width);
    if (upright_width - turned_width).abs() >= WIDTH_UTILIZATION_TIE_PCT {
        return if turned_width > upright_width {
            turned
        } else {
            upright
        };
    }
    if turned.space_utilization(usable_width, page) > upright.space_utilization(usable_width, page)
    {
        turned
    } else {
        upright
    }
}

fn finish(
    chosen: RowCandidate,
    columns: u32,
    page: PageGeometry,
    config: &RollMaterialConfig,
) -> LayoutResult {
    let usable_width = config.usable_width();

    // Each row adds the page dimension perpendicular to the roll width,
    // plus the top and bottom margins of the row segment
    let cell_height = chosen.row_height_mm;
    let single_row_length = config.margin_top_mm + cell_height + config.margin_bottom_mm;
    let rows = ((config.min_length_mm / single_row_length).ceil() as u32).max(1);

    let quantity = columns * rows;
    let cell_width = usable_width / columns as f64;

    // Final utilization is recomputed over the full material footprint
    let material_length = config.margin_top_mm + rows as f64 * cell_height + config.margin_bottom_mm;
    let material_area = config.fixed_width_mm * material_length;
    let total_page_area = quantity as f64 * page.area();
    let space_utilization_pct = total_page_area / material_area * 100.0;

    let used_width = columns as f64 * chosen.placed_width_mm;
    let width_utilization_pct = used_width / usable_width * 100.0;

    LayoutResult {
        rows,
        columns,
        quantity,
        cell_width_mm: cell_width,
        cell_height_mm: cell_height,
        rotated: chosen.rotated,
        rotation_angle_deg: if chosen.rotated { 270 } else { 0 },
        space_utilization_pct,
        width_utilization_pct: Some(width_utilization_pct),
        printable: quantity > 0,
        description: describe_grid(rows, columns, quantity, chosen.rotated),
    }
}

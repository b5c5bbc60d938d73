pub mod layout;
mod options;
mod padding;
mod types;

pub use layout::{
    compute_flat_sheet_layout, compute_flat_sheet_layout_even_columns, compute_layout,
    compute_layout_even_columns, compute_roll_material_layout,
    compute_roll_material_layout_even_columns,
};
pub use options::*;
pub use padding::{blank_pages_needed, calculate_blank_page_insertion};
pub use types::*;

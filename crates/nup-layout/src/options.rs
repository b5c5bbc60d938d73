use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Flat sheet medium: a bounded sheet with fixed width and height.
///
/// Margins are subtracted from the sheet dimensions to obtain the printable
/// area; the grid caps bound the layout search (0 means unbounded).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlatSheetConfig {
    pub paper_width_mm: f64,
    pub paper_height_mm: f64,
    pub margin_top_mm: f64,
    pub margin_bottom_mm: f64,
    pub margin_left_mm: f64,
    pub margin_right_mm: f64,
    /// Maximum number of rows, 0 = unbounded
    pub row_cap: u32,
    /// Maximum number of columns, 0 = unbounded
    pub column_cap: u32,
}

impl Default for FlatSheetConfig {
    fn default() -> Self {
        // A4 portrait with a 10mm margin on every side
        Self {
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
}

impl FlatSheetConfig {
    /// Sheet width minus the left and right margins
    pub fn printable_width(&self) -> f64 {
        self.paper_width_mm - self.margin_left_mm - self.margin_right_mm
    }

    /// Sheet height minus the top and bottom margins
    pub fn printable_height(&self) -> f64 {
        self.paper_height_mm - self.margin_top_mm - self.margin_bottom_mm
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.printable_width() <= 0.0 {
            return Err(LayoutError::InvalidConfiguration(format!(
                "Printable width must be positive, got {} mm",
                self.printable_width()
            )));
        }
        if self.printable_height() <= 0.0 {
            return Err(LayoutError::InvalidConfiguration(format!(
                "Printable height must be positive, got {} mm",
                self.printable_height()
            )));
        }
        Ok(())
    }
}

/// Roll material medium: fixed width, effectively unbounded length.
///
/// The roll is cut to at least `min_length_mm`; the top and bottom margins
/// are applied once per row segment along the roll.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RollMaterialConfig {
    pub fixed_width_mm: f64,
    pub min_length_mm: f64,
    pub margin_top_mm: f64,
    pub margin_bottom_mm: f64,
    pub margin_left_mm: f64,
    pub margin_right_mm: f64,
    /// Maximum number of columns, 0 = unbounded
    pub column_cap: u32,
}

impl Default for RollMaterialConfig {
    fn default() -> Self {
        // 610mm (24") roll cut to at least one meter
        Self {
            fixed_width_mm: 610.0,
            min_length_mm: 1000.0,
            margin_top_mm: 10.0,
            margin_bottom_mm: 10.0,
            margin_left_mm: 10.0,
            margin_right_mm: 10.0,
            column_cap: 0,
        }
    }
}

impl RollMaterialConfig {
    /// Roll width minus the left and right margins
    pub fn usable_width(&self) -> f64 {
        self.fixed_width_mm - self.margin_left_mm - self.margin_right_mm
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.usable_width() <= 0.0 {
            return Err(LayoutError::InvalidConfiguration(format!(
                "Usable roll width must be positive, got {} mm",
                self.usable_width()
            )));
        }
        if self.min_length_mm <= 0.0 {
            return Err(LayoutError::InvalidConfiguration(format!(
                "Minimum roll length must be positive, got {} mm",
                self.min_length_mm
            )));
        }
        Ok(())
    }
}

/// Print medium selection
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MediumConfig {
    FlatSheet(FlatSheetConfig),
    Roll(RollMaterialConfig),
}

impl MediumConfig {
    /// Validate the selected medium
    pub fn validate(&self) -> Result<()> {
        match self {
            MediumConfig::FlatSheet(config) => config.validate(),
            MediumConfig::Roll(config) => config.validate(),
        }
    }

    /// Load a medium configuration from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let config = serde_json::from_slice(&bytes)
            .map_err(|e| LayoutError::InvalidConfiguration(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Save a medium configuration to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            LayoutError::InvalidConfiguration(format!("Failed to serialize config: {}", e))
        })?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}

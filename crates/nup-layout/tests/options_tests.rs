use nup_layout::*;

#[test]
fn test_flat_sheet_validation() {
    let mut config = FlatSheetConfig::default();
    assert!(config.validate().is_ok());

    // Margins eat the full sheet width
    config.margin_left_mm = 120.0;
    config.margin_right_mm = 120.0;
    let result = config.validate();
    assert!(result.is_err());
    match result {
        Err(LayoutError::InvalidConfiguration(msg)) => {
            assert!(msg.contains("width"));
        }
        _ => panic!("Expected InvalidConfiguration error"),
    }
}

#[test]
fn test_flat_sheet_printable_area() {
    let config = FlatSheetConfig::default();

    assert!((config.printable_width() - 190.0).abs() < 1e-9);
    assert!((config.printable_height() - 277.0).abs() < 1e-9);
}

#[test]
fn test_roll_validation() {
    let mut config = RollMaterialConfig::default();
    assert!(config.validate().is_ok());

    config.min_length_mm = 0.0;
    assert!(config.validate().is_err());

    config.min_length_mm = 1000.0;
    config.margin_left_mm = 400.0;
    config.margin_right_mm = 400.0;
    assert!(config.validate().is_err());
}

#[test]
fn test_medium_config_validation_dispatches() {
    let flat = MediumConfig::FlatSheet(FlatSheetConfig::default());
    assert!(flat.validate().is_ok());

    let bad_roll = MediumConfig::Roll(RollMaterialConfig {
        min_length_mm: -5.0,
        ..Default::default()
    });
    assert!(bad_roll.validate().is_err());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_config_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("medium.json");

    let config = MediumConfig::Roll(RollMaterialConfig {
        fixed_width_mm: 320.0,
        min_length_mm: 450.0,
        column_cap: 4,
        ..Default::default()
    });

    config.save(&path).await.unwrap();
    let loaded = MediumConfig::load(&path).await.unwrap();

    assert_eq!(loaded, config);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_rejects_malformed_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("medium.json");
    tokio::fs::write(&path, b"{not json").await.unwrap();

    let result = MediumConfig::load(&path).await;
    assert!(matches!(result, Err(LayoutError::InvalidConfiguration(_))));
}

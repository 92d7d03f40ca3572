#![allow(clippy::float_cmp)]

use super::*;

fn full_entries() -> Vec<(FurnitureKind, Dimensions)> {
    FurnitureKind::ALL
        .into_iter()
        .map(|k| (k, Dimensions::new(2.0, 3.0)))
        .collect()
}

// =============================================================
// FurnitureKind
// =============================================================

#[test]
fn kind_serde_uses_capitalized_names() {
    let cases = [
        (FurnitureKind::Chair, "\"Chair\""),
        (FurnitureKind::Table, "\"Table\""),
        (FurnitureKind::Sofa, "\"Sofa\""),
        (FurnitureKind::Bed, "\"Bed\""),
        (FurnitureKind::Lamp, "\"Lamp\""),
    ];
    for (kind, expected) in cases {
        assert_eq!(serde_json::to_string(&kind).unwrap(), expected);
        let back: FurnitureKind = serde_json::from_str(expected).unwrap();
        assert_eq!(back, kind);
    }
}

#[test]
fn kind_deserialize_unknown_rejects() {
    assert!(serde_json::from_str::<FurnitureKind>("\"Bookshelf\"").is_err());
}

#[test]
fn kind_from_name_ignores_case() {
    assert_eq!(FurnitureKind::from_name("sofa"), Some(FurnitureKind::Sofa));
    assert_eq!(FurnitureKind::from_name(" LAMP "), Some(FurnitureKind::Lamp));
    assert_eq!(FurnitureKind::from_name("desk"), None);
}

#[test]
fn kind_display_matches_name() {
    assert_eq!(FurnitureKind::Bed.to_string(), "Bed");
}

// =============================================================
// Catalog
// =============================================================

#[test]
fn default_catalog_sizes() {
    let c = Catalog::default();
    assert_eq!(c.dimensions(FurnitureKind::Chair), Dimensions::new(3.3, 3.3));
    assert_eq!(c.dimensions(FurnitureKind::Table), Dimensions::new(6.6, 4.9));
    assert_eq!(c.dimensions(FurnitureKind::Sofa), Dimensions::new(6.6, 3.3));
    assert_eq!(c.dimensions(FurnitureKind::Bed), Dimensions::new(6.6, 4.9));
    assert_eq!(c.dimensions(FurnitureKind::Lamp), Dimensions::new(1.6, 1.6));
}

#[test]
fn stock_table_validates_to_default() {
    assert_eq!(Catalog::stock(), Ok(Catalog::default()));
    for (kind, dims) in STOCK {
        assert_eq!(Catalog::default().dimensions(kind), dims);
    }
}

#[test]
fn new_accepts_complete_table() {
    let c = Catalog::new(&full_entries()).unwrap();
    assert_eq!(c.dimensions(FurnitureKind::Lamp), Dimensions::new(2.0, 3.0));
}

#[test]
fn new_rejects_missing_kind() {
    let entries: Vec<_> = full_entries()
        .into_iter()
        .filter(|(k, _)| *k != FurnitureKind::Bed)
        .collect();
    assert_eq!(Catalog::new(&entries), Err(CatalogError::Missing(FurnitureKind::Bed)));
}

#[test]
fn new_rejects_duplicate_kind() {
    let mut entries = full_entries();
    entries.push((FurnitureKind::Chair, Dimensions::new(1.0, 1.0)));
    assert_eq!(Catalog::new(&entries), Err(CatalogError::Duplicate(FurnitureKind::Chair)));
}

#[test]
fn new_rejects_non_positive_dimensions() {
    let mut entries = full_entries();
    entries[2] = (FurnitureKind::Sofa, Dimensions::new(0.0, 3.0));
    assert!(matches!(
        Catalog::new(&entries),
        Err(CatalogError::InvalidDimensions { kind: FurnitureKind::Sofa, .. })
    ));
}

#[test]
fn new_rejects_nan_dimensions() {
    let mut entries = full_entries();
    entries[0] = (FurnitureKind::Chair, Dimensions::new(2.0, f64::NAN));
    assert!(Catalog::new(&entries).is_err());
}

#[test]
fn error_messages_name_the_kind() {
    let msg = CatalogError::Missing(FurnitureKind::Lamp).to_string();
    assert!(msg.contains("Lamp"));
}

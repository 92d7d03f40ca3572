//! Furniture kinds and the catalog of their default footprints.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a furniture item.
///
/// Serialized with the capitalized names stored designs use (`"Chair"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FurnitureKind {
    Chair,
    Table,
    Sofa,
    Bed,
    Lamp,
}

impl FurnitureKind {
    /// Every kind, in catalog order.
    pub const ALL: [FurnitureKind; 5] = [Self::Chair, Self::Table, Self::Sofa, Self::Bed, Self::Lamp];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Chair => "Chair",
            Self::Table => "Table",
            Self::Sofa => "Sofa",
            Self::Bed => "Bed",
            Self::Lamp => "Lamp",
        }
    }

    /// Parse a kind from its display name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }

    fn index(self) -> usize {
        match self {
            Self::Chair => 0,
            Self::Table => 1,
            Self::Sofa => 2,
            Self::Bed => 3,
            Self::Lamp => 4,
        }
    }
}

impl fmt::Display for FurnitureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Footprint of a furniture item in feet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub length: f64,
}

impl Dimensions {
    #[must_use]
    pub const fn new(width: f64, length: f64) -> Self {
        Self { width, length }
    }

    /// Both sides are finite and strictly positive.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.length.is_finite() && self.width > 0.0 && self.length > 0.0
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CatalogError {
    #[error("catalog has no entry for {0}")]
    Missing(FurnitureKind),
    #[error("catalog lists {0} more than once")]
    Duplicate(FurnitureKind),
    #[error("invalid dimensions for {kind}: {width} x {length}")]
    InvalidDimensions { kind: FurnitureKind, width: f64, length: f64 },
}

/// Default footprint for every [`FurnitureKind`].
///
/// Built from an entry list and validated up front so lookups are total.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    dims: [Dimensions; 5],
}

impl Catalog {
    /// Build a catalog from `(kind, dimensions)` entries.
    ///
    /// # Errors
    ///
    /// Returns an error if a kind is missing or listed twice, or if any
    /// dimension is not a finite positive number.
    pub fn new(entries: &[(FurnitureKind, Dimensions)]) -> Result<Self, CatalogError> {
        let mut slots: [Option<Dimensions>; 5] = [None; 5];
        for &(kind, dims) in entries {
            if !dims.is_valid() {
                return Err(CatalogError::InvalidDimensions { kind, width: dims.width, length: dims.length });
            }
            let slot = &mut slots[kind.index()];
            if slot.is_some() {
                return Err(CatalogError::Duplicate(kind));
            }
            *slot = Some(dims);
        }

        let mut dims = [Dimensions::new(0.0, 0.0); 5];
        for kind in FurnitureKind::ALL {
            dims[kind.index()] = slots[kind.index()].ok_or(CatalogError::Missing(kind))?;
        }
        Ok(Self { dims })
    }

    /// Default footprint of `kind`.
    #[must_use]
    pub fn dimensions(&self, kind: FurnitureKind) -> Dimensions {
        self.dims[kind.index()]
    }
}

/// Stock footprints of the 2D designer, in catalog order.
pub const STOCK: [(FurnitureKind, Dimensions); 5] = [
    (FurnitureKind::Chair, Dimensions::new(3.3, 3.3)),
    (FurnitureKind::Table, Dimensions::new(6.6, 4.9)),
    (FurnitureKind::Sofa, Dimensions::new(6.6, 3.3)),
    (FurnitureKind::Bed, Dimensions::new(6.6, 4.9)),
    (FurnitureKind::Lamp, Dimensions::new(1.6, 1.6)),
];

impl Catalog {
    /// The [`STOCK`] table, validated through [`Catalog::new`].
    ///
    /// # Errors
    ///
    /// Returns an error if the stock table is incomplete or invalid.
    pub fn stock() -> Result<Self, CatalogError> {
        Self::new(&STOCK)
    }
}

/// The [`STOCK`] table taken as is. It is listed in `FurnitureKind::ALL`
/// order with valid sizes; `Catalog::stock()` checks that.
impl Default for Catalog {
    fn default() -> Self {
        Self { dims: STOCK.map(|(_, dims)| dims) }
    }
}

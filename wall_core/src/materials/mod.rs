//! # Materials
//!
//! Material records and the catalog they live in. A [`Material`] describes
//! one purchasable SKU (a board size, a profile, a box of screws, a bucket
//! of compound) together with the data the takeoff needs: physical
//! dimensions, reporting unit, coverage, and waste margin.
//!
//! ## Example
//!
//! ```rust
//! use wall_core::materials::{Material, MaterialCategory, Unit};
//!
//! let board = Material::new(
//!     "board-std-125",
//!     "Standard board 12.5 mm 1200x2400",
//!     MaterialCategory::Board,
//!     Unit::Piece,
//!     10.0,
//! )
//! .with_length_mm(2400.0)
//! .with_width_mm(1200.0)
//! .with_thickness_mm(12.5);
//!
//! assert_eq!(board.category, MaterialCategory::Board);
//! assert_eq!(board.length().unwrap().0, 2400.0);
//! ```

pub mod catalog;
pub mod seed;

// Re-export catalog types
pub use catalog::MaterialCatalog;

use serde::{Deserialize, Serialize};

use crate::units::Millimeters;

/// Material categories as stocked in a drywall catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialCategory {
    /// Sheet material fastened to the frame (gypsum board)
    Board,
    /// Framing profile (C stud or U track)
    Profile,
    /// Fasteners sold by the box
    Screw,
    /// Joint compound
    Compound,
    /// Joint tape
    Tape,
    /// Anything else the catalog carries
    Other,
}

impl MaterialCategory {
    /// All category variants for UI selection
    pub const ALL: [MaterialCategory; 6] = [
        MaterialCategory::Board,
        MaterialCategory::Profile,
        MaterialCategory::Screw,
        MaterialCategory::Compound,
        MaterialCategory::Tape,
        MaterialCategory::Other,
    ];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            MaterialCategory::Board => "Board",
            MaterialCategory::Profile => "Profile",
            MaterialCategory::Screw => "Screw",
            MaterialCategory::Compound => "Joint compound",
            MaterialCategory::Tape => "Tape",
            MaterialCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Reporting unit for a material quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Unit {
    /// Individual pieces (boards, profiles, buckets, rolls)
    Piece,
    /// Linear meters
    LinearMeter,
    /// Square meters
    SquareMeter,
    /// Kilograms
    Kilogram,
    /// Boxes of sub-units (screws)
    Box,
}

impl Unit {
    /// Short symbol for display ("pc", "m", "m²", "kg", "box")
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Piece => "pc",
            Unit::LinearMeter => "m",
            Unit::SquareMeter => "m²",
            Unit::Kilogram => "kg",
            Unit::Box => "box",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One catalog entry.
///
/// Physical dimensions are optional: the quantity derivations that need
/// them apply their own documented defaults at the point of use, so a
/// sparsely specified SKU still computes.
///
/// ## JSON Example
///
/// ```json
/// {
///   "id": "board-std-125",
///   "name": "Standard board 12.5 mm 1200x2400",
///   "category": "board",
///   "length_mm": 2400.0,
///   "width_mm": 1200.0,
///   "thickness_mm": 12.5,
///   "unit": "piece",
///   "waste_pct": 10.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Unique catalog key (e.g., "board-std-125")
    pub id: String,

    /// Display name (e.g., "Standard board 12.5 mm 1200x2400")
    pub name: String,

    /// What kind of material this is
    pub category: MaterialCategory,

    /// Length in millimeters, if the SKU has a meaningful length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_mm: Option<f64>,

    /// Width in millimeters (boards, profiles)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_mm: Option<f64>,

    /// Thickness in millimeters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness_mm: Option<f64>,

    /// Reporting unit for computed quantities
    pub unit: Unit,

    /// Area one unit covers in m² (compound buckets, tape rolls)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage_m2: Option<f64>,

    /// Sub-units per reportable box (screws)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pieces_per_box: Option<u32>,

    /// Waste margin in percent, applied before rounding up
    pub waste_pct: f64,
}

impl Material {
    /// Create a material with no dimensions, coverage, or box count.
    ///
    /// Use the `with_*` builders to fill in whatever the SKU specifies.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: MaterialCategory,
        unit: Unit,
        waste_pct: f64,
    ) -> Self {
        Material {
            id: id.into(),
            name: name.into(),
            category,
            length_mm: None,
            width_mm: None,
            thickness_mm: None,
            unit,
            coverage_m2: None,
            pieces_per_box: None,
            waste_pct,
        }
    }

    /// Set the length in millimeters
    pub fn with_length_mm(mut self, length_mm: f64) -> Self {
        self.length_mm = Some(length_mm);
        self
    }

    /// Set the width in millimeters
    pub fn with_width_mm(mut self, width_mm: f64) -> Self {
        self.width_mm = Some(width_mm);
        self
    }

    /// Set the thickness in millimeters
    pub fn with_thickness_mm(mut self, thickness_mm: f64) -> Self {
        self.thickness_mm = Some(thickness_mm);
        self
    }

    /// Set the coverage in m² per unit
    pub fn with_coverage_m2(mut self, coverage_m2: f64) -> Self {
        self.coverage_m2 = Some(coverage_m2);
        self
    }

    /// Set the number of sub-units per box
    pub fn with_pieces_per_box(mut self, pieces_per_box: u32) -> Self {
        self.pieces_per_box = Some(pieces_per_box);
        self
    }

    /// Length as a typed millimeter value
    pub fn length(&self) -> Option<Millimeters> {
        self.length_mm.map(Millimeters)
    }

    /// Width as a typed millimeter value
    pub fn width(&self) -> Option<Millimeters> {
        self.width_mm.map(Millimeters)
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

//! # Seed Catalog
//!
//! A built-in catalog of common metric drywall SKUs, so callers can compute
//! a takeoff without supplying their own catalog first. The entries mirror
//! what a local supplier stocks: 12.5 mm boards in 1200x2400 sheets, 70 mm
//! C/U framing profiles in 2.60 m lengths, fine-thread screws by the
//! thousand, ready-mix compound, and paper tape.
//!
//! Coverage and waste figures are typical values, not supplier quotes;
//! callers with real pricing data should build their own catalog.
//!
//! ## Example
//!
//! ```rust
//! use wall_core::materials::seed;
//!
//! let catalog = seed::builtin();
//! assert!(catalog.get(seed::ids::BOARD_STANDARD).is_some());
//! ```

use once_cell::sync::Lazy;

use crate::calculations::wall::RoleAssignment;
use crate::materials::{Material, MaterialCatalog, MaterialCategory, Unit};

/// Well-known ids of the seed entries.
pub mod ids {
    /// Standard 12.5 mm board, 1200x2400
    pub const BOARD_STANDARD: &str = "board-std-125";
    /// Moisture-resistant 12.5 mm board, 1200x2400
    pub const BOARD_MOISTURE_RESISTANT: &str = "board-mr-125";
    /// 70 mm C stud, 2.60 m
    pub const STUD_C70: &str = "stud-c70";
    /// 70 mm U track, 2.60 m
    pub const TRACK_U70: &str = "track-u70";
    /// 25 mm fine-thread screw, box of 1000
    pub const SCREW_FINE_25: &str = "screw-fine-25";
    /// Ready-mix joint compound, 32 kg bucket
    pub const COMPOUND_READY_32: &str = "compound-ready-32";
    /// Paper joint tape, 150 m roll
    pub const TAPE_PAPER_150: &str = "tape-paper-150";
}

static BUILTIN: Lazy<MaterialCatalog> = Lazy::new(build);

/// The built-in seed catalog.
pub fn builtin() -> &'static MaterialCatalog {
    &BUILTIN
}

/// A role assignment pointing at the seed catalog's standard picks.
pub fn standard_roles() -> RoleAssignment {
    RoleAssignment::new(
        ids::BOARD_STANDARD,
        ids::STUD_C70,
        ids::TRACK_U70,
        ids::SCREW_FINE_25,
    )
    .with_compound(ids::COMPOUND_READY_32)
    .with_tape(ids::TAPE_PAPER_150)
}

fn build() -> MaterialCatalog {
    [
        Material::new(
            ids::BOARD_STANDARD,
            "Standard board 12.5 mm 1200x2400",
            MaterialCategory::Board,
            Unit::Piece,
            10.0,
        )
        .with_length_mm(2400.0)
        .with_width_mm(1200.0)
        .with_thickness_mm(12.5),
        Material::new(
            ids::BOARD_MOISTURE_RESISTANT,
            "Moisture-resistant board 12.5 mm 1200x2400",
            MaterialCategory::Board,
            Unit::Piece,
            10.0,
        )
        .with_length_mm(2400.0)
        .with_width_mm(1200.0)
        .with_thickness_mm(12.5),
        Material::new(
            ids::STUD_C70,
            "C stud 70 mm x 2.60 m",
            MaterialCategory::Profile,
            Unit::Piece,
            5.0,
        )
        .with_length_mm(2600.0)
        .with_width_mm(70.0)
        .with_thickness_mm(0.5),
        Material::new(
            ids::TRACK_U70,
            "U track 70 mm x 2.60 m",
            MaterialCategory::Profile,
            Unit::Piece,
            5.0,
        )
        .with_length_mm(2600.0)
        .with_width_mm(70.0)
        .with_thickness_mm(0.5),
        Material::new(
            ids::SCREW_FINE_25,
            "Drywall screw 25 mm (box of 1000)",
            MaterialCategory::Screw,
            Unit::Box,
            0.0,
        )
        .with_length_mm(25.0)
        .with_pieces_per_box(1000),
        Material::new(
            ids::COMPOUND_READY_32,
            "Ready-mix joint compound 32 kg",
            MaterialCategory::Compound,
            Unit::Piece,
            10.0,
        )
        .with_coverage_m2(35.0),
        Material::new(
            ids::TAPE_PAPER_150,
            "Paper joint tape 150 m",
            MaterialCategory::Tape,
            Unit::Piece,
            10.0,
        )
        .with_coverage_m2(20.0),
    ]
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_every_role() {
        let catalog = builtin();
        let roles = standard_roles();

        assert!(catalog.contains(&roles.board));
        assert!(catalog.contains(&roles.stud));
        assert!(catalog.contains(&roles.track));
        assert!(catalog.contains(&roles.screw));
        assert!(catalog.contains(roles.compound.as_deref().unwrap()));
        assert!(catalog.contains(roles.tape.as_deref().unwrap()));
    }

    #[test]
    fn test_coverage_roles_define_coverage() {
        let catalog = builtin();
        let compound = catalog.get(ids::COMPOUND_READY_32).unwrap();
        let tape = catalog.get(ids::TAPE_PAPER_150).unwrap();

        assert!(compound.coverage_m2.unwrap() > 0.0);
        assert!(tape.coverage_m2.unwrap() > 0.0);
    }

    #[test]
    fn test_profiles_have_stock_length() {
        let catalog = builtin();
        for id in [ids::STUD_C70, ids::TRACK_U70] {
            let profile = catalog.get(id).unwrap();
            assert_eq!(profile.category, MaterialCategory::Profile);
            assert_eq!(profile.length_mm, Some(2600.0));
        }
    }

    #[test]
    fn test_screws_come_boxed() {
        let screw = builtin().get(ids::SCREW_FINE_25).unwrap();
        assert_eq!(screw.unit, Unit::Box);
        assert_eq!(screw.pieces_per_box, Some(1000));
    }
}

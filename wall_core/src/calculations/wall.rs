//! # Partition Wall Takeoff
//!
//! Computes the bill of materials for one drywall partition wall: framing
//! profiles (studs and tracks), boards, screws, and optionally joint
//! compound and tape.
//!
//! ## Assumptions
//!
//! - Single rectangular wall; openings are rectangular cutouts
//! - Studs at a standard spacing (400 or 600 mm) plus one closing line
//! - Tracks run the full width at top and bottom
//! - Screw demand scales with board area; boxes absorb fastener waste
//! - Compound and tape are included only when their catalog entry
//!   defines a positive coverage
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use wall_core::calculations::wall::{calculate, Faces, StudSpacing, WallInput};
//! use wall_core::materials::seed;
//!
//! let input = WallInput {
//!     label: "W-1".to_string(),
//!     width_m: 3.0,
//!     height_m: 2.6,
//!     stud_spacing: StudSpacing::Mm400,
//!     double_board: false,
//!     faces: Faces::One,
//!     openings: Vec::new(),
//!     screws_per_m2: 25.0,
//! };
//!
//! let result = calculate(&input, seed::builtin(), &seed::standard_roles()).unwrap();
//!
//! for item in &result.items {
//!     println!("{}: {} {}", item.material_id, item.quantity, item.unit);
//! }
//! for line in &result.detail {
//!     println!("  {line}");
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::rounding::{ceiling_with_epsilon, with_waste};
use crate::errors::{CalcError, CalcResult};
use crate::materials::{Material, MaterialCatalog, Unit};
use crate::units::{Meters, Millimeters, SquareMeters};

/// Standard stud spacings.
///
/// Serializes as the plain millimeter value (400 or 600); any other
/// number is rejected at deserialization time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum StudSpacing {
    /// 400 mm on center
    Mm400,
    /// 600 mm on center
    Mm600,
}

impl StudSpacing {
    /// All spacing variants for UI selection
    pub const ALL: [StudSpacing; 2] = [StudSpacing::Mm400, StudSpacing::Mm600];

    /// Spacing as a typed millimeter value
    pub fn as_millimeters(self) -> Millimeters {
        Millimeters(f64::from(u32::from(self)))
    }
}

impl From<StudSpacing> for u32 {
    fn from(spacing: StudSpacing) -> u32 {
        match spacing {
            StudSpacing::Mm400 => 400,
            StudSpacing::Mm600 => 600,
        }
    }
}

impl TryFrom<u32> for StudSpacing {
    type Error = String;

    fn try_from(mm: u32) -> Result<Self, Self::Error> {
        match mm {
            400 => Ok(StudSpacing::Mm400),
            600 => Ok(StudSpacing::Mm600),
            other => Err(format!(
                "unsupported stud spacing: {other} mm (expected 400 or 600)"
            )),
        }
    }
}

impl std::fmt::Display for StudSpacing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} mm", u32::from(*self))
    }
}

/// Number of wall faces that receive boarding.
///
/// Serializes as the plain count (1 or 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Faces {
    /// Board one side only
    One,
    /// Board both sides
    Two,
}

impl Faces {
    /// All face variants for UI selection
    pub const ALL: [Faces; 2] = [Faces::One, Faces::Two];

    /// Face count as a multiplier
    pub fn count(self) -> f64 {
        match self {
            Faces::One => 1.0,
            Faces::Two => 2.0,
        }
    }
}

impl From<Faces> for u8 {
    fn from(faces: Faces) -> u8 {
        match faces {
            Faces::One => 1,
            Faces::Two => 2,
        }
    }
}

impl TryFrom<u8> for Faces {
    type Error = String;

    fn try_from(count: u8) -> Result<Self, Self::Error> {
        match count {
            1 => Ok(Faces::One),
            2 => Ok(Faces::Two),
            other => Err(format!("unsupported face count: {other} (expected 1 or 2)")),
        }
    }
}

/// A rectangular cutout (door or window) subtracted from the wall area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    /// Opening width in meters
    pub width_m: f64,

    /// Opening height in meters
    pub height_m: f64,
}

impl Opening {
    /// Opening area in m²
    pub fn area_m2(&self) -> f64 {
        self.width_m * self.height_m
    }
}

/// Input parameters for a partition wall takeoff.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "W-1",
///   "width_m": 3.0,
///   "height_m": 2.6,
///   "stud_spacing": 400,
///   "double_board": false,
///   "faces": 1,
///   "openings": [
///     { "width_m": 0.9, "height_m": 2.1 }
///   ],
///   "screws_per_m2": 25.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallInput {
    /// User label for this wall (e.g., "W-1", "Bedroom partition")
    pub label: String,

    /// Wall width in meters
    pub width_m: f64,

    /// Wall height in meters
    pub height_m: f64,

    /// Stud spacing (400 or 600 mm on center)
    pub stud_spacing: StudSpacing,

    /// Two board layers per face instead of one
    pub double_board: bool,

    /// Board one or both sides of the wall
    pub faces: Faces,

    /// Door/window cutouts; may be empty
    pub openings: Vec<Opening>,

    /// Screw density per m² of board
    pub screws_per_m2: f64,
}

impl WallInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.width_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "width_m",
                self.width_m.to_string(),
                "Width must be positive",
            ));
        }
        if self.height_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "height_m",
                self.height_m.to_string(),
                "Height must be positive",
            ));
        }
        if self.screws_per_m2 <= 0.0 {
            return Err(CalcError::invalid_input(
                "screws_per_m2",
                self.screws_per_m2.to_string(),
                "Screw density must be positive",
            ));
        }
        Ok(())
    }

    /// Net wall area in m²: gross area minus openings, clamped at zero.
    ///
    /// Openings larger than the wall are not an error; the area floors
    /// at zero.
    pub fn net_area_m2(&self) -> f64 {
        let gross = self.width_m * self.height_m;
        let openings: f64 = self.openings.iter().map(Opening::area_m2).sum();
        (gross - openings).max(0.0)
    }

    /// Total board area in m²: net area × faces × layers per face.
    ///
    /// This is the area the boarding must cover, and it drives board
    /// count and every coverage-based consumable (screws, compound, tape).
    pub fn board_area_m2(&self) -> f64 {
        let layers = if self.double_board { 2.0 } else { 1.0 };
        self.net_area_m2() * self.faces.count() * layers
    }
}

/// Which catalog entry plays each role in the wall build-up.
///
/// Board, stud, track, and screw are mandatory; compound and tape are
/// optional finishing roles.
///
/// ## JSON Example
///
/// ```json
/// {
///   "board": "board-std-125",
///   "stud": "stud-c70",
///   "track": "track-u70",
///   "screw": "screw-fine-25",
///   "compound": "compound-ready-32",
///   "tape": "tape-paper-150"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    /// Board material id
    pub board: String,

    /// Stud (vertical C profile) material id
    pub stud: String,

    /// Track (horizontal U profile) material id
    pub track: String,

    /// Screw material id
    pub screw: String,

    /// Joint compound material id, if compound is to be included
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compound: Option<String>,

    /// Joint tape material id, if tape is to be included
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tape: Option<String>,
}

impl RoleAssignment {
    /// Create an assignment for the four mandatory roles.
    pub fn new(
        board: impl Into<String>,
        stud: impl Into<String>,
        track: impl Into<String>,
        screw: impl Into<String>,
    ) -> Self {
        RoleAssignment {
            board: board.into(),
            stud: stud.into(),
            track: track.into(),
            screw: screw.into(),
            compound: None,
            tape: None,
        }
    }

    /// Include joint compound
    pub fn with_compound(mut self, compound: impl Into<String>) -> Self {
        self.compound = Some(compound.into());
        self
    }

    /// Include joint tape
    pub fn with_tape(mut self, tape: impl Into<String>) -> Self {
        self.tape = Some(tape.into());
        self
    }
}

/// One required-quantity line of the takeoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    /// Catalog key of the material (lookup reference, not a copy)
    pub material_id: String,

    /// Whole units to purchase; may be zero (e.g., a fully open wall)
    pub quantity: u32,

    /// Reporting unit, copied from the material at computation time
    pub unit: Unit,

    /// Where the number comes from, for display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Results from a wall takeoff.
///
/// `items` is ordered stud, track, board, screw, then compound and tape
/// when present. `detail` is the append-only derivation log, starting
/// with the two area lines.
///
/// ## JSON Example
///
/// ```json
/// {
///   "items": [
///     { "material_id": "stud-c70", "quantity": 9, "unit": "piece", "note": "~9 lines at 400 mm" },
///     { "material_id": "track-u70", "quantity": 3, "unit": "piece", "note": "Top and bottom track: 6.00 m" }
///   ],
///   "detail": [
///     "Effective area = width*height - openings = 7.80 m²",
///     "Boards: faces=1, single layer -> 7.80 m²"
///   ],
///   "covered_area_m2": 7.8
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallResult {
    /// Required quantities, one per computed role
    pub items: Vec<ResultItem>,

    /// Derivation log, in call order
    pub detail: Vec<String>,

    /// Total board area the materials must cover (not the net wall area)
    pub covered_area_m2: f64,
}

impl WallResult {
    /// Find the line item for a material id.
    pub fn item_for(&self, material_id: &str) -> Option<&ResultItem> {
        self.items.iter().find(|i| i.material_id == material_id)
    }
}

/// Default board width when the catalog entry leaves it unspecified (mm)
const DEFAULT_BOARD_WIDTH_MM: f64 = 1200.0;

/// Default board length when the catalog entry leaves it unspecified (mm)
const DEFAULT_BOARD_LENGTH_MM: f64 = 2400.0;

/// Default stock length for framing profiles (mm)
const DEFAULT_PROFILE_LENGTH_MM: f64 = 2600.0;

/// Default screws per box when the catalog entry leaves it unspecified
const DEFAULT_SCREWS_PER_BOX: u32 = 1000;

/// Stock length of a framing profile in meters, with the 2.60 m default.
fn profile_length_m(profile: &Material) -> f64 {
    let length = profile
        .length()
        .unwrap_or(Millimeters(DEFAULT_PROFILE_LENGTH_MM));
    Meters::from(length).value()
}

/// Area one board covers, with the 1200x2400 mm defaults.
fn board_unit_coverage(board: &Material) -> SquareMeters {
    let width = Meters::from(board.width().unwrap_or(Millimeters(DEFAULT_BOARD_WIDTH_MM)));
    let length = Meters::from(
        board
            .length()
            .unwrap_or(Millimeters(DEFAULT_BOARD_LENGTH_MM)),
    );
    SquareMeters(width.value() * length.value())
}

/// Coverage of an optional finishing material, if usable.
fn positive_coverage(material: &Material) -> Option<f64> {
    material.coverage_m2.filter(|c| *c > 0.0)
}

/// Compute the bill of materials for one wall.
///
/// This is a pure function suitable for LLM invocation: identical inputs
/// produce identical results, and neither the catalog nor the parameters
/// are mutated.
///
/// # Arguments
///
/// * `input` - Wall geometry and parameters
/// * `catalog` - Material catalog snapshot
/// * `roles` - Which catalog entry plays each role
///
/// # Returns
///
/// * `Ok(WallResult)` - Line items, derivation log, and covered area
/// * `Err(CalcError)` - Invalid parameters, or a role id absent from the
///   catalog (no partial result is returned)
///
/// # Example
///
/// ```rust
/// use wall_core::calculations::wall::{calculate, Faces, StudSpacing, WallInput};
/// use wall_core::materials::seed;
///
/// let input = WallInput {
///     label: "W-1".to_string(),
///     width_m: 3.0,
///     height_m: 2.6,
///     stud_spacing: StudSpacing::Mm400,
///     double_board: false,
///     faces: Faces::One,
///     openings: Vec::new(),
///     screws_per_m2: 25.0,
/// };
///
/// let result = calculate(&input, seed::builtin(), &seed::standard_roles())
///     .expect("Takeoff should succeed");
/// assert!((result.covered_area_m2 - 7.8).abs() < 1e-9);
/// ```
pub fn calculate(
    input: &WallInput,
    catalog: &MaterialCatalog,
    roles: &RoleAssignment,
) -> CalcResult<WallResult> {
    // Validate inputs
    input.validate()?;

    let mut items: Vec<ResultItem> = Vec::new();
    let mut detail: Vec<String> = Vec::new();

    // === Surfaces ===

    let net_area = input.net_area_m2();
    let board_area = input.board_area_m2();
    detail.push(format!(
        "Effective area = width*height - openings = {net_area:.2} m²"
    ));
    detail.push(format!(
        "Boards: faces={}, {} layer -> {board_area:.2} m²",
        u8::from(input.faces),
        if input.double_board { "double" } else { "single" },
    ));

    // === Studs ===

    let stud = catalog.require("stud", &roles.stud)?;
    let spacing = Meters::from(input.stud_spacing.as_millimeters());
    // One line every spacing, plus one to close the final bay
    let stud_lines = ceiling_with_epsilon(input.width_m / spacing.value()) + 1;
    let stud_linear_m = f64::from(stud_lines) * input.height_m;
    let stud_pieces = ceiling_with_epsilon(with_waste(
        stud_linear_m / profile_length_m(stud),
        stud.waste_pct,
    ));
    items.push(ResultItem {
        material_id: roles.stud.clone(),
        quantity: stud_pieces,
        unit: stud.unit,
        note: Some(format!(
            "~{stud_lines} lines at {} mm",
            u32::from(input.stud_spacing)
        )),
    });
    detail.push(format!(
        "Studs: spacing={} mm -> lines={stud_lines}, pieces={stud_pieces}",
        u32::from(input.stud_spacing)
    ));

    // === Tracks (top + bottom) ===

    let track = catalog.require("track", &roles.track)?;
    let track_linear_m = 2.0 * input.width_m;
    let track_pieces = ceiling_with_epsilon(with_waste(
        track_linear_m / profile_length_m(track),
        track.waste_pct,
    ));
    items.push(ResultItem {
        material_id: roles.track.clone(),
        quantity: track_pieces,
        unit: track.unit,
        note: Some(format!("Top and bottom track: {track_linear_m:.2} m")),
    });
    detail.push(format!(
        "Tracks: 2*width={track_linear_m:.2} m -> pieces={track_pieces}"
    ));

    // === Boards ===

    let board = catalog.require("board", &roles.board)?;
    let per_board = board_unit_coverage(board);
    let board_pieces =
        ceiling_with_epsilon(with_waste(board_area / per_board.value(), board.waste_pct));
    items.push(ResultItem {
        material_id: roles.board.clone(),
        quantity: board_pieces,
        unit: board.unit,
        note: Some(format!("{board_area:.2} m² effective")),
    });
    detail.push(format!(
        "Boards: (total m² / m² per board={:.2}) + waste -> {board_pieces}",
        per_board.value()
    ));

    // === Screws (per m² of board) ===

    let screw = catalog.require("screw", &roles.screw)?;
    let per_box = screw.pieces_per_box.unwrap_or(DEFAULT_SCREWS_PER_BOX);
    // Box rounding absorbs fastener waste; no waste factor at piece level
    let screws_needed = ceiling_with_epsilon(board_area * input.screws_per_m2);
    let screw_boxes = ceiling_with_epsilon(f64::from(screws_needed) / f64::from(per_box));
    items.push(ResultItem {
        material_id: roles.screw.clone(),
        quantity: screw_boxes,
        unit: screw.unit,
        note: Some(format!(
            "{screws_needed} screws (~{}/m²)",
            input.screws_per_m2
        )),
    });
    detail.push(format!(
        "Screws: board m² * {}/m² = {screws_needed} -> boxes={screw_boxes}",
        input.screws_per_m2
    ));

    // === Joint compound (only with a known coverage) ===

    if let Some(id) = &roles.compound {
        let compound = catalog.require("compound", id)?;
        if let Some(coverage) = positive_coverage(compound) {
            let buckets =
                ceiling_with_epsilon(with_waste(board_area / coverage, compound.waste_pct));
            items.push(ResultItem {
                material_id: id.clone(),
                quantity: buckets,
                unit: compound.unit,
                note: Some(format!("Coverage {coverage} m²/bucket")),
            });
            detail.push(format!(
                "Compound: board m² / coverage = {buckets} bucket(s)"
            ));
        }
    }

    // === Tape (only with a known coverage) ===

    if let Some(id) = &roles.tape {
        let tape = catalog.require("tape", id)?;
        if let Some(coverage) = positive_coverage(tape) {
            let rolls = ceiling_with_epsilon(with_waste(board_area / coverage, tape.waste_pct));
            items.push(ResultItem {
                material_id: id.clone(),
                quantity: rolls,
                unit: tape.unit,
                note: Some(format!("Coverage {coverage} m²/roll")),
            });
            detail.push(format!("Tape: board m² / coverage = {rolls} roll(s)"));
        }
    }

    Ok(WallResult {
        items,
        detail,
        covered_area_m2: board_area,
    })
}

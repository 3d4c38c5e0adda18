//! # wall_core - Drywall Material Takeoff Engine
//!
//! `wall_core` is the computational heart of Walltake, turning the geometry
//! of a drywall partition wall into a bill of materials with a clean,
//! LLM-friendly API. All inputs and outputs are JSON-serializable, making it
//! ideal for integration with AI assistants via MCP or similar protocols.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Auditable**: Every result carries a human-readable derivation log
//!
//! ## Quick Start
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
//! // Serialize to JSON for storage or transmission
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("covered_area_m2"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The wall takeoff and its rounding policy
//! - [`materials`] - Material records, catalog, and seed data
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::wall::{calculate, RoleAssignment, ResultItem, WallInput, WallResult};
pub use errors::{CalcError, CalcResult};
pub use materials::{Material, MaterialCatalog, MaterialCategory, Unit};

//! # Takeoff Calculations
//!
//! This module contains the takeoff calculation types. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(...) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## LLM Integration
//!
//! All types are designed for LLM consumption:
//! - Comprehensive rustdoc with examples
//! - Clean JSON serialization
//! - Structured error responses
//!
//! ## Available Calculations
//!
//! - [`wall`] - Partition wall bill of materials
//!
//! The shared rounding policy lives in [`rounding`].

pub mod rounding;
pub mod wall;

// Re-export commonly used types
pub use wall::{calculate, RoleAssignment, ResultItem, WallInput, WallResult};

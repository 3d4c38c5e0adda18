//! # Rounding Policy
//!
//! Every physical quantity the takeoff reports (pieces, boxes, buckets,
//! rolls) is rounded up to the next whole unit, after the material's waste
//! margin has been applied. All call sites share the single primitive here
//! so the policy cannot drift between roles.

/// Bias applied before taking the ceiling.
///
/// Must sit between two magnitudes: larger than the error a handful of
/// chained f64 multiplies/divides accumulate over meter- and
/// millimeter-scale inputs (~1e-13), and smaller than any physical
/// material tolerance (a 1e-9 m² sliver of board is not a real board).
pub const ROUNDING_EPSILON: f64 = 1e-9;

/// Round a quantity up to the next whole unit.
///
/// Plain `ceil` misreads values sitting a few ulps off an integer:
/// a true 4.0 computed as 4.000000000000001 would buy a fifth board, and
/// a true 3.0 computed as 2.999999999999998 would buy one too few.
/// Subtracting [`ROUNDING_EPSILON`] first absorbs both directions.
///
/// # Example
///
/// ```rust
/// use wall_core::calculations::rounding::ceiling_with_epsilon;
///
/// assert_eq!(ceiling_with_epsilon(2.84), 3);
/// assert_eq!(ceiling_with_epsilon(3.0), 3);
/// assert_eq!(ceiling_with_epsilon(0.0), 0);
/// ```
pub fn ceiling_with_epsilon(quantity: f64) -> u32 {
    let rounded = (quantity - ROUNDING_EPSILON).ceil();
    if rounded <= 0.0 {
        0
    } else {
        rounded as u32
    }
}

/// Apply a waste margin: `quantity × (1 + pct/100)`.
///
/// Applied before rounding, never after.
pub fn with_waste(quantity: f64, waste_pct: f64) -> f64 {
    quantity * (1.0 + waste_pct / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fractional_rounds_up() {
        assert_eq!(ceiling_with_epsilon(2.01), 3);
        assert_eq!(ceiling_with_epsilon(2.84), 3);
        assert_eq!(ceiling_with_epsilon(0.195), 1);
    }

    #[test]
    fn test_exact_integer_stays() {
        assert_eq!(ceiling_with_epsilon(3.0), 3);
        assert_eq!(ceiling_with_epsilon(195.0), 195);
    }

    #[test]
    fn test_float_error_above_integer_absorbed() {
        // A true 4.0 that accumulated upward error must not buy a 5th unit
        assert_eq!(ceiling_with_epsilon(4.000000000000001), 4);
    }

    #[test]
    fn test_float_error_below_integer_absorbed() {
        // A true 3.0 that accumulated downward error must still buy 3 units
        assert_eq!(ceiling_with_epsilon(2.999999999999998), 3);
    }

    #[test]
    fn test_zero_and_negative_clamp_to_zero() {
        assert_eq!(ceiling_with_epsilon(0.0), 0);
        assert_eq!(ceiling_with_epsilon(-1.5), 0);
    }

    #[test]
    fn test_with_waste() {
        assert_eq!(with_waste(10.0, 0.0), 10.0);
        assert!((with_waste(10.0, 5.0) - 10.5).abs() < 1e-12);
        assert!((with_waste(2.708333, 5.0) - 2.84375).abs() < 1e-4);
    }

    #[test]
    fn test_waste_then_ceiling() {
        // 7.8 m² / 2.88 m² per board = 2.7083..; +5% waste = 2.84375 -> 3 boards
        assert_eq!(ceiling_with_epsilon(with_waste(7.8 / 2.88, 5.0)), 3);
    }
}

//! Butcher tableau for the Dormand–Prince 5(4) embedded pair.
//!
//! The fifth-order weights propagate the solution (local extrapolation); the
//! fourth-order weights exist only to estimate the local error. The last row
//! of `A` equals the fifth-order weights, so the final stage is evaluated at
//! the accepted solution point.

/// Number of stages per step.
pub(super) const STAGES: usize = 7;

/// Stage time offsets as fractions of the step.
pub(super) const C: [f64; STAGES] = [0.0, 1.0 / 5.0, 3.0 / 10.0, 4.0 / 5.0, 8.0 / 9.0, 1.0, 1.0];

/// Stage coupling coefficients; row `i` holds the weights of stages `0..i`.
pub(super) const A: [[f64; STAGES - 1]; STAGES] = [
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [1.0 / 5.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [3.0 / 40.0, 9.0 / 40.0, 0.0, 0.0, 0.0, 0.0],
    [44.0 / 45.0, -56.0 / 15.0, 32.0 / 9.0, 0.0, 0.0, 0.0],
    [
        19372.0 / 6561.0,
        -25360.0 / 2187.0,
        64448.0 / 6561.0,
        -212.0 / 729.0,
        0.0,
        0.0,
    ],
    [
        9017.0 / 3168.0,
        -355.0 / 33.0,
        46732.0 / 5247.0,
        49.0 / 176.0,
        -5103.0 / 18656.0,
        0.0,
    ],
    [
        35.0 / 384.0,
        0.0,
        500.0 / 1113.0,
        125.0 / 192.0,
        -2187.0 / 6784.0,
        11.0 / 84.0,
    ],
];

/// Fifth-order solution weights.
pub(super) const B: [f64; STAGES] = [
    35.0 / 384.0,
    0.0,
    500.0 / 1113.0,
    125.0 / 192.0,
    -2187.0 / 6784.0,
    11.0 / 84.0,
    0.0,
];

/// Fourth-order comparison weights for the error estimate.
pub(super) const B_HAT: [f64; STAGES] = [
    5179.0 / 57600.0,
    0.0,
    7571.0 / 16695.0,
    393.0 / 640.0,
    -92097.0 / 339200.0,
    187.0 / 2100.0,
    1.0 / 40.0,
];

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn weights_are_consistent_quadratures() {
        // Both weight rows integrate a constant exactly.
        assert_relative_eq!(B.iter().sum::<f64>(), 1.0, max_relative = 1e-15);
        assert_relative_eq!(B_HAT.iter().sum::<f64>(), 1.0, max_relative = 1e-15);
    }

    #[test]
    fn stage_offsets_match_the_row_sums() {
        for (row, c) in A.iter().zip(C) {
            assert_relative_eq!(row.iter().sum::<f64>(), c, epsilon = 1e-14);
        }
    }

    #[test]
    fn final_stage_sits_on_the_fifth_order_solution() {
        for (a, b) in A[STAGES - 1].iter().zip(B) {
            assert_relative_eq!(*a, b);
        }
    }
}

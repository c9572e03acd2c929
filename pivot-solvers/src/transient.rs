//! Time integration of ODE models.
//!
//! Both solvers share the same sampling contract: the caller passes a
//! strictly increasing sequence of requested sample times, and the returned
//! solution holds exactly one state per requested time, in request order.
//! Integration runs from the model's initial time to the last requested
//! time; internal steps may be finer than the sampling.

pub mod dormand_prince;
pub mod runge_kutta;

/// Builds `count` evenly spaced sample times from `t_start` to `t_end`,
/// inclusive of both endpoints.
///
/// This is the usual way to request fixed-rate output, e.g. 50 samples per
/// unit time across a span. A `count` of one yields just `t_start`; the
/// result is strictly increasing only when `t_end > t_start`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn uniform_sample_times(t_start: f64, t_end: f64, count: usize) -> Vec<f64> {
    if count == 1 {
        return vec![t_start];
    }

    let span = t_end - t_start;
    (0..count)
        .map(|i| t_start + span * (i as f64 / (count - 1) as f64))
        .collect()
}

/// Checks a requested sample-time sequence against the initial time.
///
/// Returns the failure reason for an empty, non-finite, or non-increasing
/// sequence, or one that starts before `t_start`.
pub(crate) fn check_sample_times(sample_times: &[f64], t_start: f64) -> Result<(), &'static str> {
    let Some(first) = sample_times.first() else {
        return Err("no sample times requested");
    };

    if sample_times.iter().any(|t| !t.is_finite()) {
        return Err("sample times must be finite");
    }

    if *first < t_start {
        return Err("first sample time precedes the initial time");
    }

    if sample_times.windows(2).any(|pair| pair[1] <= pair[0]) {
        return Err("sample times must be strictly increasing");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_strictly_increasing_sequence() {
        assert_eq!(check_sample_times(&[0.0, 0.5, 2.0], 0.0), Ok(()));
    }

    #[test]
    fn accepts_a_single_sample_at_the_initial_time() {
        assert_eq!(check_sample_times(&[1.0], 1.0), Ok(()));
    }

    #[test]
    fn rejects_an_empty_sequence() {
        assert!(check_sample_times(&[], 0.0).is_err());
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(check_sample_times(&[0.0, f64::NAN], 0.0).is_err());
        assert!(check_sample_times(&[0.0, f64::INFINITY], 0.0).is_err());
    }

    #[test]
    fn rejects_samples_before_the_initial_time() {
        assert!(check_sample_times(&[-0.1, 1.0], 0.0).is_err());
    }

    #[test]
    fn rejects_repeated_or_decreasing_samples() {
        assert!(check_sample_times(&[0.0, 1.0, 1.0], 0.0).is_err());
        assert!(check_sample_times(&[0.0, 2.0, 1.0], 0.0).is_err());
    }

    #[test]
    fn uniform_samples_span_both_endpoints() {
        let times = uniform_sample_times(0.0, 20.0, 1000);

        assert_eq!(times.len(), 1000);
        assert_eq!(times[0], 0.0);
        assert_eq!(times[999], 20.0);
        assert_eq!(check_sample_times(&times, 0.0), Ok(()));
    }

    #[test]
    fn uniform_samples_handle_degenerate_counts() {
        assert!(uniform_sample_times(0.0, 1.0, 0).is_empty());
        assert_eq!(uniform_sample_times(2.5, 9.0, 1), vec![2.5]);
    }
}

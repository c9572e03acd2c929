//! End-to-end tests of the double-pendulum simulation pipeline.

use integration_tests::{reference_initial, reference_parameters};
use pivot_components::double_pendulum::{Dynamics, State, bob_traces, mechanical_energy};
use pivot_solvers::transient::{dormand_prince, uniform_sample_times};
use uom::si::energy::joule;

#[test]
fn the_reference_scenario_runs_to_completion() {
    let initial = reference_initial();
    let sample_times = uniform_sample_times(0.0, 20.0, 1000);

    let solution = dormand_prince::solve_unobserved(
        &Dynamics,
        &initial,
        &sample_times,
        &dormand_prince::Config::default(),
    )
    .expect("should integrate the full span");

    assert_eq!(solution.status, dormand_prince::Status::Complete);
    assert_eq!(solution.samples.len(), sample_times.len());

    for (sample, t) in solution.samples.iter().zip(&sample_times) {
        assert_eq!(sample.t, *t);
        assert!(sample.y.iter().all(|v| v.is_finite()));
    }
}

#[test]
fn bob_traces_cover_every_sample() {
    let parameters = reference_parameters();
    let initial = reference_initial();
    let sample_times = uniform_sample_times(0.0, 2.0, 101);

    let solution = dormand_prince::solve_unobserved(
        &Dynamics,
        &initial,
        &sample_times,
        &dormand_prince::Config::default(),
    )
    .expect("should solve");

    let states: Vec<State> = solution
        .samples
        .iter()
        .map(|sample| State::from_si(sample.y))
        .collect();
    let [first, second] = bob_traces(&parameters, &states);

    assert_eq!(first.len(), sample_times.len());
    assert_eq!(second.len(), sample_times.len());

    // Both bobs stay within the reach of their rods.
    let l = 0.5;
    for point in first {
        assert!(point[0].hypot(point[1]) <= l + 1e-9);
    }
    for point in second {
        assert!(point[0].hypot(point[1]) <= 2.0 * l + 1e-9);
    }
}

#[test]
fn energy_is_conserved_over_a_short_window() {
    let parameters = reference_parameters();
    let initial = reference_initial();
    let sample_times = [0.01];

    let solution = dormand_prince::solve_unobserved(
        &Dynamics,
        &initial,
        &sample_times,
        &dormand_prince::Config::default(),
    )
    .expect("should solve");

    let initial_energy = mechanical_energy(&parameters, &initial.state).get::<joule>();
    let final_energy =
        mechanical_energy(&parameters, &State::from_si(solution.samples[0].y)).get::<joule>();

    let drift = ((final_energy - initial_energy) / initial_energy).abs();
    assert!(drift < 0.01, "relative energy drift {drift} exceeds 1%");
}

#[test]
fn energy_drift_stays_small_across_many_swings() {
    let parameters = reference_parameters();
    let initial = reference_initial();
    let sample_times = uniform_sample_times(0.0, 5.0, 251);

    let solution = dormand_prince::solve_unobserved(
        &Dynamics,
        &initial,
        &sample_times,
        &dormand_prince::Config::default(),
    )
    .expect("should solve");

    let initial_energy = mechanical_energy(&parameters, &initial.state).get::<joule>();

    for sample in &solution.samples {
        let energy = mechanical_energy(&parameters, &State::from_si(sample.y)).get::<joule>();
        let drift = ((energy - initial_energy) / initial_energy).abs();
        assert!(
            drift < 0.01,
            "relative energy drift {drift} at t = {} exceeds 1%",
            sample.t
        );
    }
}

#[test]
fn identical_runs_reproduce_the_same_trajectory() {
    let initial = reference_initial();
    let sample_times = uniform_sample_times(0.0, 10.0, 500);
    let config = dormand_prince::Config::default();

    let first = dormand_prince::solve_unobserved(&Dynamics, &initial, &sample_times, &config)
        .expect("should solve");
    let second = dormand_prince::solve_unobserved(&Dynamics, &initial, &sample_times, &config)
        .expect("should solve");

    assert_eq!(first.stats, second.stats);
    for (a, b) in first.samples.iter().zip(&second.samples) {
        assert_eq!(a.t, b.t);
        assert_eq!(a.y, b.y);
    }
}

#[test]
fn an_exhausted_step_budget_surfaces_the_partial_trajectory() {
    let initial = reference_initial();
    let sample_times = uniform_sample_times(0.0, 20.0, 1000);
    let config = dormand_prince::Config {
        max_steps: 100,
        ..dormand_prince::Config::default()
    };

    let result = dormand_prince::solve_unobserved(&Dynamics, &initial, &sample_times, &config);

    match result {
        Err(dormand_prince::Error::StepLimitExceeded {
            t_reached, partial, ..
        }) => {
            assert!(t_reached < 20.0);
            assert!(partial.len() < sample_times.len());
            for (sample, t) in partial.iter().zip(&sample_times) {
                assert_eq!(sample.t, *t);
            }
        }
        other => panic!("expected StepLimitExceeded, got {other:?}"),
    }
}

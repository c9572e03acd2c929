use std::convert::Infallible;

use pivot_core::{
    Model,
    ode::{Integratable, State as OdeState},
};
use uom::si::{
    angular_velocity::radian_per_second,
    f64::{AngularVelocity, Torque},
    torque::newton_meter,
};

use super::{Parameters, State};

/// Evaluates the Hamiltonian equations of motion for the double pendulum.
///
/// The system is time-invariant and the evaluation is a pure function of the
/// input. The denominator `16 - 9·cos²(φ₁ - φ₂)` stays within `[7, 16]` for
/// all real angles, so no singularity guard is needed.
pub struct Dynamics;

/// Input to the dynamics: physical parameters plus the current state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Input {
    pub parameters: Parameters,
    pub state: State,
}

/// Time derivative of the canonical state.
///
/// Angle rates pair with [`State::phi_1`]/[`State::phi_2`]; the torques are
/// the rates of change of the conjugate momenta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Output {
    pub dphi_1: AngularVelocity,
    pub dphi_2: AngularVelocity,
    pub dp_1: Torque,
    pub dp_2: Torque,
}

impl Input {
    /// Creates a dynamics input from parameters and a state.
    #[must_use]
    pub fn new(parameters: Parameters, state: State) -> Self {
        Self { parameters, state }
    }

    /// Returns this input with the state replaced.
    #[must_use]
    pub fn with_state(mut self, state: State) -> Self {
        self.state = state;
        self
    }
}

impl Output {
    /// Creates an output from SI values in the fixed vector order
    /// (rad/s, rad/s, N·m, N·m).
    #[must_use]
    pub fn from_si([dphi_1, dphi_2, dp_1, dp_2]: [f64; 4]) -> Self {
        Self {
            dphi_1: AngularVelocity::new::<radian_per_second>(dphi_1),
            dphi_2: AngularVelocity::new::<radian_per_second>(dphi_2),
            dp_1: Torque::new::<newton_meter>(dp_1),
            dp_2: Torque::new::<newton_meter>(dp_2),
        }
    }

    /// Returns the derivative as SI values in the fixed vector order.
    #[must_use]
    pub fn to_si(&self) -> [f64; 4] {
        [
            self.dphi_1.value,
            self.dphi_2.value,
            self.dp_1.value,
            self.dp_2.value,
        ]
    }
}

/// Angular velocities implied by the canonical momenta, in rad/s.
///
/// Shared with the energy calculation, which needs the same inversion of the
/// momentum relations.
pub(super) fn angular_velocities_si(parameters: &Parameters, state: &State) -> [f64; 2] {
    let l = parameters.rod_length.value;
    let m = parameters.bob_mass.value;
    let [phi_1, phi_2, p_1, p_2] = state.to_si();

    let c = m * l * l;
    let cos_dphi = (phi_1 - phi_2).cos();
    let denom = 16.0 - 9.0 * cos_dphi * cos_dphi;

    [
        6.0 / c * (2.0 * p_1 - 3.0 * cos_dphi * p_2) / denom,
        6.0 / c * (8.0 * p_2 - 3.0 * cos_dphi * p_1) / denom,
    ]
}

/// Standard gravitational acceleration in m/s².
pub(super) const STANDARD_GRAVITY: f64 = 9.806_65;

impl Model for Dynamics {
    type Input = Input;
    type Output = Output;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let Input { parameters, state } = input;

        let l = parameters.rod_length.value;
        let m = parameters.bob_mass.value;
        let g = STANDARD_GRAVITY;
        let [phi_1, phi_2, ..] = state.to_si();

        let c = m * l * l;
        let sin_dphi = (phi_1 - phi_2).sin();
        let [dphi_1, dphi_2] = angular_velocities_si(parameters, state);

        let dp_1 = -c / 2.0 * (dphi_1 * dphi_2 * sin_dphi + 3.0 * (g / l) * phi_1.sin());
        let dp_2 = -c / 2.0 * (-dphi_1 * dphi_2 * sin_dphi + (g / l) * phi_2.sin());

        Ok(Output::from_si([dphi_1, dphi_2, dp_1, dp_2]))
    }
}

/// The dynamics carry no explicit time dependence, so initial conditions are
/// anchored at `t = 0` and the solver owns the clock from there.
impl Integratable<4> for Dynamics {
    fn apply_state(initial_conditions: &Self::Input, state: OdeState<4>) -> Self::Input {
        initial_conditions.with_state(State::from_si(state.y))
    }

    fn extract_state(input: &Self::Input) -> OdeState<4> {
        OdeState {
            t: 0.0,
            y: input.state.to_si(),
        }
    }

    fn extract_derivative(output: &Self::Output) -> [f64; 4] {
        output.to_si()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn reference_parameters() -> Parameters {
        Parameters::from_si(0.5, 0.1)
    }

    #[test]
    fn hanging_at_rest_is_an_equilibrium() {
        let input = Input::new(reference_parameters(), State::from_si([0.0; 4]));

        let output = Dynamics.call(&input).unwrap();

        assert_eq!(output.to_si(), [0.0; 4]);
    }

    #[test]
    fn gravity_torques_match_the_closed_form_at_zero_momentum() {
        // With both momenta zero the velocity terms vanish and only the
        // gravity terms remain: dp_1 = -(3/2)·m·g·l·sin(φ₁) and
        // dp_2 = -(1/2)·m·g·l·sin(φ₂).
        let (l, m) = (0.5, 0.1);
        let g = STANDARD_GRAVITY;
        let phi_1 = std::f64::consts::FRAC_PI_2;
        let input = Input::new(
            Parameters::from_si(l, m),
            State::from_si([phi_1, 0.0, 0.0, 0.0]),
        );

        let [dphi_1, dphi_2, dp_1, dp_2] = Dynamics.call(&input).unwrap().to_si();

        assert_eq!([dphi_1, dphi_2], [0.0, 0.0]);
        assert_relative_eq!(dp_1, -1.5 * m * g * l, max_relative = 1e-12);
        assert_abs_diff_eq!(dp_2, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn momentum_terms_match_the_closed_form_at_aligned_rods() {
        // Aligned rods give cos(φ₁-φ₂) = 1 and a denominator of 7, so with
        // unit parameters dφ₁ = 6·(2p₁ - 3p₂)/7 and dφ₂ = 6·(8p₂ - 3p₁)/7.
        let input = Input::new(
            Parameters::from_si(1.0, 1.0),
            State::from_si([0.0, 0.0, 1.0, 0.0]),
        );

        let [dphi_1, dphi_2, dp_1, dp_2] = Dynamics.call(&input).unwrap().to_si();

        assert_relative_eq!(dphi_1, 12.0 / 7.0, max_relative = 1e-12);
        assert_relative_eq!(dphi_2, -18.0 / 7.0, max_relative = 1e-12);
        assert_abs_diff_eq!(dp_1, 0.0);
        assert_abs_diff_eq!(dp_2, 0.0);
    }

    #[test]
    fn denominator_stays_within_bounds_over_an_angle_sweep() {
        // cos ∈ [-1, 1] forces 16 - 9·cos² into [7, 16]; sweep a grid of
        // angle pairs and confirm the bound that makes the dynamics total.
        for i in 0..100 {
            for j in 0..100 {
                let phi_1 = -10.0 + 0.2 * f64::from(i);
                let phi_2 = -10.0 + 0.2 * f64::from(j);

                let cos_dphi = (phi_1 - phi_2).cos();
                let denom = 16.0 - 9.0 * cos_dphi * cos_dphi;

                assert!((7.0..=16.0).contains(&denom), "denom {denom} out of range");
            }
        }
    }

    #[test]
    fn derivative_always_has_four_finite_components() {
        let parameters = reference_parameters();

        for i in 0..50 {
            let phi_1 = -6.0 + 0.25 * f64::from(i);
            let phi_2 = 6.0 - 0.25 * f64::from(i);
            let p_1 = 0.01 * f64::from(i);
            let input = Input::new(parameters, State::from_si([phi_1, phi_2, p_1, 0.065]));

            let derivative = Dynamics.call(&input).unwrap().to_si();

            assert!(derivative.iter().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn evaluation_is_deterministic_and_leaves_the_input_unchanged() {
        let input = Input::new(
            reference_parameters(),
            State::from_si([1.0471975511965976, -0.7853981633974483, 0.0, 0.065]),
        );
        let before = input;

        let first = Dynamics.call(&input).unwrap();
        let second = Dynamics.call(&input).unwrap();

        assert_eq!(first, second);
        assert_eq!(input, before);
    }

    #[test]
    fn solver_state_round_trips_through_the_integratable_conversions() {
        let initial = Input::new(reference_parameters(), State::from_si([0.1, 0.2, 0.3, 0.4]));

        let extracted = Dynamics::extract_state(&initial);
        assert_eq!(extracted.t, 0.0);
        assert_eq!(extracted.y, [0.1, 0.2, 0.3, 0.4]);

        let applied = Dynamics::apply_state(
            &initial,
            OdeState {
                t: 3.0,
                y: [0.5, 0.6, 0.7, 0.8],
            },
        );
        assert_eq!(applied.parameters, initial.parameters);
        assert_eq!(applied.state.to_si(), [0.5, 0.6, 0.7, 0.8]);
    }
}

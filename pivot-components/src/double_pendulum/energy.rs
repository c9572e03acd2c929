use uom::si::{energy::joule, f64::Energy};

use super::{Parameters, State, dynamics};

/// Total mechanical energy of the pendulum in the given state.
///
/// The kinetic term uses the canonical pairing `(p₁·φ̇₁ + p₂·φ̇₂) / 2`, which
/// is exact because the kinetic energy is quadratic in the angular
/// velocities. The potential measures both rod centers of mass against the
/// pivot, so the hanging rest state has energy `-2·m·g·l`.
///
/// The dynamics conserve this quantity; its drift along an integrated
/// trajectory measures integrator error.
#[must_use]
pub fn mechanical_energy(parameters: &Parameters, state: &State) -> Energy {
    let l = parameters.rod_length.value;
    let m = parameters.bob_mass.value;
    let g = dynamics::STANDARD_GRAVITY;
    let [phi_1, phi_2, p_1, p_2] = state.to_si();
    let [dphi_1, dphi_2] = dynamics::angular_velocities_si(parameters, state);

    let kinetic = 0.5 * (p_1 * dphi_1 + p_2 * dphi_2);
    let potential = -0.5 * m * g * l * (3.0 * phi_1.cos() + phi_2.cos());

    Energy::new::<joule>(kinetic + potential)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn hanging_rest_state_sits_at_the_potential_floor() {
        let (l, m) = (0.5, 0.1);
        let parameters = Parameters::from_si(l, m);
        let state = State::from_si([0.0; 4]);

        let energy = mechanical_energy(&parameters, &state);

        assert_relative_eq!(
            energy.get::<joule>(),
            -2.0 * m * dynamics::STANDARD_GRAVITY * l,
            max_relative = 1e-12
        );
    }

    #[test]
    fn horizontal_rods_at_rest_have_zero_energy() {
        let parameters = Parameters::from_si(0.5, 0.1);
        let phi = std::f64::consts::FRAC_PI_2;
        let state = State::from_si([phi, phi, 0.0, 0.0]);

        let energy = mechanical_energy(&parameters, &state);

        assert_abs_diff_eq!(energy.get::<joule>(), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn momentum_raises_the_energy_above_the_rest_value() {
        let parameters = Parameters::from_si(0.5, 0.1);
        let at_rest = State::from_si([0.2, -0.1, 0.0, 0.0]);
        let moving = State::from_si([0.2, -0.1, 0.02, -0.01]);

        let rest_energy = mechanical_energy(&parameters, &at_rest);
        let moving_energy = mechanical_energy(&parameters, &moving);

        assert!(moving_energy > rest_energy);
    }
}

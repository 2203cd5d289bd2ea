use nalgebra::Complex;

/// A dense state vector over `num_wires` qubits.
///
/// Basis index convention: bit `w` of a basis-state index holds the value of
/// wire `w`. Gates are applied in place; every gate is unitary, so the norm
/// invariant `Σ|amp|² = 1` holds after any sequence of applications.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    amps: Vec<Complex<f64>>,
    num_wires: usize,
}

impl StateVector {
    /// Initializes `|0...0⟩`.
    pub fn new(num_wires: usize) -> Self {
        let mut amps = vec![Complex::new(0.0, 0.0); 1 << num_wires];
        amps[0] = Complex::new(1.0, 0.0);
        Self { amps, num_wires }
    }

    pub fn num_wires(&self) -> usize {
        self.num_wires
    }

    pub fn amplitude(&self, basis_index: usize) -> Complex<f64> {
        self.amps[basis_index]
    }

    pub fn norm_sqr(&self) -> f64 {
        self.amps.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Rotation about the X axis: `exp(-i θ X / 2)`.
    pub fn apply_rx(&mut self, wire: usize, theta: f64) {
        let (s, c) = (theta / 2.0).sin_cos();
        let is = Complex::new(0.0, -s);
        self.apply_single_qubit(wire, |a0, a1| (c * a0 + is * a1, is * a0 + c * a1));
    }

    /// Rotation about the Y axis: `exp(-i θ Y / 2)`.
    pub fn apply_ry(&mut self, wire: usize, theta: f64) {
        let (s, c) = (theta / 2.0).sin_cos();
        self.apply_single_qubit(wire, |a0, a1| (c * a0 - s * a1, s * a0 + c * a1));
    }

    /// Rotation about the Z axis: `exp(-i θ Z / 2)`.
    pub fn apply_rz(&mut self, wire: usize, theta: f64) {
        let phase0 = Complex::from_polar(1.0, -theta / 2.0);
        let phase1 = Complex::from_polar(1.0, theta / 2.0);
        self.apply_single_qubit(wire, |a0, a1| (phase0 * a0, phase1 * a1));
    }

    /// Flips `target` wherever `control` is set.
    pub fn apply_cnot(&mut self, control: usize, target: usize) {
        assert!(control < self.num_wires && target < self.num_wires);
        assert!(control != target);
        let control_mask = 1 << control;
        let target_mask = 1 << target;
        for i in 0..self.amps.len() {
            if i & control_mask != 0 && i & target_mask == 0 {
                self.amps.swap(i, i | target_mask);
            }
        }
    }

    /// Expectation value of Pauli-Z on `wire`; always in `[-1, 1]`.
    pub fn expectation_z(&self, wire: usize) -> f64 {
        assert!(wire < self.num_wires);
        let mask = 1 << wire;
        self.amps
            .iter()
            .enumerate()
            .map(|(i, amp)| {
                let sign = if i & mask == 0 { 1.0 } else { -1.0 };
                sign * amp.norm_sqr()
            })
            .sum()
    }

    fn apply_single_qubit<F>(&mut self, wire: usize, gate: F)
    where
        F: Fn(Complex<f64>, Complex<f64>) -> (Complex<f64>, Complex<f64>),
    {
        assert!(wire < self.num_wires);
        let mask = 1 << wire;
        for i in 0..self.amps.len() {
            if i & mask == 0 {
                let j = i | mask;
                let (a0, a1) = (self.amps[i], self.amps[j]);
                let (b0, b1) = gate(a0, a1);
                self.amps[i] = b0;
                self.amps[j] = b1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn fresh_state_is_all_zeros_with_unit_norm() {
        let state = StateVector::new(4);
        assert!(f64_approx_equal(state.norm_sqr(), 1.0));
        assert!(f64_approx_equal(state.expectation_z(0), 1.0));
        assert!(f64_approx_equal(state.expectation_z(3), 1.0));
    }

    #[test]
    fn rx_pi_flips_the_z_expectation() {
        let mut state = StateVector::new(1);
        state.apply_rx(0, PI);
        assert!(f64_approx_equal(state.expectation_z(0), -1.0));
        assert!(f64_approx_equal(state.norm_sqr(), 1.0));
    }

    #[test]
    fn ry_half_pi_creates_an_even_superposition() {
        let mut state = StateVector::new(1);
        state.apply_ry(0, FRAC_PI_2);
        assert!(f64_approx_equal(state.expectation_z(0), 0.0));
        assert!(f64_approx_equal(state.amplitude(0).norm_sqr(), 0.5));
        assert!(f64_approx_equal(state.amplitude(1).norm_sqr(), 0.5));
    }

    #[test]
    fn rz_leaves_populations_untouched() {
        let mut state = StateVector::new(2);
        state.apply_ry(0, 1.234);
        let before = state.expectation_z(0);
        state.apply_rz(0, 0.777);
        assert!(f64_approx_equal(state.expectation_z(0), before));
        assert!(f64_approx_equal(state.norm_sqr(), 1.0));
    }

    #[test]
    fn zero_angle_rotations_are_the_identity() {
        let mut state = StateVector::new(3);
        state.apply_ry(1, 0.9);
        let reference = state.clone();
        state.apply_rx(0, 0.0);
        state.apply_ry(1, 0.0);
        state.apply_rz(2, 0.0);
        for i in 0..8 {
            assert!((state.amplitude(i) - reference.amplitude(i)).norm() < TOLERANCE);
        }
    }

    #[test]
    fn cnot_flips_target_only_when_control_is_set() {
        // Control clear: nothing happens.
        let mut state = StateVector::new(2);
        state.apply_cnot(0, 1);
        assert!(f64_approx_equal(state.amplitude(0b00).norm_sqr(), 1.0));

        // Control set via RX(pi): target follows.
        let mut state = StateVector::new(2);
        state.apply_rx(0, PI);
        state.apply_cnot(0, 1);
        assert!(f64_approx_equal(state.amplitude(0b11).norm_sqr(), 1.0));
    }

    #[test]
    fn cnot_is_an_involution() {
        let mut state = StateVector::new(3);
        state.apply_rx(0, 0.3);
        state.apply_ry(1, 1.1);
        let reference = state.clone();
        state.apply_cnot(0, 2);
        state.apply_cnot(0, 2);
        for i in 0..8 {
            assert!((state.amplitude(i) - reference.amplitude(i)).norm() < TOLERANCE);
        }
    }

    #[test]
    fn entangled_readout_tracks_the_control_wire() {
        // RX(theta) on wire 0, then CNOT(0 -> 1): wire 1 inherits wire 0's
        // population, so <Z_1> = cos(theta).
        let theta = 0.83;
        let mut state = StateVector::new(2);
        state.apply_rx(0, theta);
        state.apply_cnot(0, 1);
        assert!(f64_approx_equal(state.expectation_z(1), theta.cos()));
    }

    #[test]
    fn norm_is_preserved_by_a_long_gate_sequence() {
        let mut state = StateVector::new(4);
        state.apply_rx(0, 0.4);
        state.apply_ry(1, 1.9);
        state.apply_rz(2, 2.5);
        state.apply_cnot(0, 1);
        state.apply_cnot(1, 2);
        state.apply_cnot(2, 3);
        state.apply_ry(3, 0.2);
        assert!(f64_approx_equal(state.norm_sqr(), 1.0));
    }
}

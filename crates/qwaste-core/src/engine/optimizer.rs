use crate::core::quantum::circuit::{PARAM_COUNT, VariationalCircuit};
use crate::engine::config::OptimizerSettings;
use crate::engine::progress::{Progress, ProgressReporter};
use rand::Rng;
use std::f64::consts::FRAC_PI_2;
use tracing::{debug, instrument};

/// Shift angle of the two-point parameter-shift rule.
pub const PARAMETER_SHIFT: f64 = FRAC_PI_2;

/// Gradient of a circuit-style cost via the parameter-shift rule:
/// `∂f/∂θj = (f(θ + π/2·ej) - f(θ - π/2·ej)) / 2`.
///
/// Exact for expectation values of gates generated by Pauli operators, which
/// covers every rotation in the ansatz.
pub fn parameter_shift_gradient<F>(cost: F, params: &[f64; PARAM_COUNT]) -> [f64; PARAM_COUNT]
where
    F: Fn(&[f64; PARAM_COUNT]) -> f64,
{
    let mut gradient = [0.0; PARAM_COUNT];
    for j in 0..PARAM_COUNT {
        let mut plus = *params;
        plus[j] += PARAMETER_SHIFT;
        let mut minus = *params;
        minus[j] -= PARAMETER_SHIFT;
        gradient[j] = (cost(&plus) - cost(&minus)) / 2.0;
    }
    gradient
}

/// Plain gradient descent over the trainable circuit parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientDescent {
    pub step_size: f64,
    pub iterations: usize,
}

impl GradientDescent {
    pub fn new(settings: &OptimizerSettings) -> Self {
        Self {
            step_size: settings.step_size,
            iterations: settings.iterations,
        }
    }

    /// One descent step against the given cost.
    pub fn step<F>(&self, cost: F, params: &mut [f64; PARAM_COUNT])
    where
        F: Fn(&[f64; PARAM_COUNT]) -> f64,
    {
        let gradient = parameter_shift_gradient(cost, params);
        for (p, g) in params.iter_mut().zip(gradient.iter()) {
            *p -= self.step_size * g;
        }
    }

    /// Minimizes the circuit readout over randomly drawn encoding inputs.
    ///
    /// Each iteration draws one input vector in `[0, input_scale)³`, holds it
    /// fixed across the parameter-shift evaluations of that step, and takes a
    /// single descent step. Parameters start uniformly in `[0, 1)`.
    #[instrument(level = "debug", skip_all, fields(iterations = self.iterations, input_scale = input_scale))]
    pub fn optimize(
        &self,
        circuit: &VariationalCircuit,
        input_scale: f64,
        rng: &mut impl Rng,
        reporter: &ProgressReporter,
    ) -> [f64; PARAM_COUNT] {
        let mut params = [0.0; PARAM_COUNT];
        for p in &mut params {
            *p = rng.gen_range(0.0..1.0);
        }

        for iteration in 0..self.iterations {
            let inputs = [
                rng.gen_range(0.0..1.0) * input_scale,
                rng.gen_range(0.0..1.0) * input_scale,
                rng.gen_range(0.0..1.0) * input_scale,
            ];
            self.step(|p| circuit.evaluate(p, &inputs), &mut params);
            reporter.report(Progress::OptimizationStep {
                iteration: iteration + 1,
                total: self.iterations,
            });
        }

        debug!(?params, "Optimization finished.");
        params
    }
}

use crate::core::models::chain::CompositionSpec;
use thiserror::Error;

/// Smallest chain the simulation accepts; a single monomer has no bonds.
pub const MIN_LENGTH: usize = 2;
/// Largest chain the simulation accepts; the difficulty model is trained on
/// lengths up to this bound.
pub const MAX_LENGTH: usize = 200;

pub const DEFAULT_LENGTH: usize = 10;
pub const DEFAULT_TEMPERATURE: f64 = 25.0;
pub const DEFAULT_PRESSURE: f64 = 1.0;
pub const DEFAULT_STEP_SIZE: f64 = 0.4;
pub const DEFAULT_ITERATIONS: usize = 100;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Polymer length {length} out of range [{MIN_LENGTH}, {MAX_LENGTH}]")]
    LengthOutOfRange { length: usize },
    #[error("Parameter {name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },
    #[error("Parameter {name} must be positive")]
    NotPositive { name: &'static str },
}

/// Gradient-descent settings for the circuit optimizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizerSettings {
    pub step_size: f64,
    pub iterations: usize,
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        Self {
            step_size: DEFAULT_STEP_SIZE,
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

/// A validated simulation request.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub length: usize,
    pub composition: CompositionSpec,
    pub temperature: f64,
    pub pressure: f64,
    pub optimizer: OptimizerSettings,
    pub seed: Option<u64>,
}

#[derive(Default)]
pub struct SimulationConfigBuilder {
    length: Option<usize>,
    composition: Option<CompositionSpec>,
    temperature: Option<f64>,
    pressure: Option<f64>,
    step_size: Option<f64>,
    iterations: Option<usize>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }
    pub fn composition(mut self, spec: CompositionSpec) -> Self {
        self.composition = Some(spec);
        self
    }
    pub fn temperature(mut self, celsius: f64) -> Self {
        self.temperature = Some(celsius);
        self
    }
    pub fn pressure(mut self, atmospheres: f64) -> Self {
        self.pressure = Some(atmospheres);
        self
    }
    pub fn step_size(mut self, step_size: f64) -> Self {
        self.step_size = Some(step_size);
        self
    }
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let length = self.length.unwrap_or(DEFAULT_LENGTH);
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(ConfigError::LengthOutOfRange { length });
        }

        let temperature = self.temperature.unwrap_or(DEFAULT_TEMPERATURE);
        if !temperature.is_finite() {
            return Err(ConfigError::NotFinite {
                name: "temperature",
                value: temperature,
            });
        }

        let pressure = self.pressure.unwrap_or(DEFAULT_PRESSURE);
        if !pressure.is_finite() {
            return Err(ConfigError::NotFinite {
                name: "pressure",
                value: pressure,
            });
        }

        let step_size = self.step_size.unwrap_or(DEFAULT_STEP_SIZE);
        if !step_size.is_finite() {
            return Err(ConfigError::NotFinite {
                name: "step_size",
                value: step_size,
            });
        }
        if step_size <= 0.0 {
            return Err(ConfigError::NotPositive { name: "step_size" });
        }

        let iterations = self.iterations.unwrap_or(DEFAULT_ITERATIONS);
        if iterations == 0 {
            return Err(ConfigError::NotPositive { name: "iterations" });
        }

        Ok(SimulationConfig {
            length,
            composition: self.composition.unwrap_or_default(),
            temperature,
            pressure,
            optimizer: OptimizerSettings {
                step_size,
                iterations,
            },
            seed: self.seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_api_contract() {
        let config = SimulationConfigBuilder::new().build().unwrap();
        assert_eq!(config.length, 10);
        assert_eq!(config.composition, CompositionSpec::Random);
        assert_eq!(config.temperature, 25.0);
        assert_eq!(config.pressure, 1.0);
        assert_eq!(config.optimizer.step_size, 0.4);
        assert_eq!(config.optimizer.iterations, 100);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn rejects_lengths_outside_the_model_range() {
        for length in [0usize, 1, 201, 10_000] {
            let result = SimulationConfigBuilder::new().length(length).build();
            assert_eq!(
                result.unwrap_err(),
                ConfigError::LengthOutOfRange { length }
            );
        }
    }

    #[test]
    fn accepts_the_boundary_lengths() {
        for length in [MIN_LENGTH, MAX_LENGTH] {
            let config = SimulationConfigBuilder::new().length(length).build().unwrap();
            assert_eq!(config.length, length);
        }
    }

    #[test]
    fn rejects_non_finite_conditions() {
        let result = SimulationConfigBuilder::new()
            .temperature(f64::NAN)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::NotFinite {
                name: "temperature",
                ..
            })
        ));

        let result = SimulationConfigBuilder::new()
            .pressure(f64::INFINITY)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::NotFinite {
                name: "pressure",
                ..
            })
        ));
    }

    #[test]
    fn rejects_degenerate_optimizer_settings() {
        assert!(matches!(
            SimulationConfigBuilder::new().step_size(0.0).build(),
            Err(ConfigError::NotPositive { name: "step_size" })
        ));
        assert!(matches!(
            SimulationConfigBuilder::new().iterations(0).build(),
            Err(ConfigError::NotPositive { name: "iterations" })
        ));
    }

    #[test]
    fn overrides_are_preserved() {
        let config = SimulationConfigBuilder::new()
            .length(30)
            .composition(CompositionSpec::Uniform)
            .temperature(80.0)
            .pressure(3.5)
            .step_size(0.1)
            .iterations(10)
            .seed(7)
            .build()
            .unwrap();
        assert_eq!(config.length, 30);
        assert_eq!(config.composition, CompositionSpec::Uniform);
        assert_eq!(config.temperature, 80.0);
        assert_eq!(config.pressure, 3.5);
        assert_eq!(config.optimizer.step_size, 0.1);
        assert_eq!(config.optimizer.iterations, 10);
        assert_eq!(config.seed, Some(7));
    }
}

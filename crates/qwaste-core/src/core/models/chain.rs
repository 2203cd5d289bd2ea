use super::features::ChainFeatures;
use super::monomer::Monomer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    #[error("A chain of {monomers} monomer(s) requires {expected} bond(s), got {actual}")]
    BondCountMismatch {
        monomers: usize,
        expected: usize,
        actual: usize,
    },
    #[error("Unknown composition specification '{0}' (expected 'random' or 'uniform')")]
    UnknownComposition(String),
}

/// How the monomer sequence of a generated chain is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompositionSpec {
    /// Each monomer is drawn uniformly from the full alphabet.
    #[default]
    Random,
    /// Every monomer is `A`.
    Uniform,
}

impl CompositionSpec {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompositionSpec::Random => "random",
            CompositionSpec::Uniform => "uniform",
        }
    }
}

impl FromStr for CompositionSpec {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(CompositionSpec::Random),
            "uniform" => Ok(CompositionSpec::Uniform),
            other => Err(ChainError::UnknownComposition(other.to_string())),
        }
    }
}

impl fmt::Display for CompositionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A linear polymer: a monomer sequence plus the strength of each bond
/// between consecutive monomers.
///
/// The serialized form mirrors the wire format of the simulation API:
/// `length` is the monomer count and `bond_strengths` always holds exactly
/// `length - 1` entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolymerChain {
    pub length: usize,
    pub composition: Vec<Monomer>,
    pub bond_strengths: Vec<f64>,
}

impl PolymerChain {
    /// Assembles a chain, checking that the bond list matches the composition.
    pub fn new(composition: Vec<Monomer>, bond_strengths: Vec<f64>) -> Result<Self, ChainError> {
        let expected = composition.len().saturating_sub(1);
        if bond_strengths.len() != expected {
            return Err(ChainError::BondCountMismatch {
                monomers: composition.len(),
                expected,
                actual: bond_strengths.len(),
            });
        }
        Ok(Self {
            length: composition.len(),
            composition,
            bond_strengths,
        })
    }

    pub fn count_of(&self, kind: Monomer) -> usize {
        self.composition.iter().filter(|&&m| m == kind).count()
    }

    /// Mean bond strength; 0.0 for a chain with no bonds.
    pub fn avg_bond_strength(&self) -> f64 {
        if self.bond_strengths.is_empty() {
            return 0.0;
        }
        self.bond_strengths.iter().sum::<f64>() / self.bond_strengths.len() as f64
    }

    pub fn features(&self) -> ChainFeatures {
        ChainFeatures {
            length: self.length,
            count_a: self.count_of(Monomer::A),
            count_b: self.count_of(Monomer::B),
            count_c: self.count_of(Monomer::C),
            avg_bond_strength: self.avg_bond_strength(),
        }
    }
}

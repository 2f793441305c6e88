// Parameter providers feeding the cascade calculator
pub mod fixed_parameters;
pub mod random_parameters;

pub use fixed_parameters::FixedParameters;
pub use random_parameters::{RandomParameters, RandomRanges};

use crate::cascade::{compute_cascade_with, Cascade, ChainRounding};
use crate::constants::TROPHIC_LEVEL_COUNT;
use crate::error::CascadeError;
use serde::{Deserialize, Serialize};

/// Inputs for a single cascade computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CascadeParams {
    pub root_energy: f64,
    pub efficiencies_percent: [f64; TROPHIC_LEVEL_COUNT],
}

impl CascadeParams {
    pub fn new(root_energy: f64, efficiencies_percent: [f64; TROPHIC_LEVEL_COUNT]) -> Self {
        Self {
            root_energy,
            efficiencies_percent,
        }
    }

    pub fn compute(&self, rounding: ChainRounding) -> Result<Cascade, CascadeError> {
        compute_cascade_with(self.root_energy, self.efficiencies_percent, rounding)
    }
}

pub trait ParameterProvider {
    /// The name of this provider (for logging)
    fn name(&self) -> &str;

    /// Produce the inputs for the next cascade
    fn next_params(&mut self) -> Result<CascadeParams, CascadeError>;

    /// Chain rounding applied to cascades built from this provider
    fn rounding(&self) -> ChainRounding {
        ChainRounding::Exact
    }

    /// Draw parameters and compute a fresh cascade
    fn next_cascade(&mut self) -> Result<Cascade, CascadeError> {
        let params = self.next_params()?;
        params.compute(self.rounding())
    }
}

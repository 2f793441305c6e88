/// Fixed parameter provider
/// Always yields the same root energy and efficiencies (the static diagram)

use crate::cascade::ChainRounding;
use crate::constants::{DEFAULT_EFFICIENCIES_PERCENT, DEFAULT_ROOT_ENERGY};
use crate::error::CascadeError;
use crate::params::{CascadeParams, ParameterProvider};

pub struct FixedParameters {
    pub name: String,
    pub params: CascadeParams,
    pub rounding: ChainRounding,
}

impl FixedParameters {
    pub fn new(params: CascadeParams) -> Self {
        Self {
            name: "FixedParameters".to_string(),
            params,
            rounding: ChainRounding::Exact,
        }
    }

    pub fn with_rounding(mut self, rounding: ChainRounding) -> Self {
        self.rounding = rounding;
        self
    }
}

impl Default for FixedParameters {
    fn default() -> Self {
        Self::new(CascadeParams::new(DEFAULT_ROOT_ENERGY, DEFAULT_EFFICIENCIES_PERCENT))
    }
}

impl ParameterProvider for FixedParameters {
    fn name(&self) -> &str {
        &self.name
    }

    fn next_params(&mut self) -> Result<CascadeParams, CascadeError> {
        Ok(self.params)
    }

    fn rounding(&self) -> ChainRounding {
        self.rounding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_static_diagram() {
        let mut provider = FixedParameters::default();
        let cascade = provider.next_cascade().unwrap();
        assert_eq!(cascade.root_energy(), 1000.0);
        assert_eq!(cascade.efficiencies(), [20.0, 20.0, 20.0, 12.5]);
    }

    #[test]
    fn test_repeats_same_params() {
        let mut provider = FixedParameters::new(CascadeParams::new(5000.0, [10.0; 4]));
        assert_eq!(provider.next_params().unwrap(), provider.next_params().unwrap());
    }

    #[test]
    fn test_invalid_params_surface_on_compute() {
        let mut provider = FixedParameters::new(CascadeParams::new(0.0, [10.0; 4]));
        assert!(provider.next_cascade().unwrap_err().is_invalid_parameter());
    }
}

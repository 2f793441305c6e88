/// Random parameter provider
/// Draws a root energy and four efficiencies each time the diagram is regenerated

use crate::cascade::{validate_efficiency, ChainRounding};
use crate::constants::{
    RANDOM_EFFICIENCY_DECIMALS, RANDOM_EFFICIENCY_MAX_PERCENT, RANDOM_EFFICIENCY_MIN_PERCENT,
    RANDOM_ROOT_ENERGY_MAX, RANDOM_ROOT_ENERGY_MIN,
};
use crate::error::CascadeError;
use crate::math_utils::{lerp, round_to_decimals};
use crate::params::{CascadeParams, ParameterProvider};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomRanges {
    pub root_energy_min: u64,
    pub root_energy_max: u64,
    pub efficiency_min_percent: f64,
    pub efficiency_max_percent: f64,
    pub efficiency_decimals: u32,
}

impl Default for RandomRanges {
    fn default() -> Self {
        Self {
            root_energy_min: RANDOM_ROOT_ENERGY_MIN,
            root_energy_max: RANDOM_ROOT_ENERGY_MAX,
            efficiency_min_percent: RANDOM_EFFICIENCY_MIN_PERCENT,
            efficiency_max_percent: RANDOM_EFFICIENCY_MAX_PERCENT,
            efficiency_decimals: RANDOM_EFFICIENCY_DECIMALS,
        }
    }
}

impl RandomRanges {
    pub fn validate(&self) -> Result<(), CascadeError> {
        if self.root_energy_min == 0 {
            return Err(CascadeError::invalid("root_energy_min", 0.0, "must be positive"));
        }
        if self.root_energy_min > self.root_energy_max {
            return Err(CascadeError::invalid(
                "root_energy_max",
                self.root_energy_max as f64,
                "must not be below root_energy_min",
            ));
        }
        if self.efficiency_min_percent > self.efficiency_max_percent {
            return Err(CascadeError::invalid(
                "efficiency_max_percent",
                self.efficiency_max_percent,
                "must not be below efficiency_min_percent",
            ));
        }

        // Both ends must be usable efficiencies once rounded
        let low = round_to_decimals(self.efficiency_min_percent, self.efficiency_decimals);
        let high = round_to_decimals(self.efficiency_max_percent, self.efficiency_decimals);
        validate_efficiency(low, 0).map_err(|_| {
            CascadeError::invalid("efficiency_min_percent", self.efficiency_min_percent, "must lie in (0, 100]")
        })?;
        validate_efficiency(high, 0).map_err(|_| {
            CascadeError::invalid("efficiency_max_percent", self.efficiency_max_percent, "must lie in (0, 100]")
        })?;
        Ok(())
    }
}

pub struct RandomParameters<R: Rng> {
    pub name: String,
    pub ranges: RandomRanges,
    pub rounding: ChainRounding,
    rng: R,
}

impl<R: Rng> RandomParameters<R> {
    pub fn new(rng: R, ranges: RandomRanges) -> Result<Self, CascadeError> {
        ranges.validate()?;
        Ok(Self {
            name: "RandomParameters".to_string(),
            ranges,
            rounding: ChainRounding::Exact,
            rng,
        })
    }

    pub fn with_rounding(mut self, rounding: ChainRounding) -> Self {
        self.rounding = rounding;
        self
    }

    fn draw_efficiency(&mut self) -> f64 {
        let raw = lerp(
            self.ranges.efficiency_min_percent,
            self.ranges.efficiency_max_percent,
            self.rng.random::<f64>(),
        );
        round_to_decimals(raw, self.ranges.efficiency_decimals)
    }
}

impl RandomParameters<StdRng> {
    /// Reproducible provider: the same seed yields the same sequence of cascades
    pub fn from_seed(seed: u64, ranges: RandomRanges) -> Result<Self, CascadeError> {
        Self::new(StdRng::seed_from_u64(seed), ranges)
    }

    pub fn from_os_rng(ranges: RandomRanges) -> Result<Self, CascadeError> {
        Self::new(StdRng::from_os_rng(), ranges)
    }
}

impl<R: Rng> ParameterProvider for RandomParameters<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn next_params(&mut self) -> Result<CascadeParams, CascadeError> {
        let root_energy = self
            .rng
            .random_range(self.ranges.root_energy_min..=self.ranges.root_energy_max) as f64;
        let efficiencies = [
            self.draw_efficiency(),
            self.draw_efficiency(),
            self.draw_efficiency(),
            self.draw_efficiency(),
        ];
        Ok(CascadeParams::new(root_energy, efficiencies))
    }

    fn rounding(&self) -> ChainRounding {
        self.rounding
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use more_asserts::{assert_ge, assert_le};

    #[test]
    fn test_draws_stay_in_range() {
        let mut provider = RandomParameters::from_seed(7, RandomRanges::default()).unwrap();
        for _ in 0..500 {
            let params = provider.next_params().unwrap();
            assert_ge!(params.root_energy, 30_000.0);
            assert_le!(params.root_energy, 80_000.0);
            assert_eq!(params.root_energy.fract(), 0.0);
            for e in params.efficiencies_percent {
                assert_ge!(e, 7.0);
                assert_le!(e, 15.0);
                assert_eq!(round_to_decimals(e, 1), e);
            }
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RandomParameters::from_seed(42, RandomRanges::default()).unwrap();
        let mut b = RandomParameters::from_seed(42, RandomRanges::default()).unwrap();
        for _ in 0..10 {
            assert_eq!(a.next_cascade().unwrap(), b.next_cascade().unwrap());
        }
    }

    #[test]
    fn test_degenerate_range_is_constant() {
        let ranges = RandomRanges {
            root_energy_min: 1000,
            root_energy_max: 1000,
            efficiency_min_percent: 10.0,
            efficiency_max_percent: 10.0,
            efficiency_decimals: 1,
        };
        let mut provider = RandomParameters::from_seed(1, ranges).unwrap();
        let params = provider.next_params().unwrap();
        assert_eq!(params, CascadeParams::new(1000.0, [10.0; 4]));
    }

    #[test]
    fn test_rejects_bad_ranges() {
        let inverted = RandomRanges {
            root_energy_min: 80_000,
            root_energy_max: 30_000,
            ..RandomRanges::default()
        };
        assert!(RandomParameters::from_seed(1, inverted).is_err());

        let zero_root = RandomRanges {
            root_energy_min: 0,
            ..RandomRanges::default()
        };
        assert!(RandomParameters::from_seed(1, zero_root).is_err());

        let zero_efficiency = RandomRanges {
            efficiency_min_percent: 0.0,
            ..RandomRanges::default()
        };
        assert!(RandomParameters::from_seed(1, zero_efficiency).is_err());

        let over_hundred = RandomRanges {
            efficiency_max_percent: 120.0,
            ..RandomRanges::default()
        };
        assert!(RandomParameters::from_seed(1, over_hundred).is_err());
    }
}

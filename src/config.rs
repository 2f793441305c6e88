use crate::cascade::ChainRounding;
use crate::constants::{DEFAULT_EFFICIENCIES_PERCENT, DEFAULT_ENERGY_UNIT, DEFAULT_ROOT_ENERGY};
use crate::error::CascadeError;
use crate::params::{CascadeParams, RandomRanges};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Configuration for building and presenting cascades
///
/// Every field is optional in the JSON file; missing fields take the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CascadeConfig {
    pub energy_unit: String,
    pub rounding: ChainRounding,

    // Static diagram inputs
    pub root_energy: f64,
    pub efficiencies_percent: [f64; 4],

    // Random regeneration
    pub random: RandomRanges,
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self {
            energy_unit: DEFAULT_ENERGY_UNIT.to_string(),
            rounding: ChainRounding::Exact,
            root_energy: DEFAULT_ROOT_ENERGY,
            efficiencies_percent: DEFAULT_EFFICIENCIES_PERCENT,
            random: RandomRanges::default(),
        }
    }
}

impl CascadeConfig {
    /// Load a configuration from a JSON file
    pub fn load_json<P: AsRef<Path>>(file_path: P) -> Result<Self, CascadeError> {
        let path = file_path.as_ref();
        let json_str = fs::read_to_string(path).map_err(|source| CascadeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&json_str).map_err(|source| CascadeError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json_str(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Load from `path` if given, otherwise fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self, CascadeError> {
        match file_path {
            Some(path) => Self::load_json(path),
            None => {
                info!("no config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn static_params(&self) -> CascadeParams {
        CascadeParams::new(self.root_energy, self.efficiencies_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CascadeConfig::default();
        assert_eq!(config.energy_unit, "kcal");
        assert_eq!(config.static_params(), CascadeParams::new(1000.0, [20.0, 20.0, 20.0, 12.5]));
        assert_eq!(config.random.root_energy_min, 30_000);
        assert_eq!(config.random.efficiency_max_percent, 15.0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = CascadeConfig::from_json_str(
            r#"{ "energy_unit": "kJ", "rounding": "per_level", "random": { "root_energy_max": 50000 } }"#,
        )
        .unwrap();
        assert_eq!(config.energy_unit, "kJ");
        assert_eq!(config.rounding, ChainRounding::PerLevel);
        assert_eq!(config.random.root_energy_max, 50_000);
        assert_eq!(config.random.root_energy_min, 30_000);
        assert_eq!(config.root_energy, 1000.0);
    }

    #[test]
    fn test_load_json_file() {
        let path = std::env::temp_dir().join(format!("trophic_cascade_config_{}.json", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, r#"{{ "root_energy": 2500.0, "efficiencies_percent": [10, 10, 10, 10] }}"#).unwrap();
        }
        let config = CascadeConfig::load_json(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.static_params(), CascadeParams::new(2500.0, [10.0; 4]));
    }

    #[test]
    fn test_load_errors() {
        let missing = CascadeConfig::load_json("/definitely/not/here.json").unwrap_err();
        assert!(matches!(missing, CascadeError::ConfigRead { .. }));

        let path = std::env::temp_dir().join(format!("trophic_cascade_bad_{}.json", std::process::id()));
        fs::write(&path, "{ not json").unwrap();
        let bad = CascadeConfig::load_json(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(matches!(bad, CascadeError::ConfigParse { .. }));
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = CascadeConfig::load_or_default(None::<&str>).unwrap();
        assert_eq!(config, CascadeConfig::default());
    }
}

//! Energy cascade calculator.
//!
//! A cascade starts from a root energy (what the Sun delivers) and walks the
//! four trophic levels in order. Each level passes `efficiency%` of its input
//! on and loses the rest, split between respiration and decomposition.

use crate::constants::{MAX_EFFICIENCY_PERCENT, MIN_EFFICIENCY_PERCENT_EXCLUSIVE, TROPHIC_LEVEL_COUNT};
use crate::error::CascadeError;
use crate::math_utils::{split_loss, split_loss_units};
use crate::trophic_level::TrophicLevel;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How transferred energy is carried from one level to the next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainRounding {
    /// Carry the fractional value forward; only the display view rounds.
    #[default]
    Exact,
    /// Round each level's transferred energy before it feeds the next level,
    /// never above the level's whole-unit input.
    PerLevel,
}

/// Energy budget of one trophic level
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelResult {
    pub level: TrophicLevel,
    pub input: f64,
    pub efficiency_percent: f64,
    pub transferred: f64,
    pub total_loss: f64,
    pub respiration_loss: f64,
    pub decomposition_loss: f64,
}

impl LevelResult {
    fn compute(level: TrophicLevel, input: f64, efficiency_percent: f64, rounding: ChainRounding) -> Self {
        // x * 100 / 100 can land one ulp above x
        let raw_transferred = (input * efficiency_percent / 100.0).min(input);
        let transferred = match rounding {
            ChainRounding::Exact => raw_transferred,
            // a fractional input can round up past itself
            ChainRounding::PerLevel => raw_transferred.round().min(input.floor()),
        };
        let total_loss = input - transferred;
        let (respiration_loss, decomposition_loss) = split_loss(total_loss);

        LevelResult {
            level,
            input,
            efficiency_percent,
            transferred,
            total_loss,
            respiration_loss,
            decomposition_loss,
        }
    }

    /// Integer view of this level as it appears on labels
    pub fn display(&self) -> DisplayLevel {
        let input = self.input.round() as u64;
        let transferred = self.transferred.round() as u64;
        let total_loss = input.saturating_sub(transferred);
        let (respiration, decomposition) = split_loss_units(total_loss);

        DisplayLevel {
            level: self.level,
            input,
            efficiency_percent: self.efficiency_percent,
            transferred,
            total_loss,
            respiration,
            decomposition,
        }
    }
}

/// Rounded, whole-unit values for one level.
///
/// `transferred + total_loss == input` and
/// `respiration + decomposition == total_loss` hold exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayLevel {
    pub level: TrophicLevel,
    pub input: u64,
    pub efficiency_percent: f64,
    pub transferred: u64,
    pub total_loss: u64,
    pub respiration: u64,
    pub decomposition: u64,
}

/// Immutable result of one cascade computation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cascade {
    root_energy: f64,
    rounding: ChainRounding,
    levels: [LevelResult; TROPHIC_LEVEL_COUNT],
}

impl Cascade {
    pub fn root_energy(&self) -> f64 {
        self.root_energy
    }

    pub fn rounding(&self) -> ChainRounding {
        self.rounding
    }

    pub fn levels(&self) -> &[LevelResult] {
        &self.levels
    }

    pub fn level(&self, level: TrophicLevel) -> &LevelResult {
        &self.levels[level.index()]
    }

    pub fn efficiencies(&self) -> [f64; TROPHIC_LEVEL_COUNT] {
        self.levels.map(|l| l.efficiency_percent)
    }

    /// Energy left after the apex predator level
    pub fn final_energy(&self) -> f64 {
        self.levels[TROPHIC_LEVEL_COUNT - 1].transferred
    }

    /// Share of the root energy that survives the whole chain, in percent
    pub fn overall_efficiency_percent(&self) -> f64 {
        self.final_energy() / self.root_energy * 100.0
    }

    pub fn total_loss(&self) -> f64 {
        self.levels.iter().map(|l| l.total_loss).sum()
    }

    pub fn total_respiration(&self) -> f64 {
        self.levels.iter().map(|l| l.respiration_loss).sum()
    }

    pub fn total_decomposition(&self) -> f64 {
        self.levels.iter().map(|l| l.decomposition_loss).sum()
    }

    pub fn display_levels(&self) -> [DisplayLevel; TROPHIC_LEVEL_COUNT] {
        self.levels.map(|l| l.display())
    }
}

/// Compute a cascade, carrying fractional energy forward exactly.
///
/// Fails with [`CascadeError::InvalidParameter`] if `root_energy` is not a
/// positive finite number or any efficiency lies outside `(0, 100]`.
pub fn compute_cascade(
    root_energy: f64,
    efficiencies: [f64; TROPHIC_LEVEL_COUNT],
) -> Result<Cascade, CascadeError> {
    compute_cascade_with(root_energy, efficiencies, ChainRounding::Exact)
}

pub fn compute_cascade_with(
    root_energy: f64,
    efficiencies: [f64; TROPHIC_LEVEL_COUNT],
    rounding: ChainRounding,
) -> Result<Cascade, CascadeError> {
    validate_root_energy(root_energy)?;
    for (i, efficiency) in efficiencies.iter().enumerate() {
        validate_efficiency(*efficiency, i)?;
    }

    let mut input = root_energy;
    let levels = TrophicLevel::ALL.map(|level| {
        let result = LevelResult::compute(level, input, efficiencies[level.index()], rounding);
        debug!(
            level = level.as_str(),
            input = result.input,
            transferred = result.transferred,
            loss = result.total_loss,
            "computed level"
        );
        input = result.transferred;
        result
    });

    Ok(Cascade {
        root_energy,
        rounding,
        levels,
    })
}

pub fn validate_root_energy(root_energy: f64) -> Result<(), CascadeError> {
    if !root_energy.is_finite() || root_energy <= 0.0 {
        return Err(CascadeError::invalid("root_energy", root_energy, "must be a positive finite number"));
    }
    Ok(())
}

pub fn validate_efficiency(efficiency_percent: f64, index: usize) -> Result<(), CascadeError> {
    if !efficiency_percent.is_finite()
        || efficiency_percent <= MIN_EFFICIENCY_PERCENT_EXCLUSIVE
        || efficiency_percent > MAX_EFFICIENCY_PERCENT
    {
        return Err(CascadeError::invalid(
            format!("efficiencies[{}]", index),
            efficiency_percent,
            "must lie in (0, 100]",
        ));
    }
    Ok(())
}

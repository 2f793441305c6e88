// Energy units shown on diagram labels and reports
pub const DEFAULT_ENERGY_UNIT: &str = "kcal";

// Static diagram inputs
pub const DEFAULT_ROOT_ENERGY: f64 = 1000.0;
pub const DEFAULT_EFFICIENCIES_PERCENT: [f64; 4] = [20.0, 20.0, 20.0, 12.5];

// Random regeneration ranges
pub const RANDOM_ROOT_ENERGY_MIN: u64 = 30_000;
pub const RANDOM_ROOT_ENERGY_MAX: u64 = 80_000;
pub const RANDOM_EFFICIENCY_MIN_PERCENT: f64 = 7.0;
pub const RANDOM_EFFICIENCY_MAX_PERCENT: f64 = 15.0;
pub const RANDOM_EFFICIENCY_DECIMALS: u32 = 1;

// Efficiency bounds: (0, 100]
pub const MIN_EFFICIENCY_PERCENT_EXCLUSIVE: f64 = 0.0;
pub const MAX_EFFICIENCY_PERCENT: f64 = 100.0;

/// Share of each level's loss attributed to respiration; the remainder decomposes.
pub const RESPIRATION_SHARE: f64 = 0.75;

pub const TROPHIC_LEVEL_COUNT: usize = 4;

pub const DIAGRAM_TITLE: &str = "5-Trophic Tier Energy Transfer Diagram";
pub const DIAGRAM_SUBTITLE: &str =
    "This diagram illustrates the flow of energy from the Sun down to the Apex Predator.";
pub const SUN_NODE_ID: &str = "Sun";
pub const SUN_NODE_NAME: &str = "Sun";

pub mod constants;
pub mod error;
pub mod math_utils;
pub mod trophic_level;
pub mod cascade;
pub mod params;
pub mod config;
pub mod diagram;
pub mod session;
pub mod report;

pub use cascade::{compute_cascade, compute_cascade_with, Cascade, ChainRounding, DisplayLevel, LevelResult};
pub use config::CascadeConfig;
pub use diagram::{build_diagram, EnergyDiagram, LabelStyle};
pub use error::CascadeError;
pub use params::{CascadeParams, FixedParameters, ParameterProvider, RandomParameters, RandomRanges};
pub use session::Session;
pub use trophic_level::TrophicLevel;

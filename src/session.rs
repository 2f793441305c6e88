use crate::cascade::Cascade;
use crate::diagram::{build_diagram, EnergyDiagram, LabelStyle};
use crate::error::CascadeError;
use crate::params::ParameterProvider;
use tracing::info;

/// State shown by a presentation layer: the current cascade and whether
/// efficiencies are revealed. Actions return a new session; the old one is
/// left untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    cascade: Cascade,
    reveal: bool,
}

impl Session {
    pub fn new(cascade: Cascade) -> Self {
        Self { cascade, reveal: false }
    }

    /// Build the first session from a provider
    pub fn start(provider: &mut dyn ParameterProvider) -> Result<Self, CascadeError> {
        Ok(Self::new(provider.next_cascade()?))
    }

    pub fn cascade(&self) -> &Cascade {
        &self.cascade
    }

    pub fn is_revealed(&self) -> bool {
        self.reveal
    }

    /// Replace the cascade with a fresh one and hide efficiencies again
    pub fn regenerate(&self, provider: &mut dyn ParameterProvider) -> Result<Session, CascadeError> {
        let cascade = provider.next_cascade()?;
        info!(
            provider = provider.name(),
            root_energy = cascade.root_energy(),
            "regenerated cascade"
        );
        Ok(Session::new(cascade))
    }

    /// Show efficiencies without recomputing anything
    pub fn reveal(&self) -> Session {
        info!("revealed efficiencies");
        Session {
            cascade: self.cascade.clone(),
            reveal: true,
        }
    }

    pub fn diagram(&self, style: &LabelStyle) -> EnergyDiagram {
        build_diagram(&self.cascade, self.reveal, style)
    }
}

// src/trophic_level.rs - Trophic levels and their diagram profiles

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TrophicLevel {
    Producer,
    PrimaryConsumer,
    SecondaryConsumer,
    ApexPredator,
}

impl TrophicLevel {
    /// Levels in chain order, producer first.
    pub const ALL: [TrophicLevel; 4] = [
        TrophicLevel::Producer,
        TrophicLevel::PrimaryConsumer,
        TrophicLevel::SecondaryConsumer,
        TrophicLevel::ApexPredator,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrophicLevel::Producer => "producer",
            TrophicLevel::PrimaryConsumer => "primary_consumer",
            TrophicLevel::SecondaryConsumer => "secondary_consumer",
            TrophicLevel::ApexPredator => "apex_predator",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "producer" => Some(TrophicLevel::Producer),
            "primary_consumer" => Some(TrophicLevel::PrimaryConsumer),
            "secondary_consumer" => Some(TrophicLevel::SecondaryConsumer),
            "apex_predator" => Some(TrophicLevel::ApexPredator),
            _ => None,
        }
    }

    /// Zero-based position in the chain
    pub fn index(&self) -> usize {
        match self {
            TrophicLevel::Producer => 0,
            TrophicLevel::PrimaryConsumer => 1,
            TrophicLevel::SecondaryConsumer => 2,
            TrophicLevel::ApexPredator => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Ordinal position 1..=4 as used in ecology texts
    pub fn ordinal(&self) -> usize {
        self.index() + 1
    }

    pub fn profile(&self) -> &'static TrophicProfile {
        get_profile(*self)
    }
}

#[derive(Debug, Clone)]
pub struct TrophicProfile {
    pub kind: TrophicLevel,
    pub node_id: &'static str,
    pub display_name: &'static str,
}

pub static TROPHIC_PROFILES: Lazy<HashMap<TrophicLevel, TrophicProfile>> = Lazy::new(|| {
    use TrophicLevel::*;
    let mut m = HashMap::new();

    m.insert(Producer, TrophicProfile {
        kind: Producer,
        node_id: "PP",
        display_name: "Primary Producer",
    });

    m.insert(PrimaryConsumer, TrophicProfile {
        kind: PrimaryConsumer,
        node_id: "PC",
        display_name: "Primary Consumer",
    });

    m.insert(SecondaryConsumer, TrophicProfile {
        kind: SecondaryConsumer,
        node_id: "SC",
        display_name: "Secondary Consumer",
    });

    m.insert(ApexPredator, TrophicProfile {
        kind: ApexPredator,
        node_id: "AP",
        display_name: "Apex Predator",
    });

    m
});

pub fn get_profile(level: TrophicLevel) -> &'static TrophicProfile {
    // every variant is inserted above
    &TROPHIC_PROFILES[&level]
}

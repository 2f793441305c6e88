//! Labeled directed graph of a cascade, ready for an external layout engine.
//!
//! Nodes run Sun -> Primary Producer -> ... -> Apex Predator. Edge i carries
//! the budget of cascade level i (transferred, respiration, decomposition and,
//! once revealed, the efficiency). The Sun node shows the root energy and node
//! i+1 shows level i's transferred output.

use crate::cascade::{Cascade, DisplayLevel};
use crate::constants::{DEFAULT_ENERGY_UNIT, DIAGRAM_SUBTITLE, DIAGRAM_TITLE, SUN_NODE_ID, SUN_NODE_NAME};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RankDir {
    #[default]
    #[serde(rename = "TB")]
    TopToBottom,
    #[serde(rename = "LR")]
    LeftToRight,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramNode {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramEdge {
    pub from: String,
    pub to: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyDiagram {
    pub title: String,
    pub subtitle: String,
    pub rankdir: RankDir,
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<DiagramEdge>,
}

impl EnergyDiagram {
    pub fn node(&self, id: &str) -> Option<&DiagramNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, from: &str, to: &str) -> Option<&DiagramEdge> {
        self.edges.iter().find(|e| e.from == from && e.to == to)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    pub energy_unit: String,
    pub rankdir: RankDir,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            energy_unit: DEFAULT_ENERGY_UNIT.to_string(),
            rankdir: RankDir::TopToBottom,
        }
    }
}

impl LabelStyle {
    pub fn with_unit(energy_unit: impl Into<String>) -> Self {
        Self {
            energy_unit: energy_unit.into(),
            ..Self::default()
        }
    }
}

pub fn build_diagram(cascade: &Cascade, reveal: bool, style: &LabelStyle) -> EnergyDiagram {
    let shown = cascade.display_levels();
    let unit = &style.energy_unit;

    let mut nodes = Vec::with_capacity(shown.len() + 1);
    let mut edges = Vec::with_capacity(shown.len());

    nodes.push(DiagramNode {
        id: SUN_NODE_ID.to_string(),
        label: node_label(SUN_NODE_NAME, shown[0].input, unit),
    });

    let mut from = SUN_NODE_ID;
    for level in &shown {
        let profile = level.level.profile();
        nodes.push(DiagramNode {
            id: profile.node_id.to_string(),
            label: node_label(profile.display_name, level.transferred, unit),
        });
        edges.push(DiagramEdge {
            from: from.to_string(),
            to: profile.node_id.to_string(),
            label: edge_label(level, reveal, unit),
        });
        from = profile.node_id;
    }

    EnergyDiagram {
        title: DIAGRAM_TITLE.to_string(),
        subtitle: DIAGRAM_SUBTITLE.to_string(),
        rankdir: style.rankdir,
        nodes,
        edges,
    }
}

pub fn node_label(name: &str, energy: u64, unit: &str) -> String {
    format!("{}\n{} {}", name, energy, unit)
}

pub fn edge_label(level: &DisplayLevel, reveal: bool, unit: &str) -> String {
    let mut label = format!(
        "{} {unit} transferred\nRespiration: {} {unit}\nDecomposition: {} {unit}",
        level.transferred, level.respiration, level.decomposition,
    );
    if reveal {
        label.push_str(&format!(
            "\nEfficiency: {:.1}% ({} / {})",
            level.efficiency_percent, level.transferred, level.input
        ));
    }
    label
}

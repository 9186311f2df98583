use serde::{Deserialize, Serialize};

use crate::simulation::types::SimulationResult;

/// Request body posted to the external service, one per candidate attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecuteRequest {
    pub referencias: String,
    pub marcos: usize,
}

/// Canonical result produced by normalizing an external response.
///
/// Echoes the inputs alongside the derived fields; `pasos` is an ordered
/// sequence of step descriptions here, unlike the newline-joined string of a
/// locally computed [`SimulationResult`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedResult {
    pub referencias: String,
    pub marcos: usize,
    pub fallos: u32,
    pub tabla: Vec<Vec<i32>>,
    pub pasos: Vec<String>,
}

/// What a simulation request ultimately resolved to.
///
/// Both variants serialize to the documented response contract: `Remote`
/// carries the normalized external shape (with echoed inputs and `pasos` as a
/// string sequence), `Local` the engine's shape (`pasos` newline-joined).
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ExecutionOutcome {
    Remote(NormalizedResult),
    Local(SimulationResult),
}

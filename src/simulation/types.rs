use serde::{Deserialize, Serialize};

/// Sentinel stored in a frame slot that has never held a page.
///
/// Page identifiers are digits 0-9, so any negative value is safe; `-1` is also
/// what gets serialized into the `tabla` rows for empty slots.
pub const EMPTY_FRAME: i32 = -1;

/// Selects which eviction policy a simulation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Evict in strict insertion order, ignoring access recency.
    Fifo,
    /// Evict the page whose last reference is the oldest.
    Lru,
    /// Evict the page whose next reference is the farthest away (Belady).
    Optimo,
}

impl Algorithm {
    /// URL path segment used by the external microservice for this policy.
    pub fn as_path(&self) -> &'static str {
        match self {
            Algorithm::Fifo => "fifo",
            Algorithm::Lru => "lru",
            Algorithm::Optimo => "optimo",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Algorithm::Fifo => "FIFO",
            Algorithm::Lru => "LRU",
            Algorithm::Optimo => "OPTIMO",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of one locally computed simulation.
///
/// Field names mirror the JSON contract consumed by the front-end:
/// `fallos` (fault count), `pasos` (newline-joined step descriptions) and
/// `tabla` (one frame snapshot per processed reference, `-1` = empty slot).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationResult {
    /// Number of page faults, between 0 and the reference-string length.
    pub fallos: u32,
    /// Human-readable step descriptions, one line per reference.
    pub pasos: String,
    /// Frame-table snapshot taken after each reference was processed.
    pub tabla: Vec<Vec<i32>>,
}

//! Page Replacement Policy Engine
//!
//! Simulates the three classic memory-page eviction policies over a reference
//! string of single-digit page identifiers.
//!
//! ## Core Concepts
//! - **Reference string**: an ordered sequence of page accesses, one digit (0-9)
//!   per access, validated before any simulation runs.
//! - **Frames**: a fixed-size table of page slots. An empty slot holds the
//!   sentinel value `-1` until a page is loaded into it.
//! - **Trace**: every processed reference appends a snapshot of the frame table
//!   plus a human-readable step description, so the full history of hits and
//!   faults can be replayed or rendered.
//!
//! ## Submodules
//! - **`parser`**: Reference-string validation and conversion.
//! - **`engine`**: The FIFO, LRU and Optimal algorithms.
//! - **`types`**: Result and algorithm-selection types.
//! - **`error`**: The typed validation error.

pub mod engine;
pub mod error;
pub mod parser;
pub mod types;

#[cfg(test)]
mod tests;

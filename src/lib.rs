//! Page Replacement Simulation Service Library
//!
//! This library crate defines the core modules of the simulation service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of three loosely coupled subsystems:
//!
//! - **`simulation`**: The policy engine. Validates reference strings and runs the
//!   three classic page-replacement algorithms (FIFO, LRU, Optimal), producing a
//!   fault count and a step-by-step trace of frame occupancy.
//! - **`remote`**: The resilient delegation layer. Attempts to execute a simulation
//!   on an external microservice across a prioritized list of candidate endpoints,
//!   normalizes whatever response shape comes back, and falls back to the local
//!   engine when every endpoint fails.
//! - **`api`**: The HTTP boundary. Axum handlers that accept simulation requests,
//!   route them to the remote client or the local engine, and serialize results.

pub mod api;
pub mod remote;
pub mod simulation;

//! Remote Execution Module
//!
//! Delegates simulations to an external algorithms microservice and keeps the
//! caller insulated from its unreliability.
//!
//! ## Core Concepts
//! - **Candidate endpoints**: the configured base address plus a small fixed set
//!   of well-known alternate ports, tried strictly in order with a short
//!   per-attempt timeout. First success wins.
//! - **Normalization**: the external service's response schema is not fixed, so
//!   every usable payload is mapped into one canonical result shape; missing
//!   fields degrade to empty or derived values instead of failing.
//! - **Local fallback**: when every candidate fails, the local policy engine
//!   computes the result. Total network failure is a log line, never an error.
//!
//! ## Submodules
//! - **`client`**: Candidate construction and the sequential attempt loop.
//! - **`config`**: Explicit runtime configuration, built once at startup.
//! - **`normalizer`**: Loose-shape response mapping.
//! - **`types`**: Canonical result DTOs.

pub mod client;
pub mod config;
pub mod normalizer;
pub mod types;

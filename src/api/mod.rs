//! HTTP API Module
//!
//! The request boundary of the service: thin axum handlers that validate the
//! incoming parameters, route the simulation to the remote client or the local
//! engine, and serialize whichever result shape comes back.
//!
//! ## Submodules
//! - **`handlers`**: One POST handler per algorithm plus a health probe.
//! - **`types`**: Request/response DTOs for the JSON contract.

pub mod handlers;
pub mod types;

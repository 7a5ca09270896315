//! NeuroLattice API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes, the
//! e-mail relay) so integration tests and the binary entrypoint can share
//! them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod relay;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;

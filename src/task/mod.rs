//! Task tracking for Tasktrack.
//!
//! Tasks carry a description, status, priority, optional due date, and tags,
//! and are persisted as whole collections through a store collaborator. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Stateless filtering, ranking, and statistics in [`query`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod query;
pub mod services;

#[cfg(test)]
mod tests;

//! Tasktrack: local task tracking with a validated domain core.
//!
//! This crate provides the task data model, the query and ranking engine
//! used by search and listing, and the persistence contract that backing
//! stores must honour.
//!
//! # Architecture
//!
//! Tasktrack follows hexagonal architecture principles:
//!
//! - **Domain**: Self-validating value types and the copy-on-write task
//!   aggregate
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete stores (in-memory, JSON file) and the repository
//!   built on top of them
//!
//! # Modules
//!
//! - [`task`]: Task model, queries, persistence, and application services
//! - [`config`]: Store location resolution

pub mod config;
pub mod task;

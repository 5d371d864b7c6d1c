//! Task-board state management.
//!
//! This module implements the board core: a three-column task collection
//! (todo, doing, done) with direct-manipulation CRUD, status transitions,
//! a display-only filter projection, and full-board synchronisation to a
//! remote store after every mutation. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

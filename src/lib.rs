//! Corkboard: task-board state management core.
//!
//! This crate provides the state model behind a three-column task board
//! (todo, doing, done): creating, editing, moving, filtering, and deleting
//! tasks, with the whole board pushed wholesale to a remote HTTP store
//! after every mutation.
//!
//! # Architecture
//!
//! Corkboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board model and transition operations with no
//!   infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (HTTP remote store,
//!   in-memory test store)
//!
//! # Modules
//!
//! - [`board`]: Board model, transition operations, filtering, and the
//!   remote synchronisation service

pub mod board;

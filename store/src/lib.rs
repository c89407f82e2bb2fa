//! Abstract storage traits for Meridian distribution state.
//!
//! Every storage backend (a persistent KV store on a node, the in-memory
//! store for testing) implements these traits. The distribution engine
//! depends only on the traits and never sees the backend.

pub mod distribution;
pub mod error;
pub mod memory;

pub use distribution::DistributionStore;
pub use error::StoreError;
pub use memory::MemoryStore;

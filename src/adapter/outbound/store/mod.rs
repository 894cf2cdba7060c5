//! Local mirror store adapters.

pub mod memory;

pub use memory::{MemoryOrderStore, MemoryVolumeStore};

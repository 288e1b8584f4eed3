//! Shared types and models for the Inventory Console
//!
//! This crate contains types shared between the client application, the
//! browser (via WASM), and other components of the system.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;

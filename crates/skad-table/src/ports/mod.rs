//! Ports Layer - Trait definitions for external collaborators

pub mod outbound;

pub use outbound::*;

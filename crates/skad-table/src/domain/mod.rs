//! Domain Layer - Pure routing logic with no I/O
//!
//! This module contains:
//! - Identities and checksum equality
//! - The XOR metric and prefix-length bucket selection
//! - The k-bucket routing table and its update/lookup policy

pub mod entities;
pub mod errors;
pub mod routing_table;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use routing_table::*;
pub use services::*;
pub use value_objects::*;

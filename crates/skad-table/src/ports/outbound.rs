//! Outbound Ports (Driven Ports)
//!
//! Dependencies the routing table's host supplies.

use crate::domain::TableConfig;

/// Source of routing table configuration.
///
/// Implementations: [`StaticConfigProvider`](crate::adapters::StaticConfigProvider)
/// for values set in code, and `TomlConfigProvider` (feature `toml-config`)
/// for a config file.
pub trait ConfigProvider: Send + Sync {
    /// Table parameters to construct a [`RoutingTable`](crate::RoutingTable) with.
    fn table_config(&self) -> TableConfig;
}

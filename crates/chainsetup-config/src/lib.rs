//! chainsetup configuration management
//!
//! This crate knows which networks exist, how a configured network is
//! recorded, how the per-class connection file is loaded and saved, and how
//! the tool's own settings are layered from file, environment and flags.

pub mod connection;
pub mod error;
pub mod loader;
pub mod networks;
pub mod settings;
pub mod store;

pub use connection::{entry_rpc, slugify, ConnectionEntry, ConnectionMap, CONNECTION_TYPE};
pub use error::{ConfigError, ConfigResult};
pub use loader::{EnvLoader, FileLoader, SettingsLoader};
pub use networks::{mainnet_networks, testnet_networks, NetworkClass, NetworkDescriptor, NetworkRegistry};
pub use settings::SetupSettings;
pub use store::ConnectionStore;

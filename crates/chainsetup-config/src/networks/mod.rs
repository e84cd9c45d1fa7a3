//! Known networks and their classes

pub mod mainnet;
pub mod testnet;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use mainnet::mainnet_networks;
pub use testnet::testnet_networks;

/// Mainnet/testnet partition of known networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkClass {
    Mainnet,
    Testnet,
}

impl NetworkClass {
    pub const ALL: [NetworkClass; 2] = [NetworkClass::Mainnet, NetworkClass::Testnet];

    /// Fixed name of the persisted connection file for this class
    pub fn config_file_name(&self) -> &'static str {
        match self {
            NetworkClass::Mainnet => "chain-mainnet.config.json",
            NetworkClass::Testnet => "chain-testnet.config.json",
        }
    }

    /// Label shown in the class selection prompt
    pub fn label(&self) -> &'static str {
        match self {
            NetworkClass::Mainnet => "Mainnet",
            NetworkClass::Testnet => "Testnet",
        }
    }
}

impl fmt::Display for NetworkClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkClass::Mainnet => write!(f, "mainnet"),
            NetworkClass::Testnet => write!(f, "testnet"),
        }
    }
}

impl std::str::FromStr for NetworkClass {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" => Ok(NetworkClass::Mainnet),
            "testnet" | "test" => Ok(NetworkClass::Testnet),
            _ => Err(ConfigError::InvalidNetwork(s.to_string())),
        }
    }
}

/// Static description of one network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDescriptor {
    /// Network identifier (EVM chain id)
    pub id: String,
    /// Human readable name
    pub name: String,
    /// Which class the network belongs to
    pub class: NetworkClass,
}

impl NetworkDescriptor {
    pub fn new(id: impl Into<String>, name: impl Into<String>, class: NetworkClass) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            class,
        }
    }

    /// Key under which this network is persisted
    pub fn slug(&self) -> String {
        crate::connection::slugify(&self.name)
    }
}

/// Read-only list of network descriptors handed to the orchestrator
#[derive(Debug, Clone, Default)]
pub struct NetworkRegistry {
    networks: Vec<NetworkDescriptor>,
}

impl NetworkRegistry {
    pub fn new(networks: Vec<NetworkDescriptor>) -> Self {
        Self { networks }
    }

    /// The networks compiled into the binary, mainnet first
    pub fn builtin() -> Self {
        let mut networks = mainnet_networks();
        networks.extend(testnet_networks());
        Self { networks }
    }

    /// Descriptors of one class, in registry order
    pub fn for_class(&self, class: NetworkClass) -> Vec<NetworkDescriptor> {
        self.networks
            .iter()
            .filter(|network| network.class == class)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_network_class_parsing() {
        assert_eq!("mainnet".parse::<NetworkClass>().unwrap(), NetworkClass::Mainnet);
        assert_eq!("Main".parse::<NetworkClass>().unwrap(), NetworkClass::Mainnet);
        assert_eq!("TESTNET".parse::<NetworkClass>().unwrap(), NetworkClass::Testnet);
        assert_eq!("test".parse::<NetworkClass>().unwrap(), NetworkClass::Testnet);
        assert!("devnet".parse::<NetworkClass>().is_err());
    }

    #[test]
    fn test_config_file_names() {
        assert_eq!(NetworkClass::Mainnet.config_file_name(), "chain-mainnet.config.json");
        assert_eq!(NetworkClass::Testnet.config_file_name(), "chain-testnet.config.json");
    }

    #[test]
    fn test_builtin_registry_partitions() {
        let registry = NetworkRegistry::builtin();
        let mainnet = registry.for_class(NetworkClass::Mainnet);
        let testnet = registry.for_class(NetworkClass::Testnet);

        assert!(!mainnet.is_empty());
        assert!(!testnet.is_empty());
        assert_eq!(mainnet.len() + testnet.len(), registry.len());
        assert!(mainnet.iter().all(|n| n.class == NetworkClass::Mainnet));
        assert_eq!(mainnet[0].id, "1");
        assert_eq!(mainnet[0].slug(), "ethereum");
    }

    #[test]
    fn test_builtin_slugs_are_unique_per_class() {
        let registry = NetworkRegistry::builtin();
        for class in NetworkClass::ALL {
            let networks = registry.for_class(class);
            let slugs: HashSet<_> = networks.iter().map(|n| n.slug()).collect();
            assert_eq!(slugs.len(), networks.len(), "duplicate slug in {}", class);
        }
    }
}

use super::{NetworkClass, NetworkDescriptor};

/// Test networks known to the node
pub fn testnet_networks() -> Vec<NetworkDescriptor> {
    [
        ("97", "BNB Smart Chain Testnet"),
        ("4002", "Fantom Testnet"),
        ("5003", "Mantle Sepolia"),
        ("10200", "Gnosis Chiado"),
        ("43113", "Avalanche Fuji"),
        ("80002", "Polygon Amoy"),
        ("84532", "Base Sepolia"),
        ("421614", "Arbitrum Sepolia"),
        ("11155111", "Sepolia"),
        ("11155420", "Optimism Sepolia"),
    ]
    .into_iter()
    .map(|(id, name)| NetworkDescriptor::new(id, name, NetworkClass::Testnet))
    .collect()
}

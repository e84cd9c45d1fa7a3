use super::{NetworkClass, NetworkDescriptor};

/// Production networks known to the node
pub fn mainnet_networks() -> Vec<NetworkDescriptor> {
    [
        ("1", "Ethereum"),
        ("10", "Optimism"),
        ("56", "BNB Smart Chain"),
        ("100", "Gnosis"),
        ("137", "Polygon"),
        ("250", "Fantom"),
        ("1284", "Moonbeam"),
        ("5000", "Mantle"),
        ("8453", "Base"),
        ("42161", "Arbitrum One"),
        ("43114", "Avalanche"),
        ("59144", "Linea"),
        ("534352", "Scroll"),
    ]
    .into_iter()
    .map(|(id, name)| NetworkDescriptor::new(id, name, NetworkClass::Mainnet))
    .collect()
}

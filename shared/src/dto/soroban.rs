use serde::{Deserialize, Serialize};

/// Passphrase of the public Stellar test network.
pub const TESTNET_PASSPHRASE: &str = "Test SDF Network ; September 2015";
/// Passphrase of the public Stellar network.
pub const MAINNET_PASSPHRASE: &str = "Public Global Stellar Network ; September 2015";
/// Passphrase of the Stellar future network.
pub const FUTURENET_PASSPHRASE: &str = "Test SDF Future Network ; October 2022";
/// Passphrase used by a local quickstart node.
pub const STANDALONE_PASSPHRASE: &str = "Standalone Network ; February 2017";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContractMetadata {
    pub contract_id: String,
    pub name: String,
    pub network: NetworkType,
    pub network_passphrase: String,
    pub rpc_url: String,
    pub description: Option<String>,
    pub version: Option<String>,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    Testnet,
    Mainnet,
    Futurenet,
    Standalone,
}

impl NetworkType {
    /// Display name used in the contract panel.
    pub fn name(&self) -> &'static str {
        match self {
            NetworkType::Testnet => "Testnet",
            NetworkType::Mainnet => "Mainnet",
            NetworkType::Futurenet => "Futurenet",
            NetworkType::Standalone => "Standalone",
        }
    }

    pub fn passphrase(&self) -> &'static str {
        match self {
            NetworkType::Testnet => TESTNET_PASSPHRASE,
            NetworkType::Mainnet => MAINNET_PASSPHRASE,
            NetworkType::Futurenet => FUTURENET_PASSPHRASE,
            NetworkType::Standalone => STANDALONE_PASSPHRASE,
        }
    }

    /// Parse a case-insensitive network name.
    pub fn parse(value: &str) -> Option<NetworkType> {
        match value.trim().to_ascii_lowercase().as_str() {
            "testnet" => Some(NetworkType::Testnet),
            "mainnet" | "public" => Some(NetworkType::Mainnet),
            "futurenet" => Some(NetworkType::Futurenet),
            "standalone" | "local" => Some(NetworkType::Standalone),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_type_parse() {
        assert_eq!(NetworkType::parse("Testnet"), Some(NetworkType::Testnet));
        assert_eq!(NetworkType::parse(" public "), Some(NetworkType::Mainnet));
        assert_eq!(NetworkType::parse("local"), Some(NetworkType::Standalone));
        assert_eq!(NetworkType::parse("devnet"), None);
    }

    #[test]
    fn test_network_type_serializes_lowercase() {
        let json = serde_json::to_string(&NetworkType::Futurenet).unwrap();
        assert_eq!(json, "\"futurenet\"");
    }
}

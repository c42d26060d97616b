//! # Contract Configuration
//!
//! Static description of the deployed coaching contract: its address, the
//! network it lives on, and the RPC endpoint. Loaded once at startup and never
//! revalidated afterwards.
//!
//! ## Global Config Access
//!
//! ```rust
//! use lib_core::config::core_config;
//!
//! let config = core_config();
//! assert_eq!(config.network_name(), "Testnet");
//! ```
//!
//! [`init_config()`] reads overrides from the environment. Targets without an
//! environment (the browser) fall back to the testnet defaults.

use std::sync::OnceLock;

use lib_utils::envs::get_env_or;
use shared::dto::soroban::{ContractMetadata, NetworkType};

/// Address of the coaching contract deployed on testnet.
pub const DEFAULT_CONTRACT_ID: &str = "CB6Z6Y7QYZD2WDF3MYD7GHQSXDWVHYDQWBR6XTG3L2UL2FGPHMFCC5X7";
/// Public Soroban RPC endpoint for testnet.
pub const DEFAULT_RPC_URL: &str = "https://soroban-testnet.stellar.org:443";

/// Coaching contract configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractConfig {
    /// Contract address (C... strkey)
    pub contract_id: String,

    pub network: NetworkType,

    /// Network passphrase, normally the one belonging to `network`
    pub network_passphrase: String,

    /// Soroban RPC endpoint URL
    pub rpc_url: String,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            contract_id: DEFAULT_CONTRACT_ID.to_string(),
            network: NetworkType::Testnet,
            network_passphrase: NetworkType::Testnet.passphrase().to_string(),
            rpc_url: DEFAULT_RPC_URL.to_string(),
        }
    }
}

impl ContractConfig {
    /// Load configuration from `COACHING_*` environment variables.
    ///
    /// Unset variables keep their default value. The passphrase defaults to
    /// the one of the selected network.
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let network_name = get_env_or("COACHING_NETWORK", defaults.network.name());
        let network = NetworkType::parse(&network_name)
            .ok_or_else(|| format!("COACHING_NETWORK has unknown value '{}'", network_name))?;

        Ok(Self {
            contract_id: get_env_or("COACHING_CONTRACT_ID", &defaults.contract_id),
            network,
            network_passphrase: get_env_or("COACHING_NETWORK_PASSPHRASE", network.passphrase()),
            rpc_url: get_env_or("COACHING_RPC_URL", &defaults.rpc_url),
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.contract_id.trim().is_empty() {
            return Err("Contract ID cannot be empty".to_string());
        }
        if self.network_passphrase.trim().is_empty() {
            return Err("Network passphrase cannot be empty".to_string());
        }
        if self.rpc_url.trim().is_empty() {
            return Err("RPC URL cannot be empty".to_string());
        }
        if !self.rpc_url.starts_with("http://") && !self.rpc_url.starts_with("https://") {
            return Err(format!("RPC URL must be http(s): {}", self.rpc_url));
        }
        Ok(())
    }

    pub fn network_name(&self) -> &'static str {
        self.network.name()
    }

    /// Describe the configured contract for the info panel.
    pub fn metadata(&self) -> ContractMetadata {
        ContractMetadata {
            contract_id: self.contract_id.clone(),
            name: "Coaching Flow".to_string(),
            network: self.network,
            network_passphrase: self.network_passphrase.clone(),
            rpc_url: self.rpc_url.clone(),
            description: Some("Coaching session booking and attendance tracking".to_string()),
            version: Some(env!("CARGO_PKG_VERSION").to_string()),
            enabled: true,
        }
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<ContractConfig> = OnceLock::new();

/// Initialize the global configuration from the environment.
///
/// # Errors
///
/// Returns an error if an override is malformed, validation fails, or the
/// config has already been initialized.
pub fn init_config() -> Result<(), String> {
    init_config_with(ContractConfig::from_env()?)
}

/// Initialize the global configuration with an explicit value.
pub fn init_config_with(config: ContractConfig) -> Result<(), String> {
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| "Config has already been initialized".to_string())
}

/// Get the global configuration, using the testnet defaults if
/// [`init_config()`] was never called.
pub fn core_config() -> &'static ContractConfig {
    CONFIG.get_or_init(ContractConfig::default)
}

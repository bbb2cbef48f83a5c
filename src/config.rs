use std::{fmt, path::Path};

use alloy_primitives::{Address, U256};
use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    constants::{ADMIN_PRIVATE_KEY_VAR, DECIMALS, OPERATOR_PRIVATE_KEY_VAR, aurora_mainnet},
    errors::{Result, StaurError},
    network::{ContractAddresses, Network},
};

/// Private keys read from the environment. Never part of the source tree.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Secrets {
    pub admin_private_key: Option<String>,
    pub operator_private_key: Option<String>,
}

impl Secrets {
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |var: &str| lookup(var).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        Self {
            admin_private_key: non_empty(ADMIN_PRIVATE_KEY_VAR),
            operator_private_key: non_empty(OPERATOR_PRIVATE_KEY_VAR),
        }
    }
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |key: &Option<String>| key.as_ref().map(|_| "<redacted>");
        f.debug_struct("Secrets")
            .field("admin_private_key", &redact(&self.admin_private_key))
            .field("operator_private_key", &redact(&self.operator_private_key))
            .finish()
    }
}

/// Everything the stAUR test harness and scripts need to know about one deployment.
///
/// Built once at startup and handed to consumers by reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixtureConfig {
    pub network: Network,
    pub contracts: ContractAddresses,
    pub depositors: Vec<Address>,
    /// Public address of the admin key, known only for the production deployment.
    pub admin: Option<Address>,
    pub operator: Option<Address>,
    pub aurora_whale: Option<Address>,
    pub decimals: U256,
    pub secrets: Secrets,
}

impl FixtureConfig {
    /// Built-in addresses of `network`, without any secrets.
    pub fn preset(network: Network) -> Self {
        let (admin, operator, aurora_whale) = match network {
            Network::AuroraMainnet => (
                Some(aurora_mainnet::ADMIN_ADDRESS),
                Some(aurora_mainnet::OPERATOR_ADDRESS),
                Some(aurora_mainnet::AURORA_WHALE_ADDRESS),
            ),
            Network::Goerli => (None, None, None),
        };

        Self {
            network,
            contracts: network.contracts(),
            depositors: network.depositors().to_vec(),
            admin,
            operator,
            aurora_whale,
            decimals: DECIMALS,
            secrets: Secrets::default(),
        }
    }

    /// Preset for `network`, patched by the YAML file at `override_path` and completed
    /// with the secrets found in the process environment.
    pub fn load(network: Network, override_path: Option<&Path>) -> Result<Self> {
        let mut cfg = Self::preset(network);

        if let Some(path) = override_path {
            let content = std::fs::read_to_string(path).map_err(|e| {
                StaurError::ConfigError(format!("cannot read '{}': {e}", path.display()))
            })?;
            cfg.apply_yaml(&content)?;
            info!(path = %path.display(), "Applied configuration overrides");
        }

        cfg.secrets = Secrets::from_env();
        debug!(secrets = ?cfg.secrets, "Loaded secrets from the environment");

        Ok(cfg)
    }

    pub fn apply_yaml(&mut self, content: &str) -> Result<()> {
        let overrides: ConfigOverrides =
            serde_yaml::from_str(content).map_err(|e| StaurError::ConfigError(e.to_string()))?;
        self.apply(overrides)
    }

    /// Either every override is applied or, on error, `self` is left untouched.
    fn apply(&mut self, overrides: ConfigOverrides) -> Result<()> {
        if let Some(network) = overrides.network
            && network != self.network
        {
            return Err(StaurError::ConfigError(format!(
                "override file targets {network}, but {} was selected",
                self.network
            )));
        }

        let mut patched = self.clone();

        let set = |slot: &mut Address, value: Option<String>| -> Result<()> {
            if let Some(value) = value {
                *slot = parse_address(&value)?;
            }
            Ok(())
        };

        let contracts = overrides.contracts;
        set(&mut patched.contracts.aurora_token, contracts.aurora_token)?;
        set(&mut patched.contracts.aurora_plus, contracts.aurora_plus)?;
        set(&mut patched.contracts.staking_manager, contracts.staking_manager)?;
        set(&mut patched.contracts.staked_aurora_vault, contracts.staked_aurora_vault)?;
        set(&mut patched.contracts.liquidity_pool, contracts.liquidity_pool)?;

        if let Some(depositors) = overrides.depositors {
            if depositors.is_empty() {
                return Err(StaurError::ConfigError("depositors must not be empty".into()));
            }
            patched.depositors = depositors
                .iter()
                .map(|d| parse_address(d))
                .collect::<Result<_>>()?;
        }
        if let Some(admin) = overrides.admin {
            patched.admin = Some(parse_address(&admin)?);
        }
        if let Some(operator) = overrides.operator {
            patched.operator = Some(parse_address(&operator)?);
        }
        if let Some(whale) = overrides.aurora_whale {
            patched.aurora_whale = Some(parse_address(&whale)?);
        }

        *self = patched;
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigOverrides {
    network: Option<Network>,
    contracts: ContractOverrides,
    depositors: Option<Vec<String>>,
    admin: Option<String>,
    operator: Option<String>,
    aurora_whale: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ContractOverrides {
    aurora_token: Option<String>,
    aurora_plus: Option<String>,
    staking_manager: Option<String>,
    staked_aurora_vault: Option<String>,
    liquidity_pool: Option<String>,
}

/// Parses an address given as `0x` followed by exactly 40 hex characters.
///
/// Mixed case is accepted without verifying the EIP-55 checksum.
pub fn parse_address(value: &str) -> Result<Address> {
    let hex = value
        .strip_prefix("0x")
        .filter(|h| h.len() == 40 && h.bytes().all(|b| b.is_ascii_hexdigit()))
        .ok_or_else(|| StaurError::InvalidAddress(value.to_owned()))?;

    hex.parse::<Address>()
        .map_err(|_| StaurError::InvalidAddress(value.to_owned()))
}

/// Populates the process environment from a `.env` file.
///
/// Without an explicit `path`, a missing `.env` in the working directory is not an error.
pub fn load_dotenv(path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            dotenvy::from_path(path).map_err(|e| {
                StaurError::ConfigError(format!("cannot load env file '{}': {e}", path.display()))
            })?;
            debug!(path = %path.display(), "Loaded env file");
        }
        None => match default_dotenv_outcome(dotenvy::dotenv())? {
            Some(path) => debug!(path = %path.display(), "Loaded env file"),
            None => debug!("No .env file found"),
        },
    }

    Ok(())
}

/// Maps a missing default `.env` file to `None`; any other failure is an error.
fn default_dotenv_outcome<T>(result: dotenvy::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(loaded) => Ok(Some(loaded)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(StaurError::ConfigError(format!("cannot load .env file: {e}"))),
    }
}

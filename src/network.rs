use alloy_primitives::Address;
use serde::Deserialize;

use crate::constants::{aurora_mainnet, goerli};

/// Deployment environments the stAUR contracts live on.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Network {
    /// Test network used by the status script.
    Goerli,
    #[default]
    AuroraMainnet,
}

/// Addresses of the contracts making up one stAUR deployment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContractAddresses {
    pub aurora_token: Address,
    pub aurora_plus: Address,
    pub staking_manager: Address,
    pub staked_aurora_vault: Address,
    pub liquidity_pool: Address,
}

impl Network {
    pub const fn contracts(&self) -> ContractAddresses {
        match self {
            Network::Goerli => ContractAddresses {
                aurora_token: goerli::AURORA_TOKEN_ADDRESS,
                aurora_plus: goerli::AURORA_PLUS_ADDRESS,
                staking_manager: goerli::STAKING_MANAGER_ADDRESS,
                staked_aurora_vault: goerli::STAKED_AURORA_VAULT_ADDRESS,
                liquidity_pool: goerli::LIQUIDITY_POOL_ADDRESS,
            },
            Network::AuroraMainnet => ContractAddresses {
                aurora_token: aurora_mainnet::AURORA_TOKEN_ADDRESS,
                aurora_plus: aurora_mainnet::AURORA_PLUS_ADDRESS,
                staking_manager: aurora_mainnet::STAKING_MANAGER_ADDRESS,
                staked_aurora_vault: aurora_mainnet::STAKED_AURORA_VAULT_ADDRESS,
                liquidity_pool: aurora_mainnet::LIQUIDITY_POOL_ADDRESS,
            },
        }
    }

    pub const fn depositors(&self) -> [Address; 2] {
        match self {
            Network::Goerli => goerli::DEPOSITORS_ADDRESS,
            Network::AuroraMainnet => aurora_mainnet::DEPOSITORS_ADDRESS,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, str::FromStr};

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn network_names_are_kebab_case() {
        assert_eq!(Network::Goerli.to_string(), "goerli");
        assert_eq!(Network::AuroraMainnet.to_string(), "aurora-mainnet");
        assert_eq!(Network::from_str("aurora-mainnet").unwrap(), Network::AuroraMainnet);
        assert!(Network::from_str("mainnet").is_err());
    }

    #[test]
    fn each_network_has_its_own_address_set() {
        let goerli = Network::Goerli.contracts();
        let mainnet = Network::AuroraMainnet.contracts();

        assert_ne!(goerli.staked_aurora_vault, mainnet.staked_aurora_vault);
        assert_eq!(mainnet.aurora_token, aurora_mainnet::AURORA_TOKEN_ADDRESS);
        assert_eq!(goerli.liquidity_pool, goerli::LIQUIDITY_POOL_ADDRESS);
    }

    #[test]
    fn contract_addresses_within_a_network_are_distinct() {
        for network in Network::iter() {
            let c = network.contracts();
            let set: HashSet<_> = [
                c.aurora_token,
                c.aurora_plus,
                c.staking_manager,
                c.staked_aurora_vault,
                c.liquidity_pool,
            ]
            .into_iter()
            .collect();
            assert_eq!(set.len(), 5, "{network}");
            assert_eq!(network.depositors().len(), 2);
        }
    }
}

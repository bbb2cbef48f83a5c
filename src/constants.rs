use alloy_primitives::{Address, U256, address};

// 10^18, the number of minimal units in one whole AURORA or stAUR token
pub const DECIMALS: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

pub mod goerli {
    use super::*;

    pub const AURORA_TOKEN_ADDRESS: Address = address!("0xCca0C26Be4169d7963fEC984F6EAd5F6e630B288");
    pub const AURORA_PLUS_ADDRESS: Address = address!("0x8e6aA7a602042879074334bB6c02c40A9385F522");
    pub const STAKING_MANAGER_ADDRESS: Address = address!("0x2da4A45AE7f78EABce1E3206c85383E9a98529d2");
    pub const STAKED_AURORA_VAULT_ADDRESS: Address =
        address!("0xD6a1BEB40523A91B8424C02517219875A5D95c01");
    pub const LIQUIDITY_POOL_ADDRESS: Address = address!("0x9156273eE2684BE1C9F1064cCE43f30E766c8496");

    pub const DEPOSITORS_ADDRESS: [Address; 2] = [
        address!("0xF01d1060Fe27D69D143EB237dbC8235ED3e4FA4f"),
        address!("0x0C32f3824B02EC9B82598Cfe487162463579242F"),
    ];
}

pub mod aurora_mainnet {
    use super::*;

    pub const AURORA_PLUS_ADDRESS: Address = address!("0xccc2b1aD21666A5847A804a73a41F904C4a4A0Ec");
    pub const AURORA_TOKEN_ADDRESS: Address = address!("0x8BEc47865aDe3B172A928df8f990Bc7f2A3b9f79");
    pub const LIQUIDITY_POOL_ADDRESS: Address = address!("0x2b22F6ae30DD752B5765dB5f2fE8eF5c5d2F154B");
    pub const STAKED_AURORA_VAULT_ADDRESS: Address =
        address!("0xb01d35D469703c6dc5B369A1fDfD7D6009cA397F");
    pub const STAKING_MANAGER_ADDRESS: Address = address!("0x69e3a362ffD379cB56755B142c2290AFbE5A6Cc8");

    pub const DEPOSITOR_00_ADDRESS: Address = address!("0xf56Baf1EE71fD4d6938c88E1C4bd0422ee768932");
    pub const DEPOSITOR_01_ADDRESS: Address = address!("0x7ca831De9E59D7414313a1F7a003cc7d011caFE2");
    pub const DEPOSITORS_ADDRESS: [Address; 2] = [DEPOSITOR_00_ADDRESS, DEPOSITOR_01_ADDRESS];

    // Public side of the keys in the env file, which only holds the private keys
    pub const ADMIN_ADDRESS: Address = address!("0x9DF9F65bfcF4Bc6E0C891Eed41a9766f0bf5C319");
    pub const OPERATOR_ADDRESS: Address = address!("0xd6E4be59FF015aFeFce9b9a78b1cF61be1027cF1");

    // Holds a very large AURORA balance, at least at block 92_535_477 (2023-05-22)
    pub const AURORA_WHALE_ADDRESS: Address = address!("0xb5E12B73fffD9aa5F79bDFE70D985552bb51e29f");
}

pub const ADMIN_PRIVATE_KEY_VAR: &str = "STAUR_ADMIN_PRIVATE_KEY";
pub const OPERATOR_PRIVATE_KEY_VAR: &str = "STAUR_OPERATOR_PRIVATE_KEY";

pub mod config;
pub mod constants;
pub mod errors;
pub mod network;
pub mod roles;
pub mod signers;
pub mod units;

pub use alloy_primitives::{Address, U256};

pub use config::{FixtureConfig, Secrets, load_dotenv, parse_address};
pub use errors::StaurError;
pub use network::{ContractAddresses, Network};
pub use roles::{Identity, IdentitySource, Role, RoleAssignment, bind, generate_accounts};
pub use signers::EnvSigners;

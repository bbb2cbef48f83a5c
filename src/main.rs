use std::path::PathBuf;

use clap::Parser;
use staur::{EnvSigners, FixtureConfig, Network, generate_accounts, units::format_units};
use tracing::{info, warn};
use tracing_subscriber::prelude::*;

// Avoid musl's default allocator due to degraded performance
// https://nickb.dev/blog/default-musl-allocator-considered-harmful-to-performance
#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Reports the stAUR contract addresses and signer role bindings of a deployment.
#[derive(Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Deployment to report on
    #[arg(
        long,
        env = "STAUR_NETWORK",
        help = "The network whose address set is used",
        default_value_t = Network::AuroraMainnet
    )]
    pub network: Network,

    /// Override file path
    #[arg(
        long,
        env = "STAUR_CONFIG_FILE_PATH",
        help = "The path to a YAML file overriding the built-in addresses",
        required = false
    )]
    pub config: Option<PathBuf>,

    /// Env file path
    #[arg(
        long,
        env = "STAUR_ENV_FILE",
        help = "The path to the env file holding the admin and operator private keys",
        required = false
    )]
    pub env_file: Option<PathBuf>,
}

fn init_logger() -> anyhow::Result<()> {
    let env_filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => tracing_subscriber::filter::EnvFilter::new("info"),
    };

    let registry = tracing_subscriber::Registry::default().with(env_filter);

    let format = tracing_subscriber::fmt::layer()
        .with_level(true)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false);

    let format = if std::env::var("STAUR_LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false)
    {
        format.json().boxed()
    } else {
        format.boxed()
    };

    tracing::subscriber::set_global_default(registry.with(format))?;

    Ok(())
}

#[cfg_attr(feature = "runtime-tokio", tokio::main)]
async fn main() -> anyhow::Result<()> {
    init_logger()?;

    let args = <CliArgs as clap::Parser>::parse();
    staur::load_dotenv(args.env_file.as_deref())?;
    let cfg = FixtureConfig::load(args.network, args.config.as_deref())?;

    info!(
        network = %cfg.network,
        aurora_token = %cfg.contracts.aurora_token,
        aurora_plus = %cfg.contracts.aurora_plus,
        staking_manager = %cfg.contracts.staking_manager,
        staked_aurora_vault = %cfg.contracts.staked_aurora_vault,
        liquidity_pool = %cfg.contracts.liquidity_pool,
        "Contract addresses"
    );
    info!(
        depositors = ?cfg.depositors,
        aurora_whale = ?cfg.aurora_whale,
        one_token = %format_units(cfg.decimals),
        "Fixture accounts"
    );

    let accounts = generate_accounts(&EnvSigners::new(cfg.secrets.clone()))
        .await?
        .addresses();

    for (role, address) in accounts.iter() {
        info!(%role, %address, "Role binding");
    }

    if let Some(admin) = cfg.admin
        && admin != *accounts.vault_admin()
    {
        warn!(expected = %admin, actual = %accounts.vault_admin(), "Admin key does not match the known admin address");
    }
    if let Some(operator) = cfg.operator
        && operator != *accounts.vault_operator()
    {
        warn!(expected = %operator, actual = %accounts.vault_operator(), "Operator key does not match the known operator address");
    }

    Ok(())
}

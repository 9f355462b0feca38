//! Query fee shares of juno mainnet through the cosmos.directory REST proxy.
//!
//! ```text
//! cargo run --example juno_feeshare -- --contract-address juno1...
//! ```

use clap::Parser;
use juno_feeshare_client::{AnyResult, FeeShareClient, NetworkConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Args {
    /// feeshare contract address
    #[arg(long)]
    contract_address: Option<String>,
    /// feeshare withdrawer address
    #[arg(long)]
    withdrawer_address: Option<String>,
    /// feeshare deployer address
    #[arg(long)]
    deployer_address: Option<String>,
}

#[tokio::main]
async fn main() -> AnyResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let client = FeeShareClient::new(Some(NetworkConfig::cosmos_directory_juno_mainnet())).await?;

    if let Some(contract_address) = &args.contract_address {
        println!(
            "feeshare: {:?}",
            client.query_fee_share_by_contract(contract_address).await?
        );
    }

    if let Some(withdrawer_address) = &args.withdrawer_address {
        let contracts = client
            .query_fee_shares_by_withdrawer(withdrawer_address)
            .await?;
        println!("contract_addresses: {contracts:?}");
    }

    if let Some(deployer_address) = &args.deployer_address {
        let contracts = client.query_fee_shares_by_deployer(deployer_address).await?;
        println!("contract_addresses: {contracts:?}");
    }

    if args.contract_address.is_none()
        && args.withdrawer_address.is_none()
        && args.deployer_address.is_none()
    {
        println!("feeshares: {:#?}", client.query_all_fee_shares().await?);
    }

    Ok(())
}

use std::{path::PathBuf, time::Duration};

use cosmwasm_std::Decimal;
use serde::{Deserialize, Serialize};

use crate::definitions::{
    BroadcastMode, COSMOS_DIRECTORY_JUNO_REST, DEFAULT_QUERY_INTERVAL_SECS,
    DEFAULT_QUERY_TIMEOUT_SECS, JUNO_DENOM, JUNO_GRPC_MAINNET, JUNO_GRPC_TESTNET,
    JUNO_LOCAL_CHAIN_ID, JUNO_MAINNET_CHAIN_ID, JUNO_PREFIX, JUNO_TESTNET_CHAIN_ID,
    JUNO_TESTNET_DENOM, LOCAL_NODE_GRPC,
};

/// Chain the client talks to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub chain_id: String,
    /// Node endpoint, see [`crate::parse_url`].
    pub url: String,
    pub fee_minimum_gas_price: Decimal,
    pub fee_denomination: String,
    pub address_prefix: String,
}

impl NetworkConfig {
    pub fn juno_mainnet() -> Self {
        NetworkConfig {
            chain_id: JUNO_MAINNET_CHAIN_ID.to_string(),
            url: JUNO_GRPC_MAINNET.to_string(),
            fee_minimum_gas_price: Decimal::permille(75),
            fee_denomination: JUNO_DENOM.to_string(),
            address_prefix: JUNO_PREFIX.to_string(),
        }
    }

    pub fn juno_testnet() -> Self {
        NetworkConfig {
            chain_id: JUNO_TESTNET_CHAIN_ID.to_string(),
            url: JUNO_GRPC_TESTNET.to_string(),
            fee_minimum_gas_price: Decimal::permille(25),
            fee_denomination: JUNO_TESTNET_DENOM.to_string(),
            address_prefix: JUNO_PREFIX.to_string(),
        }
    }

    /// Juno mainnet through the cosmos.directory REST proxy.
    pub fn cosmos_directory_juno_mainnet() -> Self {
        NetworkConfig {
            url: COSMOS_DIRECTORY_JUNO_REST.to_string(),
            ..Self::juno_mainnet()
        }
    }

    pub fn juno_local() -> Self {
        NetworkConfig {
            chain_id: JUNO_LOCAL_CHAIN_ID.to_string(),
            url: LOCAL_NODE_GRPC.to_string(),
            fee_minimum_gas_price: Decimal::permille(25),
            fee_denomination: JUNO_DENOM.to_string(),
            address_prefix: JUNO_PREFIX.to_string(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::juno_mainnet()
    }
}

/// Client side settings shared by the query router and the tx pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Delay between two polls while waiting for a tx.
    pub query_interval: Duration,
    /// Transport deadline of a single request, and the overall limit when waiting for a tx.
    pub query_timeout: Duration,
    /// Multiplier applied to the simulated gas.
    pub gas_adjustment: Decimal,
    pub broadcast_mode: BroadcastMode,
    /// PEM bundle trusted by secure gRPC channels on top of the platform roots.
    pub ca_bundle: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            query_interval: Duration::from_secs(DEFAULT_QUERY_INTERVAL_SECS),
            query_timeout: Duration::from_secs(DEFAULT_QUERY_TIMEOUT_SECS),
            gas_adjustment: Decimal::percent(150),
            broadcast_mode: BroadcastMode::Sync,
            ca_bundle: None,
        }
    }
}

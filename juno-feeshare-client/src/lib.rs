mod client;
mod config;
mod definitions;
mod errors;
mod math;
mod msgs;
pub mod proto;
pub mod query;
mod rest_client;
mod traits;
pub mod tx;
mod urls;
mod wallet;

pub use {
    crate::client::{FeeShare, FeeShareClient},
    crate::config::{ClientConfig, NetworkConfig},
    crate::definitions::{
        BroadcastMode, COSMOS_COIN_TYPE, DEFAULT_QUERY_INTERVAL_SECS, DEFAULT_QUERY_TIMEOUT_SECS,
        JUNO_PREFIX,
    },
    crate::errors::{BroadcastError, FeeShareError, FeeShareResult, TransportError},
    crate::msgs::{
        create_cancel_feeshare_msg, create_register_feeshare_msg, create_update_feeshare_msg,
        Transaction,
    },
    crate::rest_client::{HttpRestClient, RestClient, RestResponse},
    crate::urls::{parse_url, ParsedUrl, Protocol},
    crate::wallet::{TxSigner, Wallet},
    anyhow::Result as AnyResult,
    cosmos_sdk_proto, cosmrs,
    cosmwasm_std::Decimal,
    traits::*,
};

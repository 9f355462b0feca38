use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    config::{ClientConfig, NetworkConfig},
    errors::BroadcastError,
    msgs::{
        create_cancel_feeshare_msg, create_register_feeshare_msg, create_update_feeshare_msg,
        Transaction,
    },
    proto::{
        next_page, FeeShare as ProtoFeeShare, Params, QueryDeployerFeeSharesRequest,
        QueryFeeShareRequest, QueryFeeSharesRequest, QueryParamsRequest,
        QueryWithdrawerFeeSharesRequest,
    },
    query::{build_channel, FeeShareQueryPort, GrpcFeeShareQueryClient, RestFeeShareQueryClient},
    rest_client::HttpRestClient,
    tx::{
        BasicTxPipeline, GrpcChainTransport, RestChainTransport, SubmittedTx, TxPipeline,
        TxResult,
    },
    urls::{parse_url, Protocol},
    wallet::TxSigner,
    FeeShareResult,
};

/// Fee share registration of a contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeShare {
    pub contract_address: String,
    pub deployer_address: String,
    pub withdrawer_address: String,
}

impl From<ProtoFeeShare> for FeeShare {
    fn from(fee_share: ProtoFeeShare) -> Self {
        FeeShare {
            contract_address: fee_share.contract_address,
            deployer_address: fee_share.deployer_address,
            withdrawer_address: fee_share.withdrawer_address,
        }
    }
}

/// Juno client for the feeshare module.
///
/// Reads go through a [`FeeShareQueryPort`] picked from the node url, writes
/// are handed to a [`TxPipeline`] over the same transport.
pub struct FeeShareClient {
    pub network: NetworkConfig,
    pub config: ClientConfig,
    fee_share: Box<dyn FeeShareQueryPort>,
    pipeline: Box<dyn TxPipeline>,
}

impl FeeShareClient {
    /// Client for `network`, juno mainnet when `None`.
    pub async fn new(network: Option<NetworkConfig>) -> FeeShareResult<FeeShareClient> {
        Self::with_config(network, ClientConfig::default()).await
    }

    pub async fn with_config(
        network: Option<NetworkConfig>,
        config: ClientConfig,
    ) -> FeeShareResult<FeeShareClient> {
        let network = network.unwrap_or_else(NetworkConfig::juno_mainnet);
        let url = parse_url(&network.url)?;

        let (fee_share, pipeline): (Box<dyn FeeShareQueryPort>, Box<dyn TxPipeline>) =
            match url.protocol() {
                Protocol::Grpc => {
                    let channel = build_channel(&url, &config).await?;
                    (
                        Box::new(GrpcFeeShareQueryClient::new(channel.clone())),
                        Box::new(BasicTxPipeline::new(
                            GrpcChainTransport::new(channel),
                            network.clone(),
                            config.clone(),
                        )),
                    )
                }
                Protocol::Rest => {
                    let rest = HttpRestClient::new(url.rest_url(), config.query_timeout)?;
                    (
                        Box::new(RestFeeShareQueryClient::new(rest.clone())),
                        Box::new(BasicTxPipeline::new(
                            RestChainTransport::new(rest),
                            network.clone(),
                            config.clone(),
                        )),
                    )
                }
            };

        info!(
            chain_id = %network.chain_id,
            url = %network.url,
            protocol = ?url.protocol(),
            "feeshare client"
        );

        Ok(Self::from_parts(network, config, fee_share, pipeline))
    }

    pub fn from_parts(
        network: NetworkConfig,
        config: ClientConfig,
        fee_share: Box<dyn FeeShareQueryPort>,
        pipeline: Box<dyn TxPipeline>,
    ) -> FeeShareClient {
        FeeShareClient {
            network,
            config,
            fee_share,
            pipeline,
        }
    }

    /// Typed access to the query router.
    pub fn fee_share(&self) -> &dyn FeeShareQueryPort {
        self.fee_share.as_ref()
    }

    /// `None` when no fee share is registered for the contract.
    pub async fn query_fee_share_by_contract(
        &self,
        contract_address: impl Into<String>,
    ) -> FeeShareResult<Option<FeeShare>> {
        let res = self
            .fee_share
            .fee_share(QueryFeeShareRequest {
                contract_address: contract_address.into(),
            })
            .await?;

        Ok(res.feeshare.map(FeeShare::from))
    }

    pub async fn query_all_fee_shares(&self) -> FeeShareResult<Vec<FeeShare>> {
        let mut pagination = None;
        let mut fee_shares: Vec<FeeShare> = vec![];
        let mut finish = false;

        while !finish {
            let res = self
                .fee_share
                .fee_shares(QueryFeeSharesRequest { pagination })
                .await?;

            fee_shares.extend(res.feeshare.into_iter().map(FeeShare::from));

            pagination = next_page(res.pagination);
            finish = pagination.is_none();
        }

        Ok(fee_shares)
    }

    /// Contracts deployed by `deployer_address` that have a fee share.
    pub async fn query_fee_shares_by_deployer(
        &self,
        deployer_address: impl Into<String>,
    ) -> FeeShareResult<Vec<String>> {
        let deployer_address = deployer_address.into();
        let mut pagination = None;
        let mut contracts: Vec<String> = vec![];
        let mut finish = false;

        while !finish {
            let mut res = self
                .fee_share
                .deployer_fee_shares(QueryDeployerFeeSharesRequest {
                    deployer_address: deployer_address.clone(),
                    pagination,
                })
                .await?;

            contracts.append(&mut res.contract_addresses);

            pagination = next_page(res.pagination);
            finish = pagination.is_none();
        }

        Ok(contracts)
    }

    /// Contracts whose fees are withdrawn by `withdrawer_address`.
    pub async fn query_fee_shares_by_withdrawer(
        &self,
        withdrawer_address: impl Into<String>,
    ) -> FeeShareResult<Vec<String>> {
        let withdrawer_address = withdrawer_address.into();
        let mut pagination = None;
        let mut contracts: Vec<String> = vec![];
        let mut finish = false;

        while !finish {
            let mut res = self
                .fee_share
                .withdrawer_fee_shares(QueryWithdrawerFeeSharesRequest {
                    withdrawer_address: withdrawer_address.clone(),
                    pagination,
                })
                .await?;

            contracts.append(&mut res.contract_addresses);

            pagination = next_page(res.pagination);
            finish = pagination.is_none();
        }

        Ok(contracts)
    }

    pub async fn query_fee_share_params(&self) -> FeeShareResult<Params> {
        Ok(self
            .fee_share
            .params(QueryParamsRequest {})
            .await?
            .params
            .unwrap_or_default())
    }

    /// Module params as plain JSON.
    pub async fn query_fee_share_params_json(&self) -> FeeShareResult<serde_json::Value> {
        Ok(serde_json::to_value(self.query_fee_share_params().await?)?)
    }

    pub async fn register_fee_share(
        &self,
        contract_address: impl Into<String>,
        withdrawer_address: impl Into<String>,
        sender: &dyn TxSigner,
        memo: Option<String>,
        gas_limit: Option<u64>,
    ) -> FeeShareResult<SubmittedTx> {
        let mut tx = Transaction::new();
        tx.add_message(create_register_feeshare_msg(
            sender.address().map_err(BroadcastError::Signing)?,
            contract_address,
            withdrawer_address,
        ));

        self.pipeline
            .prepare_and_broadcast(tx, sender, gas_limit, memo)
            .await
    }

    pub async fn update_fee_share(
        &self,
        contract_address: impl Into<String>,
        withdrawer_address: impl Into<String>,
        sender: &dyn TxSigner,
        memo: Option<String>,
        gas_limit: Option<u64>,
    ) -> FeeShareResult<SubmittedTx> {
        let mut tx = Transaction::new();
        tx.add_message(create_update_feeshare_msg(
            sender.address().map_err(BroadcastError::Signing)?,
            contract_address,
            withdrawer_address,
        ));

        self.pipeline
            .prepare_and_broadcast(tx, sender, gas_limit, memo)
            .await
    }

    pub async fn cancel_fee_share(
        &self,
        contract_address: impl Into<String>,
        sender: &dyn TxSigner,
        memo: Option<String>,
        gas_limit: Option<u64>,
    ) -> FeeShareResult<SubmittedTx> {
        let mut tx = Transaction::new();
        tx.add_message(create_cancel_feeshare_msg(
            sender.address().map_err(BroadcastError::Signing)?,
            contract_address,
        ));

        self.pipeline
            .prepare_and_broadcast(tx, sender, gas_limit, memo)
            .await
    }

    pub async fn wait_for_tx(&self, hash: &str) -> FeeShareResult<TxResult> {
        self.pipeline.wait_for_tx(hash).await
    }
}

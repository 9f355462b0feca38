use async_trait::async_trait;
use cosmos_sdk_proto::cosmos::{
    auth::v1beta1::{query_client::QueryClient as AuthClient, BaseAccount, QueryAccountRequest},
    base::abci::v1beta1::TxResponse,
    tx::v1beta1::{
        service_client::ServiceClient as TxClient, BroadcastTxRequest, GetTxRequest,
        SimulateRequest,
    },
};
use prost::Message;
use tonic::{transport::Channel, Code};

use crate::{definitions::BroadcastMode, errors::FeeShareError, FeeShareResult};

use super::{ChainTransport, TxResult};

const BASE_ACCOUNT_TYPE_URL: &str = "/cosmos.auth.v1beta1.BaseAccount";

#[derive(Clone)]
pub struct GrpcChainTransport {
    auth: AuthClient<Channel>,
    tx: TxClient<Channel>,
}

impl GrpcChainTransport {
    pub fn new(channel: Channel) -> Self {
        Self {
            auth: AuthClient::new(channel.clone()),
            tx: TxClient::new(channel),
        }
    }
}

impl From<TxResponse> for TxResult {
    fn from(res: TxResponse) -> Self {
        TxResult {
            hash: res.txhash,
            height: res.height.max(0) as u64,
            code: res.code,
            raw_log: res.raw_log,
            gas_wanted: res.gas_wanted.max(0) as u64,
            gas_used: res.gas_used.max(0) as u64,
        }
    }
}

#[async_trait]
impl ChainTransport for GrpcChainTransport {
    async fn account(&self, address: &str) -> FeeShareResult<(u64, u64)> {
        let res = self
            .auth
            .clone()
            .account(QueryAccountRequest {
                address: address.to_string(),
            })
            .await;

        let account = match res {
            Ok(res) => res
                .into_inner()
                .account
                .ok_or_else(|| FeeShareError::Decode("no account in response".to_string()))?,
            Err(status) if status.code() == Code::NotFound => return Ok((0, 0)),
            Err(status) => return Err(status.into()),
        };

        if account.type_url != BASE_ACCOUNT_TYPE_URL {
            return Err(FeeShareError::Decode(format!(
                "unsupported account type {}",
                account.type_url
            )));
        }

        let account = BaseAccount::decode(account.value.as_slice())?;

        Ok((account.account_number, account.sequence))
    }

    #[allow(deprecated)]
    async fn simulate(&self, tx_bytes: Vec<u8>) -> FeeShareResult<u64> {
        let res = self
            .tx
            .clone()
            .simulate(SimulateRequest { tx: None, tx_bytes })
            .await?
            .into_inner();

        Ok(res
            .gas_info
            .ok_or_else(|| FeeShareError::Decode("no gas info in response".to_string()))?
            .gas_used)
    }

    async fn broadcast(&self, tx_bytes: Vec<u8>, mode: BroadcastMode) -> FeeShareResult<TxResult> {
        let res = self
            .tx
            .clone()
            .broadcast_tx(BroadcastTxRequest {
                tx_bytes,
                mode: mode.repr(),
            })
            .await?
            .into_inner();

        res.tx_response
            .map(TxResult::from)
            .ok_or_else(|| FeeShareError::Decode("no tx response in broadcast result".to_string()))
    }

    async fn get_tx(&self, hash: &str) -> FeeShareResult<Option<TxResult>> {
        match self
            .tx
            .clone()
            .get_tx(GetTxRequest {
                hash: hash.to_string(),
            })
            .await
        {
            Ok(res) => Ok(res.into_inner().tx_response.map(TxResult::from)),
            Err(status) if status.code() == Code::NotFound => Ok(None),
            Err(status) => Err(status.into()),
        }
    }
}

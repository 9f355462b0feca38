use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::{
    definitions::{rest_paths, BroadcastMode},
    errors::FeeShareError,
    proto::serde_helpers::u64_string,
    rest_client::{HttpRestClient, RestClient},
    FeeShareResult,
};

use super::{ChainTransport, TxResult};

const BASE_ACCOUNT_TYPE_URL: &str = "/cosmos.auth.v1beta1.BaseAccount";

#[derive(Deserialize)]
struct AccountResponse {
    account: RestAccount,
}

#[derive(Deserialize)]
struct RestAccount {
    #[serde(rename = "@type")]
    type_url: String,
    #[serde(default, with = "u64_string")]
    account_number: u64,
    #[serde(default, with = "u64_string")]
    sequence: u64,
}

#[derive(Deserialize)]
struct SimulateResponse {
    gas_info: Option<GasInfo>,
}

#[derive(Deserialize)]
struct GasInfo {
    #[serde(default, with = "u64_string")]
    gas_used: u64,
}

#[derive(Deserialize)]
struct TxResponseEnvelope {
    tx_response: Option<TxResult>,
}

fn encode_tx(tx_bytes: &[u8]) -> String {
    String::from_utf8_lossy(&subtle_encoding::base64::encode(tx_bytes)).into_owned()
}

pub struct RestChainTransport<C = HttpRestClient> {
    rest: C,
}

impl<C: RestClient> RestChainTransport<C> {
    pub fn new(rest: C) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl<C: RestClient> ChainTransport for RestChainTransport<C> {
    async fn account(&self, address: &str) -> FeeShareResult<(u64, u64)> {
        let res = self
            .rest
            .get(&format!("{}/{address}", rest_paths::AUTH_ACCOUNTS), &[])
            .await?;

        if res.is_not_found() {
            return Ok((0, 0));
        }

        let AccountResponse { account } = res.json()?;

        if account.type_url != BASE_ACCOUNT_TYPE_URL {
            return Err(FeeShareError::Decode(format!(
                "unsupported account type {}",
                account.type_url
            )));
        }

        Ok((account.account_number, account.sequence))
    }

    async fn simulate(&self, tx_bytes: Vec<u8>) -> FeeShareResult<u64> {
        let res: SimulateResponse = self
            .rest
            .post(
                rest_paths::TX_SIMULATE,
                &json!({ "tx_bytes": encode_tx(&tx_bytes) }),
            )
            .await?
            .json()?;

        Ok(res
            .gas_info
            .ok_or_else(|| FeeShareError::Decode("no gas info in response".to_string()))?
            .gas_used)
    }

    async fn broadcast(&self, tx_bytes: Vec<u8>, mode: BroadcastMode) -> FeeShareResult<TxResult> {
        let res: TxResponseEnvelope = self
            .rest
            .post(
                rest_paths::TXS,
                &json!({ "tx_bytes": encode_tx(&tx_bytes), "mode": mode.as_rest_str() }),
            )
            .await?
            .json()?;

        res.tx_response
            .ok_or_else(|| FeeShareError::Decode("no tx response in broadcast result".to_string()))
    }

    async fn get_tx(&self, hash: &str) -> FeeShareResult<Option<TxResult>> {
        let res = self
            .rest
            .get(&format!("{}/{hash}", rest_paths::TXS), &[])
            .await?;

        if res.is_not_found() {
            return Ok(None);
        }

        let res: TxResponseEnvelope = res.json()?;

        Ok(res.tx_response)
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use mockito::{Matcher, Server};

    use super::*;

    fn transport(server: &Server) -> RestChainTransport {
        RestChainTransport::new(HttpRestClient::new(server.url(), Duration::from_secs(5)).unwrap())
    }

    #[tokio::test]
    async fn account_lookup() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/cosmos/auth/v1beta1/accounts/juno1known")
            .with_status(200)
            .with_body(
                r#"{"account": {
                    "@type": "/cosmos.auth.v1beta1.BaseAccount",
                    "address": "juno1known",
                    "pub_key": null,
                    "account_number": "1234",
                    "sequence": "7"
                }}"#,
            )
            .create_async()
            .await;
        let _m = server
            .mock("GET", "/cosmos/auth/v1beta1/accounts/juno1unknown")
            .with_status(404)
            .with_body(r#"{"code": 5, "message": "account not found"}"#)
            .create_async()
            .await;

        let transport = transport(&server);

        assert_eq!(transport.account("juno1known").await.unwrap(), (1234, 7));
        assert_eq!(transport.account("juno1unknown").await.unwrap(), (0, 0));
    }

    #[tokio::test]
    async fn simulate_and_broadcast() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/cosmos/tx/v1beta1/simulate")
            .match_body(Matcher::Json(json!({"tx_bytes": "AQI="})))
            .with_status(200)
            .with_body(r#"{"gas_info": {"gas_wanted": "0", "gas_used": "81234"}, "result": {}}"#)
            .create_async()
            .await;
        let _m = server
            .mock("POST", "/cosmos/tx/v1beta1/txs")
            .match_body(Matcher::Json(
                json!({"tx_bytes": "AQI=", "mode": "BROADCAST_MODE_SYNC"}),
            ))
            .with_status(200)
            .with_body(
                r#"{"tx_response": {"height": "0", "txhash": "ABCD", "code": 0, "raw_log": "[]", "gas_wanted": "0", "gas_used": "0"}}"#,
            )
            .create_async()
            .await;

        let transport = transport(&server);

        assert_eq!(transport.simulate(vec![1, 2]).await.unwrap(), 81234);

        let res = transport
            .broadcast(vec![1, 2], BroadcastMode::Sync)
            .await
            .unwrap();
        assert_eq!(res.hash, "ABCD");
        assert!(res.is_ok());
    }

    #[tokio::test]
    async fn get_tx_pending_and_included() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/cosmos/tx/v1beta1/txs/PENDING")
            .with_status(404)
            .with_body(r#"{"code": 5, "message": "tx not found"}"#)
            .create_async()
            .await;
        let _m = server
            .mock("GET", "/cosmos/tx/v1beta1/txs/ABCD")
            .with_status(200)
            .with_body(
                r#"{"tx": {}, "tx_response": {"height": "9001", "txhash": "ABCD", "code": 0, "gas_used": "90000"}}"#,
            )
            .create_async()
            .await;

        let transport = transport(&server);

        assert_eq!(transport.get_tx("PENDING").await.unwrap(), None);

        let res = transport.get_tx("ABCD").await.unwrap().unwrap();
        assert_eq!(res.height, 9001);
        assert_eq!(res.gas_used, 90000);
    }
}
